// Domain layer: campus records and the people who hold them. Plain data
// with bounded mutation; the enrollment rules live in core.

pub mod course;
pub mod department;
pub mod people;
pub mod student;
