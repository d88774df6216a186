pub mod enrollment;
pub mod evaluator;
pub mod secure_record;
