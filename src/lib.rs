pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::campus::CampusConfig;
pub use crate::core::enrollment::{drop_course, enroll, EnrollmentOutcome};
pub use crate::core::evaluator::{academic_standing, compute_gpa, AcademicStanding};
pub use crate::core::secure_record::SecureStudentRecord;
pub use crate::domain::course::Course;
pub use crate::domain::department::Department;
pub use crate::domain::people::{CampusMember, Faculty, Person, Responsibilities, Staff};
pub use crate::domain::student::{Grade, Student, StudentLevel, Transcript};
pub use crate::utils::error::{RegistrarError, Result};
