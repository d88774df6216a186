use crate::domain::student::Student;
use crate::utils::error::Result;
use crate::utils::validation::validate_range;

pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;
/// Courses a student may hold at once.
pub const ENROLLMENT_LIMIT: usize = 5;

/// Guarded view over a student's record. The stored GPA can only change
/// through [`set_gpa`](SecureStudentRecord::set_gpa), which enforces the
/// 0.0 to 4.0 scale; a rejected write leaves the previous value in place.
#[derive(Debug)]
pub struct SecureStudentRecord<'a> {
    student: &'a Student,
    gpa: f64,
    enrollment_limit: usize,
}

impl<'a> SecureStudentRecord<'a> {
    /// Builds a record for `student`. The initial GPA passes through the
    /// same validation as any later write.
    pub fn new(student: &'a Student, initial_gpa: f64) -> Result<Self> {
        let mut record = SecureStudentRecord {
            student,
            gpa: 0.0,
            enrollment_limit: ENROLLMENT_LIMIT,
        };
        record.set_gpa(initial_gpa)?;
        Ok(record)
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Stores a new GPA after range validation.
    pub fn set_gpa(&mut self, new_gpa: f64) -> Result<()> {
        validate_range("gpa", new_gpa, GPA_MIN, GPA_MAX)?;
        self.gpa = new_gpa;
        Ok(())
    }

    /// Whether the student has room for another course under the
    /// enrollment ceiling.
    pub fn can_enroll_more(&self) -> bool {
        self.student.transcript().course_count() < self.enrollment_limit
    }

    pub fn student_name(&self) -> &str {
        self.student.name()
    }
}
