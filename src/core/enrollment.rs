use crate::domain::course::{Course, CourseId};
use crate::domain::student::Student;
use std::fmt;

/// Outcome of an enrollment request. Failures here are ordinary values the
/// caller branches on, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    Enrolled,
    /// Prerequisites missing from the student's transcript, sorted by id.
    MissingPrerequisites(Vec<CourseId>),
    CourseFull,
}

impl EnrollmentOutcome {
    pub fn is_enrolled(&self) -> bool {
        matches!(self, EnrollmentOutcome::Enrolled)
    }
}

impl fmt::Display for EnrollmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrollmentOutcome::Enrolled => write!(f, "enrolled"),
            EnrollmentOutcome::MissingPrerequisites(missing) => {
                write!(f, "missing prerequisites: {}", missing.join(", "))
            }
            EnrollmentOutcome::CourseFull => write!(f, "course is full"),
        }
    }
}

/// Enrolls `student` into `course`.
///
/// Prerequisites are checked before capacity, and the order matters: a
/// student missing prerequisites is rejected even if seats remain, with a
/// different reason than a full course. On success the roster and the
/// transcript are updated together; on any failure neither is touched.
pub fn enroll(student: &mut Student, course: &mut Course) -> EnrollmentOutcome {
    tracing::debug!(
        "Enrollment check: {} into {} ({} prerequisites)",
        student.id(),
        course.id(),
        course.prerequisites().len()
    );

    let completed = student.transcript().course_ids();
    let missing: Vec<CourseId> = course
        .prerequisites()
        .iter()
        .filter(|id| !completed.contains(*id))
        .cloned()
        .collect();
    if !missing.is_empty() {
        println!(
            "Enrollment failed: Missing prerequisites for {}: {}",
            course.name(),
            missing.join(", ")
        );
        return EnrollmentOutcome::MissingPrerequisites(missing);
    }

    if !course.try_add_student(student.id()) {
        println!("Enrollment failed: {} is full.", course.name());
        return EnrollmentOutcome::CourseFull;
    }

    let course_id = course.id().to_string();
    student.transcript_mut().record_enrollment(course_id);
    println!("{} enrolled in {}.", student.name(), course.name());
    EnrollmentOutcome::Enrolled
}

/// Drops `course` from the student's transcript and frees the seat.
/// Dropping a course the student never enrolled in is a silent no-op;
/// true means a drop actually happened.
pub fn drop_course(student: &mut Student, course: &mut Course) -> bool {
    if !student.transcript().has_course(course.id()) {
        tracing::debug!("Drop skipped: {} is not in {}", student.id(), course.id());
        return false;
    }
    course.remove_student(student.id());
    student.transcript_mut().remove(course.id());
    println!("{} dropped {}.", student.name(), course.name());
    true
}
