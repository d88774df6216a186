use crate::domain::student::{Grade, Transcript};
use serde::Serialize;
use std::fmt;

/// Every course carries the same weight on the transcript.
pub const COURSE_WEIGHT: f64 = 3.0;
/// GPA at or above this earns Dean's List.
pub const DEANS_LIST_GPA: f64 = 3.5;
/// GPA at or above this keeps a student in good standing.
pub const GOOD_STANDING_GPA: f64 = 2.0;

/// Academic standing derived from GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AcademicStanding {
    DeansList,
    GoodStanding,
    Probation,
}

impl fmt::Display for AcademicStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcademicStanding::DeansList => write!(f, "Dean's List"),
            AcademicStanding::GoodStanding => write!(f, "Good Standing"),
            AcademicStanding::Probation => write!(f, "Probation"),
        }
    }
}

/// Quality points on the 4.0 scale. Letters outside the scale
/// (incomplete, withdrawn) carry none and stay out of the GPA.
fn grade_points(grade: Grade) -> Option<f64> {
    match grade {
        Grade::A => Some(4.0),
        Grade::B => Some(3.0),
        Grade::C => Some(2.0),
        Grade::D => Some(1.0),
        Grade::F => Some(0.0),
        Grade::Incomplete | Grade::Withdrawn => None,
    }
}

/// Computes the GPA over the graded portion of a transcript.
///
/// Ungraded enrollments are skipped entirely. With no graded courses the
/// GPA is 0.0 rather than undefined. The result is rounded to two
/// decimals, half away from zero.
pub fn compute_gpa(transcript: &Transcript) -> f64 {
    let mut total_points = 0.0;
    let mut total_weight = 0.0;

    for (_, grade) in transcript.entries() {
        if let Some(points) = grade.and_then(grade_points) {
            total_points += points * COURSE_WEIGHT;
            total_weight += COURSE_WEIGHT;
        }
    }

    if total_weight == 0.0 {
        return 0.0;
    }

    round_two(total_points / total_weight)
}

/// Classifies a GPA value. Thresholds are inclusive at the top of each band.
pub fn standing_for_gpa(gpa: f64) -> AcademicStanding {
    if gpa >= DEANS_LIST_GPA {
        AcademicStanding::DeansList
    } else if gpa >= GOOD_STANDING_GPA {
        AcademicStanding::GoodStanding
    } else {
        AcademicStanding::Probation
    }
}

/// Standing from a fresh GPA computation, never from a stale value.
pub fn academic_standing(transcript: &Transcript) -> AcademicStanding {
    standing_for_gpa(compute_gpa(transcript))
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript_with(grades: &[(&str, Grade)]) -> Transcript {
        let mut transcript = Transcript::default();
        for (course_id, grade) in grades {
            transcript.record_enrollment(course_id.to_string());
            transcript.assign_grade(course_id, *grade);
        }
        transcript
    }

    #[test]
    fn test_empty_transcript_has_zero_gpa() {
        let transcript = Transcript::default();
        assert_eq!(compute_gpa(&transcript), 0.0);
    }

    #[test]
    fn test_ungraded_courses_do_not_count() {
        let mut transcript = Transcript::default();
        transcript.record_enrollment("CS101".to_string());
        transcript.record_enrollment("CS201".to_string());
        assert_eq!(compute_gpa(&transcript), 0.0);
    }

    #[test]
    fn test_gpa_over_mixed_grades() {
        let transcript = transcript_with(&[
            ("CS101", Grade::A),
            ("CS201", Grade::B),
            ("MATH101", Grade::C),
        ]);
        assert_eq!(compute_gpa(&transcript), 3.0);
    }

    #[test]
    fn test_gpa_rounds_to_two_decimals() {
        // (4.0 + 4.0 + 3.0) / 3 = 3.666...
        let transcript = transcript_with(&[
            ("CS101", Grade::A),
            ("CS201", Grade::A),
            ("MATH101", Grade::B),
        ]);
        assert_eq!(compute_gpa(&transcript), 3.67);
    }

    #[test]
    fn test_gpa_rounds_half_away_from_zero() {
        // 25.0 / 8 = 3.125, which rounds up to 3.13.
        let transcript = transcript_with(&[
            ("C1", Grade::A),
            ("C2", Grade::A),
            ("C3", Grade::A),
            ("C4", Grade::A),
            ("C5", Grade::B),
            ("C6", Grade::B),
            ("C7", Grade::C),
            ("C8", Grade::D),
        ]);
        assert_eq!(compute_gpa(&transcript), 3.13);
    }

    #[test]
    fn test_all_failing_grades_give_zero() {
        let transcript = transcript_with(&[("CS101", Grade::F), ("CS201", Grade::F)]);
        assert_eq!(compute_gpa(&transcript), 0.0);
    }

    #[test]
    fn test_low_passing_grades() {
        let transcript = transcript_with(&[("CS101", Grade::D), ("CS201", Grade::F)]);
        assert_eq!(compute_gpa(&transcript), 0.5);
    }

    #[test]
    fn test_incomplete_and_withdrawn_excluded() {
        let transcript = transcript_with(&[
            ("CS101", Grade::A),
            ("CS201", Grade::Incomplete),
            ("MATH101", Grade::Withdrawn),
        ]);
        assert_eq!(compute_gpa(&transcript), 4.0);
    }

    #[test]
    fn test_only_ungradable_letters_give_zero() {
        let transcript = transcript_with(&[("CS101", Grade::Withdrawn)]);
        assert_eq!(compute_gpa(&transcript), 0.0);
    }

    #[test]
    fn test_standing_thresholds() {
        assert_eq!(standing_for_gpa(4.0), AcademicStanding::DeansList);
        assert_eq!(standing_for_gpa(3.5), AcademicStanding::DeansList);
        assert_eq!(standing_for_gpa(3.49), AcademicStanding::GoodStanding);
        assert_eq!(standing_for_gpa(2.0), AcademicStanding::GoodStanding);
        assert_eq!(standing_for_gpa(1.99), AcademicStanding::Probation);
        assert_eq!(standing_for_gpa(0.0), AcademicStanding::Probation);
    }

    #[test]
    fn test_standing_reflects_latest_grades() {
        let mut transcript = transcript_with(&[("CS101", Grade::F)]);
        assert_eq!(academic_standing(&transcript), AcademicStanding::Probation);

        // A regrade moves the standing without any cached value in the way.
        transcript.assign_grade("CS101", Grade::A);
        assert_eq!(academic_standing(&transcript), AcademicStanding::DeansList);
    }

    #[test]
    fn test_empty_transcript_is_probation() {
        assert_eq!(
            academic_standing(&Transcript::default()),
            AcademicStanding::Probation
        );
    }

    #[test]
    fn test_standing_display() {
        assert_eq!(AcademicStanding::DeansList.to_string(), "Dean's List");
        assert_eq!(AcademicStanding::GoodStanding.to_string(), "Good Standing");
        assert_eq!(AcademicStanding::Probation.to_string(), "Probation");
    }
}
