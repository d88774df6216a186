use crate::domain::course::CourseId;
use crate::domain::people::{Person, Responsibilities, BASE_RESPONSIBILITY};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Letter grade recorded on a transcript. `Incomplete` and `Withdrawn`
/// carry no quality points and never enter the GPA average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    Incomplete,
    Withdrawn,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::Incomplete => "I",
            Grade::Withdrawn => "W",
        };
        write!(f, "{}", letter)
    }
}

#[derive(Debug, Clone, Serialize)]
pub enum StudentLevel {
    Undergraduate { year_level: u8 },
    Graduate { advisor: String },
}

/// Per-student map from course id to grade. A present key means currently
/// or previously enrolled; `None` means enrolled but not yet graded.
/// Dropping removes the key entirely, so no history is retained.
///
/// Keys are inserted and removed only by `core::enrollment`; grade values
/// are overwritten only through `Student::assign_grade`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    courses: BTreeMap<CourseId, Option<Grade>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of every course on the transcript. Presence alone satisfies a
    /// prerequisite; an ungraded course counts.
    pub fn course_ids(&self) -> BTreeSet<CourseId> {
        self.courses.keys().cloned().collect()
    }

    pub fn has_course(&self, course_id: &str) -> bool {
        self.courses.contains_key(course_id)
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// `Some(None)` means enrolled with the grade still pending.
    pub fn get(&self, course_id: &str) -> Option<Option<Grade>> {
        self.courses.get(course_id).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&CourseId, Option<Grade>)> + '_ {
        self.courses.iter().map(|(id, grade)| (id, *grade))
    }

    /// Overwrites the grade for a course already on the transcript. Returns
    /// false without mutating for an unknown course id.
    pub fn assign_grade(&mut self, course_id: &str, grade: Grade) -> bool {
        match self.courses.get_mut(course_id) {
            Some(slot) => {
                *slot = Some(grade);
                true
            }
            None => false,
        }
    }

    pub(crate) fn record_enrollment(&mut self, course_id: CourseId) {
        self.courses.insert(course_id, None);
    }

    pub(crate) fn remove(&mut self, course_id: &str) -> bool {
        self.courses.remove(course_id).is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub person: Person,
    pub major: String,
    pub level: StudentLevel,
    transcript: Transcript,
}

impl Student {
    pub fn undergraduate(person: Person, major: impl Into<String>, year_level: u8) -> Self {
        Self {
            person,
            major: major.into(),
            level: StudentLevel::Undergraduate { year_level },
            transcript: Transcript::new(),
        }
    }

    pub fn graduate(person: Person, major: impl Into<String>, advisor: impl Into<String>) -> Self {
        Self {
            person,
            major: major.into(),
            level: StudentLevel::Graduate {
                advisor: advisor.into(),
            },
            transcript: Transcript::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.person.id
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn level_title(&self) -> &'static str {
        match self.level {
            StudentLevel::Undergraduate { .. } => "Undergraduate Student",
            StudentLevel::Graduate { .. } => "Graduate Student",
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub(crate) fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Registrar allowance: overwrite the grade for a course the student is
    /// (or was) enrolled in. False for a course not on the transcript.
    pub fn assign_grade(&mut self, course_id: &str, grade: Grade) -> bool {
        self.transcript.assign_grade(course_id, grade)
    }
}

impl Responsibilities for Student {
    fn responsibilities(&self) -> Vec<String> {
        vec![
            BASE_RESPONSIBILITY.to_string(),
            "Attend classes and complete coursework.".to_string(),
        ]
    }
}
