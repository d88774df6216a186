use crate::domain::people::PersonId;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

pub type CourseId = String;

pub const DEFAULT_CAPACITY: usize = 30;

/// An enrollable catalog entry. The roster never grows past `capacity`,
/// and the prerequisite set collapses duplicate ids.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    course_id: CourseId,
    name: String,
    credits: u32,
    capacity: usize,
    prerequisites: BTreeSet<CourseId>,
    roster: Vec<PersonId>,
}

impl Course {
    pub fn new(course_id: impl Into<CourseId>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            course_id: course_id.into(),
            name: name.into(),
            credits,
            capacity: DEFAULT_CAPACITY,
            prerequisites: BTreeSet::new(),
            roster: Vec::new(),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CourseId>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &str {
        &self.course_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared credit hours. Informational only: GPA computation applies a
    /// fixed per-course weight instead (see `core::evaluator`).
    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn prerequisites(&self) -> &BTreeSet<CourseId> {
        &self.prerequisites
    }

    pub fn roster(&self) -> &[PersonId] {
        &self.roster
    }

    pub fn enrolled_count(&self) -> usize {
        self.roster.len()
    }

    pub fn is_full(&self) -> bool {
        self.roster.len() >= self.capacity
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.roster.iter().any(|id| id == student_id)
    }

    /// Appends the student iff a seat is free. A full course is an expected
    /// outcome signaled by the boolean, never an error.
    pub fn try_add_student(&mut self, student_id: impl Into<PersonId>) -> bool {
        if self.roster.len() < self.capacity {
            self.roster.push(student_id.into());
            return true;
        }
        false
    }

    /// Removes the first occurrence of the student from the roster. Removing
    /// a non-member is a silent no-op.
    pub fn remove_student(&mut self, student_id: &str) {
        if let Some(pos) = self.roster.iter().position(|id| id == student_id) {
            self.roster.remove(pos);
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({} credits)", self.course_id, self.name, self.credits)
    }
}
