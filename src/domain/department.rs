use crate::domain::course::{Course, CourseId};
use crate::domain::people::Faculty;
use serde::Serialize;
use std::collections::HashMap;

/// Catalog container for one academic department. Courses are keyed by id
/// for lookup during enrollment wiring; no enrollment rule lives here.
#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub name: String,
    courses: HashMap<CourseId, Course>,
    faculty: Vec<Faculty>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: HashMap::new(),
            faculty: Vec::new(),
        }
    }

    /// Adds the course under its id, replacing any previous entry.
    pub fn add_course(&mut self, course: Course) {
        self.courses.insert(course.id().to_string(), course);
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    pub fn course_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.get_mut(course_id)
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Course ids in sorted order, for deterministic walks.
    pub fn course_ids(&self) -> Vec<CourseId> {
        let mut ids: Vec<CourseId> = self.courses.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn add_faculty(&mut self, member: Faculty) {
        self.faculty.push(member);
    }

    pub fn faculty(&self) -> &[Faculty] {
        &self.faculty
    }
}
