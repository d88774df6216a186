use crate::domain::course::CourseId;
use crate::domain::student::Student;
use crate::utils::error::{RegistrarError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;

pub type PersonId = String;

pub const BASE_RESPONSIBILITY: &str = "Adhere to university policies.";

/// Duties a campus member carries, starting from the shared base line.
pub trait Responsibilities {
    fn responsibilities(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    birth_date: NaiveDate,
}

impl Person {
    /// Birth date must be `YYYY-MM-DD`.
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, birth_date: &str) -> Result<Self> {
        let birth_date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").map_err(|e| {
            RegistrarError::InvalidDate {
                value: birth_date.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            birth_date,
        })
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Whole years on `date`, adjusted for whether the birthday has occurred.
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        let mut age = date.year() - self.birth_date.year();
        if (date.month(), date.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }

    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

impl Responsibilities for Person {
    fn responsibilities(&self) -> Vec<String> {
        vec![BASE_RESPONSIBILITY.to_string()]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Staff {
    pub person: Person,
    pub department: String,
    pub role: String,
}

impl Staff {
    pub fn new(person: Person, department: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            person,
            department: department.into(),
            role: role.into(),
        }
    }
}

impl Responsibilities for Staff {
    fn responsibilities(&self) -> Vec<String> {
        vec![
            BASE_RESPONSIBILITY.to_string(),
            format!(
                "Perform {} duties for the {} department.",
                self.role, self.department
            ),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub enum FacultyRank {
    Professor { tenured: bool },
    Lecturer,
    TeachingAssistant { assisting_course: CourseId },
}

#[derive(Debug, Clone, Serialize)]
pub struct Faculty {
    pub person: Person,
    pub department: String,
    pub rank: FacultyRank,
}

impl Faculty {
    /// New professors start untenured.
    pub fn professor(person: Person, department: impl Into<String>) -> Self {
        Self {
            person,
            department: department.into(),
            rank: FacultyRank::Professor { tenured: false },
        }
    }

    pub fn lecturer(person: Person, department: impl Into<String>) -> Self {
        Self {
            person,
            department: department.into(),
            rank: FacultyRank::Lecturer,
        }
    }

    pub fn teaching_assistant(
        person: Person,
        department: impl Into<String>,
        assisting_course: impl Into<CourseId>,
    ) -> Self {
        Self {
            person,
            department: department.into(),
            rank: FacultyRank::TeachingAssistant {
                assisting_course: assisting_course.into(),
            },
        }
    }

    pub fn rank_title(&self) -> &'static str {
        match self.rank {
            FacultyRank::Professor { .. } => "Professor",
            FacultyRank::Lecturer => "Lecturer",
            FacultyRank::TeachingAssistant { .. } => "Teaching Assistant",
        }
    }

    /// Teaching and advising duties for this rank.
    pub fn workload(&self) -> String {
        match &self.rank {
            FacultyRank::Professor { .. } => {
                "Teaches 2 courses, advises 5 graduate students, serves on 1 committee.".to_string()
            }
            FacultyRank::Lecturer => "Teaches 4 courses.".to_string(),
            FacultyRank::TeachingAssistant { assisting_course } => {
                format!("Assists with {}, holds office hours.", assisting_course)
            }
        }
    }
}

impl Responsibilities for Faculty {
    fn responsibilities(&self) -> Vec<String> {
        match self.rank {
            // Lecturers carry no research duty.
            FacultyRank::Lecturer => vec![
                BASE_RESPONSIBILITY.to_string(),
                "Focus on teaching and student instruction.".to_string(),
            ],
            _ => vec![
                BASE_RESPONSIBILITY.to_string(),
                "Conduct research and publish findings.".to_string(),
            ],
        }
    }
}

/// Every kind of person on campus. Capability questions are answered by the
/// variant, not by probing: `workload` is `Some` exactly for faculty.
#[derive(Debug, Clone, Serialize)]
pub enum CampusMember {
    Student(Student),
    Faculty(Faculty),
    Staff(Staff),
}

impl CampusMember {
    pub fn person(&self) -> &Person {
        match self {
            CampusMember::Student(s) => &s.person,
            CampusMember::Faculty(f) => &f.person,
            CampusMember::Staff(s) => &s.person,
        }
    }

    pub fn name(&self) -> &str {
        &self.person().name
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CampusMember::Student(s) => s.level_title(),
            CampusMember::Faculty(f) => f.rank_title(),
            CampusMember::Staff(_) => "Staff",
        }
    }

    pub fn workload(&self) -> Option<String> {
        match self {
            CampusMember::Faculty(f) => Some(f.workload()),
            CampusMember::Student(_) | CampusMember::Staff(_) => None,
        }
    }
}

impl Responsibilities for CampusMember {
    fn responsibilities(&self) -> Vec<String> {
        match self {
            CampusMember::Student(s) => s.responsibilities(),
            CampusMember::Faculty(f) => f.responsibilities(),
            CampusMember::Staff(s) => s.responsibilities(),
        }
    }
}
