use crate::domain::course::{Course, DEFAULT_CAPACITY};
use crate::domain::department::Department;
use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusConfig {
    pub campus: CampusInfo,
    #[serde(default)]
    pub departments: Vec<DepartmentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusInfo {
    pub name: String,
    pub term: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentConfig {
    pub name: String,
    #[serde(default)]
    pub courses: Vec<CourseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseConfig {
    pub id: String,
    pub name: String,
    pub credits: u32,
    pub capacity: Option<usize>,
    pub prerequisites: Option<Vec<String>>,
}

impl CampusConfig {
    /// Loads a campus description from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistrarError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a campus description from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistrarError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Checks the loaded description before any department is built.
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("campus.name", &self.campus.name)?;

        let mut seen_ids = HashSet::new();
        for department in &self.departments {
            validate_non_empty_string("departments.name", &department.name)?;

            for course in &department.courses {
                validate_non_empty_string("courses.id", &course.id)?;
                validate_non_empty_string("courses.name", &course.name)?;
                validate_positive_number("courses.credits", course.credits as usize, 1)?;

                if let Some(capacity) = course.capacity {
                    validate_positive_number("courses.capacity", capacity, 1)?;
                }

                for prerequisite in course.prerequisites.iter().flatten() {
                    validate_non_empty_string("courses.prerequisites", prerequisite)?;
                }

                // Course ids are campus-wide, not per department.
                if !seen_ids.insert(course.id.clone()) {
                    return Err(RegistrarError::InvalidConfigValueError {
                        field: "courses.id".to_string(),
                        value: course.id.clone(),
                        reason: "duplicate course id".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn campus_name(&self) -> &str {
        &self.campus.name
    }

    pub fn term(&self) -> Option<&str> {
        self.campus.term.as_deref()
    }

    pub fn course_count(&self) -> usize {
        self.departments.iter().map(|d| d.courses.len()).sum()
    }

    /// Builds runtime departments with their course catalogs wired up.
    pub fn to_departments(&self) -> Vec<Department> {
        self.departments
            .iter()
            .map(|dept| {
                let mut department = Department::new(dept.name.clone());
                for course in &dept.courses {
                    let mut catalog_entry =
                        Course::new(course.id.clone(), course.name.clone(), course.credits)
                            .with_capacity(course.capacity.unwrap_or(DEFAULT_CAPACITY));
                    if let Some(prerequisites) = &course.prerequisites {
                        catalog_entry =
                            catalog_entry.with_prerequisites(prerequisites.iter().cloned());
                    }
                    department.add_course(catalog_entry);
                }
                department
            })
            .collect()
    }
}

impl Validate for CampusConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_campus_config() {
        let toml_content = r#"
[campus]
name = "Miskatonic University"
term = "Fall 2026"

[[departments]]
name = "Computer Science"

[[departments.courses]]
id = "CS101"
name = "Intro to Programming"
credits = 3

[[departments.courses]]
id = "CS201"
name = "Data Structures"
credits = 3
capacity = 2
prerequisites = ["CS101"]
"#;

        let config = CampusConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.campus_name(), "Miskatonic University");
        assert_eq!(config.term(), Some("Fall 2026"));
        assert_eq!(config.course_count(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_departments_applies_defaults() {
        let toml_content = r#"
[campus]
name = "Test U"

[[departments]]
name = "Computer Science"

[[departments.courses]]
id = "CS101"
name = "Intro to Programming"
credits = 3

[[departments.courses]]
id = "CS201"
name = "Data Structures"
credits = 3
capacity = 2
prerequisites = ["CS101"]
"#;

        let config = CampusConfig::from_toml_str(toml_content).unwrap();
        let departments = config.to_departments();

        assert_eq!(departments.len(), 1);
        let cs = &departments[0];
        assert_eq!(cs.name, "Computer Science");

        let cs101 = cs.course("CS101").unwrap();
        assert_eq!(cs101.capacity(), DEFAULT_CAPACITY);
        assert!(cs101.prerequisites().is_empty());

        let cs201 = cs.course("CS201").unwrap();
        assert_eq!(cs201.capacity(), 2);
        assert!(cs201.prerequisites().contains("CS101"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CAMPUS_NAME", "Env Campus");

        let toml_content = r#"
[campus]
name = "${TEST_CAMPUS_NAME}"
"#;

        let config = CampusConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.campus_name(), "Env Campus");

        std::env::remove_var("TEST_CAMPUS_NAME");
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let toml_content = r#"
[campus]
name = "${NO_SUCH_CAMPUS_VAR_SET}"
"#;

        let config = CampusConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.campus_name(), "${NO_SUCH_CAMPUS_VAR_SET}");
    }

    #[test]
    fn test_duplicate_course_ids_rejected() {
        let toml_content = r#"
[campus]
name = "Test U"

[[departments]]
name = "Computer Science"

[[departments.courses]]
id = "CS101"
name = "Intro to Programming"
credits = 3

[[departments]]
name = "Mathematics"

[[departments.courses]]
id = "CS101"
name = "Calculus I"
credits = 4
"#;

        let config = CampusConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate course id"));
    }

    #[test]
    fn test_zero_credit_course_rejected() {
        let toml_content = r#"
[campus]
name = "Test U"

[[departments]]
name = "Computer Science"

[[departments.courses]]
id = "CS101"
name = "Intro to Programming"
credits = 0
"#;

        let config = CampusConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[campus]
name = "File Campus"

[[departments]]
name = "Mathematics"

[[departments.courses]]
id = "MATH101"
name = "Calculus I"
credits = 4
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = CampusConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.campus_name(), "File Campus");
        assert_eq!(config.course_count(), 1);
    }

    #[test]
    fn test_malformed_toml_reports_parse_error() {
        let err = CampusConfig::from_toml_str("campus = not valid").unwrap_err();
        assert!(err.to_string().contains("TOML parsing error"));
    }
}
