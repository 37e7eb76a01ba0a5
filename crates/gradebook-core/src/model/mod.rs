//! Entity model: teachers, students, courses and the enrollments linking
//! students to courses.
//!
//! Students and courses never own each other. A [`Course`] owns one
//! [`Enrollment`] per enrolled student, keyed by student id, and a
//! [`Student`] keeps the ids of the courses it is enrolled in. Both sides are
//! always updated together through `Course::add_student` /
//! `Student::add_course` and their removal counterparts.

mod course;
mod enrollment;
mod student;
mod teacher;

pub use course::Course;
pub use enrollment::Enrollment;
pub use student::Student;
pub use teacher::Teacher;

use crate::error::{GradebookError, Result};

/// Reject empty or whitespace-only values for a required text field.
fn require_non_blank(
    entity: &'static str,
    field: &'static str,
    value: impl Into<String>,
) -> Result<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(GradebookError::BlankField { entity, field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(require_non_blank("student", "id", "").is_err());
        assert!(require_non_blank("student", "id", "  \t").is_err());
        assert_eq!(require_non_blank("student", "id", "7").unwrap(), "7");
    }
}
