//! Gradebook error types.
//!
//! Two classes of caller-fault errors exist: validation failures raised while
//! constructing a value, and not-found failures raised when an operation
//! refers to something that is not there. Silent no-ops (re-enrolling,
//! deleting an unknown id) are not errors and never produce one.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced by the gradebook domain model and service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradebookError {
    /// A grade outside the range (0, 6].
    #[error("grade {value} is out of range, expected a value greater than 0 and at most 6")]
    GradeOutOfRange { value: Decimal },

    /// A grade string that is not a decimal number.
    #[error("invalid grade '{input}': {reason}")]
    InvalidGrade { input: String, reason: String },

    /// A required text field was empty or whitespace only.
    #[error("{entity} {field} must not be blank")]
    BlankField {
        entity: &'static str,
        field: &'static str,
    },

    /// The student has no enrollment in the course.
    #[error("student '{student_id}' is not enrolled in course '{course_id}'")]
    StudentNotEnrolled {
        student_id: String,
        course_id: String,
    },

    /// A store lookup by id found nothing.
    #[error("{entity} not found with ID: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl GradebookError {
    /// Returns `true` if the error was raised while validating a new value.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GradebookError::GradeOutOfRange { .. }
                | GradebookError::InvalidGrade { .. }
                | GradebookError::BlankField { .. }
        )
    }

    /// Returns `true` if the error refers to a missing enrollment or entity.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GradebookError::StudentNotEnrolled { .. } | GradebookError::NotFound { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GradebookError>;
