//! Serializable snapshot of a university's records and statistics.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::statistics::is_better_or_equal;

/// Every student, teacher and course with the derived statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversitySummary {
    /// When the snapshot was taken.
    pub generated_at: DateTime<Utc>,
    /// Students in store order.
    pub students: Vec<StudentSummary>,
    /// Teachers in store order.
    pub teachers: Vec<TeacherSummary>,
    /// Courses in store order.
    pub courses: Vec<CourseSummary>,
    /// Mean of the per-course averages.
    pub average_grade: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
    pub average_grade: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherSummary {
    pub id: String,
    pub name: String,
    /// Number of courses whose teacher is this teacher.
    pub course_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: String,
    pub name: String,
    pub teacher_id: String,
    pub student_count: usize,
    pub average_grade: Option<Decimal>,
}

impl UniversitySummary {
    /// Students whose average is numerically at most `threshold`, in order.
    pub fn students_better_or_equals(&self, threshold: Decimal) -> Vec<&StudentSummary> {
        self.students
            .iter()
            .filter(|s| is_better_or_equal(s.average_grade, threshold))
            .collect()
    }
}
