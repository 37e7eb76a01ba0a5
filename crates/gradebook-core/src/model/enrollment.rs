//! The student-to-course association record.

use std::hash::{Hash, Hasher};

use crate::grade::Grade;

/// The association between one student and one course, with an optional grade.
///
/// Equality and hashing only consider the (student, course) pair; the grade
/// is the mutable payload of an otherwise fixed association.
#[derive(Debug, Clone)]
pub struct Enrollment {
    student_id: String,
    course_id: String,
    grade: Option<Grade>,
}

impl Enrollment {
    pub fn new(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        grade: Option<Grade>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            grade,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// Copy of this enrollment carrying `grade`.
    pub fn with_grade(&self, grade: Grade) -> Self {
        Self {
            grade: Some(grade),
            ..self.clone()
        }
    }
}

impl PartialEq for Enrollment {
    fn eq(&self, other: &Self) -> bool {
        self.student_id == other.student_id && self.course_id == other.course_id
    }
}

impl Eq for Enrollment {}

impl Hash for Enrollment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.student_id.hash(state);
        self.course_id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn with_grade_keeps_identity() {
        let original = Enrollment::new("s1", "c1", Some(Grade::new(dec!(2.3)).unwrap()));
        let regraded = original.with_grade(Grade::new(dec!(1.7)).unwrap());

        assert_eq!(regraded, original);
        assert_eq!(regraded.student_id(), "s1");
        assert_eq!(regraded.course_id(), "c1");
        assert_eq!(regraded.grade().unwrap().value(), dec!(1.7));
        assert_eq!(original.grade().unwrap().value(), dec!(2.3));
    }

    #[test]
    fn different_pairs_are_not_equal() {
        let a = Enrollment::new("s1", "c1", None);
        assert_ne!(a, Enrollment::new("s2", "c1", None));
        assert_ne!(a, Enrollment::new("s1", "c2", None));
    }
}
