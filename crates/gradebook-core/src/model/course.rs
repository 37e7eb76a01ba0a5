//! Courses and the enrollment roster each course owns.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;

use crate::error::{GradebookError, Result};
use crate::grade::Grade;
use crate::statistics::mean_half_up;
use crate::traits::{Entity, Store};

use super::{require_non_blank, Enrollment, Student, Teacher};

/// A course, its teacher, and the roster of enrollments it owns.
///
/// The course side owns consistency: every roster change here is mirrored on
/// the affected [`Student`]. The roster takes no part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Course {
    id: String,
    name: String,
    teacher: Teacher,
    enrollments: BTreeMap<String, Enrollment>,
}

impl Course {
    /// Create a course with an empty roster, validating that no field is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>, teacher: Teacher) -> Result<Self> {
        Ok(Self {
            id: require_non_blank("course", "id", id)?,
            name: require_non_blank("course", "name", name)?,
            teacher,
            enrollments: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    /// Copy of this course with a different name. The roster is kept.
    pub fn with_name(self, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: require_non_blank("course", "name", name)?,
            ..self
        })
    }

    /// Copy of this course taught by `teacher`. The roster is kept.
    pub fn with_teacher(self, teacher: Teacher) -> Self {
        Self { teacher, ..self }
    }

    /// Enroll `student` without a grade and register this course on the
    /// student. Does nothing if the student is already enrolled.
    pub fn add_student(&mut self, student: &mut Student) {
        if self.enrollments.contains_key(student.id()) {
            return;
        }
        self.enrollments.insert(
            student.id().to_string(),
            Enrollment::new(student.id(), &self.id, None),
        );
        tracing::debug!("enrolled student {} in course {}", student.id(), self.id);
        student.add_course(self);
    }

    /// Drop the enrollment of `student`, if any, together with its grade,
    /// and remove this course from the student.
    pub fn remove_student(&mut self, student: &mut Student) {
        if self.enrollments.remove(student.id()).is_some() {
            tracing::debug!("removed student {} from course {}", student.id(), self.id);
            student.remove_course(self);
        }
    }

    /// Parse `grade` and record it for an enrolled student, replacing any
    /// previous grade.
    ///
    /// Fails with [`GradebookError::StudentNotEnrolled`] before looking at
    /// `grade`, and with a validation error if `grade` is not a valid grade.
    pub fn set_grade(&mut self, student_id: &str, grade: &str) -> Result<()> {
        if !self.enrollments.contains_key(student_id) {
            return Err(not_enrolled(student_id, &self.id));
        }
        let grade: Grade = grade.parse()?;
        self.record_grade(student_id, grade)
    }

    /// Record an already validated grade for an enrolled student.
    pub fn record_grade(&mut self, student_id: &str, grade: Grade) -> Result<()> {
        let enrollment = self
            .enrollments
            .get_mut(student_id)
            .ok_or_else(|| not_enrolled(student_id, &self.id))?;
        *enrollment = enrollment.with_grade(grade);
        tracing::debug!(
            "recorded grade {} for student {} in course {}",
            grade,
            student_id,
            self.id
        );
        Ok(())
    }

    /// The grade of an enrolled student, `None` while ungraded.
    pub fn grade_for_student(&self, student_id: &str) -> Result<Option<Grade>> {
        self.enrollments
            .get(student_id)
            .map(Enrollment::grade)
            .ok_or_else(|| not_enrolled(student_id, &self.id))
    }

    pub fn enrollment(&self, student_id: &str) -> Option<&Enrollment> {
        self.enrollments.get(student_id)
    }

    /// Enrollments in student id order.
    pub fn enrollments(&self) -> impl Iterator<Item = &Enrollment> {
        self.enrollments.values()
    }

    pub fn is_enrolled(&self, student_id: &str) -> bool {
        self.enrollments.contains_key(student_id)
    }

    /// Ids of the enrolled students, in id order.
    pub fn student_ids(&self) -> impl Iterator<Item = &str> {
        self.enrollments.keys().map(String::as_str)
    }

    pub fn student_count(&self) -> usize {
        self.enrollments.len()
    }

    /// The enrolled students, resolved through `students`.
    pub fn students<'s, S>(&self, students: &'s S) -> Vec<&'s Student>
    where
        S: Store<Student> + ?Sized,
    {
        self.student_ids()
            .filter_map(|id| students.find_by_id(id))
            .collect()
    }

    /// Mean of all recorded grades, rounded half-up at the scale the grades
    /// carry. `None` if no enrolled student has a grade yet.
    pub fn average_grade(&self) -> Option<Decimal> {
        mean_half_up(
            self.enrollments
                .values()
                .filter_map(Enrollment::grade)
                .map(Decimal::from),
        )
    }
}

fn not_enrolled(student_id: &str, course_id: &str) -> GradebookError {
    GradebookError::StudentNotEnrolled {
        student_id: student_id.to_string(),
        course_id: course_id.to_string(),
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.teacher == other.teacher
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.teacher.hash(state);
    }
}

impl Entity for Course {
    fn id(&self) -> &str {
        &self.id
    }
}
