//! Students and the course ids they are enrolled in.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;

use crate::error::Result;
use crate::grade::Grade;
use crate::statistics::mean_half_up;
use crate::traits::{Entity, Store};

use super::{require_non_blank, Course};

/// A student and the ids of the courses they are enrolled in.
///
/// The course ids are a back-reference maintained by [`Course`]; they take no
/// part in equality, hashing or the `Debug` output.
#[derive(Clone)]
pub struct Student {
    id: String,
    name: String,
    address: String,
    course_ids: BTreeSet<String>,
}

impl Student {
    /// Create a student with no enrollments, validating that no field is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id: require_non_blank("student", "id", id)?,
            name: require_non_blank("student", "name", name)?,
            address: require_non_blank("student", "address", address)?,
            course_ids: BTreeSet::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Copy of this student with a different name. Enrollments are kept.
    pub fn with_name(self, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: require_non_blank("student", "name", name)?,
            ..self
        })
    }

    /// Copy of this student with a different address. Enrollments are kept.
    pub fn with_address(self, address: impl Into<String>) -> Result<Self> {
        Ok(Self {
            address: require_non_blank("student", "address", address)?,
            ..self
        })
    }

    /// Enroll in `course`. Both sides are updated; calling this again, or
    /// calling `course.add_student` for the same pair, changes nothing.
    pub fn add_course(&mut self, course: &mut Course) {
        self.course_ids.insert(course.id().to_string());
        course.add_student(self);
    }

    /// Leave `course`, dropping the enrollment and its grade on both sides.
    pub fn remove_course(&mut self, course: &mut Course) {
        self.course_ids.remove(course.id());
        course.remove_student(self);
    }

    /// Ids of the courses this student is enrolled in, in id order.
    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.course_ids.iter().map(String::as_str)
    }

    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.course_ids.contains(course_id)
    }

    /// The grade recorded by `course_id`, resolved through `courses`.
    ///
    /// `None` if the student is not enrolled there or no grade is set yet.
    pub fn grade_in_course<S>(&self, course_id: &str, courses: &S) -> Option<Grade>
    where
        S: Store<Course> + ?Sized,
    {
        if !self.is_enrolled_in(course_id) {
            return None;
        }
        courses
            .find_by_id(course_id)?
            .grade_for_student(&self.id)
            .ok()
            .flatten()
    }

    /// Mean of the grades across all enrolled courses, rounded half-up.
    ///
    /// `None` if the student has no courses or none has graded them yet.
    pub fn average_grade<S>(&self, courses: &S) -> Option<Decimal>
    where
        S: Store<Course> + ?Sized,
    {
        if self.course_ids.is_empty() {
            return None;
        }
        let grades = self.course_ids.iter().filter_map(|course_id| {
            let Some(course) = courses.find_by_id(course_id) else {
                tracing::warn!(
                    "student {} refers to unknown course {}, skipping",
                    self.id,
                    course_id
                );
                return None;
            };
            course.grade_for_student(&self.id).ok().flatten()
        });
        mean_half_up(grades.map(Decimal::from))
    }
}

impl fmt::Debug for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Student")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("address", &self.address)
            .finish()
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.address == other.address
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.address.hash(state);
    }
}

impl Entity for Student {
    fn id(&self) -> &str {
        &self.id
    }
}
