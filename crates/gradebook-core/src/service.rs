//! University-wide operations over the teacher, course and student stores.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::{GradebookError, Result};
use crate::model::{Course, Student, Teacher};
use crate::report::{CourseSummary, StudentSummary, TeacherSummary, UniversitySummary};
use crate::statistics::{average_of_course_averages, is_better_or_equal};
use crate::store::{CourseStore, StudentStore, TeacherStore};
use crate::traits::Store;

/// Ties the three stores together and answers institution-wide queries.
///
/// Generic over the store implementations; the defaults are the in-memory
/// stores from [`crate::store`].
#[derive(Debug, Clone, Default)]
pub struct UniversityService<T = TeacherStore, C = CourseStore, S = StudentStore> {
    teachers: T,
    courses: C,
    students: S,
}

impl<T, C, S> UniversityService<T, C, S>
where
    T: Store<Teacher>,
    C: Store<Course>,
    S: Store<Student>,
{
    pub fn new(teachers: T, courses: C, students: S) -> Self {
        Self {
            teachers,
            courses,
            students,
        }
    }

    pub fn teachers(&self) -> &T {
        &self.teachers
    }

    pub fn courses(&self) -> &C {
        &self.courses
    }

    pub fn students(&self) -> &S {
        &self.students
    }

    pub fn create_teacher(&mut self, teacher: Teacher) {
        self.teachers.save(teacher);
    }

    pub fn create_course(&mut self, course: Course) {
        self.courses.save(course);
    }

    pub fn create_student(&mut self, student: Student) {
        self.students.save(student);
    }

    /// Enroll each listed student in the course, in order.
    ///
    /// Fails on the first unknown course or student id; students before it
    /// stay enrolled. Already enrolled students are skipped silently.
    pub fn add_students_to_course<I>(&mut self, course_id: &str, student_ids: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let course = self
            .courses
            .find_by_id_mut(course_id)
            .ok_or_else(|| not_found("course", course_id))?;

        for student_id in student_ids {
            let student_id = student_id.as_ref();
            let student = self
                .students
                .find_by_id_mut(student_id)
                .ok_or_else(|| not_found("student", student_id))?;
            student.add_course(course);
        }
        Ok(())
    }

    /// Remove a student from a course on both sides.
    pub fn remove_student_from_course(&mut self, course_id: &str, student_id: &str) -> Result<()> {
        let course = self
            .courses
            .find_by_id_mut(course_id)
            .ok_or_else(|| not_found("course", course_id))?;
        let student = self
            .students
            .find_by_id_mut(student_id)
            .ok_or_else(|| not_found("student", student_id))?;
        course.remove_student(student);
        Ok(())
    }

    /// Parse and record `grade` for a student enrolled in `course_id`.
    pub fn set_grade(&mut self, course_id: &str, student_id: &str, grade: &str) -> Result<()> {
        self.courses
            .find_by_id_mut(course_id)
            .ok_or_else(|| not_found("course", course_id))?
            .set_grade(student_id, grade)
    }

    /// Average of a stored student's grades, resolved through the course store.
    pub fn student_average(&self, student: &Student) -> Option<Decimal> {
        student.average_grade(&self.courses)
    }

    /// Number of stored courses taught by `teacher_id`.
    pub fn courses_taught_by(&self, teacher_id: &str) -> usize {
        self.courses
            .find_all()
            .into_iter()
            .filter(|course| course.teacher().id() == teacher_id)
            .count()
    }

    /// The mean of the per-course averages over all courses that have at
    /// least one grade. `None` if there are no courses or no grades.
    pub fn calculate_average_grade(&self) -> Option<Decimal> {
        average_of_course_averages(self.courses.find_all())
    }

    /// Students whose average is numerically at most `threshold` (lower is
    /// better), in store order. Students without an average are left out.
    pub fn students_with_average_grade_better_or_equals(
        &self,
        threshold: Decimal,
    ) -> Vec<&Student> {
        self.students
            .find_all()
            .into_iter()
            .filter(|student| is_better_or_equal(self.student_average(student), threshold))
            .collect()
    }

    /// Snapshot of every student, teacher and course with their statistics.
    pub fn summary(&self) -> UniversitySummary {
        let students = self
            .students
            .find_all()
            .into_iter()
            .map(|student| StudentSummary {
                id: student.id().to_string(),
                name: student.name().to_string(),
                average_grade: self.student_average(student),
            })
            .collect();

        let teachers = self
            .teachers
            .find_all()
            .into_iter()
            .map(|teacher| TeacherSummary {
                id: teacher.id().to_string(),
                name: teacher.name().to_string(),
                course_count: self.courses_taught_by(teacher.id()),
            })
            .collect();

        let courses = self
            .courses
            .find_all()
            .into_iter()
            .map(|course| CourseSummary {
                id: course.id().to_string(),
                name: course.name().to_string(),
                teacher_id: course.teacher().id().to_string(),
                student_count: course.student_count(),
                average_grade: course.average_grade(),
            })
            .collect();

        UniversitySummary {
            generated_at: Utc::now(),
            students,
            teachers,
            courses,
            average_grade: self.calculate_average_grade(),
        }
    }
}

fn not_found(entity: &'static str, id: &str) -> GradebookError {
    GradebookError::NotFound {
        entity,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn service_with(students: &[&str]) -> UniversityService {
        let mut service = UniversityService::default();
        let teacher = Teacher::new("t1", "Dewey Finn", "Unknown Address").unwrap();
        service.create_teacher(teacher.clone());
        service.create_course(Course::new("c1", "Rock Band 101", teacher.clone()).unwrap());
        service.create_course(Course::new("c2", "Advanced Rock Theory", teacher).unwrap());
        for id in students {
            let student = Student::new(*id, format!("Student {id}"), "Unknown Address").unwrap();
            service.create_student(student);
        }
        service
    }

    #[test]
    fn add_students_links_store_entries() {
        let mut service = service_with(&["1", "2"]);
        service.add_students_to_course("c1", ["1", "2"]).unwrap();

        let course = service.courses().find_by_id("c1").unwrap();
        assert_eq!(course.student_count(), 2);
        assert!(service.students().find_by_id("1").unwrap().is_enrolled_in("c1"));
        assert!(service.students().find_by_id("2").unwrap().is_enrolled_in("c1"));
    }

    #[test]
    fn add_students_to_unknown_course_fails() {
        let mut service = service_with(&["1"]);
        let err = service.add_students_to_course("nope", ["1"]).unwrap_err();
        assert_eq!(err.to_string(), "course not found with ID: nope");
    }

    #[test]
    fn add_unknown_student_fails_after_enrolling_earlier_ones() {
        let mut service = service_with(&["1"]);
        let err = service
            .add_students_to_course("c1", ["1", "ghost"])
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(service.courses().find_by_id("c1").unwrap().is_enrolled("1"));
    }

    #[test]
    fn remove_student_from_course_unlinks_both() {
        let mut service = service_with(&["1"]);
        service.add_students_to_course("c1", ["1"]).unwrap();
        service.set_grade("c1", "1", "2").unwrap();
        service.remove_student_from_course("c1", "1").unwrap();

        assert!(!service.courses().find_by_id("c1").unwrap().is_enrolled("1"));
        assert!(!service.students().find_by_id("1").unwrap().is_enrolled_in("c1"));
        assert!(service.set_grade("c1", "1", "2").unwrap_err().is_not_found());
    }

    #[test]
    fn average_of_empty_university_is_none() {
        let empty: UniversityService = UniversityService::default();
        assert_eq!(empty.calculate_average_grade(), None);
        assert_eq!(service_with(&["1"]).calculate_average_grade(), None);
    }

    #[test]
    fn average_excludes_courses_without_grades() {
        let mut service = service_with(&["1", "2", "3", "4", "5", "6"]);
        service
            .add_students_to_course("c1", ["1", "2", "3", "4", "5", "6"])
            .unwrap();
        service.add_students_to_course("c2", ["1", "2"]).unwrap();
        let grades = [
            ("1", "2"),
            ("2", "3"),
            ("3", "2.3"),
            ("4", "5"),
            ("5", "3.7"),
            ("6", "1.3"),
        ];
        for (id, grade) in grades {
            service.set_grade("c1", id, grade).unwrap();
        }

        assert_eq!(service.calculate_average_grade(), Some(dec!(2.9)));
    }

    #[test]
    fn better_or_equals_excludes_gradeless_students() {
        let mut service = service_with(&["good", "weak", "enrolled", "idle"]);
        service
            .add_students_to_course("c1", ["good", "weak", "enrolled"])
            .unwrap();
        service.set_grade("c1", "good", "1.7").unwrap();
        service.set_grade("c1", "weak", "4").unwrap();

        let ids: Vec<&str> = service
            .students_with_average_grade_better_or_equals(dec!(3.0))
            .into_iter()
            .map(Student::id)
            .collect();
        assert_eq!(ids, vec!["good"]);
    }

    #[test]
    fn better_or_equals_keeps_store_order() {
        let mut service = service_with(&["b", "a", "c"]);
        service.add_students_to_course("c1", ["a", "b", "c"]).unwrap();
        service.set_grade("c1", "a", "2").unwrap();
        service.set_grade("c1", "b", "1").unwrap();
        service.set_grade("c1", "c", "2.0").unwrap();

        let ids: Vec<&str> = service
            .students_with_average_grade_better_or_equals(dec!(2))
            .into_iter()
            .map(Student::id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn summary_counts_courses_per_teacher() {
        let mut service = service_with(&["1"]);
        let other = Teacher::new("t2", "Ned Schneebly", "Unknown Address").unwrap();
        service.create_teacher(other);
        service.add_students_to_course("c1", ["1"]).unwrap();
        service.set_grade("c1", "1", "1.3").unwrap();

        let summary = service.summary();
        assert_eq!(summary.teachers[0].course_count, 2);
        assert_eq!(summary.teachers[1].course_count, 0);
        assert_eq!(summary.courses[0].student_count, 1);
        assert_eq!(summary.courses[0].average_grade, Some(dec!(1.3)));
        assert_eq!(summary.courses[1].average_grade, None);
        assert_eq!(summary.students[0].average_grade, Some(dec!(1.3)));
        assert_eq!(summary.average_grade, Some(dec!(1.3)));
    }
}
