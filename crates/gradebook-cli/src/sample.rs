//! The sample university the CLI reports on.
//!
//! The dataset is plain data; [`bootstrap`] turns any dataset into a
//! populated [`UniversityService`], so tests can build small fixtures.

use anyhow::{Context, Result};

use gradebook_core::{Course, Store, Student, Teacher, UniversityService};

/// People and courses to load, with the grades to record.
#[derive(Debug, Clone)]
pub struct SampleDataset {
    /// `(id, name, address)`
    pub teachers: Vec<(&'static str, &'static str, &'static str)>,
    /// `(id, name, address)`
    pub students: Vec<(&'static str, &'static str, &'static str)>,
    pub courses: Vec<CourseSeed>,
}

/// A course and its roster. A `None` grade enrolls without grading.
#[derive(Debug, Clone)]
pub struct CourseSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub teacher_id: &'static str,
    pub roster: Vec<(&'static str, Option<&'static str>)>,
}

impl SampleDataset {
    /// The "School of Rock" dataset shipped with the binary.
    pub fn school_of_rock() -> Self {
        const ADDRESS: &str = "Unknown Address";
        Self {
            teachers: vec![("1", "Dewey Finn", ADDRESS), ("2", "Ned Schneebly", ADDRESS)],
            students: vec![
                ("1", "Zack Mooneyham", ADDRESS),
                ("2", "Freddy Jones", ADDRESS),
                ("3", "Katie", ADDRESS),
                ("4", "Lawrence", ADDRESS),
                ("5", "Summer Hathaway", ADDRESS),
                ("6", "Tomika", ADDRESS),
                ("7", "Billy", ADDRESS),
                ("8", "Marta", ADDRESS),
                ("9", "Alicia", ADDRESS),
                ("10", "Gordon", ADDRESS),
            ],
            courses: vec![
                CourseSeed {
                    id: "1",
                    name: "Rock Band 101",
                    teacher_id: "2",
                    roster: vec![
                        ("1", Some("2")),
                        ("2", Some("3")),
                        ("3", Some("2.3")),
                        ("4", Some("5")),
                        ("5", Some("3.7")),
                        ("10", Some("1.3")),
                    ],
                },
                CourseSeed {
                    id: "2",
                    name: "Advanced Rock Theory",
                    teacher_id: "2",
                    roster: vec![
                        ("3", Some("3.3")),
                        ("4", Some("2")),
                        ("5", Some("2.7")),
                        ("6", Some("1")),
                        ("7", Some("1.3")),
                        ("8", Some("2.3")),
                        ("9", Some("2")),
                        ("10", None),
                        ("10", Some("1.7")),
                    ],
                },
                CourseSeed {
                    id: "3",
                    name: "Mathematics for musicians",
                    teacher_id: "1",
                    roster: vec![
                        ("1", Some("4")),
                        ("2", Some("5")),
                        ("3", Some("3.3")),
                        ("8", Some("4")),
                        ("9", Some("3")),
                        ("10", None),
                        ("10", Some("1.0")),
                    ],
                },
            ],
        }
    }
}

/// Create every entity of `dataset`, enroll the rosters and record grades.
pub fn bootstrap(dataset: &SampleDataset) -> Result<UniversityService> {
    let mut service: UniversityService = UniversityService::default();

    for &(id, name, address) in &dataset.teachers {
        service.create_teacher(Teacher::new(id, name, address)?);
    }
    for &(id, name, address) in &dataset.students {
        service.create_student(Student::new(id, name, address)?);
    }

    for seed in &dataset.courses {
        let teacher = service
            .teachers()
            .find_by_id(seed.teacher_id)
            .cloned()
            .with_context(|| {
                format!(
                    "course {} refers to unknown teacher {}",
                    seed.id, seed.teacher_id
                )
            })?;
        service.create_course(Course::new(seed.id, seed.name, teacher)?);

        for &(student_id, grade) in &seed.roster {
            service.add_students_to_course(seed.id, [student_id])?;
            if let Some(grade) = grade {
                service
                    .set_grade(seed.id, student_id, grade)
                    .with_context(|| {
                        format!("failed to grade student {student_id} in course {}", seed.id)
                    })?;
            }
        }
        tracing::debug!("loaded course {} with {} roster entries", seed.id, seed.roster.len());
    }

    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn school_of_rock_loads() {
        let service = bootstrap(&SampleDataset::school_of_rock()).unwrap();
        assert_eq!(service.teachers().len(), 2);
        assert_eq!(service.students().len(), 10);
        assert_eq!(service.courses().len(), 3);

        let rock = service.courses().find_by_id("1").unwrap();
        assert_eq!(rock.student_count(), 6);
        assert_eq!(rock.average_grade(), Some(dec!(2.9)));

        // Gordon is listed twice in two rosters but enrolled once.
        let theory = service.courses().find_by_id("2").unwrap();
        assert_eq!(theory.student_count(), 8);
        assert_eq!(theory.average_grade(), Some(dec!(2.0)));

        let maths = service.courses().find_by_id("3").unwrap();
        assert_eq!(maths.average_grade(), Some(dec!(3.4)));

        assert_eq!(service.calculate_average_grade(), Some(dec!(2.8)));
    }

    #[test]
    fn school_of_rock_student_averages() {
        let service = bootstrap(&SampleDataset::school_of_rock()).unwrap();
        let average = |id: &str| {
            let student = service.students().find_by_id(id).unwrap();
            service.student_average(student)
        };

        assert_eq!(average("1"), Some(dec!(3)));
        assert_eq!(average("3"), Some(dec!(3.0)));
        assert_eq!(average("4"), Some(dec!(4)));
        assert_eq!(average("8"), Some(dec!(3.2)));
        assert_eq!(average("10"), Some(dec!(1.3)));
    }

    #[test]
    fn better_than_average_students() {
        let service = bootstrap(&SampleDataset::school_of_rock()).unwrap();
        let average = service.calculate_average_grade().unwrap();
        let names: Vec<&str> = service
            .students_with_average_grade_better_or_equals(average)
            .into_iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["Tomika", "Billy", "Gordon"]);
    }

    #[test]
    fn unknown_teacher_is_reported() {
        let dataset = SampleDataset {
            teachers: vec![],
            students: vec![],
            courses: vec![CourseSeed {
                id: "1",
                name: "Orphan",
                teacher_id: "nobody",
                roster: vec![],
            }],
        };
        let err = bootstrap(&dataset).unwrap_err();
        assert!(err.to_string().contains("unknown teacher nobody"));
    }

    #[test]
    fn invalid_grade_fails_bootstrap() {
        let dataset = SampleDataset {
            teachers: vec![("t", "Teacher", "Address")],
            students: vec![("s", "Student", "Address")],
            courses: vec![CourseSeed {
                id: "c",
                name: "Course",
                teacher_id: "t",
                roster: vec![("s", Some("7"))],
            }],
        };
        assert!(bootstrap(&dataset).is_err());
    }
}
