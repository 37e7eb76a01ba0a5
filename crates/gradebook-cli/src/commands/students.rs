//! The `gradebook students` command.

use std::path::PathBuf;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::config::load_config_from;
use crate::render::{format_grade, Threshold};
use crate::sample::{bootstrap, SampleDataset};

pub fn execute(threshold: Option<Decimal>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let service = bootstrap(&SampleDataset::school_of_rock())?;

    let threshold = Threshold::resolve(
        threshold.or(config.threshold),
        service.calculate_average_grade(),
    );
    let students = service.students_with_average_grade_better_or_equals(threshold.value());

    println!(
        "{} student(s) with an average of {} or better:",
        students.len(),
        threshold.value()
    );
    for student in students {
        println!(
            "  {} (ID {}): {}",
            student.name(),
            student.id(),
            format_grade(service.student_average(student), config.decimal_places)
        );
    }

    Ok(())
}
