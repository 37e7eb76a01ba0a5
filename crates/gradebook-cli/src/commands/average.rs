//! The `gradebook average` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::load_config_from;
use crate::render::format_grade;
use crate::sample::{bootstrap, SampleDataset};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let service = bootstrap(&SampleDataset::school_of_rock())?;

    match service.calculate_average_grade() {
        Some(average) => println!(
            "Average grade: {}",
            format_grade(Some(average), config.decimal_places)
        ),
        None => println!("No grades recorded."),
    }

    Ok(())
}
