//! The `gradebook report` command.

use std::path::PathBuf;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::config::load_config_from;
use crate::render::{render_json, render_table, render_text, Threshold};
use crate::sample::{bootstrap, SampleDataset};

pub fn execute(
    format: Option<String>,
    threshold: Option<Decimal>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or_else(|| config.default_format.clone());

    let service = bootstrap(&SampleDataset::school_of_rock())?;
    let summary = service.summary();
    let threshold = Threshold::resolve(threshold.or(config.threshold), summary.average_grade);

    let output = match format.as_str() {
        "text" => render_text(&summary, threshold, config.decimal_places),
        "table" => render_table(&summary, threshold, config.decimal_places),
        "json" => render_json(&summary, threshold)?,
        other => anyhow::bail!("unknown format: {other} (expected text, table or json)"),
    };
    print!("{output}");

    Ok(())
}
