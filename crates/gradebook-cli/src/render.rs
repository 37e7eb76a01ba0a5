//! Output renderers for university summaries.

use std::fmt::Write;

use anyhow::Result;
use comfy_table::{Cell, Table};
use rust_decimal::Decimal;
use serde::Serialize;

use gradebook_core::report::{StudentSummary, UniversitySummary};
use gradebook_core::statistics::round_half_up;

/// Threshold for the better-or-equal list and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// The institution average (or 10 when nothing is graded).
    Average(Decimal),
    /// Set explicitly on the command line or in the config.
    Fixed(Decimal),
}

impl Threshold {
    /// Prefer an explicit value, then the average, then the worst-case 10.
    pub fn resolve(explicit: Option<Decimal>, average: Option<Decimal>) -> Self {
        match (explicit, average) {
            (Some(value), _) => Threshold::Fixed(value),
            (None, Some(average)) => Threshold::Average(average),
            (None, None) => Threshold::Average(Decimal::TEN),
        }
    }

    pub fn value(&self) -> Decimal {
        match self {
            Threshold::Average(value) | Threshold::Fixed(value) => *value,
        }
    }

    fn heading(&self) -> String {
        match self {
            Threshold::Average(_) => "Our students with grades better than average:".to_string(),
            Threshold::Fixed(value) => {
                format!("Our students with grades better than or equal to {value}:")
            }
        }
    }
}

/// An optional average rounded half-up to `places`, `0` when absent.
pub fn format_grade(average: Option<Decimal>, places: u32) -> String {
    round_half_up(average.unwrap_or(Decimal::ZERO), places).to_string()
}

/// One "name: average" line per student.
pub fn student_lines(students: &[&StudentSummary], places: u32) -> String {
    let mut out = String::new();
    for student in students {
        let _ = writeln!(
            out,
            "{}: {}",
            student.name,
            format_grade(student.average_grade, places)
        );
    }
    out
}

/// The plain text report: detail lines, the average, and the filtered list.
pub fn render_text(summary: &UniversitySummary, threshold: Threshold, places: u32) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Students:");
    for s in &summary.students {
        let _ = writeln!(
            out,
            "  - Name: {:<20} ID: {} | ⌀{}",
            s.name,
            s.id,
            format_grade(s.average_grade, places)
        );
    }

    let _ = writeln!(out, "Teachers:");
    for t in &summary.teachers {
        let _ = writeln!(
            out,
            "  - Name: {:<20} ID: {} | {} courses",
            t.name, t.id, t.course_count
        );
    }

    let _ = writeln!(out, "Courses:");
    for c in &summary.courses {
        let _ = writeln!(
            out,
            "  - Name: {:<30} ID: {} | {} students with ⌀{}",
            c.name,
            c.id,
            c.student_count,
            format_grade(c.average_grade, places)
        );
    }

    out.push_str(&render_average_block(summary.average_grade));
    out.push_str(&render_better_block(summary, threshold, places));
    out
}

fn render_average_block(average: Option<Decimal>) -> String {
    let mut out = String::from("\n\nAverage grade of our Students:\n");
    match average {
        Some(value) => {
            let _ = writeln!(out, "{value}");
        }
        None => out.push_str("no grades recorded\n"),
    }
    out
}

fn render_better_block(summary: &UniversitySummary, threshold: Threshold, places: u32) -> String {
    let better = summary.students_better_or_equals(threshold.value());
    format!("\n{}\n{}", threshold.heading(), student_lines(&better, places))
}

/// Students, teachers and courses as tables, followed by the statistics.
pub fn render_table(summary: &UniversitySummary, threshold: Threshold, places: u32) -> String {
    let mut students = Table::new();
    students.set_header(vec!["ID", "Student", "Average"]);
    for s in &summary.students {
        students.add_row(vec![
            Cell::new(&s.id),
            Cell::new(&s.name),
            Cell::new(format_grade(s.average_grade, places)),
        ]);
    }

    let mut teachers = Table::new();
    teachers.set_header(vec!["ID", "Teacher", "Courses"]);
    for t in &summary.teachers {
        teachers.add_row(vec![
            Cell::new(&t.id),
            Cell::new(&t.name),
            Cell::new(t.course_count),
        ]);
    }

    let mut courses = Table::new();
    courses.set_header(vec!["ID", "Course", "Teacher", "Students", "Average"]);
    for c in &summary.courses {
        courses.add_row(vec![
            Cell::new(&c.id),
            Cell::new(&c.name),
            Cell::new(&c.teacher_id),
            Cell::new(c.student_count),
            Cell::new(format_grade(c.average_grade, places)),
        ]);
    }

    let mut out = format!("{students}\n{teachers}\n{courses}\n");
    out.push_str(&render_average_block(summary.average_grade));
    out.push_str(&render_better_block(summary, threshold, places));
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a UniversitySummary,
    threshold: Decimal,
    better_or_equal: Vec<&'a StudentSummary>,
}

/// The summary as pretty JSON, with the threshold and the filtered students.
pub fn render_json(summary: &UniversitySummary, threshold: Threshold) -> Result<String> {
    let report = JsonReport {
        summary,
        threshold: threshold.value(),
        better_or_equal: summary.students_better_or_equals(threshold.value()),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
