//! Workout detail report
//!
//! Assembles the sectioned key/value listing shown for a single workout from
//! the formatted measurements. The report is plain data; rendering it is up
//! to the caller; [`WorkoutReport::render`] covers aligned text and JSON.

use crate::classify::{WorkoutLabel, WorkoutTypeClassifier};
use crate::error::{FitUnitsError, Result};
use crate::format::MeasurementFormatter;
use crate::models::Workout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Aligned plain text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for ReportFormat {
    type Err = FitUnitsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(FitUnitsError::Validation(format!("Unsupported output format: {}", s))),
        }
    }
}

/// A single labelled value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: String,
}

impl ReportEntry {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Titled group of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub entries: Vec<ReportEntry>,
}

impl ReportSection {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    fn entry(mut self, label: &str, value: impl Into<String>) -> Self {
        self.entries.push(ReportEntry::new(label, value));
        self
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value.as_str())
    }
}

/// Formatted detail view of one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutReport {
    pub label: WorkoutLabel,
    pub unit_system: String,
    pub sections: Vec<ReportSection>,
}

impl WorkoutReport {
    pub fn build(workout: &Workout, formatter: &MeasurementFormatter) -> Self {
        let mut sections = vec![
            notes_section(workout),
            ReportSection::new("Time")
                .entry("Date", format_timestamp(workout.start_time(), DATE_FORMAT))
                .entry("Duration", formatter.duration_long(workout.duration))
                .entry("Pause duration", formatter.duration_long(workout.pause_duration))
                .entry("Start time", format_timestamp(workout.start_time(), TIME_FORMAT))
                .entry("End time", format_timestamp(workout.end_time(), TIME_FORMAT)),
            ReportSection::new("Distance")
                .entry("Distance", formatter.distance(workout.length))
                .entry("Pace", formatter.pace(workout.avg_pace)),
            ReportSection::new("Speed")
                .entry("Average speed", formatter.speed(workout.avg_speed))
                .entry("Top speed", formatter.speed(workout.top_speed)),
            ReportSection::new("Energy")
                .entry("Total energy", formatter.energy(workout.calorie))
                .entry(
                    "Energy consumption",
                    formatter.relative_energy(workout.energy_per_kilometer()),
                ),
        ];

        if workout.has_samples {
            sections.push(
                ReportSection::new("Height")
                    .entry("Ascent", formatter.distance(workout.ascent as i64))
                    .entry("Descent", formatter.distance(workout.descent as i64)),
            );
        }

        let label = WorkoutTypeClassifier::classify_workout(workout);
        tracing::debug!(%label, sections = sections.len(), "Built workout report");

        Self {
            label,
            unit_system: formatter.system().name().to_string(),
            sections,
        }
    }

    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// Render as aligned plain text
    pub fn render_text(&self) -> String {
        let width = self
            .sections
            .iter()
            .flat_map(|section| section.entries.iter())
            .map(|entry| entry.label.len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("{} ({})\n", self.label, self.unit_system));

        for section in &self.sections {
            out.push('\n');
            out.push_str(&format!("{}\n", section.title.to_uppercase()));
            for entry in &section.entries {
                out.push_str(&format!("  {:<width$}  {}\n", entry.label, entry.value, width = width));
            }
        }

        out
    }

    /// Render in the requested output format
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

fn notes_section(workout: &Workout) -> ReportSection {
    let mut section = ReportSection::new("Notes");
    if workout.edited {
        section = section.entry("Status", "Edited");
    }
    if let Some(comment) = workout.comment_text() {
        section = section.entry("Comment", comment);
    }
    if section.entries.is_empty() {
        section = section.entry("Comment", "No comment");
    }
    section
}

fn format_timestamp(timestamp: Option<DateTime<Utc>>, pattern: &str) -> String {
    timestamp
        .map(|ts| ts.format(pattern).to_string())
        .unwrap_or_else(|| "-".to_string())
}
