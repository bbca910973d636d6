use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{self, WorkoutFileError};

/// Activity type declared when a workout is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
    Hiking,
    /// Anything the recorder does not know about
    Other,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
            WorkoutType::Hiking => "hiking",
            WorkoutType::Other => "other",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = std::convert::Infallible;

    /// Unrecognized names map to [`WorkoutType::Other`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "running" => WorkoutType::Running,
            "cycling" => WorkoutType::Cycling,
            "hiking" => WorkoutType::Hiking,
            _ => WorkoutType::Other,
        })
    }
}

impl<'de> Deserialize<'de> for WorkoutType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or(WorkoutType::Other))
    }
}

/// Recorded workout as supplied by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Total distance in meters
    pub length: i64,

    /// Moving duration in milliseconds
    pub duration: i64,

    /// Time spent paused in milliseconds
    pub pause_duration: i64,

    /// Start time in epoch milliseconds
    pub start: i64,

    /// End time in epoch milliseconds
    pub end: i64,

    /// Average speed as recorded upstream
    pub avg_speed: f64,

    /// Top speed as recorded upstream
    pub top_speed: f64,

    /// Average pace in minutes per kilometer
    pub avg_pace: f64,

    /// Burned energy in kilocalories
    pub calorie: i64,

    /// Total ascent in meters
    #[serde(default)]
    pub ascent: f64,

    /// Total descent in meters
    #[serde(default)]
    pub descent: f64,

    pub workout_type: WorkoutType,

    #[serde(default)]
    pub comment: Option<String>,

    /// Set once the user edited the recorded data
    #[serde(default)]
    pub edited: bool,

    /// Whether location samples (and therefore elevation data) exist
    #[serde(default)]
    pub has_samples: bool,
}

impl Workout {
    /// Load a workout record from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> error::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WorkoutFileError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = fs::read_to_string(path)?;
        let workout = serde_json::from_str(&content).map_err(|e| WorkoutFileError::InvalidRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "Loaded workout record");
        Ok(workout)
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.start)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.end)
    }

    /// Energy consumption in kcal per kilometer.
    ///
    /// A zero length yields an infinite or NaN value.
    pub fn energy_per_kilometer(&self) -> f64 {
        self.calorie as f64 / (self.length as f64 / 1000.0)
    }

    /// Comment text, ignoring empty comments
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref().filter(|comment| !comment.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitUnitsError;
    use tempfile::tempdir;

    fn sample_workout() -> Workout {
        Workout {
            length: 5000,
            duration: 1_800_000,
            pause_duration: 60_000,
            start: 1_700_000_000_000,
            end: 1_700_001_860_000,
            avg_speed: 10.0,
            top_speed: 14.2,
            avg_pace: 6.0,
            calorie: 350,
            ascent: 42.7,
            descent: 40.1,
            workout_type: WorkoutType::Running,
            comment: Some("Morning loop".to_string()),
            edited: false,
            has_samples: true,
        }
    }

    #[test]
    fn test_workout_type_parsing() {
        assert_eq!("running".parse::<WorkoutType>().unwrap(), WorkoutType::Running);
        assert_eq!("Cycling".parse::<WorkoutType>().unwrap(), WorkoutType::Cycling);
        assert_eq!("hiking".parse::<WorkoutType>().unwrap(), WorkoutType::Hiking);
        assert_eq!("swimming".parse::<WorkoutType>().unwrap(), WorkoutType::Other);
    }

    #[test]
    fn test_workout_type_serde() {
        let parsed: WorkoutType = serde_json::from_str("\"cycling\"").unwrap();
        assert_eq!(parsed, WorkoutType::Cycling);

        let unknown: WorkoutType = serde_json::from_str("\"rowing\"").unwrap();
        assert_eq!(unknown, WorkoutType::Other);

        assert_eq!(serde_json::to_string(&WorkoutType::Hiking).unwrap(), "\"hiking\"");
    }

    #[test]
    fn test_workout_deserialization_defaults() {
        let json = r#"{
            "length": 1200,
            "duration": 600000,
            "pause_duration": 0,
            "start": 0,
            "end": 600000,
            "avg_speed": 7.2,
            "top_speed": 9.0,
            "avg_pace": 8.3,
            "calorie": 90,
            "workout_type": "running"
        }"#;

        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.length, 1200);
        assert_eq!(workout.ascent, 0.0);
        assert_eq!(workout.comment, None);
        assert!(!workout.edited);
        assert!(!workout.has_samples);
    }

    #[test]
    fn test_energy_per_kilometer() {
        let workout = sample_workout();
        assert_eq!(workout.energy_per_kilometer(), 70.0);

        let empty = Workout { length: 0, ..sample_workout() };
        assert!(empty.energy_per_kilometer().is_infinite());
    }

    #[test]
    fn test_comment_text() {
        let workout = sample_workout();
        assert_eq!(workout.comment_text(), Some("Morning loop"));

        let blank = Workout { comment: Some(String::new()), ..sample_workout() };
        assert_eq!(blank.comment_text(), None);
    }

    #[test]
    fn test_timestamps() {
        let workout = sample_workout();
        let start = workout.start_time().unwrap();
        assert_eq!(start.timestamp_millis(), 1_700_000_000_000);
        assert!(workout.end_time().unwrap() > start);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("workout.json");
        fs::write(&path, serde_json::to_string(&sample_workout()).unwrap()).unwrap();

        let loaded = Workout::load_from_file(&path).unwrap();
        assert_eq!(loaded, sample_workout());
    }

    #[test]
    fn test_load_from_file_errors() {
        let temp_dir = tempdir().unwrap();

        let missing = Workout::load_from_file(temp_dir.path().join("missing.json"));
        assert!(matches!(
            missing,
            Err(FitUnitsError::WorkoutFile(WorkoutFileError::FileNotFound { .. }))
        ));

        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ \"length\": ").unwrap();
        let broken = Workout::load_from_file(&path);
        assert!(matches!(
            broken,
            Err(FitUnitsError::WorkoutFile(WorkoutFileError::InvalidRecord { .. }))
        ));
    }
}
