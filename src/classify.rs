//! Refinement of a workout's declared activity type

use crate::models::{Workout, WorkoutType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running workouts slower than this average speed count as walking
pub const WALKING_SPEED_LIMIT: f64 = 7.0;

/// Running workouts slower than this average speed count as jogging
pub const JOGGING_SPEED_LIMIT: f64 = 9.6;

/// Refined workout label shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutLabel {
    Walking,
    Jogging,
    Running,
    Cycling,
    Hiking,
    Unknown,
}

impl WorkoutLabel {
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutLabel::Walking => "Walking",
            WorkoutLabel::Jogging => "Jogging",
            WorkoutLabel::Running => "Running",
            WorkoutLabel::Cycling => "Cycling",
            WorkoutLabel::Hiking => "Hiking",
            WorkoutLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WorkoutLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Maps activity type and average speed to a [`WorkoutLabel`]
pub struct WorkoutTypeClassifier;

impl WorkoutTypeClassifier {
    /// Classify a workout by type and average speed.
    ///
    /// The speed thresholds are compared against `avg_speed` exactly as
    /// recorded; no unit conversion happens here. Both bounds are exclusive:
    /// 7.0 is jogging and 9.6 is running.
    pub fn classify(workout_type: WorkoutType, avg_speed: f64) -> WorkoutLabel {
        match workout_type {
            WorkoutType::Running => {
                if avg_speed < WALKING_SPEED_LIMIT {
                    WorkoutLabel::Walking
                } else if avg_speed < JOGGING_SPEED_LIMIT {
                    WorkoutLabel::Jogging
                } else {
                    WorkoutLabel::Running
                }
            }
            WorkoutType::Cycling => WorkoutLabel::Cycling,
            WorkoutType::Hiking => WorkoutLabel::Hiking,
            WorkoutType::Other => WorkoutLabel::Unknown,
        }
    }

    pub fn classify_workout(workout: &Workout) -> WorkoutLabel {
        Self::classify(workout.workout_type, workout.avg_speed)
    }
}
