//! Library interface for fitunits modules
//!
//! Unit systems, measurement formatting and workout classification, shared
//! by the CLI and the integration tests.

pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod registry;
pub mod report;
pub mod units;

// Re-export commonly used types for convenience
pub use classify::{WorkoutLabel, WorkoutTypeClassifier};
pub use config::AppConfig;
pub use error::{FitUnitsError, Result};
pub use format::{duration_long, duration_short, round, MeasurementFormatter};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{Workout, WorkoutType};
pub use registry::{SharedUnitRegistry, UnitSystemRegistry};
pub use report::{ReportFormat, WorkoutReport};
pub use units::UnitSystem;
