//! Core domain types for workout statistics.
//!
//! This module defines the value types shared across the crate:
//! - Activity kinds and their fixed per-kind constants
//! - Raw input packages as delivered by sensors
//! - The computed measurement record
//! - Output format selection

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Activity Kinds
// ============================================================================

/// Kind of workout activity
///
/// Serializes as its display label ("Running", "SportsWalking", "Swimming").
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    /// All supported kinds
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::SportsWalking,
        ActivityKind::Swimming,
    ];

    /// Label shown in reports
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Sensor code identifying this kind in raw input
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Number of positional raw values this kind is built from
    pub fn arity(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    /// Length of one step (or stroke) in meters
    pub fn step_length_m(self) -> f64 {
        match self {
            ActivityKind::Running | ActivityKind::SportsWalking => 0.65,
            ActivityKind::Swimming => 1.38,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Input and Output Types
// ============================================================================

/// One raw sensor package: an activity code plus positional values
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub code: String,
    pub args: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, args: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            args: args.into(),
        }
    }
}

/// Computed summary of one workout session, ready for display
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MeasurementRecord {
    pub activity_kind: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// How measurement records are written out
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable single line per record
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "Unknown output format: {} (expected text or json)",
                other
            ))),
        }
    }
}
