#![forbid(unsafe_code)]

//! Core domain model and calculations for workout statistics.
//!
//! This crate provides:
//! - Domain types (activity kinds, packages, measurement records)
//! - Activity model with per-kind distance, speed and calorie formulas
//! - Dispatcher from sensor codes to activities
//! - Report rendering and batch processing
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod activity;
pub mod dispatch;
pub mod report;
pub mod packages;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use activity::{Activity, ActivityVariant, BaseInputs};
pub use dispatch::{resolve, resolve_package, supported_codes};
pub use report::{process_packages, render_record, render_report};
pub use packages::sample_packages;
pub use config::Config;
