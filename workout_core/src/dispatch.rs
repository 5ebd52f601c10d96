//! Dispatcher from sensor codes to activity constructors.
//!
//! The code table is built once and reused across all lookups.

use crate::{Activity, ActivityKind, Error, Package, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Constructor taking exactly `kind.arity()` positional values
type BuildFn = fn(&[f64]) -> Result<Activity>;

/// One entry of the dispatch table
#[derive(Clone, Copy)]
struct ActivityEntry {
    kind: ActivityKind,
    build: BuildFn,
}

/// Cached code table
static ACTIVITY_TABLE: Lazy<HashMap<&'static str, ActivityEntry>> = Lazy::new(|| {
    ActivityKind::ALL
        .into_iter()
        .map(|kind| {
            let build: BuildFn = match kind {
                ActivityKind::Running => build_running,
                ActivityKind::SportsWalking => build_sports_walking,
                ActivityKind::Swimming => build_swimming,
            };
            (kind.code(), ActivityEntry { kind, build })
        })
        .collect()
});

fn build_running(args: &[f64]) -> Result<Activity> {
    Activity::running(args[0], args[1], args[2])
}

fn build_sports_walking(args: &[f64]) -> Result<Activity> {
    Activity::sports_walking(args[0], args[1], args[2], args[3])
}

fn build_swimming(args: &[f64]) -> Result<Activity> {
    Activity::swimming(args[0], args[1], args[2], args[3], args[4])
}

/// Resolve an activity code and its positional values into an [`Activity`]
///
/// Values are bound in constructor order:
/// - `RUN`: action_count, duration_hours, weight_kg
/// - `WLK`: action_count, duration_hours, weight_kg, height_cm
/// - `SWM`: action_count, duration_hours, weight_kg, pool_length_m, pool_laps_count
///
/// The argument count is checked before any constructor runs.
pub fn resolve(code: &str, args: &[f64]) -> Result<Activity> {
    let entry = ACTIVITY_TABLE
        .get(code)
        .ok_or_else(|| Error::UnknownActivityKind(code.to_string()))?;

    let expected = entry.kind.arity();
    if args.len() != expected {
        return Err(Error::ArgumentCountMismatch {
            code: code.to_string(),
            expected,
            actual: args.len(),
        });
    }

    tracing::debug!("Resolved {} to {} with {:?}", code, entry.kind, args);
    (entry.build)(args)
}

/// Resolve a raw package
pub fn resolve_package(package: &Package) -> Result<Activity> {
    resolve(&package.code, &package.args)
}

/// Recognized activity codes, sorted
pub fn supported_codes() -> Vec<&'static str> {
    let mut codes: Vec<_> = ACTIVITY_TABLE.keys().copied().collect();
    codes.sort_unstable();
    codes
}
