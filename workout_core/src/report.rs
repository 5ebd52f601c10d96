//! Report rendering for measurement records.
//!
//! This module turns activities into output lines:
//! - Fixed-layout text line per record (three decimals, `.` separator)
//! - JSON line per record
//! - Batch processing of raw packages with optional skip-on-error

use crate::{dispatch, Activity, MeasurementRecord, OutputFormat, Package, Result};
use std::fmt;

impl MeasurementRecord {
    /// Human-readable summary line
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MeasurementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories spent: {:.3}.",
            self.activity_kind,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}

/// Build the activity's record and render it as a text line
pub fn render_report(activity: &Activity) -> String {
    activity.build_report().message()
}

/// Render a record in the requested output format
pub fn render_record(record: &MeasurementRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(record.message()),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
    }
}

/// Resolve and measure every package in order
///
/// With `skip_invalid`, packages that fail to resolve are logged and left
/// out of the result. Otherwise the first failure is returned.
pub fn process_packages(packages: &[Package], skip_invalid: bool) -> Result<Vec<MeasurementRecord>> {
    let mut records = Vec::with_capacity(packages.len());

    for (index, package) in packages.iter().enumerate() {
        match dispatch::resolve_package(package) {
            Ok(activity) => records.push(activity.build_report()),
            Err(e) if skip_invalid => {
                tracing::warn!(
                    "Skipping package #{} ({}): {}",
                    index,
                    package.code,
                    e
                );
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Processed {} of {} packages",
        records.len(),
        packages.len()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityKind, Error};

    #[test]
    fn test_running_report_line() {
        let run = dispatch::resolve("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(
            render_report(&run),
            "Activity type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories spent: 797.805."
        );
    }

    #[test]
    fn test_swimming_report_line() {
        let swim = dispatch::resolve("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            render_report(&swim),
            "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories spent: 336.000."
        );
    }

    #[test]
    fn test_walking_report_line() {
        let walk = dispatch::resolve("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            render_report(&walk),
            "Activity type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories spent: 349.252."
        );
    }

    #[test]
    fn test_render_json() {
        let run = dispatch::resolve("RUN", &[15000.0, 1.5, 80.0]).unwrap();
        let line = render_record(&run.build_report(), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["activity_kind"], "Running");
        assert_eq!(value["duration_hours"], 1.5);
        assert!((value["mean_speed_kmh"].as_f64().unwrap() - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_process_packages_in_order() {
        let records = process_packages(&crate::sample_packages(), false).unwrap();
        let kinds: Vec<_> = records.iter().map(|r| r.activity_kind).collect();
        assert_eq!(
            kinds,
            vec![
                ActivityKind::Swimming,
                ActivityKind::Running,
                ActivityKind::SportsWalking
            ]
        );
    }

    #[test]
    fn test_process_packages_stops_on_error() {
        let packages = vec![
            Package::new("RUN", [15000.0, 1.0, 75.0]),
            Package::new("XYZ", [1.0, 1.0, 1.0]),
            Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ];

        let err = process_packages(&packages, false).unwrap_err();
        assert!(matches!(err, Error::UnknownActivityKind(_)));
    }

    #[test]
    fn test_process_packages_skips_invalid() {
        let packages = vec![
            Package::new("RUN", [15000.0, 1.0, 75.0]),
            Package::new("XYZ", [1.0, 1.0, 1.0]),
            Package::new("RUN", [1.0, 1.0]),
            Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ];

        let records = process_packages(&packages, true).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].activity_kind, ActivityKind::SportsWalking);
    }
}
