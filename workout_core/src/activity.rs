//! Activity model: distance, speed and calorie formulas per activity kind.
//!
//! Every formula is a single `match` over [`ActivityVariant`], so adding a
//! kind without a calorie formula fails to compile.

use crate::{ActivityKind, Error, MeasurementRecord, Result};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

// Running
const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

// Sports walking
const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

// Swimming
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Raw inputs shared by every activity kind
#[derive(Clone, Debug, PartialEq)]
pub struct BaseInputs {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

/// Kind-specific raw inputs
#[derive(Clone, Debug, PartialEq)]
pub enum ActivityVariant {
    Running,
    SportsWalking { height_cm: f64 },
    Swimming { pool_length_m: f64, pool_laps_count: u32 },
}

/// One workout session built from validated sensor values
///
/// Immutable once constructed; all derived values are recomputed on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    base: BaseInputs,
    variant: ActivityVariant,
}

impl Activity {
    /// Build a running session
    pub fn running(action_count: f64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            base: BaseInputs::new(action_count, duration_hours, weight_kg)?,
            variant: ActivityVariant::Running,
        })
    }

    /// Build a sports walking session
    pub fn sports_walking(
        action_count: f64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        Ok(Self {
            base: BaseInputs::new(action_count, duration_hours, weight_kg)?,
            variant: ActivityVariant::SportsWalking {
                height_cm: positive("height_cm", height_cm)?,
            },
        })
    }

    /// Build a swimming session
    pub fn swimming(
        action_count: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps_count: f64,
    ) -> Result<Self> {
        let base = BaseInputs::new(action_count, duration_hours, weight_kg)?;
        let pool_length_m = positive("pool_length_m", pool_length_m)?;
        let pool_laps_count = whole_count("pool_laps_count", pool_laps_count)?;
        if pool_laps_count == 0 {
            return Err(Error::InvalidMeasurement {
                field: "pool_laps_count",
                value: 0.0,
                reason: "must be greater than zero",
            });
        }

        Ok(Self {
            base,
            variant: ActivityVariant::Swimming {
                pool_length_m,
                pool_laps_count,
            },
        })
    }

    pub fn kind(&self) -> ActivityKind {
        match self.variant {
            ActivityVariant::Running => ActivityKind::Running,
            ActivityVariant::SportsWalking { .. } => ActivityKind::SportsWalking,
            ActivityVariant::Swimming { .. } => ActivityKind::Swimming,
        }
    }

    pub fn variant(&self) -> &ActivityVariant {
        &self.variant
    }

    pub fn action_count(&self) -> u32 {
        self.base.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.base.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.base.weight_kg
    }

    /// Distance covered in km, from step count and step length
    ///
    /// Swimming also uses the step formula (stroke length 1.38 m), even though
    /// its speed is derived from pool geometry.
    pub fn distance_km(&self) -> f64 {
        f64::from(self.base.action_count) * self.kind().step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.variant {
            ActivityVariant::Running | ActivityVariant::SportsWalking { .. } => {
                self.distance_km() / self.base.duration_hours
            }
            ActivityVariant::Swimming {
                pool_length_m,
                pool_laps_count,
            } => {
                pool_length_m * f64::from(pool_laps_count) / M_IN_KM / self.base.duration_hours
            }
        }
    }

    /// Calories spent during the session, in kcal
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        let BaseInputs {
            duration_hours,
            weight_kg,
            ..
        } = self.base;

        match self.variant {
            ActivityVariant::Running => {
                (RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
                    * (duration_hours * MIN_IN_H)
            }
            ActivityVariant::SportsWalking { height_cm } => {
                (WLK_WEIGHT_MULTIPLIER * weight_kg
                    + ((speed * KMH_IN_MSEC).powi(2) / (height_cm / CM_IN_M))
                        * WLK_SPEED_HEIGHT_MULTIPLIER
                        * weight_kg)
                    * (duration_hours * MIN_IN_H)
            }
            ActivityVariant::Swimming { .. } => {
                (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * weight_kg * duration_hours
            }
        }
    }

    /// Assemble the measurement record for this session
    pub fn build_report(&self) -> MeasurementRecord {
        MeasurementRecord {
            activity_kind: self.kind(),
            duration_hours: self.base.duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

impl BaseInputs {
    fn new(action_count: f64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            action_count: whole_count("action_count", action_count)?,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidMeasurement {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value <= 0.0 {
        return Err(Error::InvalidMeasurement {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

fn whole_count(field: &'static str, value: f64) -> Result<u32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Error::InvalidMeasurement {
            field,
            value,
            reason: "must be a whole number",
        });
    }
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::InvalidMeasurement {
            field,
            value,
            reason: "must be between 0 and 4294967295",
        });
    }
    Ok(value as u32)
}
