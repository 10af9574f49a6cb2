//! Shared calculation contract for workout metrics
//!
//! Every activity kind exposes distance, mean speed and calories through the
//! [`TrainingMetrics`] trait. The step-based distance and speed formulas used
//! by running and walking live here; swimming overrides both.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Sport;
use crate::report::TrainingSummary;

/// Meters per kilometer, used as the unit-length divisor in every formula
pub const M_IN_KM: Decimal = dec!(1000);

/// Distance covered by one step, in meters
pub const STEP_LENGTH_M: Decimal = dec!(0.65);

/// Minutes per hour, converts hour-based durations into the calorie formulas
pub const MIN_IN_H: Decimal = dec!(60);

/// Metric interface implemented by each activity kind
///
/// All values are derived on every call; nothing is cached. A workout record
/// is immutable after construction, so repeated calls always agree. The
/// calorie formula has no default: an activity kind without one cannot
/// implement this trait, so an undifferentiated record is unrepresentable.
pub trait TrainingMetrics {
    /// Activity kind of this workout
    fn sport(&self) -> Sport;

    /// Elapsed time in hours
    fn duration_hours(&self) -> Decimal;

    /// Distance covered, in kilometers
    fn distance_km(&self) -> Decimal;

    /// Mean speed over the workout, in km/h
    fn mean_speed_kmh(&self) -> Decimal;

    /// Calories burned, activity-specific formula
    fn calories_kcal(&self) -> Decimal;

    /// Snapshot of all derived metrics for reporting
    fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            sport: self.sport(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// Step-count distance shared by running and walking
pub(crate) fn step_distance_km(steps: u32) -> Decimal {
    Decimal::from(steps) * STEP_LENGTH_M / M_IN_KM
}

/// Mean speed from an already-derived distance
pub(crate) fn mean_speed_kmh(distance_km: Decimal, duration_hours: Decimal) -> Decimal {
    distance_km / duration_hours
}
