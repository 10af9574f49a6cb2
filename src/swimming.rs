//! Swimming workout record and metric formulas
//!
//! Swimming overrides all three metrics: distance is stroke-based with its
//! own unit length, and mean speed comes from pool geometry rather than from
//! the derived distance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CalculationError;
use crate::metrics::{TrainingMetrics, M_IN_KM};
use crate::models::Sport;

/// Distance covered by one stroke, in meters
const STROKE_LENGTH_M: Decimal = dec!(1.38);

/// Flat speed offset in the swimming calorie formula
const CALORIE_SPEED_SHIFT: Decimal = dec!(1.1);

/// Weight multiplier in the swimming calorie formula
const CALORIE_WEIGHT_FACTOR: Decimal = dec!(2);

/// Measurements for one swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct SwimmingWorkout {
    strokes: u32,
    duration_hours: Decimal,
    weight_kg: Decimal,
    pool_length_m: Decimal,
    pool_lengths_count: Decimal,
}

impl SwimmingWorkout {
    /// Build a swimming record, rejecting a non-positive duration
    pub fn new(
        strokes: u32,
        duration_hours: Decimal,
        weight_kg: Decimal,
        pool_length_m: Decimal,
        pool_lengths_count: Decimal,
    ) -> Result<Self, CalculationError> {
        if duration_hours <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveParameter {
                activity: "Swimming",
                parameter: "duration_hours",
                value: duration_hours,
            });
        }
        Ok(Self {
            strokes,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lengths_count,
        })
    }
}

impl TrainingMetrics for SwimmingWorkout {
    fn sport(&self) -> Sport {
        Sport::Swimming
    }

    fn duration_hours(&self) -> Decimal {
        self.duration_hours
    }

    fn distance_km(&self) -> Decimal {
        Decimal::from(self.strokes) * STROKE_LENGTH_M / M_IN_KM
    }

    /// Speed is pool length times lap count over duration, independent of
    /// the stroke-derived distance
    fn mean_speed_kmh(&self) -> Decimal {
        self.pool_length_m * self.pool_lengths_count / M_IN_KM / self.duration_hours
    }

    /// (speed + 1.1) * 2 * weight
    fn calories_kcal(&self) -> Decimal {
        (self.mean_speed_kmh() + CALORIE_SPEED_SHIFT) * CALORIE_WEIGHT_FACTOR * self.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SwimmingWorkout {
        SwimmingWorkout::new(720, dec!(1), dec!(80), dec!(25), dec!(40)).unwrap()
    }

    #[test]
    fn test_distance_uses_stroke_length() {
        assert_eq!(sample().distance_km(), dec!(0.9936));
    }

    #[test]
    fn test_speed_uses_pool_geometry() {
        // 25 m * 40 laps / 1000 / 1 h
        assert_eq!(sample().mean_speed_kmh(), dec!(1.000));
    }

    #[test]
    fn test_calories() {
        // (1.0 + 1.1) * 2 * 80
        assert_eq!(sample().calories_kcal(), dec!(336.000));
    }

    #[test]
    fn test_speed_ignores_stroke_distance() {
        // Same pool geometry with a different stroke count keeps the speed
        let choppy = SwimmingWorkout::new(1440, dec!(1), dec!(80), dec!(25), dec!(40)).unwrap();
        assert_eq!(choppy.mean_speed_kmh(), sample().mean_speed_kmh());
        assert_ne!(choppy.distance_km(), sample().distance_km());
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(SwimmingWorkout::new(720, dec!(0), dec!(80), dec!(25), dec!(40)).is_err());
    }
}
