//! Running workout record and calorie formula

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CalculationError;
use crate::metrics::{mean_speed_kmh, step_distance_km, TrainingMetrics, M_IN_KM, MIN_IN_H};
use crate::models::Sport;

/// Speed multiplier in the running calorie formula
const CALORIE_SPEED_FACTOR: Decimal = dec!(18);

/// Flat speed offset in the running calorie formula
const CALORIE_SPEED_SHIFT: Decimal = dec!(20);

/// Measurements for one running workout
#[derive(Debug, Clone, PartialEq)]
pub struct RunningWorkout {
    steps: u32,
    duration_hours: Decimal,
    weight_kg: Decimal,
}

impl RunningWorkout {
    /// Build a running record, rejecting a non-positive duration
    pub fn new(
        steps: u32,
        duration_hours: Decimal,
        weight_kg: Decimal,
    ) -> Result<Self, CalculationError> {
        if duration_hours <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveParameter {
                activity: "Running",
                parameter: "duration_hours",
                value: duration_hours,
            });
        }
        Ok(Self {
            steps,
            duration_hours,
            weight_kg,
        })
    }
}

impl TrainingMetrics for RunningWorkout {
    fn sport(&self) -> Sport {
        Sport::Running
    }

    fn duration_hours(&self) -> Decimal {
        self.duration_hours
    }

    fn distance_km(&self) -> Decimal {
        step_distance_km(self.steps)
    }

    fn mean_speed_kmh(&self) -> Decimal {
        mean_speed_kmh(self.distance_km(), self.duration_hours)
    }

    /// ((18 * speed - 20) * weight / 1000) * duration * 60
    ///
    /// Goes negative at very low mean speeds; reported as-is, no clamping.
    fn calories_kcal(&self) -> Decimal {
        (CALORIE_SPEED_FACTOR * self.mean_speed_kmh() - CALORIE_SPEED_SHIFT) * self.weight_kg
            / M_IN_KM
            * self.duration_hours
            * MIN_IN_H
    }
}
