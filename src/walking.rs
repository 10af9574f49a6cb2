//! Walking workout record and calorie formula
//!
//! Walking shares the step-based distance and speed formulas with running and
//! overrides only the calorie computation, which additionally needs the
//! participant's height.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CalculationError;
use crate::metrics::{mean_speed_kmh, step_distance_km, TrainingMetrics, MIN_IN_H};
use crate::models::Sport;

/// Weight multiplier in the walking calorie formula
const CALORIE_WEIGHT_FACTOR: Decimal = dec!(0.035);

/// Multiplier on the speed/height term in the walking calorie formula
const CALORIE_SPEED_HEIGHT_FACTOR: Decimal = dec!(0.029);

/// Measurements for one walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct WalkingWorkout {
    steps: u32,
    duration_hours: Decimal,
    weight_kg: Decimal,
    height_cm: Decimal,
}

impl WalkingWorkout {
    /// Build a walking record, rejecting non-positive duration and height
    /// (both are divided by)
    pub fn new(
        steps: u32,
        duration_hours: Decimal,
        weight_kg: Decimal,
        height_cm: Decimal,
    ) -> Result<Self, CalculationError> {
        if duration_hours <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveParameter {
                activity: "Walking",
                parameter: "duration_hours",
                value: duration_hours,
            });
        }
        if height_cm <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveParameter {
                activity: "Walking",
                parameter: "height_cm",
                value: height_cm,
            });
        }
        Ok(Self {
            steps,
            duration_hours,
            weight_kg,
            height_cm,
        })
    }
}

impl TrainingMetrics for WalkingWorkout {
    fn sport(&self) -> Sport {
        Sport::Walking
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

    /// (0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * duration * 60
    ///
    /// The speed-squared-over-height term uses floor division, not real
    /// division; the truncation changes the numeric result and is
    /// intentional.
    fn calories_kcal(&self) -> Decimal {
        let speed = self.mean_speed_kmh();
        let speed_sq_per_height = (speed * speed / self.height_cm).floor();
        (CALORIE_WEIGHT_FACTOR * self.weight_kg
            + speed_sq_per_height * CALORIE_SPEED_HEIGHT_FACTOR * self.weight_kg)
            * self.duration_hours
            * MIN_IN_H
    }
}
