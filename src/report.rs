//! Workout summary rendering
//!
//! One fixed-format text line per workout. Every numeric field is printed
//! with exactly three decimal digits regardless of magnitude.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Sport;

/// Derived metrics for one workout, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub sport: Sport,
    pub duration_hours: Decimal,
    pub distance_km: Decimal,
    pub mean_speed_kmh: Decimal,
    pub calories_kcal: Decimal,
}

impl TrainingSummary {
    /// Render the fixed-format report line
    ///
    /// Fields are rounded to three decimals up front: precision formatting
    /// on `Decimal` truncates, it does not round.
    pub fn format_line(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories spent: {:.3}.",
            self.sport,
            self.duration_hours.round_dp(3),
            self.distance_km.round_dp(3),
            self.mean_speed_kmh.round_dp(3),
            self.calories_kcal.round_dp(3),
        )
    }
}

impl std::fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_line())
    }
}
