//! Core data model: the closed set of activity kinds and the workout sum type.

use serde::{Deserialize, Serialize};

use crate::metrics::TrainingMetrics;
use crate::running::RunningWorkout;
use crate::swimming::SwimmingWorkout;
use crate::walking::WalkingWorkout;
use rust_decimal::Decimal;

/// Activity kinds supported by the statistics layer
///
/// This set is closed: dispatch matches exhaustively over the three codes
/// and there is no runtime registration of new kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Running,
    Walking,
    Swimming,
}

impl Sport {
    /// Human-readable activity name used in report lines
    pub fn name(&self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::Walking => "Walking",
            Sport::Swimming => "Swimming",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One recorded workout, tagged by activity kind
///
/// Each variant holds only the measurements its formulas need; there is no
/// shared base record with unused fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(RunningWorkout),
    Walking(WalkingWorkout),
    Swimming(SwimmingWorkout),
}

impl TrainingMetrics for Workout {
    fn sport(&self) -> Sport {
        match self {
            Workout::Running(w) => w.sport(),
            Workout::Walking(w) => w.sport(),
            Workout::Swimming(w) => w.sport(),
        }
    }

    fn duration_hours(&self) -> Decimal {
        match self {
            Workout::Running(w) => w.duration_hours(),
            Workout::Walking(w) => w.duration_hours(),
            Workout::Swimming(w) => w.duration_hours(),
        }
    }

    fn distance_km(&self) -> Decimal {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::Walking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    fn mean_speed_kmh(&self) -> Decimal {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::Walking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    fn calories_kcal(&self) -> Decimal {
        match self {
            Workout::Running(w) => w.calories_kcal(),
            Workout::Walking(w) => w.calories_kcal(),
            Workout::Swimming(w) => w.calories_kcal(),
        }
    }
}
