//! Sensor package dispatch
//!
//! Maps an activity code to the matching workout constructor and spreads the
//! positional sensor values into it. The match over codes is exhaustive over
//! the three known activities; anything else is a typed error rather than a
//! silent no-op.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{DispatchError, Result};
use crate::models::Workout;
use crate::running::RunningWorkout;
use crate::swimming::SwimmingWorkout;
use crate::walking::WalkingWorkout;

/// Resolve one sensor package to a workout record
///
/// Positional layout per code:
/// - `RUN`: steps, duration_hours, weight_kg
/// - `WLK`: steps, duration_hours, weight_kg, height_cm
/// - `SWM`: strokes, duration_hours, weight_kg, pool_length_m, pool_lengths_count
pub fn read_package(workout_type: &str, data: &[Decimal]) -> Result<Workout> {
    debug!(code = workout_type, values = data.len(), "resolving sensor package");

    let workout = match workout_type {
        "SWM" => {
            check_arity("SWM", data, 5)?;
            Workout::Swimming(SwimmingWorkout::new(
                unit_count("SWM", data[0])?,
                data[1],
                data[2],
                data[3],
                data[4],
            )?)
        }
        "RUN" => {
            check_arity("RUN", data, 3)?;
            Workout::Running(RunningWorkout::new(
                unit_count("RUN", data[0])?,
                data[1],
                data[2],
            )?)
        }
        "WLK" => {
            check_arity("WLK", data, 4)?;
            Workout::Walking(WalkingWorkout::new(
                unit_count("WLK", data[0])?,
                data[1],
                data[2],
                data[3],
            )?)
        }
        other => {
            return Err(DispatchError::UnknownWorkoutType {
                code: other.to_string(),
            }
            .into())
        }
    };

    Ok(workout)
}

fn check_arity(
    code: &'static str,
    data: &[Decimal],
    expected: usize,
) -> std::result::Result<(), DispatchError> {
    if data.len() != expected {
        return Err(DispatchError::WrongFieldCount {
            code,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// The first field is a raw step/stroke count: a non-negative whole number
fn unit_count(code: &'static str, value: Decimal) -> std::result::Result<u32, DispatchError> {
    if !value.is_integer() {
        return Err(DispatchError::InvalidField {
            code,
            field: "distance_units",
            value,
        });
    }
    value.to_u32().ok_or(DispatchError::InvalidField {
        code,
        field: "distance_units",
        value,
    })
}
