use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trainlog::{dispatch, TrainingMetrics};

/// Integration tests covering the full dispatch -> calculate -> format flow

fn sample_packages() -> Vec<(&'static str, Vec<Decimal>)> {
    vec![
        ("SWM", vec![dec!(720), dec!(1), dec!(80), dec!(25), dec!(40)]),
        ("RUN", vec![dec!(15000), dec!(1), dec!(75)]),
        ("WLK", vec![dec!(9000), dec!(1), dec!(75), dec!(180)]),
    ]
}

#[test]
fn test_sample_packages_render_in_input_order() {
    let lines: Vec<String> = sample_packages()
        .iter()
        .map(|(code, data)| {
            dispatch::read_package(code, data)
                .unwrap()
                .summary()
                .format_line()
        })
        .collect();

    assert_eq!(
        lines,
        vec![
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories spent: 336.000.",
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories spent: 699.750.",
            "Training type: Walking; Duration: 1.000 h; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories spent: 157.500.",
        ]
    );
}

#[test]
fn test_running_sample_metrics() {
    let run = dispatch::read_package("RUN", &[dec!(15000), dec!(1), dec!(75)]).unwrap();
    assert_eq!(run.distance_km(), dec!(9.750));
    assert_eq!(run.mean_speed_kmh(), dec!(9.750));
    // ((18 * 9.75 - 20) * 75 / 1000) * 1 * 60
    assert_eq!(run.calories_kcal(), dec!(699.750));
}

#[test]
fn test_walking_sample_metrics() {
    let walk = dispatch::read_package("WLK", &[dec!(9000), dec!(1), dec!(75), dec!(180)]).unwrap();
    assert_eq!(walk.distance_km(), dec!(5.850));
    assert_eq!(walk.mean_speed_kmh(), dec!(5.850));
    // floor(5.85^2 / 180) = 0, so only the 0.035 * weight term remains
    assert_eq!(walk.calories_kcal(), dec!(157.500));
}

#[test]
fn test_swimming_sample_metrics() {
    let swim =
        dispatch::read_package("SWM", &[dec!(720), dec!(1), dec!(80), dec!(25), dec!(40)]).unwrap();
    assert_eq!(swim.distance_km(), dec!(0.9936));
    assert_eq!(swim.mean_speed_kmh(), dec!(1));
    assert_eq!(swim.calories_kcal(), dec!(336));
}

#[test]
fn test_unknown_code_surfaces_valid_codes() {
    let err = dispatch::read_package("XYZ", &[dec!(1), dec!(1), dec!(1)]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("SWM"));
    assert!(msg.contains("RUN"));
    assert!(msg.contains("WLK"));
}

#[test]
fn test_metrics_are_recomputed_not_cached() {
    let run = dispatch::read_package("RUN", &[dec!(15000), dec!(1), dec!(75)]).unwrap();
    assert_eq!(run.distance_km(), run.distance_km());
    assert_eq!(run.summary(), run.summary());
}

#[test]
fn test_json_summary_shape() {
    let swim =
        dispatch::read_package("SWM", &[dec!(720), dec!(1), dec!(80), dec!(25), dec!(40)]).unwrap();
    let json = serde_json::to_string(&swim.summary()).unwrap();
    assert!(json.contains("\"sport\":\"Swimming\""));
    assert!(json.contains("\"calories_kcal\""));
}

mod shared_base_properties {
    use super::*;
    use proptest::prelude::*;

    fn duration_hours() -> impl Strategy<Value = Decimal> {
        // tenths of an hour, 0.1 to 24.0
        (1i64..=240).prop_map(|t| Decimal::new(t, 1))
    }

    fn weight_kg() -> impl Strategy<Value = Decimal> {
        // tenths of a kilogram, 30.0 to 150.0
        (300i64..=1500).prop_map(|w| Decimal::new(w, 1))
    }

    proptest! {
        /// Running and walking share the step-based distance and speed
        /// formulas; only their calorie formulas differ.
        #[test]
        fn running_and_walking_agree_on_distance_and_speed(
            steps in 0u32..200_000,
            duration in duration_hours(),
            weight in weight_kg(),
            height in 100i64..=220,
        ) {
            let run = dispatch::read_package(
                "RUN",
                &[Decimal::from(steps), duration, weight],
            ).unwrap();
            let walk = dispatch::read_package(
                "WLK",
                &[Decimal::from(steps), duration, weight, Decimal::from(height)],
            ).unwrap();

            prop_assert_eq!(run.distance_km(), walk.distance_km());
            prop_assert_eq!(run.mean_speed_kmh(), walk.mean_speed_kmh());
        }

        /// Swimming speed depends only on pool geometry and duration,
        /// never on the stroke count.
        #[test]
        fn swimming_speed_is_independent_of_strokes(
            strokes_a in 0u32..50_000,
            strokes_b in 0u32..50_000,
            duration in duration_hours(),
            weight in weight_kg(),
        ) {
            let pool = [dec!(25), dec!(40)];
            let a = dispatch::read_package(
                "SWM",
                &[Decimal::from(strokes_a), duration, weight, pool[0], pool[1]],
            ).unwrap();
            let b = dispatch::read_package(
                "SWM",
                &[Decimal::from(strokes_b), duration, weight, pool[0], pool[1]],
            ).unwrap();

            prop_assert_eq!(a.mean_speed_kmh(), b.mean_speed_kmh());
            prop_assert_eq!(a.calories_kcal(), b.calories_kcal());
        }

        /// Every numeric field in a report line carries exactly three
        /// decimal digits regardless of magnitude.
        #[test]
        fn report_numerics_always_have_three_decimals(
            steps in 1u32..200_000,
            duration in duration_hours(),
            weight in weight_kg(),
        ) {
            let run = dispatch::read_package(
                "RUN",
                &[Decimal::from(steps), duration, weight],
            ).unwrap();
            let line = run.summary().format_line();

            for field in ["Duration: ", "Distance: ", "Mean speed: ", "Calories spent: "] {
                let start = line.find(field).unwrap() + field.len();
                let number: String = line[start..]
                    .chars()
                    .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                // the calories field ends the line, so the sentence period
                // tags along
                let number = number.trim_end_matches('.');
                let decimals = number.rsplit('.').next().unwrap();
                prop_assert_eq!(decimals.len(), 3, "field {} in line {}", field, line);
            }
        }
    }
}
