// File: crates/burndown-core/tests/fit.rs
// Purpose: Least-squares trend line on realistic epoch-millisecond timestamps.

use burndown_core::{FitError, LinearFit, MS_PER_DAY};

const T0: f64 = 1_420_416_000_000.0; // 2015-01-05

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn exact_line_is_recovered() {
    // 100 open, closing 2 per day.
    let pts: Vec<(f64, f64)> = (0..20)
        .map(|d| (T0 + d as f64 * MS_PER_DAY, 100.0 - 2.0 * d as f64))
        .collect();
    let fit = LinearFit::fit(&pts).expect("fit");

    assert!(close(fit.slope_per_day(), -2.0, 1e-9));
    assert!(close(fit.slope(), -2.0 / MS_PER_DAY, 1e-9));
    assert!(close(fit.value_at(T0), 100.0, 1e-9));
    assert!(close(fit.value_at(T0 + 10.0 * MS_PER_DAY), 80.0, 1e-9));

    let zero = fit.zero_crossing().expect("crossing");
    assert!((zero - (T0 + 50.0 * MS_PER_DAY)).abs() < 1.0, "zero crossing off by {} ms", zero - (T0 + 50.0 * MS_PER_DAY));
}

#[test]
fn intercept_matches_value_at_epoch() {
    let pts = vec![(T0, 10.0), (T0 + 4.0 * MS_PER_DAY, 2.0)];
    let fit = LinearFit::fit(&pts).expect("fit");
    // value_at(t) == slope * t + intercept
    let t = T0 + 1.5 * MS_PER_DAY;
    assert!(close(fit.slope() * t + fit.intercept(), fit.value_at(t), 1e-6));
    // -intercept / slope lands on the crossing as well.
    let zero = fit.zero_crossing().unwrap();
    assert!(close(-fit.intercept() / fit.slope(), zero, 1e-9));
}

#[test]
fn noisy_samples_fit_between_extremes() {
    let counts = [50.0, 48.0, 49.0, 41.0, 40.0, 38.0, 30.0];
    let pts: Vec<(f64, f64)> = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| (T0 + i as f64 * MS_PER_DAY, c))
        .collect();
    let fit = LinearFit::fit(&pts).expect("fit");
    assert!(fit.slope_per_day() < 0.0);
    let mean_y = counts.iter().sum::<f64>() / counts.len() as f64;
    // OLS passes through (mean x, mean y).
    assert!(close(fit.value_at(T0 + 3.0 * MS_PER_DAY), mean_y, 1e-9));
}

#[test]
fn too_few_points() {
    assert_eq!(LinearFit::fit(&[]), Err(FitError::TooFewPoints(0)));
    assert_eq!(LinearFit::fit(&[(T0, 3.0)]), Err(FitError::TooFewPoints(1)));
}

#[test]
fn identical_timestamps_are_degenerate() {
    let pts = vec![(T0, 3.0), (T0, 5.0), (T0, 4.0)];
    assert_eq!(LinearFit::fit(&pts), Err(FitError::DegenerateTimes));
}

#[test]
fn flat_line_has_no_zero_crossing() {
    let pts = vec![(T0, 7.0), (T0 + MS_PER_DAY, 7.0), (T0 + 2.0 * MS_PER_DAY, 7.0)];
    let fit = LinearFit::fit(&pts).expect("fit");
    assert_eq!(fit.slope(), 0.0);
    assert_eq!(fit.value_at(T0 + 100.0 * MS_PER_DAY), 7.0);
    assert_eq!(fit.zero_crossing(), Err(FitError::ZeroSlope));
}
