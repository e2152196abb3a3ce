// File: crates/burndown-core/tests/properties.rs
// Purpose: Property checks for normalization, the ideal line, the fit and the predictor.

use burndown_core::{
    build, normalize, predict, BurndownOptions, Cadence, LinearFit, PredictionConfig, RawDate,
    ReleaseSchedule, MS_PER_DAY,
};
use proptest::prelude::*;

const HOUR_MS: f64 = 3_600_000.0;

/// Strictly increasing timestamps (gaps of 1..=72 hours) with open counts.
fn samples_strategy(max_len: usize) -> impl Strategy<Value = Vec<(f64, u64)>> {
    (
        1_300_000_000_000u64..1_800_000_000_000u64,
        prop::collection::vec((1u32..=72, 0u64..500), 1..max_len),
    )
        .prop_map(|(start, steps)| {
            let mut t = start as f64;
            steps
                .into_iter()
                .map(|(gap_h, n)| {
                    t += gap_h as f64 * HOUR_MS;
                    (t, n)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn reality_preserves_samples(samples in samples_strategy(40)) {
        let raw: Vec<(RawDate, u64)> = samples.iter().map(|&(t, n)| (RawDate::Millis(t), n)).collect();
        let closed = normalize(&raw).unwrap();
        let first = samples[0].0;
        let schedule = ReleaseSchedule::new(first, first + 10.0 * MS_PER_DAY, first + 20.0 * MS_PER_DAY);
        let series = build(&schedule, 500, &closed, first, &BurndownOptions::default());

        prop_assert_eq!(series.reality.points.len(), samples.len());
        for (got, want) in series.reality.points.iter().zip(&samples) {
            prop_assert_eq!(got.0, want.0);
            prop_assert_eq!(got.1, want.1 as f64);
        }
    }

    #[test]
    fn ideal_is_two_points_and_never_rises(
        start in 1_300_000_000_000u64..1_800_000_000_000u64,
        len_days in 1u32..400,
        to_burn in 0u64..10_000,
    ) {
        let start = start as f64;
        let target = start + len_days as f64 * MS_PER_DAY;
        let schedule = ReleaseSchedule::new(start, start, target);
        let closed = normalize(&[(RawDate::Millis(start), to_burn)]).unwrap();
        let series = build(&schedule, to_burn, &closed, start, &BurndownOptions::default());

        prop_assert_eq!(&series.ideal.points, &vec![(start, to_burn as f64), (target, 0.0)]);
        let (p0, p1) = (series.ideal.points[0], series.ideal.points[1]);
        prop_assert!((p1.1 - p0.1) / (p1.0 - p0.0) <= 0.0);
    }

    #[test]
    fn fit_is_linear(
        samples in samples_strategy(30).prop_filter("need two samples", |s| s.len() >= 2),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let pts: Vec<(f64, f64)> = samples.iter().map(|&(t, n)| (t, n as f64)).collect();
        let fit = LinearFit::fit(&pts).unwrap();

        let lo = pts[0].0 - 30.0 * MS_PER_DAY;
        let t1 = lo + a * 60.0 * MS_PER_DAY;
        let t2 = t1 + HOUR_MS + b * 60.0 * MS_PER_DAY;
        let observed = (fit.value_at(t2) - fit.value_at(t1)) / (t2 - t1);
        let tol = 1e-6 * fit.slope().abs() + 1e-12;
        prop_assert!((observed - fit.slope()).abs() <= tol, "observed {} vs slope {}", observed, fit.slope());
    }

    #[test]
    fn prediction_is_non_negative_and_non_increasing(
        start in 1_300_000_000_000u64..1_800_000_000_000u64,
        days in 1.0f64..400.0,
        to_burn in 0u64..=10_000,
        working in any::<bool>(),
    ) {
        let start = start as f64;
        let schedule = ReleaseSchedule::new(start, start, start + days * MS_PER_DAY);
        let cadence = if working { Cadence::WORKING } else { Cadence::CALENDAR };
        let cfg = PredictionConfig { cadence, ..PredictionConfig::default() };
        let pts = predict(&schedule, to_burn, start, start, &cfg);

        prop_assert!(!pts.is_empty());
        prop_assert!(pts.len() <= days.floor() as usize + 1);
        for w in pts.windows(2) {
            prop_assert!(w[1].0 > w[0].0);
            prop_assert!(w[1].1 <= w[0].1);
        }
        prop_assert!(pts.iter().all(|&(_, y)| y >= 0.0 && y <= to_burn as f64));
    }
}
