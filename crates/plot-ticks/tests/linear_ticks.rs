// File: crates/plot-ticks/tests/linear_ticks.rs
// Purpose: Validate linear tick sequences across ordinary, reversed and degenerate ranges.

use plot_ticks::{tick_step, ticks, TickError, TickRange, MAX_TICKS};

const RANGES: &[(f64, f64)] = &[
    (0.0, 1.0),
    (0.0, 100.0),
    (-3.7, 12.9),
    (0.001, 0.0173),
    (1_234.0, 98_765.0),
    (-1e6, -2.5e5),
    (17.25, 17.75),
];

#[test]
fn zero_to_hundred_by_tens() {
    let t = ticks(0.0, 100.0, 10).expect("ticks");
    assert_eq!(t, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
}

#[test]
fn reversed_range_descends_with_negated_step() {
    let fwd = ticks(0.0, 100.0, 10).expect("forward");
    let rev = ticks(100.0, 0.0, 10).expect("reverse");
    assert_eq!(tick_step(100.0, 0.0, 10).unwrap(), -tick_step(0.0, 100.0, 10).unwrap());
    assert_eq!(rev, fwd.into_iter().rev().collect::<Vec<_>>());
}

#[test]
fn ticks_are_ordered_multiples_within_bounds() {
    for &(start, stop) in RANGES {
        for count in [1usize, 2, 5, 10, 20] {
            let step = tick_step(start, stop, count).expect("step");
            let t = ticks(start, stop, count).expect("ticks");
            assert!(t.windows(2).all(|w| w[0] < w[1]), "not ascending: {t:?}");
            for &v in &t {
                assert!(v >= start - step && v <= stop + step, "{v} outside [{start}, {stop}] step {step}");
                let k = v / step;
                assert!((k - k.round()).abs() < 1e-6, "{v} is not a multiple of {step}");
            }
        }
    }
}

#[test]
fn tick_count_stays_near_hint() {
    for &(start, stop) in RANGES {
        for count in [2usize, 5, 10] {
            let n = ticks(start, stop, count).expect("ticks").len();
            // 1/2/5 rounding can overshoot the hint by at most a factor of ~2.5
            assert!(n <= count * 3 + 1, "{n} ticks for hint {count} on [{start}, {stop}]");
        }
    }
}

#[test]
fn step_is_scale_invariant() {
    for &(start, stop) in RANGES {
        let base = tick_step(start, stop, 10).expect("step");
        for k in [-3i32, -1, 2, 5] {
            let f = 10f64.powi(k);
            let scaled = tick_step(start * f, stop * f, 10).expect("scaled step");
            let want = base * f;
            assert!(((scaled - want) / want).abs() < 1e-9, "k={k}: {scaled} != {want}");
        }
    }
}

#[test]
fn rounding_removes_float_noise() {
    let t = ticks(0.0, 1.0, 10).expect("ticks");
    assert_eq!(t, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]);
}

#[test]
fn range_iterator_matches_collected_ticks() {
    let range = TickRange::new(-3.7, 12.9, 8).expect("range");
    let n = range.len();
    let via_iter: Vec<f64> = range.collect();
    assert_eq!(via_iter.len(), n);
    assert_eq!(via_iter, ticks(-3.7, 12.9, 8).unwrap());
}

#[test]
fn degenerate_domains_have_explicit_policy() {
    assert_eq!(ticks(1.0, 2.0, 0), Err(TickError::InvalidTickCount));
    assert_eq!(ticks(42.0, 42.0, 0), Err(TickError::InvalidTickCount));
    assert_eq!(ticks(42.0, 42.0, 5), Ok(vec![42.0]));
    assert_eq!(tick_step(42.0, 42.0, 5), Err(TickError::EmptyDomain));
    assert!(matches!(ticks(0.0, f64::INFINITY, 5), Err(TickError::NonFiniteBound { .. })));
}

#[test]
fn huge_counts_are_rejected_before_allocating() {
    assert!(matches!(ticks(0.0, 1.0, usize::MAX), Err(TickError::TooManyTicks { max: MAX_TICKS, .. })));
    assert!(matches!(TickRange::new(0.0, 1.0, 1 << 40), Err(TickError::TooManyTicks { .. })));
    // ten thousand ticks are still fine
    let t = ticks(0.0, 1.0, MAX_TICKS / 10).expect("ticks");
    assert!(t.len() <= MAX_TICKS);
}

#[test]
fn finite_bounds_with_overflowing_span() {
    assert_eq!(
        ticks(-1e308, 1e308, 10),
        Err(TickError::SpanOverflow { start: -1e308, stop: 1e308 })
    );
    assert!(ticks(-1e307, 1e307, 10).is_ok());
}

#[test]
fn steps_below_the_precision_cap_collapse_to_zero() {
    // 1e-22 needs 22 digits but rounding keeps 20
    let t = ticks(0.0, 1e-21, 10).expect("ticks");
    assert!(!t.is_empty());
    assert!(t.iter().all(|&v| v == 0.0));
}
