//! Axis ranges, "pretty" tick intervals + terminal size plumbing.

use std::fmt;

use terminal_size::{Height, Width, terminal_size};
use tracing::debug;

use crate::core::data::Series;

/// Which axis we’re measuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Inclusive `(min, max)` of this axis as recorded by the loader.
    #[inline]
    #[must_use]
    pub fn bounds(self, series: &Series) -> (i64, i64) {
        match self {
            Self::X => (series.x_min, series.x_max),
            Self::Y => (series.y_min, series.y_max),
        }
    }

    /// Tick step for this axis of `series` split into `ticks` ticks.
    #[must_use]
    pub fn interval(self, series: &Series, ticks: usize) -> f64 {
        let (low, high) = self.bounds(series);
        let step = pretty_interval(low, high, ticks);
        debug!(axis = %self, low, high, ticks, step, "pretty interval");
        step
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// Mantissas a pretty step may use, ascending.
const NICE: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Human-friendly step between ticks: `d·10^k` with `d` one of 1, 2, 5, 10,
/// never smaller than the naive step.
///
/// The naive step is `max / ticks`, *not* `(max - min) / ticks`; a flat range
/// (`min == max`) uses `min` itself. A zero step yields `0.0`, which callers
/// must not divide by. The sign of the naive step is dropped.
#[must_use]
pub fn pretty_interval(min: i64, max: i64, ticks: usize) -> f64 {
    let raw = if min == max {
        min as f64
    } else {
        max as f64 / ticks as f64
    }
    .abs();

    if raw == 0.0 || !raw.is_finite() {
        return 0.0;
    }

    let factor = 10f64.powf((raw.log10() - 1.0).ceil());
    let lead = (raw / factor).ceil();
    let nice = NICE.into_iter().find(|&d| d >= lead).unwrap_or(10.0);
    nice * factor
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn rounds_up_to_nice_steps() {
        assert_relative_eq!(pretty_interval(0, 100, 10), 10.0);
        assert_relative_eq!(pretty_interval(0, 32, 10), 5.0);
        assert_relative_eq!(pretty_interval(0, 17, 10), 2.0);
        assert_relative_eq!(pretty_interval(0, 55, 5), 20.0);
        assert_relative_eq!(pretty_interval(0, 7, 10), 1.0);
        assert_relative_eq!(pretty_interval(0, 3, 10), 0.5);
        assert_relative_eq!(pretty_interval(0, 1200, 10), 200.0);
    }

    #[test]
    fn span_uses_max_only() {
        // 990..1000 has a width of 10, but the step is derived from 1000 alone
        assert_relative_eq!(pretty_interval(990, 1000, 10), 100.0);
        assert_relative_eq!(
            pretty_interval(990, 1000, 10),
            pretty_interval(0, 1000, 10)
        );
    }

    #[test]
    fn flat_range_uses_min() {
        assert_relative_eq!(pretty_interval(40, 40, 10), 50.0);
        assert_relative_eq!(pretty_interval(7, 7, 3), 10.0);
    }

    #[test]
    fn zero_span_is_degenerate_not_a_crash() {
        assert_eq!(pretty_interval(0, 0, 10), 0.0);
        assert_eq!(pretty_interval(-5, 0, 10), 0.0);
    }

    #[test]
    fn negative_span_keeps_magnitude() {
        assert_relative_eq!(pretty_interval(-100, -20, 10), 2.0);
    }

    #[test]
    fn axis_interval_reads_series_bounds() {
        let s = Series::parse("x,y\n0,0\n50,900").unwrap();
        assert_relative_eq!(Axis::X.interval(&s, 10), 5.0);
        assert_relative_eq!(Axis::Y.interval(&s, 10), 100.0);
        assert_eq!(Axis::Y.bounds(&s), (0, 900));
    }

    fn is_nice(v: f64) -> bool {
        let k = v.log10().floor();
        let d = v / 10f64.powf(k);
        NICE.iter().any(|n| (d - n).abs() < 1e-9)
    }

    proptest! {
        #[test]
        fn always_nice_and_never_below_naive(
            min in -1_000_000i64..1_000_000,
            max in -1_000_000i64..1_000_000,
            ticks in 1usize..200,
        ) {
            let v = pretty_interval(min, max, ticks);
            prop_assert_eq!(v.to_bits(), pretty_interval(min, max, ticks).to_bits());

            let raw = if min == max { min as f64 } else { max as f64 / ticks as f64 }.abs();
            if raw == 0.0 {
                prop_assert_eq!(v, 0.0);
            } else {
                prop_assert!(v > 0.0);
                prop_assert!(v >= raw * (1.0 - 1e-12));
                prop_assert!(is_nice(v), "{} is not d*10^k", v);
            }
        }
    }
}
