//! Data-space → grid-cell conversion.
//!
//! Both axes are anchored at data value `0`, which sits on the axis line;
//! one tick spans `floor(extent / ticks)` cells and `interval` data units.

use tracing::debug;

use crate::core::{bounds::Axis, data::Sample, layout::AxisLayout};

/// Offsets are clamped to this many cells either side of an axis so that
/// positions and the distance between any two of them fit in an `i64`.
pub const MAX_OFFSET: i64 = 1 << 61;

/// Cells-per-unit scale of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    /// Cells between neighbouring ticks.
    pub step: usize,
    /// Data units between neighbouring ticks.
    pub interval: f64,
    ratio: f64,
}

impl AxisScale {
    /// `ticks` must be in `1..=extent`; the rasterizer checks this before
    /// building a scale. A non-positive or non-finite `interval` falls back
    /// to `1.0`.
    #[must_use]
    pub fn new(axis: Axis, extent: usize, ticks: usize, interval: f64) -> Self {
        let interval = if interval.is_finite() && interval > 0.0 {
            interval
        } else {
            debug!(%axis, interval, "degenerate tick interval, using 1.0");
            1.0
        };
        let step = extent / ticks.max(1);
        Self {
            step,
            interval,
            ratio: step as f64 / interval,
        }
    }

    /// Cells from the axis line to data value `v`, clamped to
    /// `±MAX_OFFSET`.
    #[inline]
    #[must_use]
    pub fn offset(&self, v: i64) -> i64 {
        (v as f64 * self.ratio).round()
            .clamp(-MAX_OFFSET as f64, MAX_OFFSET as f64) as i64
    }

    /// Data value at tick `t` (tick 0 is the origin).
    #[inline]
    #[must_use]
    pub fn tick_value(&self, t: usize) -> f64 {
        t as f64 * self.interval
    }
}

/// Maps samples to signed (row, column) positions; results may lie off-grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mapper {
    pub x: AxisScale,
    pub y: AxisScale,
    /// Column of the y axis line.
    pub origin_col: i64,
    /// Row of the x axis line.
    pub origin_row: i64,
}

impl Mapper {
    #[must_use]
    pub fn new(layout: &AxisLayout, height: usize, x: AxisScale, y: AxisScale) -> Self {
        Self {
            x,
            y,
            origin_col: layout.y_axis_offset as i64,
            origin_row: layout.plot_height(height) as i64,
        }
    }

    #[inline]
    #[must_use]
    pub fn column(&self, x: i64) -> i64 {
        self.origin_col.saturating_add(self.x.offset(x))
    }

    /// Data y grows upward, grid rows downward.
    #[inline]
    #[must_use]
    pub fn row(&self, y: i64) -> i64 {
        self.origin_row.saturating_sub(self.y.offset(y))
    }

    /// `(row, column)` of a sample.
    #[inline]
    #[must_use]
    pub fn cell(&self, s: Sample) -> (i64, i64) {
        (self.row(s.y), self.column(s.x))
    }
}
