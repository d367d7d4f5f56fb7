//! Draws axes, titles, ticks, labels, points and connecting lines onto a
//! [`Grid`].
//!
//! ### Draw order
//! Later writes overwrite earlier ones, so the order below is part of the
//! contract:
//! 1. x axis line, x title, x ticks + labels
//! 2. y axis line, y title, y ticks + labels
//! 3. per sample in ascending x: the point, then the segment back to the
//!    previous sample
//!
//! Points and segments are clipped to the plot region (axis lines included);
//! labels that do not fit their margin fail the whole pass.

use std::ops::Range;

use tracing::trace;

use crate::core::{
    bounds::Axis,
    color::Role,
    config::Config,
    data::Series,
    error::LayoutError,
    layout::{AxisLayout, DECIMAL_PRECISION},
};

use super::{
    grid::Grid,
    mapper::{AxisScale, Mapper},
};

const X_AXIS: char = '-';
const Y_AXIS: char = '|';
const CORNER: char = '+';
const TICK: char = '+';
const POINT: char = '*';

/// Validated geometry for one render.
#[derive(Clone, Copy, Debug)]
pub struct Rasterizer {
    width: usize,
    height: usize,
    x_ticks: usize,
    y_ticks: usize,
    layout: AxisLayout,
}

impl Rasterizer {
    /// Reject geometry whose margins or tick counts cannot fit the grid.
    pub fn new(config: &Config) -> Result<Self, LayoutError> {
        let layout = config.layout;
        layout.validate()?;

        let (want_w, want_h) = layout.min_grid();
        if config.width < want_w || config.height < want_h {
            return Err(LayoutError::GridTooSmall {
                want_w,
                want_h,
                got_w: config.width,
                got_h: config.height,
            });
        }

        for (axis, extent) in [
            (Axis::X, layout.plot_width(config.width)),
            (Axis::Y, layout.plot_height(config.height)),
        ] {
            let ticks = config.ticks(axis);
            if ticks == 0 || ticks > extent {
                return Err(LayoutError::TickCount {
                    axis,
                    ticks,
                    extent,
                });
            }
        }

        Ok(Self {
            width: config.width,
            height: config.height,
            x_ticks: config.x_ticks,
            y_ticks: config.y_ticks,
            layout,
        })
    }

    /// Scales for `series`, derived from its bounds and the tick counts.
    #[must_use]
    pub fn mapper(&self, series: &Series) -> Mapper {
        let x = AxisScale::new(
            Axis::X,
            self.layout.plot_width(self.width),
            self.x_ticks,
            Axis::X.interval(series, self.x_ticks),
        );
        let y = AxisScale::new(
            Axis::Y,
            self.layout.plot_height(self.height),
            self.y_ticks,
            Axis::Y.interval(series, self.y_ticks),
        );
        Mapper::new(&self.layout, self.height, x, y)
    }

    /// Draw `series` into a fresh grid.
    pub fn rasterize(&self, series: &Series) -> Result<Grid, LayoutError> {
        let map = self.mapper(series);
        trace!(
            width = self.width,
            height = self.height,
            x_step = map.x.step,
            y_step = map.y.step,
            "rasterizing"
        );

        let mut grid = Grid::new(self.width, self.height);
        let mut pass = Pass {
            grid: &mut grid,
            map: &map,
            geo: self,
        };

        pass.x_axis();
        pass.x_title(&series.x_name);
        pass.x_ticks()?;
        pass.y_axis();
        pass.y_title(&series.y_name);
        pass.y_ticks()?;
        pass.series(series);

        Ok(grid)
    }

    #[inline]
    fn axis_row(&self) -> i64 {
        self.layout.plot_height(self.height) as i64
    }
}

/// One drawing pass over a grid.
struct Pass<'a> {
    grid: &'a mut Grid,
    map: &'a Mapper,
    geo: &'a Rasterizer,
}

impl Pass<'_> {
    #[inline]
    fn width(&self) -> i64 {
        self.geo.width as i64
    }

    #[inline]
    fn in_plot(&self, row: i64, col: i64) -> bool {
        (0..=self.geo.axis_row()).contains(&row)
            && (self.map.origin_col..self.width()).contains(&col)
    }

    fn x_axis(&mut self) {
        let row = self.geo.axis_row();
        for col in self.map.origin_col..self.width() {
            self.grid.set(row, col, X_AXIS, Role::XAxis);
        }
        self.grid.set(row, self.map.origin_col, CORNER, Role::XAxis);
    }

    /// Centred over the plot columns; characters falling outside are dropped.
    fn x_title(&mut self, title: &str) {
        let row = (self.geo.height - self.geo.layout.x_title_offset) as i64;
        let lo = self.map.origin_col;
        let start = lo + (self.width() - lo) / 2 - title.chars().count() as i64 / 2;
        for (i, ch) in title.chars().enumerate() {
            let col = start + i as i64;
            if (lo..self.width()).contains(&col) {
                self.grid.set(row, col, ch, Role::XAxisTitle);
            }
        }
    }

    fn x_ticks(&mut self) -> Result<(), LayoutError> {
        let axis_row = self.geo.axis_row();
        let label_row = (self.geo.height - self.geo.layout.x_tick_label_offset) as i64;
        for t in 1..=self.geo.x_ticks {
            let col = self.map.origin_col + (t * self.map.x.step) as i64;
            self.grid.set(axis_row, col, TICK, Role::Tick);

            let label = tick_label(self.map.x.tick_value(t));
            let len = label.chars().count() as i64;
            if len > self.width() {
                return Err(LayoutError::LabelOverflow {
                    axis: Axis::X,
                    label,
                });
            }
            // centred on the tick, nudged back inside the row at the edges
            let start = (col - len / 2).clamp(0, self.width() - len);
            self.put_str(label_row, start, &label, Role::TickLabel);
        }
        Ok(())
    }

    fn y_axis(&mut self) {
        for row in 0..self.geo.axis_row() {
            self.grid.set(row, self.map.origin_col, Y_AXIS, Role::YAxis);
        }
    }

    /// One character per row, centred over the plot rows.
    fn y_title(&mut self, title: &str) {
        let col = self.geo.layout.y_title_offset as i64;
        let rows = self.geo.axis_row();
        let start = rows / 2 - title.chars().count() as i64 / 2;
        for (i, ch) in title.chars().enumerate() {
            let row = start + i as i64;
            if (0..rows).contains(&row) {
                self.grid.set(row, col, ch, Role::YAxisTitle);
            }
        }
    }

    fn y_ticks(&mut self) -> Result<(), LayoutError> {
        let end = self.geo.layout.y_tick_label_offset as i64;
        for t in 1..=self.geo.y_ticks {
            let row = self.geo.axis_row() - (t * self.map.y.step) as i64;
            self.grid.set(row, self.map.origin_col, TICK, Role::Tick);

            let label = tick_label(self.map.y.tick_value(t));
            let len = label.chars().count();
            if len > self.geo.layout.y_label_room() {
                return Err(LayoutError::LabelOverflow {
                    axis: Axis::Y,
                    label,
                });
            }
            self.put_str(row, end + 1 - len as i64, &label, Role::TickLabel);
        }
        Ok(())
    }

    fn series(&mut self, series: &Series) {
        let mut prev = None;
        for &s in &series.samples {
            let here = self.map.cell(s);
            self.plot(here.0, here.1, POINT, Role::Point);
            if let Some(from) = prev {
                let glyph = segment_glyph(from, here);
                let cols = self.map.origin_col..self.width();
                for (row, col) in segment_cells_in(from, here, cols) {
                    self.plot(row, col, glyph, Role::Line);
                }
            }
            prev = Some(here);
        }
    }

    /// Data cell, clipped to the plot region.
    #[inline]
    fn plot(&mut self, row: i64, col: i64, glyph: char, role: Role) {
        if self.in_plot(row, col) {
            self.grid.set(row, col, glyph, role);
        }
    }

    fn put_str(&mut self, row: i64, start: i64, text: &str, role: Role) {
        for (i, ch) in text.chars().enumerate() {
            self.grid.set(row, start + i as i64, ch, role);
        }
    }
}

#[inline]
fn tick_label(v: f64) -> String {
    format!("{:.*}", DECIMAL_PRECISION, v)
}

/// Interior cells of the straight line between two `(row, col)` endpoints:
/// one per column strictly between them, walking from `from` to `to`, with
/// the row interpolated and rounded to the nearest cell. Endpoints sharing a
/// column yield nothing.
pub fn segment_cells(from: (i64, i64), to: (i64, i64)) -> impl Iterator<Item = (i64, i64)> {
    segment_cells_in(from, to, i64::MIN..i64::MAX)
}

/// [`segment_cells`] restricted to the interior columns inside `cols`.
///
/// Rows still follow the full line, so the cells yielded are exactly those of
/// [`segment_cells`] whose column lies in `cols`, at a cost bounded by the
/// width of `cols`.
pub fn segment_cells_in(
    from: (i64, i64),
    to: (i64, i64),
    cols: Range<i64>,
) -> impl Iterator<Item = (i64, i64)> {
    let (r0, c0) = from;
    let (r1, c1) = to;
    let forward = c1 > c0;
    let slope = if c0 == c1 {
        0.0
    } else {
        (r1 as f64 - r0 as f64) / (c1 as f64 - c0 as f64)
    };

    // half-open span of interior columns, clipped to `cols`
    let (lo, hi) = if forward {
        (c0.saturating_add(1), c1)
    } else {
        (c1.saturating_add(1), c0)
    };
    let (lo, hi) = (lo.max(cols.start), hi.min(cols.end));
    let n = if hi > lo { hi.abs_diff(lo) } else { 0 };

    (0..n).map(move |k| {
        let col = if forward {
            lo.saturating_add_unsigned(k)
        } else {
            (hi - 1).saturating_sub_unsigned(k)
        };
        let row = r0.saturating_add(((col as f64 - c0 as f64) * slope).round() as i64);
        (row, col)
    })
}

/// `-` for shallow segments, otherwise `/` or `\` by direction of travel.
fn segment_glyph(from: (i64, i64), to: (i64, i64)) -> char {
    let dr = to.0 as f64 - from.0 as f64;
    let dc = to.1 as f64 - from.1 as f64;
    if dr.abs() < dc.abs() / 2.0 {
        '-'
    } else if (dr < 0.0) == (dc > 0.0) {
        // rows shrink as columns grow: rising
        '/'
    } else {
        '\\'
    }
}
