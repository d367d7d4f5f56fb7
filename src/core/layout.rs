//! Margin geometry around the plotting area.

use crate::core::error::LayoutError;

/// Tick labels are printed with one decimal place.
///
/// 14.832 becomes 14.8
pub const DECIMAL_PRECISION: usize = 1;

/// Ticks per axis when the caller does not choose.
pub const DEFAULT_TICKS: usize = 10;

/// Columns kept free right of the last x tick.
pub const RIGHT_PADDING: usize = 1;

/// Reserved rows/columns around the plot.
///
/// `x_*` offsets count rows up from the bottom edge (an offset of 2 puts the
/// element on row `height - 2`); `y_*` offsets are columns counted from the
/// left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisLayout {
    /// Row of the x-axis title.
    pub x_title_offset: usize,
    /// Row of the x tick labels.
    pub x_tick_label_offset: usize,
    /// Row of the x-axis line; everything above it is plot area.
    pub x_axis_offset: usize,
    /// Column of the (vertical) y-axis title.
    pub y_title_offset: usize,
    /// Column the right-aligned y tick labels end on.
    pub y_tick_label_offset: usize,
    /// Column of the y-axis line; everything right of it is plot area.
    pub y_axis_offset: usize,
}

impl Default for AxisLayout {
    fn default() -> Self {
        let x_title_offset = 2;
        let x_tick_label_offset = x_title_offset + 2;
        let y_title_offset = 1;
        let y_tick_label_offset = y_title_offset + 7;
        Self {
            x_title_offset,
            x_tick_label_offset,
            x_axis_offset: x_tick_label_offset + 1,
            y_title_offset,
            y_tick_label_offset,
            y_axis_offset: y_tick_label_offset + 2,
        }
    }
}

impl AxisLayout {
    /// Offsets must stack as title < tick label < axis on both axes, and the
    /// x title has to land inside the grid.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.x_title_offset == 0 {
            return Err(LayoutError::Inconsistent("x title offset must be at least 1"));
        }
        if !(self.x_title_offset < self.x_tick_label_offset
            && self.x_tick_label_offset < self.x_axis_offset)
        {
            return Err(LayoutError::Inconsistent(
                "x offsets must increase: title < tick label < axis",
            ));
        }
        if !(self.y_title_offset < self.y_tick_label_offset
            && self.y_tick_label_offset < self.y_axis_offset)
        {
            return Err(LayoutError::Inconsistent(
                "y offsets must increase: title < tick label < axis",
            ));
        }
        Ok(())
    }

    /// Smallest grid (width, height) leaving one plot cell on each axis.
    #[inline]
    #[must_use]
    pub const fn min_grid(&self) -> (usize, usize) {
        (self.y_axis_offset + RIGHT_PADDING + 1, self.x_axis_offset + 1)
    }

    /// Plot columns right of the y axis for a grid `width` wide.
    #[inline]
    #[must_use]
    pub const fn plot_width(&self, width: usize) -> usize {
        width.saturating_sub(self.y_axis_offset + RIGHT_PADDING)
    }

    /// Plot rows above the x axis for a grid `height` tall.
    #[inline]
    #[must_use]
    pub const fn plot_height(&self, height: usize) -> usize {
        height.saturating_sub(self.x_axis_offset)
    }

    /// Widest y tick label that still clears the y title column.
    #[inline]
    #[must_use]
    pub const fn y_label_room(&self) -> usize {
        self.y_tick_label_offset - self.y_title_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_consistent() {
        let l = AxisLayout::default();
        assert!(l.validate().is_ok());
        assert_eq!((l.x_title_offset, l.x_tick_label_offset, l.x_axis_offset), (2, 4, 5));
        assert_eq!((l.y_title_offset, l.y_tick_label_offset, l.y_axis_offset), (1, 8, 10));
        assert_eq!(l.min_grid(), (12, 6));
        assert_eq!(l.y_label_room(), 7);
    }

    #[test]
    fn plot_extents() {
        let l = AxisLayout::default();
        assert_eq!(l.plot_width(80), 69);
        assert_eq!(l.plot_height(30), 25);
        assert_eq!(l.plot_width(5), 0);
    }

    #[test]
    fn rejects_unordered_offsets() {
        let l = AxisLayout {
            x_tick_label_offset: 6,
            ..AxisLayout::default()
        };
        assert!(matches!(l.validate(), Err(LayoutError::Inconsistent(_))));

        let l = AxisLayout {
            y_axis_offset: 3,
            ..AxisLayout::default()
        };
        assert!(l.validate().is_err());

        let l = AxisLayout {
            x_title_offset: 0,
            ..AxisLayout::default()
        };
        assert!(l.validate().is_err());
    }
}
