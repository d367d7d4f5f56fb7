//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::{bounds::Axis, color::ColorError, data::LoadError};

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 1×1, got {width}×{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("{0} axis needs at least one tick")]
    ZeroTicks(Axis),
}

/// Geometry that cannot hold the requested plot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("inconsistent axis layout: {0}")]
    Inconsistent(&'static str),
    #[error("grid too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}")]
    GridTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
    #[error("{ticks} {axis} ticks do not fit in {extent} cells")]
    TickCount {
        axis: Axis,
        ticks: usize,
        extent: usize,
    },
    #[error("{axis} tick label \"{label}\" does not fit its margin")]
    LabelOverflow { axis: Axis, label: String },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("failed to write plot: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = LayoutError::GridTooSmall {
            want_w: 12,
            want_h: 6,
            got_w: 4,
            got_h: 3,
        };
        assert_eq!(e.to_string(), "grid too small: need ≥12×6, got 4×3");

        let e = LayoutError::TickCount {
            axis: Axis::Y,
            ticks: 40,
            extent: 25,
        };
        assert_eq!(e.to_string(), "40 y ticks do not fit in 25 cells");
        assert_eq!(
            ConfigError::ZeroTicks(Axis::X).to_string(),
            "x axis needs at least one tick"
        );
    }

    #[test]
    fn load_errors_pass_through_unchanged() {
        let e: PlotError = LoadError::EmptyInput.into();
        assert_eq!(e.to_string(), "no data found");
    }
}
