//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! ```
//! let cfg = splot::Config::builder(40, 16).ticks(4).build().unwrap();
//! let text = splot::render_str("day,sales\n1,3\n2,7\n4,5", &cfg).unwrap();
//! assert_eq!(text.lines().count(), 16);
//! ```

pub mod cli;
pub mod core;
pub mod render;

use std::io::{Read, Write};

pub use crate::core::{
    bounds::{Axis, pretty_interval},
    color::{AnsiCode, ColorConfig, ColorError, Plain, Role, Styler, colorize},
    config::{Config, ConfigBuilder},
    data::{LoadError, RowCause, Sample, Series},
    error::{ConfigError, LayoutError, PlotError},
    layout::{AxisLayout, DECIMAL_PRECISION, DEFAULT_TICKS},
};

pub use render::{Cell, Grid, Rasterizer, Renderer, segment_cells, segment_cells_in};

/// Rasterize an already loaded series.
pub fn plot_series(series: &Series, config: &Config) -> Result<Grid, LayoutError> {
    Rasterizer::new(config)?.rasterize(series)
}

/// Load `input`, draw it and return the frame text. Colours are applied when
/// `config.colors` is set.
pub fn render_str(input: &str, config: &Config) -> Result<String, PlotError> {
    let series = Series::parse(input)?;
    Ok(frame(&series, config)?)
}

/// Load CSV from `input` and write the finished plot to `output`.
///
/// Nothing is written unless loading and rasterizing both succeed.
pub fn render<R: Read, W: Write>(
    input: R,
    mut output: W,
    config: &Config,
) -> Result<(), PlotError> {
    let series = Series::from_reader(input)?;
    let text = frame(&series, config)?;
    output.write_all(text.as_bytes())?;
    output.flush()?;
    Ok(())
}

fn frame(series: &Series, config: &Config) -> Result<String, LayoutError> {
    let grid = plot_series(series, config)?;
    Ok(match &config.colors {
        Some(colors) => Renderer::new(colors).render(&grid),
        None => Renderer::plain().render(&grid),
    })
}
