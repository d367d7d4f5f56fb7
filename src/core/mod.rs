//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod layout;

// re-export frequently-used items for convenience
pub use bounds::{Axis, pretty_interval};
pub use color::{AnsiCode, ColorConfig, ColorError, Plain, Role, Styler, colorize};
pub use config::{Config, ConfigBuilder};
pub use data::{LoadError, RowCause, Sample, Series};
pub use error::{ConfigError, LayoutError, PlotError};
pub use layout::{AxisLayout, DECIMAL_PRECISION, DEFAULT_TICKS};
