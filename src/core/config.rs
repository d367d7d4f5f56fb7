//! Run-time configuration object + fluent builder.

use crate::core::{
    bounds::Axis,
    color::ColorConfig,
    error::ConfigError,
    layout::{AxisLayout, DEFAULT_TICKS},
};

/// Immutable parameters for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Grid columns.
    pub width: usize,
    /// Grid rows.
    pub height: usize,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub layout: AxisLayout,
    /// `None` renders plain text.
    pub colors: Option<ColorConfig>,
}

impl Config {
    #[inline]
    pub fn builder(width: usize, height: usize) -> ConfigBuilder {
        ConfigBuilder::new(width, height)
    }

    #[inline]
    #[must_use]
    pub fn ticks(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x_ticks,
            Axis::Y => self.y_ticks,
        }
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    width: usize,
    height: usize,
    x_ticks: Option<usize>,
    y_ticks: Option<usize>,
    layout: Option<AxisLayout>,
    colors: Option<ColorConfig>,
}

impl ConfigBuilder {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            x_ticks: None,
            y_ticks: None,
            layout: None,
            colors: None,
        }
    }

    #[inline]
    pub fn x_ticks(mut self, n: usize) -> Self {
        self.x_ticks = Some(n);
        self
    }
    #[inline]
    pub fn y_ticks(mut self, n: usize) -> Self {
        self.y_ticks = Some(n);
        self
    }
    /// Same tick count on both axes.
    #[inline]
    pub fn ticks(self, n: usize) -> Self {
        self.x_ticks(n).y_ticks(n)
    }
    #[inline]
    pub fn layout(mut self, layout: AxisLayout) -> Self {
        self.layout = Some(layout);
        self
    }
    #[inline]
    pub fn colors(mut self, colors: ColorConfig) -> Self {
        self.colors = Some(colors);
        self
    }
    #[inline]
    pub fn colors_opt(mut self, colors: Option<ColorConfig>) -> Self {
        self.colors = colors;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        let x_ticks = self.x_ticks.unwrap_or(DEFAULT_TICKS);
        let y_ticks = self.y_ticks.unwrap_or(DEFAULT_TICKS);
        if x_ticks == 0 {
            return Err(ConfigError::ZeroTicks(Axis::X));
        }
        if y_ticks == 0 {
            return Err(ConfigError::ZeroTicks(Axis::Y));
        }
        Ok(Config {
            width: self.width,
            height: self.height,
            x_ticks,
            y_ticks,
            layout: self.layout.unwrap_or_default(),
            colors: self.colors,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::builder(80, 24).build().unwrap();
        assert_eq!((c.x_ticks, c.y_ticks), (DEFAULT_TICKS, DEFAULT_TICKS));
        assert_eq!(c.layout, AxisLayout::default());
        assert!(c.colors.is_none());
    }

    #[test]
    fn per_axis_ticks() {
        let c = Config::builder(80, 24).ticks(4).y_ticks(6).build().unwrap();
        assert_eq!(c.ticks(Axis::X), 4);
        assert_eq!(c.ticks(Axis::Y), 6);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(
            Config::builder(0, 24).build(),
            Err(ConfigError::ZeroDimension {
                width: 0,
                height: 24
            })
        );
        assert_eq!(
            Config::builder(80, 24).y_ticks(0).build(),
            Err(ConfigError::ZeroTicks(Axis::Y))
        );
    }
}
