//! Serialises a finished [`Grid`] to text, one line per row.
//!
//! Every filled cell whose role the [`Styler`] opens is written as
//! `open + glyph + close`; all other cells are written bare and empty cells
//! become a single space. Output is exactly `width` glyphs per line.

use std::io::Write;

use crate::core::color::{Plain, Styler};

use super::grid::Grid;

pub struct Renderer<S = Plain> {
    styler: S,
}

impl Renderer<Plain> {
    /// Renderer emitting no escape sequences.
    #[inline]
    #[must_use]
    pub fn plain() -> Self {
        Self { styler: Plain }
    }
}

impl<S: Styler> Renderer<S> {
    #[inline]
    pub fn new(styler: S) -> Self {
        Self { styler }
    }

    /// Build the whole frame in memory.
    #[must_use]
    pub fn render(&self, grid: &Grid) -> String {
        // glyph + newline, escapes grow the buffer as needed
        let mut out = String::with_capacity((grid.width() + 1) * grid.height());
        for row in grid.rows() {
            for cell in row {
                match cell {
                    Some(c) => match self.styler.open(c.role) {
                        Some(open) => {
                            out.push_str(open);
                            out.push(c.glyph);
                            out.push_str(self.styler.close(c.role));
                        }
                        None => out.push(c.glyph),
                    },
                    None => out.push(' '),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Render and write the frame with a single `write_all`.
    pub fn write_to<W: Write>(&self, grid: &Grid, mut sink: W) -> std::io::Result<()> {
        sink.write_all(self.render(grid).as_bytes())?;
        sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{AnsiCode, ColorConfig, Role};

    fn sample_grid() -> Grid {
        let mut g = Grid::new(3, 2);
        g.set(0, 0, '*', Role::Point);
        g.set(1, 1, '-', Role::XAxis);
        g.set(1, 2, '+', Role::Tick);
        g
    }

    /// Drops `ESC [ ... m` sequences.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn plain_text() {
        assert_eq!(Renderer::plain().render(&sample_grid()), "*  \n -+\n");
    }

    #[test]
    fn colours_only_configured_roles() {
        let colors = ColorConfig::new()
            .with(Role::Point, AnsiCode::yellow())
            .with(Role::XAxis, AnsiCode::blue())
            .with(Role::Tick, "");
        let out = Renderer::new(&colors).render(&sample_grid());
        assert_eq!(
            out,
            "\x1b[33m*\x1b[0m  \n \x1b[34m-\x1b[0m+\n"
        );
    }

    #[test]
    fn empty_config_has_no_escapes() {
        let out = Renderer::new(ColorConfig::new()).render(&sample_grid());
        assert!(!out.contains('\x1b'));
        assert_eq!(out, Renderer::plain().render(&sample_grid()));
    }

    #[test]
    fn coloured_output_matches_plain_modulo_escapes() {
        let g = sample_grid();
        let coloured = Renderer::new(ColorConfig::ansi_default()).render(&g);
        assert!(coloured.contains('\x1b'));
        assert_eq!(strip_ansi(&coloured), Renderer::plain().render(&g));
    }

    #[test]
    fn custom_styler() {
        struct Brackets;
        impl Styler for Brackets {
            fn open(&self, role: Role) -> Option<&str> {
                (role == Role::Point).then_some("[")
            }
            fn close(&self, _: Role) -> &str {
                "]"
            }
        }
        assert_eq!(Renderer::new(Brackets).render(&sample_grid()), "[*]  \n -+\n");
    }

    #[test]
    fn writes_everything_once() {
        let mut buf = Vec::new();
        Renderer::plain().write_to(&sample_grid(), &mut buf).unwrap();
        assert_eq!(buf, b"*  \n -+\n");
    }
}
