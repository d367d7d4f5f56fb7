//! ANSI colour tokens, per-role colour configuration and the [`Styler`] seam
//! the text renderer decorates cells through.

use std::{fmt, str};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
    #[error("unknown colour `{0}` (try `splot colors`)")]
    UnknownName(String),
}

const RESET: &str = "\x1b[0m";

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[37m")
    }
    pub const fn bright_green() -> Self {
        Self::Static("\x1b[92m")
    }
    pub const fn bright_yellow() -> Self {
        Self::Static("\x1b[93m")
    }
    pub const fn bright_magenta() -> Self {
        Self::Static("\x1b[95m")
    }
    pub const fn bright_cyan() -> Self {
        Self::Static("\x1b[96m")
    }
    pub const fn orange() -> Self {
        Self::Static("\x1b[38;2;210;135;10m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static(RESET)
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// Parse a colour name or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            "bright-green" => Ok(Self::bright_green()),
            "bright-yellow" => Ok(Self::bright_yellow()),
            "bright-magenta" => Ok(Self::bright_magenta()),
            "bright-cyan" => Ok(Self::bright_cyan()),
            "orange" => Ok(Self::orange()),
            _ if s.starts_with('#') => Self::from_hex(s),
            _ => Err(ColorError::UnknownName(s.to_owned())),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(
            byte(h.get(..2).ok_or(ColorError::InvalidHexDigit)?)?,
            byte(h.get(2..4).ok_or(ColorError::InvalidHexDigit)?)?,
            byte(h.get(4..).ok_or(ColorError::InvalidHexDigit)?)?,
        ))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII by `rgb`
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }
}

impl From<AnsiCode> for String {
    #[inline]
    fn from(c: AnsiCode) -> Self {
        c.as_str().to_owned()
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

// --- Roles ---

/// What a grid cell depicts. Each role is styled independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Point,
    Line,
    XAxis,
    YAxis,
    XAxisTitle,
    YAxisTitle,
    Tick,
    TickLabel,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Point,
        Role::Line,
        Role::XAxis,
        Role::YAxis,
        Role::XAxisTitle,
        Role::YAxisTitle,
        Role::Tick,
        Role::TickLabel,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Decorates rendered cells by role. Tokens are opaque to the renderer, so
/// ANSI escapes, HTML spans or GUI tags all fit.
pub trait Styler {
    /// Text written before a cell of `role`; `None` leaves the cell bare.
    fn open(&self, role: Role) -> Option<&str>;
    /// Text written after a cell `open` returned `Some` for.
    fn close(&self, role: Role) -> &str;
}

impl<S: Styler + ?Sized> Styler for &S {
    #[inline]
    fn open(&self, role: Role) -> Option<&str> {
        (**self).open(role)
    }
    #[inline]
    fn close(&self, role: Role) -> &str {
        (**self).close(role)
    }
}

/// No decoration at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Styler for Plain {
    #[inline]
    fn open(&self, _: Role) -> Option<&str> {
        None
    }
    #[inline]
    fn close(&self, _: Role) -> &str {
        ""
    }
}

/// Role → colour token. A missing or empty token means "no colour".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorConfig {
    tokens: [Option<String>; 8],
}

impl ColorConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette of the stock `splot` binary.
    #[must_use]
    pub fn ansi_default() -> Self {
        Self::new()
            .with(Role::Point, AnsiCode::bright_yellow())
            .with(Role::Line, AnsiCode::bright_green())
            .with(Role::XAxis, AnsiCode::blue())
            .with(Role::YAxis, AnsiCode::blue())
            .with(Role::XAxisTitle, AnsiCode::bright_cyan())
            .with(Role::YAxisTitle, AnsiCode::bright_cyan())
            .with(Role::TickLabel, AnsiCode::bright_magenta())
    }

    #[inline]
    #[must_use]
    pub fn with(mut self, role: Role, token: impl Into<String>) -> Self {
        self.set(role, token);
        self
    }

    #[inline]
    pub fn set(&mut self, role: Role, token: impl Into<String>) {
        self.tokens[role.index()] = Some(token.into());
    }

    #[inline]
    pub fn clear(&mut self, role: Role) {
        self.tokens[role.index()] = None;
    }

    #[inline]
    #[must_use]
    pub fn token(&self, role: Role) -> Option<&str> {
        self.tokens[role.index()]
            .as_deref()
            .filter(|t| !t.is_empty())
    }
}

impl Styler for ColorConfig {
    #[inline]
    fn open(&self, role: Role) -> Option<&str> {
        self.token(role)
    }
    #[inline]
    fn close(&self, _: Role) -> &str {
        RESET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_escape() {
        assert_eq!(AnsiCode::rgb(210, 5, 0).as_str(), "\x1b[38;2;210;5;0m");
        assert_eq!(
            AnsiCode::from_name("#ff0080").unwrap().as_str(),
            "\x1b[38;2;255;0;128m"
        );
    }

    #[test]
    fn names_and_errors() {
        assert_eq!(AnsiCode::from_name(" Blue ").unwrap(), AnsiCode::blue());
        assert!(matches!(
            AnsiCode::from_name("#12345"),
            Err(ColorError::InvalidHexLength)
        ));
        assert!(matches!(
            AnsiCode::from_name("#zz0000"),
            Err(ColorError::InvalidHexDigit)
        ));
        assert!(matches!(
            AnsiCode::from_name("mauve"),
            Err(ColorError::UnknownName(_))
        ));
    }

    #[test]
    fn empty_tokens_mean_no_colour() {
        let c = ColorConfig::new()
            .with(Role::Point, "")
            .with(Role::Line, AnsiCode::green());
        assert_eq!(c.open(Role::Point), None);
        assert_eq!(c.open(Role::Tick), None);
        assert_eq!(c.open(Role::Line), Some("\x1b[32m"));
        assert_eq!(c.close(Role::Line), "\x1b[0m");
    }

    #[test]
    fn default_palette_leaves_ticks_bare() {
        let c = ColorConfig::ansi_default();
        assert_eq!(c.token(Role::Tick), None);
        assert_eq!(c.token(Role::Point), Some("\x1b[93m"));
        assert!(Role::ALL.iter().filter(|r| c.token(**r).is_some()).count() == 7);
    }
}
