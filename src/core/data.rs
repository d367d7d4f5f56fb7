//! Line-oriented CSV loader producing a sorted, bounded [`Series`].

use std::io::{self, BufRead, BufReader, Read};

use thiserror::Error;
use tracing::debug;

/// One `(x, y)` point from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub x: i64,
    pub y: i64,
}

impl Sample {
    #[inline]
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Sample {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Samples sorted ascending by `x`, axis titles and the min/max of both
/// coordinates. All four bounds are `0` for a header-only input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    pub x_name: String,
    pub y_name: String,
    pub samples: Vec<Sample>,
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

// --- Error Handling ---

/// Why a single data row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowCause {
    #[error("coordinates require 2 values")]
    WrongFieldCount,
    #[error("{value} is not a number")]
    NotANumber { field: usize, value: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no data found")]
    EmptyInput,
    #[error("header with 2 elements required, got \"{text}\"")]
    Header { text: String },
    /// `row` is 1-based over data rows, the header is not counted.
    #[error("could not parse row {row}: \"{text}\", reason: {cause}")]
    Row {
        row: usize,
        text: String,
        cause: RowCause,
    },
    #[error("I/O error while reading input: {0}")]
    Io(#[from] io::Error),
}

// --- Helpers ---

#[inline]
fn parse_i64(field: usize, text: &str) -> Result<i64, RowCause> {
    lexical_core::parse::<i64>(text.as_bytes()).map_err(|_| RowCause::NotANumber {
        field,
        value: text.to_owned(),
    })
}

/// Parse one data row. Columns past the second are ignored.
pub fn parse_row(row: &str) -> Result<Sample, RowCause> {
    let mut cols = row.split(',');
    let (Some(x), Some(y)) = (cols.next(), cols.next()) else {
        return Err(RowCause::WrongFieldCount);
    };
    Ok(Sample {
        x: parse_i64(0, x)?,
        y: parse_i64(1, y)?,
    })
}

/// Read the next line without its terminator. `false` at end of input.
fn next_line<R: BufRead>(rdr: &mut R, buf: &mut String) -> io::Result<bool> {
    buf.clear();
    if rdr.read_line(buf)? == 0 {
        return Ok(false);
    }
    if buf.ends_with('\n') {
        buf.pop();
    }
    if buf.ends_with('\r') {
        buf.pop();
    }
    Ok(true)
}

/// First two header fields, both non-empty.
fn axis_names(header: &str) -> Option<(String, String)> {
    let mut fields = header.split(',');
    match (fields.next(), fields.next()) {
        (Some(x), Some(y)) if !x.is_empty() && !y.is_empty() => Some((x.to_owned(), y.to_owned())),
        _ => None,
    }
}

impl Series {
    /// Load from in-memory text.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        Self::from_reader(text.as_bytes())
    }

    /// Load from any reader. The first line is the `xName,yName` header, every
    /// following non-empty line an `x,y` row.
    pub fn from_reader<R: Read>(src: R) -> Result<Self, LoadError> {
        let mut rdr = BufReader::new(src);
        let mut buf = String::with_capacity(64);

        if !next_line(&mut rdr, &mut buf)? {
            return Err(LoadError::EmptyInput);
        }
        let Some((x_name, y_name)) = axis_names(&buf) else {
            return Err(LoadError::Header { text: buf });
        };

        let mut series = Series {
            x_name,
            y_name,
            ..Series::default()
        };
        let mut row = 0usize;

        while next_line(&mut rdr, &mut buf)? {
            if buf.is_empty() {
                continue;
            }
            row += 1;
            let s = parse_row(&buf).map_err(|cause| LoadError::Row {
                row,
                text: buf.clone(),
                cause,
            })?;

            if series.samples.is_empty() {
                series.x_min = s.x;
                series.x_max = s.x;
                series.y_min = s.y;
                series.y_max = s.y;
            } else {
                series.x_min = series.x_min.min(s.x);
                series.x_max = series.x_max.max(s.x);
                series.y_min = series.y_min.min(s.y);
                series.y_max = series.y_max.max(s.y);
            }
            series.samples.push(s);
        }

        // stable: equal-x rows keep their input order
        series.samples.sort_by_key(|s| s.x);
        debug!(
            rows = series.samples.len(),
            x = ?(series.x_min, series.x_max),
            y = ?(series.y_min, series.y_max),
            "series loaded"
        );
        Ok(series)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
