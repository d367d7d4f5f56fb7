use clap::{Parser, Subcommand};

use crate::core::layout::DEFAULT_TICKS;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "splot",
    about = "Scatter-and-line plots of two-column CSV data in the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot an `x,y` CSV file
    Plot(PlotArgs),
    /// Show available color names / hex syntax
    Colors,
}

/// `splot plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Grid width in columns (terminal width if omitted)
    #[arg(long)]
    pub width: Option<usize>,
    /// Grid height in rows (terminal height if omitted)
    #[arg(long)]
    pub height: Option<usize>,

    /// Number of ticks on the x axis
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    pub x_ticks: usize,
    /// Number of ticks on the y axis
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    pub y_ticks: usize,

    /// Plain text, no escape sequences
    #[arg(long)]
    pub no_color: bool,

    /// Point color (name, `#RRGGBB` or `none`)
    #[arg(long, value_name = "COLOR")]
    pub point_color: Option<String>,
    /// Line color
    #[arg(long, value_name = "COLOR")]
    pub line_color: Option<String>,
    /// Color of both axis lines
    #[arg(long, value_name = "COLOR")]
    pub axis_color: Option<String>,
    /// Color of both axis titles
    #[arg(long, value_name = "COLOR")]
    pub title_color: Option<String>,
    /// Tick mark color
    #[arg(long, value_name = "COLOR")]
    pub tick_color: Option<String>,
    /// Tick label color
    #[arg(long, value_name = "COLOR")]
    pub label_color: Option<String>,

    /// Emit diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
