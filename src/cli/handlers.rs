use std::{
    fs::File,
    io::{self, Read},
    time::Instant,
};

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::core::{
    bounds::terminal_geometry,
    color::{AnsiCode, ColorConfig, Role, colorize},
    config::Config,
    data::LoadError,
    error::PlotError,
};

use super::parse::PlotArgs;

/// Rows left free under the plot for the shell prompt.
const PROMPT_ROWS: usize = 1;

pub fn plot(a: &PlotArgs) -> Result<(), PlotError> {
    if a.debug {
        init_tracing();
    }

    let (w, h) = terminal_geometry();
    let width = a.width.unwrap_or(usize::from(w.0));
    let height = a
        .height
        .unwrap_or_else(|| usize::from(h.0).saturating_sub(PROMPT_ROWS));

    let cfg = Config::builder(width, height)
        .x_ticks(a.x_ticks)
        .y_ticks(a.y_ticks)
        .colors_opt(colors(a)?)
        .build()?;
    debug!(width, height, x_ticks = cfg.x_ticks, y_ticks = cfg.y_ticks, "config");

    let t_render = Instant::now();
    let input = open(&a.file)?;
    let result = crate::render(input, io::stdout().lock(), &cfg);
    debug!(elapsed_us = t_render.elapsed().as_micros(), "render");
    result
}

/// Stock palette with per-role overrides; `None` when colour is off.
fn colors(a: &PlotArgs) -> Result<Option<ColorConfig>, PlotError> {
    if a.no_color {
        return Ok(None);
    }
    let mut c = ColorConfig::ansi_default();
    let overrides: [(&Option<String>, &[Role]); 6] = [
        (&a.point_color, &[Role::Point]),
        (&a.line_color, &[Role::Line]),
        (&a.axis_color, &[Role::XAxis, Role::YAxis]),
        (&a.title_color, &[Role::XAxisTitle, Role::YAxisTitle]),
        (&a.tick_color, &[Role::Tick]),
        (&a.label_color, &[Role::TickLabel]),
    ];
    for (name, roles) in overrides {
        let Some(name) = name else { continue };
        let code = if name.trim().eq_ignore_ascii_case("none") {
            None
        } else {
            Some(AnsiCode::from_name(name)?)
        };
        for &role in roles {
            match code {
                Some(code) => c.set(role, code),
                None => c.clear(role),
            }
        }
    }
    Ok(Some(c))
}

fn open(path: &str) -> Result<Box<dyn Read>, LoadError> {
    if path == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(File::open(path)?))
    }
}

/// Install the stderr subscriber. `false` when another one is already set.
fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("splot=trace"));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: --debug has no effect, a tracing subscriber is already set: {e}");
            false
        }
    }
}

/// Pretty-print available color names + an example hex code.
pub fn colors_list() {
    println!("\nPossible colors:");
    for (name, code) in [
        ("black", AnsiCode::black()),
        ("red", AnsiCode::red()),
        ("green", AnsiCode::green()),
        ("yellow", AnsiCode::yellow()),
        ("blue", AnsiCode::blue()),
        ("magenta", AnsiCode::magenta()),
        ("cyan", AnsiCode::cyan()),
        ("white", AnsiCode::white()),
        ("bright-green", AnsiCode::bright_green()),
        ("bright-yellow", AnsiCode::bright_yellow()),
        ("bright-magenta", AnsiCode::bright_magenta()),
        ("bright-cyan", AnsiCode::bright_cyan()),
        ("orange", AnsiCode::orange()),
    ] {
        println!("{}", colorize(&code, name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
    println!("none  (no color for that role)\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::{Cli, Command};
    use clap::Parser;

    fn args(extra: &[&str]) -> PlotArgs {
        let argv = ["splot", "plot"].iter().chain(extra).copied();
        match Cli::parse_from(argv).cmd {
            Command::Plot(a) => a,
            Command::Colors => unreachable!(),
        }
    }

    #[test]
    fn defaults_to_stock_palette() {
        let c = colors(&args(&[])).unwrap().unwrap();
        assert_eq!(c, ColorConfig::ansi_default());
    }

    #[test]
    fn overrides_and_none() {
        let c = colors(&args(&["--axis-color", "red", "--point-color", "none"]))
            .unwrap()
            .unwrap();
        assert_eq!(c.token(Role::XAxis), Some(AnsiCode::red().as_str()));
        assert_eq!(c.token(Role::YAxis), Some(AnsiCode::red().as_str()));
        assert_eq!(c.token(Role::Point), None);
    }

    #[test]
    fn no_color_wins() {
        assert!(colors(&args(&["--no-color", "--line-color", "red"]))
            .unwrap()
            .is_none());
    }

    #[test]
    fn bad_color_is_an_error() {
        assert!(matches!(
            colors(&args(&["--tick-color", "#12"])),
            Err(PlotError::Color(_))
        ));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        assert!(matches!(
            open("/definitely/not/here.csv"),
            Err(LoadError::Io(_))
        ));
    }

    #[test]
    fn second_subscriber_is_reported() {
        init_tracing();
        assert!(!init_tracing());
    }
}
