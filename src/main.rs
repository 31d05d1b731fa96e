//! Hex Plotter CLI
//!
//! Usage:
//!   hex-plotter [OPTIONS] [NUMBER]
//!
//! Options:
//!   -f, --font <DIR>       Font directory with one SVG per hex digit plus x.svg
//!       --scale <SCALE>    Font scale
//!       --speed <SPEED>    Animation speed (0 draws instantly)
//!       --margin <MARGIN>  Gap between digits
//!   -c, --config <FILE>    Configuration file (TOML format)
//!   -o, --output <FILE>    Write SVG here instead of stdout
//!       --debug-font       Render all digits to test the font
//!   -h, --help             Print help

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use hex_plotter::{render_svg, Canvas, DigitStrip, DisplayConfig, DisplayError, Point};

/// Output file rewritten by the interactive loop when none is given
const DEFAULT_INTERACTIVE_OUTPUT: &str = "hex.svg";

/// Font scale used unless a config file or `--scale` sets one
const DEFAULT_SCALE: f64 = 5.0;

#[derive(Parser)]
#[command(name = "hex-plotter")]
#[command(about = "Draw hexadecimal numbers with SVG stroke fonts")]
struct Cli {
    /// Decimal number to display (runs the interactive loop if omitted)
    number: Option<u64>,

    /// Path to a directory containing the font. It needs an svg file for
    /// each hexadecimal digit plus an x.svg file for the `x` symbol.
    #[arg(short, long, default_value = "fonts/segment")]
    font: PathBuf,

    /// Font scale [default: 5]
    #[arg(long)]
    scale: Option<f64>,

    /// Animation speed, 0 draws instantly [default: 0]
    #[arg(long)]
    speed: Option<u8>,

    /// Gap between digits [default: 10]
    #[arg(long)]
    margin: Option<f64>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write SVG to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render all digits to test the font
    #[arg(long)]
    debug_font: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // CLI defaults, then the config file, then flags
    let mut config = DisplayConfig::default().with_scale(DEFAULT_SCALE);
    if let Some(path) = &cli.config {
        config = match config.merge_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
    }
    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    if let Some(speed) = cli.speed {
        config.speed = speed;
    }
    if let Some(margin) = cli.margin {
        config.margin = margin;
    }

    let strip = match DigitStrip::load(&cli.font, &config) {
        Ok(strip) => strip,
        Err(e) => fail(&e),
    };

    let mut canvas = Canvas::new();

    if cli.debug_font {
        if let Err(e) = strip.draw_all(&mut canvas, Point::zero()) {
            fail(&e);
        }
        emit(&canvas, &config, cli.output.as_deref());
        return;
    }

    if let Some(n) = cli.number {
        if let Err(e) = strip.draw_number(&mut canvas, n, Point::zero()) {
            fail(&e);
        }
        emit(&canvas, &config, cli.output.as_deref());
        return;
    }

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INTERACTIVE_OUTPUT));
    run_interactive(&strip, &mut canvas, &config, &output);
}

/// Read numbers from stdin until an empty line or end of input
fn run_interactive(strip: &DigitStrip, canvas: &mut Canvas, config: &DisplayConfig, output: &Path) {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if prompt {
            print!("Type in a number to be converted: ");
            if let Err(e) = io::stdout().flush() {
                eprintln!("Error writing to stdout: {}", e);
                std::process::exit(1);
            }
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        let n: u64 = match input.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("'{}' is not a non-negative whole number", input);
                continue;
            }
        };

        if let Err(e) = strip.draw_number(canvas, n, Point::zero()) {
            fail(&e);
        }
        emit(canvas, config, Some(output));
        info!("rendered {} as {}", n, hex_plotter::hex_string(n));
    }
}

/// Write the canvas as SVG to a file or stdout
fn emit(canvas: &Canvas, config: &DisplayConfig, output: Option<&Path>) {
    let svg = render_svg(canvas, &config.svg);
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            info!("wrote {}", path.display());
        }
        None => print!("{}", svg),
    }
}

fn fail(e: &DisplayError) -> ! {
    eprintln!("Error: {}", e.report());
    std::process::exit(1);
}
