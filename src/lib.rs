//! Hex Plotter - hexadecimal digits drawn from SVG stroke fonts
//!
//! This library parses a small subset of SVG path data (`m l h v z`),
//! replays it as pen strokes on a [`Surface`], and lays glyphs out left to
//! right to display hexadecimal numbers.
//!
//! # Example
//!
//! ```rust
//! use hex_plotter::{Canvas, DigitStrip, DisplayConfig, Glyph, Point};
//!
//! let config = DisplayConfig::default();
//! let strip = DigitStrip::from_fn(|_| Glyph::from_path_data(["M0,0H20"], 1.0), &config).unwrap();
//!
//! let mut canvas = Canvas::new();
//! let end = strip.draw(&mut canvas, "x1f", Point::zero()).unwrap();
//! assert_eq!(canvas.segments().len(), 3);
//! assert_eq!(end, 90.0);
//! ```

pub mod config;
pub mod error;
pub mod glyph;
pub mod parser;
pub mod renderer;
pub mod replay;
pub mod strip;
pub mod surface;

pub use config::{ConfigError, DisplayConfig};
pub use error::{DisplayError, PathError};
pub use glyph::{Glyph, GlyphPath};
pub use parser::{parse, CommandKind, PathCommand};
pub use renderer::{render_svg, SvgConfig};
pub use replay::replay;
pub use strip::{hex_string, DigitStrip, HexSymbol};
pub use surface::{Canvas, Point, Surface};

use std::path::Path;

/// Load a font and render `text` to an SVG document
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use hex_plotter::{render_text, DisplayConfig};
///
/// let svg = render_text(Path::new("fonts/segment"), "0x2a", &DisplayConfig::default()).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn render_text(font_dir: &Path, text: &str, config: &DisplayConfig) -> Result<String, DisplayError> {
    let strip = DigitStrip::load(font_dir, config)?;
    let mut canvas = Canvas::new();
    strip.draw(&mut canvas, text, Point::zero())?;
    Ok(render_svg(&canvas, &config.svg))
}
