//! Parser for SVG path data
//!
//! Supports the `m/M`, `l/L`, `h/H`, `v/V` and `z/Z` commands only.

pub mod ast;
mod grammar;
pub mod lexer;
mod normalize;

pub use ast::*;

use crate::error::PathError;

/// Parse path data into normalized commands
///
/// Every parameter is multiplied by `scale` and every y value is negated, so
/// the result is in bottom-left-origin display space.
///
/// # Example
///
/// ```rust
/// use hex_plotter::parser::{parse, CommandKind};
///
/// let commands = parse("M10,10H50", 1.0).unwrap();
/// assert_eq!(commands.len(), 2);
/// assert_eq!(commands[0].y(), Some(-10.0));
/// assert_eq!(commands[1].kind(), CommandKind::HorizontalLineTo);
/// ```
pub fn parse(path_data: &str, scale: f64) -> Result<Vec<PathCommand>, PathError> {
    let segments = grammar::segments(path_data)?;
    normalize::expand(&segments, scale)
}
