//! Glyphs loaded from SVG font files
//!
//! A glyph is every `<path>` of one file, each parsed once and replayed on
//! demand.

use std::path::Path;

use log::debug;

use crate::error::DisplayError;
use crate::parser::{self, PathCommand};
use crate::replay::replay;
use crate::surface::{Point, Surface};

/// One `<path>` element of a glyph
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPath {
    data: String,
    commands: Vec<PathCommand>,
}

impl GlyphPath {
    /// The original `d` attribute
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Replay this path, returning its rightmost x
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, offset: Point) -> f64 {
        replay(&self.commands, surface, offset)
    }
}

/// All strokes needed to draw one character
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Glyph {
    paths: Vec<GlyphPath>,
}

impl Glyph {
    /// Load a glyph from an SVG file
    pub fn load(path: &Path, scale: f64) -> Result<Self, DisplayError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DisplayError::font_not_found(path),
            _ => DisplayError::FontRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        let glyph = Self::from_svg(&content, scale, path)?;
        debug!(
            "loaded glyph {} with {} path(s)",
            path.display(),
            glyph.paths.len()
        );
        Ok(glyph)
    }

    /// Parse a glyph from SVG source
    ///
    /// Every `<path>` element is used in document order, wherever it is
    /// nested. A path without a `d` attribute draws nothing. `origin` is
    /// only used to label errors.
    pub fn from_svg(source: &str, scale: f64, origin: &Path) -> Result<Self, DisplayError> {
        let doc = roxmltree::Document::parse(source).map_err(|e| DisplayError::InvalidSvg {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let paths = doc
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == "path")
            .map(|node| {
                let data = node.attribute("d").unwrap_or_default();
                Self::parse_path(data, scale, origin)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { paths })
    }

    /// Build a glyph directly from path data strings
    pub fn from_path_data<'d>(
        data: impl IntoIterator<Item = &'d str>,
        scale: f64,
    ) -> Result<Self, DisplayError> {
        let paths = data
            .into_iter()
            .map(|d| Self::parse_path(d, scale, Path::new("<inline>")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { paths })
    }

    fn parse_path(data: &str, scale: f64, origin: &Path) -> Result<GlyphPath, DisplayError> {
        let commands = parser::parse(data, scale).map_err(|source| DisplayError::Glyph {
            path: origin.to_path_buf(),
            data: data.to_string(),
            source,
        })?;
        Ok(GlyphPath {
            data: data.to_string(),
            commands,
        })
    }

    pub fn paths(&self) -> &[GlyphPath] {
        &self.paths
    }

    /// Draw every path at `(x_offset, global_offset.y)`
    ///
    /// Returns the largest rightmost x over all paths, or 0 for a glyph with
    /// no paths.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x_offset: f64,
        global_offset: Point,
    ) -> f64 {
        let offset = Point::new(x_offset, global_offset.y);
        self.paths
            .iter()
            .map(|path| path.draw(surface, offset))
            .fold(None, |max: Option<f64>, x| match max {
                Some(m) if m >= x => Some(m),
                _ => Some(x),
            })
            .unwrap_or(0.0)
    }
}
