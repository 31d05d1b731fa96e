//! SVG renderer for recorded drawings
//!
//! This module takes a [`Canvas`](crate::surface::Canvas) and produces an SVG
//! string with one line per drawn segment.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
