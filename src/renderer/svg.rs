//! SVG generation from a recorded canvas

use crate::surface::{Canvas, Segment};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    lines: Vec<String>,
    bounds: Option<(f64, f64, f64, f64)>,
    elapsed: f64,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            lines: vec![],
            bounds: None,
            elapsed: 0.0,
        }
    }

    fn indent_str(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn include(&mut self, x: f64, y: f64) {
        self.bounds = Some(match self.bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    /// Add one drawn segment
    ///
    /// Display coordinates grow upwards, so y is negated back into SVG
    /// space. With a non-zero `speed` the line is drawn progressively after
    /// every previously added animated line.
    pub fn add_segment(&mut self, segment: &Segment, speed: u8) {
        let (x1, y1) = (segment.from.x, -segment.from.y);
        let (x2, y2) = (segment.to.x, -segment.to.y);
        self.include(x1, y1);
        self.include(x2, y2);

        let coords = format!(
            r#"x1="{}" y1="{}" x2="{}" y2="{}""#,
            num(x1),
            num(y1),
            num(x2),
            num(y2)
        );

        let line = if speed == 0 {
            format!("{}<line {}/>", self.indent_str(2), coords)
        } else {
            let length = num(segment.length());
            let duration = self.config.segment_duration / f64::from(speed);
            let begin = self.elapsed;
            self.elapsed += duration;
            format!(
                r#"{}<line {} stroke-dasharray="{len}" stroke-dashoffset="{len}"><animate attributeName="stroke-dashoffset" from="{len}" to="0" begin="{}s" dur="{}s" fill="freeze"/></line>"#,
                self.indent_str(2),
                coords,
                num(begin),
                num(duration),
                len = length,
            )
        };
        self.lines.push(line);
    }

    /// Compute the viewBox as (min_x, min_y, width, height)
    pub fn viewbox(&self) -> (f64, f64, f64, f64) {
        let pad = self.config.viewbox_padding;
        let (min_x, min_y, max_x, max_y) = self.bounds.unwrap_or((0.0, 0.0, 0.0, 0.0));
        (
            min_x - pad,
            min_y - pad,
            max_x - min_x + 2.0 * pad,
            max_y - min_y + 2.0 * pad,
        )
    }

    /// Produce the final SVG document
    pub fn build(self) -> String {
        let nl = self.newline();
        let (vx, vy, vw, vh) = self.viewbox();
        let mut svg = String::new();

        svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        svg.push_str(nl);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            num(vx),
            num(vy),
            num(vw),
            num(vh),
            num(vw),
            num(vh)
        ));
        svg.push_str(nl);
        svg.push_str(&format!(
            r#"{}<g fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round">"#,
            self.indent_str(1),
            escape_xml(&self.config.stroke),
            num(self.config.stroke_width)
        ));
        svg.push_str(nl);
        for line in &self.lines {
            svg.push_str(line);
            svg.push_str(nl);
        }
        svg.push_str(&format!("{}</g>", self.indent_str(1)));
        svg.push_str(nl);
        svg.push_str("</svg>");
        svg.push_str(nl);
        svg
    }
}

/// Render every segment recorded on `canvas` as an SVG document
///
/// The canvas animation speed decides whether strokes are animated.
pub fn render_svg(canvas: &Canvas, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    for segment in canvas.segments() {
        builder.add_segment(segment, canvas.speed());
    }
    builder.build()
}

/// Format a coordinate with at most two decimals and no trailing zeros
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
