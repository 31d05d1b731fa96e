//! Integration tests loading fonts from disk

use std::path::{Path, PathBuf};

use hex_plotter::{
    render_svg, render_text, Canvas, DigitStrip, DisplayConfig, DisplayError, HexSymbol, PathError,
    Point, Surface,
};
use pretty_assertions::assert_eq;

fn font_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

fn fixture(name: &str) -> PathBuf {
    font_dir("tests/fixtures").join(name)
}

/// x coordinate where each glyph's horizontal stroke starts
fn stroke_starts(canvas: &Canvas) -> Vec<f64> {
    canvas.segments().iter().map(|s| s.from.x).collect()
}

#[test]
fn test_flat_font_layout() {
    let strip = DigitStrip::load(&fixture("flat"), &DisplayConfig::default()).unwrap();
    let mut canvas = Canvas::new();
    strip.draw(&mut canvas, "xAB", Point::zero()).unwrap();

    assert_eq!(stroke_starts(&canvas), vec![0.0, 30.0, 60.0]);
    for segment in canvas.segments() {
        assert_eq!(segment.to.x - segment.from.x, 20.0);
        assert_eq!(segment.from.y, 0.0);
    }
}

#[test]
fn test_flat_font_scale_and_margin() {
    let config = DisplayConfig::default().with_scale(2.0).with_margin(5.0);
    let strip = DigitStrip::load(&fixture("flat"), &config).unwrap();
    let mut canvas = Canvas::new();
    let end = strip.draw(&mut canvas, "0x1", Point::new(10.0, 0.0)).unwrap();

    assert_eq!(stroke_starts(&canvas), vec![10.0, 55.0, 100.0]);
    assert_eq!(end, 145.0);
}

#[test]
fn test_invalid_digit_after_reset() {
    let strip = DigitStrip::load(&fixture("flat"), &DisplayConfig::default()).unwrap();
    let mut canvas = Canvas::new();
    strip.draw(&mut canvas, "ff", Point::zero()).unwrap();

    let err = strip.draw(&mut canvas, "g", Point::zero()).unwrap_err();
    assert!(matches!(err, DisplayError::InvalidDigit { digit: 'g' }));
    assert!(canvas.segments().is_empty());
    assert_eq!(canvas.position(), Point::zero());
    assert!(!canvas.is_cursor_visible());
}

#[test]
fn test_missing_glyph_file() {
    let err = DigitStrip::load(&fixture("incomplete"), &DisplayConfig::default()).unwrap_err();
    match err {
        DisplayError::FontNotFound { path } => {
            assert_eq!(path, fixture("incomplete").join("A.svg"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_wrong_extension_is_not_found() {
    let config = DisplayConfig::default().with_extension("xml");
    let err = DigitStrip::load(&fixture("flat"), &config).unwrap_err();
    assert!(matches!(err, DisplayError::FontNotFound { .. }));
}

#[test]
fn test_broken_glyph_reports_file() {
    let err = DigitStrip::load(&fixture("broken"), &DisplayConfig::default()).unwrap_err();
    match &err {
        DisplayError::Glyph { path, source, .. } => {
            assert_eq!(path, &fixture("broken").join("7.svg"));
            assert!(matches!(source, PathError::UnsupportedCommand { letter: 'C', .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.report().contains("unsupported path command 'C'"));
}

#[test]
fn test_segment_font_loads_every_symbol() {
    let strip = DigitStrip::load(&font_dir("fonts/segment"), &DisplayConfig::default()).unwrap();
    for symbol in HexSymbol::ALL {
        assert!(
            !strip.glyph(symbol).paths().is_empty(),
            "glyph {} has no paths",
            symbol
        );
    }
}

#[test]
fn test_segment_font_glyph_width() {
    let config = DisplayConfig::default().with_scale(5.0);
    let strip = DigitStrip::load(&font_dir("fonts/segment"), &config).unwrap();

    for symbol in HexSymbol::ALL {
        let mut canvas = Canvas::new();
        let right = strip.glyph(symbol).draw(&mut canvas, 0.0, Point::zero());
        assert_eq!(right, 50.0, "glyph {} width", symbol);
        for segment in canvas.segments() {
            // Glyphs hang below the baseline after the y flip
            assert!(segment.from.y <= 0.0 && segment.from.y >= -100.0);
            assert!(segment.to.y <= 0.0 && segment.to.y >= -100.0);
        }
    }
}

#[test]
fn test_segment_font_eight_is_closed() {
    let strip = DigitStrip::load(&font_dir("fonts/segment"), &DisplayConfig::default()).unwrap();
    let mut canvas = Canvas::new();
    strip.draw(&mut canvas, "8", Point::zero()).unwrap();

    // Box of four sides plus the middle bar
    assert_eq!(canvas.segments().len(), 5);
    let close = canvas.segments()[3];
    assert_eq!(close.to, Point::zero());
}

#[test]
fn test_debug_font_renders_svg() {
    let config = DisplayConfig::default().with_scale(5.0);
    let strip = DigitStrip::load(&font_dir("fonts/segment"), &config).unwrap();
    let mut canvas = Canvas::new();
    let end = strip.draw_all(&mut canvas, Point::zero()).unwrap();

    assert_eq!(end, 17.0 * 60.0);
    let svg = render_svg(&canvas, &config.svg);
    assert!(svg.contains("<svg"));
    assert_eq!(svg.matches("<line ").count(), canvas.segments().len());
}

#[test]
fn test_animated_render() {
    let config = DisplayConfig::default().with_speed(3);
    let strip = DigitStrip::load(&fixture("flat"), &config).unwrap();
    let mut canvas = Canvas::new();
    strip.draw_number(&mut canvas, 10, Point::zero()).unwrap();

    assert_eq!(canvas.speed(), 3);
    let svg = render_svg(&canvas, &config.svg);
    assert_eq!(svg.matches("<animate ").count(), 3);
}

#[test]
fn test_render_text() {
    let svg = render_text(&fixture("flat"), "0x2a", &DisplayConfig::default()).unwrap();
    assert_eq!(svg.matches("<line ").count(), 4);
    assert!(svg.contains(r#"<line x1="0" y1="0" x2="20" y2="0"/>"#));
}
