//! A row of hex digits drawn from a font directory

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::glyph::Glyph;
use crate::surface::{Point, Surface};

/// One of the 17 symbols a font provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HexSymbol {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    A,
    B,
    C,
    D,
    E,
    F,
    /// The `x` of the `0x` prefix
    X,
}

impl HexSymbol {
    /// Every symbol, in drawing order for a font test
    pub const ALL: [HexSymbol; 17] = [
        HexSymbol::Zero,
        HexSymbol::One,
        HexSymbol::Two,
        HexSymbol::Three,
        HexSymbol::Four,
        HexSymbol::Five,
        HexSymbol::Six,
        HexSymbol::Seven,
        HexSymbol::Eight,
        HexSymbol::Nine,
        HexSymbol::A,
        HexSymbol::B,
        HexSymbol::C,
        HexSymbol::D,
        HexSymbol::E,
        HexSymbol::F,
        HexSymbol::X,
    ];

    /// The character naming this symbol's glyph file
    pub fn as_char(self) -> char {
        match self {
            HexSymbol::Zero => '0',
            HexSymbol::One => '1',
            HexSymbol::Two => '2',
            HexSymbol::Three => '3',
            HexSymbol::Four => '4',
            HexSymbol::Five => '5',
            HexSymbol::Six => '6',
            HexSymbol::Seven => '7',
            HexSymbol::Eight => '8',
            HexSymbol::Nine => '9',
            HexSymbol::A => 'A',
            HexSymbol::B => 'B',
            HexSymbol::C => 'C',
            HexSymbol::D => 'D',
            HexSymbol::E => 'E',
            HexSymbol::F => 'F',
            HexSymbol::X => 'x',
        }
    }

    fn exact(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_char() == c)
    }

    /// Find the symbol for a character
    ///
    /// Tries the character as-is, then its uppercase form. `a` resolves to
    /// `A`, while `X` has no symbol since only lowercase `x` is registered.
    pub fn lookup(c: char) -> Option<Self> {
        Self::exact(c).or_else(|| Self::exact(c.to_ascii_uppercase()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HexSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Format a number the way the strip displays it, e.g. `31` as `0x1f`
pub fn hex_string(n: u64) -> String {
    format!("{:#x}", n)
}

/// Draws strings of hex symbols left to right
#[derive(Debug, Clone)]
pub struct DigitStrip {
    /// Indexed by `HexSymbol::index`, always holds all 17 glyphs
    glyphs: Vec<Glyph>,
    speed: u8,
    margin: f64,
}

impl DigitStrip {
    /// Load every glyph from `font_dir`
    ///
    /// Each symbol is read from `<char>.<extension>`. Fails if the directory
    /// or any glyph file is missing, or if any glyph does not parse.
    pub fn load(font_dir: &Path, config: &DisplayConfig) -> Result<Self, DisplayError> {
        if !font_dir.is_dir() {
            return Err(DisplayError::font_not_found(font_dir));
        }

        let glyphs = HexSymbol::ALL
            .iter()
            .map(|symbol| Glyph::load(&glyph_path(font_dir, *symbol, config), config.scale))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "loaded {} glyphs from {}",
            glyphs.len(),
            font_dir.display()
        );
        Ok(Self::from_glyphs(glyphs, config))
    }

    /// Build a strip from already parsed glyphs
    ///
    /// `glyph_for` is called once per symbol.
    pub fn from_fn<F>(mut glyph_for: F, config: &DisplayConfig) -> Result<Self, DisplayError>
    where
        F: FnMut(HexSymbol) -> Result<Glyph, DisplayError>,
    {
        let glyphs = HexSymbol::ALL
            .iter()
            .map(|symbol| glyph_for(*symbol))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_glyphs(glyphs, config))
    }

    fn from_glyphs(glyphs: Vec<Glyph>, config: &DisplayConfig) -> Self {
        Self {
            glyphs,
            speed: config.speed,
            margin: config.margin,
        }
    }

    /// The glyph registered for a symbol
    pub fn glyph(&self, symbol: HexSymbol) -> &Glyph {
        &self.glyphs[symbol.index()]
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Clear the surface and draw `text` starting at `offset`
    ///
    /// Every character is checked before anything is drawn, so an invalid
    /// one leaves the surface freshly reset. Returns the x where a following
    /// glyph would start.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        text: &str,
        offset: Point,
    ) -> Result<f64, DisplayError> {
        surface.reset();
        surface.set_animation_speed(self.speed);
        surface.hide_cursor();

        let symbols = text
            .chars()
            .map(|c| HexSymbol::lookup(c).ok_or_else(|| DisplayError::invalid_digit(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut x_offset = offset.x;
        for symbol in symbols {
            debug!("drawing {} at x={}", symbol, x_offset);
            x_offset = self.glyph(symbol).draw(surface, x_offset, offset) + self.margin;
        }
        Ok(x_offset)
    }

    /// Draw the hex representation of `n`, with its `0x` prefix
    pub fn draw_number<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        n: u64,
        offset: Point,
    ) -> Result<f64, DisplayError> {
        self.draw(surface, &hex_string(n), offset)
    }

    /// Draw every symbol once, to check a font
    pub fn draw_all<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        offset: Point,
    ) -> Result<f64, DisplayError> {
        let text: String = HexSymbol::ALL.iter().map(|s| s.as_char()).collect();
        self.draw(surface, &text, offset)
    }
}

fn glyph_path(font_dir: &Path, symbol: HexSymbol, config: &DisplayConfig) -> PathBuf {
    font_dir.join(format!("{}.{}", symbol.as_char(), config.extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;
    use pretty_assertions::assert_eq;

    fn flat_strip(width: f64) -> DigitStrip {
        let data = format!("M0,0H{}", width);
        DigitStrip::from_fn(
            |_| Glyph::from_path_data([data.as_str()], 1.0),
            &DisplayConfig::default(),
        )
        .unwrap()
    }

    fn starts(canvas: &Canvas) -> Vec<f64> {
        canvas.segments().iter().map(|s| s.from.x).collect()
    }

    #[test]
    fn test_lookup_exact_and_uppercase_fallback() {
        assert_eq!(HexSymbol::lookup('7'), Some(HexSymbol::Seven));
        assert_eq!(HexSymbol::lookup('A'), Some(HexSymbol::A));
        assert_eq!(HexSymbol::lookup('f'), Some(HexSymbol::F));
        assert_eq!(HexSymbol::lookup('x'), Some(HexSymbol::X));
        assert_eq!(HexSymbol::lookup('X'), None);
        assert_eq!(HexSymbol::lookup('g'), None);
        assert_eq!(HexSymbol::lookup('-'), None);
    }

    #[test]
    fn test_all_symbols_round_trip_through_chars() {
        for symbol in HexSymbol::ALL {
            assert_eq!(HexSymbol::lookup(symbol.as_char()), Some(symbol));
        }
        let chars: String = HexSymbol::ALL.iter().map(|s| s.as_char()).collect();
        assert_eq!(chars, "0123456789ABCDEFx");
    }

    #[test]
    fn test_index_matches_position() {
        for (i, symbol) in HexSymbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
        }
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(hex_string(0), "0x0");
        assert_eq!(hex_string(31), "0x1f");
        assert_eq!(hex_string(48879), "0xbeef");
    }

    #[test]
    fn test_draw_advances_by_width_and_margin() {
        let strip = flat_strip(20.0);
        let mut canvas = Canvas::new();
        let end = strip.draw(&mut canvas, "xAB", Point::zero()).unwrap();
        assert_eq!(starts(&canvas), vec![0.0, 30.0, 60.0]);
        assert_eq!(end, 90.0);
    }

    #[test]
    fn test_draw_starts_at_offset() {
        let strip = flat_strip(20.0);
        let mut canvas = Canvas::new();
        strip.draw(&mut canvas, "12", Point::new(-100.0, 5.0)).unwrap();
        assert_eq!(starts(&canvas), vec![-100.0, -70.0]);
        assert_eq!(canvas.segments()[0].from.y, 5.0);
    }

    #[test]
    fn test_draw_prepares_surface() {
        let strip = DigitStrip::from_fn(
            |_| Ok(Glyph::default()),
            &DisplayConfig::default().with_speed(6),
        )
        .unwrap();
        let mut canvas = Canvas::new();
        strip.draw(&mut canvas, "", Point::zero()).unwrap();
        assert!(!canvas.is_cursor_visible());
        assert_eq!(canvas.speed(), 6);
    }

    #[test]
    fn test_draw_lowercase_digits() {
        let strip = flat_strip(20.0);
        let mut canvas = Canvas::new();
        strip.draw(&mut canvas, "ab", Point::zero()).unwrap();
        assert_eq!(canvas.segments().len(), 2);
    }

    #[test]
    fn test_invalid_digit_leaves_reset_surface() {
        let strip = flat_strip(20.0);
        let mut canvas = Canvas::new();
        strip.draw(&mut canvas, "12", Point::zero()).unwrap();

        let err = strip.draw(&mut canvas, "1g", Point::zero()).unwrap_err();
        assert!(matches!(err, DisplayError::InvalidDigit { digit: 'g' }));
        assert!(canvas.segments().is_empty());
        assert_eq!(canvas.position(), Point::zero());
    }

    #[test]
    fn test_draw_number() {
        let strip = flat_strip(20.0);
        let mut canvas = Canvas::new();
        strip.draw_number(&mut canvas, 255, Point::zero()).unwrap();
        // "0xff"
        assert_eq!(starts(&canvas), vec![0.0, 30.0, 60.0, 90.0]);
    }

    #[test]
    fn test_draw_all() {
        let strip = flat_strip(20.0);
        let mut canvas = Canvas::new();
        strip.draw_all(&mut canvas, Point::zero()).unwrap();
        assert_eq!(canvas.segments().len(), 17);
    }

    #[test]
    fn test_from_fn_propagates_errors() {
        let result = DigitStrip::from_fn(
            |symbol| match symbol {
                HexSymbol::E => Err(DisplayError::font_not_found("E.svg")),
                _ => Ok(Glyph::default()),
            },
            &DisplayConfig::default(),
        );
        assert!(matches!(result, Err(DisplayError::FontNotFound { .. })));
    }

    #[test]
    fn test_load_missing_directory() {
        let err = DigitStrip::load(Path::new("no/such/font"), &DisplayConfig::default())
            .unwrap_err();
        match err {
            DisplayError::FontNotFound { path } => assert_eq!(path, Path::new("no/such/font")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
