//! Command types produced by the path data parser

use std::fmt;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A command letter with the numbers that follow it, before normalization
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub letter: Spanned<char>,
    pub params: Vec<f64>,
    pub span: Span,
}

/// The family of a path command, independent of absolute/relative mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    ClosePath,
}

impl CommandKind {
    /// Classify a command letter into its family and absolute flag
    ///
    /// Returns None for letters outside `m l h v z` (either case).
    pub fn from_letter(letter: char) -> Option<(Self, bool)> {
        let kind = match letter.to_ascii_lowercase() {
            'm' => CommandKind::MoveTo,
            'l' => CommandKind::LineTo,
            'h' => CommandKind::HorizontalLineTo,
            'v' => CommandKind::VerticalLineTo,
            'z' => CommandKind::ClosePath,
            _ => return None,
        };
        Some((kind, letter.is_ascii_uppercase()))
    }

    /// Whether every parameter group must be a full `x,y` pair
    ///
    /// `h`/`v` groups may end with a lone value; `z` takes no parameters.
    pub fn requires_pairs(self) -> bool {
        matches!(self, CommandKind::MoveTo | CommandKind::LineTo)
    }

    pub fn takes_params(self) -> bool {
        self != CommandKind::ClosePath
    }

    /// Family used for coordinate groups that follow the first one
    ///
    /// Extra pairs after a moveto are linetos.
    pub fn implicit_repeat(self) -> Self {
        match self {
            CommandKind::MoveTo => CommandKind::LineTo,
            other => other,
        }
    }

    /// SVG letter for this family
    pub fn letter(self, is_absolute: bool) -> char {
        let c = match self {
            CommandKind::MoveTo => 'm',
            CommandKind::LineTo => 'l',
            CommandKind::HorizontalLineTo => 'h',
            CommandKind::VerticalLineTo => 'v',
            CommandKind::ClosePath => 'z',
        };
        if is_absolute {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// A single normalized pen movement
///
/// Coordinates are in display space: `y`, when present, has already been
/// negated from the top-left origin of SVG path data. Which of `x`/`y` are
/// present encodes the movement shape:
///
/// | x    | y    | movement                          |
/// |------|------|-----------------------------------|
/// | None | None | close the subpath                 |
/// | Some | None | horizontal only                   |
/// | None | Some | vertical only                     |
/// | Some | Some | general move                      |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCommand {
    kind: CommandKind,
    is_absolute: bool,
    x: Option<f64>,
    y: Option<f64>,
}

impl PathCommand {
    /// Create a command from display-space coordinates
    pub fn new(kind: CommandKind, is_absolute: bool, x: Option<f64>, y: Option<f64>) -> Self {
        Self {
            kind,
            is_absolute,
            x,
            y,
        }
    }

    /// Create a command from one group of path data parameters
    ///
    /// A two-value `h` group is a general move to `(x, y)`; a two-value `v`
    /// group keeps only its second value. Returns None for a group shape the
    /// family cannot take. The y value is flipped here and nowhere else.
    pub(crate) fn from_params(kind: CommandKind, is_absolute: bool, params: &[f64]) -> Option<Self> {
        let (x, y) = match (kind, params) {
            (CommandKind::ClosePath, []) => (None, None),
            (CommandKind::MoveTo | CommandKind::LineTo | CommandKind::HorizontalLineTo, [x, y]) => {
                (Some(*x), Some(flip(*y)))
            }
            (CommandKind::HorizontalLineTo, [x]) => (Some(*x), None),
            (CommandKind::VerticalLineTo, [y] | [_, y]) => (None, Some(flip(*y))),
            (CommandKind::ClosePath, [_, ..])
            | (CommandKind::MoveTo | CommandKind::LineTo, [] | [_] | [_, _, _, ..])
            | (CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo, [] | [_, _, _, ..]) => {
                return None
            }
        };
        Some(Self::new(kind, is_absolute, x, y))
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    /// Whether the pen draws while executing this command
    pub fn pen_down(&self) -> bool {
        self.kind != CommandKind::MoveTo
    }

    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }
}

/// Negate a y value without producing `-0`
fn flip(y: f64) -> f64 {
    0.0 - y
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.kind.letter(self.is_absolute);
        match (self.x, self.y) {
            (Some(x), Some(y)) => write!(f, "{} {},{}", letter, x, y),
            (Some(v), None) | (None, Some(v)) => write!(f, "{} {}", letter, v),
            (None, None) => write!(f, "{}", letter),
        }
    }
}
