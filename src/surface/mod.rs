//! Drawing surface capability
//!
//! The replay engine only talks to a [`Surface`]. Coordinates are in display
//! space: origin at the bottom left, y growing upwards.

mod canvas;

pub use canvas::{Canvas, Segment};

/// A 2D point in display space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin point
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Pen-based drawing backend
///
/// Moves draw a line when the pen is down and only reposition it when the
/// pen is up.
pub trait Surface {
    /// Lift the pen
    fn pen_up(&mut self);

    /// Lower the pen
    fn pen_down(&mut self);

    /// Move to an absolute position
    fn move_to(&mut self, x: f64, y: f64);

    /// Move horizontally to an absolute x, keeping y
    fn move_x(&mut self, x: f64);

    /// Move vertically to an absolute y, keeping x
    fn move_y(&mut self, y: f64);

    /// Current pen position
    fn position(&self) -> Point;

    /// Clear the drawing and return the pen to its initial state
    fn reset(&mut self);

    /// Hide the drawing cursor
    fn hide_cursor(&mut self);

    /// Set how fast strokes are animated (0 draws instantly)
    fn set_animation_speed(&mut self, level: u8);
}
