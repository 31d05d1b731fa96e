//! In-memory surface that records every stroke

use super::{Point, Surface};

/// A straight line drawn while the pen was down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Recording surface
///
/// Behaves like a turtle: it starts at the origin with the pen down and the
/// cursor visible. Every move made with the pen down is kept as a
/// [`Segment`], in drawing order.
#[derive(Debug, Clone)]
pub struct Canvas {
    position: Point,
    pen_down: bool,
    cursor_visible: bool,
    speed: u8,
    segments: Vec<Segment>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            position: Point::zero(),
            pen_down: true,
            cursor_visible: true,
            speed: 0,
            segments: vec![],
        }
    }
}

impl Canvas {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments drawn since the last reset
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    fn go(&mut self, to: Point) {
        // Zero-length moves with the pen down leave no visible mark
        if self.pen_down && to != self.position {
            self.segments.push(Segment {
                from: self.position,
                to,
            });
        }
        self.position = to;
    }
}

impl Surface for Canvas {
    fn pen_up(&mut self) {
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.go(Point::new(x, y));
    }

    fn move_x(&mut self, x: f64) {
        self.go(Point::new(x, self.position.y));
    }

    fn move_y(&mut self, y: f64) {
        self.go(Point::new(self.position.x, y));
    }

    fn position(&self) -> Point {
        self.position
    }

    fn reset(&mut self) {
        let speed = self.speed;
        *self = Self::default();
        self.speed = speed;
    }

    fn hide_cursor(&mut self) {
        self.cursor_visible = false;
    }

    fn set_animation_speed(&mut self, level: u8) {
        self.speed = level;
    }
}
