//! Replay of parsed path commands onto a drawing surface

use log::trace;

use crate::parser::PathCommand;
use crate::surface::{Point, Surface};

/// Drive `surface` through `commands`, translated by `offset`
///
/// Absolute coordinates are placed relative to `offset`; relative ones are
/// added to the current pen position. A close-path returns the pen to where
/// the subpath's first pen-down command started. A close-path is itself
/// pen-down, so with no open subpath it anchors where the pen already is.
///
/// Returns the rightmost x reached. The running maximum is seeded with the
/// `y` of the last command, so a path whose last command carries a y larger
/// than any x it reaches reports that y instead.
pub fn replay<S: Surface + ?Sized>(commands: &[PathCommand], surface: &mut S, offset: Point) -> f64 {
    let mut first_point: Option<Point> = None;
    let mut max_x = commands.last().and_then(PathCommand::y);

    for cmd in commands {
        if cmd.pen_down() {
            surface.pen_down();
            if first_point.is_none() {
                first_point = Some(surface.position());
            }
        } else {
            surface.pen_up();
        }

        let current = surface.position();
        match (cmd.x(), cmd.y()) {
            (None, None) => {
                let target = first_point.take().unwrap_or_default();
                surface.move_to(target.x, target.y);
            }
            (Some(x), None) => {
                surface.move_x(resolve(cmd, x, offset.x, current.x));
            }
            (None, Some(y)) => {
                surface.move_y(resolve(cmd, y, offset.y, current.y));
            }
            (Some(x), Some(y)) => {
                surface.move_to(
                    resolve(cmd, x, offset.x, current.x),
                    resolve(cmd, y, offset.y, current.y),
                );
            }
        }

        let x = surface.position().x;
        trace!("{} -> ({}, {})", cmd, x, surface.position().y);
        if max_x.map_or(true, |max| x > max) {
            max_x = Some(x);
        }
    }

    max_x.unwrap_or(0.0)
}

fn resolve(cmd: &PathCommand, value: f64, origin: f64, current: f64) -> f64 {
    if cmd.is_absolute() {
        value + origin
    } else {
        value + current
    }
}
