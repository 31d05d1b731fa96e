//! Expansion of raw segments into normalized path commands

use crate::error::PathError;
use crate::parser::ast::{CommandKind, PathCommand, Segment};

/// Expand segments into commands, applying scale and normalization
///
/// - Parameters are scaled, then split into pairs. Only `h`/`v` may leave a
///   lone trailing value; `z` takes none.
/// - The very first command of the path is forced to absolute.
/// - Groups after the first repeat the command (moveto repeats as lineto)
///   with the letter's original absolute/relative mode.
pub fn expand(segments: &[Segment], scale: f64) -> Result<Vec<PathCommand>, PathError> {
    let mut commands = Vec::new();

    for segment in segments {
        let letter = segment.letter.node;
        let (kind, is_absolute) = CommandKind::from_letter(letter)
            .ok_or_else(|| PathError::unsupported(letter, segment.letter.span.clone()))?;

        let params: Vec<f64> = segment.params.iter().map(|p| p * scale).collect();
        let groups = group_params(kind, letter, &params, segment)?;

        for (i, group) in groups.iter().enumerate() {
            let kind = if i == 0 { kind } else { kind.implicit_repeat() };
            let is_absolute = is_absolute || commands.is_empty();
            let command = PathCommand::from_params(kind, is_absolute, group).ok_or_else(|| {
                PathError::malformed(
                    format!("'{}' cannot take a group of {} value(s)", letter, group.len()),
                    segment.span.clone(),
                )
            })?;
            commands.push(command);
        }
    }

    Ok(commands)
}

/// Split a segment's parameters into per-command groups
fn group_params<'p>(
    kind: CommandKind,
    letter: char,
    params: &'p [f64],
    segment: &Segment,
) -> Result<Vec<&'p [f64]>, PathError> {
    if !kind.takes_params() {
        if !params.is_empty() {
            return Err(PathError::malformed(
                format!("'{}' takes no parameters, found {}", letter, params.len()),
                segment.span.clone(),
            ));
        }
        return Ok(vec![params]);
    }

    if params.is_empty() {
        return Err(PathError::malformed(
            format!("'{}' requires at least one parameter", letter),
            segment.span.clone(),
        ));
    }

    if kind.requires_pairs() && params.len() % 2 != 0 {
        return Err(PathError::malformed(
            format!(
                "'{}' takes parameters in groups of 2, found {}",
                letter,
                params.len()
            ),
            segment.span.clone(),
        ));
    }

    Ok(params.chunks(2).collect())
}
