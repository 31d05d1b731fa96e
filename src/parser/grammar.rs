//! Segment grammar implementation using chumsky
//!
//! Path data is a flat list of segments, each a command letter followed by
//! any number of numbers. Arity and letter validation happen afterwards in
//! [`super::normalize`], where the error can point at the whole segment.

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::PathError;
use crate::parser::ast::{Segment, Spanned};
use crate::parser::lexer::Token;

/// Split path data into command segments
pub fn segments(input: &str) -> Result<Vec<Segment>, PathError> {
    let len = input.len();

    let tokens = crate::parser::lexer::lex(input)?;
    let token_iter = tokens
        .into_iter()
        .map(|(tok, span)| (tok, SimpleSpan::from(span)));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream =
        Stream::from_iter(token_iter).map((len..len).into(), |(t, s): (_, _)| (t, s));

    segment_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| match errs.into_iter().next() {
            Some(err) => err.into(),
            None => PathError::malformed("invalid path data", 0..len),
        })
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn segment_parser<'a, I>() -> impl Parser<'a, I, Vec<Segment>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let letter = select! {
        Token::Command(c) => c,
    }
    .map_with(|c, e| Spanned::new(c, span_range(&e.span())));

    let number = select! {
        Token::Number(n) => n,
    };

    let segment = letter
        .then(number.repeated().collect::<Vec<_>>())
        .map_with(|(letter, params), e| Segment {
            letter,
            params,
            span: span_range(&e.span()),
        });

    segment
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
}

impl<'a> From<Rich<'a, Token>> for PathError {
    fn from(err: Rich<'a, Token>) -> Self {
        // Only a number can appear where a command letter is required
        let found = match err.found() {
            Some(tok) => tok.to_string(),
            None => "end of input".to_string(),
        };
        PathError::malformed(
            format!("expected a command letter, found {}", found),
            err.span().into_range(),
        )
    }
}
