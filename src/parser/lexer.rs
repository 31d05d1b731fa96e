//! Lexer for SVG path data using logos

use std::fmt;

use logos::Logos;

use crate::error::PathError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r,]+")]
pub enum Token {
    /// A single command letter. Unsupported letters are lexed too and
    /// rejected later, so the error can name them.
    #[regex(r"[a-zA-Z]", |lex| lex.slice().chars().next())]
    Command(char),

    // A sign starts a new number, so "10-5" lexes as two numbers
    #[regex(r"[-+]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][-+]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Command(c) => write!(f, "command '{}'", c),
            Token::Number(n) => write!(f, "number {}", n),
        }
    }
}

/// Lex path data into tokens with spans
///
/// Fails on the first character that is neither a command letter, a number,
/// nor a separator.
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, PathError> {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(tok) => Ok((tok, span)),
            Err(()) => Err(PathError::malformed(
                format!("unexpected character '{}'", &input[span.clone()]),
                span,
            )),
        })
        .collect()
}
