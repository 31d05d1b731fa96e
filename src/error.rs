//! Error types for path parsing and glyph display

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while parsing path data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A command letter outside the supported `m l h v z` set
    #[error("unsupported path command '{letter}' at {span:?}")]
    UnsupportedCommand { letter: char, span: Span },

    /// Parameters that do not fit the command, or stray characters
    #[error("malformed path data at {span:?}: {message}")]
    MalformedPath { message: String, span: Span },
}

impl PathError {
    /// Create an unsupported command error
    pub fn unsupported(letter: char, span: Span) -> Self {
        Self::UnsupportedCommand { letter, span }
    }

    /// Create a malformed path error
    pub fn malformed(message: impl Into<String>, span: Span) -> Self {
        Self::MalformedPath {
            message: message.into(),
            span,
        }
    }

    /// Location of the error in the path data
    pub fn span(&self) -> &Span {
        match self {
            Self::UnsupportedCommand { span, .. } | Self::MalformedPath { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let message = match self {
            PathError::UnsupportedCommand { letter, .. } => {
                format!("unsupported path command '{}'", letter)
            }
            PathError::MalformedPath { message, .. } => message.clone(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .with_note("supported commands: m M l L h H v V z Z")
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Errors raised while loading a font or drawing digits
#[derive(Error, Debug)]
pub enum DisplayError {
    /// Font directory or glyph file does not exist
    #[error("font not found: {}", path.display())]
    FontNotFound { path: PathBuf },

    /// Glyph file exists but could not be read
    #[error("error reading glyph file {}: {message}", path.display())]
    FontRead { path: PathBuf, message: String },

    /// Glyph file is not well-formed XML
    #[error("invalid SVG in {}: {message}", path.display())]
    InvalidSvg { path: PathBuf, message: String },

    /// A `d` attribute in a glyph file failed to parse
    #[error("bad path data in {}: {source}", path.display())]
    Glyph {
        path: PathBuf,
        data: String,
        #[source]
        source: PathError,
    },

    /// Character with no glyph in the strip
    #[error("{digit} is an invalid hex digit")]
    InvalidDigit { digit: char },
}

impl DisplayError {
    /// Create a font not found error
    pub fn font_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FontNotFound { path: path.into() }
    }

    /// Create an invalid digit error
    pub fn invalid_digit(digit: char) -> Self {
        Self::InvalidDigit { digit }
    }

    /// Render the error for a terminal, with source context for path errors
    pub fn report(&self) -> String {
        match self {
            DisplayError::Glyph { path, data, source } => {
                source.format(data, &path.display().to_string())
            }
            other => other.to_string(),
        }
    }
}
