//! Lexical errors and their diagnostic rendering.

use std::fmt;

use thiserror::Error;

use crate::source::SourceBuffer;
use crate::token::Position;

/// Maximum byte length of an identifier.
pub const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Errors that can occur during lexing.
///
/// Every variant except [`LexError::EmptyFile`] carries the position of the
/// token that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unclosed string literal")]
    UnclosedStringLiteral { position: Position },

    #[error("unclosed character literal")]
    UnclosedCharacterLiteral { position: Position },

    #[error("multiple characters in character literal")]
    MultipleCharactersInCharacterLiteral { position: Position },

    #[error("invalid escape sequence")]
    InvalidEscapeSequence { position: Position },

    #[error("identifier is too long ({length}). maximum length is {max}.")]
    IdentifierTooLong {
        length: usize,
        max: usize,
        position: Position,
    },

    #[error("invalid syntax")]
    InvalidSyntax { position: Position },

    #[error("invalid token")]
    InvalidToken { position: Position },

    #[error("file is empty: {file}")]
    EmptyFile { file: String },
}

impl LexError {
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::UnclosedStringLiteral { position }
            | LexError::UnclosedCharacterLiteral { position }
            | LexError::MultipleCharactersInCharacterLiteral { position }
            | LexError::InvalidEscapeSequence { position }
            | LexError::IdentifierTooLong { position, .. }
            | LexError::InvalidSyntax { position }
            | LexError::InvalidToken { position } => Some(*position),
            LexError::EmptyFile { .. } => None,
        }
    }

    /// Pair this error with the source it came from for rendering.
    pub fn diagnostic<'a>(&'a self, source: &'a SourceBuffer) -> Diagnostic<'a> {
        Diagnostic {
            error: self,
            source,
        }
    }
}

/// A [`LexError`] rendered against its source:
///
/// ```text
/// main.clv:3:9: invalid escape sequence
///    3 | let s = "\q"
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    error: &'a LexError,
    source: &'a SourceBuffer,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(pos) = self.error.position() else {
            return write!(f, "{}", self.error);
        };

        writeln!(
            f,
            "{}:{}:{}: {}",
            self.source.file_name(),
            pos.line,
            pos.column,
            self.error
        )?;
        let text = String::from_utf8_lossy(self.source.line_text(pos.line_offset));
        write!(f, " {:>3} | {}", pos.line, text)
    }
}
