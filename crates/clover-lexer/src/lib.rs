//! Clover lexer - tokenization for the Clover programming language.
//!
//! This crate turns a [`SourceBuffer`] into a [`TokenStream`] of positioned
//! tokens for parsing. Tokens address their text in the buffer rather than
//! owning it.
//!
//! # Example
//!
//! ```
//! use clover_lexer::{tokenize, SourceBuffer, TokenKind};
//!
//! let source = SourceBuffer::new("main.clv", "let x = 42");
//! let tokens = tokenize(&source).into_result().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Let);
//! assert_eq!(tokens[3].text(&source), b"42");
//! ```

pub mod error;
pub mod lexer;
pub mod scanner;
pub mod source;
pub mod stream;
pub mod token;

pub use error::{Diagnostic, LexError, MAX_IDENTIFIER_LENGTH};
pub use lexer::{tokenize, Category, Lexed, Lexer, Recognizer, Scan, RECOGNIZERS};
pub use scanner::{Scanner, ScannerState};
pub use source::{SourceBuffer, SourceError};
pub use stream::{Entries, Entry, TokenStream};
pub use token::{lookup_keyword, Position, Token, TokenKind};
