//! Token types for the Clover lexer.

use std::fmt;
use std::ops::Range;

use crate::source::SourceBuffer;

/// Token kinds for the Clover language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Literals
    Comment,
    Identifier,
    String,
    Character,
    Float,
    Int,
    Binary,
    Hex,

    // Keywords
    Import,
    Fn,
    Type,
    Trait,
    Defer,
    Struct,
    Enum,
    In,
    As,
    Typeof,
    If,
    Elif,
    Else,
    For,
    While,
    Continue,
    Break,
    Match,
    Return,
    Let,
    Try,
    Nil,
    True,
    False,
    Pub,
    Static,
    Const,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,

    // Logical
    Not,
    And,
    Or,

    // Comparison
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEquals,
    GtEquals,

    // Arithmetic and assignment
    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Period,

    // Punctuation
    Comma,
    Colon,
    Semicolon,
    Question,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

impl TokenKind {
    /// Returns true for the keyword kinds (`import` through `const`).
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Returns true for the operator kinds.
    pub fn is_operator(self) -> bool {
        OPERATORS.iter().any(|&(_, kind)| kind == self)
    }

    /// Returns true for the single-character punctuation kinds.
    pub fn is_symbol(self) -> bool {
        SYMBOLS.iter().any(|&(_, kind)| kind == self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::Identifier => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::Character => "CHAR",
            TokenKind::Float => "FLOAT",
            TokenKind::Int => "INT",
            TokenKind::Binary => "BIN",
            TokenKind::Hex => "HEX",
            TokenKind::Import => "import",
            TokenKind::Fn => "fn",
            TokenKind::Type => "type",
            TokenKind::Trait => "trait",
            TokenKind::Defer => "defer",
            TokenKind::Struct => "struct",
            TokenKind::Enum => "enum",
            TokenKind::In => "in",
            TokenKind::As => "as",
            TokenKind::Typeof => "typeof",
            TokenKind::If => "if",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Continue => "continue",
            TokenKind::Break => "break",
            TokenKind::Match => "match",
            TokenKind::Return => "return",
            TokenKind::Let => "let",
            TokenKind::Try => "try",
            TokenKind::Nil => "nil",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Pub => "pub",
            TokenKind::Static => "static",
            TokenKind::Const => "const",
            TokenKind::BitAnd => "&",
            TokenKind::BitOr => "|",
            TokenKind::BitXor => "^",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Not => "!",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEquals => "<=",
            TokenKind::GtEquals => ">=",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Period => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Question => "?",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
        };
        f.pad(s)
    }
}

/// Reserved words, matched against a whole delimiter-bounded run.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("import", TokenKind::Import),
    ("fn", TokenKind::Fn),
    ("type", TokenKind::Type),
    ("trait", TokenKind::Trait),
    ("defer", TokenKind::Defer),
    ("struct", TokenKind::Struct),
    ("enum", TokenKind::Enum),
    ("in", TokenKind::In),
    ("as", TokenKind::As),
    ("typeof", TokenKind::Typeof),
    ("if", TokenKind::If),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("continue", TokenKind::Continue),
    ("break", TokenKind::Break),
    ("match", TokenKind::Match),
    ("return", TokenKind::Return),
    ("let", TokenKind::Let),
    ("try", TokenKind::Try),
    ("nil", TokenKind::Nil),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("pub", TokenKind::Pub),
    ("static", TokenKind::Static),
    ("const", TokenKind::Const),
];

/// Operators in match order. Every two-byte operator precedes the
/// one-byte operator it starts with; the first prefix match wins.
pub const OPERATORS: &[(&str, TokenKind)] = &[
    ("<<", TokenKind::Shl),
    (">>", TokenKind::Shr),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("==", TokenKind::Eq),
    ("!=", TokenKind::NotEq),
    ("<=", TokenKind::LtEquals),
    (">=", TokenKind::GtEquals),
    ("&", TokenKind::BitAnd),
    ("|", TokenKind::BitOr),
    ("^", TokenKind::BitXor),
    ("!", TokenKind::Not),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("=", TokenKind::Assign),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Asterisk),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    (".", TokenKind::Period),
];

/// Single-byte punctuation.
pub const SYMBOLS: &[(u8, TokenKind)] = &[
    (b',', TokenKind::Comma),
    (b':', TokenKind::Colon),
    (b';', TokenKind::Semicolon),
    (b'?', TokenKind::Question),
    (b'(', TokenKind::LParen),
    (b')', TokenKind::RParen),
    (b'[', TokenKind::LBracket),
    (b']', TokenKind::RBracket),
    (b'{', TokenKind::LBrace),
    (b'}', TokenKind::RBrace),
];

/// Look up a delimiter-bounded run to see if it's a keyword.
///
/// The comparison is exact: `iffy` is not `if`.
pub fn lookup_keyword(run: &[u8]) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| word.as_bytes() == run)
        .map(|&(_, kind)| kind)
}

/// Position in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-indexed line number.
    pub line: usize,
    /// 1-indexed column number.
    pub column: usize,
    /// Byte offset of the start of the line.
    pub line_offset: usize,
}

impl Position {
    /// Create a new Position.
    pub fn new(line: usize, column: usize, line_offset: usize) -> Self {
        Self {
            line,
            column,
            line_offset,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token produced by the lexer.
///
/// Tokens don't own their text; they address it in the [`SourceBuffer`]
/// they were scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Byte offset where the token's text begins.
    pub start: usize,
    /// Byte offset where the token's line begins.
    pub line_offset: usize,
    /// Byte length of the token's text. Never zero.
    pub length: usize,
    /// 1-indexed line of the first character.
    pub line: usize,
    /// 1-indexed column of the first character.
    pub column: usize,
}

impl Token {
    /// Byte offset one past the token's last byte.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.line_offset)
    }

    /// The token's bytes within `source`.
    ///
    /// Returns an empty slice if the token does not belong to `source`.
    pub fn text<'a>(&self, source: &'a SourceBuffer) -> &'a [u8] {
        source.as_bytes().get(self.span()).unwrap_or_default()
    }
}
