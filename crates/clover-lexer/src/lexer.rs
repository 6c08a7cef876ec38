//! Lexer for the Clover language.
//!
//! At each position the driver skips whitespace, then offers the scanner to
//! each recognizer in [`RECOGNIZERS`] order. The order is the
//! disambiguation rule: comments before the `/` operator, keywords before
//! identifiers, floats before the integer forms, and the prefixed integer
//! forms before plain decimals.

use tracing::{debug, trace};

use crate::error::{LexError, MAX_IDENTIFIER_LENGTH};
use crate::scanner::Scanner;
use crate::source::SourceBuffer;
use crate::stream::TokenStream;
use crate::token::{lookup_keyword, Token, TokenKind, OPERATORS, SYMBOLS};

/// Bytes that may follow a `\` on their own.
const SIMPLE_ESCAPES: &[u8] = b"abefnrtv\"'\\";

/// Outcome of one recognizer attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    /// Exactly one token was committed.
    Found(Token),
    /// The input doesn't start with this category; nothing was consumed.
    NotFound,
    /// Malformed input. The pass can't continue.
    Error(LexError),
    /// No input is left.
    EndOfInput,
}

/// The token categories, one per recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Comment,
    String,
    Character,
    Operator,
    Symbol,
    Keyword,
    Identifier,
    Float,
    Binary,
    Hex,
    Int,
}

pub type Recognizer = fn(&mut Scanner<'_>) -> Scan;

/// Recognizers in priority order. The first result other than
/// [`Scan::NotFound`] wins.
pub const RECOGNIZERS: [(Category, Recognizer); 11] = [
    (Category::Comment, scan_comment),
    (Category::String, scan_string),
    (Category::Character, scan_character),
    (Category::Operator, scan_operator),
    (Category::Symbol, scan_symbol),
    (Category::Keyword, scan_keyword),
    (Category::Identifier, scan_identifier),
    (Category::Float, scan_float),
    (Category::Binary, scan_binary),
    (Category::Hex, scan_hex),
    (Category::Int, scan_int),
];

/// `//` through the end of the line. The terminator is left for the
/// whitespace skipper.
pub fn scan_comment(sc: &mut Scanner<'_>) -> Scan {
    if sc.at_end() {
        return Scan::EndOfInput;
    }
    if !sc.starts_with(b"//") {
        return Scan::NotFound;
    }
    let length = sc.count_while(|b| b != b'\n' && b != b'\r');
    sc.advance(length);
    Scan::Found(sc.commit(TokenKind::Comment))
}

/// A `"`-delimited string literal.
pub fn scan_string(sc: &mut Scanner<'_>) -> Scan {
    match sc.peek() {
        None => return Scan::EndOfInput,
        Some(b'"') => {}
        Some(_) => return Scan::NotFound,
    }
    sc.advance(1);

    loop {
        match sc.peek() {
            None => {
                return Scan::Error(LexError::UnclosedStringLiteral {
                    position: sc.position(),
                });
            }
            Some(b'"') => break,
            Some(b'\\') => {
                sc.advance(1);
                if let Err(e) = check_escape(sc) {
                    return Scan::Error(e);
                }
            }
            Some(_) => sc.advance(1),
        }
    }

    sc.advance(1); // closing quote
    Scan::Found(sc.commit(TokenKind::String))
}

/// A `'`-delimited character literal holding at most one character.
pub fn scan_character(sc: &mut Scanner<'_>) -> Scan {
    match sc.peek() {
        None => return Scan::EndOfInput,
        Some(b'\'') => {}
        Some(_) => return Scan::NotFound,
    }
    sc.advance(1);

    let mut chars = 0;
    loop {
        match sc.peek() {
            None => {
                return Scan::Error(LexError::UnclosedCharacterLiteral {
                    position: sc.position(),
                });
            }
            Some(b'\'') => break,
            Some(b'\\') => {
                sc.advance(1);
                if let Err(e) = check_escape(sc) {
                    return Scan::Error(e);
                }
            }
            Some(_) => sc.advance(1),
        }
        chars += 1;
    }

    sc.advance(1); // closing quote
    if chars > 1 {
        return Scan::Error(LexError::MultipleCharactersInCharacterLiteral {
            position: sc.position(),
        });
    }
    Scan::Found(sc.commit(TokenKind::Character))
}

pub fn scan_operator(sc: &mut Scanner<'_>) -> Scan {
    if sc.at_end() {
        return Scan::EndOfInput;
    }
    for &(text, kind) in OPERATORS {
        if sc.starts_with(text.as_bytes()) {
            sc.advance(text.len());
            return Scan::Found(sc.commit(kind));
        }
    }
    Scan::NotFound
}

pub fn scan_symbol(sc: &mut Scanner<'_>) -> Scan {
    let Some(first) = sc.peek() else {
        return Scan::EndOfInput;
    };
    match SYMBOLS.iter().find(|&&(sym, _)| sym == first) {
        Some(&(_, kind)) => {
            sc.advance(1);
            Scan::Found(sc.commit(kind))
        }
        None => Scan::NotFound,
    }
}

/// A keyword, only when it is the whole delimiter-bounded run.
pub fn scan_keyword(sc: &mut Scanner<'_>) -> Scan {
    if sc.at_end() {
        return Scan::EndOfInput;
    }
    let length = sc.run_len();
    match lookup_keyword(&sc.rest()[..length]) {
        Some(kind) => {
            sc.advance(length);
            Scan::Found(sc.commit(kind))
        }
        None => Scan::NotFound,
    }
}

pub fn scan_identifier(sc: &mut Scanner<'_>) -> Scan {
    match sc.peek() {
        None => return Scan::EndOfInput,
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        Some(_) => return Scan::NotFound,
    }
    sc.advance(sc.run_len());
    if let Err(e) = check_identifier(sc) {
        return Scan::Error(e);
    }
    Scan::Found(sc.commit(TokenKind::Identifier))
}

/// Digits, a `.`, then optional digits. Without the `.` the attempt is
/// rolled back so the integer recognizers can take the run.
pub fn scan_float(sc: &mut Scanner<'_>) -> Scan {
    match sc.peek() {
        None => return Scan::EndOfInput,
        Some(b) if b.is_ascii_digit() => {}
        Some(_) => return Scan::NotFound,
    }

    let saved = sc.save();
    sc.advance(sc.count_while(|b| b.is_ascii_digit()));
    if sc.peek() != Some(b'.') {
        sc.restore(saved);
        return Scan::NotFound;
    }
    sc.advance(1);
    // An empty fraction is accepted: `3.` is a float.
    sc.advance(sc.count_while(|b| b.is_ascii_digit()));
    Scan::Found(sc.commit(TokenKind::Float))
}

pub fn scan_binary(sc: &mut Scanner<'_>) -> Scan {
    scan_prefixed(sc, b"0b", TokenKind::Binary, |b| b == b'0' || b == b'1')
}

pub fn scan_hex(sc: &mut Scanner<'_>) -> Scan {
    scan_prefixed(sc, b"0x", TokenKind::Hex, |b| b.is_ascii_hexdigit())
}

pub fn scan_int(sc: &mut Scanner<'_>) -> Scan {
    match sc.peek() {
        None => return Scan::EndOfInput,
        Some(b) if b.is_ascii_digit() => {}
        Some(_) => return Scan::NotFound,
    }
    sc.advance(sc.run_len());
    if !sc.pending().iter().all(u8::is_ascii_digit) {
        return Scan::Error(LexError::InvalidSyntax {
            position: sc.position(),
        });
    }
    Scan::Found(sc.commit(TokenKind::Int))
}

/// A literal prefix followed by a run in which every byte satisfies `digit`.
fn scan_prefixed(sc: &mut Scanner<'_>, prefix: &[u8], kind: TokenKind, digit: fn(u8) -> bool) -> Scan {
    if sc.at_end() {
        return Scan::EndOfInput;
    }
    if !sc.starts_with(prefix) {
        return Scan::NotFound;
    }
    sc.advance(sc.run_len());
    if !sc.pending()[prefix.len()..].iter().all(|&b| digit(b)) {
        return Scan::Error(LexError::InvalidSyntax {
            position: sc.position(),
        });
    }
    Scan::Found(sc.commit(kind))
}

/// Validate the escape after a consumed `\`, consuming it on success.
fn check_escape(sc: &mut Scanner<'_>) -> Result<(), LexError> {
    let invalid = LexError::InvalidEscapeSequence {
        position: sc.position(),
    };
    let digits = match sc.peek() {
        Some(b) if SIMPLE_ESCAPES.contains(&b) => 0,
        Some(b'x') => 2,
        Some(b'u') => 4,
        Some(b'U') => 8,
        _ => return Err(invalid),
    };
    for i in 1..=digits {
        match sc.peek_at(i) {
            Some(b) if b.is_ascii_hexdigit() => {}
            _ => return Err(invalid),
        }
    }
    sc.advance(1 + digits);
    Ok(())
}

/// Validate the pending run as an identifier.
fn check_identifier(sc: &Scanner<'_>) -> Result<(), LexError> {
    let run = sc.pending();
    let position = sc.position();

    match run.first() {
        Some(&b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return Err(LexError::InvalidSyntax { position }),
    }
    if run.len() > MAX_IDENTIFIER_LENGTH {
        return Err(LexError::IdentifierTooLong {
            length: run.len(),
            max: MAX_IDENTIFIER_LENGTH,
            position,
        });
    }
    if !run[1..].iter().all(|&b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(LexError::InvalidSyntax { position });
    }
    Ok(())
}

/// Lexer tokenizes one Clover source buffer.
pub struct Lexer<'src> {
    scanner: Scanner<'src>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer at the start of `source`.
    pub fn new(source: &'src SourceBuffer) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    /// Returns true once a lexical error has stopped this lexer.
    pub fn has_error(&self) -> bool {
        self.scanner.has_error()
    }

    /// Get the next token, or `None` at end of input.
    ///
    /// After an error every further call returns `Ok(None)`.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.scanner.has_error() {
            return Ok(None);
        }

        self.scanner.skip_insignificant();
        if self.scanner.at_end() {
            return Ok(None);
        }

        for (category, recognize) in RECOGNIZERS {
            match recognize(&mut self.scanner) {
                Scan::Found(token) => {
                    trace!(?category, kind = %token.kind, line = token.line, column = token.column, "token");
                    return Ok(Some(token));
                }
                Scan::NotFound => continue,
                Scan::EndOfInput => return Ok(None),
                Scan::Error(e) => {
                    self.scanner.set_error();
                    return Err(e);
                }
            }
        }

        self.scanner.set_error();
        Err(LexError::InvalidToken {
            position: self.scanner.position(),
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Result of a tokenizing pass.
///
/// The tokens committed before an error are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: TokenStream,
    pub error: Option<LexError>,
}

impl Lexed {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The tokens, or the error that stopped the pass.
    pub fn into_result(self) -> Result<TokenStream, LexError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.tokens),
        }
    }
}

/// Tokenize a whole source buffer.
///
/// A buffer with nothing but whitespace fails with [`LexError::EmptyFile`].
/// Any other error stops the pass at the failing token.
pub fn tokenize(source: &SourceBuffer) -> Lexed {
    let mut lexer = Lexer::new(source);
    let mut tokens = TokenStream::new();
    let mut error = None;

    loop {
        match lexer.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break,
            Err(e) => {
                error = Some(e);
                break;
            }
        }
    }

    if error.is_none() && tokens.is_empty() {
        error = Some(LexError::EmptyFile {
            file: source.file_name().to_string(),
        });
    }

    debug!(
        file = source.file_name(),
        tokens = tokens.len(),
        failed = error.is_some(),
        "tokenized"
    );
    Lexed { tokens, error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Position;
    use pretty_assertions::assert_eq;

    fn lex(input: &str) -> Lexed {
        tokenize(&SourceBuffer::new("test.clv", input))
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        let lexed = lex(input);
        assert!(lexed.is_ok(), "unexpected error: {:?}", lexed.error);
        lexed.tokens.into_iter().map(|t| t.kind).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        let source = SourceBuffer::new("test.clv", input);
        let lexed = tokenize(&source);
        assert!(lexed.is_ok(), "unexpected error: {:?}", lexed.error);
        lexed
            .tokens
            .as_slice()
            .iter()
            .map(|t| String::from_utf8_lossy(t.text(&source)).into_owned())
            .collect()
    }

    fn error(input: &str) -> LexError {
        lex(input).error.expect("expected a lexing error")
    }

    fn scan(recognize: Recognizer, input: &str) -> (Scan, usize) {
        let source = SourceBuffer::new("test.clv", input);
        let mut sc = Scanner::new(&source);
        let result = recognize(&mut sc);
        (result, sc.offset())
    }

    #[test]
    fn test_recognizer_order() {
        let order: Vec<Category> = RECOGNIZERS.iter().map(|&(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Category::Comment,
                Category::String,
                Category::Character,
                Category::Operator,
                Category::Symbol,
                Category::Keyword,
                Category::Identifier,
                Category::Float,
                Category::Binary,
                Category::Hex,
                Category::Int,
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let lexed = lex("");
        assert!(lexed.tokens.is_empty());
        assert_eq!(
            lexed.error,
            Some(LexError::EmptyFile {
                file: "test.clv".to_string()
            })
        );
        assert!(matches!(lex(" \t\r\n\n  ").error, Some(LexError::EmptyFile { .. })));
    }

    #[test]
    fn test_identifiers() {
        let source = SourceBuffer::new("test.clv", "abc\n  def");
        let tokens = tokenize(&source).into_result().unwrap();
        let got: Vec<_> = tokens
            .as_slice()
            .iter()
            .map(|t| (t.kind, t.text(&source).to_vec(), t.line, t.column))
            .collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Identifier, b"abc".to_vec(), 1, 1),
                (TokenKind::Identifier, b"def".to_vec(), 2, 3),
            ]
        );
        assert_eq!(tokens[1].line_offset, 4);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("import fn type trait defer struct enum in as typeof if elif else"),
            vec![
                TokenKind::Import,
                TokenKind::Fn,
                TokenKind::Type,
                TokenKind::Trait,
                TokenKind::Defer,
                TokenKind::Struct,
                TokenKind::Enum,
                TokenKind::In,
                TokenKind::As,
                TokenKind::Typeof,
                TokenKind::If,
                TokenKind::Elif,
                TokenKind::Else,
            ]
        );
        assert_eq!(
            kinds("for while continue break match return let try nil true false pub static const"),
            vec![
                TokenKind::For,
                TokenKind::While,
                TokenKind::Continue,
                TokenKind::Break,
                TokenKind::Match,
                TokenKind::Return,
                TokenKind::Let,
                TokenKind::Try,
                TokenKind::Nil,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Pub,
                TokenKind::Static,
                TokenKind::Const,
            ]
        );
    }

    #[test]
    fn test_keyword_needs_whole_run() {
        assert_eq!(kinds("iffy"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("i"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("lettuce"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("if(x)"), vec![
            TokenKind::If,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::RParen,
        ]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            texts("<< >> && || == != <= >= & | ^ ! < > = + - * / % ."),
            vec![
                "<<", ">>", "&&", "||", "==", "!=", "<=", ">=", "&", "|", "^", "!", "<", ">", "=",
                "+", "-", "*", "/", "%", "."
            ]
        );
        assert_eq!(
            kinds("a<=b"),
            vec![TokenKind::Identifier, TokenKind::LtEquals, TokenKind::Identifier]
        );
        assert_eq!(kinds("&&&"), vec![TokenKind::And, TokenKind::BitAnd]);
        assert_eq!(kinds("==="), vec![TokenKind::Eq, TokenKind::Assign]);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(
            kinds(", : ; ? ( ) [ ] { }"),
            vec![
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::Question,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn test_comments() {
        let source = SourceBuffer::new("test.clv", "x // trailing\r\n// own line\ny");
        let tokens = tokenize(&source).into_result().unwrap();
        let got: Vec<_> = tokens.as_slice().iter().map(|t| (t.kind, t.line, t.column)).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Identifier, 1, 1),
                (TokenKind::Comment, 1, 3),
                (TokenKind::Comment, 2, 1),
                (TokenKind::Identifier, 3, 1),
            ]
        );
        assert_eq!(tokens[1].text(&source), b"// trailing");
        assert_eq!(kinds("//"), vec![TokenKind::Comment]);
        assert_eq!(kinds("/ /"), vec![TokenKind::Slash, TokenKind::Slash]);
    }

    #[test]
    fn test_strings() {
        assert_eq!(texts(r#""hello" "wo rld""#), vec![r#""hello""#, r#""wo rld""#]);
        assert_eq!(kinds(r#""""#), vec![TokenKind::String]);
        assert_eq!(
            texts(r#""a\"b\\" x"#),
            vec![r#""a\"b\\""#, "x"]
        );
    }

    #[test]
    fn test_escapes() {
        for input in [
            r#""\a\b\e\f\n\r\t\v\"\'\\""#,
            r#""\x41""#,
            r#""é""#,
            r#""\U0001F600""#,
            r#"'\n'"#,
            r#"'\x7f'"#,
        ] {
            assert!(lex(input).is_ok(), "rejected {input}");
        }
        for input in [r#""\q""#, r#""\x4""#, r#""\u12G4""#, r#""\U1234567""#, r#""\X41""#, "\"\\"] {
            assert!(
                matches!(error(input), LexError::InvalidEscapeSequence { .. }),
                "accepted {input}"
            );
        }
    }

    #[test]
    fn test_unclosed_string() {
        let lexed = lex("let s = \"open");
        assert_eq!(
            lexed.error,
            Some(LexError::UnclosedStringLiteral {
                position: Position::new(1, 9, 0)
            })
        );
        let kinds: Vec<_> = lexed.tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Let, TokenKind::Identifier, TokenKind::Assign]);

        let lexed = lex("\"open");
        assert!(lexed.tokens.is_empty());
        assert!(matches!(lexed.error, Some(LexError::UnclosedStringLiteral { .. })));
    }

    #[test]
    fn test_characters() {
        assert_eq!(texts("'a' '\\'' ''"), vec!["'a'", "'\\''", "''"]);
        assert_eq!(kinds("'a'"), vec![TokenKind::Character]);
        assert!(matches!(
            error("'ab'"),
            LexError::MultipleCharactersInCharacterLiteral { .. }
        ));
        assert!(matches!(
            error("'\\n\\t'"),
            LexError::MultipleCharactersInCharacterLiteral { .. }
        ));
        assert!(matches!(error("'a"), LexError::UnclosedCharacterLiteral { .. }));
    }

    #[test]
    fn test_floats() {
        assert_eq!(texts("3.14 0.5 10.0"), vec!["3.14", "0.5", "10.0"]);
        assert_eq!(kinds("3."), vec![TokenKind::Float]);
        assert_eq!(texts("3."), vec!["3."]);
        assert_eq!(
            kinds("1.2.3"),
            vec![TokenKind::Float, TokenKind::Period, TokenKind::Int]
        );
        assert_eq!(kinds("1.e5"), vec![TokenKind::Float, TokenKind::Identifier]);
    }

    #[test]
    fn test_float_backtracks_to_integer() {
        let (result, offset) = scan(scan_float, "123 ");
        assert_eq!(result, Scan::NotFound);
        assert_eq!(offset, 0);

        let (result, offset) = scan(scan_float, "12.5;");
        assert!(matches!(result, Scan::Found(Token { kind: TokenKind::Float, length: 4, .. })));
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_integers() {
        assert_eq!(texts("42 0 123456789"), vec!["42", "0", "123456789"]);
        assert_eq!(kinds("7;"), vec![TokenKind::Int, TokenKind::Semicolon]);
        assert!(matches!(error("123abc"), LexError::InvalidSyntax { .. }));
    }

    #[test]
    fn test_binary_numbers() {
        assert_eq!(texts("0b1010 0b0 0b11111111"), vec!["0b1010", "0b0", "0b11111111"]);
        assert_eq!(kinds("0b1"), vec![TokenKind::Binary]);
        assert_eq!(kinds("0b"), vec![TokenKind::Binary]);
        assert!(matches!(error("0b102"), LexError::InvalidSyntax { .. }));
    }

    #[test]
    fn test_hex_numbers() {
        assert_eq!(texts("0xFF 0x0 0xDEADbeef"), vec!["0xFF", "0x0", "0xDEADbeef"]);
        assert_eq!(kinds("0x1F)"), vec![TokenKind::Hex, TokenKind::RParen]);
        assert!(matches!(error("0xFG"), LexError::InvalidSyntax { .. }));
    }

    #[test]
    fn test_identifier_validation() {
        let max = "a".repeat(MAX_IDENTIFIER_LENGTH);
        assert_eq!(kinds(&max), vec![TokenKind::Identifier]);

        let long = "b".repeat(MAX_IDENTIFIER_LENGTH + 1);
        assert_eq!(
            error(&long),
            LexError::IdentifierTooLong {
                length: 64,
                max: 63,
                position: Position::new(1, 1, 0)
            }
        );

        assert_eq!(kinds("_private x_1"), vec![TokenKind::Identifier, TokenKind::Identifier]);
        assert!(matches!(error("ab~c"), LexError::InvalidSyntax { .. }));
        assert!(matches!(error("caf\u{e9}"), LexError::InvalidSyntax { .. }));
    }

    #[test]
    fn test_invalid_token() {
        let lexed = lex("x\n  ~");
        assert_eq!(
            lexed.error,
            Some(LexError::InvalidToken {
                position: Position::new(2, 3, 2)
            })
        );
        assert_eq!(lexed.tokens.len(), 1);
        assert!(matches!(error("@"), LexError::InvalidToken { .. }));
    }

    #[test]
    fn test_error_is_sticky() {
        let source = SourceBuffer::new("test.clv", "'ab' x y");
        let mut lexer = Lexer::new(&source);
        assert!(lexer.next_token().is_err());
        assert!(lexer.has_error());
        assert_eq!(lexer.next_token(), Ok(None));
    }

    #[test]
    fn test_lexer_iterator() {
        let source = SourceBuffer::new("test.clv", "let x = 0x10");
        let kinds: Vec<_> = Lexer::new(&source).map(|t| t.unwrap().kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Let, TokenKind::Identifier, TokenKind::Assign, TokenKind::Hex]
        );
    }

    #[test]
    fn test_positions_after_multiline_string() {
        let source = SourceBuffer::new("test.clv", "\"a\nb\" c\nd");
        let tokens = tokenize(&source).into_result().unwrap();
        let got: Vec<_> = tokens
            .as_slice()
            .iter()
            .map(|t| (t.kind, t.line, t.column, t.line_offset))
            .collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::String, 1, 1, 0),
                (TokenKind::Identifier, 2, 4, 3),
                (TokenKind::Identifier, 3, 1, 8),
            ]
        );
    }

    #[test]
    fn test_program() {
        let input = "fn main() {\n    let n = 0x1f + 0b10; // sum\n    return n >= 3.5\n}\n";
        assert_eq!(
            texts(input),
            vec![
                "fn", "main", "(", ")", "{", "let", "n", "=", "0x1f", "+", "0b10", ";", "// sum",
                "return", "n", ">=", "3.5", "}"
            ]
        );
    }
}
