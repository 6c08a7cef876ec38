//! Property tests for the tokenizer.

use clover_lexer::{tokenize, LexError, SourceBuffer, TokenKind};
use proptest::prelude::*;

fn source(text: &str) -> SourceBuffer {
    SourceBuffer::new("prop.clv", text)
}

/// A piece of valid source text that lexes as exactly one token.
fn piece() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,20}",
        "[0-9]{1,12}",
        "[0-9]{1,6}\\.[0-9]{0,6}",
        "0b[01]{1,16}",
        "0x[0-9a-fA-F]{1,8}",
        "\"[a-z ]{0,10}\"",
        "'[a-z]'",
        "// [a-z ]{0,10}",
        prop::sample::select(vec![
            "<<", ">>", "&&", "||", "==", "!=", "<=", ">=", "&", "|", "^", "!", "<", ">", "=", "+",
            "-", "*", "/", "%", ".", ",", ":", ";", "?", "(", ")", "[", "]", "{", "}",
        ])
        .prop_map(str::to_string),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "  ", "\t", "\n", "\r\n", " \n\t"])
}

/// Join pieces with whitespace; a comment is always followed by a newline.
fn program() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec((piece(), separator()), 1..24).prop_map(|parts| {
        let count = parts.len();
        let mut text = String::new();
        for (piece, sep) in parts {
            let sep = if piece.starts_with("//") { "\n" } else { sep };
            text.push_str(&piece);
            text.push_str(sep);
        }
        (text, count)
    })
}

/// 1-based line and column of `offset`, counting `\r\n` as one break.
fn expected_position(bytes: &[u8], offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut line_start = 0;
    let mut i = 0;
    while i < offset {
        match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                line += 1;
                i += 2;
                line_start = i;
                continue;
            }
            b'\r' | b'\n' => {
                line += 1;
                line_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    (line, offset - line_start + 1)
}

proptest! {
    #[test]
    fn decimal_runs_are_one_int(digits in "[0-9]{1,40}") {
        let lexed = tokenize(&source(&digits));
        prop_assert!(lexed.is_ok());
        prop_assert_eq!(lexed.tokens.len(), 1);
        prop_assert_eq!(lexed.tokens[0].kind, TokenKind::Int);
        prop_assert_eq!(lexed.tokens[0].length, digits.len());
    }

    #[test]
    fn digits_dot_digits_are_one_float(whole in "[0-9]{1,20}", frac in "[0-9]{0,20}") {
        let text = format!("{whole}.{frac}");
        let lexed = tokenize(&source(&text));
        prop_assert!(lexed.is_ok());
        prop_assert_eq!(lexed.tokens.len(), 1);
        prop_assert_eq!(lexed.tokens[0].kind, TokenKind::Float);
        prop_assert_eq!(lexed.tokens[0].length, text.len());
    }

    #[test]
    fn binary_runs_are_one_binary(bits in "[01]{1,64}", end in prop::sample::select(vec!["", " ", ")", ";"])) {
        let text = format!("0b{bits}{end}");
        let lexed = tokenize(&source(&text));
        prop_assert!(lexed.is_ok());
        prop_assert_eq!(lexed.tokens[0].kind, TokenKind::Binary);
        prop_assert_eq!(lexed.tokens[0].length, bits.len() + 2);
    }

    #[test]
    fn binary_runs_reject_other_digits(head in "[01]{0,8}", bad in "[2-9a-z]", tail in "[01]{0,8}") {
        let text = format!("0b{head}{bad}{tail}");
        let lexed = tokenize(&source(&text));
        let is_invalid_syntax = matches!(lexed.error, Some(LexError::InvalidSyntax { .. }));
        prop_assert!(is_invalid_syntax);
        prop_assert!(lexed.tokens.is_empty());
    }

    #[test]
    fn tokens_and_gaps_reconstruct_the_source((text, count) in program()) {
        let src = source(&text);
        let lexed = tokenize(&src);
        prop_assert!(lexed.is_ok(), "{:?} for {:?}", lexed.error, text);
        prop_assert_eq!(lexed.tokens.len(), count);

        let bytes = src.as_bytes();
        let mut rebuilt = Vec::new();
        let mut cursor = 0;
        for token in lexed.tokens.as_slice() {
            prop_assert!(token.start >= cursor);
            let gap = &bytes[cursor..token.start];
            prop_assert!(gap.iter().all(|b| b" \t\r\n".contains(b)), "gap {:?}", gap);
            rebuilt.extend_from_slice(gap);
            rebuilt.extend_from_slice(token.text(&src));
            cursor = token.end();

            prop_assert_eq!((token.line, token.column), expected_position(bytes, token.start));
        }
        rebuilt.extend_from_slice(&bytes[cursor..]);
        prop_assert_eq!(rebuilt, bytes.to_vec());
    }

    #[test]
    fn tokenizing_is_idempotent(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let src = SourceBuffer::new("prop.clv", bytes);
        prop_assert_eq!(tokenize(&src), tokenize(&src));
    }

    #[test]
    fn tokens_stay_in_bounds(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let src = SourceBuffer::new("prop.clv", bytes);
        let lexed = tokenize(&src);
        let mut last_end = 0;
        for token in lexed.tokens.as_slice() {
            prop_assert!(token.length > 0);
            prop_assert!(token.start >= last_end);
            prop_assert!(token.end() <= src.len());
            last_end = token.end();
        }
    }
}
