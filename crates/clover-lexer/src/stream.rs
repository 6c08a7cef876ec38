//! Ordered container for committed tokens.

use std::ops::Index;

use crate::token::Token;

/// Tokens in the order the lexer committed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token after every token already in the stream.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over the stream, front to back or back to front, with
    /// neighbour flags for each token.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            tokens: &self.tokens,
            front: 0,
            back: self.tokens.len(),
        }
    }

    /// Release every token, handing each one to `cleanup` in order.
    pub fn release_with<F>(self, cleanup: F)
    where
        F: FnMut(Token),
    {
        self.tokens.into_iter().for_each(cleanup);
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Entries<'a> {
        self.entries()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// A token together with whether it has neighbours in its stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub token: &'a Token,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Double-ended iterator over a [`TokenStream`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    tokens: &'a [Token],
    front: usize,
    back: usize,
}

impl<'a> Entries<'a> {
    fn entry(&self, index: usize) -> Entry<'a> {
        Entry {
            token: &self.tokens[index],
            has_prev: index > 0,
            has_next: index + 1 < self.tokens.len(),
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Entry<'a>> {
        if self.front >= self.back {
            return None;
        }
        let entry = self.entry(self.front);
        self.front += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.entry(self.back))
    }
}

impl ExactSizeIterator for Entries<'_> {}
