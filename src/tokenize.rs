//! Splits text into maximal word runs and the gaps between them.
//!
//! Concatenating every token's text reproduces the input exactly.

use crate::unicode::is_word_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters, combining marks, apostrophes and hyphens.
    Word,
    /// Everything else: whitespace, punctuation, digits, symbols.
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset in the source text.
    pub start: usize,
}

impl Token<'_> {
    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;
        let word = is_word_char(first);
        let len = rest
            .char_indices()
            .find(|&(_, c)| is_word_char(c) != word)
            .map_or(rest.len(), |(i, _)| i);

        let start = self.pos;
        self.pos += len;
        Some(Token {
            kind: if word { TokenKind::Word } else { TokenKind::Gap },
            text: &rest[..len],
            start,
        })
    }
}

/// Lazily tokenize `text`.
#[inline]
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

/// Only the word tokens of `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    tokens(text).filter(Token::is_word).map(|t| t.text)
}
