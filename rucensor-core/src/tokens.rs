//! tokens.rs - Splits text into word and whitespace tokens.
//!
//! Whitespace runs are kept as their own tokens, so concatenating the tokens
//! in order reproduces the input exactly.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("built-in whitespace regex must compile"));

/// A slice of the input: either a whitespace run or a run of anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub is_whitespace: bool,
}

impl<'a> Token<'a> {
    fn word(text: &'a str) -> Self {
        Self { text, is_whitespace: false }
    }

    fn space(text: &'a str) -> Self {
        Self { text, is_whitespace: true }
    }
}

/// Splits `text` into alternating word and whitespace tokens. Empty words are never produced.
pub fn split_tokens(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for run in WHITESPACE_RUN.find_iter(text) {
        if run.start() > last {
            tokens.push(Token::word(&text[last..run.start()]));
        }
        tokens.push(Token::space(run.as_str()));
        last = run.end();
    }
    if last < text.len() {
        tokens.push(Token::word(&text[last..]));
    }
    tokens
}
