//! normalizer.rs - Folds a token into its canonical form.
//!
//! The canonical form is what the deny patterns are matched against:
//!
//! 1. lowercase (Unicode-aware, covers `Ё`),
//! 2. fold every look-alike to its canonical letter (see `charmap`),
//! 3. collapse runs of identical letters (`[а-яa-z]`) to a single letter,
//! 4. pad ASCII word runs that sit between two other non-space characters
//!    with single spaces, so boundary-sensitive patterns see a separator.
//!
//! Normalization is pure and total. Applying it twice yields the same string.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::charmap::fold_char;

/// An ASCII word run. Cyrillic letters count as non-word characters here.
static ASCII_WORD_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9A-Za-z_]+").expect("built-in ASCII word regex must compile")
});

/// Produces the canonical form of `token`.
pub fn normalize(token: &str) -> String {
    let folded: String = token.to_lowercase().chars().map(fold_char).collect();
    let collapsed = collapse_repeats(&folded);
    pad_ascii_runs(&collapsed)
}

fn is_collapsible(c: char) -> bool {
    matches!(c, 'а'..='я' | 'a'..='z')
}

/// Collapses runs of two or more identical letters to one. Other runs are kept.
pub fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous: Option<char> = None;
    for c in text.chars() {
        if previous == Some(c) && is_collapsible(c) {
            continue;
        }
        out.push(c);
        previous = Some(c);
    }
    out
}

fn is_boundary(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace())
}

/// Surrounds every ASCII word run bordered on both sides by a non-word,
/// non-space character with single spaces.
pub fn pad_ascii_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for run in ASCII_WORD_RUN.find_iter(text) {
        let before = text[..run.start()].chars().next_back();
        let after = text[run.end()..].chars().next();
        let padded = matches!((before, after), (Some(b), Some(a)) if is_boundary(b) && is_boundary(a));
        out.push_str(&text[last..run.start()]);
        if padded {
            out.push(' ');
            out.push_str(run.as_str());
            out.push(' ');
        } else {
            out.push_str(run.as_str());
        }
        last = run.end();
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_lookalikes() {
        assert_eq!(normalize("xyйня"), "хуйня");
        assert_eq!(normalize("XYЙНЯ"), "хуйня");
        assert_eq!(normalize("6ля"), "бля");
        assert_eq!(normalize("пи3да"), "пизда");
        assert_eq!(normalize("mинeт"), "минет");
    }

    #[test]
    fn test_normalize_lowercases_yo() {
        assert_eq!(normalize("ЁЖ"), "еж");
    }

    #[test]
    fn test_collapse_repeats() {
        assert_eq!(collapse_repeats("сууукааа"), "сука");
        assert_eq!(collapse_repeats("zzzz"), "z");
        assert_eq!(collapse_repeats("!!!"), "!!!");
        assert_eq!(collapse_repeats("ёё"), "ёё");
        assert_eq!(normalize("сууукааа"), "сука");
    }

    #[test]
    fn test_pad_ascii_runs() {
        assert_eq!(pad_ascii_runs("а1б"), "а 1 б");
        // Every bordered run is padded, including one that shares its left
        // neighbour with the previous run. A single non-overlapping
        // `(\W)(\w+)(\W)` pass would stop at "а 1 б2в" and pad again on the
        // next call; padding all of them keeps `normalize` idempotent.
        assert_eq!(pad_ascii_runs("а1б2в"), "а 1 б 2 в");
        assert_eq!(pad_ascii_runs("1б"), "1б");
        assert_eq!(pad_ascii_runs("а 1 б"), "а 1 б");
        assert_eq!(pad_ascii_runs("хер"), "хер");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for token in ["xyйня", "сууукааа", "а1б2в", "Привет!", "r0ck", "", "   ", "ё-моё"] {
            let once = normalize(token);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", token);
        }
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }
}
