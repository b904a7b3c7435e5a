//! charmap.rs - The character-equivalence table.
//!
//! Every canonical Cyrillic letter owns a class of look-alike characters:
//! Latin homoglyphs, transliterations and digits. Normalization folds each
//! member of a class back to its canonical letter.
//!
//! Some look-alikes belong to more than one class (`y` reads as `у`, `й`,
//! `ы`, `ю` and `я`). Such characters fold to the earliest class in table
//! order, so the table order is part of the data. The cost is that folding
//! loses the other readings: `p` always becomes `р` (never `п`), `c` becomes
//! `с` (never `ц` or `ч`) and `s` becomes `ш` (never `щ`). The engine makes
//! up for this by also testing the lowercased token.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical letter followed by every character folded into it, itself included.
pub const CHARACTER_CLASSES: &[(char, &[char])] = &[
    ('з', &['3', 'з', 'z']),
    ('б', &['6', 'б', 'b']),
    ('а', &['а', 'a', '@']),
    ('л', &['л', 'l', '/', '\\']),
    ('о', &['о', 'o']),
    ('е', &['е', 'e', 'ё']),
    ('р', &['р', 'p']),
    ('с', &['с', 'c']),
    ('у', &['у', 'y']),
    ('х', &['х', 'x', 'h']),
    ('к', &['к', 'k']),
    ('и', &['и', 'i']),
    ('т', &['т', 't']),
    ('н', &['н', 'n']),
    ('в', &['в', 'v']),
    ('г', &['г', 'g']),
    ('д', &['д', 'd']),
    ('ж', &['ж', 'j']),
    ('ё', &['ё', 'e']),
    ('й', &['й', 'y']),
    ('м', &['м', 'm']),
    ('п', &['п', 'p']),
    ('ф', &['ф', 'f']),
    ('ц', &['ц', 'c']),
    ('ч', &['ч', 'c']),
    ('ш', &['ш', 's']),
    ('щ', &['щ', 's']),
    ('ъ', &['ъ']),
    ('ы', &['ы', 'y']),
    ('ь', &['ь']),
    ('э', &['э', 'e']),
    ('ю', &['ю', 'y']),
    ('я', &['я', 'y']),
];

static FOLD_MAP: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (canonical, members) in CHARACTER_CLASSES {
        for member in members.iter() {
            map.entry(*member).or_insert(*canonical);
        }
    }
    map
});

static CLASS_PATTERNS: Lazy<HashMap<char, String>> = Lazy::new(|| {
    CHARACTER_CLASSES
        .iter()
        .map(|(canonical, members)| {
            let body: String = members
                .iter()
                .map(|c| regex::escape(&c.to_string()))
                .collect();
            (*canonical, format!("[{}]", body))
        })
        .collect()
});

/// Folds a single lowercase character to its canonical letter.
///
/// Characters outside every class are returned unchanged.
pub fn fold_char(c: char) -> char {
    FOLD_MAP.get(&c).copied().unwrap_or(c)
}

/// Returns the regex character class matching `canonical` and all of its look-alikes.
pub fn class_pattern(canonical: char) -> Option<&'static str> {
    CLASS_PATTERNS.get(&canonical).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_contains_its_canonical_letter() {
        for (canonical, members) in CHARACTER_CLASSES {
            assert!(!members.is_empty());
            assert!(members.contains(canonical), "class of '{}' misses itself", canonical);
        }
    }

    #[test]
    fn test_fold_homoglyphs_and_digits() {
        assert_eq!(fold_char('3'), 'з');
        assert_eq!(fold_char('6'), 'б');
        assert_eq!(fold_char('@'), 'а');
        assert_eq!(fold_char('x'), 'х');
        assert_eq!(fold_char('h'), 'х');
        assert_eq!(fold_char('/'), 'л');
        assert_eq!(fold_char('\\'), 'л');
        assert_eq!(fold_char('q'), 'q');
        assert_eq!(fold_char('ж'), 'ж');
    }

    #[test]
    fn test_shared_lookalikes_fold_to_earliest_class() {
        assert_eq!(fold_char('y'), 'у');
        assert_eq!(fold_char('p'), 'р');
        assert_eq!(fold_char('c'), 'с');
        assert_eq!(fold_char('e'), 'е');
        assert_eq!(fold_char('ё'), 'е');
        assert_eq!(fold_char('s'), 'ш');
    }

    #[test]
    fn test_folding_output_is_a_fixed_point() {
        for (_, members) in CHARACTER_CLASSES {
            for member in members.iter() {
                let folded = fold_char(*member);
                assert_eq!(fold_char(folded), folded);
            }
        }
    }

    #[test]
    fn test_class_pattern_escapes_members() {
        assert_eq!(class_pattern('з'), Some("[3зz]"));
        assert_eq!(class_pattern('л'), Some("[лl/\\\\]"));
        assert_eq!(class_pattern('q'), None);
        let re = regex::Regex::new(class_pattern('л').unwrap()).unwrap();
        assert!(re.is_match("\\"));
        assert!(re.is_match("/"));
    }
}
