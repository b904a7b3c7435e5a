//! compiler.rs - Turns pattern rules into compiled regular expressions.
//!
//! Root patterns rely on lookahead and lookbehind, so they are compiled with
//! `fancy_regex`. Every rule is expanded with the prefix alternation according
//! to its [`PrefixMode`] and the expansions are unioned into one
//! case-insensitive alternation, in rule order.
//!
//! License: MIT OR APACHE 2.0

use fancy_regex::{Regex, RegexBuilder};
use log::debug;

use crate::charmap::class_pattern;
use crate::config::{EngineOptions, PatternRule, PrefixMode, MAX_PATTERN_LENGTH};
use crate::errors::CensorError;
use crate::prefixes::prefix_alternation;

/// Size limit handed to the delegated regex engine.
const DELEGATE_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Applies the prefix alternation to a rule's pattern.
pub fn expand_rule(rule: &PatternRule) -> String {
    match rule.prefix {
        PrefixMode::None => rule.pattern.clone(),
        PrefixMode::Optional => format!("(?:{})?{}", prefix_alternation(), rule.pattern),
        PrefixMode::Required => format!("(?:{}){}", prefix_alternation(), rule.pattern),
    }
}

/// Checks that a caller-supplied pattern is present and compiles.
pub fn validate_pattern(pattern: &str) -> Result<(), CensorError> {
    if pattern.trim().is_empty() {
        return Err(CensorError::invalid(pattern, "pattern must be provided"));
    }
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| CensorError::invalid(pattern, e.to_string()))
}

/// Checks that an authored root pattern stays within [`MAX_PATTERN_LENGTH`].
///
/// Only the root is measured; the prefix alternation is added on top.
pub fn validate_root_length(pattern: &str) -> Result<(), CensorError> {
    let length = pattern.chars().count();
    if length > MAX_PATTERN_LENGTH {
        return Err(CensorError::invalid(
            pattern,
            format!("pattern length ({}) exceeds maximum allowed ({})", length, MAX_PATTERN_LENGTH),
        ));
    }
    Ok(())
}

/// Validates a rule: its own pattern, then its prefixed expansion.
pub fn validate_rule(rule: &PatternRule) -> Result<(), CensorError> {
    validate_pattern(&rule.pattern)?;
    if rule.prefix != PrefixMode::None {
        let expanded = expand_rule(rule);
        Regex::new(&expanded).map_err(|e| CensorError::invalid(&rule.pattern, e.to_string()))?;
    }
    Ok(())
}

fn build(source: &str, options: &EngineOptions) -> Result<Regex, fancy_regex::Error> {
    RegexBuilder::new(source)
        .backtrack_limit(options.backtrack_limit)
        .delegate_size_limit(DELEGATE_SIZE_LIMIT)
        .build()
}

/// Compiles the union of all deny rules. Returns `None` for an empty rule list.
pub fn compile_alternation(
    rules: &[PatternRule],
    options: &EngineOptions,
) -> Result<Option<Regex>, CensorError> {
    if rules.is_empty() {
        debug!(target: "rucensor_core::compiler", "No deny rules to compile.");
        return Ok(None);
    }

    let body = rules
        .iter()
        .map(|rule| format!("(?:{})", expand_rule(rule)))
        .collect::<Vec<String>>()
        .join("|");
    let source = format!("(?i){}", body);

    debug!(
        target: "rucensor_core::compiler",
        "Compiling {} deny rules into an alternation of {} bytes.",
        rules.len(),
        source.len()
    );

    build(&source, options).map(Some).map_err(|e| {
        let culprit = rules.last().map(|r| r.pattern.as_str()).unwrap_or_default();
        CensorError::invalid(culprit, e.to_string())
    })
}

/// Compiles a single allow pattern, case-insensitively.
pub fn compile_allow(pattern: &str, options: &EngineOptions) -> Result<Regex, CensorError> {
    validate_pattern(pattern)?;
    build(&format!("(?i){}", pattern), options)
        .map_err(|e| CensorError::invalid(pattern, e.to_string()))
}

/// Builds a regex that finds the visible span a canonical fragment came from.
///
/// Every canonical letter becomes its look-alike class, any other character is
/// escaped, and each piece may repeat. Whitespace introduced by normalization
/// is skipped.
pub fn original_span_pattern(fragment: &str) -> Option<regex::Regex> {
    let pieces: String = fragment
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match class_pattern(c) {
            Some(class) => format!("{}+", class),
            None => format!("(?:{})+", regex::escape(&c.to_string())),
        })
        .collect();
    if pieces.is_empty() {
        return None;
    }
    regex::Regex::new(&format!("(?i){}", pieces)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, prefix: PrefixMode) -> PatternRule {
        PatternRule {
            name: pattern.to_string(),
            pattern: pattern.to_string(),
            prefix,
            ..PatternRule::default()
        }
    }

    #[test]
    fn test_expand_rule_modes() {
        let pre = prefix_alternation();
        assert_eq!(expand_rule(&rule("ab", PrefixMode::None)), "ab");
        assert_eq!(expand_rule(&rule("ab", PrefixMode::Optional)), format!("(?:{})?ab", pre));
        assert_eq!(expand_rule(&rule("ab", PrefixMode::Required)), format!("(?:{})ab", pre));
    }

    #[test]
    fn test_validate_pattern_rejects_bad_input() {
        assert!(validate_pattern("").unwrap_err().is_invalid_pattern());
        assert!(validate_pattern("   ").is_err());
        assert!(validate_pattern("invalid[").is_err());
        assert!(validate_pattern("синица").is_ok());
        assert!(validate_pattern("(?<!р)сук").is_ok());
    }

    #[test]
    fn test_long_caller_patterns_are_accepted() {
        let long = format!("(?:{})?[сc][иi][нn][иi][цc]", prefix_alternation());
        assert!(long.chars().count() > MAX_PATTERN_LENGTH);
        assert!(validate_pattern(&long).is_ok());
        assert!(validate_pattern(&"a".repeat(MAX_PATTERN_LENGTH + 1)).is_ok());
    }

    #[test]
    fn test_validate_root_length() {
        assert!(validate_root_length(&"a".repeat(MAX_PATTERN_LENGTH)).is_ok());
        let err = validate_root_length(&"a".repeat(MAX_PATTERN_LENGTH + 1)).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum allowed"));
    }

    #[test]
    fn test_compile_alternation_empty_is_none() {
        let compiled = compile_alternation(&[], &EngineOptions::default()).unwrap();
        assert!(compiled.is_none());
    }

    #[test]
    fn test_compile_alternation_with_prefixes() {
        let rules = vec![
            rule("[hхx][уyu][ийiеeёяюju]", PrefixMode::Optional),
            rule("[мm][уy][дdg][аa]", PrefixMode::None),
        ];
        let re = compile_alternation(&rules, &EngineOptions::default()).unwrap().unwrap();
        assert!(re.is_match("хуй").unwrap());
        assert!(re.is_match("нахуй").unwrap());
        assert!(re.is_match("МУДА").unwrap());
        assert!(!re.is_match("привет").unwrap());
    }

    #[test]
    fn test_compile_allow_is_case_insensitive() {
        let re = compile_allow("новоеслово", &EngineOptions::default()).unwrap();
        assert!(re.is_match("НовоеСлово").unwrap());
        assert!(compile_allow("invalid[", &EngineOptions::default()).is_err());
    }

    #[test]
    fn test_original_span_pattern_recovers_obfuscated_span() {
        let re = original_span_pattern("хуй").unwrap();
        let found = re.find("ну xyyyй же").unwrap();
        assert_eq!(found.as_str(), "xyyyй");
        assert!(original_span_pattern("  ").is_none());
    }
}
