// rucensor-core/src/engines/ru_censor.rs
//! A `ProfanityFilter` for Russian text built on obfuscation-tolerant regexes.
//!
//! Each instance owns its deny rules (compiled into one alternation, rebuilt
//! on every mutation) and its allow patterns. Tokens are checked one at a
//! time: allow-listed tokens bypass everything, other tokens are normalized
//! and tested against the alternation. When the normalized form is clean the
//! lowercased token is tested as well, since folding picks one reading for
//! characters shared by several classes (`p` reads as `р`, not `п`).
//!
//! License: MIT OR APACHE 2.0

use fancy_regex::Regex;
use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::compiler::{compile_allow, compile_alternation, original_span_pattern, validate_rule};
use crate::config::{EngineOptions, PatternLibrary, PatternRule, Variant};
use crate::engine::ProfanityFilter;
use crate::errors::CensorError;
use crate::normalizer::normalize;
use crate::tokens::split_tokens;
use crate::violation::{redact_for_log, Violation};

/// Used when `censor` is given an empty replacement.
pub const DEFAULT_REPLACEMENT: &str = "*";

static DEFAULT_LIBRARY: Lazy<PatternLibrary> = Lazy::new(|| {
    PatternLibrary::load_default().expect("embedded pattern library must be valid")
});

#[derive(Debug)]
struct AllowPattern {
    source: String,
    regex: Regex,
}

/// The Russian profanity engine. Each instance owns its own pattern lists.
#[derive(Debug)]
pub struct RuCensor {
    variant: Variant,
    options: EngineOptions,
    deny: Vec<PatternRule>,
    compiled: Option<Regex>,
    allow: Vec<AllowPattern>,
}

impl Default for RuCensor {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl RuCensor {
    /// Builds an engine from the built-in pattern library.
    ///
    /// # Panics
    ///
    /// Panics if the embedded library fails to parse or compile. That data is
    /// fixed at build time and covered by the crate's tests.
    pub fn new(variant: Variant) -> Self {
        Self::with_library(variant, (*DEFAULT_LIBRARY).clone())
            .expect("embedded pattern library must compile")
    }

    /// Builds an engine from `library` with default [`EngineOptions`].
    pub fn with_library(variant: Variant, library: PatternLibrary) -> Result<Self, CensorError> {
        Self::with_options(variant, library, EngineOptions::default())
    }

    /// Builds an engine from `library`, taking the deny rules for `variant`.
    pub fn with_options(
        variant: Variant,
        library: PatternLibrary,
        options: EngineOptions,
    ) -> Result<Self, CensorError> {
        let deny = library.deny_rules(variant);
        let compiled = compile_alternation(&deny, &options)?;
        let allow = library
            .allow
            .iter()
            .map(|source| {
                compile_allow(source, &options).map(|regex| AllowPattern {
                    source: source.clone(),
                    regex,
                })
            })
            .collect::<Result<Vec<_>, CensorError>>()?;

        debug!(
            "Constructed {} engine with {} deny rules and {} allow patterns.",
            variant,
            deny.len(),
            allow.len()
        );

        Ok(Self {
            variant,
            options,
            deny,
            compiled,
            allow,
        })
    }

    /// Appends a bare deny pattern.
    ///
    /// The pattern is validated before anything changes; a rejected pattern
    /// leaves the engine exactly as it was.
    pub fn add_deny_pattern(&mut self, pattern: &str) -> Result<(), CensorError> {
        self.add_deny_rule(PatternRule::user(pattern))
    }

    /// Appends a deny rule, honouring its prefix mode.
    pub fn add_deny_rule(&mut self, rule: PatternRule) -> Result<(), CensorError> {
        validate_rule(&rule)?;
        let mut candidate = self.deny.clone();
        candidate.push(rule);
        let compiled = compile_alternation(&candidate, &self.options)?;

        self.deny = candidate;
        self.compiled = compiled;
        debug!("Deny list now holds {} rules.", self.deny.len());
        Ok(())
    }

    /// Appends an allow pattern given as regex source. Matching is case-insensitive.
    pub fn add_allow_pattern(&mut self, pattern: &str) -> Result<(), CensorError> {
        let regex = compile_allow(pattern, &self.options)?;
        self.allow.push(AllowPattern {
            source: pattern.to_string(),
            regex,
        });
        debug!("Allow list now holds {} patterns.", self.allow.len());
        Ok(())
    }

    /// Appends an already compiled allow pattern, used as is.
    pub fn add_allow_regex(&mut self, regex: Regex) {
        self.allow.push(AllowPattern {
            source: regex.as_str().to_string(),
            regex,
        });
    }

    /// Removes every deny rule, built-ins included.
    pub fn clear_deny_patterns(&mut self) {
        debug!("Clearing {} deny rules.", self.deny.len());
        self.deny.clear();
        self.compiled = None;
    }

    /// Removes every allow pattern, built-ins included.
    pub fn clear_allow_patterns(&mut self) {
        debug!("Clearing {} allow patterns.", self.allow.len());
        self.allow.clear();
    }

    /// The current deny rules, in match order.
    pub fn deny_patterns(&self) -> &[PatternRule] {
        &self.deny
    }

    /// The sources of the current allow patterns.
    pub fn allow_patterns(&self) -> Vec<&str> {
        self.allow.iter().map(|p| p.source.as_str()).collect()
    }

    /// The options this engine was built with.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn should_pass(&self, token: &str) -> bool {
        let lowered = token.to_lowercase();
        self.allow.iter().any(|p| match p.regex.is_match(&lowered) {
            Ok(matched) => matched,
            Err(e) => {
                warn!("Allow pattern '{}' failed on a token: {}", p.source, e);
                false
            }
        })
    }

    /// The matched span of the token, or `None` when the token is clean.
    fn find_fragment(&self, token: &str) -> Option<String> {
        if self.should_pass(token) {
            return None;
        }
        let compiled = self.compiled.as_ref()?;
        for form in match_forms(token) {
            match compiled.find(&form) {
                Ok(Some(m)) => return Some(m.as_str().trim().to_string()),
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        "Deny alternation failed on token {}: {}; treating it as a violation.",
                        redact_for_log(token),
                        e
                    );
                    return Some(form.trim().to_string());
                }
            }
        }
        None
    }

    fn is_violation(&self, token: &str) -> bool {
        if self.should_pass(token) {
            return false;
        }
        let Some(compiled) = self.compiled.as_ref() else {
            return false;
        };
        match_forms(token).iter().any(|form| {
            compiled.is_match(form).unwrap_or_else(|e| {
                warn!(
                    "Deny alternation failed on token {}: {}; treating it as a violation.",
                    redact_for_log(token),
                    e
                );
                true
            })
        })
    }
}

/// The forms of a token tested against the deny alternation: the normalized
/// form first, then the lowercased token when it differs.
fn match_forms(token: &str) -> Vec<String> {
    let normalized = normalize(token);
    let lowered = token.to_lowercase();
    if lowered == normalized {
        vec![normalized]
    } else {
        vec![normalized, lowered]
    }
}

fn mask(token: &str, replacement: &str) -> String {
    let replacement = if replacement.is_empty() {
        DEFAULT_REPLACEMENT
    } else {
        replacement
    };
    replacement.chars().cycle().take(token.chars().count()).collect()
}

impl ProfanityFilter for RuCensor {
    fn contains_violation(&self, text: &str) -> bool {
        split_tokens(text)
            .iter()
            .filter(|t| !t.is_whitespace)
            .any(|t| self.is_violation(t.text))
    }

    fn censor(&self, text: &str, replacement: &str) -> String {
        let mut masked = 0usize;
        let out: String = split_tokens(text)
            .iter()
            .map(|t| {
                if !t.is_whitespace && self.is_violation(t.text) {
                    masked += 1;
                    mask(t.text, replacement)
                } else {
                    t.text.to_string()
                }
            })
            .collect();
        debug!("Censored {} token(s).", masked);
        out
    }

    fn locate_violation(&self, text: &str) -> Violation {
        for token in split_tokens(text).iter().filter(|t| !t.is_whitespace) {
            if let Some(fragment) = self.find_fragment(token.text) {
                let original = original_span_pattern(&fragment)
                    .and_then(|re| re.find(token.text).map(|m| m.as_str().to_string()));
                return Violation::located(&fragment, token.text, original);
            }
        }
        Violation::not_found(text)
    }

    fn variant(&self) -> Variant {
        self.variant
    }
}
