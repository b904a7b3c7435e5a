//! Configuration management for `rucensor-core`.
//!
//! This module defines the pattern library (the hand-authored obscene roots
//! and default allow-list) and the engine variant that selects which of its
//! root lists an engine starts from. Libraries are YAML documents; the
//! built-in one is embedded at compile time, user libraries are loaded from
//! disk and merged over it.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::compiler::{expand_rule, validate_pattern, validate_root_length, validate_rule};

/// Maximum allowed length for a single pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Default limit on backtracking steps per match attempt.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Which built-in root lists an engine is constructed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// The `base` roots plus the full hand-tuned `strict` library.
    Strict,
    /// The `base` roots only.
    #[default]
    Normal,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Variant::Strict => write!(f, "strict"),
            Variant::Normal => write!(f, "normal"),
        }
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Variant::Strict),
            "normal" => Ok(Variant::Normal),
            other => Err(anyhow!("Unknown variant '{}': expected 'strict' or 'normal'", other)),
        }
    }
}

/// How the prefix alternation is attached to a root pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMode {
    /// The pattern is used as written.
    #[default]
    None,
    /// The pattern is preceded by `(?:prefixes)?`.
    Optional,
    /// The pattern is preceded by `(?:prefixes)`.
    Required,
}

/// A single obscene root pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternRule {
    /// Unique identifier for the rule (e.g., "root_hui").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex source, written in terms of look-alike classes.
    pub pattern: String,
    pub prefix: PrefixMode,
}

impl Default for PatternRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            prefix: PrefixMode::None,
        }
    }
}

impl PatternRule {
    /// A bare rule built from a caller-supplied pattern.
    pub fn user(pattern: &str) -> Self {
        Self {
            name: format!("user:{}", pattern),
            pattern: pattern.to_string(),
            ..Self::default()
        }
    }

    /// The rule's pattern with the prefix alternation applied.
    pub fn expanded(&self) -> String {
        expand_rule(self)
    }
}

/// The authored pattern data an engine is built from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternLibrary {
    /// Roots active in every variant.
    pub base: Vec<PatternRule>,
    /// Roots added by [`Variant::Strict`].
    pub strict: Vec<PatternRule>,
    /// Default allow-patterns.
    pub allow: Vec<String>,
}

impl PatternLibrary {
    /// Parses and validates a library from a YAML string.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let library: PatternLibrary =
            serde_yml::from_str(text).context("Failed to parse pattern library")?;
        library.validate()?;
        Ok(library)
    }

    /// Loads a pattern library from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading pattern library from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pattern library {}", path.display()))?;
        let library = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load pattern library {}", path.display()))?;
        info!(
            "Loaded {} base, {} strict and {} allow patterns from {}.",
            library.base.len(),
            library.strict.len(),
            library.allow.len(),
            path.display()
        );
        Ok(library)
    }

    /// Loads the built-in pattern library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default pattern library from embedded string...");
        let default_yaml = include_str!("../config/default_library.yaml");
        let library =
            Self::from_yaml_str(default_yaml).context("Failed to parse default pattern library")?;
        debug!(
            "Loaded default library: {} base, {} strict, {} allow.",
            library.base.len(),
            library.strict.len(),
            library.allow.len()
        );
        Ok(library)
    }

    /// The deny rules an engine of the given variant starts with.
    pub fn deny_rules(&self, variant: Variant) -> Vec<PatternRule> {
        match variant {
            Variant::Normal => self.base.clone(),
            Variant::Strict => self.base.iter().chain(self.strict.iter()).cloned().collect(),
        }
    }

    /// Merges a user library over `default_library`.
    ///
    /// User rules replace default rules of the same name in place; new names
    /// are appended. Allow patterns are concatenated without duplicates.
    pub fn merge(default_library: PatternLibrary, user_library: Option<PatternLibrary>) -> Self {
        let Some(user) = user_library else {
            return default_library;
        };
        debug!(
            "Merging user library ({} base, {} strict, {} allow) over defaults.",
            user.base.len(),
            user.strict.len(),
            user.allow.len()
        );

        let mut allow = default_library.allow;
        for pattern in user.allow {
            if !allow.contains(&pattern) {
                allow.push(pattern);
            }
        }

        PatternLibrary {
            base: merge_rule_lists(default_library.base, user.base),
            strict: merge_rule_lists(default_library.strict, user.strict),
            allow,
        }
    }

    /// Validates rule integrity: names, emptiness, length and regex syntax.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        let mut rule_names = HashSet::new();

        for rule in self.base.iter().chain(self.strict.iter()) {
            if rule.name.is_empty() {
                errors.push("A rule has an empty `name` field.".to_string());
            } else if !rule_names.insert(rule.name.as_str()) {
                errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
            }

            if let Err(e) = validate_root_length(&rule.pattern).and_then(|_| validate_rule(rule)) {
                errors.push(format!("Rule '{}': {}", rule.name, e));
            }
        }

        for pattern in &self.allow {
            if let Err(e) = validate_pattern(pattern) {
                errors.push(format!("Allow pattern: {}", e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Pattern library validation failed:\n{}", errors.join("\n")))
        }
    }
}

fn merge_rule_lists(defaults: Vec<PatternRule>, overrides: Vec<PatternRule>) -> Vec<PatternRule> {
    let mut merged = defaults;
    let positions: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, rule)| (rule.name.clone(), i))
        .collect();

    for rule in overrides {
        match positions.get(&rule.name) {
            Some(&i) => {
                debug!("Overriding rule '{}' with user definition.", rule.name);
                merged[i] = rule;
            }
            None => merged.push(rule),
        }
    }
    merged
}

/// Tuning knobs for an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Upper bound on backtracking steps for a single match attempt.
    pub backtrack_limit: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}
