//! Report types for located violations, plus log-safe rendering of matched text.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Whether matched content may appear verbatim in debug logs.
static CONTENT_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("RUCENSOR_ALLOW_DEBUG_CONTENT")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// The outcome of locating the first violation in a text.
///
/// When nothing is found, `fragment` holds the input unchanged and the
/// optional fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Violation {
    pub found: bool,
    /// The matched span of the normalized token, trimmed of separators.
    pub fragment: String,
    /// The original token the match came from.
    #[serde(default)]
    pub token: Option<String>,
    /// The visible, still-obfuscated span of `token` that folds to `fragment`.
    #[serde(default)]
    pub original: Option<String>,
}

impl Violation {
    pub fn not_found(text: &str) -> Self {
        Self {
            found: false,
            fragment: text.to_string(),
            token: None,
            original: None,
        }
    }

    pub fn located(fragment: &str, token: &str, original: Option<String>) -> Self {
        debug!(
            "Violation located in token {}: fragment {}",
            redact_for_log(token),
            redact_for_log(fragment)
        );
        Self {
            found: true,
            fragment: fragment.to_string(),
            token: Some(token.to_string()),
            original,
        }
    }
}

/// Renders matched content for logs, hiding it unless explicitly allowed.
pub fn redact_for_log(s: &str) -> String {
    if *CONTENT_DEBUG_ALLOWED {
        return s.to_string();
    }
    let chars = s.chars().count();
    if chars <= 4 {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_echoes_input() {
        let v = Violation::not_found("чистый текст");
        assert!(!v.found);
        assert_eq!(v.fragment, "чистый текст");
        assert!(v.token.is_none());
    }

    #[test]
    fn test_redact_for_log_counts_chars() {
        if *CONTENT_DEBUG_ALLOWED {
            return;
        }
        assert_eq!(redact_for_log("abc"), "[REDACTED]");
        assert_eq!(redact_for_log("хуйня"), "[REDACTED: 5 chars]");
    }
}
