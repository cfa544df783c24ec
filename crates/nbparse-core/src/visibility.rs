//! Visibility inference — decides whether a bookmark is public or private.
//!
//! Exports disagree on how to say this: some write `PUBLIC="1"`, others
//! `PRIVATE="0"` or `SHARED="no"`. Explicit public markers win over private
//! ones; without either, the configured default applies.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::types::Visibility;

static PUBLIC_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(public|published|pub)="(.*?)""#).expect("PUBLIC_ATTR: hardcoded regex is valid")
});

static PRIVATE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(private|shared)="(.*?)""#).expect("PRIVATE_ATTR: hardcoded regex is valid")
});

/// Token sets used to read boolean-ish attribute values.
///
/// Matching is case-insensitive and ignores surrounding whitespace. A token in
/// neither set yields the caller's default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BooleanTokens {
    #[serde(default = "default_truthy")]
    pub truthy: Vec<String>,
    #[serde(default = "default_falsy")]
    pub falsy: Vec<String>,
}

fn default_truthy() -> Vec<String> {
    ["1", "true", "yes", "on"].map(String::from).to_vec()
}

fn default_falsy() -> Vec<String> {
    ["0", "false", "no", "off"].map(String::from).to_vec()
}

impl Default for BooleanTokens {
    fn default() -> Self {
        Self {
            truthy: default_truthy(),
            falsy: default_falsy(),
        }
    }
}

impl BooleanTokens {
    /// Interpret `token`, returning `default` when it is not recognised.
    /// Truthy tokens are checked first.
    pub fn interpret(&self, token: &str, default: bool) -> bool {
        let token = token.trim();
        if self.truthy.iter().any(|t| t.eq_ignore_ascii_case(token)) {
            true
        } else if self.falsy.iter().any(|t| t.eq_ignore_ascii_case(token)) {
            false
        } else {
            default
        }
    }
}

/// Infer the visibility of the entry on `line`.
pub fn infer_visibility(line: &str, tokens: &BooleanTokens, fallback: Visibility) -> Visibility {
    if let Some(caps) = PUBLIC_ATTR.captures(line) {
        return Visibility::from_public(tokens.interpret(&caps[2], false));
    }

    if let Some(caps) = PRIVATE_ATTR.captures(line) {
        return Visibility::from_public(!tokens.interpret(&caps[2], true));
    }

    fallback
}
