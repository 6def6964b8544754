//! Best-effort secret scrubbing for archive documents.
//!
//! The policy is a denylist of regex rules applied to every string leaf of a
//! JSON tree. Secrets that match none of the rules are written out unchanged;
//! a clean pass is not proof that a document is secret-free.

use crate::{Error, Result};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Text substituted for a matched secret
pub const REDACTION_MARKER: &str = "[REDACTED]";

static BUILTIN_RULES: LazyLock<Vec<RedactionRule>> = LazyLock::new(|| {
    vec![
        RedactionRule::from_regex(
            "github_pat",
            Regex::new(r"ghp_[a-zA-Z0-9]{20,}").unwrap(),
            REDACTION_MARKER,
        ),
        RedactionRule::from_regex(
            "bearer_token",
            Regex::new(r"(Bearer\s+)[a-zA-Z0-9_\-]{20,}").unwrap(),
            "${1}[REDACTED]",
        ),
    ]
});

/// One pattern and its replacement
#[derive(Debug, Clone)]
pub struct RedactionRule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl RedactionRule {
    /// Compile a rule; an invalid pattern is a configuration error
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            Error::Config(format!("invalid redaction pattern '{}': {}", name, e))
        })?;
        Ok(Self::from_regex(name, regex, replacement))
    }

    fn from_regex(name: &str, pattern: Regex, replacement: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern,
            replacement: replacement.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace every match; borrows the input when nothing matched
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

/// Ordered list of rules, applied first to last
#[derive(Debug, Clone)]
pub struct RedactionPolicy {
    rules: Vec<RedactionRule>,
}

impl Default for RedactionPolicy {
    /// GitHub personal access tokens and HTTP bearer tokens
    fn default() -> Self {
        Self {
            rules: BUILTIN_RULES.clone(),
        }
    }
}

impl RedactionPolicy {
    /// A policy with no rules; redaction becomes the identity
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: RedactionRule) -> Self {
        self.push(rule);
        self
    }

    pub fn push(&mut self, rule: RedactionRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }

    /// Run every rule over one string
    pub fn redact_str<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mut text = Cow::Borrowed(input);
        for rule in &self.rules {
            let replaced = match rule.apply(&text) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            if let Some(s) = replaced {
                text = Cow::Owned(s);
            }
        }
        text
    }

    /// Rebuild a JSON tree with every string leaf scrubbed.
    ///
    /// Object keys, array order and non-string scalars pass through untouched.
    pub fn redact(&self, value: Value) -> Value {
        match value {
            Value::String(text) => {
                let replaced = match self.redact_str(&text) {
                    Cow::Owned(s) => Some(s),
                    Cow::Borrowed(_) => None,
                };
                Value::String(replaced.unwrap_or(text))
            }
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|item| self.redact(item)).collect())
            }
            Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, self.redact(item)))
                    .collect(),
            ),
            scalar @ (Value::Null | Value::Bool(_) | Value::Number(_)) => scalar,
        }
    }

    /// Serialize any archive document and scrub it
    pub fn redact_serializable<T: Serialize>(&self, document: &T) -> Result<Value> {
        Ok(self.redact(serde_json::to_value(document)?))
    }
}
