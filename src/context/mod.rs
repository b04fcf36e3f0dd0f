//! The shared context dictionary that every template file renders against.
//!
//! A [`Context`] is a growing mapping from string keys to JSON values. The
//! [`Composer`](crate::hooks::Composer) seeds it from the raw answers, runs
//! each derivation hook against it in order, and hands the final result to
//! the external templating engine. Keys are globally unique within one render
//! pass; once a hook writes a key, later hooks may read it but must only
//! overwrite it when re-deriving the same value from updated inputs.
//!
//! Values are stored as [`serde_json::Value`] in a `BTreeMap` so iteration
//! and serialization order are deterministic across runs.

pub mod keymap;

pub use keymap::KeyMap;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::core::{Result, SkelgenError, suggest_similar};

/// Reserved key under which answers from a previous generation run are stored.
///
/// Only the skeleton (provenance) and URL derivation steps read this; it is
/// seeded by the composer and never derived.
pub const PRIOR_ANSWERS_KEY: &str = "_prior_answers";

/// The context dictionary consumed by every template file.
///
/// # Examples
///
/// ```rust
/// use skelgen::context::Context;
///
/// let mut ctx = Context::new();
/// ctx.insert("repo", "widget");
/// assert_eq!(ctx.require_str("repo").unwrap(), "widget");
/// assert!(ctx.require_str("github").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under `key`, serializing it to JSON.
    ///
    /// Overwriting an existing key with a different value is allowed (a step
    /// may re-derive a key from updated inputs) but logged, since a silent
    /// inconsistent overwrite is a hook defect.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be serialized to JSON. All context value
    /// types used by the pipeline (strings, booleans, version sequences) are
    /// infallibly serializable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize) {
        let key = key.into();
        let value = serde_json::to_value(value).expect("context values serialize infallibly");
        if let Some(previous) = self.values.get(&key) {
            if *previous != value {
                tracing::debug!(%key, "overwriting context key with a different value");
            }
        }
        self.values.insert(key, value);
    }

    /// Look up a raw value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether `key` has been written.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All keys currently present, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of keys currently present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up a string value, failing with [`SkelgenError::MissingVariable`]
    /// if the key is absent or not a string.
    pub fn require_str(&self, key: &str) -> Result<&str> {
        self.values.get(key).and_then(Value::as_str).ok_or_else(|| self.missing(key))
    }

    /// Look up a boolean value, failing with [`SkelgenError::MissingVariable`]
    /// if the key is absent or not a boolean.
    pub fn require_bool(&self, key: &str) -> Result<bool> {
        self.values.get(key).and_then(Value::as_bool).ok_or_else(|| self.missing(key))
    }

    /// Render the value under `key` as the string form used in substitution.
    ///
    /// Strings substitute verbatim; booleans and numbers use their JSON
    /// representation. Structured values are not valid substitution operands.
    pub(crate) fn substitution_value(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Snapshot the current state as a JSON object.
    ///
    /// Used by the snapshot hook to expose the composed answers to templates
    /// under a single key.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.values).expect("context serializes infallibly")
    }

    /// Convert into the context type of the external templating engine.
    #[must_use]
    pub fn to_tera(&self) -> tera::Context {
        let mut tera_context = tera::Context::new();
        for (key, value) in &self.values {
            tera_context.insert(key, value);
        }
        tera_context
    }

    fn missing(&self, key: &str) -> SkelgenError {
        SkelgenError::MissingVariable {
            variable: key.to_string(),
            template: String::new(),
            suggestions: suggest_similar(key, self.keys().map(str::to_string)),
        }
    }
}
