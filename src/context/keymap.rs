//! Auto-vivifying placeholder-key resolver.
//!
//! Hooks never hardcode the final context key names they write to. Instead
//! they resolve every name through a [`KeyMap`], which returns a stable
//! synthetic key for any unrecognized name: the name itself. Pre-registering
//! an alias redirects a hook's output to a different key without touching the
//! hook. Downstream string-formatting templates therefore never fail on an
//! unset name; they degrade to literal key names.

use std::collections::HashMap;

/// Dictionary-like store with a documented default-to-identity policy.
///
/// `get` on an unknown name atomically stores `name -> name` and returns the
/// name, so repeated lookups of the same missing key return the identical
/// value across the whole render pass. There is no removal operation and no
/// lookup ever fails.
///
/// # Examples
///
/// ```rust
/// use skelgen::context::KeyMap;
///
/// let mut keys = KeyMap::new();
/// assert_eq!(keys.get("repo_url"), "repo_url");
///
/// let mut aliased = KeyMap::new();
/// aliased.set("repo_url", "repository_url");
/// assert_eq!(aliased.get("repo_url"), "repository_url");
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    entries: HashMap<String, String>,
}

impl KeyMap {
    /// Create an empty resolver (every lookup resolves to itself).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register an alias so `name` resolves to `target`.
    pub fn set(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(name.into(), target.into());
    }

    /// Resolve `name` to its context key, memoizing the identity mapping on
    /// first miss.
    pub fn get(&mut self, name: &str) -> String {
        self.entries.entry(name.to_string()).or_insert_with(|| name.to_string()).clone()
    }

    /// Number of names resolved or registered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names have been resolved or registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
