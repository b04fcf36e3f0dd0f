//! Error handling for skelgen
//!
//! This module provides the error types and user-friendly error reporting for
//! the context-derivation pipeline. The error system is designed around two
//! core principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`SkelgenError`] - Enumerated error types for all pipeline failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! - **Substitution**: [`SkelgenError::MissingVariable`] - a URL or notice
//!   template references a context key that was never derived
//! - **Validation**: [`SkelgenError::InvalidEnumeration`],
//!   [`SkelgenError::InvalidVersionFloor`] - an answer value outside its
//!   declared valid set
//! - **Pipeline construction**: [`SkelgenError::OrderingViolation`] - a
//!   derivation step was scheduled before one of its dependencies
//!
//! Every variant aborts the generation run before any file is written. There
//! is deliberately no variant for environment-read failures: reading the git
//! identity or a tool version is best-effort and recovers locally with an
//! empty string or default (see [`crate::environment`]).
//!
//! # Examples
//!
//! ```rust
//! use skelgen::core::{SkelgenError, user_friendly_error};
//!
//! let err = SkelgenError::InvalidEnumeration {
//!     field: "visibility".to_string(),
//!     value: "internal".to_string(),
//!     allowed: "public, private".to_string(),
//! };
//! let ctx = user_friendly_error(err);
//! let message = format!("{}", ctx);
//! assert!(message.contains("internal"));
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for skelgen pipeline operations.
///
/// Each variant represents a specific failure mode of the context-derivation
/// pipeline. All of them abort the generation run: a malformed generated file
/// is worse than a failed generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkelgenError {
    /// A substitution template referenced a context key that was never derived.
    ///
    /// Raised by [`crate::template::substitute`] when a `${name}` placeholder
    /// has no value in the context. This propagates and aborts the run rather
    /// than degrading to an empty string, since a malformed URL in generated
    /// output is a correctness defect.
    #[error("template variable not found: '{variable}'")]
    MissingVariable {
        /// The placeholder name with no context value
        variable: String,
        /// The template string being substituted
        template: String,
        /// Closest existing key names, best match first
        suggestions: Vec<String>,
    },

    /// An answer value fell outside its declared valid set.
    ///
    /// For example a visibility of `"internal"` when only `public` and
    /// `private` are accepted. Fails fast rather than defaulting silently.
    #[error("invalid value '{value}' for '{field}' (expected one of: {allowed})")]
    InvalidEnumeration {
        /// The answer field holding the invalid value
        field: String,
        /// The offending value
        value: String,
        /// Human-readable list of accepted values
        allowed: String,
    },

    /// A version floor string did not parse as `major.minor`.
    #[error("invalid version floor '{value}' (expected 'major.minor', e.g. '3.9')")]
    InvalidVersionFloor {
        /// The unparseable floor string
        value: String,
    },

    /// A derivation step was scheduled before one of its dependencies.
    ///
    /// This is a construction-time defect in the pipeline itself, not a
    /// user-facing error: the composer validates the declared read/write key
    /// sets of every hook before running anything, so a mis-ordered pipeline
    /// fails loudly here instead of mid-render with a cryptic
    /// [`MissingVariable`](Self::MissingVariable).
    #[error("hook '{hook}' reads key '{key}' which no earlier step provides")]
    OrderingViolation {
        /// Name of the mis-scheduled hook
        hook: String,
        /// The key read before anything writes it
        key: String,
    },
}

/// Rank existing names by edit distance to a missing one.
///
/// Returns up to three candidates within a 50% similarity threshold, closest
/// first. Used to populate [`SkelgenError::MissingVariable`] suggestions.
pub fn suggest_similar(target: &str, candidates: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut scored: Vec<(String, usize)> = candidates
        .into_iter()
        .map(|candidate| {
            let distance = strsim::levenshtein(target, &candidate);
            (candidate, distance)
        })
        .collect();

    scored.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    scored
        .into_iter()
        .filter(|(_, dist)| *dist <= target.len() / 2)
        .take(3)
        .map(|(candidate, _)| candidate)
        .collect()
}

/// User-friendly error wrapper with optional suggestion and details.
///
/// Wraps a [`SkelgenError`] with actionable guidance for terminal display.
/// Suggestions render green, details yellow, the error itself red and bold.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The underlying pipeline error
    pub error: SkelgenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no additional guidance attached.
    #[must_use]
    pub const fn new(error: SkelgenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{} {}", "Error:".red().bold(), self.error);

        if let Some(ref details) = self.details {
            eprintln!("  {} {}", "Details:".yellow(), details);
        }

        if let Some(ref suggestion) = self.suggestion {
            eprintln!("  {} {}", "Suggestion:".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(ref details) = self.details {
            write!(f, "\n  Details: {details}")?;
        }
        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  Suggestion: {suggestion}")?;
        }
        Ok(())
    }
}

/// Convert a pipeline error into a user-friendly [`ErrorContext`] with
/// contextual suggestions.
#[must_use]
pub fn user_friendly_error(error: SkelgenError) -> ErrorContext {
    match &error {
        SkelgenError::MissingVariable {
            variable,
            suggestions,
            ..
        } => {
            let context = ErrorContext::new(error.clone()).with_details(format!(
                "a substitution template references '{variable}', but no derivation step set it"
            ));
            if suggestions.is_empty() {
                context.with_suggestion(
                    "check that the hook deriving this key runs earlier in the pipeline",
                )
            } else {
                context.with_suggestion(format!("did you mean: {}?", suggestions.join(", ")))
            }
        }
        SkelgenError::InvalidEnumeration {
            field,
            allowed,
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion(format!("set '{field}' to one of: {allowed}")),
        SkelgenError::InvalidVersionFloor {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("use a two-component version like '3.9' or '3.12'"),
        SkelgenError::OrderingViolation {
            hook,
            ..
        } => ErrorContext::new(error.clone()).with_details(format!(
            "the pipeline is mis-ordered; '{hook}' must be scheduled after the step that writes this key"
        )),
    }
}
