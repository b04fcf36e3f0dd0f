//! Core types and error handling for skelgen.
//!
//! This module hosts the error taxonomy shared by every derivation step and
//! the user-facing error presentation helpers. All pipeline-aborting failures
//! funnel through [`SkelgenError`]; recoverable environment-read failures
//! never do (they degrade to defaults locally, see [`crate::environment`]).

pub mod error;

pub use error::{ErrorContext, SkelgenError, suggest_similar, user_friendly_error};

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SkelgenError>;
