//! Integration with the external file-templating engine.
//!
//! The engine that actually copies and renders template files is an external
//! collaborator; this module is the seam. It converts a composed
//! [`Context`](crate::context::Context) into the engine's context type (see
//! [`Context::to_tera`](crate::context::Context::to_tera)) and registers the
//! custom filters the skeleton's template files rely on.

pub mod filters;

pub use filters::{kebabify, register_filters};
