//! Visibility flag derivation.

use crate::context::{Context, KeyMap};
use crate::core::{Result, SkelgenError};

use super::ContextHook;

/// Expands the visibility answer into the `public`/`private` boolean pair
/// used by conditional template blocks.
///
/// Exactly one of the two flags is true, by construction: `private` is
/// defined as the negation of `public`. Any visibility outside
/// {`public`, `private`} is a configuration error and fails fast.
pub struct VisibilityHook;

impl ContextHook for VisibilityHook {
    fn name(&self) -> &'static str {
        "visibility"
    }

    fn reads(&self) -> &'static [&'static str] {
        &["visibility"]
    }

    fn writes(&self) -> &'static [&'static str] {
        &["public", "private"]
    }

    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()> {
        let visibility = ctx.require_str(&keys.get("visibility"))?;
        let public = match visibility {
            "public" => true,
            "private" => false,
            other => {
                return Err(SkelgenError::InvalidEnumeration {
                    field: "visibility".to_string(),
                    value: other.to_string(),
                    allowed: "public, private".to_string(),
                });
            }
        };
        ctx.insert(keys.get("public"), public);
        ctx.insert(keys.get("private"), !public);
        Ok(())
    }
}
