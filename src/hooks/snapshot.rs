//! Context self-snapshot.

use crate::context::{Context, KeyMap};
use crate::core::Result;

use super::ContextHook;

/// Stores a copy of the composed context under the `context` key, so
/// templates can dump the effective answers verbatim (for example into a
/// generated answers file). Runs last; the snapshot is taken after every
/// derivation step has written its keys.
pub struct SnapshotHook;

impl ContextHook for SnapshotHook {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn writes(&self) -> &'static [&'static str] {
        &["context"]
    }

    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()> {
        let snapshot = ctx.to_json();
        ctx.insert(keys.get("context"), snapshot);
        Ok(())
    }
}
