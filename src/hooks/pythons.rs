//! Supported-version matrix derivation.

use crate::context::{Context, KeyMap};
use crate::core::Result;
use crate::versions::{
    LATEST_PYTHON, PYTHON_AHEAD, VersionTuple, full_matrix, intermediate_matrix, outermost_matrix,
};

use super::ContextHook;

/// Expands the answered version floor into the full, outermost, and
/// intermediate matrices, plus the latest/ahead version strings templates
/// use for bound declarations.
pub struct PythonVersionsHook;

impl ContextHook for PythonVersionsHook {
    fn name(&self) -> &'static str {
        "python-versions"
    }

    fn reads(&self) -> &'static [&'static str] {
        &["python", "pypy"]
    }

    fn writes(&self) -> &'static [&'static str] {
        &["latest_python", "python_ahead", "pythons", "outermost_pythons", "intermediate_pythons"]
    }

    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()> {
        let floor: VersionTuple = ctx.require_str(&keys.get("python"))?.parse()?;
        let pypy = ctx.require_bool(&keys.get("pypy"))?;

        ctx.insert(keys.get("latest_python"), LATEST_PYTHON.to_string());
        ctx.insert(keys.get("python_ahead"), PYTHON_AHEAD.to_string());
        ctx.insert(keys.get("pythons"), full_matrix(floor, pypy));
        ctx.insert(keys.get("outermost_pythons"), outermost_matrix(floor, pypy));
        ctx.insert(keys.get("intermediate_pythons"), intermediate_matrix(floor, pypy));
        Ok(())
    }
}
