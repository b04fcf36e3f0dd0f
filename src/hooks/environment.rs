//! Environment-derived context keys.
//!
//! These hooks read the local git identity and tool versions so templates
//! can bake them into generated files (author fields, pinned tool versions).
//! The reads are best-effort: a failure degrades to an empty string or a
//! fixed default and never aborts the pipeline.

use crate::context::{Context, KeyMap};
use crate::core::Result;
use crate::environment;

use super::ContextHook;

/// Writes `git_username` and `git_email` from the local git configuration.
pub struct GitIdentityHook {
    config_reader: fn(&str) -> String,
}

impl Default for GitIdentityHook {
    fn default() -> Self {
        Self {
            config_reader: environment::git_config,
        }
    }
}

impl GitIdentityHook {
    /// Replace the git-config reader, for tests.
    #[must_use]
    pub fn with_config_reader(reader: fn(&str) -> String) -> Self {
        Self {
            config_reader: reader,
        }
    }
}

impl ContextHook for GitIdentityHook {
    fn name(&self) -> &'static str {
        "git-identity"
    }

    fn writes(&self) -> &'static [&'static str] {
        &["git_username", "git_email"]
    }

    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()> {
        ctx.insert(keys.get("git_username"), (self.config_reader)("user.name"));
        ctx.insert(keys.get("git_email"), (self.config_reader)("user.email"));
        Ok(())
    }
}

/// Writes `poetry_version` from the locally installed tool.
pub struct ToolVersionsHook {
    poetry_reader: fn() -> String,
}

impl Default for ToolVersionsHook {
    fn default() -> Self {
        Self {
            poetry_reader: environment::poetry_version,
        }
    }
}

impl ToolVersionsHook {
    /// Replace the poetry-version reader, for tests.
    #[must_use]
    pub fn with_poetry_reader(reader: fn() -> String) -> Self {
        Self {
            poetry_reader: reader,
        }
    }
}

impl ContextHook for ToolVersionsHook {
    fn name(&self) -> &'static str {
        "tool-versions"
    }

    fn writes(&self) -> &'static [&'static str] {
        &["poetry_version"]
    }

    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()> {
        ctx.insert(keys.get("poetry_version"), (self.poetry_reader)());
        Ok(())
    }
}
