//! Upstream-template (skeleton) provenance derivation.
//!
//! Records where the template this project came from lives: the skeleton
//! repository identifier, its URLs, the pinned revision, and the combined
//! `name@ref` label that generated files embed in their provenance notices.

use serde_json::Value;

use crate::context::{Context, KeyMap, PRIOR_ANSWERS_KEY};
use crate::core::Result;
use crate::environment;
use crate::template::substitute;

use super::ContextHook;

const SKELETON_URL: &str = "https://github.com/${skeleton}";
const RAW_SKELETON_URL: &str = "https://raw.githubusercontent.com/${skeleton}";
const SKELETON_REV: &str = "https://github.com/${skeleton}/tree/${skeleton_ref}";

/// Derives the skeleton identifier and its URL family.
///
/// The skeleton name comes from the recorded template source path (with its
/// `gh://` scheme prefix stripped), or - when generating inside the template
/// repository itself - from a best-effort `gh repo view` lookup. The pinned
/// ref comes from the prior-run answers.
///
/// Runs on update regeneration too: the ref moves with every template
/// revision, so these keys are re-derived from the updated prior answers.
pub struct SkeletonHook {
    repo_name_reader: fn() -> String,
}

impl Default for SkeletonHook {
    fn default() -> Self {
        Self {
            repo_name_reader: environment::gh_repo_name,
        }
    }
}

impl SkeletonHook {
    /// Replace the `gh repo view` reader, for tests.
    #[must_use]
    pub fn with_repo_name_reader(reader: fn() -> String) -> Self {
        Self {
            repo_name_reader: reader,
        }
    }
}

impl ContextHook for SkeletonHook {
    fn name(&self) -> &'static str {
        "skeleton"
    }

    fn runs_on_update(&self) -> bool {
        true
    }

    fn reads(&self) -> &'static [&'static str] {
        &["self_test", "_src_path", PRIOR_ANSWERS_KEY]
    }

    fn writes(&self) -> &'static [&'static str] {
        &[
            "skeleton",
            "skeleton_url",
            "raw_skeleton_url",
            "skeleton_ref",
            "sref",
            "skeleton_rev",
            "srev",
            "skeleton_and_ref",
            "snref",
        ]
    }

    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()> {
        let skeleton = if ctx.require_bool(&keys.get("self_test"))? {
            (self.repo_name_reader)()
        } else {
            let src_path = ctx.require_str(&keys.get("_src_path"))?;
            src_path.strip_prefix("gh://").unwrap_or(src_path).to_string()
        };
        ctx.insert(keys.get("skeleton"), &skeleton);
        let skeleton_url = substitute(SKELETON_URL, ctx)?;
        ctx.insert(keys.get("skeleton_url"), skeleton_url);
        let raw_skeleton_url = substitute(RAW_SKELETON_URL, ctx)?;
        ctx.insert(keys.get("raw_skeleton_url"), raw_skeleton_url);

        let skeleton_ref = ctx
            .get(&keys.get(PRIOR_ANSWERS_KEY))
            .and_then(|prior| prior.get("_commit"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        ctx.insert(keys.get("skeleton_ref"), &skeleton_ref);
        ctx.insert(keys.get("sref"), &skeleton_ref);

        let skeleton_rev = substitute(SKELETON_REV, ctx)?;
        ctx.insert(keys.get("skeleton_rev"), &skeleton_rev);
        ctx.insert(keys.get("srev"), skeleton_rev);

        let skeleton_and_ref = format!("{skeleton}@{skeleton_ref}");
        ctx.insert(keys.get("skeleton_and_ref"), &skeleton_and_ref);
        ctx.insert(keys.get("snref"), skeleton_and_ref);

        Ok(())
    }
}
