//! Hosting-service command-string derivation.
//!
//! Templates for repository bootstrap scripts embed ready-made `gh` CLI
//! argument strings; skelgen derives them here (the commands themselves are
//! executed by the generated scripts, never by this crate).

use crate::context::{Context, KeyMap};
use crate::core::Result;
use crate::template::substitute;

use super::ContextHook;

const GH_REPO_ARGS: &str =
    "\"${github}/${repo}\" --${visibility} --source=./ --remote=upstream --description=\"${description}\"";

// The positional $1 is the environment name, filled in by the generated
// shell script at run time.
const GH_ENSURE_ENV: &str = concat!(
    "jq -n '{\"deployment_branch_policy\": {\"protected_branches\": false,",
    "\"custom_branch_policies\": true}}' | gh api -H \"Accept: application",
    "/vnd.github+json\" -X PUT \"/repos/${github}/${repo}/",
    "environments/$1\" --input -"
);

/// Derives `gh repo create` arguments and the deployment-environment
/// bootstrap invocation.
pub struct CommandsHook;

impl ContextHook for CommandsHook {
    fn name(&self) -> &'static str {
        "commands"
    }

    fn reads(&self) -> &'static [&'static str] {
        &["github", "repo", "visibility", "description"]
    }

    fn writes(&self) -> &'static [&'static str] {
        &["gh_repo_args", "gh_ensure_env"]
    }

    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()> {
        let repo_args = substitute(GH_REPO_ARGS, ctx)?;
        ctx.insert(keys.get("gh_repo_args"), repo_args);
        let ensure_env = substitute(GH_ENSURE_ENV, ctx)?;
        ctx.insert(keys.get("gh_ensure_env"), ensure_env);
        Ok(())
    }
}
