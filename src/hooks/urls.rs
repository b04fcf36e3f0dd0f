//! Canonical project URL derivation.
//!
//! Builds the repository, coverage-badge redirect, documentation-site,
//! package-index, and funding URLs from the owner and repository identifiers.
//! Each URL is a fixed template substituted against the context; an absent
//! placeholder propagates as a `MissingVariable` failure.

use crate::context::{Context, KeyMap};
use crate::core::Result;
use crate::template::substitute;
use crate::templating::filters::kebabify;

use super::ContextHook;

const REPO_URL: &str = "https://github.com/${github}/${repo}";
const COVERAGE_URL: &str =
    "https://coverage-badge.samuelcolvin.workers.dev/redirect/${github}/${repo}";
const DOCS_URL: &str = "https://${docs_slug}.readthedocs.io/en/latest/";
const PYPI_URL: &str = "https://pypi.org/project/${dist_name}/";
const TIDELIFT_URL: &str =
    "https://tidelift.com/subscription/pkg/pypi-${dist_name}?utm_source=pypi-${dist_name}";

/// Derives the canonical URL set for the generated project.
///
/// The documentation slug and distribution name default to the kebab-cased
/// repository name when not answered explicitly. Runs on update regeneration
/// too: the URLs are pure re-derivations of the (possibly updated) answers.
pub struct ProjectUrlsHook;

impl ContextHook for ProjectUrlsHook {
    fn name(&self) -> &'static str {
        "project-urls"
    }

    fn runs_on_update(&self) -> bool {
        true
    }

    fn reads(&self) -> &'static [&'static str] {
        &["github", "repo"]
    }

    fn writes(&self) -> &'static [&'static str] {
        &["docs_slug", "dist_name", "repo_url", "coverage_url", "docs_url", "pypi_url", "tidelift_url"]
    }

    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()> {
        for slug_key in ["docs_slug", "dist_name"] {
            let key = keys.get(slug_key);
            if !ctx.contains(&key) {
                let slug = kebabify(ctx.require_str(&keys.get("repo"))?);
                ctx.insert(key, slug);
            }
        }

        for (name, template) in [
            ("repo_url", REPO_URL),
            ("coverage_url", COVERAGE_URL),
            ("docs_url", DOCS_URL),
            ("pypi_url", PYPI_URL),
            ("tidelift_url", TIDELIFT_URL),
        ] {
            let url = substitute(template, ctx)?;
            ctx.insert(keys.get(name), url);
        }
        Ok(())
    }
}
