//! The identifier bundle: raw user-supplied answers.
//!
//! [`Answers`] is the minimal set of values the prompt subsystem collects
//! before rendering begins. It is immutable for the duration of one
//! generation run; the composer seeds the context from it and every derived
//! key flows from there. [`PriorAnswers`] carries the answers recorded by a
//! previous generation run, consumed on template-update regeneration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::{Context, PRIOR_ANSWERS_KEY};

/// Whether this run generates a fresh project or regenerates an existing one
/// from a newer template revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// First generation of a new project
    Create,
    /// Regeneration of an existing project from an updated template
    Update,
}

/// Raw user-supplied answers for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answers {
    /// Owner account on the hosting service
    pub github: String,
    /// Repository name
    pub repo: String,
    /// One-line project description
    #[serde(default)]
    pub description: String,
    /// Repository visibility: `"public"` or `"private"`
    pub visibility: String,
    /// Minimum supported runtime version, `"major.minor"`
    pub python: String,
    /// Whether the alternate (PyPy) runtime is supported
    #[serde(default)]
    pub pypy: bool,
    /// SPDX-style license identifier (license text fetching is out of scope)
    #[serde(default)]
    pub license_name: String,
    /// Documentation-site slug; defaults to the kebab-cased repository name
    #[serde(default)]
    pub docs_slug: Option<String>,
    /// Package-index distribution name; defaults to the kebab-cased
    /// repository name
    #[serde(default)]
    pub dist_name: Option<String>,
    /// Template source reference this project is generated from, as the
    /// engine records it (for example `gh://acme/skeleton`)
    #[serde(default)]
    pub src_path: Option<String>,
    /// True when generating inside the template repository itself, where the
    /// source path would be self-referential
    #[serde(default)]
    pub self_test: bool,
}

impl Answers {
    /// Seed a fresh context from these answers and the prior-run answers.
    ///
    /// Every key named by [`Answers::seeded_keys`] is written; optional
    /// answers seed as empty strings so the key set is identical across runs.
    pub fn seed(&self, prior: &PriorAnswers) -> Context {
        let mut ctx = Context::new();
        ctx.insert("github", &self.github);
        ctx.insert("repo", &self.repo);
        ctx.insert("description", &self.description);
        ctx.insert("visibility", &self.visibility);
        ctx.insert("python", &self.python);
        ctx.insert("pypy", self.pypy);
        ctx.insert("license_name", &self.license_name);
        if let Some(ref docs_slug) = self.docs_slug {
            ctx.insert("docs_slug", docs_slug);
        }
        if let Some(ref dist_name) = self.dist_name {
            ctx.insert("dist_name", dist_name);
        }
        ctx.insert("_src_path", self.src_path.clone().unwrap_or_default());
        ctx.insert("self_test", self.self_test);
        ctx.insert(PRIOR_ANSWERS_KEY, prior.to_json());
        ctx
    }

    /// Keys guaranteed present after seeding, used by the composer to
    /// validate hook read sets.
    #[must_use]
    pub fn seeded_keys() -> &'static [&'static str] {
        &[
            "github",
            "repo",
            "description",
            "visibility",
            "python",
            "pypy",
            "license_name",
            "_src_path",
            "self_test",
            PRIOR_ANSWERS_KEY,
        ]
    }
}

/// Answers recorded by a previous generation run.
///
/// Read as an immutable mapping under the reserved
/// [`PRIOR_ANSWERS_KEY`] context key. Only the skeleton (provenance) and URL
/// derivation steps rely on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorAnswers {
    /// Commit of the template revision the project was generated from
    #[serde(rename = "_commit", default)]
    pub commit: Option<String>,
    /// All other recorded answers, kept opaque
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

impl PriorAnswers {
    /// Prior answers pinned to a template commit.
    #[must_use]
    pub fn pinned(commit: impl Into<String>) -> Self {
        Self {
            commit: Some(commit.into()),
            values: BTreeMap::new(),
        }
    }

    /// JSON form stored under the reserved context key.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).expect("prior answers serialize infallibly")
    }
}
