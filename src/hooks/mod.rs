//! Context-derivation hooks and the composer that runs them.
//!
//! Each hook is one derivation step: it reads previously-set context keys and
//! writes new ones. The [`Composer`] runs a fixed, ordered sequence of hooks
//! over one shared context, seeded from the raw answers. Hooks declare their
//! read and write key sets; the composer validates at construction time that
//! no hook reads a key written only by a later step, so a mis-ordered
//! pipeline fails loudly with [`SkelgenError::OrderingViolation`] instead of
//! mid-render with a cryptic missing-variable error.
//!
//! Hook key names are resolved through a per-run [`KeyMap`], so a caller can
//! redirect a hook's output keys without touching the hook itself.
//!
//! # Standard pipeline
//!
//! ```rust
//! use skelgen::answers::{Answers, GenerationMode, PriorAnswers};
//! use skelgen::hooks::Composer;
//!
//! # fn main() -> anyhow::Result<()> {
//! let answers = Answers {
//!     github: "acme".to_string(),
//!     repo: "widget".to_string(),
//!     description: "A widget".to_string(),
//!     visibility: "public".to_string(),
//!     python: "3.9".to_string(),
//!     pypy: true,
//!     license_name: "MIT".to_string(),
//!     docs_slug: None,
//!     dist_name: None,
//!     src_path: Some("gh://acme/skeleton".to_string()),
//!     self_test: false,
//! };
//! let prior = PriorAnswers::pinned("abc123");
//! let ctx = Composer::standard().compose(&answers, &prior, GenerationMode::Create)?;
//! assert_eq!(ctx.require_str("repo_url")?, "https://github.com/acme/widget");
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod environment;
pub mod pythons;
pub mod skeleton;
pub mod snapshot;
pub mod urls;
pub mod visibility;

pub use commands::CommandsHook;
pub use environment::{GitIdentityHook, ToolVersionsHook};
pub use pythons::PythonVersionsHook;
pub use skeleton::SkeletonHook;
pub use snapshot::SnapshotHook;
pub use urls::ProjectUrlsHook;
pub use visibility::VisibilityHook;

use std::collections::HashSet;
use std::fmt;

use crate::answers::{Answers, GenerationMode, PriorAnswers};
use crate::context::{Context, KeyMap};
use crate::core::{Result, SkelgenError};

/// One derivation step of the context pipeline.
///
/// Implementations must be pure functions of the context and their declared
/// environment reads: same inputs, same written values. A hook may read any
/// key written by an earlier step and must not depend on a key written by a
/// later step.
pub trait ContextHook {
    /// Stable identifier used in logs and ordering diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this step also applies when regenerating an existing project
    /// from a newer template revision. Most steps only run on first
    /// generation.
    fn runs_on_update(&self) -> bool {
        false
    }

    /// Canonical names of the context keys this step reads.
    fn reads(&self) -> &'static [&'static str] {
        &[]
    }

    /// Canonical names of the context keys this step writes.
    fn writes(&self) -> &'static [&'static str] {
        &[]
    }

    /// Apply the derivation to the shared context.
    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()>;
}

/// Runs the ordered hook sequence over one shared, growing context.
///
/// The composed context is computed once per generation run and is immutable
/// thereafter; no step is re-invoked mid-render.
pub struct Composer {
    hooks: Vec<Box<dyn ContextHook>>,
}

impl fmt::Debug for Composer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("hooks", &self.hooks.iter().map(|hook| hook.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl Composer {
    /// Build a composer over an explicit hook sequence, validating that every
    /// declared read is satisfied by the answer seed or an earlier hook's
    /// writes - in both generation modes.
    ///
    /// # Errors
    ///
    /// Returns [`SkelgenError::OrderingViolation`] naming the first hook and
    /// key that violate the ordering.
    pub fn new(hooks: Vec<Box<dyn ContextHook>>) -> Result<Self> {
        validate(&hooks, GenerationMode::Create)?;
        validate(&hooks, GenerationMode::Update)?;
        Ok(Self {
            hooks,
        })
    }

    /// The standard derivation pipeline, in dependency order.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(SkeletonHook::default()),
            Box::new(ProjectUrlsHook),
            Box::new(PythonVersionsHook),
            Box::new(VisibilityHook),
            Box::new(CommandsHook),
            Box::new(GitIdentityHook::default()),
            Box::new(ToolVersionsHook::default()),
            Box::new(SnapshotHook),
        ])
        .expect("standard pipeline satisfies its own ordering")
    }

    /// Names of the hooks in execution order.
    pub fn hook_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.hooks.iter().map(|hook| hook.name())
    }

    /// Seed a context from the answers and run every applicable hook once.
    ///
    /// In [`GenerationMode::Update`], steps not marked update-applicable are
    /// skipped. The returned context is the final dictionary handed to the
    /// templating engine for every file in the generation pass.
    ///
    /// # Errors
    ///
    /// Propagates the first hook failure; nothing is generated on error.
    pub fn compose(
        &self,
        answers: &Answers,
        prior: &PriorAnswers,
        mode: GenerationMode,
    ) -> Result<Context> {
        let mut ctx = answers.seed(prior);
        let mut keys = KeyMap::new();

        for hook in &self.hooks {
            if mode == GenerationMode::Update && !hook.runs_on_update() {
                tracing::debug!(hook = hook.name(), "skipping first-generation-only hook");
                continue;
            }
            tracing::debug!(hook = hook.name(), "running context hook");
            hook.run(&mut ctx, &mut keys)?;
        }

        tracing::info!(keys = ctx.len(), "composed template context");
        Ok(ctx)
    }
}

fn validate(hooks: &[Box<dyn ContextHook>], mode: GenerationMode) -> Result<()> {
    let mut available: HashSet<&str> = Answers::seeded_keys().iter().copied().collect();
    for hook in hooks {
        if mode == GenerationMode::Update && !hook.runs_on_update() {
            continue;
        }
        for key in hook.reads() {
            if !available.contains(key) {
                return Err(SkelgenError::OrderingViolation {
                    hook: hook.name().to_string(),
                    key: (*key).to_string(),
                });
            }
        }
        available.extend(hook.writes());
    }
    Ok(())
}
