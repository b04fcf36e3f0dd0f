//! skelgen - context derivation for project skeleton generation
//!
//! skelgen computes the full, internally consistent context dictionary that a
//! template-driven project generator renders every file against. From a small
//! set of user-supplied answers (owner account, repository name, visibility,
//! minimum runtime version, license) it deterministically derives the larger
//! key set templates consume: canonical URLs, version matrices, visibility
//! flags, provenance metadata, and environment-derived identity fields.
//!
//! The file-copying/templating engine, the interactive prompt UI, and any
//! git/GitHub command execution are external collaborators: skelgen only
//! produces the context they consume.
//!
//! # Architecture Overview
//!
//! The derivation is an explicit, ordered pipeline of hooks run by the
//! [`hooks::Composer`] over one shared [`context::Context`]:
//!
//! 1. **skeleton** - upstream-template identifier, URLs, and pinned revision
//! 2. **project-urls** - repository, coverage, docs, package-index URLs
//! 3. **python-versions** - supported-version matrices from the answered floor
//! 4. **visibility** - mutually exclusive `public`/`private` flags
//! 5. **commands** - ready-made `gh` CLI argument strings
//! 6. **git-identity** / **tool-versions** - best-effort environment reads
//! 7. **snapshot** - a copy of the composed context for answer dumps
//!
//! Each hook declares the keys it reads and writes; the composer validates
//! the ordering at construction time, so a mis-scheduled hook fails loudly
//! before anything renders. The pipeline runs once, synchronously, and the
//! resulting context is immutable for the rest of the generation pass.
//!
//! # Core Modules
//!
//! - [`answers`] - the immutable identifier bundle of raw user answers
//! - [`context`] - the context dictionary and the placeholder-key resolver
//! - [`hooks`] - the derivation steps and the composer that orders them
//! - [`template`] - explicit `${name}` substitution with typed failures
//! - [`versions`] - supported-version matrix generation
//! - [`provenance`] - "generated from" notices and origin-path capture
//! - [`environment`] - best-effort reads of git identity and tool versions
//! - [`templating`] - Tera filters and context conversion for the engine
//! - [`core`] - error taxonomy and user-facing error presentation
//!
//! # Example
//!
//! ```rust
//! use skelgen::answers::{Answers, GenerationMode, PriorAnswers};
//! use skelgen::hooks::Composer;
//!
//! # fn main() -> anyhow::Result<()> {
//! let answers = Answers {
//!     github: "acme".to_string(),
//!     repo: "widget".to_string(),
//!     description: "A widget toolkit".to_string(),
//!     visibility: "public".to_string(),
//!     python: "3.9".to_string(),
//!     pypy: true,
//!     license_name: "MIT".to_string(),
//!     docs_slug: None,
//!     dist_name: None,
//!     src_path: Some("gh://acme/skeleton".to_string()),
//!     self_test: false,
//! };
//!
//! let ctx = Composer::standard().compose(
//!     &answers,
//!     &PriorAnswers::pinned("abc123"),
//!     GenerationMode::Create,
//! )?;
//!
//! assert_eq!(ctx.require_str("repo_url")?, "https://github.com/acme/widget");
//! assert!(ctx.require_bool("public")?);
//!
//! // Hand the composed context to the external templating engine.
//! let tera_context = ctx.to_tera();
//! # let _ = tera_context;
//! # Ok(())
//! # }
//! ```

pub mod answers;
pub mod context;
pub mod core;
pub mod environment;
pub mod hooks;
pub mod provenance;
pub mod template;
pub mod templating;
pub mod versions;
