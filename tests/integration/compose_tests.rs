//! End-to-end pipeline scenarios over the standard composer.

use serde_json::json;
use skelgen::answers::{Answers, GenerationMode, PriorAnswers};
use skelgen::context::Context;
use skelgen::core::SkelgenError;
use skelgen::hooks::Composer;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn answers() -> Answers {
    Answers {
        github: "acme".to_string(),
        repo: "widget".to_string(),
        description: "A widget toolkit".to_string(),
        visibility: "public".to_string(),
        python: "3.9".to_string(),
        pypy: true,
        license_name: "MIT".to_string(),
        docs_slug: None,
        dist_name: None,
        src_path: Some("gh://acme/skeleton".to_string()),
        self_test: false,
    }
}

fn compose(answers: &Answers) -> Result<Context, SkelgenError> {
    Composer::standard().compose(answers, &PriorAnswers::pinned("abc123"), GenerationMode::Create)
}

#[test]
fn full_scenario_derives_urls_matrices_and_flags() {
    init_tracing();
    let ctx = compose(&answers()).unwrap();

    // Derived URLs for acme/widget.
    assert_eq!(ctx.require_str("repo_url").unwrap(), "https://github.com/acme/widget");
    assert_eq!(
        ctx.require_str("coverage_url").unwrap(),
        "https://coverage-badge.samuelcolvin.workers.dev/redirect/acme/widget"
    );
    assert_eq!(ctx.require_str("docs_url").unwrap(), "https://widget.readthedocs.io/en/latest/");
    assert_eq!(ctx.require_str("pypi_url").unwrap(), "https://pypi.org/project/widget/");

    // Provenance.
    assert_eq!(ctx.require_str("skeleton").unwrap(), "acme/skeleton");
    assert_eq!(
        ctx.require_str("skeleton_rev").unwrap(),
        "https://github.com/acme/skeleton/tree/abc123"
    );
    assert_eq!(ctx.require_str("snref").unwrap(), "acme/skeleton@abc123");

    // Version matrices for floor 3.9 with the alternate runtime enabled.
    assert_eq!(
        ctx.get("pythons").unwrap(),
        &json!([["3", 9], ["3", 10], ["pypy3", 10], ["3", 11], ["3", 12]])
    );
    assert_eq!(ctx.get("outermost_pythons").unwrap(), &json!([["3", 9], ["3", 12]]));
    assert_eq!(
        ctx.get("intermediate_pythons").unwrap(),
        &json!([["3", 10], ["pypy3", 10], ["3", 11]])
    );

    // Visibility flags are mutually exclusive.
    assert!(ctx.require_bool("public").unwrap());
    assert!(!ctx.require_bool("private").unwrap());

    // Command strings.
    assert_eq!(
        ctx.require_str("gh_repo_args").unwrap(),
        "\"acme/widget\" --public --source=./ --remote=upstream --description=\"A widget toolkit\""
    );

    // Environment-derived keys exist whatever the host provides.
    assert!(ctx.contains("git_username"));
    assert!(ctx.contains("git_email"));
    assert!(!ctx.require_str("poetry_version").unwrap().is_empty());

    // Snapshot holds the pre-snapshot state.
    let snapshot = ctx.get("context").unwrap();
    assert_eq!(snapshot["repo_url"], "https://github.com/acme/widget");
    assert!(snapshot.get("context").is_none());
}

#[test]
fn invalid_visibility_aborts_composition() {
    init_tracing();
    let mut bad = answers();
    bad.visibility = "internal".to_string();
    let err = compose(&bad).unwrap_err();
    assert_eq!(
        err,
        SkelgenError::InvalidEnumeration {
            field: "visibility".to_string(),
            value: "internal".to_string(),
            allowed: "public, private".to_string(),
        }
    );
}

#[test]
fn invalid_version_floor_aborts_composition() {
    init_tracing();
    let mut bad = answers();
    bad.python = "3".to_string();
    assert!(matches!(
        compose(&bad).unwrap_err(),
        SkelgenError::InvalidVersionFloor { .. }
    ));
}

#[test]
fn update_mode_skips_first_generation_hooks() {
    init_tracing();
    let ctx = Composer::standard()
        .compose(&answers(), &PriorAnswers::pinned("def456"), GenerationMode::Update)
        .unwrap();

    // Provenance and URLs are re-derived from the updated prior answers.
    assert_eq!(ctx.require_str("sref").unwrap(), "def456");
    assert_eq!(ctx.require_str("repo_url").unwrap(), "https://github.com/acme/widget");

    // First-generation-only steps leave no keys behind.
    assert!(!ctx.contains("public"));
    assert!(!ctx.contains("pythons"));
    assert!(!ctx.contains("gh_repo_args"));
    assert!(!ctx.contains("poetry_version"));
}

#[test]
fn private_visibility_flips_both_flags() {
    init_tracing();
    let mut private = answers();
    private.visibility = "private".to_string();
    let ctx = compose(&private).unwrap();
    assert!(!ctx.require_bool("public").unwrap());
    assert!(ctx.require_bool("private").unwrap());
    assert!(ctx.require_str("gh_repo_args").unwrap().contains("--private"));
}

#[test]
fn floor_equal_to_latest_yields_single_entry_matrices() {
    init_tracing();
    let mut latest_only = answers();
    latest_only.python = "3.12".to_string();
    let ctx = compose(&latest_only).unwrap();
    assert_eq!(ctx.get("pythons").unwrap(), &json!([["3", 12]]));
    assert_eq!(ctx.get("outermost_pythons").unwrap(), &json!([["3", 12]]));
    assert_eq!(ctx.get("intermediate_pythons").unwrap(), &json!([]));
}

#[test]
fn explicit_slugs_survive_composition() {
    init_tracing();
    let mut slugged = answers();
    slugged.docs_slug = Some("widget-docs".to_string());
    slugged.dist_name = Some("acme-widget".to_string());
    let ctx = compose(&slugged).unwrap();
    assert_eq!(
        ctx.require_str("docs_url").unwrap(),
        "https://widget-docs.readthedocs.io/en/latest/"
    );
    assert_eq!(ctx.require_str("pypi_url").unwrap(), "https://pypi.org/project/acme-widget/");
    assert_eq!(
        ctx.require_str("tidelift_url").unwrap(),
        "https://tidelift.com/subscription/pkg/pypi-acme-widget?utm_source=pypi-acme-widget"
    );
}

#[test]
fn composed_context_converts_to_engine_context() {
    init_tracing();
    let ctx = compose(&answers()).unwrap();
    let tera_context = ctx.to_tera();
    assert_eq!(
        tera_context.get("repo_url").and_then(|v| v.as_str()),
        Some("https://github.com/acme/widget")
    );
    assert_eq!(
        tera_context.get("pythons").and_then(|v| v.as_array()).map(Vec::len),
        Some(5)
    );
}
