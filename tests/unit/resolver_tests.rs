//! Placeholder-key resolver behavior across a whole render pass.

use skelgen::answers::{Answers, GenerationMode, PriorAnswers};
use skelgen::context::KeyMap;
use skelgen::hooks::{Composer, ContextHook, ProjectUrlsHook};

fn answers() -> Answers {
    Answers {
        github: "acme".to_string(),
        repo: "widget".to_string(),
        description: "A widget".to_string(),
        visibility: "public".to_string(),
        python: "3.11".to_string(),
        pypy: false,
        license_name: "MIT".to_string(),
        docs_slug: None,
        dist_name: None,
        src_path: Some("gh://acme/skeleton".to_string()),
        self_test: false,
    }
}

#[test]
fn repeated_lookups_return_the_identical_value() {
    let mut keys = KeyMap::new();
    let values: Vec<String> = (0..4).map(|_| keys.get("foo")).collect();
    assert!(values.iter().all(|v| v == "foo"));
    assert_eq!(keys.len(), 1);
}

#[test]
fn unset_name_resolves_to_itself() {
    let mut keys = KeyMap::new();
    assert_eq!(keys.get("never_registered"), "never_registered");
}

#[test]
fn aliases_redirect_hook_output_without_touching_the_hook() {
    let mut ctx = answers().seed(&PriorAnswers::default());
    let mut keys = KeyMap::new();
    keys.set("repo_url", "repository_url");
    ProjectUrlsHook.run(&mut ctx, &mut keys).unwrap();

    assert_eq!(
        ctx.require_str("repository_url").unwrap(),
        "https://github.com/acme/widget"
    );
    assert!(!ctx.contains("repo_url"));
    // Unaliased names degrade to literal key names, never to failure.
    assert_eq!(
        ctx.require_str("coverage_url").unwrap(),
        "https://coverage-badge.samuelcolvin.workers.dev/redirect/acme/widget"
    );
}

#[test]
fn composed_context_is_stable_across_runs() {
    let composer = Composer::standard();
    let prior = PriorAnswers::pinned("abc123");
    let a = composer.compose(&answers(), &prior, GenerationMode::Update).unwrap();
    let b = composer.compose(&answers(), &prior, GenerationMode::Update).unwrap();
    // Update mode runs only the pure derivation steps, so the result is a
    // pure function of the answers.
    assert_eq!(a, b);
}
