//! Composer ordering validation.

use skelgen::context::{Context, KeyMap};
use skelgen::core::{Result, SkelgenError};
use skelgen::hooks::{
    CommandsHook, Composer, ContextHook, ProjectUrlsHook, PythonVersionsHook, SkeletonHook,
    SnapshotHook, VisibilityHook,
};

/// A hook that reads a key only the URL deriver writes.
struct ReadsRepoUrl;

impl ContextHook for ReadsRepoUrl {
    fn name(&self) -> &'static str {
        "reads-repo-url"
    }

    fn runs_on_update(&self) -> bool {
        true
    }

    fn reads(&self) -> &'static [&'static str] {
        &["repo_url"]
    }

    fn writes(&self) -> &'static [&'static str] {
        &["repo_badge"]
    }

    fn run(&self, ctx: &mut Context, keys: &mut KeyMap) -> Result<()> {
        let url = ctx.require_str(&keys.get("repo_url"))?.to_string();
        ctx.insert(keys.get("repo_badge"), format!("{url}/badge.svg"));
        Ok(())
    }
}

#[test]
fn misordered_pipeline_fails_at_construction() {
    let err = Composer::new(vec![Box::new(ReadsRepoUrl), Box::new(ProjectUrlsHook)]).unwrap_err();
    assert_eq!(
        err,
        SkelgenError::OrderingViolation {
            hook: "reads-repo-url".to_string(),
            key: "repo_url".to_string(),
        }
    );
}

#[test]
fn ordering_is_validated_for_update_mode_too() {
    // In update mode the visibility hook is skipped, so an update-applicable
    // hook reading `public` has no provider even though the create-mode order
    // is fine.
    struct ReadsPublicOnUpdate;

    impl ContextHook for ReadsPublicOnUpdate {
        fn name(&self) -> &'static str {
            "reads-public-on-update"
        }

        fn runs_on_update(&self) -> bool {
            true
        }

        fn reads(&self) -> &'static [&'static str] {
            &["public"]
        }

        fn run(&self, _ctx: &mut Context, _keys: &mut KeyMap) -> Result<()> {
            Ok(())
        }
    }

    let err = Composer::new(vec![Box::new(VisibilityHook), Box::new(ReadsPublicOnUpdate)])
        .unwrap_err();
    assert_eq!(
        err,
        SkelgenError::OrderingViolation {
            hook: "reads-public-on-update".to_string(),
            key: "public".to_string(),
        }
    );
}

#[test]
fn custom_hook_after_its_dependency_is_accepted() {
    let composer =
        Composer::new(vec![Box::new(ProjectUrlsHook), Box::new(ReadsRepoUrl)]).unwrap();
    assert_eq!(composer.hook_names().count(), 2);
}

#[test]
fn standard_pipeline_constructs_and_orders_every_step() {
    let composer = Composer::standard();
    let names: Vec<_> = composer.hook_names().collect();
    assert_eq!(
        names,
        vec![
            "skeleton",
            "project-urls",
            "python-versions",
            "visibility",
            "commands",
            "git-identity",
            "tool-versions",
            "snapshot",
        ]
    );
}

#[test]
fn every_standard_hook_declares_disjoint_write_sets() {
    // Keys are globally unique within one render pass: no two steps may
    // claim the same output key.
    let hooks: Vec<Box<dyn ContextHook>> = vec![
        Box::new(SkeletonHook::default()),
        Box::new(ProjectUrlsHook),
        Box::new(PythonVersionsHook),
        Box::new(VisibilityHook),
        Box::new(CommandsHook),
        Box::new(SnapshotHook),
    ];
    let mut seen = std::collections::HashSet::new();
    for hook in &hooks {
        for key in hook.writes() {
            assert!(seen.insert(*key), "key '{key}' written by more than one hook");
        }
    }
}
