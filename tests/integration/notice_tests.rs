//! Provenance notices rendered against a composed context.

use skelgen::answers::{Answers, GenerationMode, PriorAnswers};
use skelgen::provenance::{decode_path, notice, origin_path};
use skelgen::hooks::Composer;
use skelgen::templating::register_filters;

fn composed() -> skelgen::context::Context {
    let answers = Answers {
        github: "acme".to_string(),
        repo: "widget".to_string(),
        description: String::new(),
        visibility: "public".to_string(),
        python: "3.12".to_string(),
        pypy: false,
        license_name: "MIT".to_string(),
        docs_slug: None,
        dist_name: None,
        src_path: Some("gh://acme/skeleton".to_string()),
        self_test: false,
    };
    Composer::standard()
        .compose(&answers, &PriorAnswers::pinned("abc123"), GenerationMode::Create)
        .unwrap()
}

#[test]
fn notice_built_from_composed_provenance_keys() {
    let ctx = composed();
    let body = notice(
        Some("docs/index.md"),
        ctx.require_str("snref").unwrap(),
        ctx.require_str("srev").unwrap(),
        "file",
    );
    assert_eq!(
        body,
        "This file was generated from acme/skeleton@abc123.\n\
         Instead of changing this particular file, you might want to alter the template:\n\
         https://github.com/acme/skeleton/tree/abc123/docs/index.md"
    );
}

#[test]
fn reserved_characters_round_trip_through_the_notice_url() {
    let ctx = composed();
    let original = "docs/release notes#final.md";
    let body = notice(
        Some(original),
        ctx.require_str("snref").unwrap(),
        ctx.require_str("srev").unwrap(),
        "file",
    );
    let url_path = body
        .rsplit_once("tree/abc123/")
        .map(|(_, path)| path)
        .unwrap();
    assert_eq!(decode_path(url_path), original);
}

#[test]
fn notice_renders_through_the_template_engine() {
    let ctx = composed();
    let mut tera = tera::Tera::default();
    register_filters(&mut tera);

    let mut engine_ctx = ctx.to_tera();
    engine_ctx.insert("_origin", &origin_path("/tmp/copier.x1/docs/index.md".as_ref()));

    let rendered = tera
        .render_str("{{ _origin | skeleton_notice(snref=snref, srev=srev) }}", &engine_ctx)
        .unwrap();
    assert!(rendered.contains("generated from acme/skeleton@abc123"));
    assert!(rendered.ends_with("tree/abc123/docs/index.md"));
}

#[test]
fn pathless_notice_for_directory_scope() {
    let ctx = composed();
    let body = notice(None, ctx.require_str("snref").unwrap(), ctx.require_str("srev").unwrap(), "directory");
    assert!(body.starts_with("This directory was generated from a template file."));
    assert!(body.ends_with("https://github.com/acme/skeleton/tree/abc123"));
}
