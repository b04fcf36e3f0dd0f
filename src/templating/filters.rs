//! Custom Tera filters for skeleton templates.
//!
//! Two filters are exposed to template files:
//!
//! - `kebabify` - case-folds and kebab-cases a name
//!   (`{{ repo | kebabify }}`)
//! - `skeleton_notice` - formats the provenance notice for the file being
//!   rendered (`{{ _origin | skeleton_notice(snref=snref, srev=srev) }}`)

use std::collections::HashMap;

use serde_json::Value;
use tera::Tera;

use crate::provenance;

/// Lowercase a name and replace underscores with hyphens.
///
/// Used to derive URL slugs and distribution names from repository names.
#[must_use]
pub fn kebabify(value: &str) -> String {
    value.to_lowercase().replace('_', "-")
}

/// Register all skelgen filters on a Tera instance.
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter("kebabify", kebabify_filter);
    tera.register_filter("skeleton_notice", skeleton_notice_filter);
}

fn kebabify_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let input = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("kebabify expects a string value"))?;
    Ok(Value::String(kebabify(input)))
}

fn skeleton_notice_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    // A null value means the rendered file has no template-relative origin;
    // the notice then points at the revision only.
    let path = match value {
        Value::Null => None,
        Value::String(path) => Some(path.as_str()),
        _ => return Err(tera::Error::msg("skeleton_notice expects a path or null")),
    };
    let snref = require_str_arg(args, "snref")?;
    let srev = require_str_arg(args, "srev")?;
    let scope = args.get("scope").and_then(Value::as_str).unwrap_or("file");
    Ok(Value::String(provenance::notice(path, snref, srev, scope)))
}

fn require_str_arg<'a>(args: &'a HashMap<String, Value>, name: &str) -> tera::Result<&'a str> {
    args.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg(format!("skeleton_notice requires the '{name}' argument")))
}
