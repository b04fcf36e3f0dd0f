//! Provenance capture and the "generated from" notice.
//!
//! Generated files carry a comment pointing back at the exact upstream
//! template source they were rendered from, so contributors edit the template
//! instead of the generated copy. A provenance record is the upstream
//! template identifier (`name@ref`), its pinned revision URL, and optionally
//! the file's path relative to the template root.
//!
//! Paths arrive from the rendering pipeline with a fixed-depth directory
//! prefix that is an artifact of how the engine stages templates on disk;
//! [`origin_path`] strips it before the path is recorded.

use std::borrow::Cow;
use std::path::Path;

/// Number of leading path components added by the rendering pipeline's
/// staging layout, meaningless to the end user.
const ORIGIN_PREFIX_DEPTH: usize = 3;

/// Strip the rendering-pipeline prefix from a template file path.
///
/// Returns the template-relative path with forward-slash separators, or
/// `None` when nothing remains after the prefix (the file sits inside the
/// staging scaffolding itself).
///
/// # Examples
///
/// ```rust
/// use skelgen::provenance::origin_path;
///
/// let path = origin_path("/tmp/copier.x1/project/README.md".as_ref());
/// assert_eq!(path.as_deref(), Some("project/README.md"));
/// ```
#[must_use]
pub fn origin_path(rendered: &Path) -> Option<String> {
    let parts: Vec<Cow<'_, str>> =
        rendered.components().skip(ORIGIN_PREFIX_DEPTH).map(|c| c.as_os_str().to_string_lossy()).collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Format the human-readable "generated from" notice body.
///
/// With a `path`, points at the exact template file under the pinned revision
/// URL; without one, produces the directory-scope variant pointing only at
/// the revision. `scope` names what was generated ("file" by default at call
/// sites, "directory" for directory-level notices).
///
/// The path is percent-encoded segment by segment, so reserved characters
/// (spaces, `#`, `?`) become a clickable URL while `/` separators survive.
///
/// # Examples
///
/// ```rust
/// use skelgen::provenance::notice;
///
/// let body = notice(
///     Some("project/README.md"),
///     "acme/skeleton@abc123",
///     "https://github.com/acme/skeleton/tree/abc123",
///     "file",
/// );
/// assert!(body.ends_with("tree/abc123/project/README.md"));
/// ```
#[must_use]
pub fn notice(path: Option<&str>, snref: &str, srev: &str, scope: &str) -> String {
    match path {
        Some(path) => format!(
            "This {scope} was generated from {snref}.\n\
             Instead of changing this particular file, you might want to alter the template:\n\
             {srev}/{}",
            encode_path(path)
        ),
        None => format!(
            "This {scope} was generated from a template file.\n\
             Instead of changing this particular file, you might want to alter the template \
             somewhere in:\n\
             {srev}"
        ),
    }
}

/// Percent-encode a template-relative path, preserving `/` separators.
#[must_use]
pub fn encode_path(path: &str) -> String {
    path.split('/').map(|segment| urlencoding::encode(segment).into_owned()).collect::<Vec<_>>().join("/")
}

/// Recover the original path from its encoded form.
///
/// Inverse of [`encode_path`]; exposed so tests and tooling can verify the
/// notice URL round-trips to the exact source path.
#[must_use]
pub fn decode_path(encoded: &str) -> String {
    urlencoding::decode(encoded).map_or_else(|_| encoded.to_string(), Cow::into_owned)
}
