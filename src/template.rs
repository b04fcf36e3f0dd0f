//! Explicit `${name}` substitution for URL and notice templates.
//!
//! Every derived URL is built by substituting named placeholders into a fixed
//! template string. Unlike generic string formatting, substitution here fails
//! explicitly with [`SkelgenError::MissingVariable`] when a placeholder has no
//! context value - a malformed URL in generated output is a correctness
//! defect, so the failure propagates and aborts the run.
//!
//! Syntax:
//! - `${name}` substitutes the context value of `name`
//! - `$$` is a literal `$`
//! - any other text copies through verbatim

use crate::context::Context;
use crate::core::{Result, SkelgenError, suggest_similar};

/// Substitute `${name}` placeholders in `template` from `ctx`.
///
/// Placeholder names must resolve to scalar context values (strings,
/// booleans, numbers); anything else counts as missing.
///
/// # Errors
///
/// Returns [`SkelgenError::MissingVariable`] for the first placeholder with
/// no scalar value, carrying suggestions for close key names.
///
/// # Examples
///
/// ```rust
/// use skelgen::context::Context;
/// use skelgen::template::substitute;
///
/// let mut ctx = Context::new();
/// ctx.insert("github", "acme");
/// ctx.insert("repo", "widget");
///
/// let url = substitute("https://github.com/${github}/${repo}", &ctx).unwrap();
/// assert_eq!(url, "https://github.com/acme/widget");
/// ```
pub fn substitute(template: &str, ctx: &Context) -> Result<String> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != '$' {
            output.push(c);
            continue;
        }
        match chars.peek() {
            Some((_, '$')) => {
                chars.next();
                output.push('$');
            }
            Some((_, '{')) => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for (_, nc) in chars.by_ref() {
                    if nc == '}' {
                        closed = true;
                        break;
                    }
                    name.push(nc);
                }
                if !closed || name.is_empty() {
                    // Unterminated or empty placeholder: treat the whole
                    // remainder as an unknown variable rather than guessing.
                    return Err(missing(&template[start..], template, ctx));
                }
                match ctx.substitution_value(&name) {
                    Some(value) => output.push_str(&value),
                    None => return Err(missing(&name, template, ctx)),
                }
            }
            _ => output.push('$'),
        }
    }

    Ok(output)
}

fn missing(variable: &str, template: &str, ctx: &Context) -> SkelgenError {
    SkelgenError::MissingVariable {
        variable: variable.to_string(),
        template: template.to_string(),
        suggestions: suggest_similar(variable, ctx.keys().map(str::to_string)),
    }
}
