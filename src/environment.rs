//! Best-effort reads of the local environment.
//!
//! A few context keys come from outside the answers: the local git identity,
//! the name of the repository the generator itself runs in, and local tool
//! version strings. These are synchronous external-process calls treated as
//! opaque, non-retrying reads: a failure yields an empty string (or a fixed
//! default), never a pipeline abort. Failures are logged at debug level so a
//! missing binary is diagnosable without being noisy.

use std::process::Command;
use std::sync::LazyLock;

use anyhow::{Context as _, Result, bail};
use regex::Regex;

/// Fallback when `poetry --version` is unavailable or unparseable.
const POETRY_VERSION_DEFAULT: &str = "1.8.2";

static POETRY_VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"version ([^)\s]+)").expect("static pattern compiles"));

/// Run `program args...` and capture trimmed stdout, degrading to `""`.
///
/// The binary is located through `PATH` first; a program that is not
/// installed, exits non-zero, or emits non-UTF-8 output all degrade the same
/// way.
#[must_use]
pub fn read_output(program: &str, args: &[&str]) -> String {
    match try_read_output(program, args) {
        Ok(output) => output,
        Err(err) => {
            tracing::debug!(program, err = %err, "environment read failed, using empty output");
            String::new()
        }
    }
}

fn try_read_output(program: &str, args: &[&str]) -> Result<String> {
    let binary = which::which(program).with_context(|| format!("'{program}' not in PATH"))?;
    let output = Command::new(binary)
        .args(args)
        .output()
        .with_context(|| format!("could not run '{program}'"))?;
    if !output.status.success() {
        bail!("'{program}' exited with {}", output.status);
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Read a value from the local git configuration (`git config <key>`).
#[must_use]
pub fn git_config(key: &str) -> String {
    read_output("git", &["config", key])
}

/// Name-with-owner of the repository the generator is currently running in,
/// via the `gh` CLI. Empty when `gh` is unavailable or the directory is not
/// a GitHub repository.
#[must_use]
pub fn gh_repo_name() -> String {
    read_output("gh", &["repo", "view", "--json", "nameWithOwner", "--jq", ".nameWithOwner"])
}

/// Version of the locally installed poetry, with a fixed default when the
/// binary is missing or its output does not match the expected banner.
#[must_use]
pub fn poetry_version() -> String {
    let banner = read_output("poetry", &["--version"]);
    POETRY_VERSION_PATTERN
        .captures(&banner)
        .and_then(|captures| captures.get(1))
        .map_or_else(
            || {
                tracing::debug!(%banner, "unrecognized poetry banner, using default version");
                POETRY_VERSION_DEFAULT.to_string()
            },
            |m| m.as_str().to_string(),
        )
}
