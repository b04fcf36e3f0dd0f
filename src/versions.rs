//! Supported-version matrix generation.
//!
//! The user answers a single "minimum supported version" floor (for example
//! `"3.9"`); this module expands it into the full ordered set of supported
//! runtime versions up to the latest known release, plus the two derived
//! subsets templates need:
//!
//! - **full matrix**: floor through latest inclusive, one minor step apart
//! - **outermost matrix**: only the floor and latest boundary entries, for
//!   min/max compatibility declarations
//! - **intermediate matrix**: everything strictly between, for exhaustive
//!   test-matrix generation
//!
//! When the PyPy flag is set, one synthetic alternate-runtime entry (pinned
//! to [`LATEST_PYPY`]) is interleaved where its reference version naturally
//! falls, but only when that version lies strictly inside the floor..latest
//! range. Ordering is total: entries sort by `(version, is_alternate)`, so
//! the PyPy entry follows its same-version numeric counterpart.
//!
//! Generation is deterministic: for the same floor and flag the output is
//! byte-identical across runs. Major-version rollovers are not modeled.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::ser::SerializeTuple;

use crate::core::SkelgenError;

/// Latest known reference-runtime release line.
pub const LATEST_PYTHON: VersionTuple = VersionTuple {
    major: 3,
    minor: 12,
};

/// Reference version of the alternate (PyPy) runtime entry.
pub const LATEST_PYPY: VersionTuple = VersionTuple {
    major: 3,
    minor: 10,
};

/// One minor version past the latest known release, used by templates that
/// declare an exclusive upper bound.
pub const PYTHON_AHEAD: VersionTuple = VersionTuple {
    major: 3,
    minor: 13,
};

/// A `(major, minor)` runtime release line, totally ordered lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VersionTuple {
    /// Major version component
    pub major: u32,
    /// Minor version component
    pub minor: u32,
}

impl VersionTuple {
    /// The next minor release line on the same major.
    #[must_use]
    pub const fn next_minor(self) -> Self {
        Self {
            major: self.major,
            minor: self.minor + 1,
        }
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for VersionTuple {
    type Err = SkelgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SkelgenError::InvalidVersionFloor {
            value: s.to_string(),
        };
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            major: major.trim().parse().map_err(|_| invalid())?,
            minor: minor.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// One entry of a version matrix: a release line, possibly the synthetic
/// alternate-runtime variant.
///
/// Sorts by `(version, alternate)`: the alternate entry comes directly after
/// the numeric entry of the same version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionEntry {
    /// The release line this entry covers
    pub version: VersionTuple,
    /// Whether this is the alternate-runtime (PyPy) entry
    pub alternate: bool,
}

impl VersionEntry {
    /// Numeric entry for a release line.
    #[must_use]
    pub const fn numeric(version: VersionTuple) -> Self {
        Self {
            version,
            alternate: false,
        }
    }

    /// The alternate-runtime entry at its fixed reference version.
    #[must_use]
    pub const fn alternate_runtime() -> Self {
        Self {
            version: LATEST_PYPY,
            alternate: true,
        }
    }

    /// Runtime label as templates spell it: `"3"` or `"pypy3"`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.alternate {
            format!("pypy{}", self.version.major)
        } else {
            self.version.major.to_string()
        }
    }
}

impl fmt::Display for VersionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label(), self.version.minor)
    }
}

// Serialized as a ("label", minor) pair, which is the shape template loops
// destructure.
impl Serialize for VersionEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.label())?;
        tuple.serialize_element(&self.version.minor)?;
        tuple.end()
    }
}

/// Every version from the floor up to and including [`LATEST_PYTHON`].
#[must_use]
pub fn full_matrix(floor: VersionTuple, pypy: bool) -> Vec<VersionEntry> {
    generate(floor, pypy, true, true)
}

/// Only the floor and latest boundary entries (one entry if they coincide).
#[must_use]
pub fn outermost_matrix(floor: VersionTuple, pypy: bool) -> Vec<VersionEntry> {
    generate(floor, pypy, false, true)
}

/// Everything strictly between floor and latest.
#[must_use]
pub fn intermediate_matrix(floor: VersionTuple, pypy: bool) -> Vec<VersionEntry> {
    generate(floor, pypy, true, false)
}

fn generate(
    floor: VersionTuple,
    pypy: bool,
    intermediate: bool,
    outermost: bool,
) -> Vec<VersionEntry> {
    let mut entries = Vec::new();
    if outermost {
        entries.push(VersionEntry::numeric(floor));
    }
    let mut current = floor;
    while current < LATEST_PYTHON {
        current = current.next_minor();
        let at_latest = current == LATEST_PYTHON;
        if (at_latest && outermost) || (!at_latest && intermediate) {
            entries.push(VersionEntry::numeric(current));
        }
        // The alternate entry never sits on a boundary: it only appears when
        // its reference version is strictly inside the floor..latest range.
        if pypy && current == LATEST_PYPY && intermediate {
            entries.push(VersionEntry::alternate_runtime());
        }
    }
    entries.sort();
    entries
}
