//! Version parsing, ordering and constraint matching
//!
//! This crate parses dotted numeric versions with optional pre-release and
//! metadata suffixes, orders them, and matches them against comma-separated
//! constraint lists such as `>= 1.2, < 2.0` or `~> 1.2.3`.

pub mod constraint;
mod builder;
mod collection;
mod comparator;
mod semver;
mod version;
mod version_parser;

pub use builder::VersionBuilder;
pub use collection::{sort_versions, VersionCollection};
pub use comparator::{compare_prerelease, compare_segments, compare_versions, Comparator};
pub use constraint::{Constraint, ConstraintSet, InvalidOperatorError, Operator};
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{is_valid, parse_version, validate_identifiers, VersionParserError};

/// Parse a comma-separated constraint list
pub fn parse_constraints(constraints: &str) -> Result<ConstraintSet, VersionParserError> {
    ConstraintSet::parse(constraints)
}
