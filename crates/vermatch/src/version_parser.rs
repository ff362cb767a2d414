//! Version parsing module

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::version::Version;

/// Error type for version and constraint parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("malformed version: {0}")]
    MalformedVersion(String),
    #[error("malformed constraint: {constraint}")]
    MalformedConstraint { constraint: String, reason: String },
}

/// Unanchored version grammar, shared by the version and constraint regexes.
pub(crate) const VERSION_PATTERN: &str = concat!(
    r"([0-9]+(?:\.[0-9]+)*)",
    r"(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
    r"(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
);

/// Operator alternatives, longest first so `>=` is never read as `>` followed by `=`.
pub(crate) const OPERATOR_PATTERN: &str = r">=|<=|!=|~>|=|>|<|";

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(&format!(r"^{}$", VERSION_PATTERN)).unwrap();

    static ref IDENTIFIERS_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*$").unwrap();

    pub(crate) static ref CONSTRAINT_RE: Regex = Regex::new(&format!(
        r"^[ \t\n\f\r]*({})[ \t\n\f\r]*({})[ \t\n\f\r]*$",
        OPERATOR_PATTERN, VERSION_PATTERN
    ))
    .unwrap();
}

/// Parse a version string such as `1.2.3-beta.1+build.5`.
///
/// Missing trailing segments are padded with zeros up to three segments;
/// versions with more than three segments keep all of them.
pub fn parse_version(version: &str) -> Result<Version, VersionParserError> {
    let caps = VERSION_RE
        .captures(version)
        .ok_or_else(|| VersionParserError::MalformedVersion(version.to_string()))?;

    let core = caps.get(1).map_or("", |m| m.as_str());
    let prerelease = caps.get(2).map_or("", |m| m.as_str());
    let metadata = caps.get(3).map_or("", |m| m.as_str());

    let segments = parse_segments(core)
        .ok_or_else(|| VersionParserError::MalformedVersion(version.to_string()))?;

    Ok(Version::from_parts(
        segments,
        prerelease.to_string(),
        metadata.to_string(),
        version.to_string(),
    ))
}

/// Check if a version string is valid
pub fn is_valid(version: &str) -> bool {
    parse_version(version).is_ok()
}

/// Check a dot-separated identifier list, as used for pre-release and metadata.
pub fn validate_identifiers(identifiers: &str) -> Result<(), VersionParserError> {
    if IDENTIFIERS_RE.is_match(identifiers) {
        Ok(())
    } else {
        Err(VersionParserError::MalformedVersion(identifiers.to_string()))
    }
}

/// Segments must fit a signed 32-bit integer.
fn parse_segments(core: &str) -> Option<Vec<u32>> {
    let mut segments = Vec::with_capacity(3);
    for part in core.split('.') {
        let segment = part.parse::<i32>().ok()?;
        segments.push(u32::try_from(segment).ok()?);
    }
    Some(segments)
}
