//! Parsed version value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::comparator::compare_versions;
use crate::version_parser::{parse_version, VersionParserError};

/// A parsed version: numeric segments plus optional pre-release and metadata.
///
/// Ordering and equality ignore metadata, so `1.0.0+a == 1.0.0+b`.
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<u32>,
    specified: usize,
    prerelease: String,
    metadata: String,
    original: String,
}

impl Version {
    pub(crate) fn from_parts(
        mut segments: Vec<u32>,
        prerelease: String,
        metadata: String,
        original: String,
    ) -> Self {
        let specified = segments.len();
        while segments.len() < 3 {
            segments.push(0);
        }

        Version {
            segments,
            specified,
            prerelease,
            metadata,
            original,
        }
    }

    /// Parse a version string
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        parse_version(version)
    }

    /// Numeric segments, always at least three long.
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    /// Number of numeric segments written in the source text, before padding.
    pub fn specified_segments(&self) -> usize {
        self.specified
    }

    /// Pre-release identifiers (after `-`), empty when absent.
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Build metadata (after `+`), empty when absent.
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// The text this version was parsed from.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Compare with another version, ignoring metadata
    pub fn compare(&self, other: &Version) -> Ordering {
        compare_versions(self, other)
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn less_than_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Greater
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn greater_than_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Less
    }

    pub fn equal(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Rebuild a version from parts that already passed validation.
    pub(crate) fn rebuild(segments: Vec<u32>, prerelease: String, metadata: String) -> Self {
        let mut version = Version::from_parts(segments, prerelease, metadata, String::new());
        version.original = version.to_string();
        version
    }

    pub(crate) fn into_parts(self) -> (Vec<u32>, String, String) {
        (self.segments, self.prerelease, self.metadata)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Trailing zero segments do not affect equality
        let significant = self
            .segments
            .iter()
            .rposition(|&s| s != 0)
            .map_or(0, |i| i + 1);
        self.segments[..significant].hash(state);
        self.prerelease.hash(state);
    }
}
