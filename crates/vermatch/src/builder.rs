//! Builder for deriving new versions from an existing one

use crate::version::Version;
use crate::version_parser::{validate_identifiers, VersionParserError};

/// Produces bumped copies of a [`Version`]; the source version is never touched.
///
/// Bumping a pre-release only drops the pre-release tag: the next patch of
/// `1.2.3-rc.1` is `1.2.3`, not `1.2.4`.
#[derive(Debug, Clone)]
pub struct VersionBuilder {
    segments: Vec<u32>,
    prerelease: String,
    metadata: String,
}

impl VersionBuilder {
    pub fn new(version: &Version) -> Self {
        Self::from(version.clone())
    }

    pub fn next_major(&mut self) -> &mut Self {
        self.bump(0)
    }

    pub fn next_minor(&mut self) -> &mut Self {
        self.bump(1)
    }

    pub fn next_patch(&mut self) -> &mut Self {
        self.bump(2)
    }

    fn bump(&mut self, index: usize) -> &mut Self {
        if !self.prerelease.is_empty() {
            self.prerelease.clear();
            return self;
        }

        self.segments[index] = self.segments[index].saturating_add(1);
        for segment in &mut self.segments[index + 1..] {
            *segment = 0;
        }
        self
    }

    pub fn set_prerelease(&mut self, prerelease: &str) -> Result<&mut Self, VersionParserError> {
        validate_identifiers(prerelease)?;
        self.prerelease = prerelease.to_string();
        Ok(self)
    }

    pub fn reset_prerelease(&mut self) -> &mut Self {
        self.prerelease.clear();
        self
    }

    pub fn set_metadata(&mut self, metadata: &str) -> Result<&mut Self, VersionParserError> {
        validate_identifiers(metadata)?;
        self.metadata = metadata.to_string();
        Ok(self)
    }

    pub fn reset_metadata(&mut self) -> &mut Self {
        self.metadata.clear();
        self
    }

    /// Produce the resulting version
    pub fn build(&self) -> Version {
        Version::rebuild(
            self.segments.clone(),
            self.prerelease.clone(),
            self.metadata.clone(),
        )
    }
}

impl From<Version> for VersionBuilder {
    fn from(version: Version) -> Self {
        let (segments, prerelease, metadata) = version.into_parts();
        VersionBuilder {
            segments,
            prerelease,
            metadata,
        }
    }
}
