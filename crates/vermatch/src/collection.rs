//! Sortable collection of versions

use std::ops::Index;

use crate::version::Version;

/// Sort versions in ascending order, in place
pub fn sort_versions(versions: &mut [Version]) {
    versions.sort();
}

/// A list of versions ordered by [`Version::compare`].
#[derive(Debug, Clone, Default)]
pub struct VersionCollection(Vec<Version>);

impl VersionCollection {
    pub fn new(versions: Vec<Version>) -> Self {
        VersionCollection(versions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the version at `i` sorts before the one at `j`
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].less_than(&self.0[j])
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Sort ascending; equal versions keep their relative order.
    pub fn sort(&mut self) {
        self.0.sort();
    }

    /// Sort descending
    pub fn rsort(&mut self) {
        self.0.sort_by(|a, b| b.cmp(a));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Version> {
        self.0
    }
}

impl Index<usize> for VersionCollection {
    type Output = Version;

    fn index(&self, index: usize) -> &Version {
        &self.0[index]
    }
}

impl FromIterator<Version> for VersionCollection {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        VersionCollection(iter.into_iter().collect())
    }
}

impl From<Vec<Version>> for VersionCollection {
    fn from(versions: Vec<Version>) -> Self {
        VersionCollection(versions)
    }
}

impl IntoIterator for VersionCollection {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
