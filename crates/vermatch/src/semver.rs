//! Semver facade providing high-level string operations

use crate::constraint::ConstraintSet;
use crate::version::Version;

/// Main facade for string-level version operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint list.
    ///
    /// Malformed input on either side never satisfies.
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        let constraints = match ConstraintSet::parse(constraints) {
            Ok(c) => c,
            Err(_) => return false,
        };

        constraints.check(&version)
    }

    /// Return all versions that satisfy the given constraints
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let constraints = match ConstraintSet::parse(constraints) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter_map(|v| {
                let parsed = Version::parse(v).ok()?;
                if constraints.check(&parsed) {
                    Some(v.to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Parsed versions with their original index; unparsable entries are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies_positive() {
        assert!(Semver::satisfies("1.0.0", "1.0.0"));
        assert!(Semver::satisfies("1.0.0", "= 1.0"));
        assert!(Semver::satisfies("1.0.0+build", "1.0.0"));
        assert!(Semver::satisfies("1.0.1", "!= 1.0.0"));

        assert!(Semver::satisfies("1.0.0", ">=1.0.0"));
        assert!(Semver::satisfies("1.0.1", ">=1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">1.0.0"));
        assert!(Semver::satisfies("2.0.0", "<=2.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<2.0.0"));

        assert!(Semver::satisfies("1.0.1", ">=  1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">  1.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<    2.0.0"));

        assert!(Semver::satisfies("1.5.0", ">= 1.2, < 2.0"));
        assert!(Semver::satisfies("1.2.9", "~> 1.2.3"));
        assert!(Semver::satisfies("1.9.0", "~> 1.2"));
        assert!(Semver::satisfies("1.0.0-alpha.2", "> 1.0.0-alpha.1"));
        assert!(Semver::satisfies("1.2.3.5", "~> 1.2.3.4"));
    }

    #[test]
    fn test_satisfies_negative() {
        assert!(!Semver::satisfies("1.0.1", "1.0.0"));
        assert!(!Semver::satisfies("1.0.0", "!= 1.0.0+build"));
        assert!(!Semver::satisfies("0.9.9", ">=1.0.0"));
        assert!(!Semver::satisfies("1.0.0", ">1.0.0"));
        assert!(!Semver::satisfies("2.0.1", "<=2.0.0"));
        assert!(!Semver::satisfies("2.0.0", "<2.0.0"));

        assert!(!Semver::satisfies("2.0.0", ">= 1.2, < 2.0"));
        assert!(!Semver::satisfies("1.3.0", "~> 1.2.3"));
        assert!(!Semver::satisfies("2.0.0", "~> 1.2"));
        assert!(!Semver::satisfies("1.1.0-alpha", "> 1.0.0"));
        assert!(!Semver::satisfies("1.1.0-alpha.1", "> 1.0.0-alpha.1"));

        // Malformed input
        assert!(!Semver::satisfies("1.x", ">= 1.0"));
        assert!(!Semver::satisfies("1.0", ">= 1.x"));
        assert!(!Semver::satisfies("1.0", ""));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = ["1.0", "1.2", "1.9.9", "2.0", "1.5.0-beta", "foo"];
        assert_eq!(
            Semver::satisfied_by(&versions, ">= 1.2, < 2.0"),
            vec!["1.2", "1.9.9"]
        );
        assert!(Semver::satisfied_by(&versions, "^1.0").is_empty());
    }

    #[test]
    fn test_sort() {
        let versions = ["1.0", "0.7.1", "1.2.3", "2", "1.2.0-beta"];
        assert_eq!(Semver::sort(&versions), vec!["0.7.1", "1.0", "1.2.0-beta", "1.2.3", "2"]);
    }

    #[test]
    fn test_rsort() {
        let versions = ["1.0", "0.7.1", "bogus", "1.2.3", "2", "1.2.0-beta"];
        assert_eq!(Semver::rsort(&versions), vec!["2", "1.2.3", "1.2.0-beta", "1.0", "0.7.1"]);
    }
}
