//! Single version constraint implementation

use std::cmp::Ordering;
use std::fmt;

use super::Operator;
use crate::comparator::{compare_segments, compare_versions};
use crate::version::Version;
use crate::version_parser::{parse_version, VersionParserError, CONSTRAINT_RE};

/// A single version constraint (e.g., ">= 1.0.0")
#[derive(Debug, Clone)]
pub struct Constraint {
    operator: Operator,
    version: Version,
    original: String,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(operator: Operator, version: Version) -> Self {
        let original = format!("{}{}", operator.as_str(), version);
        Constraint {
            operator,
            version,
            original,
        }
    }

    /// Parse a single constraint such as `>= 1.2` or `~> 1.2.3`
    pub fn parse(constraint: &str) -> Result<Self, VersionParserError> {
        let malformed = |reason: String| VersionParserError::MalformedConstraint {
            constraint: constraint.to_string(),
            reason,
        };

        let caps = CONSTRAINT_RE
            .captures(constraint)
            .ok_or_else(|| malformed("expected an operator followed by a version".to_string()))?;

        let operator_str = caps.get(1).map_or("", |m| m.as_str());
        let operator = Operator::from_str(operator_str).map_err(|e| malformed(e.to_string()))?;

        let version_str = caps.get(2).map_or("", |m| m.as_str());
        let version = parse_version(version_str).map_err(|e| malformed(e.to_string()))?;

        Ok(Constraint {
            operator,
            version,
            original: constraint.to_string(),
        })
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the reference version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The text this constraint was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns true if the reference version carries a pre-release
    pub fn is_prerelease(&self) -> bool {
        self.version.is_prerelease()
    }

    /// Check if the given version satisfies this constraint
    pub fn check(&self, version: &Version) -> bool {
        let reference = &self.version;
        match self.operator {
            Operator::Equal => version.equal(reference),
            Operator::NotEqual => !version.equal(reference),
            Operator::GreaterThan => {
                prerelease_check(version, reference)
                    && compare_versions(version, reference) == Ordering::Greater
            }
            Operator::LessThan => {
                prerelease_check(version, reference)
                    && compare_versions(version, reference) == Ordering::Less
            }
            Operator::GreaterThanOrEqual => {
                prerelease_check(version, reference)
                    && compare_versions(version, reference) != Ordering::Less
            }
            Operator::LessThanOrEqual => {
                prerelease_check(version, reference)
                    && compare_versions(version, reference) != Ordering::Greater
            }
            Operator::Pessimistic => pessimistic_check(version, reference),
        }
    }
}

/// A pre-release constraint only admits pre-releases of the same segments;
/// a release constraint never admits a pre-release.
fn prerelease_check(version: &Version, reference: &Version) -> bool {
    match (version.is_prerelease(), reference.is_prerelease()) {
        (true, true) => compare_segments(version.segments(), reference.segments()) == Ordering::Equal,
        (true, false) => false,
        (false, _) => true,
    }
}

pub(crate) fn pessimistic_check(version: &Version, reference: &Version) -> bool {
    if !prerelease_check(version, reference) {
        return false;
    }
    if reference.is_prerelease() && !version.is_prerelease() {
        return false;
    }

    if version.less_than(reference) {
        return false;
    }

    let wanted = reference.segments();
    let actual = version.segments();
    if wanted.len() > actual.len() {
        return false;
    }

    // Everything before the last written segment is pinned
    let last = reference.specified_segments().max(1) - 1;
    if wanted[..last] != actual[..last] {
        return false;
    }

    actual[last] >= wanted[last]
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.operator == other.operator && self.version.equal(&other.version)
    }
}

impl Eq for Constraint {}

impl PartialOrd for Constraint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Constraint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.operator
            .cmp(&other.operator)
            .then_with(|| self.version.compare(&other.version))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Constraint {
        Constraint::parse(s).unwrap()
    }

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse() {
        let constraint = c(">= 1.2");
        assert_eq!(constraint.operator(), Operator::GreaterThanOrEqual);
        assert_eq!(constraint.version().segments(), &[1, 2, 0]);
        assert_eq!(constraint.original(), ">= 1.2");

        assert_eq!(c("1.0").operator(), Operator::Equal);
        assert_eq!(c("=1.0").operator(), Operator::Equal);
        assert_eq!(c(" != 1.0 ").operator(), Operator::NotEqual);
        assert_eq!(c("~>1.2.3").operator(), Operator::Pessimistic);
        assert_eq!(c("<1.0-beta").operator(), Operator::LessThan);
        assert_eq!(c("<=1.0+build").version().metadata(), "build");
    }

    #[test]
    fn test_parse_fails() {
        assert!(Constraint::parse(">= 1.x").is_err());
        assert!(Constraint::parse("=> 1.0").is_err());
        assert!(Constraint::parse("== 1.0").is_err());
        assert!(Constraint::parse("^1.0").is_err());
        assert!(Constraint::parse(">=").is_err());
        assert!(Constraint::parse("").is_err());
        assert!(Constraint::parse("1.0 2.0").is_err());
        assert!(Constraint::parse(">= 99999999999.0").is_err());
    }

    #[test]
    fn test_parse_error_message() {
        let err = Constraint::parse(">= 1.x").unwrap_err();
        assert_eq!(err.to_string(), "malformed constraint: >= 1.x");
        match err {
            VersionParserError::MalformedConstraint { reason, .. } => assert!(!reason.is_empty()),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = Constraint::parse(">=\u{00A0}1.0").unwrap_err();
        assert_eq!(err.to_string(), "malformed constraint: >=\u{00A0}1.0");
    }

    #[test]
    fn test_equal() {
        assert!(c("= 1.0").check(&v("1.0.0")));
        assert!(c("1.0").check(&v("1.0.0+build")));
        assert!(!c("1.0").check(&v("1.0.1")));
        assert!(c("1.0.0-beta").check(&v("1.0.0-beta")));
        assert!(!c("1.0.0-beta").check(&v("1.0.0")));
    }

    #[test]
    fn test_not_equal() {
        assert!(c("!= 1.0").check(&v("1.0.1")));
        assert!(!c("!= 1.0").check(&v("1.0.0")));
        assert!(c("!= 1.0").check(&v("1.0.0-beta")));
    }

    #[test]
    fn test_ordering_operators() {
        assert!(c("> 1.0").check(&v("1.1")));
        assert!(!c("> 1.0").check(&v("1.0")));
        assert!(c(">= 1.0").check(&v("1.0")));
        assert!(c("< 1.0").check(&v("0.9")));
        assert!(!c("< 1.0").check(&v("1.0")));
        assert!(c("<= 1.0").check(&v("1.0")));
        assert!(!c("<= 1.0").check(&v("1.0.1")));
    }

    #[test]
    fn test_prerelease_gating() {
        assert!(!c("> 1.0.0").check(&v("1.1.0-alpha")));
        assert!(!c("< 2.0.0").check(&v("1.1.0-alpha")));
        assert!(c("> 1.0.0-alpha.1").check(&v("1.0.0-alpha.2")));
        assert!(!c("> 1.0.0-alpha.1").check(&v("1.1.0-alpha.1")));
        assert!(c("> 1.0.0-alpha.1").check(&v("1.0.0")));
        assert!(c("< 1.0.0-beta").check(&v("1.0.0-alpha")));
        assert!(c(">= 1.0.0-beta").check(&v("1.0.0-beta")));
    }

    #[test]
    fn test_pessimistic() {
        let tilde = c("~> 1.2.3");
        assert!(tilde.check(&v("1.2.3")));
        assert!(tilde.check(&v("1.2.9")));
        assert!(!tilde.check(&v("1.3.0")));
        assert!(!tilde.check(&v("1.2.2")));

        let tilde = c("~> 1.2");
        assert!(tilde.check(&v("1.2.0")));
        assert!(tilde.check(&v("1.5.0")));
        assert!(tilde.check(&v("1.9.7")));
        assert!(!tilde.check(&v("2.0.0")));
        assert!(!tilde.check(&v("1.1.9")));

        let tilde = c("~> 1");
        assert!(tilde.check(&v("1.0.0")));
        assert!(tilde.check(&v("3.0.0")));
        assert!(!tilde.check(&v("0.9.0")));

        let tilde = c("~> 1.2.3.4");
        assert!(tilde.check(&v("1.2.3.7")));
        assert!(!tilde.check(&v("1.2.4.0")));
        assert!(!tilde.check(&v("1.2.3")));
    }

    #[test]
    fn test_pessimistic_prerelease() {
        let tilde = c("~> 1.2.3-beta");
        assert!(tilde.check(&v("1.2.3-beta")));
        assert!(tilde.check(&v("1.2.3-beta.2")));
        assert!(tilde.check(&v("1.2.3-rc")));
        assert!(!tilde.check(&v("1.2.3-alpha")));
        assert!(!tilde.check(&v("1.2.3")));
        assert!(!tilde.check(&v("1.2.4-beta")));

        assert!(!c("~> 1.2").check(&v("1.3.0-beta")));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(c(">= 1.0"), c(">=1.0.0"));
        assert_eq!(c("1.0"), c("= 1.0.0+build"));
        assert_ne!(c("> 1.0"), c(">= 1.0"));
        assert_ne!(c("> 1.0"), c("> 1.0.1"));
    }

    #[test]
    fn test_new_and_display() {
        let constraint = Constraint::new(Operator::Pessimistic, v("1.2"));
        assert_eq!(constraint.to_string(), "~>1.2.0");
        assert_eq!(c(" >= 1.2 ").to_string(), " >= 1.2 ");
        assert!(c("> 1.0-rc").is_prerelease());
        assert!(!c("> 1.0+rc").is_prerelease());
    }
}
