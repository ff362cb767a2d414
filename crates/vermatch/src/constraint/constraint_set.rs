//! ConstraintSet - conjunction of single constraints

use std::fmt;
use std::str::FromStr;

use super::{Constraint, Operator};
use crate::version::Version;
use crate::version_parser::VersionParserError;

/// A comma-separated list of constraints combined with AND
///
/// Insertion order is kept for display only; it never affects matching.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Create a set from already-built constraints
    pub fn new(constraints: Vec<Constraint>) -> Self {
        ConstraintSet { constraints }
    }

    /// Parse a comma-separated constraint list such as `>= 1.2, < 2.0`.
    ///
    /// One malformed element fails the whole list.
    pub fn parse(constraints: &str) -> Result<Self, VersionParserError> {
        let parsed = constraints
            .split(',')
            .map(Constraint::parse)
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Parsed constraint set \"{}\" ({} constraints)", constraints, parsed.len());

        Ok(ConstraintSet { constraints: parsed })
    }

    /// Get the constraints
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Check if a version satisfies every constraint. An empty set matches everything.
    pub fn check(&self, version: &Version) -> bool {
        for constraint in &self.constraints {
            if !constraint.check(version) {
                log::trace!("{} rejected by \"{}\"", version, constraint);
                return false;
            }
        }
        true
    }

    /// Structural equality: both sets sorted by operator then reference version,
    /// then compared element-wise.
    ///
    /// `>0.1,>0.2` and `>0.2` describe the same versions but are *not* equal here.
    pub fn equals(&self, other: &ConstraintSet) -> bool {
        if self.constraints.len() != other.constraints.len() {
            return false;
        }

        let mut left: Vec<&Constraint> = self.constraints.iter().collect();
        let mut right: Vec<&Constraint> = other.constraints.iter().collect();
        left.sort();
        right.sort();

        left.iter().zip(right.iter()).all(|(a, b)| a == b)
    }

    /// Logical equivalence of two sets, e.g. `>0.1,>0.2` against `>0.2`.
    ///
    /// Every constraint of `self` is checked pairwise against every constraint
    /// of `other`. This is a heuristic over common single-direction and
    /// pessimistic ranges, not an interval solver: it is asymmetric in its
    /// arguments, and pairings it has no rule for (`!=` on the left, a range
    /// operator against `~>`) count as a mismatch.
    pub fn equals_logical(&self, other: &ConstraintSet) -> bool {
        for c1 in &self.constraints {
            for c2 in &other.constraints {
                if !logically_compatible(c1, c2) {
                    log::trace!("\"{}\" is not logically compatible with \"{}\"", c1, c2);
                    return false;
                }
            }
        }
        true
    }
}

fn logically_compatible(c1: &Constraint, c2: &Constraint) -> bool {
    let op1 = c1.operator();
    let op2 = c2.operator();

    match op1 {
        Operator::Equal => c1 == c2,
        Operator::Pessimistic => match op2 {
            Operator::Equal => c1.check(c2.version()),
            Operator::Pessimistic => {
                let floor = c1.version().segments();
                let other = c2.version().segments();
                floor[0] == other[0] && floor[1] == other[1] && other[2] >= floor[2]
            }
            _ => false,
        },
        _ if op1.is_ordering() => {
            if op2 == Operator::Equal {
                c1.check(c2.version())
            } else if op1.is_greater_family() && op2.is_greater_family() {
                c1.version().less_than_or_equal(c2.version())
            } else if op1.is_less_family() && op2.is_less_family() {
                c1.version().greater_than_or_equal(c2.version())
            } else {
                false
            }
        }
        _ => false,
    }
}

impl PartialEq for ConstraintSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl FromStr for ConstraintSet {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstraintSet::parse(s)
    }
}

impl From<Vec<Constraint>> for ConstraintSet {
    fn from(constraints: Vec<Constraint>) -> Self {
        ConstraintSet::new(constraints)
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

impl IntoIterator for ConstraintSet {
    type Item = Constraint;
    type IntoIter = std::vec::IntoIter<Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.into_iter()
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constraints_str: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", constraints_str.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(s: &str) -> ConstraintSet {
        ConstraintSet::parse(s).unwrap()
    }

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(set(">= 1.2").len(), 1);
        assert_eq!(set(">= 1.2, < 1.0").len(), 2);
        assert_eq!(set(">=1.0,<2.0,!=1.5.0").len(), 3);
        assert!(ConstraintSet::parse(">= 1.x").is_err());
        assert!(ConstraintSet::parse(">= 1.0, foo").is_err());
        assert!(ConstraintSet::parse(">= 1.0,").is_err());
        assert!(ConstraintSet::parse("").is_err());
    }

    #[test]
    fn test_parse_error_names_element() {
        let err = ConstraintSet::parse(">= 1.0, ^2.0").unwrap_err();
        match err {
            VersionParserError::MalformedConstraint { constraint, .. } => {
                assert_eq!(constraint, " ^2.0");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_display_keeps_order() {
        assert_eq!(set(">= 1.2, < 2.0").to_string(), ">= 1.2, < 2.0");
        assert_eq!(set("<2.0,>=1.2").to_string(), "<2.0,>=1.2");
    }

    #[test]
    fn test_check() {
        let range = set(">= 1.2, < 2.0");
        assert!(range.check(&v("1.2")));
        assert!(range.check(&v("1.9.9")));
        assert!(!range.check(&v("2.0")));
        assert!(!range.check(&v("1.1")));
        assert!(!range.check(&v("1.5.0-beta")));

        assert!(set("~> 1.2, != 1.4.0").check(&v("1.5.0")));
        assert!(!set("~> 1.2, != 1.4.0").check(&v("1.4.0")));
    }

    #[test]
    fn test_check_order_irrelevant() {
        let a = set(">= 1.2, < 2.0, != 1.5");
        let b = set("!= 1.5, < 2.0, >= 1.2");
        for version in ["1.0", "1.2", "1.5", "1.6", "2.0"] {
            assert_eq!(a.check(&v(version)), b.check(&v(version)), "{}", version);
        }
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let empty = ConstraintSet::default();
        assert!(empty.is_empty());
        assert!(empty.check(&v("0.0.1")));
        assert!(empty.check(&v("1.0.0-beta")));
    }

    #[test]
    fn test_equals() {
        assert!(set(">= 1.0, < 2.0").equals(&set("<2.0,>=1.0")));
        assert!(set("1.0").equals(&set("= 1.0.0")));
        assert!(set(">1.0,>2.0").equals(&set(">2.0,>1.0")));
        assert!(!set(">0.1,>0.2").equals(&set(">0.2")));
        assert!(!set(">0.1").equals(&set(">=0.1")));
        assert!(!set(">0.1,<1.0").equals(&set(">0.1,<1.1")));
        assert_eq!(set(">= 1.0, < 2.0"), set("<2.0,>=1.0"));
    }

    #[test]
    fn test_equals_does_not_reorder_source() {
        let a = set("<2.0,>=1.0");
        assert!(a.equals(&set(">=1.0,<2.0")));
        assert_eq!(a.to_string(), "<2.0,>=1.0");
    }

    #[test]
    fn test_equals_logical_same_direction() {
        assert!(set(">0.1,>0.2").equals_logical(&set(">0.2")));
        assert!(set(">=0.1").equals_logical(&set(">0.2")));
        assert!(set("<0.5,<=0.4").equals_logical(&set("<0.3")));
        assert!(!set(">0.3").equals_logical(&set(">0.2")));
        assert!(!set(">0.1").equals_logical(&set("<0.2")));
    }

    #[test]
    fn test_equals_logical_equal() {
        assert!(set("1.0").equals_logical(&set("=1.0.0")));
        assert!(!set("1.0").equals_logical(&set("1.1")));
        assert!(!set("1.0").equals_logical(&set(">=1.0")));
        assert!(set(">=1.0").equals_logical(&set("1.0")));
        assert!(!set(">1.0").equals_logical(&set("1.0")));
    }

    #[test]
    fn test_equals_logical_pessimistic() {
        assert!(set("~> 1.2.3").equals_logical(&set("1.2.5")));
        assert!(!set("~> 1.2.3").equals_logical(&set("1.3.0")));
        assert!(set("~> 1.2.3").equals_logical(&set("~> 1.2.4")));
        assert!(set("~> 1.2.3").equals_logical(&set("~> 1.2.3")));
        assert!(!set("~> 1.2.4").equals_logical(&set("~> 1.2.3")));
        assert!(!set("~> 1.2.3").equals_logical(&set("~> 1.3.3")));
        assert!(!set("~> 1.2.3").equals_logical(&set(">= 1.2.3")));
        assert!(!set(">= 1.2.3").equals_logical(&set("~> 1.2.3")));
    }

    #[test]
    fn test_equals_logical_uncovered() {
        assert!(!set("!= 1.0").equals_logical(&set("!= 1.0")));
    }
}
