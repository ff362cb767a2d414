//! Constraint types for version matching

pub mod constraint;
mod constraint_set;
mod operator;

pub use constraint::Constraint;
pub use constraint_set::ConstraintSet;
pub use operator::{InvalidOperatorError, Operator};
