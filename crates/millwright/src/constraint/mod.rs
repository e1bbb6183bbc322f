//! Dynamic field bounding for in-progress specifications.

mod calculator;

pub use calculator::{ConstraintCalculator, FieldConstraint, FieldConstraints};
