//! Millwright: structural rule engine for table configurations.
//!
//! Millwright classifies a complete table specification as buildable or
//! not against a body of physical rules, explains every violation in a
//! user-facing and a technical register, and proposes a minimally edited
//! alternative when the specification fails. For in-progress
//! specifications it derives per-field legal ranges so a configurator can
//! bound its inputs live.
//!
//! # Core Principles
//!
//! - **Pure**: validation never mutates the input and never performs I/O
//! - **Total**: any well-typed specification produces a result, never an
//!   error; invalid configurations are data, not failures
//! - **Deterministic**: the same specification always yields the same
//!   result, field for field
//!
//! # Example
//!
//! ```no_run
//! use millwright::Millwright;
//!
//! # fn example(spec: millwright::TableSpec) {
//! let mill = Millwright::new();
//! let result = mill.validate(&spec);
//!
//! println!("valid: {}", result.is_valid);
//! for finding in &result.violations {
//!     println!("[{}] {}", finding.rule.id(), finding.message);
//! }
//! # }
//! ```

pub mod constraint;
pub mod error;
pub mod pricing;
pub mod rules;
pub mod spec;
pub mod suggest;
pub mod validation;

mod millwright;

pub use crate::millwright::{Millwright, MillwrightConfig};
pub use constraint::{ConstraintCalculator, FieldConstraint, FieldConstraints};
pub use error::{MillwrightError, Result};
pub use pricing::PriceList;
pub use rules::{RuleTables, DEFAULT_TABLES};
pub use spec::{
    Construction, EdgeFinish, LegMaterial, LegProfile, PartialTableSpec, TableSpec, TopMaterial,
    TopShape,
};
pub use suggest::{RepairConfig, RepairEngine};
pub use validation::{Finding, RuleCode, Severity, SpecField, ValidationEngine, ValidationResult};

/// Validate a complete specification against the default rule tables.
///
/// Shorthand for [`Millwright::validate`] on a default instance.
pub fn validate(spec: &TableSpec) -> ValidationResult {
    ValidationEngine::new().validate(spec, &DEFAULT_TABLES)
}

/// Derive field constraints for a partial specification against the
/// default rule tables.
pub fn field_constraints(partial: &PartialTableSpec) -> FieldConstraints {
    ConstraintCalculator::derive(partial, &DEFAULT_TABLES)
}
