//! Validation engine: rule checkers, findings, orchestration.

mod checkers;
mod engine;
mod finding;

pub use checkers::{
    CompositeCheck, EdgeCheck, HeightCheck, LegCheck, MaterialCheck, RuleCheck, SpanCheck,
    StabilityCheck,
};
pub use engine::{ValidationEngine, ValidationResult};
pub use finding::{Finding, RuleCode, Severity, SpecField};
