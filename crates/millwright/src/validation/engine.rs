//! Orchestration: run every checker, classify, repair.

use serde::{Deserialize, Serialize};

use crate::rules::RuleTables;
use crate::spec::TableSpec;
use crate::suggest::{RepairConfig, RepairEngine};

use super::checkers::{
    CompositeCheck, EdgeCheck, HeightCheck, LegCheck, MaterialCheck, RuleCheck, SpanCheck,
    StabilityCheck,
};
use super::finding::Finding;

/// Outcome of validating one specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff there are no violations. Warnings never affect this.
    pub is_valid: bool,
    pub violations: Vec<Finding>,
    pub warnings: Vec<Finding>,
    /// A repaired alternative; present exactly when the spec is invalid.
    /// Always a complete specification, never a patch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested: Option<TableSpec>,
}

/// Runs all rule checkers in a fixed order and classifies the findings.
pub struct ValidationEngine {
    checks: Vec<Box<dyn RuleCheck>>,
    repair: RepairConfig,
}

impl ValidationEngine {
    /// Create an engine with all checkers in their canonical order.
    ///
    /// The order affects only the ordering of the finding lists, not
    /// which findings are produced.
    pub fn new() -> Self {
        Self {
            checks: vec![
                Box::new(MaterialCheck),
                Box::new(SpanCheck),
                Box::new(StabilityCheck),
                Box::new(LegCheck),
                Box::new(HeightCheck),
                Box::new(EdgeCheck),
                Box::new(CompositeCheck),
            ],
            repair: RepairConfig::default(),
        }
    }

    /// Override the repair behavior.
    pub fn with_repair_config(mut self, repair: RepairConfig) -> Self {
        self.repair = repair;
        self
    }

    /// Run every checker and return the concatenated findings.
    pub fn findings(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding> {
        let mut all = Vec::new();
        for check in &self.checks {
            all.extend(check.check(spec, tables));
        }
        all
    }

    /// Validate a specification: classify all findings and, when the spec
    /// is invalid, produce a repaired alternative.
    pub fn validate(&self, spec: &TableSpec, tables: &RuleTables) -> ValidationResult {
        let (violations, warnings): (Vec<_>, Vec<_>) = self
            .findings(spec, tables)
            .into_iter()
            .partition(|f| !f.rule.is_warning());

        let is_valid = violations.is_empty();
        let suggested = if is_valid {
            None
        } else {
            Some(self.repair_spec(spec, &violations, tables))
        };

        ValidationResult {
            is_valid,
            violations,
            warnings,
            suggested,
        }
    }

    /// Apply the greedy repair pass, optionally iterated to a bounded
    /// fixed point when the configuration asks for more than one pass.
    fn repair_spec(
        &self,
        spec: &TableSpec,
        violations: &[Finding],
        tables: &RuleTables,
    ) -> TableSpec {
        let mut repaired = RepairEngine::suggest(spec, violations, tables);

        for _ in 1..self.repair.max_passes {
            let remaining: Vec<Finding> = self
                .findings(&repaired, tables)
                .into_iter()
                .filter(|f| !f.rule.is_warning())
                .collect();
            if remaining.is_empty() {
                break;
            }
            repaired = RepairEngine::suggest(&repaired, &remaining, tables);
        }

        repaired
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
