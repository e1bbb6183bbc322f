//! Main Millwright struct and public API.

use crate::constraint::{ConstraintCalculator, FieldConstraints};
use crate::rules::RuleTables;
use crate::spec::{PartialTableSpec, TableSpec};
use crate::suggest::RepairConfig;
use crate::validation::{ValidationEngine, ValidationResult};

/// Configuration for a Millwright instance.
#[derive(Debug, Clone, Default)]
pub struct MillwrightConfig {
    /// Threshold tables; the production defaults unless overridden.
    pub tables: Option<RuleTables>,
    /// Repair behavior.
    pub repair: RepairConfig,
}

/// The rule engine entry point.
///
/// Holds the injected rule tables and the checker pipeline. Every call is
/// a pure function of its arguments and this configuration; instances are
/// freely shareable across callers.
pub struct Millwright {
    tables: RuleTables,
    engine: ValidationEngine,
}

impl Millwright {
    /// Create an instance with the default rule tables.
    pub fn new() -> Self {
        Self::with_config(MillwrightConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: MillwrightConfig) -> Self {
        Self {
            tables: config.tables.unwrap_or_default(),
            engine: ValidationEngine::new().with_repair_config(config.repair),
        }
    }

    /// Create an instance with alternate rule tables.
    pub fn with_tables(tables: RuleTables) -> Self {
        Self::with_config(MillwrightConfig {
            tables: Some(tables),
            repair: RepairConfig::default(),
        })
    }

    /// Validate a complete specification.
    ///
    /// Total and deterministic: the same specification always yields the
    /// same result, field for field. An invalid specification is a normal
    /// outcome, not an error.
    pub fn validate(&self, spec: &TableSpec) -> ValidationResult {
        self.engine.validate(spec, &self.tables)
    }

    /// Derive the currently legal range for every numeric field of a
    /// partially assembled specification.
    pub fn field_constraints(&self, partial: &PartialTableSpec) -> FieldConstraints {
        ConstraintCalculator::derive(partial, &self.tables)
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }
}

impl Default for Millwright {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{
        Construction, EdgeFinish, LegMaterial, LegProfile, TopMaterial, TopShape,
    };

    fn spec() -> TableSpec {
        TableSpec {
            material: TopMaterial::SinteredStone,
            construction: Construction::Solid,
            thickness_mm: 20.0,
            face_thickness_mm: None,
            shape: TopShape::Rectangle,
            length_mm: 1800.0,
            width_mm: 900.0,
            edge: EdgeFinish::Straight,
            leg_count: 4,
            leg_material: LegMaterial::Steel,
            leg_profile: LegProfile::Square,
            leg_profile_size_mm: 60.0,
            leg_profile_width_mm: None,
            leg_height_mm: 700.0,
            has_foot_base: false,
            halfcylinder_count: None,
            spread_radius_mm: None,
            total_height_mm: 720.0,
        }
    }

    #[test]
    fn test_validate_with_default_tables() {
        let mill = Millwright::new();
        assert!(mill.validate(&spec()).is_valid);
    }

    #[test]
    fn test_alternate_tables_are_injected() {
        let mut tables = RuleTables::default();
        tables.min_total_height_mm = 900.0;
        let mill = Millwright::with_tables(tables);
        let result = mill.validate(&spec());
        assert!(!result.is_valid);
    }

    #[test]
    fn test_constraints_from_partial() {
        let mill = Millwright::new();
        let partial = PartialTableSpec {
            material: Some(TopMaterial::Granite),
            ..Default::default()
        };
        let constraints = mill.field_constraints(&partial);
        assert_eq!(constraints.thickness_mm.min, 20.0);
    }
}
