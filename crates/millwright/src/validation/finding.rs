//! Rule outcomes: codes, canonical fields, findings.

use serde::{Deserialize, Serialize};

/// Stable identifier of the rule that produced a finding.
///
/// Callers branch on these; the codes never change meaning between
/// releases even when thresholds do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCode {
    /// Absolute minimum slab thickness for the material.
    MaterialMinThickness,
    /// Stricter thickness minimum once the long dimension exceeds the
    /// material's trigger.
    MaterialSpanThickness,
    /// Multi-leg span limit from the thickness tier table.
    SpanMultiLeg,
    /// Pedestal span limit (diameter/diagonal vs. thickness tier).
    SpanPedestal,
    /// Footprint to total height ratio.
    FootprintRatio,
    /// Pedestal base diameter vs. total height.
    PedestalBase,
    /// Stabilizing foot base required for tall, slim legs.
    FootBaseRequired,
    /// Radial base spread radius vs. total height.
    RadialSpread,
    /// Minimum number of half-cylinder segments.
    RadialCount,
    /// Minimum half-cylinder segment diameter.
    RadialDiameter,
    /// Metal leg minimum profile size per material and profile type.
    MetalProfile,
    /// Wood leg minimum profile size, height-tiered.
    WoodProfile,
    /// Leg slenderness (height / profile size) limit.
    Slenderness,
    /// Single-support tables need a round or square top.
    PedestalShape,
    /// Symmetric leg placement recommended on curved tops.
    LegSymmetry,
    /// Total height outside the absolute bounds.
    HeightBounds,
    /// Total height inconsistent with leg height plus thickness.
    HeightConsistency,
    /// Edge finish needs a minimum machinable thickness.
    EdgeThickness,
    /// Composite face panel below the material minimum.
    CompositeFace,
    /// Composite core below the absolute minimum.
    CompositeCore,
    /// Composite total thickness below two faces plus minimum core.
    CompositeTotal,
}

/// Rules whose findings are informational and never block validity.
const WARNING_RULES: &[RuleCode] = &[RuleCode::LegSymmetry];

impl RuleCode {
    /// The stable wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            RuleCode::MaterialMinThickness => "MAT-01",
            RuleCode::MaterialSpanThickness => "MAT-02",
            RuleCode::SpanMultiLeg => "SPAN-01",
            RuleCode::SpanPedestal => "SPAN-02",
            RuleCode::FootprintRatio => "STAB-01",
            RuleCode::PedestalBase => "STAB-02",
            RuleCode::FootBaseRequired => "STAB-03",
            RuleCode::RadialSpread => "RAD-01",
            RuleCode::RadialCount => "RAD-02",
            RuleCode::RadialDiameter => "RAD-03",
            RuleCode::MetalProfile => "LEG-01",
            RuleCode::WoodProfile => "LEG-02",
            RuleCode::Slenderness => "LEG-03",
            RuleCode::PedestalShape => "LEG-04",
            RuleCode::LegSymmetry => "LEG-05",
            RuleCode::HeightBounds => "HGT-01",
            RuleCode::HeightConsistency => "HGT-03",
            RuleCode::EdgeThickness => "EDGE-01",
            RuleCode::CompositeFace => "COMP-01",
            RuleCode::CompositeCore => "COMP-02",
            RuleCode::CompositeTotal => "COMP-03",
        }
    }

    /// Whether findings from this rule are warnings rather than violations.
    pub fn is_warning(&self) -> bool {
        WARNING_RULES.contains(self)
    }

    pub fn severity(&self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Violation
        }
    }
}

/// Severity class of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; does not block validity.
    Warning,
    /// Blocks validity.
    Violation,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Violation => "Violation",
        }
    }
}

/// The canonical editable field a finding is reported against.
///
/// Rules that read several fields still report on exactly one, so the
/// configurator can map each finding to one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecField {
    Thickness,
    FaceThickness,
    Length,
    Width,
    Shape,
    Edge,
    LegCount,
    LegProfileSize,
    LegHeight,
    FootBase,
    HalfCylinderCount,
    SpreadRadius,
    TotalHeight,
}

/// One rule outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Which rule fired.
    pub rule: RuleCode,
    /// The field the user should edit to resolve it.
    pub field: SpecField,
    /// End-user explanation, display register.
    pub message: String,
    /// Technical explanation with the numbers, log register.
    pub detail: String,
}

impl Finding {
    pub fn new(
        rule: RuleCode,
        field: SpecField,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            field,
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.rule.severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_symmetry_is_warning() {
        let all = [
            RuleCode::MaterialMinThickness,
            RuleCode::MaterialSpanThickness,
            RuleCode::SpanMultiLeg,
            RuleCode::SpanPedestal,
            RuleCode::FootprintRatio,
            RuleCode::PedestalBase,
            RuleCode::FootBaseRequired,
            RuleCode::RadialSpread,
            RuleCode::RadialCount,
            RuleCode::RadialDiameter,
            RuleCode::MetalProfile,
            RuleCode::WoodProfile,
            RuleCode::Slenderness,
            RuleCode::PedestalShape,
            RuleCode::LegSymmetry,
            RuleCode::HeightBounds,
            RuleCode::HeightConsistency,
            RuleCode::EdgeThickness,
            RuleCode::CompositeFace,
            RuleCode::CompositeCore,
            RuleCode::CompositeTotal,
        ];
        let warnings: Vec<_> = all.iter().filter(|c| c.is_warning()).collect();
        assert_eq!(warnings, vec![&RuleCode::LegSymmetry]);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids = [
            RuleCode::MaterialMinThickness.id(),
            RuleCode::MaterialSpanThickness.id(),
            RuleCode::SpanMultiLeg.id(),
            RuleCode::SpanPedestal.id(),
            RuleCode::FootprintRatio.id(),
            RuleCode::PedestalBase.id(),
            RuleCode::FootBaseRequired.id(),
            RuleCode::RadialSpread.id(),
            RuleCode::RadialCount.id(),
            RuleCode::RadialDiameter.id(),
            RuleCode::MetalProfile.id(),
            RuleCode::WoodProfile.id(),
            RuleCode::Slenderness.id(),
            RuleCode::PedestalShape.id(),
            RuleCode::LegSymmetry.id(),
            RuleCode::HeightBounds.id(),
            RuleCode::HeightConsistency.id(),
            RuleCode::EdgeThickness.id(),
            RuleCode::CompositeFace.id(),
            RuleCode::CompositeCore.id(),
            RuleCode::CompositeTotal.id(),
        ];
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_finding_carries_both_registers() {
        let f = Finding::new(
            RuleCode::HeightBounds,
            SpecField::TotalHeight,
            "The table is too low for comfortable seating.",
            "total_height 500 below minimum 550",
        );
        assert_eq!(f.severity(), Severity::Violation);
        assert!(f.message != f.detail);
    }
}
