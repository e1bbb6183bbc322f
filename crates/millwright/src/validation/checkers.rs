//! Rule checkers for table specifications.
//!
//! Each checker is a total, pure function of the specification and the
//! rule tables. Checkers know nothing about one another; the engine fixes
//! the run order. A checker must return normally for any well-typed
//! specification, however absurd its numbers.

use crate::rules::RuleTables;
use crate::spec::{Construction, TableSpec, TopShape};

use super::finding::{Finding, RuleCode, SpecField};

/// Trait for rule checkers.
pub trait RuleCheck {
    /// Run the check and return findings.
    fn check(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding>;
}

/// Enforces per-material thickness minimums on solid tops.
///
/// Composite tops are skipped entirely; their face-panel rules govern
/// instead.
pub struct MaterialCheck;

impl RuleCheck for MaterialCheck {
    fn check(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding> {
        if spec.construction == Construction::Composite {
            return Vec::new();
        }

        let mut findings = Vec::new();

        if let Some(min) = tables.min_thickness(spec.material) {
            if spec.thickness_mm < min {
                findings.push(Finding::new(
                    RuleCode::MaterialMinThickness,
                    SpecField::Thickness,
                    format!(
                        "A {} top needs to be at least {:.0} mm thick.",
                        spec.material.label().to_lowercase(),
                        min
                    ),
                    format!(
                        "thickness {} below material minimum {} ({:?})",
                        spec.thickness_mm, min, spec.material
                    ),
                ));
            }
        }

        let long = spec.long_dimension_mm();
        if let Some(required) = tables.span_triggered_min_thickness(spec.material, long) {
            if spec.thickness_mm < required {
                findings.push(Finding::new(
                    RuleCode::MaterialSpanThickness,
                    SpecField::Thickness,
                    format!(
                        "Tops of this size in {} need at least {:.0} mm of thickness.",
                        spec.material.label().to_lowercase(),
                        required
                    ),
                    format!(
                        "long dimension {} exceeds trigger for {:?}; thickness {} below {}",
                        long, spec.material, spec.thickness_mm, required
                    ),
                ));
            }
        }

        findings
    }
}

/// Checks the unsupported span of the top against the thickness tiers.
pub struct SpanCheck;

impl RuleCheck for SpanCheck {
    fn check(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding> {
        let span = spec.effective_span_mm();

        // Pedestal tables are a separate branch with their own tier table;
        // no further span rules apply to them.
        if spec.is_single_support() {
            let limit = tables.pedestal_span_limit(spec.thickness_mm);
            if span > limit {
                return vec![Finding::new(
                    RuleCode::SpanPedestal,
                    SpecField::Thickness,
                    format!(
                        "A top this size is too large for a single pedestal at {:.0} mm thickness.",
                        spec.thickness_mm
                    ),
                    format!(
                        "pedestal span {:.0} exceeds limit {:.0} at thickness {}",
                        span, limit, spec.thickness_mm
                    ),
                )];
            }
            return Vec::new();
        }

        match tables.multi_leg_span_limit(spec.material, spec.thickness_mm, spec.construction) {
            Some(limit) if span > limit => {
                vec![Finding::new(
                    RuleCode::SpanMultiLeg,
                    SpecField::Thickness,
                    format!(
                        "The top spans {:.0} mm unsupported; at {:.0} mm thickness it may sag or crack.",
                        span, spec.thickness_mm
                    ),
                    format!(
                        "span {:.0} exceeds tier limit {:.0} for {:?} at thickness {}",
                        span, limit, spec.material, spec.thickness_mm
                    ),
                )]
            }
            // No matching tier means no defined limit; absence of a rule
            // is not a failure.
            _ => Vec::new(),
        }
    }
}

/// Tip-over and buckling safeguards for the whole assembly.
pub struct StabilityCheck;

impl RuleCheck for StabilityCheck {
    fn check(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding> {
        let mut findings = Vec::new();
        let radial = spec.leg_profile.is_radial();

        let footprint = spec.footprint_mm();
        let min_footprint = tables.min_footprint(spec.total_height_mm);
        if footprint < min_footprint {
            let field = if radial {
                SpecField::SpreadRadius
            } else {
                SpecField::Width
            };
            findings.push(Finding::new(
                RuleCode::FootprintRatio,
                field,
                format!(
                    "The base is too narrow for a table {:.0} mm tall; it could tip over.",
                    spec.total_height_mm
                ),
                format!(
                    "footprint {:.0} below {:.0} ({} x height {})",
                    footprint, min_footprint, tables.min_footprint_ratio, spec.total_height_mm
                ),
            ));
        }

        if spec.is_single_support() && !radial {
            let min_base = tables.pedestal_min_base(spec.total_height_mm);
            if spec.leg_profile_size_mm < min_base {
                findings.push(Finding::new(
                    RuleCode::PedestalBase,
                    SpecField::LegProfileSize,
                    format!(
                        "A single pedestal this tall needs a base of at least {:.0} mm.",
                        min_base
                    ),
                    format!(
                        "pedestal base {} below {:.0} ({} x height {})",
                        spec.leg_profile_size_mm,
                        min_base,
                        tables.pedestal_base_fraction,
                        spec.total_height_mm
                    ),
                ));
            }
        }

        if !radial
            && !spec.has_foot_base
            && spec.leg_height_mm > tables.foot_base_height_trigger_mm
        {
            let min_profile = tables.foot_base_min_profile(spec.leg_material);
            if spec.leg_profile_size_mm < min_profile {
                findings.push(Finding::new(
                    RuleCode::FootBaseRequired,
                    SpecField::FootBase,
                    "Legs this tall and slim need a stabilizing foot base.".to_string(),
                    format!(
                        "leg height {} above {} with profile {} below {}; no foot base",
                        spec.leg_height_mm,
                        tables.foot_base_height_trigger_mm,
                        spec.leg_profile_size_mm,
                        min_profile
                    ),
                ));
            }
        }

        findings
    }
}

/// Leg sizing rules. Radial bases switch to their own rule set and bypass
/// every standard leg rule.
pub struct LegCheck;

impl RuleCheck for LegCheck {
    fn check(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding> {
        if spec.leg_profile.is_radial() {
            return self.check_radial(spec, tables);
        }

        let mut findings = Vec::new();

        if spec.leg_material.is_metal() {
            if let Some(min) = tables.metal_min_profile(spec.leg_material, spec.leg_profile) {
                if spec.leg_profile_size_mm < min {
                    findings.push(Finding::new(
                        RuleCode::MetalProfile,
                        SpecField::LegProfileSize,
                        format!(
                            "{} legs with a {} profile need at least {:.0} mm.",
                            spec.leg_material.label(),
                            spec.leg_profile.label().to_lowercase(),
                            min
                        ),
                        format!(
                            "profile {} below minimum {} for {:?}/{:?}",
                            spec.leg_profile_size_mm, min, spec.leg_material, spec.leg_profile
                        ),
                    ));
                }
            }
        } else {
            let min = tables.wood_min_profile(spec.leg_height_mm);
            if spec.leg_profile_size_mm < min {
                findings.push(Finding::new(
                    RuleCode::WoodProfile,
                    SpecField::LegProfileSize,
                    format!(
                        "Wooden legs of this height need a cross-section of at least {:.0} mm.",
                        min
                    ),
                    format!(
                        "wood profile {} below {} at leg height {}",
                        spec.leg_profile_size_mm, min, spec.leg_height_mm
                    ),
                ));
            }
        }

        let max_ratio = tables.max_slenderness(spec.leg_material);
        let slenderness = spec.leg_height_mm / spec.leg_profile_size_mm;
        if slenderness > max_ratio {
            findings.push(Finding::new(
                RuleCode::Slenderness,
                SpecField::LegProfileSize,
                "The legs are too slim for their height and could buckle.".to_string(),
                format!(
                    "slenderness {:.1} (height {} / profile {}) above limit {}",
                    slenderness, spec.leg_height_mm, spec.leg_profile_size_mm, max_ratio
                ),
            ));
        }

        if spec.is_single_support()
            && !matches!(spec.shape, TopShape::Round | TopShape::Square)
        {
            findings.push(Finding::new(
                RuleCode::PedestalShape,
                SpecField::Shape,
                "A single central support only works under round or square tops.".to_string(),
                format!("single support under {:?} top", spec.shape),
            ));
        }

        if spec.shape.is_curved() && spec.leg_count >= 4 {
            findings.push(Finding::new(
                RuleCode::LegSymmetry,
                SpecField::LegCount,
                "Consider placing the legs symmetrically under a curved top.".to_string(),
                format!("{} legs under {:?} top", spec.leg_count, spec.shape),
            ));
        }

        findings
    }
}

impl LegCheck {
    fn check_radial(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding> {
        let mut findings = Vec::new();

        let spread = spec.spread_radius_mm.unwrap_or(0.0);
        let min_spread = tables.min_spread(spec.total_height_mm);
        if spread < min_spread {
            findings.push(Finding::new(
                RuleCode::RadialSpread,
                SpecField::SpreadRadius,
                format!(
                    "The base segments need to reach at least {:.0} mm from the center.",
                    min_spread
                ),
                format!(
                    "spread {} below {:.0} ({} x height {})",
                    spread, min_spread, tables.radial_spread_ratio, spec.total_height_mm
                ),
            ));
        }

        let count = spec.halfcylinder_count.unwrap_or(0);
        if count < tables.radial_min_count {
            findings.push(Finding::new(
                RuleCode::RadialCount,
                SpecField::HalfCylinderCount,
                format!(
                    "A radial base needs at least {} segments.",
                    tables.radial_min_count
                ),
                format!("{} segments below minimum {}", count, tables.radial_min_count),
            ));
        }

        if spec.leg_profile_size_mm < tables.radial_min_diameter_mm {
            findings.push(Finding::new(
                RuleCode::RadialDiameter,
                SpecField::LegProfileSize,
                format!(
                    "Each base segment needs a diameter of at least {:.0} mm.",
                    tables.radial_min_diameter_mm
                ),
                format!(
                    "segment diameter {} below {}",
                    spec.leg_profile_size_mm, tables.radial_min_diameter_mm
                ),
            ));
        }

        findings
    }
}

/// Absolute height bounds and the height bookkeeping invariant.
pub struct HeightCheck;

impl RuleCheck for HeightCheck {
    fn check(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding> {
        let mut findings = Vec::new();

        if spec.total_height_mm < tables.min_total_height_mm {
            findings.push(Finding::new(
                RuleCode::HeightBounds,
                SpecField::TotalHeight,
                format!(
                    "The table is too low; the minimum is {:.0} mm.",
                    tables.min_total_height_mm
                ),
                format!(
                    "total height {} below {}",
                    spec.total_height_mm, tables.min_total_height_mm
                ),
            ));
        } else if spec.total_height_mm > tables.max_total_height_mm {
            findings.push(Finding::new(
                RuleCode::HeightBounds,
                SpecField::TotalHeight,
                format!(
                    "The table is too tall; the maximum is {:.0} mm.",
                    tables.max_total_height_mm
                ),
                format!(
                    "total height {} above {}",
                    spec.total_height_mm, tables.max_total_height_mm
                ),
            ));
        }

        let implied = spec.leg_height_mm + spec.thickness_mm;
        if (spec.total_height_mm - implied).abs() > tables.height_tolerance_mm {
            findings.push(Finding::new(
                RuleCode::HeightConsistency,
                SpecField::TotalHeight,
                "The stated height does not match legs plus top.".to_string(),
                format!(
                    "total height {} != leg {} + top {} (tolerance {})",
                    spec.total_height_mm,
                    spec.leg_height_mm,
                    spec.thickness_mm,
                    tables.height_tolerance_mm
                ),
            ));
        }

        findings
    }
}

/// Edge finishes that cut into the slab need enough material to machine.
///
/// For composite tops the edge is machined into the face panel only, so
/// the face thickness is what counts.
pub struct EdgeCheck;

impl RuleCheck for EdgeCheck {
    fn check(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding> {
        let Some(min) = tables.edge_min_thickness(spec.edge) else {
            return Vec::new();
        };

        let (reference, what) = match spec.construction {
            Construction::Composite => (spec.face_thickness_mm.unwrap_or(0.0), "face panel"),
            Construction::Solid => (spec.thickness_mm, "top"),
        };

        if reference < min {
            return vec![Finding::new(
                RuleCode::EdgeThickness,
                SpecField::Edge,
                format!(
                    "A {} edge needs a {} of at least {:.0} mm.",
                    spec.edge.label().to_lowercase(),
                    what,
                    min
                ),
                format!(
                    "{} thickness {} below {} for {:?} edge",
                    what, reference, min, spec.edge
                ),
            )];
        }

        Vec::new()
    }
}

/// Sandwich-construction rules; runs only for composite tops.
pub struct CompositeCheck;

impl RuleCheck for CompositeCheck {
    fn check(&self, spec: &TableSpec, tables: &RuleTables) -> Vec<Finding> {
        if spec.construction != Construction::Composite {
            return Vec::new();
        }

        let mut findings = Vec::new();
        let face = spec.face_thickness_mm.unwrap_or(0.0);

        if let Some(min_face) = tables.min_face_thickness(spec.material) {
            if face < min_face {
                findings.push(Finding::new(
                    RuleCode::CompositeFace,
                    SpecField::FaceThickness,
                    format!(
                        "The {} face panels need to be at least {:.0} mm thick.",
                        spec.material.label().to_lowercase(),
                        min_face
                    ),
                    format!(
                        "face {} below minimum {} ({:?})",
                        face, min_face, spec.material
                    ),
                ));
            }
        }

        let core = spec.thickness_mm - 2.0 * face;
        if core < tables.min_core_mm {
            findings.push(Finding::new(
                RuleCode::CompositeCore,
                SpecField::Thickness,
                format!(
                    "The core between the face panels must be at least {:.0} mm.",
                    tables.min_core_mm
                ),
                format!(
                    "core {:.1} (thickness {} - 2 x face {}) below {}",
                    core, spec.thickness_mm, face, tables.min_core_mm
                ),
            ));
        }

        // Implied by the core check above whenever that one passes; kept
        // as an independent guard against future table edits.
        if spec.thickness_mm < 2.0 * face + tables.min_core_mm {
            findings.push(Finding::new(
                RuleCode::CompositeTotal,
                SpecField::Thickness,
                "The total thickness is too small for two faces plus a core.".to_string(),
                format!(
                    "thickness {} below 2 x face {} + core {}",
                    spec.thickness_mm, face, tables.min_core_mm
                ),
            ));
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{EdgeFinish, LegMaterial, LegProfile, TopMaterial};

    fn base_spec() -> TableSpec {
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

    fn tables() -> RuleTables {
        RuleTables::default()
    }

    fn codes(findings: &[Finding]) -> Vec<RuleCode> {
        findings.iter().map(|f| f.rule).collect()
    }

    #[test]
    fn test_material_thin_marble() {
        let mut spec = base_spec();
        spec.material = TopMaterial::Marble;
        spec.thickness_mm = 12.0;
        let findings = MaterialCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::MaterialMinThickness));
    }

    #[test]
    fn test_material_skipped_for_composite() {
        let mut spec = base_spec();
        spec.construction = Construction::Composite;
        spec.thickness_mm = 1.0;
        spec.face_thickness_mm = Some(0.2);
        assert!(MaterialCheck.check(&spec, &tables()).is_empty());
    }

    #[test]
    fn test_material_span_trigger() {
        let mut spec = base_spec();
        spec.material = TopMaterial::Quartz;
        spec.length_mm = 2000.0;
        spec.thickness_mm = 12.0;
        let findings = MaterialCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::MaterialSpanThickness));
    }

    #[test]
    fn test_span_ok_for_reference_table() {
        let spec = base_spec();
        assert!(SpanCheck.check(&spec, &tables()).is_empty());
    }

    #[test]
    fn test_span_violation_on_thin_wide_top() {
        let mut spec = base_spec();
        spec.thickness_mm = 12.0;
        spec.length_mm = 1600.0;
        let findings = SpanCheck.check(&spec, &tables());
        assert_eq!(codes(&findings), vec![RuleCode::SpanMultiLeg]);
    }

    #[test]
    fn test_span_no_tier_no_violation() {
        let mut spec = base_spec();
        spec.material = TopMaterial::Marble;
        spec.thickness_mm = 10.0;
        spec.length_mm = 3000.0;
        assert!(SpanCheck.check(&spec, &tables()).is_empty());
    }

    #[test]
    fn test_span_composite_bonus() {
        let mut spec = base_spec();
        spec.thickness_mm = 12.0;
        spec.length_mm = 1600.0;
        // Solid fails at this size; the 1.4 sandwich factor clears it.
        assert!(!SpanCheck.check(&spec, &tables()).is_empty());
        spec.construction = Construction::Composite;
        spec.face_thickness_mm = Some(3.0);
        assert!(SpanCheck.check(&spec, &tables()).is_empty());
    }

    #[test]
    fn test_span_pedestal_branch_returns_early() {
        let mut spec = base_spec();
        spec.shape = TopShape::Round;
        spec.length_mm = 1200.0;
        spec.width_mm = 1200.0;
        spec.leg_count = 1;
        spec.leg_profile = LegProfile::Pedestal;
        let findings = SpanCheck.check(&spec, &tables());
        assert_eq!(codes(&findings), vec![RuleCode::SpanPedestal]);
    }

    #[test]
    fn test_span_pedestal_fallback_limit() {
        let mut spec = base_spec();
        spec.shape = TopShape::Round;
        spec.length_mm = 800.0;
        spec.width_mm = 800.0;
        spec.thickness_mm = 9.0;
        spec.leg_count = 1;
        spec.leg_profile = LegProfile::Pedestal;
        // 9 mm is below every pedestal tier; the 700 fallback applies.
        let findings = SpanCheck.check(&spec, &tables());
        assert_eq!(codes(&findings), vec![RuleCode::SpanPedestal]);
    }

    #[test]
    fn test_stability_footprint_ratio() {
        let mut spec = base_spec();
        spec.width_mm = 300.0;
        spec.length_mm = 1200.0;
        let findings = StabilityCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::FootprintRatio));
    }

    #[test]
    fn test_stability_pedestal_base() {
        let mut spec = base_spec();
        spec.shape = TopShape::Round;
        spec.length_mm = 1000.0;
        spec.width_mm = 1000.0;
        spec.leg_count = 1;
        spec.leg_profile = LegProfile::Pedestal;
        spec.leg_profile_size_mm = 50.0;
        spec.total_height_mm = 750.0;
        spec.leg_height_mm = 730.0;
        let findings = StabilityCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::PedestalBase));
    }

    #[test]
    fn test_stability_foot_base_for_tall_slim_legs() {
        let mut spec = base_spec();
        spec.leg_profile_size_mm = 40.0;
        let findings = StabilityCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::FootBaseRequired));

        spec.has_foot_base = true;
        let findings = StabilityCheck.check(&spec, &tables());
        assert!(!codes(&findings).contains(&RuleCode::FootBaseRequired));
    }

    #[test]
    fn test_stability_radial_skips_pedestal_rules() {
        let mut spec = base_spec();
        spec.leg_count = 1;
        spec.leg_profile = LegProfile::RadialHalfCylinder;
        spec.leg_profile_size_mm = 20.0;
        spec.spread_radius_mm = Some(400.0);
        spec.halfcylinder_count = Some(4);
        let findings = StabilityCheck.check(&spec, &tables());
        assert!(!codes(&findings).contains(&RuleCode::PedestalBase));
        assert!(!codes(&findings).contains(&RuleCode::FootBaseRequired));
    }

    #[test]
    fn test_leg_radial_branch_bypasses_standard_rules() {
        let mut spec = base_spec();
        spec.leg_profile = LegProfile::RadialHalfCylinder;
        spec.leg_profile_size_mm = 5.0; // far below every metal minimum
        spec.spread_radius_mm = Some(200.0);
        spec.halfcylinder_count = Some(4);
        spec.total_height_mm = 750.0;
        spec.leg_height_mm = 730.0;
        let findings = LegCheck.check(&spec, &tables());
        let cs = codes(&findings);
        assert!(cs.contains(&RuleCode::RadialSpread));
        assert!(cs.contains(&RuleCode::RadialDiameter));
        assert!(!cs.contains(&RuleCode::MetalProfile));
        assert!(!cs.contains(&RuleCode::Slenderness));
        assert!(!cs.contains(&RuleCode::PedestalShape));
    }

    #[test]
    fn test_leg_radial_minimum_count() {
        let mut spec = base_spec();
        spec.leg_profile = LegProfile::RadialHalfCylinder;
        spec.leg_profile_size_mm = 100.0;
        spec.spread_radius_mm = Some(400.0);
        spec.halfcylinder_count = Some(2);
        let findings = LegCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::RadialCount));
    }

    #[test]
    fn test_leg_metal_profile_minimum() {
        let mut spec = base_spec();
        spec.leg_profile_size_mm = 20.0;
        let findings = LegCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::MetalProfile));
    }

    #[test]
    fn test_leg_wood_height_tiers() {
        let mut spec = base_spec();
        spec.leg_material = LegMaterial::Oak;
        spec.leg_profile_size_mm = 50.0;
        spec.leg_height_mm = 700.0;
        // 50 passes the low tier but the 700 mm leg needs 60.
        let findings = LegCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::WoodProfile));
    }

    #[test]
    fn test_leg_slenderness() {
        let mut spec = base_spec();
        spec.leg_profile = LegProfile::Round;
        spec.leg_profile_size_mm = 30.0;
        spec.leg_height_mm = 700.0;
        // 700 / 30 = 23.3, above the metal limit of 18.
        let findings = LegCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::Slenderness));
    }

    #[test]
    fn test_leg_pedestal_requires_round_or_square() {
        let mut spec = base_spec();
        spec.leg_count = 1;
        spec.leg_profile = LegProfile::Pedestal;
        spec.leg_profile_size_mm = 100.0;
        let findings = LegCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::PedestalShape));

        spec.shape = TopShape::Square;
        spec.width_mm = spec.length_mm;
        let findings = LegCheck.check(&spec, &tables());
        assert!(!codes(&findings).contains(&RuleCode::PedestalShape));
    }

    #[test]
    fn test_leg_symmetry_warning_on_curved_tops() {
        let mut spec = base_spec();
        spec.shape = TopShape::Oval;
        let findings = LegCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::LegSymmetry));
        assert!(findings.iter().all(|f| f.rule != RuleCode::LegSymmetry || f.severity() == crate::validation::Severity::Warning));
    }

    #[test]
    fn test_height_bounds_both_directions() {
        let mut spec = base_spec();
        spec.total_height_mm = 500.0;
        spec.leg_height_mm = 480.0;
        let findings = HeightCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::HeightBounds));

        spec.total_height_mm = 1200.0;
        spec.leg_height_mm = 1180.0;
        let findings = HeightCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::HeightBounds));
    }

    #[test]
    fn test_height_consistency_tolerance() {
        let mut spec = base_spec();
        spec.total_height_mm = 721.5;
        assert!(HeightCheck.check(&spec, &tables()).is_empty());

        spec.total_height_mm = 730.0;
        let findings = HeightCheck.check(&spec, &tables());
        assert_eq!(codes(&findings), vec![RuleCode::HeightConsistency]);
    }

    #[test]
    fn test_edge_mitered_needs_thickness() {
        let mut spec = base_spec();
        spec.edge = EdgeFinish::Mitered;
        spec.thickness_mm = 9.0;
        spec.leg_height_mm = 711.0;
        let findings = EdgeCheck.check(&spec, &tables());
        assert_eq!(codes(&findings), vec![RuleCode::EdgeThickness]);
    }

    #[test]
    fn test_edge_composite_judged_on_face() {
        let mut spec = base_spec();
        spec.edge = EdgeFinish::Mitered;
        spec.construction = Construction::Composite;
        spec.thickness_mm = 40.0;
        spec.face_thickness_mm = Some(9.0);
        // Plenty of total thickness, but the face carries the miter.
        let findings = EdgeCheck.check(&spec, &tables());
        assert_eq!(codes(&findings), vec![RuleCode::EdgeThickness]);
    }

    #[test]
    fn test_composite_face_minimum() {
        let mut spec = base_spec();
        spec.material = TopMaterial::Quartz;
        spec.construction = Construction::Composite;
        spec.thickness_mm = 30.0;
        spec.face_thickness_mm = Some(4.0);
        let findings = CompositeCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::CompositeFace));
        assert!(!codes(&findings).contains(&RuleCode::CompositeCore));
    }

    #[test]
    fn test_composite_core_minimum() {
        let mut spec = base_spec();
        spec.construction = Construction::Composite;
        spec.thickness_mm = 24.0;
        spec.face_thickness_mm = Some(9.0);
        // Core is 6 mm, below the 10 mm minimum.
        let findings = CompositeCheck.check(&spec, &tables());
        assert!(codes(&findings).contains(&RuleCode::CompositeCore));
        // The total-thickness guard fires alongside; it is implied by the
        // core condition.
        assert!(codes(&findings).contains(&RuleCode::CompositeTotal));
    }

    #[test]
    fn test_composite_skipped_for_solid() {
        let spec = base_spec();
        assert!(CompositeCheck.check(&spec, &tables()).is_empty());
    }
}
