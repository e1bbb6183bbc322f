//! Greedy single-pass repair of invalid specifications.
//!
//! For every violation the engine hands over, one rule-specific local fix
//! is applied to a private copy of the specification, in violation-list
//! order. This is a repair heuristic, not a constraint solver: fixes are
//! applied independently, a fix may invalidate a field another rule reads,
//! and the output is not re-validated here. Each fix takes the cheapest
//! direction for the user: raise thickness rather than shrink the top,
//! add a foot base rather than re-engineer the leg.

use crate::rules::RuleTables;
use crate::spec::{TableSpec, TopShape};
use crate::validation::{Finding, RuleCode};

/// Repair behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairConfig {
    /// How many repair passes the engine may run. One pass reproduces the
    /// plain greedy behavior; more passes re-check and re-repair up to a
    /// bounded fixed point.
    pub max_passes: usize,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self { max_passes: 1 }
    }
}

/// Applies per-rule local fixes to produce a repaired specification.
pub struct RepairEngine;

impl RepairEngine {
    /// Produce a repaired copy of `spec` addressing each violation once.
    ///
    /// Total height is recomputed as leg height plus thickness at the end,
    /// unconditionally, so the height bookkeeping invariant holds exactly
    /// on every suggestion.
    pub fn suggest(spec: &TableSpec, violations: &[Finding], tables: &RuleTables) -> TableSpec {
        let mut fixed = spec.clone();

        for violation in violations {
            Self::apply_fix(&mut fixed, violation.rule, tables);
        }

        fixed.total_height_mm = fixed.leg_height_mm + fixed.thickness_mm;
        fixed
    }

    fn apply_fix(spec: &mut TableSpec, rule: RuleCode, tables: &RuleTables) {
        match rule {
            RuleCode::MaterialMinThickness => {
                if let Some(min) = tables.min_thickness(spec.material) {
                    spec.thickness_mm = spec.thickness_mm.max(min);
                }
            }

            RuleCode::MaterialSpanThickness => {
                if let Some(required) =
                    tables.span_triggered_min_thickness(spec.material, spec.long_dimension_mm())
                {
                    spec.thickness_mm = spec.thickness_mm.max(required);
                }
            }

            RuleCode::SpanMultiLeg => {
                let span = spec.effective_span_mm();
                match tables.thickness_for_span(spec.material, span, spec.construction) {
                    Some(required) => spec.thickness_mm = spec.thickness_mm.max(required),
                    // No tier carries this span at any thickness; shrink
                    // the top to the limit of the current tier instead.
                    None => {
                        if let Some(limit) = tables.multi_leg_span_limit(
                            spec.material,
                            spec.thickness_mm,
                            spec.construction,
                        ) {
                            Self::shrink_span_to(spec, limit);
                        }
                    }
                }
            }

            RuleCode::SpanPedestal => {
                let span = spec.effective_span_mm();
                match tables.pedestal_thickness_for_span(span) {
                    Some(required) => spec.thickness_mm = spec.thickness_mm.max(required),
                    None => {
                        let limit = tables.pedestal_span_limit(spec.thickness_mm);
                        Self::shrink_span_to(spec, limit);
                    }
                }
            }

            RuleCode::FootprintRatio => {
                let min_footprint = tables.min_footprint(spec.total_height_mm);
                if spec.leg_profile.is_radial() {
                    let min_spread = min_footprint / 2.0;
                    let spread = spec.spread_radius_mm.unwrap_or(0.0);
                    spec.spread_radius_mm = Some(spread.max(min_spread));
                } else {
                    spec.width_mm = spec.width_mm.max(min_footprint);
                }
            }

            RuleCode::PedestalBase => {
                let min_base = tables.pedestal_min_base(spec.total_height_mm);
                spec.leg_profile_size_mm = spec.leg_profile_size_mm.max(min_base);
            }

            RuleCode::FootBaseRequired => {
                spec.has_foot_base = true;
            }

            RuleCode::RadialSpread => {
                let min_spread = tables.min_spread(spec.total_height_mm);
                let spread = spec.spread_radius_mm.unwrap_or(0.0);
                spec.spread_radius_mm = Some(spread.max(min_spread));
            }

            RuleCode::RadialCount => {
                let count = spec.halfcylinder_count.unwrap_or(0);
                spec.halfcylinder_count = Some(count.max(tables.radial_min_count));
            }

            RuleCode::RadialDiameter => {
                spec.leg_profile_size_mm =
                    spec.leg_profile_size_mm.max(tables.radial_min_diameter_mm);
            }

            RuleCode::MetalProfile => {
                if let Some(min) = tables.metal_min_profile(spec.leg_material, spec.leg_profile) {
                    spec.leg_profile_size_mm = spec.leg_profile_size_mm.max(min);
                }
            }

            RuleCode::WoodProfile => {
                let min = tables.wood_min_profile(spec.leg_height_mm);
                spec.leg_profile_size_mm = spec.leg_profile_size_mm.max(min);
            }

            RuleCode::Slenderness => {
                let min =
                    tables.min_profile_for_slenderness(spec.leg_material, spec.leg_height_mm);
                spec.leg_profile_size_mm = spec.leg_profile_size_mm.max(min);
            }

            RuleCode::PedestalShape => {
                // Keep the narrow dimension so the pedestal span stays as
                // plausible as the original top allows.
                spec.shape = match spec.shape {
                    TopShape::Oval | TopShape::Round => TopShape::Round,
                    _ => TopShape::Square,
                };
                spec.length_mm = spec.width_mm;
            }

            // The sole warning rule; nothing to repair.
            RuleCode::LegSymmetry => {}

            RuleCode::HeightBounds => {
                let clamped = spec
                    .total_height_mm
                    .clamp(tables.min_total_height_mm, tables.max_total_height_mm);
                // Adjust via the legs; the final recompute then lands the
                // total inside the bounds.
                spec.leg_height_mm = clamped - spec.thickness_mm;
            }

            // Re-established by the unconditional recompute at the end.
            RuleCode::HeightConsistency => {}

            RuleCode::EdgeThickness => {
                if let Some(min) = tables.edge_min_thickness(spec.edge) {
                    match spec.construction {
                        crate::spec::Construction::Composite => {
                            let face = spec.face_thickness_mm.unwrap_or(0.0);
                            spec.face_thickness_mm = Some(face.max(min));
                        }
                        crate::spec::Construction::Solid => {
                            spec.thickness_mm = spec.thickness_mm.max(min);
                        }
                    }
                }
            }

            RuleCode::CompositeFace => {
                if let Some(min_face) = tables.min_face_thickness(spec.material) {
                    let face = spec.face_thickness_mm.unwrap_or(0.0);
                    spec.face_thickness_mm = Some(face.max(min_face));
                }
            }

            RuleCode::CompositeCore | RuleCode::CompositeTotal => {
                let face = spec.face_thickness_mm.unwrap_or(0.0);
                let min_total = 2.0 * face + tables.min_core_mm;
                spec.thickness_mm = spec.thickness_mm.max(min_total);
            }
        }
    }

    /// Shrink the top so its effective span meets `limit`, editing as
    /// little as possible: round tops shrink their diameter, other shapes
    /// shrink the longer side.
    fn shrink_span_to(spec: &mut TableSpec, limit: f64) {
        if spec.shape.is_round() {
            spec.length_mm = limit;
            spec.width_mm = limit;
            return;
        }

        let (long, short) = if spec.length_mm >= spec.width_mm {
            (spec.length_mm, spec.width_mm)
        } else {
            (spec.width_mm, spec.length_mm)
        };

        let new_long = if limit > short {
            (limit * limit - short * short).sqrt()
        } else {
            // The short side alone exceeds the limit; fall back to a
            // square that fits the diagonal.
            let side = limit / std::f64::consts::SQRT_2;
            spec.width_mm = side;
            spec.length_mm = side;
            return;
        };

        if spec.length_mm >= spec.width_mm {
            spec.length_mm = new_long.min(long);
        } else {
            spec.width_mm = new_long.min(long);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{
        Construction, EdgeFinish, LegMaterial, LegProfile, TopMaterial,
    };
    use crate::validation::SpecField;

    fn finding(rule: RuleCode) -> Finding {
        Finding::new(rule, SpecField::Thickness, "", "")
    }

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

    #[test]
    fn test_span_fix_raises_thickness() {
        let mut spec = base_spec();
        spec.thickness_mm = 12.0;
        spec.length_mm = 1600.0;
        let fixed = RepairEngine::suggest(
            &spec,
            &[finding(RuleCode::SpanMultiLeg)],
            &RuleTables::default(),
        );
        assert_eq!(fixed.thickness_mm, 20.0);
        // Footprint untouched; thickness is the preferred direction.
        assert_eq!(fixed.length_mm, 1600.0);
        assert_eq!(fixed.width_mm, 900.0);
    }

    #[test]
    fn test_span_fix_shrinks_when_no_tier_reaches() {
        let mut spec = base_spec();
        spec.thickness_mm = 30.0;
        spec.length_mm = 3000.0;
        spec.width_mm = 1200.0;
        let tables = RuleTables::default();
        let fixed =
            RepairEngine::suggest(&spec, &[finding(RuleCode::SpanMultiLeg)], &tables);
        assert_eq!(fixed.thickness_mm, 30.0);
        let span = fixed.effective_span_mm();
        assert!(span <= 2700.0 + 1e-6);
        assert_eq!(fixed.width_mm, 1200.0);
        assert!(fixed.length_mm < 3000.0);
    }

    #[test]
    fn test_stability_fix_adds_foot_base() {
        let spec = base_spec();
        let fixed = RepairEngine::suggest(
            &spec,
            &[finding(RuleCode::FootBaseRequired)],
            &RuleTables::default(),
        );
        assert!(fixed.has_foot_base);
        // The leg itself is left alone.
        assert_eq!(fixed.leg_profile_size_mm, spec.leg_profile_size_mm);
    }

    #[test]
    fn test_radial_spread_fix_uses_height_ratio() {
        let mut spec = base_spec();
        spec.leg_profile = LegProfile::RadialHalfCylinder;
        spec.spread_radius_mm = Some(200.0);
        spec.halfcylinder_count = Some(4);
        spec.total_height_mm = 750.0;
        spec.leg_height_mm = 730.0;
        let fixed = RepairEngine::suggest(
            &spec,
            &[finding(RuleCode::RadialSpread)],
            &RuleTables::default(),
        );
        assert_eq!(fixed.spread_radius_mm, Some(300.0));
    }

    #[test]
    fn test_slenderness_fix_derives_minimum_profile() {
        let mut spec = base_spec();
        spec.leg_profile_size_mm = 30.0;
        let fixed = RepairEngine::suggest(
            &spec,
            &[finding(RuleCode::Slenderness)],
            &RuleTables::default(),
        );
        // 700 / 18 = 38.9 minimum for steel.
        assert!((fixed.leg_profile_size_mm - 700.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_height_bounds_fix_adjusts_legs() {
        let mut spec = base_spec();
        spec.total_height_mm = 500.0;
        spec.leg_height_mm = 480.0;
        let fixed = RepairEngine::suggest(
            &spec,
            &[finding(RuleCode::HeightBounds)],
            &RuleTables::default(),
        );
        assert_eq!(fixed.total_height_mm, 550.0);
        assert_eq!(fixed.leg_height_mm, 530.0);
    }

    #[test]
    fn test_pedestal_shape_fix_keeps_narrow_dimension() {
        let mut spec = base_spec();
        spec.leg_count = 1;
        spec.leg_profile = LegProfile::Pedestal;
        let fixed = RepairEngine::suggest(
            &spec,
            &[finding(RuleCode::PedestalShape)],
            &RuleTables::default(),
        );
        assert_eq!(fixed.shape, TopShape::Square);
        assert_eq!(fixed.length_mm, 900.0);
        assert_eq!(fixed.width_mm, 900.0);
    }

    #[test]
    fn test_composite_face_fix() {
        let mut spec = base_spec();
        spec.material = TopMaterial::Quartz;
        spec.construction = Construction::Composite;
        spec.thickness_mm = 30.0;
        spec.face_thickness_mm = Some(4.0);
        let fixed = RepairEngine::suggest(
            &spec,
            &[finding(RuleCode::CompositeFace)],
            &RuleTables::default(),
        );
        assert_eq!(fixed.face_thickness_mm, Some(12.0));
    }

    #[test]
    fn test_total_height_always_recomputed() {
        let mut spec = base_spec();
        spec.total_height_mm = 900.0; // inconsistent on purpose
        let fixed = RepairEngine::suggest(
            &spec,
            &[finding(RuleCode::HeightConsistency)],
            &RuleTables::default(),
        );
        assert_eq!(
            fixed.total_height_mm,
            fixed.leg_height_mm + fixed.thickness_mm
        );
    }

    #[test]
    fn test_warning_rule_is_a_no_op() {
        let spec = base_spec();
        let fixed = RepairEngine::suggest(
            &spec,
            &[finding(RuleCode::LegSymmetry)],
            &RuleTables::default(),
        );
        assert_eq!(fixed, spec);
    }
}
