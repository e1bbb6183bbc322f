//! Threshold tables and shared threshold derivation.
//!
//! Every structural rule in the engine reads its numbers from [`RuleTables`].
//! The checkers and the constraint calculator both go through the derivation
//! methods here, so a threshold is computed in exactly one place regardless
//! of whether it is being enforced on a complete specification or used to
//! bound a field the user is still editing.
//!
//! Tables are plain data with a [`Default`] impl holding the production
//! values; tests inject alternates.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::spec::{Construction, EdgeFinish, LegMaterial, LegProfile, TopMaterial};

/// Per-material thickness rules for the top slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRule {
    pub material: TopMaterial,
    /// Absolute minimum slab thickness.
    pub min_thickness_mm: f64,
    /// Long-dimension threshold above which the stricter minimum applies.
    pub span_trigger_mm: f64,
    /// Minimum thickness once the trigger is exceeded.
    pub span_min_thickness_mm: f64,
    /// Minimum face panel thickness in composite construction.
    pub min_face_mm: f64,
}

/// One multi-leg span tier: tops at least this thick may span this far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanTier {
    pub min_thickness_mm: f64,
    pub max_span_mm: f64,
    /// Materials this tier is rated for.
    pub materials: Vec<TopMaterial>,
}

/// One pedestal span tier, keyed on thickness alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PedestalTier {
    pub min_thickness_mm: f64,
    pub max_span_mm: f64,
}

/// Minimum profile size for a metal leg, per material and profile type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetalProfileRule {
    pub material: LegMaterial,
    pub profile: LegProfile,
    pub min_size_mm: f64,
}

/// The complete threshold configuration consulted by checkers, the
/// suggester, and the constraint calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTables {
    pub materials: Vec<MaterialRule>,

    /// Sorted descending by `min_thickness_mm`.
    pub span_tiers: Vec<SpanTier>,
    /// Sorted descending by `min_thickness_mm`.
    pub pedestal_tiers: Vec<PedestalTier>,
    /// Conservative limit when the top is thinner than every pedestal tier.
    pub pedestal_span_fallback_mm: f64,
    /// Sandwich stiffness bonus applied to allowed spans of composite tops.
    pub composite_span_factor: f64,

    /// Minimum footprint / total height ratio.
    pub min_footprint_ratio: f64,
    /// Minimum pedestal base diameter as a fraction of total height.
    pub pedestal_base_fraction: f64,
    /// Leg height above which a stabilizing foot base may be required.
    pub foot_base_height_trigger_mm: f64,
    pub foot_base_min_profile_metal_mm: f64,
    pub foot_base_min_profile_wood_mm: f64,

    /// Minimum spread radius as a fraction of total height (radial bases).
    pub radial_spread_ratio: f64,
    pub radial_min_count: u8,
    pub radial_min_diameter_mm: f64,

    pub metal_profile_minimums: Vec<MetalProfileRule>,
    /// Leg height splitting the two wood profile tiers.
    pub wood_tier_height_mm: f64,
    pub wood_min_profile_low_mm: f64,
    pub wood_min_profile_high_mm: f64,
    pub max_slenderness_wood: f64,
    pub max_slenderness_metal: f64,

    pub min_total_height_mm: f64,
    pub max_total_height_mm: f64,
    pub height_tolerance_mm: f64,

    pub edge_min_mitered_mm: f64,
    pub edge_min_beveled_mm: f64,

    pub min_core_mm: f64,

    // Editing bounds. Only the constraint calculator reads these; they cap
    // what the configurator offers, not what validation accepts.
    pub thickness_floor_mm: f64,
    pub thickness_ceiling_mm: f64,
    pub standard_thicknesses_mm: Vec<f64>,
    pub dimension_floor_mm: f64,
    pub dimension_ceiling_mm: f64,
    pub profile_floor_mm: f64,
    pub profile_ceiling_mm: f64,
    pub spread_floor_mm: f64,
    pub spread_ceiling_mm: f64,
    pub halfcylinder_max_count: u8,
    pub default_total_height_mm: f64,
}

impl Default for RuleTables {
    fn default() -> Self {
        use LegMaterial::*;
        use LegProfile::*;
        use TopMaterial::*;

        let all = vec![SinteredStone, Quartz, Granite, Marble];

        // Pedestal bases are sized by the stability rules, not here.
        let metal_profile_minimums = [
            (Steel, Round, 30.0),
            (Steel, Square, 25.0),
            (Steel, Rectangular, 25.0),
            (Steel, Trestle, 40.0),
            (StainlessSteel, Round, 30.0),
            (StainlessSteel, Square, 25.0),
            (StainlessSteel, Rectangular, 25.0),
            (StainlessSteel, Trestle, 40.0),
            (Aluminum, Round, 40.0),
            (Aluminum, Square, 35.0),
            (Aluminum, Rectangular, 35.0),
            (Aluminum, Trestle, 50.0),
        ]
        .into_iter()
        .map(|(material, profile, min_size_mm)| MetalProfileRule {
            material,
            profile,
            min_size_mm,
        })
        .collect();

        Self {
            materials: vec![
                MaterialRule {
                    material: SinteredStone,
                    min_thickness_mm: 9.0,
                    span_trigger_mm: 2000.0,
                    span_min_thickness_mm: 12.0,
                    min_face_mm: 9.0,
                },
                MaterialRule {
                    material: Quartz,
                    min_thickness_mm: 12.0,
                    span_trigger_mm: 1800.0,
                    span_min_thickness_mm: 20.0,
                    min_face_mm: 12.0,
                },
                MaterialRule {
                    material: Granite,
                    min_thickness_mm: 20.0,
                    span_trigger_mm: 2000.0,
                    span_min_thickness_mm: 30.0,
                    min_face_mm: 15.0,
                },
                MaterialRule {
                    material: Marble,
                    min_thickness_mm: 20.0,
                    span_trigger_mm: 1800.0,
                    span_min_thickness_mm: 30.0,
                    min_face_mm: 15.0,
                },
            ],
            span_tiers: vec![
                SpanTier {
                    min_thickness_mm: 30.0,
                    max_span_mm: 2700.0,
                    materials: all.clone(),
                },
                SpanTier {
                    min_thickness_mm: 20.0,
                    max_span_mm: 2200.0,
                    materials: all,
                },
                SpanTier {
                    min_thickness_mm: 12.0,
                    max_span_mm: 1500.0,
                    materials: vec![SinteredStone, Quartz],
                },
                SpanTier {
                    min_thickness_mm: 9.0,
                    max_span_mm: 1200.0,
                    materials: vec![SinteredStone],
                },
            ],
            pedestal_tiers: vec![
                PedestalTier {
                    min_thickness_mm: 30.0,
                    max_span_mm: 1300.0,
                },
                PedestalTier {
                    min_thickness_mm: 20.0,
                    max_span_mm: 1100.0,
                },
                PedestalTier {
                    min_thickness_mm: 12.0,
                    max_span_mm: 900.0,
                },
            ],
            pedestal_span_fallback_mm: 700.0,
            composite_span_factor: 1.4,

            min_footprint_ratio: 0.5,
            pedestal_base_fraction: 0.12,
            foot_base_height_trigger_mm: 600.0,
            foot_base_min_profile_metal_mm: 60.0,
            foot_base_min_profile_wood_mm: 80.0,

            radial_spread_ratio: 0.4,
            radial_min_count: 3,
            radial_min_diameter_mm: 80.0,

            metal_profile_minimums,
            wood_tier_height_mm: 400.0,
            wood_min_profile_low_mm: 45.0,
            wood_min_profile_high_mm: 60.0,
            max_slenderness_wood: 12.0,
            max_slenderness_metal: 18.0,

            min_total_height_mm: 550.0,
            max_total_height_mm: 1100.0,
            height_tolerance_mm: 2.0,

            edge_min_mitered_mm: 12.0,
            edge_min_beveled_mm: 10.0,

            min_core_mm: 10.0,

            thickness_floor_mm: 6.0,
            thickness_ceiling_mm: 60.0,
            standard_thicknesses_mm: vec![9.0, 12.0, 20.0, 30.0],
            dimension_floor_mm: 200.0,
            dimension_ceiling_mm: 3200.0,
            profile_floor_mm: 10.0,
            profile_ceiling_mm: 200.0,
            spread_floor_mm: 50.0,
            spread_ceiling_mm: 800.0,
            halfcylinder_max_count: 8,
            default_total_height_mm: 750.0,
        }
    }
}

/// Process-wide default tables.
pub static DEFAULT_TABLES: Lazy<RuleTables> = Lazy::new(RuleTables::default);

impl RuleTables {
    fn material_rule(&self, material: TopMaterial) -> Option<&MaterialRule> {
        self.materials.iter().find(|r| r.material == material)
    }

    /// Absolute minimum slab thickness for a material.
    pub fn min_thickness(&self, material: TopMaterial) -> Option<f64> {
        self.material_rule(material).map(|r| r.min_thickness_mm)
    }

    /// Stricter minimum thickness once the top's long dimension exceeds the
    /// material's span trigger. `None` when the trigger is not exceeded.
    pub fn span_triggered_min_thickness(
        &self,
        material: TopMaterial,
        long_dimension_mm: f64,
    ) -> Option<f64> {
        self.material_rule(material).and_then(|r| {
            (long_dimension_mm > r.span_trigger_mm).then_some(r.span_min_thickness_mm)
        })
    }

    /// Minimum face panel thickness for composite tops of a material.
    pub fn min_face_thickness(&self, material: TopMaterial) -> Option<f64> {
        self.material_rule(material).map(|r| r.min_face_mm)
    }

    /// Allowed unsupported span for a multi-leg table.
    ///
    /// Selects the tier with the highest thickness requirement that the
    /// actual thickness satisfies, among tiers rated for the material.
    /// `None` means no tier matches, i.e. no limit is defined.
    pub fn multi_leg_span_limit(
        &self,
        material: TopMaterial,
        thickness_mm: f64,
        construction: Construction,
    ) -> Option<f64> {
        self.span_tiers
            .iter()
            .filter(|t| t.materials.contains(&material) && thickness_mm >= t.min_thickness_mm)
            .max_by(|a, b| a.min_thickness_mm.total_cmp(&b.min_thickness_mm))
            .map(|t| self.apply_span_factor(t.max_span_mm, construction))
    }

    /// Smallest tier thickness whose rated span carries `span_mm`.
    /// `None` when even the thickest tier cannot.
    pub fn thickness_for_span(
        &self,
        material: TopMaterial,
        span_mm: f64,
        construction: Construction,
    ) -> Option<f64> {
        self.span_tiers
            .iter()
            .filter(|t| {
                t.materials.contains(&material)
                    && self.apply_span_factor(t.max_span_mm, construction) >= span_mm
            })
            .map(|t| t.min_thickness_mm)
            .min_by(f64::total_cmp)
    }

    /// Largest span any tier rates this material for.
    pub fn best_span_limit(&self, material: TopMaterial, construction: Construction) -> Option<f64> {
        self.span_tiers
            .iter()
            .filter(|t| t.materials.contains(&material))
            .map(|t| self.apply_span_factor(t.max_span_mm, construction))
            .max_by(f64::total_cmp)
    }

    fn apply_span_factor(&self, span_mm: f64, construction: Construction) -> f64 {
        match construction {
            Construction::Composite => span_mm * self.composite_span_factor,
            Construction::Solid => span_mm,
        }
    }

    /// Allowed span for a pedestal table: reverse-sorted thickness lookup
    /// with a conservative fallback below every tier.
    pub fn pedestal_span_limit(&self, thickness_mm: f64) -> f64 {
        self.pedestal_tiers
            .iter()
            .find(|t| thickness_mm >= t.min_thickness_mm)
            .map(|t| t.max_span_mm)
            .unwrap_or(self.pedestal_span_fallback_mm)
    }

    /// Smallest pedestal tier thickness that carries `span_mm`, if any.
    pub fn pedestal_thickness_for_span(&self, span_mm: f64) -> Option<f64> {
        self.pedestal_tiers
            .iter()
            .filter(|t| t.max_span_mm >= span_mm)
            .map(|t| t.min_thickness_mm)
            .min_by(f64::total_cmp)
    }

    /// Largest span any pedestal tier allows.
    pub fn pedestal_best_span_limit(&self) -> f64 {
        self.pedestal_tiers
            .iter()
            .map(|t| t.max_span_mm)
            .max_by(f64::total_cmp)
            .unwrap_or(self.pedestal_span_fallback_mm)
    }

    /// Minimum ground footprint for a given total height.
    pub fn min_footprint(&self, total_height_mm: f64) -> f64 {
        self.min_footprint_ratio * total_height_mm
    }

    /// Minimum pedestal base diameter for a given total height.
    pub fn pedestal_min_base(&self, total_height_mm: f64) -> f64 {
        self.pedestal_base_fraction * total_height_mm
    }

    /// Profile size below which a tall leg needs a stabilizing foot base.
    pub fn foot_base_min_profile(&self, leg_material: LegMaterial) -> f64 {
        if leg_material.is_metal() {
            self.foot_base_min_profile_metal_mm
        } else {
            self.foot_base_min_profile_wood_mm
        }
    }

    /// Minimum spread radius of a radial base for a given total height.
    pub fn min_spread(&self, total_height_mm: f64) -> f64 {
        self.radial_spread_ratio * total_height_mm
    }

    /// Minimum profile size for a metal leg; `None` when the combination
    /// has no entry (no rule defined).
    pub fn metal_min_profile(
        &self,
        material: LegMaterial,
        profile: LegProfile,
    ) -> Option<f64> {
        self.metal_profile_minimums
            .iter()
            .find(|r| r.material == material && r.profile == profile)
            .map(|r| r.min_size_mm)
    }

    /// Minimum profile size for a wood leg, tiered on leg height.
    pub fn wood_min_profile(&self, leg_height_mm: f64) -> f64 {
        if leg_height_mm > self.wood_tier_height_mm {
            self.wood_min_profile_high_mm
        } else {
            self.wood_min_profile_low_mm
        }
    }

    /// Maximum allowed slenderness (height / profile size) per material class.
    pub fn max_slenderness(&self, leg_material: LegMaterial) -> f64 {
        if leg_material.is_wood() {
            self.max_slenderness_wood
        } else {
            self.max_slenderness_metal
        }
    }

    /// Smallest profile size that keeps a leg within its slenderness limit.
    pub fn min_profile_for_slenderness(
        &self,
        leg_material: LegMaterial,
        leg_height_mm: f64,
    ) -> f64 {
        leg_height_mm / self.max_slenderness(leg_material)
    }

    /// Minimum machinable thickness for an edge finish; `None` when the
    /// finish is unconstrained.
    pub fn edge_min_thickness(&self, edge: EdgeFinish) -> Option<f64> {
        match edge {
            EdgeFinish::Mitered => Some(self.edge_min_mitered_mm),
            EdgeFinish::Beveled => Some(self.edge_min_beveled_mm),
            EdgeFinish::Straight | EdgeFinish::Rounded => None,
        }
    }

    /// Smallest standard gauge at or above `min_mm`, if one exists.
    pub fn standard_thickness_at_least(&self, min_mm: f64) -> Option<f64> {
        self.standard_thicknesses_mm
            .iter()
            .copied()
            .filter(|t| *t >= min_mm)
            .min_by(f64::total_cmp)
    }
}
