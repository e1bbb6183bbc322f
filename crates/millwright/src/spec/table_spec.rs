//! The table specification submitted for validation.

use serde::{Deserialize, Serialize};

use super::types::{Construction, EdgeFinish, LegMaterial, LegProfile, TopMaterial, TopShape};

/// A complete table specification.
///
/// This is the immutable input to every rule checker. All lengths are in
/// millimeters. Constructing one does not imply it is buildable; that is
/// what validation decides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    // Top
    pub material: TopMaterial,
    pub construction: Construction,
    pub thickness_mm: f64,
    /// Face panel thickness; only meaningful for composite construction.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub face_thickness_mm: Option<f64>,
    pub shape: TopShape,
    pub length_mm: f64,
    pub width_mm: f64,
    pub edge: EdgeFinish,

    // Legs
    pub leg_count: u8,
    pub leg_material: LegMaterial,
    pub leg_profile: LegProfile,
    pub leg_profile_size_mm: f64,
    /// Second cross-section dimension; only meaningful for rectangular profiles.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub leg_profile_width_mm: Option<f64>,
    pub leg_height_mm: f64,
    pub has_foot_base: bool,
    /// Number of half-cylinder segments; radial bases only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub halfcylinder_count: Option<u8>,
    /// Radius from center to segment centerline; radial bases only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spread_radius_mm: Option<f64>,

    // Whole table
    pub total_height_mm: f64,
}

impl TableSpec {
    /// Worst-case unsupported distance across the top: the diameter for
    /// round tops, otherwise the diagonal of length x width.
    pub fn effective_span_mm(&self) -> f64 {
        if self.shape.is_round() {
            self.length_mm
        } else {
            (self.length_mm * self.length_mm + self.width_mm * self.width_mm).sqrt()
        }
    }

    /// The longer of length and width.
    pub fn long_dimension_mm(&self) -> f64 {
        self.length_mm.max(self.width_mm)
    }

    /// Derived core thickness for composite tops: total minus both faces.
    /// Returns `None` for solid construction or when no face thickness is set.
    pub fn core_thickness_mm(&self) -> Option<f64> {
        match self.construction {
            Construction::Composite => self
                .face_thickness_mm
                .map(|face| self.thickness_mm - 2.0 * face),
            Construction::Solid => None,
        }
    }

    /// Ground footprint used for tip-over checks. Radial bases span twice
    /// their spread radius; everything else is judged on the top's width,
    /// the narrower and therefore conservative dimension.
    pub fn footprint_mm(&self) -> f64 {
        if self.leg_profile.is_radial() {
            self.spread_radius_mm.unwrap_or(0.0) * 2.0
        } else {
            self.width_mm
        }
    }

    /// True when the whole top rests on a single support column. Radial
    /// bases are their own category and never count as single-support.
    pub fn is_single_support(&self) -> bool {
        self.leg_profile == LegProfile::Pedestal
            || (self.leg_count == 1 && !self.leg_profile.is_radial())
    }
}

/// A partially assembled specification, as the configurator holds it while
/// the user is still choosing fields. Every field is optional; absent
/// fields contribute no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialTableSpec {
    pub material: Option<TopMaterial>,
    pub construction: Option<Construction>,
    pub thickness_mm: Option<f64>,
    pub face_thickness_mm: Option<f64>,
    pub shape: Option<TopShape>,
    pub length_mm: Option<f64>,
    pub width_mm: Option<f64>,
    pub edge: Option<EdgeFinish>,
    pub leg_count: Option<u8>,
    pub leg_material: Option<LegMaterial>,
    pub leg_profile: Option<LegProfile>,
    pub leg_profile_size_mm: Option<f64>,
    pub leg_profile_width_mm: Option<f64>,
    pub leg_height_mm: Option<f64>,
    pub has_foot_base: Option<bool>,
    pub halfcylinder_count: Option<u8>,
    pub spread_radius_mm: Option<f64>,
    pub total_height_mm: Option<f64>,
}

impl PartialTableSpec {
    /// Effective span when both dimensions (or the diameter) are known.
    pub fn effective_span_mm(&self) -> Option<f64> {
        match (self.shape, self.length_mm, self.width_mm) {
            (Some(shape), Some(len), _) if shape.is_round() => Some(len),
            (_, Some(len), Some(wid)) => Some((len * len + wid * wid).sqrt()),
            _ => None,
        }
    }

    /// The longer known dimension, if any dimension is known.
    pub fn long_dimension_mm(&self) -> Option<f64> {
        match (self.length_mm, self.width_mm) {
            (Some(l), Some(w)) => Some(l.max(w)),
            (Some(l), None) => Some(l),
            (None, Some(w)) => Some(w),
            (None, None) => None,
        }
    }

    /// True when enough is known to say the table is single-support.
    pub fn is_single_support(&self) -> bool {
        let radial = self.leg_profile == Some(LegProfile::RadialHalfCylinder);
        self.leg_profile == Some(LegProfile::Pedestal)
            || (self.leg_count == Some(1) && !radial)
    }
}

impl From<&TableSpec> for PartialTableSpec {
    fn from(spec: &TableSpec) -> Self {
        Self {
            material: Some(spec.material),
            construction: Some(spec.construction),
            thickness_mm: Some(spec.thickness_mm),
            face_thickness_mm: spec.face_thickness_mm,
            shape: Some(spec.shape),
            length_mm: Some(spec.length_mm),
            width_mm: Some(spec.width_mm),
            edge: Some(spec.edge),
            leg_count: Some(spec.leg_count),
            leg_material: Some(spec.leg_material),
            leg_profile: Some(spec.leg_profile),
            leg_profile_size_mm: Some(spec.leg_profile_size_mm),
            leg_profile_width_mm: spec.leg_profile_width_mm,
            leg_height_mm: Some(spec.leg_height_mm),
            has_foot_base: Some(spec.has_foot_base),
            halfcylinder_count: spec.halfcylinder_count,
            spread_radius_mm: spec.spread_radius_mm,
            total_height_mm: Some(spec.total_height_mm),
        }
    }
}
