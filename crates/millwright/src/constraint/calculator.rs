//! Live field bounding for partially assembled specifications.
//!
//! The configurator calls this on every edit to re-bound the numeric
//! fields the user has not finished choosing. Bounds are re-derived from
//! the same threshold functions the checkers consult; fields that are
//! still unknown contribute no restriction.

use serde::{Deserialize, Serialize};

use crate::rules::RuleTables;
use crate::spec::{Construction, LegProfile, PartialTableSpec};

/// The currently legal range for one numeric field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConstraint {
    pub min: f64,
    pub max: f64,
    /// A sensible default inside the range, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<f64>,
    /// Which rule is binding, in display register.
    pub reason: String,
}

impl FieldConstraint {
    fn new(min: f64, max: f64, reason: impl Into<String>) -> Self {
        Self {
            min,
            max,
            recommended: None,
            reason: reason.into(),
        }
    }

    fn with_recommended(mut self, recommended: f64) -> Self {
        self.recommended = Some(recommended);
        self
    }

    /// Raise the lower bound if `candidate` is tighter, replacing the
    /// reason so it always names the binding rule.
    fn raise_min(&mut self, candidate: f64, reason: impl Into<String>) {
        if candidate > self.min {
            self.min = candidate;
            self.reason = reason.into();
        }
    }

    /// Lower the upper bound if `candidate` is tighter.
    fn lower_max(&mut self, candidate: f64, reason: impl Into<String>) {
        if candidate < self.max {
            self.max = candidate;
            self.reason = reason.into();
        }
    }
}

/// Per-field constraints for everything numeric in a specification.
///
/// Conditional fields are present only when the chosen construction or
/// base type makes them meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConstraints {
    pub thickness_mm: FieldConstraint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_thickness_mm: Option<FieldConstraint>,
    pub length_mm: FieldConstraint,
    pub width_mm: FieldConstraint,
    pub leg_profile_size_mm: FieldConstraint,
    pub leg_height_mm: FieldConstraint,
    pub total_height_mm: FieldConstraint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread_radius_mm: Option<FieldConstraint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halfcylinder_count: Option<FieldConstraint>,
}

/// Derives field constraints from whatever part of a specification the
/// user has filled in so far.
pub struct ConstraintCalculator;

impl ConstraintCalculator {
    pub fn derive(partial: &PartialTableSpec, tables: &RuleTables) -> FieldConstraints {
        let radial = partial.leg_profile == Some(LegProfile::RadialHalfCylinder);
        let composite = partial.construction == Some(Construction::Composite);

        FieldConstraints {
            thickness_mm: Self::thickness(partial, tables, composite),
            face_thickness_mm: composite.then(|| Self::face_thickness(partial, tables)),
            length_mm: Self::length(partial, tables),
            width_mm: Self::width(partial, tables, radial),
            leg_profile_size_mm: Self::leg_profile_size(partial, tables, radial),
            leg_height_mm: Self::leg_height(partial, tables),
            total_height_mm: Self::total_height(partial, tables, radial),
            spread_radius_mm: radial.then(|| Self::spread_radius(partial, tables)),
            halfcylinder_count: radial.then(|| Self::halfcylinder_count(tables)),
        }
    }

    fn thickness(
        partial: &PartialTableSpec,
        tables: &RuleTables,
        composite: bool,
    ) -> FieldConstraint {
        let mut c = FieldConstraint::new(
            tables.thickness_floor_mm,
            tables.thickness_ceiling_mm,
            "general thickness range",
        );

        if let Some(material) = partial.material {
            if !composite {
                if let Some(min) = tables.min_thickness(material) {
                    c.raise_min(
                        min,
                        format!("{} slabs start at {:.0} mm", material.label(), min),
                    );
                }
                if let Some(long) = partial.long_dimension_mm() {
                    if let Some(required) = tables.span_triggered_min_thickness(material, long)
                    {
                        c.raise_min(
                            required,
                            format!(
                                "tops over {:.0} mm long need {:.0} mm in {}",
                                long,
                                required,
                                material.label()
                            ),
                        );
                    }
                }
            }
        }

        if let Some(span) = partial.effective_span_mm() {
            if partial.is_single_support() {
                // Spans inside the conservative fallback are legal at any
                // thickness; the pedestal tiers are material-independent.
                if span > tables.pedestal_span_fallback_mm {
                    if let Some(required) = tables.pedestal_thickness_for_span(span) {
                        c.raise_min(
                            required,
                            format!(
                                "a pedestal under a {:.0} mm span needs {:.0} mm",
                                span, required
                            ),
                        );
                    }
                }
            } else if let Some(material) = partial.material {
                let construction = partial.construction.unwrap_or(Construction::Solid);
                if let Some(required) = tables.thickness_for_span(material, span, construction) {
                    c.raise_min(
                        required,
                        format!(
                            "spanning {:.0} mm unsupported needs {:.0} mm",
                            span, required
                        ),
                    );
                }
            }
        }

        if composite {
            if let Some(face) = partial.face_thickness_mm {
                let min_total = 2.0 * face + tables.min_core_mm;
                c.raise_min(
                    min_total,
                    format!("two {:.0} mm faces plus the minimum core", face),
                );
            }
        } else if let Some(edge) = partial.edge {
            if let Some(min) = tables.edge_min_thickness(edge) {
                c.raise_min(
                    min,
                    format!("a {} edge needs {:.0} mm to machine", edge.label().to_lowercase(), min),
                );
            }
        }

        if let Some(standard) = tables.standard_thickness_at_least(c.min) {
            c = c.with_recommended(standard);
        }
        c
    }

    fn face_thickness(partial: &PartialTableSpec, tables: &RuleTables) -> FieldConstraint {
        let ceiling = (tables.thickness_ceiling_mm - tables.min_core_mm) / 2.0;
        let mut c = FieldConstraint::new(1.0, ceiling, "general face panel range");

        if let Some(material) = partial.material {
            if let Some(min) = tables.min_face_thickness(material) {
                c.raise_min(
                    min,
                    format!("{} face panels start at {:.0} mm", material.label(), min),
                );
            }
        }

        if let Some(edge) = partial.edge {
            if let Some(min) = tables.edge_min_thickness(edge) {
                c.raise_min(
                    min,
                    format!(
                        "a {} edge is machined into the face and needs {:.0} mm",
                        edge.label().to_lowercase(),
                        min
                    ),
                );
            }
        }

        if let Some(total) = partial.thickness_mm {
            c.lower_max(
                (total - tables.min_core_mm) / 2.0,
                "the core between the faces must keep its minimum",
            );
        }

        let recommended = c.min;
        c.with_recommended(recommended)
    }

    fn length(partial: &PartialTableSpec, tables: &RuleTables) -> FieldConstraint {
        let mut c = FieldConstraint::new(
            tables.dimension_floor_mm,
            tables.dimension_ceiling_mm,
            "general length range",
        );

        if let Some(limit) = Self::span_limit(partial, tables) {
            let round = partial.shape.map(|s| s.is_round()).unwrap_or(false);
            if round {
                c.lower_max(limit, "the unsupported diameter is capped by the span rules");
            } else if let Some(width) = partial.width_mm {
                if limit > width {
                    let max_len = (limit * limit - width * width).sqrt();
                    c.lower_max(max_len, "the diagonal is capped by the span rules");
                } else {
                    c.lower_max(
                        tables.dimension_floor_mm,
                        "the width alone already uses up the allowed span",
                    );
                }
            }
        }

        c
    }

    fn width(partial: &PartialTableSpec, tables: &RuleTables, radial: bool) -> FieldConstraint {
        let mut c = FieldConstraint::new(
            tables.dimension_floor_mm,
            tables.dimension_ceiling_mm,
            "general width range",
        );

        // Tip-over: the top's width is the footprint for non-radial bases.
        if !radial {
            if let Some(height) = partial.total_height_mm {
                c.raise_min(
                    tables.min_footprint(height),
                    format!("a {:.0} mm tall table needs this much footprint", height),
                );
            }
        }

        if let Some(limit) = Self::span_limit(partial, tables) {
            let round = partial.shape.map(|s| s.is_round()).unwrap_or(false);
            if round {
                c.lower_max(limit, "the unsupported diameter is capped by the span rules");
            } else if let Some(length) = partial.length_mm {
                if limit > length {
                    let max_wid = (limit * limit - length * length).sqrt();
                    c.lower_max(max_wid, "the diagonal is capped by the span rules");
                }
            }
        }

        c
    }

    /// The span limit derivable from what is known so far, if any.
    fn span_limit(partial: &PartialTableSpec, tables: &RuleTables) -> Option<f64> {
        let thickness = partial.thickness_mm?;
        if partial.is_single_support() {
            return Some(tables.pedestal_span_limit(thickness));
        }
        let material = partial.material?;
        let construction = partial.construction.unwrap_or(Construction::Solid);
        tables.multi_leg_span_limit(material, thickness, construction)
    }

    fn leg_profile_size(
        partial: &PartialTableSpec,
        tables: &RuleTables,
        radial: bool,
    ) -> FieldConstraint {
        let mut c = FieldConstraint::new(
            tables.profile_floor_mm,
            tables.profile_ceiling_mm,
            "general profile range",
        );

        if radial {
            c.raise_min(
                tables.radial_min_diameter_mm,
                "half-cylinder segments have a minimum diameter",
            );
            return c;
        }

        match (partial.leg_material, partial.leg_profile) {
            (Some(material), Some(profile)) if material.is_metal() => {
                if let Some(min) = tables.metal_min_profile(material, profile) {
                    c.raise_min(
                        min,
                        format!(
                            "{} {} legs start at {:.0} mm",
                            material.label().to_lowercase(),
                            profile.label().to_lowercase(),
                            min
                        ),
                    );
                }
            }
            (Some(material), _) if material.is_wood() => {
                // Without a leg height the lower tier is the most
                // permissive requirement that can apply.
                let min = partial
                    .leg_height_mm
                    .map(|h| tables.wood_min_profile(h))
                    .unwrap_or(tables.wood_min_profile_low_mm);
                c.raise_min(min, "wooden legs have a height-tiered minimum");
            }
            _ => {}
        }

        if let (Some(material), Some(height)) = (partial.leg_material, partial.leg_height_mm) {
            let min = tables.min_profile_for_slenderness(material, height);
            c.raise_min(
                min,
                format!("{:.0} mm legs buckle below this profile", height),
            );
        }

        if partial.is_single_support() && !radial {
            if let Some(height) = partial.total_height_mm {
                c.raise_min(
                    tables.pedestal_min_base(height),
                    "a pedestal base scales with the table height",
                );
            }
        }

        c
    }

    fn leg_height(partial: &PartialTableSpec, tables: &RuleTables) -> FieldConstraint {
        let (min, max, recommended) = match partial.thickness_mm {
            Some(t) => (
                tables.min_total_height_mm - t,
                tables.max_total_height_mm - t,
                tables.default_total_height_mm - t,
            ),
            None => (
                tables.min_total_height_mm - tables.thickness_ceiling_mm,
                tables.max_total_height_mm - tables.thickness_floor_mm,
                tables.default_total_height_mm - tables.thickness_floor_mm,
            ),
        };
        FieldConstraint::new(min, max, "leg height plus top must land in the height range")
            .with_recommended(recommended)
    }

    fn total_height(
        partial: &PartialTableSpec,
        tables: &RuleTables,
        radial: bool,
    ) -> FieldConstraint {
        let mut c = FieldConstraint::new(
            tables.min_total_height_mm,
            tables.max_total_height_mm,
            "general table height range",
        );

        // Tip-over bound from what is known of the footprint.
        let footprint = if radial {
            partial.spread_radius_mm.map(|r| r * 2.0)
        } else {
            partial.width_mm
        };
        if let Some(fp) = footprint {
            c.lower_max(
                fp / tables.min_footprint_ratio,
                "taller tables need a wider footprint",
            );
        }

        if radial {
            if let Some(spread) = partial.spread_radius_mm {
                c.lower_max(
                    spread / tables.radial_spread_ratio,
                    "the base spread limits the height",
                );
            }
        }

        // Not `clamp`: a collapsed range (min above max) must not panic,
        // it is how conflicts surface to the configurator.
        let recommended = tables.default_total_height_mm.min(c.max).max(c.min);
        c.with_recommended(recommended)
    }

    fn spread_radius(partial: &PartialTableSpec, tables: &RuleTables) -> FieldConstraint {
        let mut c = FieldConstraint::new(
            tables.spread_floor_mm,
            tables.spread_ceiling_mm,
            "general spread range",
        );

        if let Some(height) = partial.total_height_mm {
            c.raise_min(
                tables.min_spread(height),
                format!("a {:.0} mm tall table needs this much spread", height),
            );
            // The plain footprint rule is implied: half the required
            // footprint is always below the spread minimum.
        }

        let recommended = c.min;
        c.with_recommended(recommended)
    }

    fn halfcylinder_count(tables: &RuleTables) -> FieldConstraint {
        FieldConstraint::new(
            tables.radial_min_count as f64,
            tables.halfcylinder_max_count as f64,
            "segment count for a stable radial base",
        )
        .with_recommended(tables.radial_min_count as f64 + 1.0)
    }
}
