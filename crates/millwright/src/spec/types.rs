//! Enumerated field domains for table specifications.

use serde::{Deserialize, Serialize};

/// Top slab material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopMaterial {
    /// Sintered stone (large-format ceramic).
    SinteredStone,
    /// Engineered quartz composite.
    Quartz,
    /// Natural granite.
    Granite,
    /// Natural marble.
    Marble,
}

impl TopMaterial {
    /// All materials, in display order.
    pub const ALL: [TopMaterial; 4] = [
        TopMaterial::SinteredStone,
        TopMaterial::Quartz,
        TopMaterial::Granite,
        TopMaterial::Marble,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TopMaterial::SinteredStone => "Sintered stone",
            TopMaterial::Quartz => "Quartz",
            TopMaterial::Granite => "Granite",
            TopMaterial::Marble => "Marble",
        }
    }
}

/// How the top is built up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Construction {
    /// A single slab of full thickness.
    Solid,
    /// Two thin face panels bonded around a lightweight core.
    Composite,
}

/// Outline shape of the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopShape {
    Rectangle,
    Square,
    Oval,
    Round,
    Custom,
}

impl TopShape {
    /// Round tops use their diameter as the unsupported span.
    pub fn is_round(&self) -> bool {
        matches!(self, TopShape::Round)
    }

    /// Shapes curved enough that corner leg placement needs care.
    pub fn is_curved(&self) -> bool {
        matches!(self, TopShape::Round | TopShape::Oval)
    }
}

/// Edge machining applied to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeFinish {
    Straight,
    Beveled,
    Rounded,
    Mitered,
}

impl EdgeFinish {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EdgeFinish::Straight => "Straight",
            EdgeFinish::Beveled => "Beveled",
            EdgeFinish::Rounded => "Rounded",
            EdgeFinish::Mitered => "Mitered",
        }
    }
}

/// Leg material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegMaterial {
    Steel,
    StainlessSteel,
    Aluminum,
    Oak,
    Beech,
}

impl LegMaterial {
    pub fn is_metal(&self) -> bool {
        matches!(
            self,
            LegMaterial::Steel | LegMaterial::StainlessSteel | LegMaterial::Aluminum
        )
    }

    pub fn is_wood(&self) -> bool {
        !self.is_metal()
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            LegMaterial::Steel => "Steel",
            LegMaterial::StainlessSteel => "Stainless steel",
            LegMaterial::Aluminum => "Aluminum",
            LegMaterial::Oak => "Oak",
            LegMaterial::Beech => "Beech",
        }
    }
}

/// Cross-section / construction type of the legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegProfile {
    Round,
    Square,
    Rectangular,
    Trestle,
    Pedestal,
    /// Several curved half-cylinder segments arranged around a center.
    /// Carries its own rule set, independent of the standard leg rules.
    RadialHalfCylinder,
}

impl LegProfile {
    pub fn is_radial(&self) -> bool {
        matches!(self, LegProfile::RadialHalfCylinder)
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            LegProfile::Round => "Round",
            LegProfile::Square => "Square",
            LegProfile::Rectangular => "Rectangular",
            LegProfile::Trestle => "Trestle",
            LegProfile::Pedestal => "Pedestal",
            LegProfile::RadialHalfCylinder => "Radial half-cylinder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_classes() {
        assert!(LegMaterial::Steel.is_metal());
        assert!(LegMaterial::StainlessSteel.is_metal());
        assert!(LegMaterial::Aluminum.is_metal());
        assert!(LegMaterial::Oak.is_wood());
        assert!(LegMaterial::Beech.is_wood());
    }

    #[test]
    fn test_shape_predicates() {
        assert!(TopShape::Round.is_round());
        assert!(!TopShape::Oval.is_round());
        assert!(TopShape::Oval.is_curved());
        assert!(!TopShape::Rectangle.is_curved());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&TopMaterial::SinteredStone).unwrap();
        assert_eq!(json, "\"sintered_stone\"");
        let back: TopMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TopMaterial::SinteredStone);
    }
}
