//! Typed records for the bundled dataset. Field names follow the JSON document
//! (camelCase) so the data file can be authored by hand.

use serde::{Deserialize, Serialize};

pub type MaterialId = String;
pub type DeviceId = String;

/// Closed set of material categories.
///
/// Declaration order doubles as the priority order used to break ties when a
/// region sources the same number of materials from several categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    StructuralMetal,
    PreciousMetal,
    BatteryMineral,
    RareEarth,
    Semiconductor,
    GlassCeramic,
    Polymer,
}

impl Category {
    pub const PRIORITY: [Category; 7] = [
        Category::StructuralMetal,
        Category::PreciousMetal,
        Category::BatteryMineral,
        Category::RareEarth,
        Category::Semiconductor,
        Category::GlassCeramic,
        Category::Polymer,
    ];

    /// Representative colour for map shading.
    pub fn color(self) -> &'static str {
        match self {
            Category::StructuralMetal => "#8fa3bf",
            Category::PreciousMetal => "#e0b03c",
            Category::BatteryMineral => "#3fa7d6",
            Category::RareEarth => "#b565d9",
            Category::Semiconductor => "#4fc48a",
            Category::GlassCeramic => "#5fd0d0",
            Category::Polymer => "#e07a5f",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::StructuralMetal => "Structural metal",
            Category::PreciousMetal => "Precious metal",
            Category::BatteryMineral => "Battery mineral",
            Category::RareEarth => "Rare earth",
            Category::Semiconductor => "Semiconductor",
            Category::GlassCeramic => "Glass & ceramic",
            Category::Polymer => "Polymer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoProfile {
    /// kg CO₂e per kg extracted.
    pub co2_per_kg: f64,
    /// Litres per kg extracted.
    pub water_per_kg: f64,
    pub summary: String,
}

/// One country's share of a material's supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub country: String,
    /// ISO 3166-1 alpha-2; matches the region ids in the world map.
    pub code: String,
    pub flag: String,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub category: Category,
    pub color: String,
    pub icon: String,
    /// USD per kg.
    pub price_per_kg: f64,
    pub eco: EcoProfile,
    #[serde(default)]
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsage {
    pub id: MaterialId,
    pub grams: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Improved,
    Neutral,
}

/// Evolution note relative to the previous model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub text: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub year: u16,
    /// Grams.
    pub weight: f64,
    pub frame: String,
    pub chip: String,
    pub retail_price: f64,
    pub bom_cost: f64,
    /// Lifecycle kg CO₂e.
    pub carbon_footprint: f64,
    /// Lifecycle litres.
    pub water_footprint: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_source: Option<String>,
    pub materials: Vec<MaterialUsage>,
    #[serde(default)]
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub text: String,
}
