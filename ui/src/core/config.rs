//! Presentation constants, overridable as a whole through Dioxus context.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Donut radius in SVG user units (the donut view box is 220×220).
    pub donut_radius: f64,
    /// Headline stat count-up duration.
    pub animation_ms: u64,
    pub frame_ms: u64,
    /// Lightest blend used for a region that sources a single material.
    pub min_opacity: f64,
    /// Minimum width of any stacked-bar segment, in percent.
    pub stack_floor_pct: f64,
    /// Fill for regions with no sourcing data.
    pub empty_fill: String,
    /// Fill used when a category colour cannot be parsed.
    pub neutral_fill: String,
    /// Override for the world map location (URL on web, path on native).
    pub map_asset: Option<String>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            donut_radius: 86.0,
            animation_ms: 800,
            frame_ms: 16,
            min_opacity: 0.3,
            stack_floor_pct: 1.0,
            empty_fill: "#2a2f3a".to_string(),
            neutral_fill: "#6b7280".to_string(),
            map_asset: None,
        }
    }
}

impl VizConfig {
    pub fn donut_circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.donut_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_defaults() {
        let cfg: VizConfig = serde_json::from_str(r#"{ "animation_ms": 0 }"#).unwrap();
        assert_eq!(cfg.animation_ms, 0);
        assert_eq!(cfg.donut_radius, 86.0);
        assert_eq!(cfg.min_opacity, 0.3);
    }
}
