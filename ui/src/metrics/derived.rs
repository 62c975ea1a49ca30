use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::{Catalog, Device, Material};

/// A usage whose material id resolved against the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedUsage<'a> {
    pub material: &'a Material,
    pub grams: f64,
}

impl ResolvedUsage<'_> {
    pub fn kg(&self) -> f64 {
        self.grams / 1000.0
    }
}

/// Usages in device order, skipping ids the catalog doesn't know.
pub fn resolved_usages<'a>(
    device: &'a Device,
    catalog: &'a Catalog,
) -> impl Iterator<Item = ResolvedUsage<'a>> + 'a {
    device.materials.iter().filter_map(move |usage| {
        match catalog.lookup(&usage.id) {
            Some(material) => Some(ResolvedUsage {
                material,
                grams: usage.grams,
            }),
            None => {
                tracing::debug!(device = %device.id, material = %usage.id, "skipping unknown material");
                None
            }
        }
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    /// USD.
    pub raw_material_cost: f64,
    /// Litres, summed from material-level factors.
    pub total_water: f64,
    /// kg CO₂e, summed from material-level factors.
    pub total_co2_materials: f64,
    pub sourcing_country_count: usize,
    /// Mass of the resolvable usages, in grams.
    pub resolved_grams: f64,
}

impl DerivedStats {
    pub fn compute(device: &Device, catalog: &Catalog) -> Self {
        let mut stats = Self::default();
        let mut countries = BTreeSet::new();

        for usage in resolved_usages(device, catalog) {
            let kg = usage.kg();
            let material = usage.material;
            stats.raw_material_cost += material.price_per_kg * kg;
            stats.total_water += material.eco.water_per_kg * kg;
            stats.total_co2_materials += material.eco.co2_per_kg * kg;
            stats.resolved_grams += usage.grams;
            countries.extend(material.sources.iter().map(|source| source.country.as_str()));
        }

        stats.sourcing_country_count = countries.len();
        stats
    }

    /// Retail price over raw material value; `None` when nothing resolved.
    pub fn markup(&self, device: &Device) -> Option<f64> {
        if self.raw_material_cost > 0.0 {
            Some(device.retail_price / self.raw_material_cost)
        } else {
            None
        }
    }
}

/// A footprint divided into the extraction share and everything after it.
/// `manufacturing` may be negative when the dataset's material factors exceed
/// the reported lifecycle total; the stacked encoder clamps it for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintSplit {
    pub extraction: f64,
    pub manufacturing: f64,
    pub total: f64,
}

impl FootprintSplit {
    pub fn new(total: f64, extraction: f64) -> Self {
        Self {
            extraction,
            manufacturing: total - extraction,
            total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSplit {
    pub raw_materials: f64,
    pub manufacturing: f64,
    pub other: f64,
    pub retail: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifecycleSplit {
    pub co2: FootprintSplit,
    pub water: FootprintSplit,
    pub cost: CostSplit,
}

impl LifecycleSplit {
    pub fn compute(device: &Device, stats: &DerivedStats) -> Self {
        Self {
            co2: FootprintSplit::new(device.carbon_footprint, stats.total_co2_materials),
            water: FootprintSplit::new(device.water_footprint, stats.total_water),
            cost: CostSplit {
                raw_materials: stats.raw_material_cost,
                manufacturing: device.bom_cost - stats.raw_material_cost,
                other: device.retail_price - device.bom_cost,
                retail: device.retail_price,
            },
        }
    }
}

/// Per-material figures for one device (detail cards, tooltips).
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLine<'a> {
    pub material: &'a Material,
    pub grams: f64,
    /// Fraction of the resolved mass, 0..=1.
    pub share: f64,
    pub cost: f64,
    pub co2: f64,
    pub water: f64,
}

/// Line items sorted by mass, heaviest first (ties keep device order).
pub fn line_items<'a>(device: &'a Device, catalog: &'a Catalog) -> Vec<MaterialLine<'a>> {
    let resolved: Vec<_> = resolved_usages(device, catalog).collect();
    let total: f64 = resolved.iter().map(|usage| usage.grams).sum();

    let mut lines: Vec<MaterialLine<'a>> = resolved
        .into_iter()
        .map(|usage| {
            let kg = usage.kg();
            MaterialLine {
                material: usage.material,
                grams: usage.grams,
                share: if total > 0.0 { usage.grams / total } else { 0.0 },
                cost: usage.material.price_per_kg * kg,
                co2: usage.material.eco.co2_per_kg * kg,
                water: usage.material.eco.water_per_kg * kg,
            }
        })
        .collect();

    lines.sort_by(|a, b| b.grams.total_cmp(&a.grams));
    lines
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::{Category, EcoProfile, MaterialUsage, Source};

    const EPS: f64 = 1e-9;

    pub(crate) fn material(id: &str, price: f64, countries: &[(&str, &str)]) -> Material {
        Material {
            id: id.into(),
            name: id.to_uppercase(),
            category: Category::StructuralMetal,
            color: "#888888".into(),
            icon: "•".into(),
            price_per_kg: price,
            eco: EcoProfile {
                co2_per_kg: 10.0,
                water_per_kg: 100.0,
                summary: String::new(),
            },
            sources: countries
                .iter()
                .map(|(country, code)| Source {
                    country: (*country).into(),
                    code: (*code).into(),
                    flag: String::new(),
                    pct: 50.0,
                })
                .collect(),
        }
    }

    pub(crate) fn device(usages: &[(&str, f64)]) -> Device {
        Device {
            id: "test".into(),
            name: "Test".into(),
            year: 2020,
            weight: 150.0,
            frame: "Aluminum".into(),
            chip: "T1".into(),
            retail_price: 800.0,
            bom_cost: 400.0,
            carbon_footprint: 70.0,
            water_footprint: 3000.0,
            carbon_source: None,
            materials: usages
                .iter()
                .map(|(id, grams)| MaterialUsage {
                    id: (*id).into(),
                    grams: *grams,
                })
                .collect(),
            changes: Vec::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from(vec![
            material("aluminum", 2.0, &[("China", "CN"), ("Australia", "AU")]),
            material("cobalt", 30.0, &[("DR Congo", "CD"), ("China", "CN")]),
        ])
    }

    #[test]
    fn sums_material_level_aggregates() {
        let stats = DerivedStats::compute(&device(&[("aluminum", 50.0), ("cobalt", 10.0)]), &catalog());
        assert!((stats.raw_material_cost - (0.1 + 0.3)).abs() < EPS);
        assert!((stats.total_co2_materials - 0.6).abs() < EPS);
        assert!((stats.total_water - 6.0).abs() < EPS);
        assert!((stats.resolved_grams - 60.0).abs() < EPS);
    }

    #[test]
    fn shared_country_counts_once() {
        let stats = DerivedStats::compute(&device(&[("aluminum", 50.0), ("cobalt", 10.0)]), &catalog());
        assert_eq!(stats.sourcing_country_count, 3);
    }

    #[test]
    fn unknown_ids_contribute_nothing() {
        let with_unknown =
            DerivedStats::compute(&device(&[("aluminum", 50.0), ("unknown_id", 10.0)]), &catalog());
        let without = DerivedStats::compute(&device(&[("aluminum", 50.0)]), &catalog());
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn markup_is_none_without_resolved_materials() {
        let d = device(&[("unknown_id", 10.0)]);
        let stats = DerivedStats::compute(&d, &catalog());
        assert_eq!(stats.markup(&d), None);

        let d = device(&[("aluminum", 50.0)]);
        let stats = DerivedStats::compute(&d, &catalog());
        assert!((stats.markup(&d).unwrap() - 8000.0).abs() < 1e-6);
    }

    #[test]
    fn cost_split_reconstructs_retail() {
        let d = device(&[("aluminum", 50.0), ("cobalt", 10.0)]);
        let stats = DerivedStats::compute(&d, &catalog());
        let cost = LifecycleSplit::compute(&d, &stats).cost;
        assert!((cost.raw_materials + cost.manufacturing + cost.other - d.retail_price).abs() < 1e-9);
    }

    #[test]
    fn footprint_split_can_go_negative() {
        let mut d = device(&[("aluminum", 50.0)]);
        d.carbon_footprint = 0.1;
        let stats = DerivedStats::compute(&d, &catalog());
        let split = LifecycleSplit::compute(&d, &stats);
        assert!(split.co2.manufacturing < 0.0);
        assert!((split.co2.extraction + split.co2.manufacturing - split.co2.total).abs() < EPS);
    }

    #[test]
    fn line_items_sorted_by_mass_and_share_sums_to_one() {
        let d = device(&[("cobalt", 10.0), ("aluminum", 50.0)]);
        let catalog = catalog();
        let lines = line_items(&d, &catalog);
        assert_eq!(lines[0].material.id, "aluminum");
        let share: f64 = lines.iter().map(|line| line.share).sum();
        assert!((share - 1.0).abs() < EPS);
    }
}
