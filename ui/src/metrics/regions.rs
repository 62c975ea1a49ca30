use std::collections::{BTreeMap, HashMap};

use super::derived::resolved_usages;
use crate::data::{Catalog, Category, Device};

/// Everything one country supplies to a device.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSourcing {
    /// ISO code, used as the map region id.
    pub code: String,
    pub country: String,
    pub flag: String,
    /// Distinct material names in first-seen order.
    pub materials: Vec<String>,
    /// Distinct material count per category, iterated in priority order.
    pub categories: BTreeMap<Category, usize>,
}

impl RegionSourcing {
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Category with the strictly highest material count. Ties go to the
    /// category listed first in `Category::PRIORITY`.
    pub fn dominant_category(&self) -> Option<Category> {
        let mut best: Option<(Category, usize)> = None;
        for (&category, &count) in &self.categories {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((category, count)),
            }
        }
        best.map(|(category, _)| category)
    }
}

/// Per-country aggregation, most materials first. Countries with equal counts
/// keep the order in which they were first encountered.
pub fn aggregate_regions(device: &Device, catalog: &Catalog) -> Vec<RegionSourcing> {
    let mut regions: Vec<RegionSourcing> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for usage in resolved_usages(device, catalog) {
        let material = usage.material;
        for source in &material.sources {
            let slot = *index.entry(source.code.clone()).or_insert_with(|| {
                regions.push(RegionSourcing {
                    code: source.code.clone(),
                    country: source.country.clone(),
                    flag: source.flag.clone(),
                    materials: Vec::new(),
                    categories: BTreeMap::new(),
                });
                regions.len() - 1
            });

            let region = &mut regions[slot];
            if !region.materials.iter().any(|name| name == &material.name) {
                region.materials.push(material.name.clone());
                *region.categories.entry(material.category).or_insert(0) += 1;
            }
        }
    }

    regions.sort_by(|a, b| b.material_count().cmp(&a.material_count()));
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::derived::tests::{device, material};

    #[test]
    fn counts_distinct_materials_per_country() {
        let catalog = Catalog::from(vec![
            material("aluminum", 2.0, &[("China", "CN"), ("Australia", "AU")]),
            material("cobalt", 30.0, &[("DR Congo", "CD"), ("China", "CN")]),
        ]);
        let d = device(&[("aluminum", 10.0), ("cobalt", 5.0), ("aluminum", 1.0), ("nope", 1.0)]);
        let regions = aggregate_regions(&d, &catalog);

        assert_eq!(regions[0].code, "CN");
        assert_eq!(regions[0].material_count(), 2);
        assert_eq!(regions.len(), 3);
        let codes: Vec<_> = regions.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["CN", "AU", "CD"]);
    }

    #[test]
    fn dominant_category_prefers_strict_majority() {
        let region = RegionSourcing {
            code: "CN".into(),
            country: "China".into(),
            flag: String::new(),
            materials: vec!["a".into(), "b".into(), "c".into()],
            categories: BTreeMap::from([(Category::StructuralMetal, 1), (Category::RareEarth, 2)]),
        };
        assert_eq!(region.dominant_category(), Some(Category::RareEarth));
    }

    #[test]
    fn dominant_category_ties_follow_priority_order() {
        let region = RegionSourcing {
            code: "CN".into(),
            country: "China".into(),
            flag: String::new(),
            materials: vec!["a".into(), "b".into()],
            categories: BTreeMap::from([(Category::Polymer, 1), (Category::BatteryMineral, 1)]),
        };
        assert_eq!(region.dominant_category(), Some(Category::BatteryMineral));
    }

    #[test]
    fn empty_region_has_no_dominant_category() {
        let region = RegionSourcing {
            code: "XX".into(),
            country: "Nowhere".into(),
            flag: String::new(),
            materials: Vec::new(),
            categories: BTreeMap::new(),
        };
        assert_eq!(region.dominant_category(), None);
    }
}
