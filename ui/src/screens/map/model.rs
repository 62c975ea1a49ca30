use crate::charts::choropleth_fill;
use crate::core::config::VizConfig;
use crate::data::{Catalog, Category, Device};
use crate::metrics::aggregate_regions;

/// Everything shown for one sourcing country, on hover or in the list fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionInfo {
    pub code: String,
    pub country: String,
    pub flag: String,
    pub materials: Vec<String>,
    pub dominant: Option<Category>,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapModel {
    /// Sorted by material count, busiest first.
    pub regions: Vec<RegionInfo>,
    pub max_count: usize,
    pub empty_fill: String,
}

impl MapModel {
    pub fn build(device: &Device, catalog: &Catalog, config: &VizConfig) -> Self {
        let sourcing = aggregate_regions(device, catalog);
        let max_count = sourcing
            .iter()
            .map(|region| region.material_count())
            .max()
            .unwrap_or(0);

        let regions = sourcing
            .into_iter()
            .map(|region| {
                let dominant = region.dominant_category();
                let base = dominant
                    .map(Category::color)
                    .unwrap_or(config.neutral_fill.as_str());
                let fill = choropleth_fill(base, region.material_count(), max_count, config.min_opacity)
                    .map(|rgb| rgb.to_hex())
                    .unwrap_or_else(|err| {
                        tracing::debug!(error = %err, "falling back to neutral region fill");
                        config.neutral_fill.clone()
                    });
                RegionInfo {
                    code: region.code,
                    country: region.country,
                    flag: region.flag,
                    materials: region.materials,
                    dominant,
                    fill,
                }
            })
            .collect();

        Self {
            regions,
            max_count,
            empty_fill: config.empty_fill.clone(),
        }
    }

    pub fn info(&self, code: &str) -> Option<&RegionInfo> {
        self.regions.iter().find(|region| region.code == code)
    }

    /// Fill for a map region; regions without sourcing data get the fixed empty fill.
    pub fn fill(&self, code: &str) -> &str {
        self.info(code)
            .map(|region| region.fill.as_str())
            .unwrap_or(&self.empty_fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::Rgb;
    use crate::data::bundled;

    #[test]
    fn busiest_region_gets_full_category_color() {
        let data = bundled().unwrap();
        let config = VizConfig::default();
        let model = MapModel::build(&data.devices[0], &data.catalog, &config);

        let top = &model.regions[0];
        assert_eq!(top.materials.len(), model.max_count);
        let dominant = top.dominant.unwrap();
        assert_eq!(top.fill, Rgb::parse(dominant.color()).unwrap().to_hex());
    }

    #[test]
    fn single_material_region_gets_minimum_blend() {
        let data = bundled().unwrap();
        let config = VizConfig::default();
        let model = MapModel::build(&data.devices[0], &data.catalog, &config);
        assert!(model.max_count > 1);

        let single = model
            .regions
            .iter()
            .find(|region| region.materials.len() == 1)
            .expect("some country supplies a single material");
        let expected = Rgb::parse(single.dominant.unwrap().color())
            .unwrap()
            .from_white(config.min_opacity)
            .to_hex();
        assert_eq!(single.fill, expected);
    }

    #[test]
    fn regions_without_data_use_empty_fill() {
        let data = bundled().unwrap();
        let config = VizConfig::default();
        let model = MapModel::build(&data.devices[0], &data.catalog, &config);
        assert_eq!(model.fill("IS"), config.empty_fill);
        assert!(model.info("IS").is_none());
    }
}
