//! Cross-device comparison tables.

use crate::charts::stacked;
use crate::core::config::VizConfig;
use crate::data::{Dataset, Device};
use crate::metrics::{DerivedStats, LifecycleSplit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMetric {
    Carbon,
    Water,
    RawCost,
    Retail,
    Co2Split,
}

impl CompareMetric {
    pub const ALL: [CompareMetric; 5] = [
        CompareMetric::Carbon,
        CompareMetric::Water,
        CompareMetric::RawCost,
        CompareMetric::Retail,
        CompareMetric::Co2Split,
    ];
}

/// Extraction/manufacturing parts of a split row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitParts {
    pub extraction: f64,
    pub manufacturing: f64,
    /// Track widths in percent. Together they span the row's `fill`; a
    /// negative or tiny part still keeps the stacked-bar floor.
    pub extraction_pct: f64,
    pub manufacturing_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareRow {
    pub device_id: String,
    pub name: String,
    pub year: u16,
    pub value: f64,
    /// Bar width relative to the largest value, 0..=1.
    pub fill: f64,
    pub split: Option<SplitParts>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareTable {
    pub metric: CompareMetric,
    pub rows: Vec<CompareRow>,
}

impl CompareTable {
    pub fn build(
        dataset: &Dataset,
        metric: CompareMetric,
        selected: Option<&str>,
        config: &VizConfig,
    ) -> Self {
        let mut rows: Vec<CompareRow> = dataset
            .devices
            .iter()
            .map(|device| row(dataset, device, metric, selected))
            .collect();

        rows.sort_by(|a, b| b.value.total_cmp(&a.value));

        let max = rows.iter().map(|row| row.value).fold(0.0_f64, f64::max);
        for row in &mut rows {
            row.fill = if max > 0.0 { row.value / max } else { 0.0 };
            if let Some(split) = row.split.as_mut() {
                let widths = stacked(
                    &[split.extraction, split.manufacturing],
                    row.value,
                    config.stack_floor_pct,
                );
                split.extraction_pct = widths[0] * row.fill;
                split.manufacturing_pct = widths[1] * row.fill;
            }
        }

        Self { metric, rows }
    }

    /// One table per metric, in display order.
    pub fn all(dataset: &Dataset, selected: Option<&str>, config: &VizConfig) -> Vec<Self> {
        CompareMetric::ALL
            .iter()
            .map(|&metric| Self::build(dataset, metric, selected, config))
            .collect()
    }
}

fn row(dataset: &Dataset, device: &Device, metric: CompareMetric, selected: Option<&str>) -> CompareRow {
    let stats = DerivedStats::compute(device, &dataset.catalog);
    let (value, split) = match metric {
        CompareMetric::Carbon => (device.carbon_footprint, None),
        CompareMetric::Water => (stats.total_water, None),
        CompareMetric::RawCost => (stats.raw_material_cost, None),
        CompareMetric::Retail => (device.retail_price, None),
        CompareMetric::Co2Split => {
            let co2 = LifecycleSplit::compute(device, &stats).co2;
            (
                co2.extraction + co2.manufacturing,
                Some(SplitParts {
                    extraction: co2.extraction,
                    manufacturing: co2.manufacturing,
                    extraction_pct: 0.0,
                    manufacturing_pct: 0.0,
                }),
            )
        }
    };

    CompareRow {
        device_id: device.id.clone(),
        name: device.name.clone(),
        year: device.year,
        value,
        fill: 0.0,
        split,
        highlighted: selected == Some(device.id.as_str()),
    }
}
