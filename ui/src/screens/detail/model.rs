//! View model for the device detail screen.

use std::collections::BTreeSet;

use crate::charts::{bars, radial, stacked, ArcSegment, Datum};
use crate::core::config::VizConfig;
use crate::core::format;
use crate::data::{Category, Change, Dataset, Device, Insight, Source};
use crate::metrics::{line_items, DerivedStats, LifecycleSplit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    RawCost,
    BomCost,
    Retail,
    Markup,
    Co2,
    Water,
    Countries,
    Mass,
}

impl StatKind {
    pub fn format(self, value: f64) -> String {
        match self {
            StatKind::RawCost => format::format_currency(value, 2),
            StatKind::BomCost | StatKind::Retail => format::format_currency(value, 0),
            StatKind::Markup => format::format_markup(value),
            StatKind::Co2 | StatKind::Water | StatKind::Countries => format::format_integer(value),
            StatKind::Mass => format::format_grams(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub kind: StatKind,
    pub target: f64,
    /// False when the figure is undefined (e.g. markup with no resolved materials).
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceHeader {
    pub name: String,
    pub year: u16,
    pub frame: String,
    pub chip: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutModel {
    pub radius: f64,
    pub circumference: f64,
    pub segments: Vec<ArcSegment>,
    pub total_grams: f64,
}

impl DonutModel {
    /// Centre readout for a hovered segment: its grams and a
    /// `"<material> · <share>"` caption. `None` falls back to the total.
    pub fn readout(&self, hovered: Option<usize>) -> Option<(String, String)> {
        let segment = self.segments.get(hovered?)?;
        Some((
            format::format_grams(segment.value),
            format!(
                "{} · {}",
                segment.label,
                format::format_percent(segment.share * 100.0)
            ),
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MassBar {
    pub key: String,
    pub label: String,
    pub color: String,
    pub grams: f64,
    /// Percent of the heaviest material.
    pub fill_pct: f64,
    /// Percent of the resolved mass.
    pub share_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownKind {
    Co2,
    Water,
    Cost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Extraction,
    Manufacturing,
    RawMaterials,
    Assembly,
    Other,
}

impl SegmentKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            SegmentKind::Extraction | SegmentKind::RawMaterials => "breakdown__segment--extraction",
            SegmentKind::Manufacturing | SegmentKind::Assembly => "breakdown__segment--manufacturing",
            SegmentKind::Other => "breakdown__segment--other",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSegment {
    pub kind: SegmentKind,
    pub value: f64,
    pub width_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub kind: BreakdownKind,
    pub total: f64,
    pub segments: Vec<BreakdownSegment>,
}

impl Breakdown {
    fn new(kind: BreakdownKind, total: f64, parts: &[(SegmentKind, f64)], floor_pct: f64) -> Self {
        let values: Vec<f64> = parts.iter().map(|(_, value)| *value).collect();
        let widths = stacked(&values, total, floor_pct);
        let segments = parts
            .iter()
            .zip(widths)
            .map(|(&(kind, value), width_pct)| BreakdownSegment {
                kind,
                value,
                width_pct,
            })
            .collect();
        Self {
            kind,
            total,
            segments,
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        match self.kind {
            BreakdownKind::Co2 => format::format_kg(value),
            BreakdownKind::Water => format!("{} L", format::format_integer(value)),
            BreakdownKind::Cost => format::format_currency(value, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCard {
    /// Shared with the donut segment and mass bar for the same line.
    pub key: String,
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: Category,
    pub color: String,
    pub grams: f64,
    pub share_pct: f64,
    pub price_per_kg: f64,
    pub cost: f64,
    pub co2: f64,
    pub water: f64,
    pub sources: Vec<Source>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel {
    pub device_id: String,
    pub header: DeviceHeader,
    pub stats: Vec<StatTile>,
    pub donut: DonutModel,
    pub bars: Vec<MassBar>,
    pub breakdowns: Vec<Breakdown>,
    pub cards: Vec<MaterialCard>,
    pub changes: Vec<Change>,
    pub carbon_source: Option<String>,
    pub insights: Vec<Insight>,
}

impl DetailModel {
    pub fn build(dataset: &Dataset, device: &Device, config: &VizConfig) -> Self {
        let catalog = &dataset.catalog;
        let stats = DerivedStats::compute(device, catalog);
        let split = LifecycleSplit::compute(device, &stats);
        let lines = line_items(device, catalog);

        let series: Vec<Datum> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                Datum::new(
                    line_key(index, &line.material.id),
                    line.material.name.clone(),
                    line.grams,
                    line.material.color.clone(),
                )
            })
            .collect();

        let donut = DonutModel {
            radius: config.donut_radius,
            circumference: config.donut_circumference(),
            segments: radial(&series, config.donut_circumference()),
            total_grams: stats.resolved_grams,
        };

        let mass_bars = bars(&series)
            .into_iter()
            .map(|row| MassBar {
                share_pct: if stats.resolved_grams > 0.0 {
                    row.value / stats.resolved_grams * 100.0
                } else {
                    0.0
                },
                fill_pct: row.fill * 100.0,
                grams: row.value,
                key: row.key,
                label: row.label,
                color: row.color,
            })
            .collect();

        let markup = stats.markup(device);
        let stat_tiles = vec![
            tile(StatKind::RawCost, stats.raw_material_cost),
            tile(StatKind::BomCost, device.bom_cost),
            tile(StatKind::Retail, device.retail_price),
            StatTile {
                kind: StatKind::Markup,
                target: markup.unwrap_or(0.0),
                available: markup.is_some(),
            },
            tile(StatKind::Co2, device.carbon_footprint),
            tile(StatKind::Water, stats.total_water),
            tile(StatKind::Countries, stats.sourcing_country_count as f64),
            tile(StatKind::Mass, stats.resolved_grams),
        ];

        let floor = config.stack_floor_pct;
        let breakdowns = vec![
            Breakdown::new(
                BreakdownKind::Co2,
                split.co2.total,
                &[
                    (SegmentKind::Extraction, split.co2.extraction),
                    (SegmentKind::Manufacturing, split.co2.manufacturing),
                ],
                floor,
            ),
            Breakdown::new(
                BreakdownKind::Water,
                split.water.total,
                &[
                    (SegmentKind::Extraction, split.water.extraction),
                    (SegmentKind::Manufacturing, split.water.manufacturing),
                ],
                floor,
            ),
            Breakdown::new(
                BreakdownKind::Cost,
                split.cost.retail,
                &[
                    (SegmentKind::RawMaterials, split.cost.raw_materials),
                    (SegmentKind::Assembly, split.cost.manufacturing),
                    (SegmentKind::Other, split.cost.other),
                ],
                floor,
            ),
        ];

        let cards = lines
            .iter()
            .enumerate()
            .map(|(index, line)| MaterialCard {
                key: line_key(index, &line.material.id),
                id: line.material.id.clone(),
                name: line.material.name.clone(),
                icon: line.material.icon.clone(),
                category: line.material.category,
                color: line.material.color.clone(),
                grams: line.grams,
                share_pct: line.share * 100.0,
                price_per_kg: line.material.price_per_kg,
                cost: line.cost,
                co2: line.co2,
                water: line.water,
                sources: line.material.sources.clone(),
                summary: line.material.eco.summary.clone(),
            })
            .collect();

        Self {
            device_id: device.id.clone(),
            header: DeviceHeader {
                name: device.name.clone(),
                year: device.year,
                frame: device.frame.clone(),
                chip: device.chip.clone(),
                weight: device.weight,
            },
            stats: stat_tiles,
            donut,
            bars: mass_bars,
            breakdowns,
            cards,
            changes: device.changes.clone(),
            carbon_source: device.carbon_source.clone(),
            insights: dataset.insights.clone(),
        }
    }

    /// Animation targets, in tile order.
    pub fn stat_targets(&self) -> Vec<f64> {
        self.stats.iter().map(|tile| tile.target).collect()
    }
}

/// A device may list the same material more than once; the line position
/// keeps keys unique.
fn line_key(index: usize, material_id: &str) -> String {
    format!("{index}-{material_id}")
}

/// Open material cards, by card key. Clicking a card toggles it; clicking
/// its mass bar only ever opens it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardExpansion {
    open: BTreeSet<String>,
}

impl CardExpansion {
    pub fn is_open(&self, key: &str) -> bool {
        self.open.contains(key)
    }

    /// Returns the new state of the card.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.open.remove(key) {
            false
        } else {
            self.open.insert(key.to_string());
            true
        }
    }

    pub fn reveal(&mut self, key: &str) {
        self.open.insert(key.to_string());
    }
}

fn tile(kind: StatKind, target: f64) -> StatTile {
    StatTile {
        kind,
        target,
        available: true,
    }
}

/// Headline targets for a device, used to start the count-up animation.
pub fn headline_targets(dataset: &Dataset, device_id: &str, config: &VizConfig) -> Option<Vec<f64>> {
    let device = dataset.device(device_id)?;
    Some(DetailModel::build(dataset, device, config).stat_targets())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bundled;

    fn model(index: usize) -> DetailModel {
        let data = bundled().unwrap();
        DetailModel::build(data, &data.devices[index], &VizConfig::default())
    }

    #[test]
    fn has_eight_headline_stats() {
        let detail = model(0);
        assert_eq!(detail.stats.len(), 8);
        assert!(detail.stats.iter().all(|tile| tile.available));
    }

    #[test]
    fn donut_closes_the_circle() {
        let detail = model(2);
        let total: f64 = detail.donut.segments.iter().map(|s| s.length).sum();
        assert!((total - detail.donut.circumference).abs() < 1e-6);
    }

    #[test]
    fn heaviest_bar_is_full_width() {
        let detail = model(1);
        assert_eq!(detail.bars[0].fill_pct, 100.0);
        let share: f64 = detail.bars.iter().map(|bar| bar.share_pct).sum();
        assert!((share - 100.0).abs() < 1e-6);
    }

    #[test]
    fn breakdown_widths_sum_to_hundred_with_visible_extraction() {
        for breakdown in model(3).breakdowns {
            let sum: f64 = breakdown.segments.iter().map(|s| s.width_pct).sum();
            assert!((sum - 100.0).abs() < 1e-9, "{:?}", breakdown.kind);
            assert!(breakdown.segments[0].width_pct >= 1.0);
        }
    }

    #[test]
    fn headline_targets_skip_unknown_devices() {
        let data = bundled().unwrap();
        let config = VizConfig::default();
        assert!(headline_targets(data, "nope", &config).is_none());
        let targets = headline_targets(data, &data.devices[0].id, &config).unwrap();
        assert_eq!(targets, model(0).stat_targets());
    }

    #[test]
    fn repeated_materials_get_distinct_keys_shared_across_views() {
        let raw = serde_json::json!({
            "materials": [
                {"id": "copper", "name": "Copper", "category": "structural-metal", "color": "#b87333",
                 "icon": "c", "pricePerKg": 9.0,
                 "eco": {"co2PerKg": 4.0, "waterPerKg": 100.0, "summary": ""}}
            ],
            "phones": [
                {"id": "p", "name": "P", "year": 2020, "weight": 150.0, "frame": "f", "chip": "c",
                 "retailPrice": 500.0, "bomCost": 200.0, "carbonFootprint": 50.0, "waterFootprint": 1.0,
                 "materials": [{"id": "copper", "grams": 8.0}, {"id": "copper", "grams": 3.0}]}
            ],
            "insights": []
        });
        let data = Dataset::from_json(&raw.to_string()).unwrap();
        let detail = DetailModel::build(&data, &data.devices[0], &VizConfig::default());

        let card_keys: BTreeSet<&str> = detail.cards.iter().map(|card| card.key.as_str()).collect();
        let bar_keys: BTreeSet<&str> = detail.bars.iter().map(|bar| bar.key.as_str()).collect();
        let arc_keys: BTreeSet<&str> = detail.donut.segments.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(card_keys.len(), 2);
        assert_eq!(card_keys, bar_keys);
        assert_eq!(card_keys, arc_keys);
    }

    #[test]
    fn donut_readout_names_the_hovered_material() {
        let detail = model(0);
        assert_eq!(detail.donut.readout(None), None);
        assert_eq!(detail.donut.readout(Some(usize::MAX)), None);

        let first = &detail.donut.segments[0];
        let (grams, caption) = detail.donut.readout(Some(0)).unwrap();
        assert_eq!(grams, format::format_grams(first.value));
        assert!(caption.starts_with(&format!("{} · ", first.label)));
        assert!(caption.ends_with(&format::format_percent(first.share * 100.0)));
    }

    #[test]
    fn cards_toggle_and_bars_only_open() {
        let mut expansion = CardExpansion::default();
        assert!(!expansion.is_open("0-aluminum"));
        assert!(expansion.toggle("0-aluminum"));
        assert!(expansion.is_open("0-aluminum"));

        expansion.reveal("0-aluminum");
        assert!(expansion.is_open("0-aluminum"));
        assert!(!expansion.toggle("0-aluminum"));
        assert!(!expansion.is_open("0-aluminum"));

        expansion.reveal("1-glass");
        assert!(expansion.is_open("1-glass"));
    }
}
