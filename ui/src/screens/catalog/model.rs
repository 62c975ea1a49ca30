use crate::data::Dataset;
use crate::metrics::DerivedStats;

/// One tile in the device grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceCard {
    pub id: String,
    pub name: String,
    pub year: u16,
    pub chip: String,
    pub frame: String,
    pub retail_price: f64,
    pub raw_material_cost: f64,
    pub carbon_footprint: f64,
    pub material_count: usize,
    pub selected: bool,
}

/// Cards in dataset order; `selected` marks the last chosen device.
pub fn device_cards(dataset: &Dataset, selected: Option<&str>) -> Vec<DeviceCard> {
    dataset
        .devices
        .iter()
        .map(|device| {
            let stats = DerivedStats::compute(device, &dataset.catalog);
            DeviceCard {
                id: device.id.clone(),
                name: device.name.clone(),
                year: device.year,
                chip: device.chip.clone(),
                frame: device.frame.clone(),
                retail_price: device.retail_price,
                raw_material_cost: stats.raw_material_cost,
                carbon_footprint: device.carbon_footprint,
                material_count: device.materials.len(),
                selected: selected == Some(device.id.as_str()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bundled;

    #[test]
    fn cards_follow_dataset_order() {
        let data = bundled().unwrap();
        let cards = device_cards(data, None);
        let ids: Vec<_> = cards.iter().map(|card| card.id.as_str()).collect();
        let expected: Vec<_> = data.devices.iter().map(|device| device.id.as_str()).collect();
        assert_eq!(ids, expected);
        assert!(cards.iter().all(|card| !card.selected));
    }

    #[test]
    fn previous_selection_is_marked() {
        let data = bundled().unwrap();
        let id = data.devices[2].id.clone();
        let cards = device_cards(data, Some(&id));
        assert_eq!(cards.iter().filter(|card| card.selected).count(), 1);
        assert!(cards[2].selected);
    }
}
