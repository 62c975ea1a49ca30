use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::model::{Device, Insight, Material};
use crate::core::error::DataError;

const BUNDLED_JSON: &str = include_str!("../../assets/data/dataset.json");

static BUNDLED: Lazy<Result<Dataset, DataError>> = Lazy::new(|| Dataset::from_json(BUNDLED_JSON));

/// The dataset shipped with the app, parsed on first access.
pub fn bundled() -> Result<&'static Dataset, &'static DataError> {
    BUNDLED.as_ref()
}

/// Material reference table keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Material>", into = "Vec<Material>")]
pub struct Catalog {
    materials: BTreeMap<String, Material>,
}

impl Catalog {
    /// `None` means "not in the catalog": callers treat it as a zero contribution.
    pub fn lookup(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }
}

impl From<Vec<Material>> for Catalog {
    fn from(list: Vec<Material>) -> Self {
        let materials = list
            .into_iter()
            .map(|material| (material.id.clone(), material))
            .collect();
        Self { materials }
    }
}

impl From<Catalog> for Vec<Material> {
    fn from(catalog: Catalog) -> Self {
        catalog.materials.into_values().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "materials")]
    pub catalog: Catalog,
    #[serde(rename = "phones")]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub insights: Vec<Insight>,
}

impl Dataset {
    pub fn from_json(raw: &str) -> Result<Self, DataError> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<(), DataError> {
        if self.devices.is_empty() {
            return Err(DataError::NoDevices);
        }
        let mut seen = HashSet::new();
        for device in &self.devices {
            if !seen.insert(device.id.as_str()) {
                return Err(DataError::DuplicateDevice(device.id.clone()));
            }
        }
        Ok(())
    }

    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|device| device.id == id)
    }
}
