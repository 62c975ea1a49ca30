//! Reference dataset: materials, devices and narrative insights.
//!
//! Everything in here is read-only input. The only lookup that can miss is a
//! material id, and misses are a data-completeness gap rather than an error.

mod catalog;
mod model;

pub use catalog::{bundled, Catalog, Dataset};
pub use model::{
    Category, Change, DeviceId, Direction, EcoProfile, Insight, Material, MaterialId,
    Device, MaterialUsage, Source,
};
