//! Supply-chain map: choropleth over the world boundary document, or a
//! country list when the document is unavailable.

pub mod geometry;
mod model;
mod view;

pub use geometry::{load_world_map, Region, WorldMap};
pub use model::{MapModel, RegionInfo};
pub use view::{MapStatus, SupplyMap};
