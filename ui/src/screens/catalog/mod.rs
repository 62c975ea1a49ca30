mod model;
mod view;

pub use model::{device_cards, DeviceCard};
pub use view::DeviceGrid;
