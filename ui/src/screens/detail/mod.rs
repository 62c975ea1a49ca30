mod cards;
mod charts;
mod model;
mod view;

pub use model::{
    headline_targets, Breakdown, BreakdownKind, BreakdownSegment, CardExpansion, DetailModel,
    DeviceHeader, DonutModel, MassBar, MaterialCard, SegmentKind, StatKind, StatTile,
};
pub use view::DeviceDetail;
