mod engine;
mod view;

pub use engine::{CompareMetric, CompareRow, CompareTable, SplitParts};
pub use view::CompareView;
