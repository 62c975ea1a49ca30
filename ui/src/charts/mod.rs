//! Chart encoders: pure transforms from numeric series to drawable geometry.

mod color;
mod encode;

pub use color::Rgb;
pub use encode::{
    bars, choropleth_fill, choropleth_opacity, radial, sort_descending, stacked, ArcSegment,
    BarRow, Datum,
};
