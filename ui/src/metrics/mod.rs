//! Derived statistics computed from a device's material list.
//!
//! Everything here is a pure function of `(Device, Catalog)`; results are
//! recomputed on every render and never cached.

mod derived;
mod regions;

pub use derived::{
    line_items, resolved_usages, CostSplit, DerivedStats, FootprintSplit, LifecycleSplit,
    MaterialLine, ResolvedUsage,
};
pub use regions::{aggregate_regions, RegionSourcing};
