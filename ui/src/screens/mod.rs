//! One module per screen: a pure view-model builder plus its components.

pub mod catalog;
pub mod compare;
pub mod detail;
pub mod map;
