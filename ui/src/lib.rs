//! Shared UI crate for Minerals: the bundled dataset, derived metrics, chart
//! encoders, per-screen view models and the Dioxus components that render
//! them. Platform crates only launch [`App`].

pub mod charts;
pub mod core;
pub mod data;
pub mod i18n;
pub mod metrics;
pub mod screens;

mod app;
pub use app::{dispatch, App};

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
