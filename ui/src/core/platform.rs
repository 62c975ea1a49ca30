//! Platform glue: task spawning and loading static text assets.

use std::future::Future;

use crate::core::error::FetchError;

/// Spawn a future on the current Dioxus runtime. Must be called from within a
/// component scope or an already running task.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}

/// Fetch a text asset over HTTP.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(location: &str) -> Result<String, FetchError> {
    use gloo_net::http::Request;

    let response = Request::get(location)
        .send()
        .await
        .map_err(|err| FetchError::Request(err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            text: response.status_text(),
        });
    }

    response
        .text()
        .await
        .map_err(|err| FetchError::Body(err.to_string()))
}

/// Read a text asset from disk.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_text(location: &str) -> Result<String, FetchError> {
    tokio::fs::read_to_string(location)
        .await
        .map_err(|err| FetchError::Request(format!("{location}: {err}")))
}

/// Location of a bundled asset (relative to `ui/assets`) on disk. Debug
/// builds read from the source tree; release builds expect the assets next
/// to the executable, where the desktop bundle places its resource directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn asset_path(relative: &str) -> std::path::PathBuf {
    asset_root().join(relative)
}

#[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
fn asset_root() -> std::path::PathBuf {
    std::path::PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

#[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
fn asset_root() -> std::path::PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .unwrap_or_else(|| std::path::PathBuf::from("assets"))
}
