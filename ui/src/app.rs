//! Application root: context wiring, the navigation event loop and the
//! count-up animation driver.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::AppNavbar;
use crate::core::animation::{AnimationToken, StatBoard, Tick};
use crate::core::config::VizConfig;
use crate::core::state::{AppState, DisplayMode, NavEvent, Screen};
use crate::core::{platform, timing};
use crate::data::{bundled, Dataset};
use crate::i18n;
use crate::screens::catalog::DeviceGrid;
use crate::screens::compare::CompareView;
use crate::screens::detail::{headline_targets, DeviceDetail};
use crate::screens::map::{load_world_map, MapStatus};
use crate::t;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

#[component]
pub fn App() -> Element {
    i18n::init();

    let config = use_context_provider(VizConfig::default);
    let lang_code = use_context_provider(|| Signal::new(i18n::current_language()));
    let state = use_context_provider(|| Signal::new(AppState::default()));
    let animation_ms = config.animation_ms;
    let board = use_context_provider(|| Signal::new(StatBoard::new(animation_ms)));
    let map_status = use_context_provider(|| Signal::new(MapStatus::Loading));

    let loop_config = config.clone();
    use_coroutine(move |mut rx: UnboundedReceiver<NavEvent>| {
        let mut state = state;
        let mut board = board;
        let config = loop_config.clone();
        async move {
            let Ok(dataset) = bundled() else {
                return;
            };
            while let Some(event) = rx.next().await {
                let token = {
                    let mut state = state.write();
                    let mut board = board.write();
                    dispatch(&mut state, &mut board, dataset, &event, &config)
                };
                if let Some(token) = token {
                    platform::spawn_future(run_frames(board, token, config.frame_ms));
                }
            }
        }
    });

    let map_location = config.map_asset.clone();
    use_future(move || {
        let location = map_location.clone();
        let mut map_status = map_status;
        async move {
            let status = match load_world_map(location.as_deref()).await {
                Some(world) => MapStatus::Ready(world),
                None => MapStatus::Unavailable,
            };
            map_status.set(status);
        }
    });

    let dataset = match bundled() {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!(error = %err, "bundled dataset failed to load");
            let message = err.to_string();
            return rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                main { class: "app",
                    div { class: "error-card",
                        h1 { {t!("error-title")} }
                        p { {t!("error-dataset", error = message)} }
                    }
                }
            };
        }
    };

    let snapshot = state();
    let selection = snapshot.selection().map(str::to_string);
    let page = match (snapshot.screen(), selection.clone()) {
        (Screen::Device, Some(device_id)) if dataset.device(&device_id).is_some() => {
            match snapshot.mode() {
                // Keyed so card expansion and hover state reset per device.
                DisplayMode::Detail => rsx! { DeviceDetail { key: "{device_id}", device_id: device_id.clone() } },
                DisplayMode::Compare => rsx! { CompareView { selected: Some(device_id) } },
            }
        }
        _ => rsx! { DeviceGrid { selected: selection } },
    };

    let lang = lang_code();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        // Keyed by language so a switch remounts every translated subtree.
        div { key: "{lang}", class: "app-shell",
            AppNavbar {}
            main { class: "app", {page} }
            footer { class: "app__footer", {t!("footer-note")} }
        }
    }
}

/// Apply a navigation event. When it selects a device the headline counters
/// are retargeted and the returned token is the one its frame loop must carry.
pub fn dispatch(
    state: &mut AppState,
    board: &mut StatBoard,
    dataset: &Dataset,
    event: &NavEvent,
    config: &VizConfig,
) -> Option<AnimationToken> {
    if !state.apply(dataset, event) {
        return None;
    }
    let device_id = state.selection()?;
    let targets = headline_targets(dataset, device_id, config)?;
    Some(board.retarget(targets))
}

/// Drive one count-up animation until it settles or a newer selection
/// supersedes it.
async fn run_frames(mut board: Signal<StatBoard>, token: AnimationToken, frame_ms: u64) {
    let frame_ms = frame_ms.max(1);
    let mut frames: u64 = 0;
    loop {
        timing::sleep_ms(frame_ms).await;
        frames += 1;
        match board.with_mut(|board| board.tick(token, frames * frame_ms)) {
            Tick::Running => continue,
            Tick::Settled => break,
            Tick::Stale => {
                tracing::debug!("animation superseded");
                break;
            }
        }
    }
}
