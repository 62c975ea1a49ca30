use dioxus::prelude::*;

use super::geometry::WorldMap;
use super::model::{MapModel, RegionInfo};
use crate::{i18n, t};

/// Where the world map asset stands. Provided as a `Signal<MapStatus>` context
/// by the app shell, which performs the one-time load.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MapStatus {
    #[default]
    Loading,
    Ready(&'static WorldMap),
    Unavailable,
}

#[component]
pub fn SupplyMap(model: MapModel) -> Element {
    i18n::use_locale();
    let status = try_use_context::<Signal<MapStatus>>()
        .map(|status| status())
        .unwrap_or(MapStatus::Unavailable);
    let mut hovered = use_signal(|| Option::<String>::None);

    let hovered_info = hovered().and_then(|code| model.info(&code).cloned());

    rsx! {
        section { class: "panel supply-map",
            h2 { class: "panel__title", {t!("map-title")} }
            p { class: "panel__hint", {t!("map-hint")} }

            {match status {
                MapStatus::Loading => rsx! {
                    p { class: "supply-map__status", {t!("map-loading")} }
                },
                MapStatus::Ready(world) => rsx! {
                    div { class: "supply-map__canvas",
                        svg {
                            class: "supply-map__svg",
                            view_box: "{world.view_box}",
                            role: "img",
                            onmouseleave: move |_| hovered.set(None),
                            {world.regions.iter().map(|region| {
                                let code = region.id.clone();
                                let mut hovered = hovered;
                                let class = if model.info(&region.id).is_some() {
                                    "supply-map__region supply-map__region--active"
                                } else {
                                    "supply-map__region"
                                };
                                rsx! {
                                    path {
                                        key: "{region.id}",
                                        class,
                                        d: "{region.path}",
                                        fill: model.fill(&region.id).to_string(),
                                        onmouseenter: move |_| hovered.set(Some(code.clone())),
                                        title { "{region.name}" }
                                    }
                                }
                            })}
                        }
                        if let Some(info) = hovered_info {
                            RegionTooltip { info }
                        }
                    }
                    Legend {}
                },
                MapStatus::Unavailable => rsx! {
                    p { class: "supply-map__status", {t!("map-unavailable")} }
                    CountryList { regions: model.regions.clone() }
                },
            }}
        }
    }
}

#[component]
fn RegionTooltip(info: RegionInfo) -> Element {
    i18n::use_locale();
    let count = info.materials.len();
    rsx! {
        div { class: "supply-map__tooltip",
            div { class: "supply-map__tooltip-title", "{info.flag} {info.country}" }
            div { class: "supply-map__tooltip-count", {t!("map-materials", count = count)} }
            if let Some(category) = info.dominant {
                div { class: "supply-map__tooltip-category",
                    span { class: "swatch", style: format!("background:{}", category.color()) }
                    {category.label()}
                }
            }
            ul { class: "supply-map__tooltip-list",
                for name in info.materials.iter() {
                    li { key: "{name}", "{name}" }
                }
            }
        }
    }
}

#[component]
fn CountryList(regions: Vec<RegionInfo>) -> Element {
    i18n::use_locale();
    rsx! {
        ul { class: "country-list",
            for info in regions.into_iter() {
                li { key: "{info.code}", class: "country-list__item",
                    span { class: "swatch", style: "background:{info.fill}" }
                    span { class: "country-list__name", "{info.flag} {info.country}" }
                    span { class: "country-list__count",
                        {t!("map-materials", count = info.materials.len())}
                    }
                    span { class: "country-list__materials", {info.materials.join(", ")} }
                }
            }
        }
    }
}

#[component]
fn Legend() -> Element {
    i18n::use_locale();
    rsx! {
        div { class: "supply-map__legend",
            span { class: "supply-map__legend-label", {t!("map-legend-low")} }
            span { class: "supply-map__legend-ramp" }
            span { class: "supply-map__legend-label", {t!("map-legend-high")} }
        }
    }
}
