use std::rc::Rc;

use dioxus::prelude::*;

use super::model::{CardExpansion, MaterialCard, StatKind, StatTile};
use crate::core::format;
use crate::data::{Change, Direction, Insight};
use crate::{i18n, t};

fn stat_label(kind: StatKind) -> String {
    match kind {
        StatKind::RawCost => t!("stat-raw-cost"),
        StatKind::BomCost => t!("stat-bom-cost"),
        StatKind::Retail => t!("stat-retail"),
        StatKind::Markup => t!("stat-markup"),
        StatKind::Co2 => t!("stat-co2"),
        StatKind::Water => t!("stat-water"),
        StatKind::Countries => t!("stat-countries"),
        StatKind::Mass => t!("stat-mass"),
    }
}

/// Headline figures. `shown` holds the animated values in tile order; when it
/// does not line up with the tiles the targets are shown directly.
#[component]
pub fn StatGrid(tiles: Vec<StatTile>, shown: Vec<f64>) -> Element {
    i18n::use_locale();
    let aligned = shown.len() == tiles.len();
    rsx! {
        div { class: "stat-grid",
            {tiles.iter().enumerate().map(|(index, tile)| {
                let value = if aligned { shown[index] } else { tile.target };
                let text = if tile.available { tile.kind.format(value) } else { "—".to_string() };
                rsx! {
                    div { key: "{index}", class: "stat",
                        span { class: "stat__value", "{text}" }
                        span { class: "stat__label", {stat_label(tile.kind)} }
                    }
                }
            })}
        }
    }
}

#[component]
pub fn MaterialCards(
    cards: Vec<MaterialCard>,
    expansion: Signal<CardExpansion>,
    focus: Signal<Option<String>>,
) -> Element {
    rsx! {
        div { class: "material-grid",
            for card in cards.iter() {
                MaterialCardView { key: "{card.key}", card: card.clone(), expansion, focus }
            }
        }
    }
}

#[component]
fn MaterialCardView(
    card: MaterialCard,
    expansion: Signal<CardExpansion>,
    focus: Signal<Option<String>>,
) -> Element {
    i18n::use_locale();
    let mut element = use_signal(|| None::<Rc<MountedData>>);

    let target = card.key.clone();
    use_effect(move || {
        let mut focus = focus;
        if focus.read().as_deref() != Some(target.as_str()) {
            return;
        }
        if let Some(mounted) = element() {
            spawn(async move {
                if let Err(err) = mounted.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!(error = ?err, "scroll to material card failed");
                }
                focus.set(None);
            });
        }
    });

    let open = expansion.read().is_open(&card.key);
    let toggle_key = card.key.clone();
    let mut expansion = expansion;
    let class = if open {
        "material-card material-card--expanded"
    } else {
        "material-card"
    };
    let mass = format::format_grams(card.grams);
    let share = format::format_percent(card.share_pct);
    let price = format::format_currency(card.price_per_kg, 2);
    let cost = format::format_small_currency(card.cost);
    let co2 = format::format_kg(card.co2);
    let water = format::format_litres(card.water);
    let accent = format!("border-top-color:{}", card.color);

    rsx! {
        article {
            class,
            style: "{accent}",
            aria_expanded: "{open}",
            onmounted: move |event: MountedEvent| element.set(Some(event.data())),
            onclick: move |_| {
                expansion.write().toggle(&toggle_key);
            },
            header { class: "material-card__header",
                span { class: "material-card__icon", "{card.icon}" }
                div {
                    h3 { class: "material-card__name", "{card.name}" }
                    span { class: "material-card__category", {card.category.label()} }
                }
                div { class: "material-card__amount",
                    span { class: "material-card__grams", title: t!("card-mass"), "{mass}" }
                    span { class: "material-card__share", "{share}" }
                }
            }
            if open {
                div { class: "material-card__body",
                    dl { class: "material-card__facts",
                        dt { {t!("card-price")} }
                        dd { "{price}/kg" }
                        dt { {t!("card-cost")} }
                        dd { "{cost}" }
                        dt { {t!("card-co2")} }
                        dd { "{co2}" }
                        dt { {t!("card-water")} }
                        dd { "{water}" }
                    }
                    if !card.sources.is_empty() {
                        ul { class: "material-card__sources",
                            for (index, source) in card.sources.iter().enumerate() {
                                li { key: "{index}-{source.code}", class: "source-bar",
                                    span { class: "source-bar__flag", "{source.flag}" }
                                    span { class: "source-bar__country", "{source.country}" }
                                    div { class: "source-bar__track",
                                        div {
                                            class: "source-bar__fill",
                                            style: format!("width:{}%;background:{}", source.pct.clamp(0.0, 100.0), card.color),
                                        }
                                    }
                                    span { class: "material-card__source-pct", {format::format_percent(source.pct)} }
                                }
                            }
                        }
                    }
                    p { class: "material-card__summary", "{card.summary}" }
                }
            }
        }
    }
}

#[component]
pub fn EvolutionNotes(changes: Vec<Change>) -> Element {
    i18n::use_locale();
    if changes.is_empty() {
        return rsx! {};
    }
    rsx! {
        section { class: "panel changes",
            h2 { class: "panel__title", {t!("changes-title")} }
            ul { class: "changes__list",
                for (index, change) in changes.into_iter().enumerate() {
                    li {
                        key: "{index}",
                        class: match change.direction {
                            Direction::Improved => "changes__item changes__item--improved",
                            Direction::Neutral => "changes__item",
                        },
                        "{change.text}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn InsightList(insights: Vec<Insight>) -> Element {
    i18n::use_locale();
    rsx! {
        section { class: "panel insights",
            h2 { class: "panel__title", {t!("insights-title")} }
            div { class: "insights__grid",
                for (index, insight) in insights.into_iter().enumerate() {
                    article { key: "{index}", class: "insight",
                        h3 { class: "insight__title", "{insight.title}" }
                        p { class: "insight__text", "{insight.text}" }
                    }
                }
            }
        }
    }
}
