use dioxus::prelude::*;

use super::engine::{CompareMetric, CompareRow, CompareTable};
use crate::core::config::VizConfig;
use crate::core::format;
use crate::core::state::NavEvent;
use crate::data::bundled;
use crate::{i18n, t};

fn metric_title(metric: CompareMetric) -> String {
    match metric {
        CompareMetric::Carbon => t!("compare-carbon"),
        CompareMetric::Water => t!("compare-water"),
        CompareMetric::RawCost => t!("compare-raw-cost"),
        CompareMetric::Retail => t!("compare-retail"),
        CompareMetric::Co2Split => t!("compare-co2-split"),
    }
}

fn format_value(metric: CompareMetric, value: f64) -> String {
    match metric {
        CompareMetric::Carbon | CompareMetric::Co2Split => format::format_kg(value),
        CompareMetric::Water => format::format_litres(value),
        CompareMetric::RawCost => format::format_currency(value, 2),
        CompareMetric::Retail => format::format_currency(value, 0),
    }
}

#[component]
pub fn CompareView(selected: Option<String>) -> Element {
    i18n::use_locale();
    let config = use_context::<VizConfig>();
    let Ok(dataset) = bundled() else {
        return rsx! {};
    };
    let tables = CompareTable::all(dataset, selected.as_deref(), &config);
    rsx! {
        section { class: "compare",
            h1 { class: "compare__title", {t!("compare-title")} }
            p { class: "panel__hint", {t!("compare-hint")} }
            div { class: "compare__grid",
                for table in tables.into_iter() {
                    CompareCard { table }
                }
            }
        }
    }
}

#[component]
fn CompareCard(table: CompareTable) -> Element {
    i18n::use_locale();
    let metric = table.metric;
    rsx! {
        section { class: "panel compare-card",
            h2 { class: "panel__title", {metric_title(metric)} }
            if metric == CompareMetric::Co2Split {
                div { class: "compare-card__legend",
                    span { class: "breakdown__legend-dot breakdown__segment--extraction" }
                    {t!("segment-extraction")}
                    span { class: "breakdown__legend-dot breakdown__segment--manufacturing" }
                    {t!("segment-manufacturing")}
                }
            }
            for row in table.rows.iter() {
                CompareRowView { key: "{row.device_id}", metric, row: row.clone() }
            }
        }
    }
}

#[component]
fn CompareRowView(metric: CompareMetric, row: CompareRow) -> Element {
    i18n::use_locale();
    let nav = use_coroutine_handle::<NavEvent>();
    let value = format_value(metric, row.value);
    let class = if row.highlighted {
        "compare-row compare-row--selected"
    } else {
        "compare-row"
    };
    let device_id = row.device_id.clone();
    let fill_pct = row.fill * 100.0;

    rsx! {
        button {
            class,
            r#type: "button",
            onclick: move |_| nav.send(NavEvent::Select(device_id.clone())),
            span { class: "compare-row__name", "{row.name}" }
            span { class: "compare-row__year", "{row.year}" }
            div { class: "compare-row__track",
                match row.split {
                    Some(split) => rsx! {
                        div {
                            class: "compare-row__fill breakdown__segment--extraction",
                            style: "width:{split.extraction_pct}%",
                        }
                        div {
                            class: "compare-row__fill breakdown__segment--manufacturing",
                            style: "width:{split.manufacturing_pct}%",
                        }
                    },
                    None => rsx! {
                        div { class: "compare-row__fill", style: "width:{fill_pct}%" }
                    },
                }
            }
            span { class: "compare-row__value", "{value}" }
        }
    }
}
