use dioxus::prelude::*;

use super::model::{Breakdown, BreakdownKind, CardExpansion, DonutModel, MassBar, SegmentKind};
use crate::core::format;
use crate::{i18n, t};

const DONUT_CENTER: f64 = 110.0;
const DONUT_STROKE: f64 = 26.0;

#[component]
pub fn CompositionDonut(donut: DonutModel) -> Element {
    i18n::use_locale();
    let view_box = format!("0 0 {0} {0}", DONUT_CENTER * 2.0);
    let rotate = format!("rotate(-90 {DONUT_CENTER} {DONUT_CENTER})");
    let mut hovered = use_signal(|| None::<usize>);
    let (center_value, center_caption) = match donut.readout(hovered()) {
        Some(readout) => readout,
        None => (format::format_grams(donut.total_grams), t!("donut-center-label")),
    };

    rsx! {
        div { class: "donut",
            svg { class: "donut__svg", view_box: "{view_box}", role: "img",
                circle {
                    class: "donut__track",
                    cx: "{DONUT_CENTER}",
                    cy: "{DONUT_CENTER}",
                    r: "{donut.radius}",
                    fill: "none",
                    stroke_width: "{DONUT_STROKE}",
                }
                for (index, segment) in donut.segments.iter().enumerate() {
                    circle {
                        key: "{segment.key}",
                        class: "donut__segment",
                        cx: "{DONUT_CENTER}",
                        cy: "{DONUT_CENTER}",
                        r: "{donut.radius}",
                        fill: "none",
                        stroke: "{segment.color}",
                        stroke_width: "{DONUT_STROKE}",
                        stroke_dasharray: "{segment.length} {donut.circumference}",
                        stroke_dashoffset: -segment.offset,
                        transform: "{rotate}",
                        onmouseenter: move |_| hovered.set(Some(index)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }
                text {
                    class: "donut__value",
                    x: "{DONUT_CENTER}",
                    y: "{DONUT_CENTER}",
                    text_anchor: "middle",
                    "{center_value}"
                }
                text {
                    class: "donut__caption",
                    x: "{DONUT_CENTER}",
                    y: DONUT_CENTER + 22.0,
                    text_anchor: "middle",
                    "{center_caption}"
                }
            }
            ul { class: "donut__legend",
                for segment in donut.segments.iter() {
                    li { key: "{segment.key}", class: "donut__legend-item",
                        span { class: "swatch", style: "background:{segment.color}" }
                        span { class: "donut__legend-label", "{segment.label}" }
                        span { class: "donut__legend-share", {format::format_percent(segment.share * 100.0)} }
                    }
                }
            }
        }
    }
}

/// Clicking a row opens the matching material card and scrolls it into view.
#[component]
pub fn MassBars(
    rows: Vec<MassBar>,
    expansion: Signal<CardExpansion>,
    focus: Signal<Option<String>>,
) -> Element {
    rsx! {
        div { class: "bars",
            {rows.iter().map(|row| {
                let mut expansion = expansion;
                let mut focus = focus;
                let key = row.key.clone();
                rsx! {
                    div {
                        key: "{row.key}",
                        class: "bars__row",
                        onclick: move |_| {
                            expansion.write().reveal(&key);
                            focus.set(Some(key.clone()));
                        },
                        span { class: "bars__label", "{row.label}" }
                        div { class: "bars__track",
                            div {
                                class: "bars__fill",
                                style: "width:{row.fill_pct}%;background:{row.color}",
                            }
                        }
                        span { class: "bars__value", {format::format_grams(row.grams)} }
                        span { class: "bars__share", {format::format_percent(row.share_pct)} }
                    }
                }
            })}
        }
    }
}

#[component]
pub fn LifecycleBreakdowns(breakdowns: Vec<Breakdown>) -> Element {
    rsx! {
        div { class: "breakdowns",
            for breakdown in breakdowns.into_iter() {
                BreakdownBar { breakdown }
            }
        }
    }
}

#[component]
fn BreakdownBar(breakdown: Breakdown) -> Element {
    i18n::use_locale();
    let title = match breakdown.kind {
        BreakdownKind::Co2 => t!("breakdown-co2"),
        BreakdownKind::Water => t!("breakdown-water"),
        BreakdownKind::Cost => t!("breakdown-cost"),
    };
    let total = breakdown.format_value(breakdown.total);

    rsx! {
        div { class: "breakdown",
            div { class: "breakdown__header",
                span { class: "breakdown__title", "{title}" }
                span { class: "breakdown__total", "{total}" }
            }
            div { class: "breakdown__bar",
                for (index, segment) in breakdown.segments.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: format!("breakdown__segment {}", segment.kind.css_modifier()),
                        style: "width:{segment.width_pct}%",
                    }
                }
            }
            ul { class: "breakdown__legend",
                for (index, segment) in breakdown.segments.iter().enumerate() {
                    li { key: "{index}",
                        span { class: format!("breakdown__legend-dot {}", segment.kind.css_modifier()) }
                        span { class: "breakdown__legend-label", {segment_label(segment.kind)} }
                        span { class: "breakdown__legend-value", {breakdown.format_value(segment.value)} }
                    }
                }
            }
        }
    }
}

fn segment_label(kind: SegmentKind) -> String {
    match kind {
        SegmentKind::Extraction => t!("segment-extraction"),
        SegmentKind::Manufacturing => t!("segment-manufacturing"),
        SegmentKind::RawMaterials => t!("segment-raw-materials"),
        SegmentKind::Assembly => t!("segment-assembly"),
        SegmentKind::Other => t!("segment-other"),
    }
}
