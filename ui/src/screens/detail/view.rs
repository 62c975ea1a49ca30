use dioxus::prelude::*;

use super::cards::{EvolutionNotes, InsightList, MaterialCards, StatGrid};
use super::charts::{CompositionDonut, LifecycleBreakdowns, MassBars};
use super::model::{CardExpansion, DetailModel};
use crate::core::animation::StatBoard;
use crate::core::config::VizConfig;
use crate::core::format;
use crate::data::bundled;
use crate::screens::map::{MapModel, SupplyMap};
use crate::{i18n, t};

#[component]
pub fn DeviceDetail(device_id: String) -> Element {
    i18n::use_locale();
    let config = use_context::<VizConfig>();
    let board = use_context::<Signal<StatBoard>>();
    let expansion = use_signal(CardExpansion::default);
    let focus = use_signal(|| None::<String>);

    let Ok(dataset) = bundled() else {
        return rsx! {};
    };
    let Some(device) = dataset.device(&device_id) else {
        return rsx! {
            p { class: "panel__hint", {t!("detail-missing")} }
        };
    };

    let model = DetailModel::build(dataset, device, &config);
    let map = MapModel::build(device, &dataset.catalog, &config);
    let targets = model.stat_targets();
    let shown = board.with(|board| {
        if board.tracks(&targets) {
            board.displayed().to_vec()
        } else {
            targets.clone()
        }
    });

    let header = &model.header;
    let weight = format::format_grams(header.weight);

    rsx! {
        article { class: "detail",
            header { class: "detail__header",
                h1 { class: "detail__title", "{header.name}" }
                div { class: "detail__meta",
                    span { class: "chip", "{header.year}" }
                    span { class: "chip", "{header.frame}" }
                    span { class: "chip", "{header.chip}" }
                    span { class: "chip", {t!("detail-weight", weight = weight)} }
                }
            }

            StatGrid { tiles: model.stats.clone(), shown }

            div { class: "detail__charts",
                section { class: "panel",
                    h2 { class: "panel__title", {t!("composition-title")} }
                    CompositionDonut { donut: model.donut.clone() }
                }
                section { class: "panel",
                    h2 { class: "panel__title", {t!("mass-title")} }
                    MassBars { rows: model.bars.clone(), expansion, focus }
                }
            }

            section { class: "panel",
                h2 { class: "panel__title", {t!("lifecycle-title")} }
                LifecycleBreakdowns { breakdowns: model.breakdowns.clone() }
                if let Some(source) = model.carbon_source.clone() {
                    p { class: "detail__citation", {t!("carbon-source", source = source)} }
                }
            }

            SupplyMap { model: map }

            section { class: "panel",
                h2 { class: "panel__title", {t!("materials-title")} }
                MaterialCards { cards: model.cards.clone(), expansion, focus }
            }

            EvolutionNotes { changes: model.changes.clone() }
            InsightList { insights: model.insights.clone() }
        }
    }
}
