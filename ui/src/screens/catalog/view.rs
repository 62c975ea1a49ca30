use dioxus::prelude::*;

use super::model::{device_cards, DeviceCard};
use crate::core::format;
use crate::core::state::NavEvent;
use crate::data::bundled;
use crate::{i18n, t};

#[component]
pub fn DeviceGrid(selected: Option<String>) -> Element {
    i18n::use_locale();
    let Ok(dataset) = bundled() else {
        return rsx! {};
    };
    let cards = device_cards(dataset, selected.as_deref());

    rsx! {
        section { class: "catalog",
            div { class: "catalog__intro",
                h1 { class: "catalog__title", {t!("catalog-title")} }
                p { class: "catalog__lead", {t!("catalog-lead")} }
            }
            div { class: "catalog__grid",
                for card in cards.iter() {
                    DeviceTile { key: "{card.id}", card: card.clone() }
                }
            }
        }
    }
}

#[component]
fn DeviceTile(card: DeviceCard) -> Element {
    i18n::use_locale();
    let nav = use_coroutine_handle::<NavEvent>();
    let id = card.id.clone();
    let class = if card.selected {
        "device-tile device-tile--selected"
    } else {
        "device-tile"
    };
    let retail = format::format_currency(card.retail_price, 0);
    let raw = format::format_currency(card.raw_material_cost, 2);
    let co2 = format::format_kg(card.carbon_footprint);

    rsx! {
        button {
            class,
            r#type: "button",
            onclick: move |_| nav.send(NavEvent::Select(id.clone())),
            span { class: "device-tile__year", "{card.year}" }
            h2 { class: "device-tile__name", "{card.name}" }
            span { class: "device-tile__spec", "{card.chip} · {card.frame}" }
            dl { class: "device-tile__facts",
                dt { {t!("stat-retail")} }
                dd { "{retail}" }
                dt { {t!("stat-raw-cost")} }
                dd { "{raw}" }
                dt { {t!("stat-co2")} }
                dd { "{co2}" }
            }
            span { class: "device-tile__materials",
                {t!("catalog-materials", count = card.material_count)}
            }
        }
    }
}
