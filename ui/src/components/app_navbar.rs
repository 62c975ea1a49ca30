use crate::core::state::{AppState, DisplayMode, NavEvent, Screen};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Top bar: brand, back-to-catalog, detail/compare toggle and the locale
/// switcher.
///
/// Navigation goes through the app's `NavEvent` coroutine; the bar itself
/// only reads `Signal<AppState>`. The language selector updates the shared
/// `Signal<String>` language code so every subscribed view re-renders.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let nav = use_coroutine_handle::<NavEvent>();
    let state = use_context::<Signal<AppState>>();
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let current_lang = lang_code_ctx
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(i18n::current_language);

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(error = %err, language = %val, "language switch failed"),
        }
    };

    let snapshot = state();
    let on_device = snapshot.screen() == Screen::Device && snapshot.selection().is_some();
    let mode = snapshot.mode();
    let mode_class = |target: DisplayMode| {
        if mode == target {
            "navbar__toggle navbar__toggle--active"
        } else {
            "navbar__toggle"
        }
    };

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    button {
                        class: "navbar__brand-link",
                        r#type: "button",
                        onclick: move |_| nav.send(NavEvent::ShowCatalog),
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", {t!("brand")} }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    if on_device {
                        button {
                            class: "navbar__link",
                            r#type: "button",
                            onclick: move |_| nav.send(NavEvent::ShowCatalog),
                            {t!("nav-catalog")}
                        }
                        div { class: "navbar__modes", role: "group",
                            button {
                                class: mode_class(DisplayMode::Detail),
                                r#type: "button",
                                onclick: move |_| nav.send(NavEvent::SetMode(DisplayMode::Detail)),
                                {t!("nav-detail")}
                            }
                            button {
                                class: mode_class(DisplayMode::Compare),
                                r#type: "button",
                                onclick: move |_| nav.send(NavEvent::SetMode(DisplayMode::Compare)),
                                {t!("nav-compare")}
                            }
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
