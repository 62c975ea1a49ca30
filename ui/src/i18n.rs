//! Localisation for `minerals-ui`.
//!
//! Wires `i18n-embed` (language selection and asset loading), `fluent`
//! (message formatting), `rust-embed` (compile-time embedding of `.ftl`
//! files) and `i18n-embed-fl` (the compile-time checked `fl!` macro).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/minerals-ui.ftl   (fallback/reference)
//!   es-ES/minerals-ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! use crate::{i18n, t};
//! i18n::init(); // idempotent
//! i18n::use_locale(); // re-render on language switch
//! let title = t!("catalog-title");
//! ```
//!
//! To add a locale, copy `en-US/minerals-ui.ftl` to `i18n/<lang-id>/`, translate
//! the values (IDs and placeholders stay identical) and run the tests.
//!
//! Desktop builds ask the OS for preferred languages; web builds read
//! `navigator.languages`.
use std::sync::Once;

use dioxus::prelude::{try_use_context, Readable, Signal};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation shorthand routing every lookup through [`LOADER`].
///
/// ```ignore
/// t!("nav-catalog")
/// t!("map-materials", count = 3)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "minerals-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load localisation bundles (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(error = %err, "language selection failed; using fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(lang) => lang,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())?;
    tracing::info!(language = tag, "language switched");
    Ok(())
}

/// The language currently used for lookups.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// Embedded language tags, sorted, for the locale picker.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Subscribe the calling component to the shared language signal so its
/// `t!` lookups re-run after a switch.
pub fn use_locale() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code.read().clone())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
