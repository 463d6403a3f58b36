//! Internationalization for `evscoot-ui`.
//!
//! - `i18n-embed` picks the language and loads assets
//! - `fluent` formats messages
//! - `rust-embed` embeds the `.ftl` catalogs at compile time
//! - `i18n-embed-fl` provides the compile-time checked `fl!` lookups
//!
//! Layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/evscoot_ui.ftl   (fallback/reference)
//!   hi-IN/evscoot_ui.ftl
//! ```
//!
//! Call `init()` once at app start (it is idempotent), then look strings up
//! with `t!`. The site always starts in the fallback language; other
//! catalogs are only selected through `set_language` (the header's locale
//! switcher), never from the OS or browser locale.
//! Every string the header and modal show goes through here, including the
//! three form error messages, whose en-US text is part of the visible contract.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Short form of `fl!(&*LOADER, ...)`.
///
/// ```ignore
/// t!("nav-home")
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

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`. Must equal
/// the package name with `-` replaced by `_`, which is what `fl!` resolves.
const DOMAIN: &str = "evscoot_ui";

/// Tag of the fallback catalog.
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the fallback catalog (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
            .parse()
            .expect("valid fallback language identifier");
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[fallback]) {
            warn!("failed loading fallback catalog ({err})");
        }
    });
}

/// Tag of the language lookups currently resolve to.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
