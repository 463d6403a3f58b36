use crate::core::lead_form::InterestState;
use crate::i18n;
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::icons::MenuIcon;
use super::interest_modal::InterestModal;

const LOGO: Asset = asset!("/assets/logo.svg");

// Header + modal stylesheet; inlined as well for release native builds.
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// In-page sections the navigation links point at.
pub const SECTION_ANCHORS: [&str; 3] = ["home", "features", "contact"];

/// Page header with brand, section links, the "I'm Interested" call to
/// action and the interest modal it opens.
///
/// The modal state lives here for the lifetime of the header. The mobile
/// menu button is a visual affordance only.
///
/// If the platform provides a `Signal<String>` language context, the locale
/// switcher writes to it so the rest of the page re-renders too.
#[component]
pub fn InterestCaptureHeader() -> Element {
    i18n::init();

    let mut modal = use_signal(InterestState::default);
    let [home, features, contact] = SECTION_ANCHORS;

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Subscribe to the global language code so labels refresh on change.
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_lang_change = move |evt: FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            debug!(lang = %val, "language switched");
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "site-header", class: "site-header",
            div { style: "display:none", "{lang_marker}" }
            div { class: "site-header__inner",
                a { href: "/", class: "site-header__brand",
                    img { class: "site-header__logo", src: LOGO, alt: t!("logo-alt") }
                    span { class: "site-header__title", {t!("brand-title")} }
                }

                nav { class: "site-header__links",
                    a { class: "site-header__link", href: "#{home}", {t!("nav-home")} }
                    a { class: "site-header__link", href: "#{features}", {t!("nav-features")} }
                    a { class: "site-header__link", href: "#{contact}", {t!("nav-contact")} }
                }

                if show_switcher {
                    div { class: "site-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_lang_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "button button--cta",
                    onclick: move |_| modal.with_mut(|m| m.open()),
                    {t!("nav-cta")}
                }

                button {
                    r#type: "button",
                    class: "site-header__menu",
                    aria_label: t!("nav-menu-label"),
                    MenuIcon { size: 24 }
                }
            }
        }

        InterestModal { state: modal }
    }
}
