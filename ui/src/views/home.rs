use dioxus::logger::tracing::trace;
use dioxus::prelude::*;

use crate::components::SECTION_ANCHORS;

/// Landing page body. Section ids are the header's anchor targets.
#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| crate::i18n::FALLBACK_LANGUAGE.to_string());
    trace!(lang = %lang_current, "home render");

    let [home, features, contact] = SECTION_ANCHORS;

    rsx! {
        main { class: "page page-home",
            section { id: home, class: "page-home__hero",
                h1 { {crate::t!("home-title")} }
                p { class: "page-home__tagline", {crate::t!("home-tagline")} }
            }
            section { id: features, class: "page-home__features",
                h2 { {crate::t!("features-title")} }
                ul {
                    li { {crate::t!("feature-range")} }
                    li { {crate::t!("feature-charge")} }
                    li { {crate::t!("feature-delivery")} }
                }
            }
            section { id: contact, class: "page-home__contact",
                h2 { {crate::t!("contact-title")} }
                p { {crate::t!("contact-body")} }
            }
        }
    }
}
