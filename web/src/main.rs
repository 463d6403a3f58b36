use api::LeadConfig;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::InterestCaptureHeader;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus::logger::init(level).expect("logger initialized once");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Endpoint comes from the build environment (EVSCOOT_LEAD_ENDPOINT).
    use_context_provider(LeadConfig::from_env);

    // Global language code; the header's locale switcher writes to it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::theme::THEME_CSS }

        Router::<Route> {}
    }
}

/// Header over every routed page.
#[component]
fn WebLayout() -> Element {
    rsx! {
        InterestCaptureHeader {}
        Outlet::<Route> {}
    }
}
