#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use api::LeadConfig;
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::InterestCaptureHeader;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
}

// Shared theme (ui/assets/theme/main.css), embedded so packaged builds need no css file.
const MAIN_CSS_INLINE: &str = ui::theme::THEME_CSS_INLINE;

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus::logger::init(level).expect("logger initialized once");
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Electric Scooter – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Runtime EVSCOOT_LEAD_ENDPOINT wins over the build-time value.
    use_context_provider(LeadConfig::from_env);

    // Global language code; the header's locale switcher writes to it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Views subscribe to the language context and re-render in place; a
        // remount here would drop the modal state and its pending request.
        Router::<Route> {}
    }
}

/// Header over every routed page.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        InterestCaptureHeader {}
        Outlet::<Route> {}
    }
}
