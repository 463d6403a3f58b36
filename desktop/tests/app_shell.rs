//! Guards the desktop root component.
//!
//! The interest modal keeps its state (and any pending submission) inside
//! the routed header. Wrapping the router in a keyed element would remount
//! that subtree whenever the key changes, so a language switch mid-request
//! would lose the outcome. Views re-render from the language context instead.

const MAIN_RS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"));

fn app_body() -> &'static str {
    let start = MAIN_RS.find("fn App()").expect("App component");
    let rest = &MAIN_RS[start..];
    let end = rest.find("\n}\n").expect("end of App");
    &rest[..end]
}

#[test]
fn router_is_not_remounted_on_language_change() {
    let body = app_body();
    assert!(body.contains("Router::<Route>"), "App no longer renders the router");
    assert!(!body.contains("key:"), "App keys its subtree:\n{body}");
}

#[test]
fn language_signal_starts_from_loader() {
    let body = app_body();
    assert!(
        body.contains("use_signal(ui::i18n::current_language)"),
        "language context not seeded from the active catalog:\n{body}"
    );
}
