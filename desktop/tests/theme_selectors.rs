#![cfg(test)]
//! Guards the stylesheets the desktop build embeds.
//!
//! Desktop inlines `ui/assets/theme/main.css` and (in release) the header
//! sheet, so a renamed class or a truncated file only shows up at runtime.
//! These checks fail the test run instead. When a selector is renamed on
//! purpose, update the component markup and the lists below together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const HEADER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/header.css"
));

/// Page-level tokens and classes used by the launchers and landing view.
const THEME_SELECTORS: &[&str] = &[
    ":root",
    "--color-bg",
    "--color-error",
    "body {",
    ".visually-hidden",
    ".button {",
    ".button--primary",
    ".button--block",
    ".button--cta",
    ".page {",
    ".page-home__hero",
    ".page-home__features",
    ".page-home__contact",
    "@media (max-width: 720px)",
];

/// Classes rendered by the header and the interest modal.
const HEADER_SELECTORS: &[&str] = &[
    ".site-header {",
    ".site-header__inner",
    ".site-header__brand",
    ".site-header__logo",
    ".site-header__links",
    ".site-header__link",
    ".site-header__menu",
    ".interest-modal {",
    ".interest-modal__dialog",
    ".interest-modal__dismiss",
    ".interest-modal__error",
    ".interest-modal__input",
    ".interest-modal__opt-in",
    ".interest-modal__thanks",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let gone = missing(THEME_CSS, THEME_SELECTORS);
    assert!(gone.is_empty(), "theme is missing:\n{}", gone.join("\n"));
}

#[test]
fn header_sheet_contains_required_selectors() {
    let gone = missing(HEADER_CSS, HEADER_SELECTORS);
    assert!(gone.is_empty(), "header.css is missing:\n{}", gone.join("\n"));
}

#[test]
fn mobile_menu_only_shows_on_narrow_screens() {
    let media = HEADER_CSS
        .split("@media (max-width: 768px)")
        .nth(1)
        .expect("narrow-screen block present");
    assert!(media.contains(".site-header__links"));
    assert!(media.contains(".site-header__menu"));
}

#[test]
fn embedded_sheets_are_not_trivially_small() {
    for (name, css) in [("theme", THEME_CSS), ("header", HEADER_CSS)] {
        let non_ws = css.chars().filter(|c| !c.is_whitespace()).count();
        assert!(
            non_ws > 1_500,
            "{name} stylesheet looks truncated ({non_ws} non-whitespace chars)"
        );
    }
}
