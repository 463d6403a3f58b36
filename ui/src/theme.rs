//! Page theme shared by the launchers.

use dioxus::prelude::*;

/// Linked stylesheet (web).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Same stylesheet as text, for platforms that inline it.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
