//! Inline stroke icons (menu, close), drawn at `currentColor`.

use dioxus::prelude::*;

#[component]
pub fn MenuIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon icon--menu",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            line { x1: "4", y1: "6", x2: "20", y2: "6" }
            line { x1: "4", y1: "12", x2: "20", y2: "12" }
            line { x1: "4", y1: "18", x2: "20", y2: "18" }
        }
    }
}

#[component]
pub fn CloseIcon(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon icon--close",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both_icons() -> Element {
        rsx! {
            MenuIcon {}
            CloseIcon { size: 16 }
        }
    }

    #[test]
    fn icons_are_hidden_from_assistive_tech() {
        let mut dom = VirtualDom::new(both_icons);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 2, "{html}");
        assert!(!html.contains("aria_hidden"), "{html}");
        assert!(html.contains(r#"width="16""#), "{html}");
    }
}
