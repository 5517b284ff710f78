use dioxus::prelude::*;

use crate::domain::models::IconName;

/// Inline SVG icon. Props are compared by value, so an icon only re-renders
/// when its name or class changes.
#[component]
pub fn Icon(name: IconName, #[props(default = "c-icon")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: name.path() }
        }
    }
}
