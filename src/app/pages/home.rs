use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::shared::hooks::use_menu_config;

/// Landing page behind the `/` entry
#[component]
pub fn Home() -> Element {
    let config = use_menu_config();
    let entry = config.entries.iter().find(|entry| entry.target_location == "/").cloned();

    rsx! {
        section { class: "c-page",
            if let Some(entry) = entry {
                div { class: "c-page__heading",
                    Icon { name: entry.icon, class: "c-icon c-icon--lg" }
                    h1 { class: "c-page__title", "{entry.label}" }
                }
                if let Some(description) = entry.description.clone() {
                    p { class: "c-page__lead", "{description}" }
                }
            } else {
                h1 { class: "c-page__title", "Home" }
            }
            p { class: "c-page__hint",
                "Open the menu from the top bar. The page keeps its scroll position while the menu is open."
            }
            // Tall filler so the scroll lock has something to hold in place
            for n in 1..=24 {
                p { class: "c-page__filler", "Section {n}" }
            }
        }
    }
}
