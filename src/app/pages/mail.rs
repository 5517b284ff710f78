use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::domain::models::IconName;
use crate::shared::hooks::use_menu_config;

/// Page behind the `/mail` entry
#[component]
pub fn Mail() -> Element {
    let config = use_menu_config();
    let entry = config.entries.iter().find(|entry| entry.target_location == "/mail");
    let title = entry.map(|entry| entry.label.clone()).unwrap_or_else(|| "Mail".to_string());
    let description = entry.and_then(|entry| entry.description.clone());
    let icon = entry.map(|entry| entry.icon).unwrap_or(IconName::Info);

    rsx! {
        section { class: "c-page",
            div { class: "c-page__heading",
                Icon { name: icon, class: "c-icon c-icon--lg" }
                h1 { class: "c-page__title", "{title}" }
            }
            if let Some(description) = description {
                p { class: "c-page__lead", "{description}" }
            }
            for n in 1..=24 {
                p { class: "c-page__filler", "Section {n}" }
            }
        }
    }
}
