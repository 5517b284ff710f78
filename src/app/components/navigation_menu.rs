use dioxus::prelude::*;

use crate::app::components::{NavItem, Sidebar};
use crate::domain::models::NavigationEntry;
use crate::domain::services::activate_entry;
use crate::shared::hooks::use_menu_config;
use crate::shared::services::RouterNavigation;

#[derive(Props, Clone)]
pub struct NavigationMenuProps {
    pub visible: bool,
    pub on_dismiss: EventHandler<()>,
}

impl PartialEq for NavigationMenuProps {
    fn eq(&self, other: &Self) -> bool {
        self.visible == other.visible
    }
}

/// Sidebar listing the configured navigation entries.
///
/// Activating an entry navigates first (router push, or a new isolated
/// window for external links) and then asks the owner to close the menu.
#[component]
pub fn NavigationMenu(props: NavigationMenuProps) -> Element {
    let config = use_menu_config();
    let on_dismiss = props.on_dismiss;

    let handle_activate = move |entry: NavigationEntry| {
        activate_entry(&entry, &RouterNavigation, || on_dismiss.call(()));
    };

    rsx! {
        Sidebar {
            visible: props.visible,
            title: config.title.clone(),
            on_dismiss: props.on_dismiss,

            div { class: "c-nav-list",
                for (index, entry) in config.entries.iter().enumerate() {
                    NavItem {
                        key: "{entry.id}",
                        entry: entry.clone(),
                        index: index,
                        on_activate: handle_activate,
                    }
                }
            }
        }
    }
}
