use dioxus::prelude::*;

use crate::app::pages::routes::Route;

/// Top bar with the menu toggle. The toggle only flips the signal it is
/// given; the layout owns the menu's visibility.
#[component]
pub fn Navbar(mut menu_open: Signal<bool>) -> Element {
    let open = menu_open();
    let label = if open { "Close navigation menu" } else { "Open navigation menu" };

    rsx! {
        nav { class: "c-navbar",
            button {
                class: "c-navbar__toggle",
                r#type: "button",
                aria_label: "{label}",
                "aria-expanded": "{open}",
                onclick: move |_| menu_open.set(!open),
                span { class: "c-navbar__toggle-bar" }
                span { class: "c-navbar__toggle-bar" }
                span { class: "c-navbar__toggle-bar" }
            }

            Link {
                to: Route::Home {},
                class: "c-navbar__logo",
                "Sidebar Nav"
            }
        }
    }
}
