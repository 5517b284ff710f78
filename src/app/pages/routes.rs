use dioxus::prelude::*;

use crate::app::components::NavigationMenu;
use crate::app::layouts::Navbar;
use crate::app::pages::{Home, Mail};
use crate::config::MenuConfig;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/mail")]
    Mail {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(MenuConfig::load);

    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled by build.rs
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar { menu_open: menu_open }

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }

            NavigationMenu {
                visible: menu_open(),
                on_dismiss: move |_| menu_open.set(false),
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Page not found" }
            p { class: "c-page__lead", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "c-page__link", "Back to the start page" }
        }
    }
}
