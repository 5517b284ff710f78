use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::domain::models::IconName;
use crate::domain::services::dismiss_with_feedback;
use crate::shared::hooks::{use_haptics, use_menu_config, use_scroll_lock};

#[derive(Props, Clone)]
pub struct SidebarProps {
    /// Owned by the parent; the sidebar only asks to be closed
    pub visible: bool,
    #[props(into)]
    pub title: String,
    pub on_dismiss: EventHandler<()>,
    pub children: Element,
}

// Only visibility and title change what the sidebar looks like
impl PartialEq for SidebarProps {
    fn eq(&self, other: &Self) -> bool {
        self.visible == other.visible && self.title == other.title
    }
}

/// Full-screen dismissible panel that pins the page behind it while shown.
///
/// Hidden sidebars render nothing and attach no listeners. The scroll lock
/// lives in the inner panel, so it is taken when the panel mounts and
/// released when it unmounts.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    if !props.visible {
        return rsx! {};
    }

    rsx! {
        SidebarPanel {
            title: props.title.clone(),
            on_dismiss: props.on_dismiss,
            {props.children}
        }
    }
}

#[component]
fn SidebarPanel(title: String, on_dismiss: EventHandler<()>, children: Element) -> Element {
    use_scroll_lock();
    let haptics = use_haptics();
    let dismiss_ms = use_menu_config().haptics.dismiss_ms;

    let request_dismiss =
        move || dismiss_with_feedback(&haptics, dismiss_ms, || on_dismiss.call(()));
    let backdrop_dismiss = request_dismiss.clone();

    rsx! {
        div {
            class: "c-sidebar",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{title}",

            // Backdrop and panel are siblings, so clicks inside the panel never reach it
            div {
                class: "c-sidebar__backdrop",
                onclick: move |_| backdrop_dismiss(),
            }

            aside { class: "c-sidebar__panel",
                header { class: "c-sidebar__header",
                    h3 { class: "c-sidebar__title", "{title}" }
                    button {
                        class: "c-sidebar__close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| request_dismiss(),
                        Icon { name: IconName::Close, class: "c-icon c-icon--sm" }
                    }
                }

                div { class: "c-sidebar__content", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    #[test]
    fn test_hidden_sidebar_renders_nothing() {
        fn app() -> Element {
            rsx! {
                div { id: "host",
                    Sidebar { visible: false, title: "Menu", on_dismiss: |_| {},
                        p { "panel body" }
                    }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("host"));
        assert!(!html.contains("c-sidebar"));
        assert!(!html.contains("panel body"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_visible_sidebar_renders_panel() {
        fn app() -> Element {
            rsx! {
                Sidebar { visible: true, title: "Menu", on_dismiss: |_| {},
                    p { "panel body" }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("c-sidebar__backdrop"));
        assert!(html.contains("c-sidebar__title"));
        assert!(html.contains(">Menu<"));
        assert!(html.contains("aria-label=\"Close\""));
        assert!(html.contains("panel body"));
        assert!(html.contains(IconName::Close.path()));
    }

    #[test]
    fn test_content_is_not_inside_backdrop() {
        fn app() -> Element {
            rsx! {
                Sidebar { visible: true, title: "Menu", on_dismiss: |_| {},
                    p { "panel body" }
                }
            }
        }

        // Clicks only bubble to ancestors, so content must sit in the panel
        let html = render(app);
        let backdrop = html.find("c-sidebar__backdrop").expect("backdrop rendered");
        let panel = html.find("c-sidebar__panel").expect("panel rendered");
        let body = html.find("panel body").expect("content rendered");
        assert!(backdrop < panel);
        assert!(panel < body);
    }
}
