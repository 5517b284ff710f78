use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::domain::models::{IconName, NavigationEntry, PressState};
use crate::domain::services::{activate_with_feedback, begin_press, end_press};
use crate::shared::hooks::{use_haptics, use_menu_config};

#[derive(Props, Clone)]
pub struct NavItemProps {
    pub entry: NavigationEntry,
    /// Position in the list, only used to stagger the entrance animation
    pub index: usize,
    pub on_activate: EventHandler<NavigationEntry>,
}

impl PartialEq for NavItemProps {
    fn eq(&self, other: &Self) -> bool {
        self.entry.id == other.entry.id && self.index == other.index
    }
}

/// One pressable row of the navigation list.
///
/// The pressed state is purely visual and stays inside the row.
#[component]
pub fn NavItem(props: NavItemProps) -> Element {
    let mut press = use_signal(PressState::default);
    let haptics = use_haptics();
    let config = use_menu_config();
    let durations = config.haptics;
    let delay_ms = config.stagger_delay_ms(props.index);

    let on_activate = props.on_activate;
    let entry = props.entry.clone();
    let pressed_class = press().control_class();
    let (click_haptics, mouse_haptics, touch_haptics) = (haptics.clone(), haptics.clone(), haptics);

    rsx! {
        button {
            class: "c-nav-item {pressed_class}",
            r#type: "button",
            style: "animation-delay: {delay_ms}ms",
            title: props.entry.description.clone(),
            onclick: move |_| {
                activate_with_feedback(&click_haptics, durations.activate_ms, &entry, |entry| {
                    on_activate.call(entry)
                });
            },
            onmousedown: move |_| press.set(begin_press(&mouse_haptics, durations.press_ms)),
            onmouseup: move |_| press.set(end_press()),
            onmouseleave: move |_| press.set(end_press()),
            ontouchstart: move |_| press.set(begin_press(&touch_haptics, durations.press_ms)),
            ontouchend: move |_| press.set(end_press()),

            div { class: "c-nav-item__badge",
                Icon { name: props.entry.icon, class: "c-icon c-icon--sm" }
            }
            div { class: "c-nav-item__text",
                h4 { class: "c-nav-item__label", "{props.entry.label}" }
            }
            Icon { name: IconName::ChevronRight, class: "c-icon c-icon--sm c-nav-item__chevron" }
        }
    }
}
