// Custom Dioxus hooks
pub mod use_haptics;
pub mod use_menu_config;
pub mod use_scroll_lock;

pub use use_haptics::use_haptics;
pub use use_menu_config::use_menu_config;
pub use use_scroll_lock::{use_scroll_lock, use_scroll_lock_with};
