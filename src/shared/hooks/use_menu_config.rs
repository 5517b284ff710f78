use dioxus::prelude::*;

use crate::config::MenuConfig;

/// Menu configuration from context, or the built-in menu when the app
/// did not provide one
pub fn use_menu_config() -> MenuConfig {
    use_hook(|| try_consume_context::<MenuConfig>().unwrap_or_default())
}
