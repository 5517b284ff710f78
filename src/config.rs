//! Menu configuration
//!
//! The navigation entries are fixed when the app starts. `MenuConfig::default()`
//! is the built-in menu; embedding hosts can supply their own as JSON.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::models::{IconName, NavigationEntry};
use crate::shared::errors::{MenuError, Result};
use crate::shared::logging::{log_config_loaded, log_config_rejected};

/// Pulse lengths in milliseconds for each kind of interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticConfig {
    /// Pointer or touch goes down on a list item
    pub press_ms: u32,
    /// A list item is activated
    pub activate_ms: u32,
    /// Backdrop or close button dismisses the sidebar
    pub dismiss_ms: u32,
}

impl Default for HapticConfig {
    fn default() -> Self {
        Self {
            press_ms: 15,
            activate_ms: 30,
            dismiss_ms: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub title: String,
    pub entries: Vec<NavigationEntry>,
    pub haptics: HapticConfig,
    /// Entrance animation delay between consecutive items
    pub stagger_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "Navigation Menu".to_string(),
            entries: builtin_entries(),
            haptics: HapticConfig::default(),
            stagger_ms: 60,
        }
    }
}

fn builtin_entries() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("home", "Info Generator", IconName::Home, "/")
            .with_description("Generate identity information"),
        NavigationEntry::new("mail", "Temporary Mailboxes", IconName::Info, "/mail")
            .with_description("Browse temporary email services"),
    ]
}

impl MenuConfig {
    /// Menu for the running app: JSON baked in through the
    /// `SIDEBAR_NAV_MENU` build-time variable, or the built-in menu.
    pub fn load() -> Self {
        match option_env!("SIDEBAR_NAV_MENU") {
            Some(json) => Self::from_json_or_default(json),
            None => {
                let config = Self::default();
                log_config_loaded(&config.title, config.entries.len());
                config
            }
        }
    }

    /// Parse and validate a JSON menu definition. Missing fields take the
    /// built-in values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like `from_json`, but falls back to the built-in menu on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => {
                log_config_loaded(&config.title, config.entries.len());
                config
            }
            Err(e) => {
                log_config_rejected(&e.to_string());
                Self::default()
            }
        }
    }

    /// The menu must have at least one entry, unique ids, and no blank
    /// id, label or target.
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(MenuError::EmptyMenu);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            for (field, value) in [
                ("id", &entry.id),
                ("label", &entry.label),
                ("target location", &entry.target_location),
            ] {
                if value.trim().is_empty() {
                    return Err(MenuError::BlankField { id: entry.id.clone(), field });
                }
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(MenuError::DuplicateEntryId(entry.id.clone()));
            }
        }

        Ok(())
    }

    /// Entrance delay for the item at `index`
    pub fn stagger_delay_ms(&self, index: usize) -> u64 {
        index as u64 * u64::from(self.stagger_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_is_valid() {
        let config = MenuConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.title, "Navigation Menu");

        let ids: Vec<&str> = config.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "mail"]);
        assert_eq!(config.entries[0].target_location, "/");
        assert_eq!(config.entries[1].target_location, "/mail");
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = MenuConfig::from_json(
            r#"{"entries":[{"id":"docs","label":"Docs","icon":"link","url":"https://docs.example"}]}"#,
        )
        .unwrap();

        assert_eq!(config.title, "Navigation Menu");
        assert_eq!(config.haptics, HapticConfig::default());
        assert_eq!(config.stagger_ms, 60);
        assert_eq!(config.entries.len(), 1);
    }

    #[test]
    fn test_partial_haptics_override() {
        let config = MenuConfig::from_json(r#"{"haptics":{"press_ms":5}}"#).unwrap();
        assert_eq!(config.haptics.press_ms, 5);
        assert_eq!(config.haptics.activate_ms, 30);
        assert_eq!(config.haptics.dismiss_ms, 20);
    }

    #[test]
    fn test_rejects_empty_menu() {
        let err = MenuConfig::from_json(r#"{"entries":[]}"#).unwrap_err();
        assert!(matches!(err, MenuError::EmptyMenu));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut config = MenuConfig::default();
        config.entries.push(NavigationEntry::new("home", "Again", IconName::Home, "/again"));

        let err = config.validate().unwrap_err();
        assert!(matches!(err, MenuError::DuplicateEntryId(id) if id == "home"));
    }

    #[test]
    fn test_rejects_blank_target() {
        let mut config = MenuConfig::default();
        config.entries[1].target_location = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, MenuError::BlankField { field: "target location", .. }));
    }

    #[test]
    fn test_rejects_unknown_icon() {
        let err = MenuConfig::from_json(
            r#"{"entries":[{"id":"a","label":"A","icon":"rocket","target_location":"/a"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::Parse(_)));
    }

    #[test]
    fn test_from_json_or_default_falls_back() {
        let config = MenuConfig::from_json_or_default("not json");
        assert_eq!(config, MenuConfig::default());
    }

    #[test]
    fn test_stagger_delay() {
        let config = MenuConfig::default();
        assert_eq!(config.stagger_delay_ms(0), 0);
        assert_eq!(config.stagger_delay_ms(3), 180);
    }
}
