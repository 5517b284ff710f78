use serde::{Deserialize, Serialize};

use super::icon::IconName;

/// One link in the navigation sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub id: String,
    pub label: String,
    pub icon: IconName,
    /// Absolute URL or in-app path
    #[serde(alias = "url")]
    pub target_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NavigationEntry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: IconName,
        target_location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            target_location: target_location.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn target(&self) -> NavTarget {
        NavTarget::classify(&self.target_location)
    }
}

/// Where activating an entry takes the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Opened in a new, isolated browsing context
    External(String),
    /// Pushed onto the in-app router
    Internal(String),
}

impl NavTarget {
    /// Targets starting with `http` (which covers `https`) are external,
    /// everything else is routed inside the app. The match is case-sensitive.
    pub fn classify(location: &str) -> NavTarget {
        if has_network_scheme(location) {
            NavTarget::External(location.to_string())
        } else {
            NavTarget::Internal(location.to_string())
        }
    }

    pub fn location(&self) -> &str {
        match self {
            NavTarget::External(url) => url,
            NavTarget::Internal(path) => path,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, NavTarget::External(_))
    }
}

fn has_network_scheme(location: &str) -> bool {
    location.starts_with("http")
}

/// Visual press feedback of a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressState {
    Pressed,
    #[default]
    Released,
}

impl PressState {
    pub fn is_pressed(&self) -> bool {
        matches!(self, PressState::Pressed)
    }

    /// Modifier class for the control itself
    pub fn control_class(&self) -> &'static str {
        match self {
            PressState::Pressed => "c-nav-item--pressed",
            PressState::Released => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_internal_paths() {
        assert_eq!(NavTarget::classify("/"), NavTarget::Internal("/".to_string()));
        assert_eq!(NavTarget::classify("/mail"), NavTarget::Internal("/mail".to_string()));
        assert_eq!(NavTarget::classify("settings"), NavTarget::Internal("settings".to_string()));
    }

    #[test]
    fn test_classify_external_urls() {
        assert!(NavTarget::classify("https://example.com").is_external());
        assert!(NavTarget::classify("http://example.com/a?b=c").is_external());
    }

    #[test]
    fn test_classify_any_http_prefix_is_external() {
        assert!(NavTarget::classify("httpbin.org/get").is_external());
        assert!(NavTarget::classify("http:example.com").is_external());
        assert!(NavTarget::classify("https").is_external());
    }

    #[test]
    fn test_classify_is_case_sensitive_and_anchored() {
        assert!(!NavTarget::classify("HTTPS://X.COM").is_external());
        assert!(!NavTarget::classify("/https://example.com").is_external());
        assert!(!NavTarget::classify(" http://example.com").is_external());
        assert!(!NavTarget::classify("mailto:someone@example.com").is_external());
    }

    #[test]
    fn test_entry_deserializes_url_alias() {
        let json = r#"{"id":"x","label":"X","icon":"link","url":"https://example.com"}"#;
        let entry: NavigationEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.target_location, "https://example.com");
        assert_eq!(entry.description, None);
        assert!(entry.target().is_external());
    }

    #[test]
    fn test_press_state_default_released() {
        let state = PressState::default();
        assert!(!state.is_pressed());
        assert_eq!(state.control_class(), "");
        assert_eq!(PressState::Pressed.control_class(), "c-nav-item--pressed");
    }
}
