use crate::domain::services::{Haptics, NavigationHandler, ScrollHost, ScrollLockStyle};
#[cfg(target_arch = "wasm32")]
use crate::domain::services::{EXTERNAL_FEATURES, EXTERNAL_TARGET};
#[cfg(target_arch = "wasm32")]
use crate::shared::logging::{log_platform_fallback, LogOperation};
use crate::shared::logging::log_haptic_pulse;

/// The document behind the overlay
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserPage;

#[cfg(target_arch = "wasm32")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

#[cfg(target_arch = "wasm32")]
impl ScrollHost for BrowserPage {
    fn scroll_offset(&self) -> f64 {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        match window.scroll_y() {
            Ok(y) => y,
            Err(e) => {
                log_platform_fallback(LogOperation::OverlayLifecycle, "scrollY", &format!("{:?}", e));
                0.0
            }
        }
    }

    fn scrollbar_width(&self) -> f64 {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let inner = window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0);
        let client = window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| f64::from(root.client_width()))
            .unwrap_or(inner);
        inner - client
    }

    fn apply_lock(&self, style: &ScrollLockStyle) {
        if let Some(body) = body() {
            body.style().set_css_text(&style.css_text());
        }
    }

    fn clear_lock(&self) {
        if let Some(body) = body() {
            body.style().set_css_text("");
        }
    }

    fn scroll_to(&self, offset: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, offset);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScrollHost for BrowserPage {
    fn scroll_offset(&self) -> f64 {
        0.0
    }

    fn scrollbar_width(&self) -> f64 {
        0.0
    }

    fn apply_lock(&self, _style: &ScrollLockStyle) {
        // No document on the server
    }

    fn clear_lock(&self) {}

    fn scroll_to(&self, _offset: f64) {}
}

/// `navigator.vibrate`, when the device has it
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vibration;

impl Haptics for Vibration {
    #[cfg(target_arch = "wasm32")]
    fn pulse(&self, duration_ms: u32) {
        let delivered = web_sys::window()
            .map(|window| window.navigator().vibrate_with_duration(duration_ms))
            .unwrap_or(false);
        log_haptic_pulse(duration_ms, delivered);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn pulse(&self, duration_ms: u32) {
        log_haptic_pulse(duration_ms, false);
    }
}

/// Internal paths go to the Dioxus router, external URLs to `window.open`.
///
/// Must be used from inside a `Router`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouterNavigation;

impl NavigationHandler for RouterNavigation {
    fn navigate(&self, path: &str) {
        if dioxus::prelude::navigator().push(path).is_some() {
            tracing::warn!("Router refused navigation to {}", path);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn open_external(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // With noopener the returned handle is always null
        if let Err(e) = window.open_with_url_and_target_and_features(url, EXTERNAL_TARGET, EXTERNAL_FEATURES) {
            log_platform_fallback(LogOperation::Navigation, "window.open", &format!("{:?}", e));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_external(&self, url: &str) {
        tracing::warn!("External link requested outside a browser: {}", url);
    }
}
