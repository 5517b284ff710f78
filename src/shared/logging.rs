//! Structured logging for the navigation sidebar
//!
//! Every lifecycle transition, navigation and feedback pulse goes through
//! one of these helpers so the fields stay consistent across the crate.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    OverlayLifecycle,
    Navigation,
    Haptics,
    Configuration,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::OverlayLifecycle => "overlay_lifecycle",
            LogOperation::Navigation => "navigation",
            LogOperation::Haptics => "haptics",
            LogOperation::Configuration => "configuration",
        }
    }
}

/// Log scroll lock acquisition
pub fn log_scroll_locked(anchor: f64, scrollbar_width: f64) {
    tracing::debug!(
        operation = LogOperation::OverlayLifecycle.as_str(),
        scroll_anchor = anchor,
        scrollbar_width = scrollbar_width,
        "Background scroll locked"
    );
}

/// Log scroll lock release
pub fn log_scroll_released(anchor: f64) {
    tracing::debug!(
        operation = LogOperation::OverlayLifecycle.as_str(),
        scroll_anchor = anchor,
        "Background scroll released"
    );
}

/// Log an open request that found the overlay already open
pub fn log_redundant_open(anchor: f64) {
    tracing::trace!(
        operation = LogOperation::OverlayLifecycle.as_str(),
        scroll_anchor = anchor,
        "Overlay already open, keeping existing anchor"
    );
}

/// Log a dismissal request emitted by the overlay
pub fn log_dismiss_requested() {
    tracing::debug!(
        operation = LogOperation::OverlayLifecycle.as_str(),
        "Overlay dismissal requested"
    );
}

/// Log entry activation and the route it took
pub fn log_navigation(entry_id: &str, target: &str, external: bool) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        entry_id = entry_id,
        target = target,
        external = external,
        "Navigation entry activated"
    );
}

/// Log a browser call that failed and was ignored
pub fn log_platform_fallback(operation: LogOperation, call: &str, error: &str) {
    tracing::warn!(
        operation = operation.as_str(),
        call = call,
        error = error,
        "Browser call failed, continuing without it"
    );
}

/// Log a haptic pulse
pub fn log_haptic_pulse(duration_ms: u32, delivered: bool) {
    tracing::trace!(
        operation = LogOperation::Haptics.as_str(),
        duration_ms = duration_ms,
        delivered = delivered,
        "Haptic pulse"
    );
}

/// Log configuration load result
pub fn log_config_loaded(title: &str, entry_count: usize) {
    tracing::info!(
        operation = LogOperation::Configuration.as_str(),
        title = title,
        entry_count = entry_count,
        "Navigation menu configured"
    );
}

/// Log configuration rejection
pub fn log_config_rejected(error: &str) {
    tracing::error!(
        operation = LogOperation::Configuration.as_str(),
        error = error,
        "Navigation menu configuration rejected, using built-in menu"
    );
}
