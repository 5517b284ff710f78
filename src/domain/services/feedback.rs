//! What the sidebar controls do when touched or clicked
//!
//! Each interaction pulses first and then reports to its owner. The
//! components call these directly from their event handlers.

use crate::domain::models::{NavigationEntry, PressState};
use crate::domain::services::Haptics;
use crate::shared::logging::log_dismiss_requested;

/// Backdrop or close button: pulse, then ask the owner to close
pub fn dismiss_with_feedback<H, F>(haptics: &H, duration_ms: u32, dismiss: F)
where
    H: Haptics + ?Sized,
    F: FnOnce(),
{
    haptics.pulse(duration_ms);
    log_dismiss_requested();
    dismiss();
}

/// List item click: pulse, then hand the entry to the owner
pub fn activate_with_feedback<H, F>(
    haptics: &H,
    duration_ms: u32,
    entry: &NavigationEntry,
    on_activate: F,
) where
    H: Haptics + ?Sized,
    F: FnOnce(NavigationEntry),
{
    haptics.pulse(duration_ms);
    on_activate(entry.clone());
}

/// Pointer or touch went down on a list item
pub fn begin_press<H: Haptics + ?Sized>(haptics: &H, duration_ms: u32) -> PressState {
    haptics.pulse(duration_ms);
    PressState::Pressed
}

/// Pointer released, left the item, or touch ended
pub fn end_press() -> PressState {
    PressState::Released
}
