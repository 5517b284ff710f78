// Overlay and navigation logic
// Framework-agnostic, browser access goes through the traits defined here

pub mod activation;
pub mod feedback;
pub mod haptics;
pub mod overlay;

pub use activation::{activate_entry, NavigationHandler, EXTERNAL_FEATURES, EXTERNAL_TARGET};
pub use feedback::{activate_with_feedback, begin_press, dismiss_with_feedback, end_press};
pub use haptics::{Haptics, SharedHaptics};
pub use overlay::{OverlayLifecycle, ScrollHost, ScrollLockStyle};
