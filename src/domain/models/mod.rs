// Domain models
// Pure Rust, no framework dependencies

pub mod icon;
pub mod navigation;

pub use icon::IconName;
pub use navigation::{NavTarget, NavigationEntry, PressState};
