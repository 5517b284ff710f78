// Browser-backed implementations of the overlay and navigation traits.
// On the server they degrade to no-ops so the tree still renders.
pub mod browser;

pub use browser::{BrowserPage, RouterNavigation, Vibration};
