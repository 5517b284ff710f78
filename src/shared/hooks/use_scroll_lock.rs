use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::services::{OverlayLifecycle, ScrollHost};
use crate::shared::services::BrowserPage;

/// Lock the page behind the calling component for as long as it is mounted.
///
/// The anchor is captured on the first render only, so re-renders of an
/// open overlay never re-capture it. Unmounting releases the lock and
/// restores the anchor, including when an ancestor tears the tree down.
pub fn use_scroll_lock() {
    use_scroll_lock_with(|| BrowserPage);
}

pub fn use_scroll_lock_with<H, F>(host: F)
where
    H: ScrollHost + 'static,
    F: FnOnce() -> H,
{
    let lifecycle = use_hook(|| {
        let mut lifecycle = OverlayLifecycle::new(host());
        lifecycle.open();
        Rc::new(RefCell::new(lifecycle))
    });

    use_drop(move || {
        lifecycle.borrow_mut().close();
    });
}
