//! Overlay open/close lifecycle with background scroll locking
//!
//! While the overlay is open the page behind it is pinned in place with a
//! fixed-position body. The offset at the moment of opening is the scroll
//! anchor; closing clears the pin and scrolls back to exactly that offset.

use crate::shared::logging::{log_redundant_open, log_scroll_locked, log_scroll_released};

/// Access to the page that sits behind the overlay
pub trait ScrollHost {
    /// Current vertical scroll offset of the page
    fn scroll_offset(&self) -> f64;

    /// Width taken by the vertical scrollbar, zero when there is none
    fn scrollbar_width(&self) -> f64;

    /// Pin the page in place
    fn apply_lock(&self, style: &ScrollLockStyle);

    /// Remove whatever `apply_lock` set
    fn clear_lock(&self);

    fn scroll_to(&self, offset: f64);
}

/// Inline body style that pins the page at a given offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollLockStyle {
    pub top_offset: f64,
    pub scrollbar_width: f64,
}

impl ScrollLockStyle {
    pub fn new(top_offset: f64, scrollbar_width: f64) -> Self {
        Self {
            top_offset: top_offset.max(0.0),
            // Fall back to no compensation when the measurement is nonsense
            scrollbar_width: if scrollbar_width.is_finite() { scrollbar_width.max(0.0) } else { 0.0 },
        }
    }

    /// Body `style` attribute for the lock. The padding stands in for the
    /// scrollbar that disappears so content does not shift sideways.
    pub fn css_text(&self) -> String {
        format!(
            "position:fixed;top:-{}px;width:100%;padding-right:{}px",
            self.top_offset, self.scrollbar_width
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum OverlayState {
    Closed,
    Open { anchor: f64 },
}

/// Owns the scroll anchor of one overlay instance.
///
/// Dropping an open lifecycle closes it, so the page is always released
/// no matter how the overlay goes away.
pub struct OverlayLifecycle<H: ScrollHost> {
    host: H,
    state: OverlayState,
}

impl<H: ScrollHost> OverlayLifecycle<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: OverlayState::Closed,
        }
    }

    /// Capture the anchor and lock the page. Returns `false` when already
    /// open, in which case the existing anchor is kept.
    pub fn open(&mut self) -> bool {
        if let OverlayState::Open { anchor } = self.state {
            log_redundant_open(anchor);
            return false;
        }

        let anchor = self.host.scroll_offset();
        let style = ScrollLockStyle::new(anchor, self.host.scrollbar_width());
        self.host.apply_lock(&style);
        self.state = OverlayState::Open { anchor };
        log_scroll_locked(anchor, style.scrollbar_width);
        true
    }

    /// Release the lock, then restore the anchor. Returns `false` when
    /// already closed.
    pub fn close(&mut self) -> bool {
        let OverlayState::Open { anchor } = self.state else {
            return false;
        };

        self.state = OverlayState::Closed;
        self.host.clear_lock();
        self.host.scroll_to(anchor);
        log_scroll_released(anchor);
        true
    }

    /// Follow an externally owned visibility flag
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if visible { self.open() } else { self.close() }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    pub fn anchor(&self) -> Option<f64> {
        match self.state {
            OverlayState::Open { anchor } => Some(anchor),
            OverlayState::Closed => None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: ScrollHost> Drop for OverlayLifecycle<H> {
    fn drop(&mut self) {
        self.close();
    }
}
