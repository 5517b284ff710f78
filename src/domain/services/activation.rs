use crate::domain::models::{NavTarget, NavigationEntry};
use crate::shared::logging::log_navigation;

/// Window name for external links
pub const EXTERNAL_TARGET: &str = "_blank";

/// Window features for external links: no opener handle, no referrer
pub const EXTERNAL_FEATURES: &str = "noopener,noreferrer";

/// Outbound navigation calls made when an entry is activated
pub trait NavigationHandler {
    /// In-place navigation inside the application
    fn navigate(&self, path: &str);

    /// Open a URL in a new, unrelated browsing context
    fn open_external(&self, url: &str);
}

/// Route an activated entry, then request dismissal.
///
/// Dismissal always runs after the navigation call, on both branches.
pub fn activate_entry<N, F>(entry: &NavigationEntry, navigator: &N, dismiss: F) -> NavTarget
where
    N: NavigationHandler + ?Sized,
    F: FnOnce(),
{
    let target = entry.target();
    log_navigation(&entry.id, target.location(), target.is_external());

    match &target {
        NavTarget::External(url) => navigator.open_external(url),
        NavTarget::Internal(path) => navigator.navigate(path),
    }
    dismiss();

    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::IconName;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Navigate(String),
        OpenExternal(String),
        Dismiss,
    }

    #[derive(Default)]
    struct RecordingNavigator {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl NavigationHandler for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.events.borrow_mut().push(Event::Navigate(path.to_string()));
        }

        fn open_external(&self, url: &str) {
            self.events.borrow_mut().push(Event::OpenExternal(url.to_string()));
        }
    }

    fn activate(entry: &NavigationEntry) -> Vec<Event> {
        let navigator = RecordingNavigator::default();
        let events = navigator.events.clone();
        activate_entry(entry, &navigator, || events.borrow_mut().push(Event::Dismiss));
        navigator.events.take()
    }

    #[test]
    fn test_internal_entry_navigates_then_dismisses() {
        let entry = NavigationEntry::new("home", "Home", IconName::Home, "/");
        assert_eq!(activate(&entry), vec![Event::Navigate("/".to_string()), Event::Dismiss]);
    }

    #[test]
    fn test_external_entry_opens_then_dismisses() {
        let entry = NavigationEntry::new("x", "Example", IconName::Link, "https://example.com");
        assert_eq!(
            activate(&entry),
            vec![Event::OpenExternal("https://example.com".to_string()), Event::Dismiss]
        );
    }

    #[test]
    fn test_branches_never_cross() {
        let entries = [
            NavigationEntry::new("a", "A", IconName::Link, "http://a.example"),
            NavigationEntry::new("b", "B", IconName::Link, "https://b.example/path"),
            NavigationEntry::new("c", "C", IconName::Info, "/mail"),
            NavigationEntry::new("d", "D", IconName::Info, "relative/page"),
            NavigationEntry::new("e", "E", IconName::Link, "httpbin.org/get"),
            NavigationEntry::new("f", "F", IconName::Link, "HTTP://UPPER.EXAMPLE"),
        ];

        for entry in &entries {
            let events = activate(entry);
            let external = entry.target_location.starts_with("http");
            assert_eq!(events.len(), 2);
            assert_eq!(matches!(events[0], Event::OpenExternal(_)), external);
            assert_eq!(matches!(events[0], Event::Navigate(_)), !external);
        }
    }

    #[test]
    fn test_returns_classified_target() {
        let navigator = RecordingNavigator::default();
        let entry = NavigationEntry::new("mail", "Mail", IconName::Info, "/mail");
        let target = activate_entry(&entry, &navigator, || {});
        assert_eq!(target, NavTarget::Internal("/mail".to_string()));
    }
}
