//! Log-backed UI capabilities for running the console core without a window.

use std::time::Duration;

use parking_lot::Mutex;

use crate::core::service::{Notifier, Page};

/// Writes notifications to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str, duration: Duration) {
        tracing::error!(duration_ms = duration.as_millis() as u64, "{}", message);
    }
}

/// Tracks the document title and loading state, logging every change.
#[derive(Debug, Default)]
pub struct LogPage {
    title: Mutex<String>,
    loading: Mutex<bool>,
}

impl LogPage {
    pub fn title(&self) -> String {
        self.title.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.lock()
    }
}

impl Page for LogPage {
    fn set_title(&self, title: &str) {
        tracing::debug!(title, "Title changed");
        *self.title.lock() = title.to_string();
    }

    fn start_loading(&self) {
        *self.loading.lock() = true;
    }

    fn finish_loading(&self) {
        *self.loading.lock() = false;
    }

    fn scroll_into_view_after_paint(&self, anchor: &str) {
        tracing::debug!(anchor, "Scroll requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_page_tracks_state() {
        let page = LogPage::default();
        page.set_title("Tasks - Skynet");
        page.start_loading();
        assert!(page.is_loading());
        page.finish_loading();
        assert!(!page.is_loading());
        assert_eq!(page.title(), "Tasks - Skynet");
    }
}
