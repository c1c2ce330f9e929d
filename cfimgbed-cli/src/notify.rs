// ABOUTME: Console implementation of the SDK's Notifier capability
// ABOUTME: Prints failure notifications to stderr and records them for the run summary

use cfimgbed_sdk::{Notification, NotificationLog, Notifier};
use owo_colors::OwoColorize;

/// Prints each notification to stderr as it happens and keeps a copy so
/// the CLI can summarize failures after the batch finishes.
pub struct ConsoleNotifier {
    log: NotificationLog,
    use_color: bool,
}

impl ConsoleNotifier {
    pub fn new(use_color: bool) -> Self {
        Self {
            log: NotificationLog::new(),
            use_color,
        }
    }

    pub fn count(&self) -> usize {
        self.log.len()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.log.entries()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) {
        self.log.notify(title, body);
        if self.use_color {
            eprintln!("{}: {}", title.red().bold(), body);
        } else {
            eprintln!("{title}: {body}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_are_recorded() {
        let notifier = ConsoleNotifier::new(false);
        assert_eq!(notifier.count(), 0);

        notifier.notify("CF-Imgbed upload failed", "a.png: too large");

        assert_eq!(notifier.count(), 1);
        let entries = notifier.entries();
        assert_eq!(entries[0].title, "CF-Imgbed upload failed");
        assert_eq!(entries[0].body, "a.png: too large");
    }
}
