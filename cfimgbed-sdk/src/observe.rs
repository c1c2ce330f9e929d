// ABOUTME: Injected Notifier and Logger capabilities used by the upload adapter
// ABOUTME: Provides log-facade, null, and in-memory recording implementations

use std::sync::Mutex;

/// User-visible notification sink. The host surfaces these as popups; the
/// CLI prints them to stderr and summarizes them after a run.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Structured log sink injected into the adapter instead of an implicit
/// context, so tests can observe log output with fakes.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards adapter logs to the `log` facade.
pub struct LogSink;

impl Logger for LogSink {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Discards notifications. Default for library consumers that only care
/// about the returned item list.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Records notifications in memory. The CLI drains this for the end-of-run
/// summary; tests use it to assert which failures were surfaced.
#[derive(Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, title: &str, body: &str) {
        self.entries.lock().unwrap().push(Notification {
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}

/// Records log lines in memory, for tests.
#[derive(Default)]
pub struct MemoryLogger {
    info: Mutex<Vec<String>>,
    error: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info_lines(&self) -> Vec<String> {
        self.info.lock().unwrap().clone()
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.error.lock().unwrap().clone()
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.info.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.error.lock().unwrap().push(message.to_string());
    }
}
