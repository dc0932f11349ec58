//! User-facing notifications.

use tracing::info;

/// Sink for the success notifications raised by the stores.
///
/// The display layer decides how a message reaches the user; the stores only
/// decide when one is raised.
pub trait Notifier: Send + Sync {
    /// Surface a success message to the user.
    fn success(&self, message: &str);
}

/// Notifier that emits messages to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{message}");
    }
}
