//! User notifications.
//!
//! Dispatch failures are surfaced as non-blocking notifications, never as
//! modal dialogs: nothing may interrupt the host editor's event handling.

/// A non-blocking notification sink.
///
/// Host integrations route this into the editor's toast/notification area;
/// the CLI logs it.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier that writes to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
