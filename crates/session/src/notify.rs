//! User-facing seams: blocking notifications and destructive-action
//! confirmation.

/// Shows a message the user must acknowledge.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Asks the user to confirm a destructive action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Headless notifier that writes messages to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(message, "User notification");
    }
}

/// Answers every confirmation with a fixed response.
///
/// The session default is `AutoConfirm(false)`, so deletes are refused
/// until a real confirmation source is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, answer = self.0, "Auto-answered confirmation");
        self.0
    }
}
