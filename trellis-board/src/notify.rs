//! The notification seam.
//!
//! The engine reports outcomes through this trait; presentation (toasts)
//! belongs to the host. Invalid drop targets stay silent; nothing here is
//! called for them.

/// Sink for user-facing outcome messages.
pub trait Notify: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// A [`Notify`] that forwards to tracing. Useful as a default sink and in
/// headless contexts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotify;

impl Notify for TracingNotify {
    fn success(&self, message: &str) {
        tracing::info!(target: "trellis::notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "trellis::notify", "{message}");
    }
}
