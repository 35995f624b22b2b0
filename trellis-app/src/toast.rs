//! The toast queue: the app's implementation of the engine's notification
//! seam. Presentation is whoever holds the receiver; this side only
//! enqueues. Messages are mirrored to tracing so headless runs still see
//! outcomes.

use tokio::sync::mpsc;
use trellis_board::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded queue of pending toasts.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    tx: mpsc::Sender<Toast>,
}

impl ToastQueue {
    /// Create a queue and the receiver the UI drains.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Toast>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let toast = Toast {
            kind,
            message: message.to_string(),
        };
        if self.tx.try_send(toast).is_err() {
            // UI is not draining; the tracing mirror below still records it
            tracing::warn!(message, "toast queue full, dropping");
        }
    }
}

impl Notify for ToastQueue {
    fn success(&self, message: &str) {
        tracing::info!(target: "trellis::toast", "{message}");
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "trellis::toast", "{message}");
        self.push(ToastKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_arrive_in_order() {
        let (queue, mut rx) = ToastQueue::channel(8);
        queue.success("moved");
        queue.error("failed");

        let first = rx.try_recv().unwrap();
        assert_eq!(first.kind, ToastKind::Success);
        assert_eq!(first.message, "moved");
        let second = rx.try_recv().unwrap();
        assert_eq!(second.kind, ToastKind::Error);
    }

    #[test]
    fn test_full_queue_drops_instead_of_blocking() {
        let (queue, mut rx) = ToastQueue::channel(1);
        queue.success("kept");
        queue.success("dropped");

        assert_eq!(rx.try_recv().unwrap().message, "kept");
        assert!(rx.try_recv().is_err());
    }
}
