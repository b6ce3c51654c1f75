use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to a live notification stream. Dropping it unsubscribes.
pub struct Subscription {
    label: &'static str,
    cancelled: Arc<AtomicBool>,
}

/// Watcher-side view of a [`Subscription`]
#[derive(Clone, Debug)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Subscription {
    pub fn new(label: &'static str) -> (Self, CancelToken) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let token = CancelToken(cancelled.clone());
        (Self { label, cancelled }, token)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            tracing::debug!("Unsubscribed from {}", self.label);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
