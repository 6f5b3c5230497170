//! Input debouncing
//!
//! Delays propagation of a rapidly changing value until it has been stable
//! for the delay window. Each update cancels the pending emission and re-arms
//! the timer (reset, not stack), so a burst of changes emits exactly once,
//! with the final value.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Debounces a stream of values onto a channel.
///
/// Create with [`Debouncer::new`], feed values through [`Debouncer::update`],
/// and read settled values from the returned receiver.
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer with the given quiet window
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Register a new input value, cancelling any pending emission
    pub fn update(&mut self, value: T) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }

    /// Drop any pending emission without replacing it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether an emission is currently armed
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_burst_emits_final_value_once() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));

        for value in ["r", "ru", "rus", "rust", "rust lang"] {
            debouncer.update(value.to_string());
            tokio::time::advance(Duration::from_millis(50)).await;
        }

        let emitted = rx.recv().await.unwrap();
        assert_eq!(emitted, "rust lang");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restartable_across_bursts() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));

        debouncer.update("first".to_string());
        assert_eq!(rx.recv().await.unwrap(), "first");

        debouncer.update("second".to_string());
        assert_eq!(rx.recv().await.unwrap(), "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_emission() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));

        debouncer.update("doomed".to_string());
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_stale_emission_after_change() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));

        debouncer.update("stale".to_string());
        tokio::time::advance(Duration::from_millis(299)).await;
        debouncer.update("fresh".to_string());

        assert_eq!(rx.recv().await.unwrap(), "fresh");
        assert!(rx.try_recv().is_err());
    }
}
