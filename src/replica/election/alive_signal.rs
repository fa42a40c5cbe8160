use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// AliveSignal is the one-shot wake-up for a replica waiting on a higher replica's "alive"
/// acknowledgment.
///
/// A signal that arrives before anyone waits is kept, and any number of signals before a wait
/// collapse into one. Each `wait()` consumes it. An election round that ends without waiting
/// must `reset()` it, or the next round's wait returns on a stale signal. There is no timeout.
#[derive(Default)]
pub(crate) struct AliveSignal {
    received: AtomicBool,
    notify: Notify,
}

impl AliveSignal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn signal(&self) {
        self.received.store(true, Ordering::Release);
        self.notify.notify_waiters();
    }

    pub(crate) async fn wait(&self) {
        loop {
            // Registered before the check, so a signal landing in between still wakes us.
            let notified = self.notify.notified();
            if self.received.swap(false, Ordering::AcqRel) {
                return;
            }
            notified.await;
        }
    }

    pub(crate) fn reset(&self) {
        self.received.store(false, Ordering::Release);
    }
}
