//! Subscriber registry and non-blocking fan-out.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Number of lines a viewer may have pending before new lines are dropped for it.
pub const INBOX_CAPACITY: usize = 100;

/// Process-wide set of live viewers.
///
/// Cloning is cheap; all clones share the same registry. Subscribing and
/// closing emit no log events, so viewers only ever see lines from the rest
/// of the process, whatever the filter level.
#[derive(Clone, Default)]
pub struct Broadcaster {
    inner: Arc<Registry>,
}

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    inboxes: RwLock<HashMap<u64, mpsc::Sender<String>>>,
}

impl Broadcaster {
    /// Creates a broadcaster with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new viewer with an empty inbox of [`INBOX_CAPACITY`] lines.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel(INBOX_CAPACITY);
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);

        self.inner.inboxes.write().insert(id, tx);

        Subscription {
            id,
            inbox: rx,
            broadcaster: self.clone(),
            registered: true,
        }
    }

    /// Offers `line` to every registered viewer.
    ///
    /// Never blocks: a full inbox drops the line for that viewer only.
    pub fn broadcast(&self, line: &str) {
        let inboxes = self.inner.inboxes.read();
        for tx in inboxes.values() {
            // Full or closed inboxes lose the line.
            let _ = tx.try_send(line.to_owned());
        }
    }

    /// Returns the number of currently registered viewers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.inboxes.read().len()
    }

    fn unsubscribe(&self, id: u64) {
        // Dropping the sender closes the inbox once pending lines are drained.
        let removed = self.inner.inboxes.write().remove(&id);
        drop(removed);
    }
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcaster")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// One viewer's handle on the broadcast.
///
/// The viewer stays registered until [`Subscription::close`] is called or the
/// handle is dropped, whichever happens first.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    inbox: mpsc::Receiver<String>,
    broadcaster: Broadcaster,
    registered: bool,
}

impl Subscription {
    /// Waits for the next line.
    ///
    /// Returns `None` once the subscription is closed and its inbox drained.
    pub async fn recv(&mut self) -> Option<String> {
        self.inbox.recv().await
    }

    /// Takes the next pending line without waiting.
    pub fn try_recv(&mut self) -> Option<String> {
        self.inbox.try_recv().ok()
    }

    /// Removes this viewer from the registry and closes its inbox.
    ///
    /// Lines already queued can still be received. Closing twice is a no-op.
    pub fn close(&mut self) {
        if !self.registered {
            return;
        }
        self.registered = false;
        self.broadcaster.unsubscribe(self.id);
        self.inbox.close();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.close();
    }
}
