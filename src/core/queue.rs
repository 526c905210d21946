//! Hand-off queue between producers and the writer thread
//!
//! An unbounded, thread-safe FIFO. Producers enqueue without blocking; the
//! single consumer blocks on dequeue. A pending counter tracks items from
//! enqueue until the consumer marks them done, so [`HandoffQueue::wait_empty`]
//! returns only once every prior item has been fully processed, not merely
//! taken off the channel.

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::{Condvar, Mutex};

pub struct HandoffQueue<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
    pending: Mutex<usize>,
    drained: Condvar,
}

impl<T: Send> HandoffQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx,
            pending: Mutex::new(0),
            drained: Condvar::new(),
        }
    }

    /// Append an item. Never blocks; capacity is unbounded.
    pub fn enqueue(&self, item: T) {
        let mut pending = self.pending.lock();
        *pending += 1;
        drop(pending);
        // The queue owns its receiver, so the channel cannot be disconnected.
        let _ = self.tx.send(item);
    }

    /// Remove the oldest item, blocking until one is available.
    ///
    /// Single consumer assumed; ordering is FIFO relative to all enqueues.
    pub fn dequeue(&self) -> T {
        self.rx
            .recv()
            .expect("sender is owned by the queue and cannot disconnect")
    }

    /// Mark the most recently dequeued item as fully processed.
    ///
    /// Wakes [`wait_empty`](Self::wait_empty) callers once every enqueued
    /// item has been marked done.
    pub fn task_done(&self) {
        let mut pending = self.pending.lock();
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            self.drained.notify_all();
        }
    }

    /// Items enqueued but not yet marked done.
    ///
    /// Approximate under concurrent mutation; reaches 0 once every item
    /// enqueued before the call has been processed.
    pub fn len(&self) -> usize {
        *self.pending.lock()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Block until every item enqueued before this call has been processed.
    pub fn wait_empty(&self) {
        let mut pending = self.pending.lock();
        while *pending > 0 {
            self.drained.wait(&mut pending);
        }
    }
}

impl<T: Send> Default for HandoffQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
