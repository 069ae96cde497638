//! Blocking FIFO handoff queue.
//!
//! Transfers `Message` ownership from the background poller to consumer
//! threads. Unbounded by design: the poller never blocks on a slow consumer.
//! One mutex guards the list; a condvar signals "queue became non-empty".

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use crate::core::error::Error;
use crate::core::message::Message;

#[derive(Debug, Default)]
struct Inner {
    items: VecDeque<Message>,
    closed: bool,
}

#[derive(Debug, Default)]
pub struct MessageQueue {
    inner: Mutex<Inner>,
    available: Condvar,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a message, taking ownership of it.
    ///
    /// Wakes one waiting `pop`. Fails only after [`close`](Self::close), in
    /// which case the message is dropped here rather than leaked.
    pub fn push(&self, message: Message) -> Result<(), Error> {
        let mut inner = self.inner.lock().expect("queue lock poisoned");
        if inner.closed {
            return Err(Error::QueueClosed);
        }
        inner.items.push_back(message);
        self.available.notify_one();
        Ok(())
    }

    /// Dequeue the oldest message, blocking until one is available.
    ///
    /// There is no timeout: with no producer this blocks forever. Returns
    /// `Error::QueueClosed` once the queue is closed and drained.
    pub fn pop(&self) -> Result<Message, Error> {
        let mut inner = self.inner.lock().expect("queue lock poisoned");
        // Loop guards against spurious wakeups and competing waiters.
        while inner.items.is_empty() {
            if inner.closed {
                return Err(Error::QueueClosed);
            }
            inner = self.available.wait(inner).expect("queue lock poisoned");
        }
        Ok(inner.items.pop_front().expect("non-empty after wait"))
    }

    /// Close the queue, dropping every undelivered message and waking all
    /// blocked `pop` callers so they observe the closed state. Idempotent.
    pub fn close(&self) {
        let mut inner = self.inner.lock().expect("queue lock poisoned");
        inner.closed = true;
        inner.items.clear();
        self.available.notify_all();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("queue lock poisoned").items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
