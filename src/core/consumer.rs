//! Poller lifecycle.
//!
//! A [`Consumer`] owns one background thread that drains a [`BrokerClient`]
//! and feeds the handoff queue. The thread's lifetime is strictly bounded by
//! the `Consumer`'s: shutdown (explicit or via `Drop`) signals the stop flag,
//! joins the thread, and only then closes the queue.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::ConsumerOptions;
use crate::core::client::BrokerClient;
use crate::core::error::Error;
use crate::core::message::Message;
use crate::core::queue::MessageQueue;

pub struct Consumer {
    queue: Arc<MessageQueue>,
    running: Arc<AtomicBool>,
    poller: Option<JoinHandle<()>>,
}

impl Consumer {
    /// Create a Kafka-backed consumer and start polling.
    ///
    /// Fails with `Error::Config` on empty endpoints/group before any client
    /// exists, or with `Error::Client` if librdkafka rejects the
    /// configuration. On failure nothing is retained and no thread runs.
    #[cfg(feature = "kafka")]
    pub fn connect(options: ConsumerOptions) -> Result<Self, Error> {
        options.validate()?;
        let client = crate::core::client::KafkaClient::create(&options)?;
        Self::start(client, options)
    }

    /// Start polling an already-constructed broker client.
    ///
    /// The client moves into the poller thread; after this call only that
    /// thread ever touches it.
    pub fn start<C>(client: C, options: ConsumerOptions) -> Result<Self, Error>
    where
        C: BrokerClient + 'static,
    {
        options.validate()?;
        let queue = Arc::new(MessageQueue::new());
        let running = Arc::new(AtomicBool::new(true));
        let timeout = options.poll_timeout();

        let poller = {
            let queue = Arc::clone(&queue);
            let running = Arc::clone(&running);
            thread::Builder::new()
                .name("inflow-poller".into())
                .spawn(move || poll_loop(client, queue, running, timeout))
                .map_err(|e| Error::Client(format!("failed to spawn poller thread: {e}")))?
        };

        Ok(Self {
            queue,
            running,
            poller: Some(poller),
        })
    }

    /// Take the next message, blocking until one arrives.
    ///
    /// Delivery order is the order the poller received messages from the
    /// broker. There is no timeout; callers on a quiet topic block until a
    /// message shows up. Fails with `Error::Stopped` after shutdown.
    pub fn receive(&self) -> Result<Message, Error> {
        if self.poller.is_none() {
            return Err(Error::Stopped);
        }
        self.queue.pop()
    }

    /// Number of messages received but not yet consumed.
    pub fn backlog(&self) -> usize {
        self.queue.len()
    }

    /// Stop the poller, close the client, and release undelivered messages.
    ///
    /// Blocks until the poller thread has fully exited, which takes at most
    /// one poll-timeout interval. A second call fails with `Error::Stopped`.
    pub fn shutdown(&mut self) -> Result<(), Error> {
        let poller = self.poller.take().ok_or(Error::Stopped)?;
        self.running.store(false, Ordering::Release);
        if poller.join().is_err() {
            warn!("poller thread panicked during shutdown");
        }
        self.queue.close();
        info!("consumer shut down");
        Ok(())
    }
}

impl Drop for Consumer {
    fn drop(&mut self) {
        if self.poller.is_some() {
            let _ = self.shutdown();
        }
    }
}

/// Body of the poller thread. Owns the client for its whole life and closes
/// it on the way out, before the shutdown join returns.
fn poll_loop<C: BrokerClient>(
    mut client: C,
    queue: Arc<MessageQueue>,
    running: Arc<AtomicBool>,
    timeout: Duration,
) {
    info!("poller started");
    while running.load(Ordering::Acquire) {
        match client.poll(timeout) {
            Ok(Some(message)) => {
                // Closed queue means shutdown won the race; stop early.
                if queue.push(message).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => debug!(error = %e, "transient receive error absorbed"),
        }
    }
    client.close();
    info!("poller stopped");
}
