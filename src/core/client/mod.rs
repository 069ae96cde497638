//! Broker client boundary.
//!
//! The poller only ever talks to a [`BrokerClient`], so the real librdkafka
//! client (behind the `kafka` feature) and in-process test stubs are
//! interchangeable.

#[cfg(feature = "kafka")]
pub mod kafka;

#[cfg(feature = "kafka")]
pub use kafka::KafkaClient;

use std::fmt;
use std::time::Duration;

use crate::core::message::Message;

/// A transient error from a single receive attempt. The poller logs and
/// absorbs these; they never reach a consumer.
#[derive(Debug)]
pub struct ClientError(pub String);

impl std::error::Error for ClientError {}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One broker connection, owned by the poller thread after startup.
pub trait BrokerClient: Send {
    /// Block for up to `timeout` waiting for one message.
    ///
    /// `Ok(None)` means the timeout elapsed with nothing received.
    fn poll(&mut self, timeout: Duration) -> Result<Option<Message>, ClientError>;

    /// Leave the consumer group before the connection is dropped. Called by
    /// the poller thread exactly once, after its loop exits.
    fn close(&mut self) {}
}
