use bytes::Bytes;

/// One unit of data retrieved from the broker.
///
/// A `Message` is owned by exactly one holder at a time: the broker client
/// hands it to the poller, the poller moves it into the handoff queue, and a
/// `receive()` call moves it out to the consumer. The type is deliberately
/// not `Clone` so that handoff stays a transfer, never a duplication.
#[derive(Debug, PartialEq, Eq)]
pub struct Message {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub key: Option<Bytes>,
    pub payload: Bytes,
    /// Broker timestamp in milliseconds since epoch, 0 when the broker did
    /// not provide one.
    pub timestamp: u64,
}

impl Message {
    pub fn new(topic: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            topic: topic.into(),
            partition: 0,
            offset: 0,
            key: None,
            payload: payload.into(),
            timestamp: current_timestamp(),
        }
    }

    pub fn with_key(mut self, key: impl Into<Bytes>) -> Self {
        self.key = Some(key.into());
        self
    }
}

pub fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
