//! librdkafka-backed broker client (`kafka` feature).
//!
//! Uses `rdkafka::BaseConsumer` so that the bridge controls its own blocking
//! poll loop instead of inheriting the StreamConsumer's async machinery.

use std::time::Duration;

use bytes::Bytes;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{BaseConsumer, Consumer as _};
use rdkafka::Message as _;
use tracing::info;

use crate::config::ConsumerOptions;
use crate::core::client::{BrokerClient, ClientError};
use crate::core::error::Error;
use crate::core::message::Message;

pub struct KafkaClient {
    consumer: BaseConsumer,
}

impl KafkaClient {
    /// Create the client and, when topics were configured, join the group's
    /// subscription. Auto-commit stays disabled: commit semantics belong to
    /// a layer above this bridge.
    pub fn create(options: &ConsumerOptions) -> Result<Self, Error> {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", &options.bootstrap_servers)
            .set("group.id", &options.group_id)
            .set("enable.auto.commit", "false");
        for (key, value) in &options.properties {
            config.set(key, value);
        }

        let consumer: BaseConsumer = config
            .create()
            .map_err(|e| Error::Client(e.to_string()))?;

        if !options.topics.is_empty() {
            let topics: Vec<&str> = options.topics.iter().map(String::as_str).collect();
            consumer
                .subscribe(&topics)
                .map_err(|e| Error::Client(e.to_string()))?;
        }

        info!(
            servers = %options.bootstrap_servers,
            group = %options.group_id,
            "created Kafka client"
        );
        Ok(Self { consumer })
    }
}

impl BrokerClient for KafkaClient {
    fn poll(&mut self, timeout: Duration) -> Result<Option<Message>, ClientError> {
        match self.consumer.poll(timeout) {
            None => Ok(None),
            Some(Err(e)) => Err(ClientError(e.to_string())),
            Some(Ok(borrowed)) => {
                let message = Message {
                    topic: borrowed.topic().to_owned(),
                    partition: borrowed.partition(),
                    offset: borrowed.offset(),
                    key: borrowed.key().map(Bytes::copy_from_slice),
                    payload: borrowed
                        .payload()
                        .map(Bytes::copy_from_slice)
                        .unwrap_or_else(Bytes::new),
                    timestamp: borrowed.timestamp().to_millis().unwrap_or(0) as u64,
                };
                Ok(Some(message))
            }
        }
    }

    fn close(&mut self) {
        self.consumer.unsubscribe();
    }
}
