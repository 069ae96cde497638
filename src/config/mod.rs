use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use std::{fs, path::Path};

use crate::core::error::Error;

/// Options for one bridge consumer, loadable from TOML or built in code.
#[derive(Debug, Deserialize, Clone)]
pub struct ConsumerOptions {
    /// Broker endpoints, e.g. "broker-1:9092,broker-2:9092".
    pub bootstrap_servers: String,
    /// Consumer group identifier.
    pub group_id: String,
    /// Topics to subscribe to. May be empty when subscription is managed
    /// out of band.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Upper bound on one blocking receive, which also bounds shutdown
    /// latency.
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
    /// Extra client properties passed through verbatim (fetch sizes,
    /// backoff tuning, ...).
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

fn default_poll_timeout_ms() -> u64 {
    1000
}

impl ConsumerOptions {
    pub fn new(bootstrap_servers: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            bootstrap_servers: bootstrap_servers.into(),
            group_id: group_id.into(),
            topics: Vec::new(),
            poll_timeout_ms: default_poll_timeout_ms(),
            properties: HashMap::new(),
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topics.push(topic.into());
        self
    }

    pub fn with_poll_timeout_ms(mut self, ms: u64) -> Self {
        self.poll_timeout_ms = ms;
        self
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.bootstrap_servers.trim().is_empty() {
            return Err(Error::Config("bootstrap_servers must not be empty".into()));
        }
        if self.group_id.trim().is_empty() {
            return Err(Error::Config("group_id must not be empty".into()));
        }
        if self.poll_timeout_ms == 0 {
            return Err(Error::Config("poll_timeout_ms must be positive".into()));
        }
        Ok(())
    }
}

pub fn load_options<P: AsRef<Path>>(path: P) -> Result<ConsumerOptions, anyhow::Error> {
    let raw: String = fs::read_to_string(path)?;
    let options: ConsumerOptions = toml::from_str(&raw)?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_strings() {
        assert!(ConsumerOptions::new("", "g1").validate().is_err());
        assert!(ConsumerOptions::new("broker:9092", "  ").validate().is_err());
        assert!(ConsumerOptions::new("broker:9092", "g1").validate().is_ok());
    }

    #[test]
    fn parses_minimal_toml() {
        let options: ConsumerOptions = toml::from_str(
            r#"
            bootstrap_servers = "broker:9092"
            group_id = "g1"
            "#,
        )
        .unwrap();
        assert_eq!(options.poll_timeout_ms, 1000);
        assert!(options.topics.is_empty());
        assert!(options.properties.is_empty());
    }
}
