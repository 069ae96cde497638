//! inflow – a client-side Kafka ingestion bridge written in Rust.
//!
//! This crate exports
//!  * `core`    – message, handoff queue, broker client and consumer logic
//!  * `config`  – TOML-driven consumer options
//!  * `logging` – tracing subscriber setup
//!
//! A [`core::consumer::Consumer`] runs one background poller thread that
//! drains the broker client and feeds a blocking FIFO queue; any number of
//! threads call `receive()` to take messages off that queue in arrival order.
//!
//! The real Kafka client (librdkafka via `rdkafka`) lives behind the `kafka`
//! cargo feature; everything else builds and tests against the plain
//! [`core::client::BrokerClient`] trait.

// ───────────────────────────────────────────────────────────
// Public modules
// ───────────────────────────────────────────────────────────
pub mod config;
pub mod core;
pub mod logging;

// ───────────────────────────────────────────────────────────
// Re-exports
// ───────────────────────────────────────────────────────────
pub use config::{load_options, ConsumerOptions};
pub use core::consumer::Consumer;
pub use core::error::Error;
pub use core::message::Message;
