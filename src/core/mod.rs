pub mod client;
pub mod consumer;
pub mod error;
pub mod message;
pub mod queue;
