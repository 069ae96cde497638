use std::fmt;

#[derive(Debug)]
pub enum Error {
    Config(String),
    Client(String),
    QueueClosed,
    Stopped,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            Error::Client(msg) => write!(f, "Broker client error: {msg}"),
            Error::QueueClosed => write!(f, "Handoff queue is closed"),
            Error::Stopped => write!(f, "Consumer has been shut down"),
        }
    }
}
