use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use inflow::core::client::{BrokerClient, ClientError};
use inflow::Message;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        inflow::logging::init_logging();
    });
}

/// One scripted outcome of a broker poll.
pub enum Script {
    Deliver(Message),
    Fail(&'static str),
}

/// In-process broker client fed from the test through a channel. A poll with
/// nothing scripted behaves like a quiet broker and blocks for the full
/// timeout.
pub struct StubClient {
    feed: Receiver<Script>,
    polled: Arc<AtomicBool>,
    closed: Arc<AtomicBool>,
}

pub struct StubHandle {
    pub feed: Sender<Script>,
    pub polled: Arc<AtomicBool>,
    pub closed: Arc<AtomicBool>,
}

impl StubClient {
    pub fn new() -> (StubClient, StubHandle) {
        let (tx, rx) = unbounded();
        let polled = Arc::new(AtomicBool::new(false));
        let closed = Arc::new(AtomicBool::new(false));
        let client = StubClient {
            feed: rx,
            polled: Arc::clone(&polled),
            closed: Arc::clone(&closed),
        };
        let handle = StubHandle {
            feed: tx,
            polled,
            closed,
        };
        (client, handle)
    }
}

impl BrokerClient for StubClient {
    fn poll(&mut self, timeout: Duration) -> Result<Option<Message>, ClientError> {
        self.polled.store(true, Ordering::SeqCst);
        match self.feed.recv_timeout(timeout) {
            Ok(Script::Deliver(msg)) => Ok(Some(msg)),
            Ok(Script::Fail(reason)) => Err(ClientError(reason.into())),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                // Script exhausted for good: keep behaving like a quiet broker.
                thread::sleep(timeout);
                Ok(None)
            }
        }
    }

    fn close(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Spin until `cond` holds, failing the test after `timeout`.
pub fn wait_for(cond: impl Fn() -> bool, timeout: Duration) {
    let start = Instant::now();
    while !cond() {
        assert!(start.elapsed() < timeout, "condition not met within {timeout:?}");
        thread::sleep(Duration::from_millis(5));
    }
}
