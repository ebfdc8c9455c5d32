//! Mock event transport for testing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{EventTransport, TransportHandle, TransportSink};

#[derive(Debug)]
struct Subscription {
    url: String,
    sink: TransportSink,
    open: Arc<AtomicBool>,
}

/// Mock transport.
///
/// Nothing is dialed; every `open` is recorded with its sink so a test can
/// play the server's part afterwards.
///
/// ```ignore
/// let transport = MockTransport::new();
/// driver.dispatch(ControllerEvent::Submit { room: "abc".into() }, &mut view);
/// assert_eq!(transport.opened_urls(), vec!["http://localhost:42069/connect?roomid=abc"]);
/// transport.simulate_message("Turn 1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    subscriptions: Arc<Mutex<Vec<Subscription>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Subscription>> {
        // A poisoned lock only means another test thread panicked
        self.subscriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// URLs of every subscription opened so far, oldest first.
    pub fn opened_urls(&self) -> Vec<String> {
        self.lock().iter().map(|s| s.url.clone()).collect()
    }

    pub fn open_count(&self) -> usize {
        self.lock().len()
    }

    /// Subscriptions not closed yet.
    pub fn live_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|s| s.open.load(Ordering::SeqCst))
            .count()
    }

    pub fn close_count(&self) -> usize {
        self.open_count() - self.live_count()
    }

    /// Sink of the `index`-th subscription.
    pub fn sink(&self, index: usize) -> Option<TransportSink> {
        self.lock().get(index).map(|s| s.sink.clone())
    }

    pub fn last_sink(&self) -> Option<TransportSink> {
        self.lock().last().map(|s| s.sink.clone())
    }

    /// Report a handshake on the newest subscription.
    pub fn simulate_open(&self) -> bool {
        self.last_sink().is_some_and(|sink| sink.opened())
    }

    /// Deliver a payload on the newest subscription.
    pub fn simulate_message(&self, data: &str) -> bool {
        self.last_sink().is_some_and(|sink| sink.message(data))
    }

    /// Fail the newest subscription.
    pub fn simulate_error(&self, reason: &str) -> bool {
        self.last_sink().is_some_and(|sink| sink.error(reason))
    }
}

impl EventTransport for MockTransport {
    fn open(&self, url: &str, sink: TransportSink) -> Box<dyn TransportHandle> {
        let open = Arc::new(AtomicBool::new(true));
        self.lock().push(Subscription {
            url: url.to_string(),
            sink,
            open: open.clone(),
        });
        Box::new(MockHandle { open })
    }
}

struct MockHandle {
    open: Arc<AtomicBool>,
}

impl TransportHandle for MockHandle {
    fn close(&mut self) {
        self.open.store(false, Ordering::SeqCst);
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ControllerEvent;
    use crate::domain::SessionId;
    use tokio::sync::mpsc;

    #[test]
    fn test_mock_records_and_closes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let transport = MockTransport::new();

        let mut first = transport.open("http://a/connect?roomid=1", TransportSink::new(SessionId::new(1), tx.clone()));
        let _second = transport.open("http://a/connect?roomid=2", TransportSink::new(SessionId::new(2), tx));
        assert_eq!(transport.live_count(), 2);

        first.close();
        first.close();
        assert!(!first.is_open());
        assert_eq!(transport.live_count(), 1);
        assert_eq!(transport.close_count(), 1);

        assert!(transport.simulate_message("hi"));
        assert_eq!(
            rx.try_recv().unwrap(),
            ControllerEvent::Message {
                session: SessionId::new(2),
                data: "hi".into()
            }
        );
    }

    #[test]
    fn test_simulate_without_subscription() {
        let transport = MockTransport::new();
        assert!(!transport.simulate_open());
        assert!(transport.opened_urls().is_empty());
    }
}
