//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let mut harness = Harness::new();
//! harness.submit("abc");
//! harness.transport.simulate_open();
//! harness.pump();
//! ```

#![allow(dead_code)]

use battlelog::adapters::{MockTransport, RecordingView};
use battlelog::controller::{ConnectionController, ControllerEvent, ReconnectPolicy};
use battlelog::endpoint::Endpoint;
use battlelog::runtime::SessionDriver;
use tokio::sync::mpsc;

/// Origin used by tests that do not care about URL resolution.
pub const TEST_ORIGIN: &str = "http://localhost:8080";

/// A driver wired to a mock transport and a recording view.
pub struct Harness {
    pub driver: SessionDriver<MockTransport>,
    pub transport: MockTransport,
    pub view: RecordingView,
    pub rx: mpsc::UnboundedReceiver<ControllerEvent>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_policy(ReconnectPolicy::default())
    }

    pub fn with_policy(policy: ReconnectPolicy) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let transport = MockTransport::new();
        let endpoint = Endpoint::from_origin(TEST_ORIGIN).unwrap();
        let driver = SessionDriver::new(
            ConnectionController::new(policy),
            endpoint,
            transport.clone(),
            tx,
        );
        Self {
            driver,
            transport,
            view: RecordingView::new(),
            rx,
        }
    }

    pub fn submit(&mut self, room: &str) {
        self.dispatch(ControllerEvent::Submit {
            room: room.to_string(),
        });
    }

    pub fn dispatch(&mut self, event: ControllerEvent) {
        self.driver.dispatch(event, &mut self.view);
    }

    /// Apply every queued event. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    /// Wait for the next queued event and apply it.
    pub async fn next(&mut self) -> ControllerEvent {
        let event = self.rx.recv().await.expect("channel closed");
        self.dispatch(event.clone());
        event
    }

    /// Fail the live stream and apply the error.
    pub fn fail_stream(&mut self) {
        assert!(self.transport.simulate_error("connection reset"));
        self.pump();
    }
}
