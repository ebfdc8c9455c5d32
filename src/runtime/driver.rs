//! Session driver: the single writer of controller state.

use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::RetryScheduler;
use crate::controller::{ConnectionController, ControllerEvent, Effect};
use crate::domain::SessionId;
use crate::endpoint::Endpoint;
use crate::traits::{BattleView, EventTransport, TransportHandle, TransportSink};

/// Owns the controller, the live transport handle and the retry timer.
///
/// Events are applied one at a time through [`dispatch`](Self::dispatch),
/// which runs the controller and then applies its effects in order.
/// Transport callbacks and retry timers post back into the channel whose
/// sender is passed to [`new`](Self::new).
pub struct SessionDriver<T: EventTransport> {
    controller: ConnectionController,
    endpoint: Endpoint,
    transport: T,
    live: Option<(SessionId, Box<dyn TransportHandle>)>,
    retries: RetryScheduler,
    events_tx: mpsc::UnboundedSender<ControllerEvent>,
}

impl<T: EventTransport> SessionDriver<T> {
    pub fn new(
        controller: ConnectionController,
        endpoint: Endpoint,
        transport: T,
        events_tx: mpsc::UnboundedSender<ControllerEvent>,
    ) -> Self {
        Self {
            controller,
            endpoint,
            transport,
            live: None,
            retries: RetryScheduler::new(events_tx.clone()),
            events_tx,
        }
    }

    pub fn controller(&self) -> &ConnectionController {
        &self.controller
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Session of the open transport handle, if any.
    pub fn live_session(&self) -> Option<SessionId> {
        self.live.as_ref().map(|(session, _)| *session)
    }

    /// Feed one event to the controller and apply the resulting effects.
    pub fn dispatch(&mut self, event: ControllerEvent, view: &mut dyn BattleView) {
        trace!(event = event.name(), "Dispatching controller event");
        let effects = self.controller.handle(event);
        for effect in effects {
            self.apply(effect, view);
        }
    }

    /// Close the transport and drop any pending retry.
    pub fn shutdown(&mut self) {
        self.retries.abort_pending();
        if let Some((session, mut handle)) = self.live.take() {
            debug!(%session, "Closing stream on shutdown");
            handle.close();
        }
    }

    fn apply(&mut self, effect: Effect, view: &mut dyn BattleView) {
        match effect {
            Effect::Open { session, room } => self.open(session, &room),
            Effect::Close { session } => self.close(session),
            Effect::ScheduleRetry { ticket, delay } => self.retries.schedule(ticket, delay),
            Effect::CancelRetry { ticket } => self.retries.cancel(ticket),
            Effect::ResetLog { placeholder } => view.reset_log(&placeholder),
            Effect::ClearSummary => view.clear_summary(),
            Effect::AppendLine(line) => view.append_line(line),
            Effect::ScrollLogToEnd => view.scroll_log_to_end(),
            Effect::ReplaceSummary(markup) => view.replace_summary(&markup),
            Effect::SetAffordance(affordance) => view.set_affordance(affordance),
            Effect::ClearRoomInput => view.clear_room_input(),
            Effect::FocusRoomInput => view.focus_room_input(),
            Effect::Alert(message) => view.alert(&message),
        }
    }

    fn open(&mut self, session: SessionId, room: &str) {
        // At most one live handle, whatever the effect order
        if let Some((previous, mut handle)) = self.live.take() {
            debug!(%previous, "Closing superseded stream");
            handle.close();
        }

        let url = self.endpoint.url_for(room);
        let sink = TransportSink::new(session, self.events_tx.clone());
        let handle = self.transport.open(&url, sink);
        self.live = Some((session, handle));
    }

    fn close(&mut self, session: SessionId) {
        match self.live.take() {
            Some((live, mut handle)) if live == session => handle.close(),
            other => {
                debug!(%session, "Close requested for a stream that is not live");
                self.live = other;
            }
        }
    }
}

impl<T: EventTransport> Drop for SessionDriver<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockTransport, RecordingView};
    use crate::controller::{Affordance, LineKind};

    fn driver() -> (
        SessionDriver<MockTransport>,
        MockTransport,
        mpsc::UnboundedReceiver<ControllerEvent>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let transport = MockTransport::new();
        let endpoint = Endpoint::from_origin("http://localhost:8080").unwrap();
        let driver = SessionDriver::new(
            ConnectionController::default(),
            endpoint,
            transport.clone(),
            tx,
        );
        (driver, transport, rx)
    }

    #[tokio::test]
    async fn test_submit_dials_encoded_url() {
        let (mut driver, transport, _rx) = driver();
        let mut view = RecordingView::new();

        driver.dispatch(ControllerEvent::Submit { room: "a b".into() }, &mut view);

        assert_eq!(
            transport.opened_urls(),
            vec!["http://localhost:42069/connect?roomid=a%20b"]
        );
        assert_eq!(driver.live_session(), Some(SessionId::new(1)));
        assert_eq!(view.last_affordance(), Some(Affordance::Connecting));
    }

    #[tokio::test]
    async fn test_resubmit_keeps_one_live_handle() {
        let (mut driver, transport, _rx) = driver();
        let mut view = RecordingView::new();

        driver.dispatch(ControllerEvent::Submit { room: "abc".into() }, &mut view);
        driver.dispatch(ControllerEvent::Submit { room: "def".into() }, &mut view);

        assert_eq!(transport.open_count(), 2);
        assert_eq!(transport.live_count(), 1);
    }

    #[tokio::test]
    async fn test_callbacks_round_trip_through_channel() {
        let (mut driver, transport, mut rx) = driver();
        let mut view = RecordingView::new();

        driver.dispatch(ControllerEvent::Submit { room: "abc".into() }, &mut view);
        transport.simulate_open();
        transport.simulate_message("Turn 1");

        while let Ok(event) = rx.try_recv() {
            driver.dispatch(event, &mut view);
        }

        assert_eq!(view.texts_of(LineKind::Event), vec!["Turn 1"]);
        assert_eq!(view.last_affordance(), Some(Affordance::Connected));
    }

    #[tokio::test]
    async fn test_shutdown_closes_stream() {
        let (mut driver, transport, _rx) = driver();
        let mut view = RecordingView::new();

        driver.dispatch(ControllerEvent::Submit { room: "abc".into() }, &mut view);
        driver.shutdown();
        assert_eq!(transport.live_count(), 0);
        assert_eq!(driver.live_session(), None);
    }
}
