//! Application state: the view, the session driver and the event routing.
//!
//! [`App`] is the single owner of controller state. The main loop feeds it
//! two kinds of input, one at a time:
//! - terminal events ([`App::handle_terminal_event`])
//! - controller events posted by transports and retry timers
//!   ([`App::handle_controller_event`])

mod handlers;

use tokio::sync::mpsc;
use tracing::info;

use crate::config::ClientConfig;
use crate::controller::{ConnectionController, ControllerEvent};
use crate::error::ClientResult;
use crate::runtime::SessionDriver;
use crate::traits::EventTransport;
use crate::ui::StatusInfo;
use crate::view_state::ViewState;

/// Lines moved per PageUp/PageDown.
pub const PAGE_SCROLL_LINES: usize = 10;

/// Lines moved per mouse wheel notch.
pub const WHEEL_SCROLL_LINES: usize = 3;

pub struct App<T: EventTransport> {
    pub view: ViewState,
    driver: SessionDriver<T>,
    /// Receiver for transport callbacks and retry timers, taken by the main loop
    events_rx: Option<mpsc::UnboundedReceiver<ControllerEvent>>,
    pub should_quit: bool,
    /// Set when something visible changed since the last draw
    pub needs_redraw: bool,
    initial_room: Option<String>,
}

impl<T: EventTransport> App<T> {
    pub fn new(config: &ClientConfig, transport: T) -> ClientResult<Self> {
        config.validate()?;
        let endpoint = config.endpoint()?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        info!(
            origin = config.origin.as_str(),
            stream_origin = endpoint.stream_origin(),
            max_reconnects = config.max_reconnects,
            "Client configured"
        );

        let driver = SessionDriver::new(
            ConnectionController::new(config.policy()),
            endpoint,
            transport,
            events_tx,
        );

        let mut view = ViewState::new();
        if let Some(room) = &config.initial_room {
            view = view.with_room(room);
        }

        Ok(Self {
            view,
            driver,
            events_rx: Some(events_rx),
            should_quit: false,
            needs_redraw: true,
            initial_room: config.initial_room.clone(),
        })
    }

    pub fn driver(&self) -> &SessionDriver<T> {
        &self.driver
    }

    /// Hand the controller event receiver to the main loop (once).
    pub fn take_event_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<ControllerEvent>> {
        self.events_rx.take()
    }

    /// Submit the room given on the command line, if any.
    pub fn connect_initial_room(&mut self) {
        if let Some(room) = self.initial_room.take() {
            self.submit_room(room);
        }
    }

    /// Submit the room input.
    pub fn submit(&mut self) {
        if !self.view.form.is_enabled() {
            return;
        }
        let room = self.view.form.value().to_string();
        self.submit_room(room);
    }

    fn submit_room(&mut self, room: String) {
        self.handle_controller_event(ControllerEvent::Submit { room });
    }

    pub fn handle_controller_event(&mut self, event: ControllerEvent) {
        self.driver.dispatch(event, &mut self.view);
        self.mark_dirty();
    }

    /// Apply every controller event already queued. Returns how many ran.
    ///
    /// Only usable while the receiver has not been taken.
    pub fn drain_controller_events(&mut self) -> usize {
        let Some(mut rx) = self.events_rx.take() else {
            return 0;
        };
        let mut handled = 0;
        while let Ok(event) = rx.try_recv() {
            self.handle_controller_event(event);
            handled += 1;
        }
        self.events_rx = Some(rx);
        handled
    }

    pub fn status_info(&self) -> StatusInfo {
        let controller = self.driver.controller();
        StatusInfo {
            stream_origin: self.driver.endpoint().stream_origin().to_string(),
            phase: controller.phase(),
            room: controller.room().map(str::to_string),
            attempts: controller.reconnect_attempts(),
            max_attempts: controller.policy().max_attempts,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        info!("Quitting");
        self.driver.shutdown();
        self.should_quit = true;
    }
}
