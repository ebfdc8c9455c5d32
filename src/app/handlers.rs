//! Keyboard, paste and mouse handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use super::{App, PAGE_SCROLL_LINES, WHEEL_SCROLL_LINES};
use crate::traits::EventTransport;

impl<T: EventTransport> App<T> {
    pub fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.scroll_up(WHEEL_SCROLL_LINES),
                MouseEventKind::ScrollDown => self.scroll_down(WHEEL_SCROLL_LINES),
                _ => {}
            },
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        // An alert takes the keyboard until dismissed
        if self.view.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.view.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::PageUp => self.scroll_up(PAGE_SCROLL_LINES),
            KeyCode::PageDown => self.scroll_down(PAGE_SCROLL_LINES),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::Home if ctrl => self.view.scroll.scroll_to_top(),
            KeyCode::End if ctrl => self.view.scroll.scroll_to_end(),
            KeyCode::Home => self.view.form.move_home(),
            KeyCode::End => self.view.form.move_end(),
            KeyCode::Left => self.view.form.move_left(),
            KeyCode::Right => self.view.form.move_right(),
            KeyCode::Backspace => {
                self.view.form.backspace();
            }
            KeyCode::Delete => {
                self.view.form.delete();
            }
            KeyCode::Char('u') if ctrl => self.view.form.clear_if_enabled(),
            KeyCode::Char(c) if !ctrl => {
                self.view.form.insert_char(c);
            }
            _ => {}
        }
    }

    /// Pasted text goes into the room input, newlines dropped.
    pub fn handle_paste(&mut self, text: &str) {
        if self.view.has_alert() {
            return;
        }
        for c in text.chars().filter(|c| !c.is_control()) {
            self.view.form.insert_char(c);
        }
        self.mark_dirty();
    }

    fn scroll_up(&mut self, lines: usize) {
        self.view.scroll.scroll_up(lines);
        self.mark_dirty();
    }

    fn scroll_down(&mut self, lines: usize) {
        self.view.scroll.scroll_down(lines);
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockTransport;
    use crate::config::ClientConfig;
    use crate::controller::{Affordance, Phase};

    fn app() -> (App<MockTransport>, MockTransport) {
        let transport = MockTransport::new();
        let app = App::new(&ClientConfig::default(), transport.clone()).unwrap();
        (app, transport)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text<T: EventTransport>(app: &mut App<T>, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_submits_typed_room() {
        let (mut app, transport) = app();
        type_text(&mut app, "abc");
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(
            transport.opened_urls(),
            vec!["http://localhost:42069/connect?roomid=abc"]
        );
        assert_eq!(app.view.affordance(), Affordance::Connecting);
        assert_eq!(app.status_info().phase, Phase::Connecting);
    }

    #[test]
    fn test_enter_ignored_while_input_disabled() {
        let (mut app, transport) = app();
        type_text(&mut app, "abc");
        app.handle_key_event(key(KeyCode::Enter));
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(transport.open_count(), 1);
    }

    #[test]
    fn test_empty_submit_alerts_and_esc_dismisses() {
        let (mut app, transport) = app();
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.view.alert.as_deref(), Some("Please enter a valid room id"));
        assert_eq!(transport.open_count(), 0);

        // Typing is swallowed while the alert is up
        app.handle_key_event(key(KeyCode::Char('x')));
        assert_eq!(app.view.form.value(), "");

        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.view.has_alert());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (mut app, _transport) = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_paste_fills_input() {
        let (mut app, _transport) = app();
        app.handle_terminal_event(Event::Paste("room-42\n".into()));
        assert_eq!(app.view.form.value(), "room-42");
    }

    #[test]
    fn test_page_keys_scroll_log() {
        let (mut app, _transport) = app();
        app.view.scroll.set_max_scroll(30);
        app.handle_key_event(key(KeyCode::PageUp));
        assert_eq!(app.view.scroll.offset, 10);
        app.handle_key_event(KeyEvent::new(KeyCode::End, KeyModifiers::CONTROL));
        assert!(app.view.scroll.is_at_bottom());
    }

    #[tokio::test]
    async fn test_transport_callbacks_drained() {
        let (mut app, transport) = app();
        type_text(&mut app, "abc");
        app.handle_key_event(key(KeyCode::Enter));
        transport.simulate_open();
        transport.simulate_message("|win| p1");

        assert_eq!(app.drain_controller_events(), 2);
        assert_eq!(app.view.affordance(), Affordance::Finished);
        assert_eq!(app.view.form.value(), "");
    }

    #[test]
    fn test_initial_room_prefilled_and_connected() {
        let transport = MockTransport::new();
        let config = ClientConfig::default().with_initial_room("xyz");
        let mut app = App::new(&config, transport.clone()).unwrap();
        assert_eq!(app.view.form.value(), "xyz");

        app.connect_initial_room();
        app.connect_initial_room();
        assert_eq!(transport.open_count(), 1);
    }

    #[test]
    fn test_invalid_config_is_reported_with_hint() {
        let config = ClientConfig::default().with_origin("localhost");
        let err = App::new(&config, MockTransport::new()).err().unwrap();
        assert_eq!(err.category(), crate::error::ErrorCategory::Configuration);
        assert!(!err.is_retryable());
        assert!(err.user_message().starts_with("Invalid origin 'localhost'"));
        assert!(err.user_message().ends_with("Run with --help to see the accepted options"));
    }
}
