use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::warn;

/// TUI-specific input events. Mode-independent: what a key *means* is
/// decided by the event loop (table vs bulk-select popup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    ForceQuit, // Ctrl+C always quits
    Submit,
    Escape,
    InputChar(char),
    Backspace,
    CursorUp,
    CursorDown,
    PagePrev,
    PageNext,
    PageFirst,
    PageLast,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    let raw = match event::read() {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Event read failed: {}", e);
            return None;
        }
    };
    match raw {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => map_mouse(mouse_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Only a left press selects; the wheel moves the cursor.
pub fn map_mouse(mouse_event: MouseEvent) -> Option<TuiEvent> {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
        }
        MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
        MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
        _ => None,
    }
}

/// Translate one key press. Releases are dropped.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) | (_, KeyCode::PageUp) => Some(TuiEvent::PagePrev),
        (_, KeyCode::Right) | (_, KeyCode::PageDown) => Some(TuiEvent::PageNext),
        (_, KeyCode::Home) => Some(TuiEvent::PageFirst),
        (_, KeyCode::End) => Some(TuiEvent::PageLast),
        _ => None,
    }
}
