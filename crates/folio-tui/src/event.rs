//! Semantic application events: crossterm events mapped to a widget-agnostic
//! vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every
//! [`crossterm::event::Event`] and match on the returned [`AppEvent`].
//!
//! # Default keys
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `h`               | `Nav(Left)`                |
//! | `→` / `l`               | `Nav(Right)`               |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | `Esc`                   | `Escape`                   |
//! | left mouse button       | `Click(col, row)`          |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! The search-focus, command, theme and help keys arrive as `Char` and are
//! matched by the app shell against the `[keybindings]` config section.
//!
//! ## Insert mode
//!
//! When a text input (search bar, command bar) is focused, the event loop
//! calls [`to_app_event_insert`] instead. hjkl and `q` then type their
//! literal characters; arrow keys still produce `Nav`.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus out of the current widget (Tab).
    FocusNext,
    /// Arrow key, or hjkl outside insert mode.
    Nav(Direction),
    /// A printable character.
    Char(char),
    Backspace,
    Enter,
    Escape,
    /// Left button pressed at (column, row).
    Click(u16, u16),
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal mode).
///
/// Returns `None` for events that carry no meaning for the application
/// (key releases, mouse moves, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        Event::Mouse(m) => map_mouse(m.kind, m.column, m.row),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for insert mode.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        Event::Mouse(m) => map_mouse(m.kind, m.column, m.row),
        _ => None,
    }
}

fn map_mouse(kind: MouseEventKind, column: u16, row: u16) -> Option<AppEvent> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click(column, row)),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Right)),

        // Shifted characters too (`?`, `:` on most layouts)
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> Event {
        key(code, KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE })
    }

    #[test]
    fn quit_keys() {
        assert_eq!(to_app_event(press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(to_app_event(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
    }

    #[test]
    fn tab_moves_focus_on() {
        assert_eq!(to_app_event(press(KeyCode::Tab)), Some(AppEvent::FocusNext));
        assert_eq!(to_app_event_insert(press(KeyCode::Tab)), Some(AppEvent::FocusNext));
    }

    #[test]
    fn arrows_and_hjkl() {
        assert_eq!(to_app_event(press(KeyCode::Up)), Some(AppEvent::Nav(Direction::Up)));
        assert_eq!(to_app_event(press(KeyCode::Char('j'))), Some(AppEvent::Nav(Direction::Down)));
        assert_eq!(to_app_event(press(KeyCode::Char('h'))), Some(AppEvent::Nav(Direction::Left)));
        assert_eq!(to_app_event(press(KeyCode::Right)), Some(AppEvent::Nav(Direction::Right)));
    }

    #[test]
    fn shifted_chars_are_forwarded() {
        assert_eq!(
            to_app_event(key(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(AppEvent::Char('?'))
        );
        assert_eq!(to_app_event(press(KeyCode::Char('/'))), Some(AppEvent::Char('/')));
    }

    #[test]
    fn backspace_enter_escape() {
        assert_eq!(to_app_event(press(KeyCode::Backspace)), Some(AppEvent::Backspace));
        assert_eq!(to_app_event(press(KeyCode::Enter)), Some(AppEvent::Enter));
        assert_eq!(to_app_event(press(KeyCode::Esc)), Some(AppEvent::Escape));
    }

    #[test]
    fn left_click_only() {
        assert_eq!(
            to_app_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Some(AppEvent::Click(4, 7))
        );
        assert_eq!(to_app_event(mouse(MouseEventKind::Moved, 4, 7)), None);
        assert_eq!(to_app_event(mouse(MouseEventKind::Down(MouseButton::Right), 4, 7)), None);
    }

    #[test]
    fn resize_event() {
        assert_eq!(to_app_event(Event::Resize(120, 40)), Some(AppEvent::Resize(120, 40)));
    }

    #[test]
    fn unbound_key_returns_none() {
        assert_eq!(to_app_event(press(KeyCode::F(5))), None);
    }

    // ── Insert mode ────────────────────────────────────────────────────────

    #[test]
    fn insert_mode_nav_letters_are_chars() {
        for ch in ['h', 'j', 'k', 'l', 'q'] {
            assert_eq!(
                to_app_event_insert(press(KeyCode::Char(ch))),
                Some(AppEvent::Char(ch)),
                "insert mode: '{ch}' should type, not navigate"
            );
        }
    }

    #[test]
    fn insert_mode_arrows_still_navigate() {
        assert_eq!(to_app_event_insert(press(KeyCode::Down)), Some(AppEvent::Nav(Direction::Down)));
        assert_eq!(to_app_event_insert(press(KeyCode::Left)), Some(AppEvent::Nav(Direction::Left)));
    }

    #[test]
    fn insert_mode_ctrl_c_still_quits() {
        assert_eq!(to_app_event_insert(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
    }
}
