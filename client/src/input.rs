//! Keyboard input handling
//!
//! Terminals that speak the kitty keyboard protocol report key releases, so a
//! key is held exactly between press and release. Everywhere else only press
//! and auto-repeat events arrive, and a key counts as held until no repeat has
//! been seen for a short window.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// How long a first press counts as held without a repeat
const PRESS_HOLD: Duration = Duration::from_millis(250);
/// How long an auto-repeat extends the hold
const REPEAT_HOLD: Duration = Duration::from_millis(100);

/// What a key means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    Quit,
}

/// Map a key to its game action
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(KeyAction::Quit),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyAction::Quit),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(KeyAction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyAction::Down),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    held_until: Option<Instant>,
    pressed: bool,
}

impl HeldKey {
    fn press(&mut self, now: Instant) {
        let window = if self.is_held(now, false) {
            REPEAT_HOLD
        } else {
            PRESS_HOLD
        };
        self.pressed = true;
        self.held_until = Some(now + window);
    }

    fn release(&mut self) {
        self.pressed = false;
        self.held_until = None;
    }

    fn is_held(&self, now: Instant, reports_release: bool) -> bool {
        if reports_release {
            self.pressed
        } else {
            self.held_until.is_some_and(|until| now < until)
        }
    }
}

/// Up/down key state for the player paddle
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    up: HeldKey,
    down: HeldKey,
    reports_release: bool,
}

impl KeyState {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            ..Self::default()
        }
    }

    /// Apply a key event. Returns the action it mapped to, if any.
    pub fn handle_key_event(&mut self, event: &KeyEvent, now: Instant) -> Option<KeyAction> {
        let action = map_key(event.code, event.modifiers)?;

        match (action, event.kind) {
            (KeyAction::Up, KeyEventKind::Release) => self.up.release(),
            (KeyAction::Down, KeyEventKind::Release) => self.down.release(),
            (KeyAction::Up, _) => {
                self.down.release();
                self.up.press(now);
            }
            (KeyAction::Down, _) => {
                self.up.release();
                self.down.press(now);
            }
            (KeyAction::Quit, KeyEventKind::Release) => return None,
            (KeyAction::Quit, _) => {}
        }

        Some(action)
    }

    /// Paddle direction: -1 up, 1 down, 0 when idle or both held
    pub fn direction(&self, now: Instant) -> i8 {
        let up = self.up.is_held(now, self.reports_release);
        let down = self.down.is_held(now, self.reports_release);
        match (up, down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    pub fn clear(&mut self) {
        self.up.release();
        self.down.release();
    }
}
