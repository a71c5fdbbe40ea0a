//! Crossterm-backed input port.
//!
//! Each [`InputPort::refresh`] drains pending terminal events without
//! blocking and folds them into a [`HeldKeys`] table.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use crate::core::InputPort;
use crate::held::HeldKeys;
use crate::map::handle_key_event;
use crate::types::GameAction;

pub struct TerminalInput {
    held: HeldKeys,
    started: Instant,
    now_ms: u64,
    enhanced: bool,
    focus_reported: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            held: HeldKeys::new(),
            started: Instant::now(),
            now_ms: 0,
            enhanced: false,
            focus_reported: false,
        }
    }

    /// Ask the terminal for focus changes, and for release events where
    /// supported.
    ///
    /// Terminals that report releases don't need the release timeout.
    /// Losing focus releases every key.
    pub fn enter(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnableFocusChange)?;
        self.focus_reported = true;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.enhanced = true;
            self.held.set_release_timeout(None);
        }
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        if self.enhanced {
            execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            self.enhanced = false;
        }
        if self.focus_reported {
            execute!(io::stdout(), DisableFocusChange)?;
            self.focus_reported = false;
        }
        Ok(())
    }

    pub fn reports_releases(&self) -> bool {
        self.enhanced
    }

    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let Some(action) = handle_key_event(key) else {
                    return;
                };
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => self.held.press(action, self.now_ms),
                    KeyEventKind::Release => self.held.release(action),
                }
            }
            Event::FocusLost => self.held.release_all(),
            _ => {}
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for TerminalInput {
    fn is_held(&self, action: GameAction) -> bool {
        self.held.is_held_at(action, self.now_ms)
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.now_ms = self.started.elapsed().as_millis() as u64;
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.apply(event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    /// Input as configured on a terminal that reports key releases.
    fn with_releases() -> TerminalInput {
        let mut input = TerminalInput::new();
        input.held.set_release_timeout(None);
        input
    }

    #[test]
    fn press_and_repeat_hold_the_action() {
        let mut input = TerminalInput::new();
        input.now_ms = 100;
        input.apply(key(KeyCode::Char(' '), KeyEventKind::Press));
        assert!(input.is_held(GameAction::Flap));
        assert!(!input.is_held(GameAction::MoveLeft));

        // A repeat refreshes the hold past the first press's timeout.
        input.now_ms = 200;
        input.apply(key(KeyCode::Char(' '), KeyEventKind::Repeat));
        input.now_ms = 300;
        assert!(input.is_held(GameAction::Flap));
    }

    #[test]
    fn release_event_clears_the_action() {
        let mut input = with_releases();
        input.apply(key(KeyCode::Left, KeyEventKind::Press));
        input.apply(key(KeyCode::Right, KeyEventKind::Press));
        assert!(input.is_held(GameAction::MoveLeft));

        input.apply(key(KeyCode::Left, KeyEventKind::Release));
        assert!(!input.is_held(GameAction::MoveLeft));
        assert!(input.is_held(GameAction::MoveRight));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut input = with_releases();
        input.apply(key(KeyCode::Char('x'), KeyEventKind::Press));
        input.apply(key(KeyCode::Down, KeyEventKind::Press));
        assert!(GameAction::ALL.iter().all(|&a| !input.is_held(a)));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut input = with_releases();
        input.apply(key(KeyCode::Char('w'), KeyEventKind::Press));
        input.apply(key(KeyCode::Char('d'), KeyEventKind::Press));

        // Without release events or a timeout, keys stay down until focus goes.
        input.now_ms = 1_000_000;
        assert!(input.is_held(GameAction::Flap));

        input.apply(Event::FocusLost);
        assert!(GameAction::ALL.iter().all(|&a| !input.is_held(a)));
    }

    #[test]
    fn other_events_leave_state_alone() {
        let mut input = with_releases();
        input.apply(key(KeyCode::Char('q'), KeyEventKind::Press));
        input.apply(Event::FocusGained);
        input.apply(Event::Resize(80, 24));
        assert!(input.is_held(GameAction::Quit));
    }
}
