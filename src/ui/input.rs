/// Input state tracker.
///
/// Collects the keyboard events that arrived since the last frame:
///   - Printable characters (fed to the answer field)
///   - Edge-triggered key presses (Enter, Tab, arrows, Backspace, ESC)
///   - Ctrl+C for an unconditional quit
///
/// A form UI only cares about discrete presses, so Release events are
/// ignored and there is no held-key state to expire.

use std::time::Duration;

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub struct InputState {
    /// Printable characters typed this frame, in arrival order.
    typed: Vec<char>,
    /// Every key pressed this frame (characters included, so menu
    /// screens can match on letter keys).
    pressed: Vec<KeyCode>,
    raw_events: Vec<KeyEvent>,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            typed: Vec::with_capacity(8),
            pressed: Vec::with_capacity(8),
            raw_events: Vec::with_capacity(8),
        }
    }

    /// Drain all pending terminal events. Call once per frame.
    pub fn drain_events(&mut self) {
        self.typed.clear();
        self.pressed.clear();
        self.raw_events.clear();

        while poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    self.raw_events.push(key);
                    self.pressed.push(key.code);
                    if let KeyCode::Char(c) = key.code {
                        if !key.modifiers.contains(KeyModifiers::CONTROL) {
                            self.typed.push(c);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Characters to append to the answer field this frame.
    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    pub fn any_pressed(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.was_pressed(*c))
    }

    /// Check if any raw event this frame has Ctrl+C
    pub fn ctrl_c_pressed(&self) -> bool {
        self.raw_events.iter().any(|k| {
            k.modifiers.contains(KeyModifiers::CONTROL)
                && (k.code == KeyCode::Char('c') || k.code == KeyCode::Char('C'))
        })
    }
}
