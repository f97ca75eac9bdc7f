//! Key presses and releases.
//!
//! Enter fires, Escape cancels, and Backspace works on release. Everything
//! else depends on the mode: IDLE looks keys up as shortcuts, COMMAND edits
//! the `:` line, movement modes read digits and a direction, and the
//! remaining modes collect free text.

use actions::{TabActuator, WindowActuator};
use commands::{Key, KeyEvent, Mode};

use super::Controller;
use crate::offset::OffsetKind;
use crate::resolver;
use crate::transition::Policy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    Press,
    Release,
}

/// Whether the controller used a key. Ignored keys belong to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

impl KeyOutcome {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

impl<W: WindowActuator, T: TabActuator> Controller<W, T> {
    /// Single entry point for key events from the front end.
    pub fn process_key(&mut self, event: KeyEvent, phase: KeyPhase) -> KeyOutcome {
        let outcome = match phase {
            KeyPhase::Press => self.press(event),
            KeyPhase::Release => self.release(event),
        };
        if outcome == KeyOutcome::Ignored {
            tracing::trace!(key = %event.key, ?phase, mode = %self.mode, "Key ignored");
        }
        outcome
    }

    /// Press and release, as a front end without separate events reports it.
    pub fn tap(&mut self, event: KeyEvent) -> KeyOutcome {
        let pressed = self.process_key(event, KeyPhase::Press);
        let released = self.process_key(event, KeyPhase::Release);
        if pressed.is_consumed() || released.is_consumed() {
            KeyOutcome::Consumed
        } else {
            KeyOutcome::Ignored
        }
    }

    fn press(&mut self, event: KeyEvent) -> KeyOutcome {
        match event.key {
            Key::Enter => return self.press_enter(),
            Key::Escape => {
                if self.mode == Mode::Idle {
                    return KeyOutcome::Ignored;
                }
                tracing::debug!(mode = %self.mode, "Cancelled");
                self.return_to_idle();
                return KeyOutcome::Consumed;
            }
            // Handled on release.
            Key::Backspace => {
                return if self.mode == Mode::Idle {
                    KeyOutcome::Ignored
                } else {
                    KeyOutcome::Consumed
                };
            }
            _ => {}
        }

        match self.mode {
            Mode::Idle => self.press_idle(event),
            Mode::Command => self.press_command(event),
            mode if mode.is_movement() => self.press_movement(event),
            _ => self.press_text(event),
        }
    }

    fn press_enter(&mut self) -> KeyOutcome {
        match self.mode {
            Mode::Idle => KeyOutcome::Ignored,
            Mode::Command => {
                self.run_command_line();
                KeyOutcome::Consumed
            }
            _ => {
                self.complete();
                KeyOutcome::Consumed
            }
        }
    }

    fn press_idle(&mut self, event: KeyEvent) -> KeyOutcome {
        if !self.shortcuts_enabled {
            return KeyOutcome::Ignored;
        }
        if event.is_char(self.command_key) {
            let _ = self.request_transition(Mode::Command, Policy::Setup, Some(event.key));
            return KeyOutcome::Consumed;
        }
        let Some(mode) = self.shortcuts.lookup(&event).map(|record| record.mode()) else {
            return KeyOutcome::Ignored;
        };
        // A rejected shortcut is still swallowed.
        let _ = self.request_transition(mode, Policy::Postprocess, Some(event.key));
        KeyOutcome::Consumed
    }

    fn press_command(&mut self, event: KeyEvent) -> KeyOutcome {
        if event.is_char(' ') {
            let matched = self
                .table
                .find_by_long_command(self.buffer.as_str())
                .map(|record| record.mode());
            if let Some(mode) = matched {
                if self
                    .transition_with(mode, Policy::Postprocess, Some(event.key), Some(String::new()))
                    .is_ok()
                {
                    return KeyOutcome::Consumed;
                }
            }
        }
        match event.text() {
            Some(c) => {
                self.buffer.append(c);
                self.publish_status();
                KeyOutcome::Consumed
            }
            None => KeyOutcome::Ignored,
        }
    }

    fn press_movement(&mut self, event: KeyEvent) -> KeyOutcome {
        let Some(c) = event.text() else {
            return KeyOutcome::Ignored;
        };
        if c.is_ascii_digit() {
            if self.offset == OffsetKind::None {
                self.offset = OffsetKind::Absolute;
            }
            self.buffer.append(c);
        } else if self.offset == OffsetKind::None && self.buffer.is_empty() {
            match OffsetKind::from_direction_key(c) {
                Some(kind) => self.offset = kind,
                None => tracing::trace!(%c, "Not a digit or direction"),
            }
        } else {
            tracing::trace!(%c, "Not a digit");
        }
        self.publish_status();
        KeyOutcome::Consumed
    }

    fn press_text(&mut self, event: KeyEvent) -> KeyOutcome {
        match event.text() {
            Some(c) => {
                self.buffer.append(c);
                self.publish_status();
                KeyOutcome::Consumed
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Enter on the `:` line: `<long-command>[ <argument>]`.
    fn run_command_line(&mut self) {
        let text = self.buffer.as_str().to_string();
        let resolved = resolver::resolve(&self.table, &text)
            .map(|resolution| (resolution.record.mode(), resolution.argument));
        match resolved {
            Some((mode, argument)) => {
                let policy = if mode.has_action() {
                    Policy::Action
                } else {
                    Policy::Setup
                };
                if self
                    .transition_with(mode, policy, None, Some(argument))
                    .is_err()
                {
                    self.return_to_idle();
                }
            }
            None => {
                if !text.is_empty() {
                    let command = util::truncate_for_log(&text, super::LOG_TEXT_LIMIT);
                    tracing::warn!(%command, "Unknown command");
                }
                self.return_to_idle();
            }
        }
    }

    fn release(&mut self, event: KeyEvent) -> KeyOutcome {
        if event.key != Key::Backspace || self.mode == Mode::Idle {
            return KeyOutcome::Ignored;
        }

        if self.buffer.remove_last() {
            if self.buffer.is_empty() && self.offset == OffsetKind::Absolute {
                self.offset = OffsetKind::initial(self.mode);
            }
            self.publish_status();
            return KeyOutcome::Consumed;
        }

        let initial = OffsetKind::initial(self.mode);
        if self.mode.is_movement() && self.offset != initial {
            self.offset = initial;
            self.publish_status();
        } else if self.mode == Mode::Command {
            self.return_to_idle();
        } else {
            let _ = self.request_transition(Mode::Command, Policy::Setup, Some(Key::Backspace));
        }
        KeyOutcome::Consumed
    }
}
