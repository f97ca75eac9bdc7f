//! Which mode changes are allowed, and what happens after one is accepted.

use commands::{Key, Mode};

/// What the controller does after entering a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Run the mode's setup hook and wait for input.
    Setup,
    /// Run setup, then dispatch the mode's action with the current buffer.
    Action,
    /// Run setup, then fire modes with nothing to type right away.
    Postprocess,
    /// Change mode without touching focus or shortcuts.
    None,
}

/// Why a requested transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("already in {0}")]
    SameMode(Mode),
    #[error("{to} cannot be entered from {from}")]
    NotReachable { from: Mode, to: Mode },
    #[error("{to} needs {required} open tab(s), {open} open")]
    NotEnoughTabs {
        to: Mode,
        required: usize,
        open: usize,
    },
}

/// Inputs to the validity check besides the two modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionContext {
    /// Key that caused the request, if any.
    pub origin: Option<Key>,
    pub buffer_empty: bool,
    pub tab_count: usize,
}

/// Decide whether `current -> next` is allowed.
///
/// Leaving COMMAND is always allowed, as is re-entering COMMAND with
/// Backspace from a mode whose buffer is empty. IDLE and OPEN_FILE can be
/// reached from anywhere; COMMAND only from IDLE. Every other mode must be
/// entered from IDLE and needs `next.min_tabs()` open tabs.
pub fn check(current: Mode, next: Mode, cx: TransitionContext) -> Result<(), Rejected> {
    if current == next {
        return Err(Rejected::SameMode(next));
    }
    if current == Mode::Command {
        return Ok(());
    }
    if next == Mode::Command && cx.origin == Some(Key::Backspace) && cx.buffer_empty {
        return Ok(());
    }

    match next {
        Mode::Idle | Mode::OpenFile => Ok(()),
        Mode::Command if current == Mode::Idle => Ok(()),
        _ if current != Mode::Idle => Err(Rejected::NotReachable {
            from: current,
            to: next,
        }),
        _ => {
            let required = next.min_tabs();
            if cx.tab_count < required {
                Err(Rejected::NotEnoughTabs {
                    to: next,
                    required,
                    open: cx.tab_count,
                })
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn cx(tab_count: usize) -> TransitionContext {
        TransitionContext {
            origin: None,
            buffer_empty: true,
            tab_count,
        }
    }

    // Written independently of `check` so the table is compared against a
    // second statement of the rules.
    fn expected(current: Mode, next: Mode, cx: TransitionContext) -> bool {
        if current == next {
            return false;
        }
        let backspace_bypass =
            next == Mode::Command && cx.origin == Some(Key::Backspace) && cx.buffer_empty;
        if current == Mode::Command || backspace_bypass {
            return true;
        }
        let from_idle = current == Mode::Idle;
        match next {
            Mode::Idle | Mode::OpenFile => true,
            Mode::Command => from_idle,
            Mode::Quit | Mode::ToggleChrome | Mode::OpenTab => from_idle,
            Mode::MoveCursorLeft | Mode::MoveCursorRight | Mode::MoveTab => {
                from_idle && cx.tab_count >= 2
            }
            _ => from_idle && cx.tab_count >= 1,
        }
    }

    #[test]
    fn every_pair_matches_the_rules() {
        let origins = [None, Some(Key::Backspace), Some(Key::Char('c'))];
        for current in Mode::ALL {
            for next in Mode::ALL {
                for tab_count in 0..=3 {
                    for origin in origins {
                        for buffer_empty in [true, false] {
                            let cx = TransitionContext {
                                origin,
                                buffer_empty,
                                tab_count,
                            };
                            assert_eq!(
                                check(current, next, cx).is_ok(),
                                expected(current, next, cx),
                                "{current} -> {next} with {cx:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test_case(Mode::Idle, Mode::CloseTab, 3, true ; "close from idle")]
    #[test_case(Mode::Idle, Mode::CloseTab, 0, false ; "close needs a tab")]
    #[test_case(Mode::Idle, Mode::MoveTab, 1, false ; "move needs two tabs")]
    #[test_case(Mode::Idle, Mode::MoveTab, 2, true ; "move with two tabs")]
    #[test_case(Mode::Idle, Mode::OpenTab, 0, true ; "open needs nothing")]
    #[test_case(Mode::Idle, Mode::Quit, 0, true ; "quit from idle")]
    #[test_case(Mode::Command, Mode::MoveTab, 0, true ; "command bypasses tab counts")]
    #[test_case(Mode::CloseTab, Mode::Idle, 3, true ; "idle from anywhere")]
    #[test_case(Mode::Find, Mode::OpenFile, 1, true ; "open file from anywhere")]
    #[test_case(Mode::CloseTab, Mode::RefreshTab, 3, false ; "no mode to mode jumps")]
    #[test_case(Mode::Find, Mode::Command, 1, true ; "backspace reenters command")]
    #[test_case(Mode::Idle, Mode::Idle, 1, false ; "same mode")]
    fn table(current: Mode, next: Mode, tabs: usize, allowed: bool) {
        let cx = TransitionContext {
            origin: Some(Key::Backspace),
            buffer_empty: true,
            tab_count: tabs,
        };
        assert_eq!(check(current, next, cx).is_ok(), allowed);
    }

    #[test]
    fn command_needs_backspace_and_empty_buffer() {
        let mut context = cx(1);
        assert_eq!(
            check(Mode::CloseTab, Mode::Command, context),
            Err(Rejected::NotReachable {
                from: Mode::CloseTab,
                to: Mode::Command
            })
        );
        context.origin = Some(Key::Backspace);
        context.buffer_empty = false;
        assert!(check(Mode::CloseTab, Mode::Command, context).is_err());
        context.buffer_empty = true;
        assert_eq!(check(Mode::CloseTab, Mode::Command, context), Ok(()));
    }

    #[test]
    fn same_mode_is_rejected_every_time() {
        for _ in 0..2 {
            assert_eq!(
                check(Mode::Find, Mode::Find, cx(1)),
                Err(Rejected::SameMode(Mode::Find))
            );
        }
    }

    #[test]
    fn rejection_messages() {
        let err = check(Mode::Idle, Mode::MoveTab, cx(1)).unwrap_err();
        assert_eq!(err.to_string(), "MOVE_TAB needs 2 open tab(s), 1 open");
        let err = check(Mode::Find, Mode::Find, cx(1)).unwrap_err();
        assert_eq!(err.to_string(), "already in FIND");
    }
}
