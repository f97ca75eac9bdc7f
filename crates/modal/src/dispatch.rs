//! Turning a completed mode and its typed argument into an [`Action`].
//!
//! Planning is pure: it reads the tab strip's size and position and the
//! remembered find text, and either produces the action to run, decides
//! there is nothing to do, or reports why the argument is unusable. The
//! controller owns the actuators and carries the action out.

use actions::{Action, Direction, FindRequest, OpenTarget};
use commands::Mode;

use crate::offset::{wrap_index, OffsetKind};

/// Tab strip size and position at the moment of dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub count: usize,
    pub current: usize,
}

/// Toggles applied to every find request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    pub case_sensitive: bool,
    pub whole_word: bool,
}

/// Find options plus the text of the last find, for FIND_NEXT/FIND_PREV.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FindState {
    pub options: FindOptions,
    pub last_text: Option<String>,
}

impl FindState {
    fn request(&self, text: String, direction: Direction) -> FindRequest {
        FindRequest {
            text,
            direction,
            case_sensitive: self.options.case_sensitive,
            whole_word: self.options.whole_word,
        }
    }
}

/// Why a mode's argument could not be turned into an action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("{mode} expects a number, got {text:?}")]
    ArgumentParse { mode: Mode, text: String },
    #[error("tab {index} is out of range ({count} open)")]
    IndexOutOfRange { index: i64, count: usize },
    #[error("nothing to find")]
    NothingToFind,
    #[error("{mode} needs {required} open tab(s), {open} open")]
    NotEnoughTabs {
        mode: Mode,
        required: usize,
        open: usize,
    },
    #[error("{0} has no action")]
    NoAction(Mode),
}

impl DispatchError {
    /// Errors that leave the mode active so the user can fix the argument.
    pub fn keeps_mode(&self) -> bool {
        matches!(self, Self::ArgumentParse { .. })
    }
}

/// Plan the action for `mode` with argument `arg`.
///
/// `Ok(None)` means the request is valid but changes nothing (an empty
/// search, a move onto the tab that is already there).
pub fn plan(
    mode: Mode,
    arg: &str,
    offset: OffsetKind,
    tabs: TabState,
    find: &FindState,
) -> Result<Option<Action>, DispatchError> {
    let required = mode.min_tabs();
    if tabs.count < required {
        return Err(DispatchError::NotEnoughTabs {
            mode,
            required,
            open: tabs.count,
        });
    }

    let action = match mode {
        Mode::Idle | Mode::Command => return Err(DispatchError::NoAction(mode)),
        Mode::Quit => Action::Quit,
        Mode::ToggleChrome => Action::ToggleChrome,
        Mode::OpenFile => Action::OpenFile(arg.trim().to_string()),
        Mode::OpenTab => Action::OpenTab(OpenTarget::classify(arg)),
        Mode::CloseTab => Action::CloseTab(index_or_current(mode, arg, tabs)?),
        Mode::RefreshTab => Action::RefreshTab(index_or_current(mode, arg, tabs)?),
        Mode::MoveCursorLeft | Mode::MoveCursorRight => {
            let to = destination(mode, arg, offset, tabs)?;
            if to == tabs.current {
                return Ok(None);
            }
            Action::MoveCursor(to)
        }
        Mode::MoveTab => {
            let to = destination(mode, arg, offset, tabs)?;
            if to == tabs.current {
                return Ok(None);
            }
            Action::MoveTab {
                from: tabs.current,
                to,
            }
        }
        Mode::NewSearch | Mode::EditSearch => {
            let text = arg.trim();
            if text.is_empty() {
                return Ok(None);
            }
            Action::Search(text.to_string())
        }
        Mode::Find => {
            let text = if arg.is_empty() {
                find.last_text.clone().ok_or(DispatchError::NothingToFind)?
            } else {
                arg.to_string()
            };
            Action::Find(find.request(text, Direction::Forward))
        }
        Mode::FindNext | Mode::FindPrev => {
            let text = find.last_text.clone().ok_or(DispatchError::NothingToFind)?;
            let direction = if mode == Mode::FindNext {
                Direction::Forward
            } else {
                Direction::Backward
            };
            Action::Find(find.request(text, direction))
        }
        Mode::ScrollUp => Action::Scroll(Direction::Backward),
        Mode::ScrollDown => Action::Scroll(Direction::Forward),
        Mode::HistoryPrev => Action::NavigateHistory(Direction::Backward),
        Mode::HistoryNext => Action::NavigateHistory(Direction::Forward),
    };
    Ok(Some(action))
}

fn index_or_current(mode: Mode, arg: &str, tabs: TabState) -> Result<usize, DispatchError> {
    let text = arg.trim();
    if text.is_empty() {
        return Ok(tabs.current);
    }
    absolute_index(mode, text, tabs)
}

fn absolute_index(mode: Mode, text: &str, tabs: TabState) -> Result<usize, DispatchError> {
    let index: i64 = text.parse().map_err(|_| DispatchError::ArgumentParse {
        mode,
        text: text.to_string(),
    })?;
    match usize::try_from(index) {
        Ok(i) if i < tabs.count => Ok(i),
        _ => Err(DispatchError::IndexOutOfRange {
            index,
            count: tabs.count,
        }),
    }
}

/// Destination of a movement. Typed from the command line, the argument
/// may carry its own direction prefix (`h2`, `+1`).
fn destination(
    mode: Mode,
    arg: &str,
    offset: OffsetKind,
    tabs: TabState,
) -> Result<usize, DispatchError> {
    let arg = arg.trim();
    let (kind, digits) = match offset {
        OffsetKind::None => match arg.chars().next().and_then(OffsetKind::from_direction_key) {
            Some(kind) => (kind, arg[1..].trim_start()),
            None => (OffsetKind::Absolute, arg),
        },
        kind => (kind, arg),
    };

    if !kind.is_relative() {
        if digits.is_empty() {
            return Ok(tabs.current);
        }
        return absolute_index(mode, digits, tabs);
    }

    let distance = if digits.is_empty() {
        1
    } else {
        digits
            .parse::<u64>()
            .map_err(|_| DispatchError::ArgumentParse {
                mode,
                text: arg.to_string(),
            })?
    };
    Ok(wrap_index(tabs.current, kind.direction(), distance, tabs.count))
}
