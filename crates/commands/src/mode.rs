//! The closed set of controller modes.
//!
//! Exactly one [`Mode`] is active at a time. `Idle` is plain browsing,
//! `Command` is the `:` line, and every other mode gathers an argument for
//! (or immediately performs) one browser operation.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    #[default]
    Idle,
    Command,
    Quit,
    ToggleChrome,
    OpenFile,
    OpenTab,
    CloseTab,
    RefreshTab,
    MoveCursorLeft,
    MoveCursorRight,
    MoveTab,
    NewSearch,
    EditSearch,
    Find,
    FindNext,
    FindPrev,
    ScrollUp,
    ScrollDown,
    HistoryPrev,
    HistoryNext,
}

impl Mode {
    pub const ALL: [Mode; 20] = [
        Mode::Idle,
        Mode::Command,
        Mode::Quit,
        Mode::ToggleChrome,
        Mode::OpenFile,
        Mode::OpenTab,
        Mode::CloseTab,
        Mode::RefreshTab,
        Mode::MoveCursorLeft,
        Mode::MoveCursorRight,
        Mode::MoveTab,
        Mode::NewSearch,
        Mode::EditSearch,
        Mode::Find,
        Mode::FindNext,
        Mode::FindPrev,
        Mode::ScrollUp,
        Mode::ScrollDown,
        Mode::HistoryPrev,
        Mode::HistoryNext,
    ];

    /// The upper-case name used in command files (`State` field).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Command => "COMMAND",
            Self::Quit => "QUIT",
            Self::ToggleChrome => "TOGGLE_CHROME",
            Self::OpenFile => "OPEN_FILE",
            Self::OpenTab => "OPEN_TAB",
            Self::CloseTab => "CLOSE_TAB",
            Self::RefreshTab => "REFRESH_TAB",
            Self::MoveCursorLeft => "MOVE_CURSOR_LEFT",
            Self::MoveCursorRight => "MOVE_CURSOR_RIGHT",
            Self::MoveTab => "MOVE_TAB",
            Self::NewSearch => "NEW_SEARCH",
            Self::EditSearch => "EDIT_SEARCH",
            Self::Find => "FIND",
            Self::FindNext => "FIND_NEXT",
            Self::FindPrev => "FIND_PREV",
            Self::ScrollUp => "SCROLL_UP",
            Self::ScrollDown => "SCROLL_DOWN",
            Self::HistoryPrev => "HISTORY_PREV",
            Self::HistoryNext => "HISTORY_NEXT",
        }
    }

    /// Lower-case name shown on the status line (`:close_tab 1`).
    pub fn status_name(self) -> String {
        self.name().to_ascii_lowercase()
    }

    /// Modes that act on the current tab and therefore need at least one.
    pub const fn is_tab_scoped(self) -> bool {
        matches!(
            self,
            Self::RefreshTab
                | Self::CloseTab
                | Self::Find
                | Self::FindNext
                | Self::FindPrev
                | Self::ScrollUp
                | Self::ScrollDown
                | Self::HistoryPrev
                | Self::HistoryNext
                | Self::NewSearch
                | Self::EditSearch
        )
    }

    /// Modes that move a tab or the tab cursor; they need a distinct destination.
    pub const fn is_movement(self) -> bool {
        matches!(
            self,
            Self::MoveCursorLeft | Self::MoveCursorRight | Self::MoveTab
        )
    }

    /// Minimum number of open tabs for the mode to be entered.
    pub const fn min_tabs(self) -> usize {
        if self.is_movement() {
            2
        } else if self.is_tab_scoped() {
            1
        } else {
            0
        }
    }

    /// False for the two modes that never dispatch anything.
    pub const fn has_action(self) -> bool {
        !matches!(self, Self::Idle | Self::Command)
    }

    /// Modes with nothing to type: they fire as soon as they are entered by
    /// a shortcut and drop straight back to `Idle`.
    pub const fn fires_on_entry(self) -> bool {
        matches!(
            self,
            Self::Quit
                | Self::ToggleChrome
                | Self::FindNext
                | Self::FindPrev
                | Self::ScrollUp
                | Self::ScrollDown
                | Self::HistoryPrev
                | Self::HistoryNext
        )
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a `State` value that names no mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode name {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
