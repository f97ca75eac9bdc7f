//! Offsets for the tab-movement modes and index arithmetic.
//!
//! A movement argument is either an absolute tab index or a distance to the
//! left or right of the current tab. Relative targets wrap around the tab
//! strip, so moving right from the last tab lands on the first.

use actions::Direction;
use commands::Mode;

/// How the digits typed in a movement mode are interpreted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetKind {
    /// Nothing typed yet.
    #[default]
    None,
    /// Digits name a tab index.
    Absolute,
    /// Digits count tabs to the left.
    RelativeLeft,
    /// Digits count tabs to the right.
    RelativeRight,
}

impl OffsetKind {
    /// Kind a mode starts with when it is entered.
    pub const fn initial(mode: Mode) -> Self {
        match mode {
            Mode::MoveCursorLeft => Self::RelativeLeft,
            Mode::MoveCursorRight => Self::RelativeRight,
            _ => Self::None,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Self::RelativeLeft => Direction::Backward,
            Self::RelativeRight => Direction::Forward,
            Self::None | Self::Absolute => Direction::None,
        }
    }

    pub const fn is_relative(self) -> bool {
        matches!(self, Self::RelativeLeft | Self::RelativeRight)
    }

    /// Direction word shown on the status line.
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::RelativeLeft => Some("left"),
            Self::RelativeRight => Some("right"),
            Self::None | Self::Absolute => None,
        }
    }

    /// Direction selected by a key typed while the kind is still `None`.
    pub const fn from_direction_key(c: char) -> Option<Self> {
        match c {
            'h' | '-' => Some(Self::RelativeLeft),
            'l' | '+' => Some(Self::RelativeRight),
            _ => None,
        }
    }
}

/// `(current + sign * distance) mod tab_count`, always in `[0, tab_count)`.
///
/// Negative intermediates fold upward (true modulo), and the arithmetic is
/// done in `i128` so no distance can overflow. `tab_count` must be non-zero.
pub fn wrap_index(current: usize, direction: Direction, distance: u64, tab_count: usize) -> usize {
    debug_assert!(tab_count > 0, "wrap_index needs at least one tab");
    let count = tab_count as i128;
    let target = current as i128 + i128::from(direction.sign()) * i128::from(distance);
    target.rem_euclid(count) as usize
}
