//! The status line shown while a mode is active.

use commands::Mode;

use crate::offset::OffsetKind;

/// `":<mode>[ direction] <buffer>"` outside IDLE, empty while IDLE.
pub fn status_text(mode: Mode, offset: OffsetKind, buffer: &str) -> String {
    if mode == Mode::Idle {
        return String::new();
    }
    match offset.label() {
        Some(direction) => format!(":{} {direction} {buffer}", mode.status_name()),
        None => format!(":{} {buffer}", mode.status_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn idle_is_blank() {
        assert_eq!(status_text(Mode::Idle, OffsetKind::None, "ignored"), "");
    }

    #[test]
    fn mode_and_buffer() {
        assert_eq!(status_text(Mode::CloseTab, OffsetKind::None, "1"), ":close_tab 1");
        assert_eq!(status_text(Mode::Command, OffsetKind::None, ""), ":command ");
    }

    #[test]
    fn direction_follows_mode_name() {
        assert_eq!(
            status_text(Mode::MoveTab, OffsetKind::RelativeRight, "2"),
            ":move_tab right 2"
        );
        assert_eq!(
            status_text(Mode::MoveTab, OffsetKind::Absolute, "2"),
            ":move_tab 2"
        );
    }
}
