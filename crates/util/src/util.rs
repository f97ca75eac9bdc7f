//! Shared utilities for kbrowse.

/// Panic in debug builds, log error with backtrace in release.
///
/// Use for "this shouldn't happen" invariants in the modal controller that
/// must not take down the browser in production.
#[macro_export]
macro_rules! debug_panic {
    ( $($fmt_arg:tt)* ) => {
        if cfg!(debug_assertions) {
            panic!( $($fmt_arg)* );
        } else {
            let backtrace = std::backtrace::Backtrace::capture();
            tracing::error!("{}\n{:?}", format_args!($($fmt_arg)*), backtrace);
        }
    };
}

/// Truncate `text` to at most `max_chars` characters, appending `…` when cut.
///
/// Used when logging user-typed buffers so a pasted blob does not flood the log.
pub fn truncate_for_log(text: &str, max_chars: usize) -> std::borrow::Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}…", &text[..byte_idx]).into(),
        None => text.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_borrowed_unchanged() {
        assert_eq!(truncate_for_log("close-tab", 32), "close-tab");
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        assert_eq!(truncate_for_log("héllo wörld", 5), "héllo…");
    }

    #[test]
    #[should_panic(expected = "invariant broken: 3")]
    #[cfg(debug_assertions)]
    fn debug_panic_panics_in_debug_builds() {
        debug_panic!("invariant broken: {}", 3);
    }
}
