//! Shared action definitions for kbrowse.
//!
//! The modal controller never touches a window or a web page. When a mode
//! completes it produces an [`Action`] and hands it to one of two actuators
//! supplied by the front end: a [`WindowActuator`] for window-level effects
//! and a [`TabActuator`] for everything that operates on the tab strip.
//! Both traits live here so front ends can implement them without depending
//! on the controller crate.

use std::fmt;

// Directions

/// Three-valued direction shared by tab movement, find, scroll and history.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    None,
    /// Left, previous, up, back.
    Backward,
    /// Right, next, down, forward.
    Forward,
}

impl Direction {
    /// Numeric sign used in index arithmetic.
    pub const fn sign(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

// Intents

/// What an open-tab request should load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    Blank,
    Url(String),
    Search(String),
}

impl OpenTarget {
    /// Decide whether typed text is an address or a search query.
    ///
    /// Text with a scheme (`https://`, `file:`...), `localhost`, or a single
    /// dotted word is an address; anything else is searched.
    pub fn classify(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::Blank;
        }
        if has_scheme(text) {
            return Self::Url(text.to_string());
        }
        let single_word = !text.chars().any(char::is_whitespace);
        let host = text.split(['/', ':']).next().unwrap_or(text);
        if single_word && (host == "localhost" || (host.contains('.') && !host.ends_with('.'))) {
            return Self::Url(text.to_string());
        }
        Self::Search(text.to_string())
    }
}

fn has_scheme(text: &str) -> bool {
    match text.split_once(':') {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && (rest.starts_with("//") || matches!(scheme, "file" | "about" | "data"))
        }
        None => false,
    }
}

/// Arguments of an in-page find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindRequest {
    pub text: String,
    pub direction: Direction,
    pub case_sensitive: bool,
    pub whole_word: bool,
}

/// A completed command, ready to be carried out by an actuator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleChrome,
    OpenFile(String),
    OpenTab(OpenTarget),
    CloseTab(usize),
    MoveTab { from: usize, to: usize },
    MoveCursor(usize),
    RefreshTab(usize),
    Search(String),
    Find(FindRequest),
    Scroll(Direction),
    NavigateHistory(Direction),
}

impl Action {
    /// Stable kebab-case name, used in logs and events.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::ToggleChrome => "toggle-chrome",
            Self::OpenFile(_) => "open-file",
            Self::OpenTab(_) => "open-tab",
            Self::CloseTab(_) => "close-tab",
            Self::MoveTab { .. } => "move-tab",
            Self::MoveCursor(_) => "move-cursor",
            Self::RefreshTab(_) => "refresh-tab",
            Self::Search(_) => "search",
            Self::Find(_) => "find",
            Self::Scroll(_) => "scroll",
            Self::NavigateHistory(_) => "history",
        }
    }

    /// True for actions carried out by the window rather than the tab strip.
    pub const fn is_window_scoped(&self) -> bool {
        matches!(self, Self::Quit | Self::ToggleChrome | Self::OpenFile(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            Self::Quit | Self::ToggleChrome => write!(f, "{name}()"),
            Self::OpenFile(path) => write!(f, "{name}({path:?})"),
            Self::OpenTab(OpenTarget::Blank) => write!(f, "{name}()"),
            Self::OpenTab(OpenTarget::Url(url)) => write!(f, "{name}(url {url:?})"),
            Self::OpenTab(OpenTarget::Search(q)) => write!(f, "{name}(search {q:?})"),
            Self::CloseTab(i) | Self::MoveCursor(i) | Self::RefreshTab(i) => {
                write!(f, "{name}({i})")
            }
            Self::MoveTab { from, to } => write!(f, "{name}({from} -> {to})"),
            Self::Search(text) => write!(f, "{name}({text:?})"),
            Self::Find(req) => write!(
                f,
                "{name}({:?}, {:?}, case={}, word={})",
                req.direction, req.text, req.case_sensitive, req.whole_word
            ),
            Self::Scroll(dir) | Self::NavigateHistory(dir) => write!(f, "{name}({dir:?})"),
        }
    }
}

// Actuators

/// Window-level effects: lifetime and chrome.
pub trait WindowActuator {
    fn quit(&mut self);
    /// Flip visibility of the menu bar and other chrome.
    fn toggle_chrome(&mut self);
    /// Open a local file; an empty path asks the front end to prompt for one.
    fn open_file(&mut self, path: &str);
}

/// Tab-strip effects and the two numbers the controller reads back.
pub trait TabActuator {
    fn tab_count(&self) -> usize;
    fn current_index(&self) -> usize;
    /// The address or query shown by the current tab, for editing.
    fn current_query(&self) -> Option<String> {
        None
    }

    fn open_tab(&mut self, target: &OpenTarget);
    fn close_tab(&mut self, index: usize);
    fn move_tab(&mut self, from: usize, to: usize);
    /// Make `index` the current tab.
    fn move_cursor(&mut self, index: usize);
    fn refresh_tab(&mut self, index: usize);
    /// Load a new address or query into the current tab.
    fn search(&mut self, text: &str);
    fn find(&mut self, request: &FindRequest);
    fn scroll(&mut self, direction: Direction);
    fn navigate_history(&mut self, direction: Direction);
}

/// Route an action to the actuator that owns it.
pub fn apply(action: &Action, window: &mut dyn WindowActuator, tabs: &mut dyn TabActuator) {
    match action {
        Action::Quit => window.quit(),
        Action::ToggleChrome => window.toggle_chrome(),
        Action::OpenFile(path) => window.open_file(path),
        Action::OpenTab(target) => tabs.open_tab(target),
        Action::CloseTab(index) => tabs.close_tab(*index),
        Action::MoveTab { from, to } => tabs.move_tab(*from, *to),
        Action::MoveCursor(index) => tabs.move_cursor(*index),
        Action::RefreshTab(index) => tabs.refresh_tab(*index),
        Action::Search(text) => tabs.search(text),
        Action::Find(request) => tabs.find(request),
        Action::Scroll(direction) => tabs.scroll(*direction),
        Action::NavigateHistory(direction) => tabs.navigate_history(*direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[derive(Default)]
    struct Log(Vec<String>);

    impl WindowActuator for Log {
        fn quit(&mut self) {
            self.0.push("window.quit".into());
        }
        fn toggle_chrome(&mut self) {
            self.0.push("window.toggle_chrome".into());
        }
        fn open_file(&mut self, path: &str) {
            self.0.push(format!("window.open_file {path}"));
        }
    }

    impl TabActuator for Log {
        fn tab_count(&self) -> usize {
            1
        }
        fn current_index(&self) -> usize {
            0
        }
        fn open_tab(&mut self, target: &OpenTarget) {
            self.0.push(format!("tabs.open {target:?}"));
        }
        fn close_tab(&mut self, index: usize) {
            self.0.push(format!("tabs.close {index}"));
        }
        fn move_tab(&mut self, from: usize, to: usize) {
            self.0.push(format!("tabs.move {from} {to}"));
        }
        fn move_cursor(&mut self, index: usize) {
            self.0.push(format!("tabs.cursor {index}"));
        }
        fn refresh_tab(&mut self, index: usize) {
            self.0.push(format!("tabs.refresh {index}"));
        }
        fn search(&mut self, text: &str) {
            self.0.push(format!("tabs.search {text}"));
        }
        fn find(&mut self, request: &FindRequest) {
            self.0.push(format!("tabs.find {}", request.text));
        }
        fn scroll(&mut self, direction: Direction) {
            self.0.push(format!("tabs.scroll {direction:?}"));
        }
        fn navigate_history(&mut self, direction: Direction) {
            self.0.push(format!("tabs.history {direction:?}"));
        }
    }

    #[test]
    fn direction_signs() {
        assert_eq!(Direction::None.sign(), 0);
        assert_eq!(Direction::Backward.sign(), -1);
        assert_eq!(Direction::Forward.sign(), 1);
        assert_eq!(Direction::default(), Direction::None);
    }

    #[test_case("", OpenTarget::Blank ; "empty is blank")]
    #[test_case("   ", OpenTarget::Blank ; "whitespace is blank")]
    #[test_case("https://example.com", OpenTarget::Url("https://example.com".into()) ; "scheme")]
    #[test_case("file:/tmp/a.html", OpenTarget::Url("file:/tmp/a.html".into()) ; "file scheme")]
    #[test_case("example.com/path", OpenTarget::Url("example.com/path".into()) ; "dotted host")]
    #[test_case("localhost:8080", OpenTarget::Url("localhost:8080".into()) ; "localhost with port")]
    #[test_case("rust borrow checker", OpenTarget::Search("rust borrow checker".into()) ; "words")]
    #[test_case("rust", OpenTarget::Search("rust".into()) ; "single word")]
    #[test_case("version 1.2", OpenTarget::Search("version 1.2".into()) ; "dotted word in sentence")]
    #[test_case("end.", OpenTarget::Search("end.".into()) ; "trailing dot")]
    fn classify_open_target(text: &str, expected: OpenTarget) {
        assert_eq!(OpenTarget::classify(text), expected);
    }

    #[test]
    fn window_actions_route_to_window() {
        let mut window = Log::default();
        let mut tabs = Log::default();
        apply(&Action::Quit, &mut window, &mut tabs);
        apply(&Action::ToggleChrome, &mut window, &mut tabs);
        apply(&Action::OpenFile("/tmp/x".into()), &mut window, &mut tabs);
        assert_eq!(
            window.0,
            vec!["window.quit", "window.toggle_chrome", "window.open_file /tmp/x"]
        );
        assert!(tabs.0.is_empty());
    }

    #[test]
    fn tab_actions_route_to_tabs() {
        let mut window = Log::default();
        let mut tabs = Log::default();
        apply(&Action::CloseTab(2), &mut window, &mut tabs);
        apply(&Action::MoveTab { from: 0, to: 3 }, &mut window, &mut tabs);
        apply(&Action::Scroll(Direction::Forward), &mut window, &mut tabs);
        assert_eq!(
            tabs.0,
            vec!["tabs.close 2", "tabs.move 0 3", "tabs.scroll Forward"]
        );
        assert!(window.0.is_empty());
    }

    #[test]
    fn action_display() {
        assert_eq!(Action::CloseTab(1).to_string(), "close-tab(1)");
        assert_eq!(Action::Quit.to_string(), "quit()");
        assert_eq!(
            Action::MoveTab { from: 2, to: 0 }.to_string(),
            "move-tab(2 -> 0)"
        );
        assert_eq!(
            Action::OpenTab(OpenTarget::Search("rust".into())).to_string(),
            "open-tab(search \"rust\")"
        );
    }

    #[test]
    fn window_scope() {
        assert!(Action::Quit.is_window_scoped());
        assert!(Action::OpenFile(String::new()).is_window_scoped());
        assert!(!Action::CloseTab(0).is_window_scoped());
    }
}
