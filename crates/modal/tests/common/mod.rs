//! Shared fakes and fixtures for the modal integration tests.

// Not every test file uses every helper.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use actions::{Direction, FindRequest, OpenTarget, TabActuator, WindowActuator};
use commands::{CommandTable, Key, KeyEvent};
use modal::{Controller, ControllerOptions, Event};

// ============================================================================
// Actuators
// ============================================================================

/// Window actuator that records every call.
#[derive(Debug, Default)]
pub struct RecordingWindow {
    pub calls: Vec<String>,
    pub chrome_visible: bool,
}

impl WindowActuator for RecordingWindow {
    fn quit(&mut self) {
        self.calls.push("quit()".into());
    }

    fn toggle_chrome(&mut self) {
        self.chrome_visible = !self.chrome_visible;
        self.calls.push("toggle-chrome()".into());
    }

    fn open_file(&mut self, path: &str) {
        self.calls.push(format!("open-file({path})"));
    }
}

/// A tab strip of `count` tabs that records every call and keeps its
/// count and current index consistent.
#[derive(Debug)]
pub struct RecordingTabs {
    pub count: usize,
    pub current: usize,
    pub calls: Vec<String>,
}

impl RecordingTabs {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: 0,
            calls: Vec::new(),
        }
    }
}

impl TabActuator for RecordingTabs {
    fn tab_count(&self) -> usize {
        self.count
    }

    fn current_index(&self) -> usize {
        self.current
    }

    fn open_tab(&mut self, target: &OpenTarget) {
        self.calls.push(format!("open-tab({target:?})"));
        self.count += 1;
        self.current = self.count - 1;
    }

    fn close_tab(&mut self, index: usize) {
        self.calls.push(format!("close-tab({index})"));
        self.count -= 1;
        self.current = self.current.min(self.count.saturating_sub(1));
    }

    fn move_tab(&mut self, from: usize, to: usize) {
        self.calls.push(format!("move-tab({from}, {to})"));
        self.current = to;
    }

    fn move_cursor(&mut self, index: usize) {
        self.calls.push(format!("move-cursor({index})"));
        self.current = index;
    }

    fn refresh_tab(&mut self, index: usize) {
        self.calls.push(format!("refresh-tab({index})"));
    }

    fn search(&mut self, text: &str) {
        self.calls.push(format!("search({text})"));
    }

    fn find(&mut self, request: &FindRequest) {
        self.calls
            .push(format!("find({:?}, {})", request.direction, request.text));
    }

    fn scroll(&mut self, direction: Direction) {
        self.calls.push(format!("scroll({direction:?})"));
    }

    fn navigate_history(&mut self, direction: Direction) {
        self.calls.push(format!("history({direction:?})"));
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub type TestController = Controller<RecordingWindow, RecordingTabs>;

/// The single-record table used by the close-tab scenario.
pub const CLOSE_ONLY: &str = r#"[
    {"Key": "close", "Name": "close", "State": "CLOSE_TAB", "Shortcut": "c", "LongCmd": "close-tab", "Help": "Close tab INDEX"}
]"#;

/// A fuller table covering every argument style.
pub const STANDARD: &str = r#"{
    "close": {"Key": "close", "Name": "Close tab", "State": "CLOSE_TAB", "Shortcut": "c", "LongCmd": "close-tab", "Help": "Close tab INDEX"},
    "move": {"Key": "move", "Name": "Move tab", "State": "MOVE_TAB", "Shortcut": "m", "LongCmd": "move-tab", "Help": "Move the current tab"},
    "open": {"Key": "open", "Name": "Open tab", "State": "OPEN_TAB", "Shortcut": "o", "LongCmd": "open-tab", "Help": "Open URL or search"},
    "find": {"Key": "find", "Name": "Find", "State": "FIND", "Shortcut": "Slash", "LongCmd": "find", "Help": "Find in page"},
    "down": {"Key": "down", "Name": "Scroll down", "State": "SCROLL_DOWN", "Shortcut": "j", "LongCmd": "scroll-down", "Help": ""}
}"#;

pub fn controller_with(table_json: &str, tabs: usize) -> TestController {
    let table = CommandTable::from_json(table_json).expect("fixture table loads");
    Controller::new(
        table,
        ControllerOptions::default(),
        RecordingWindow::default(),
        RecordingTabs::new(tabs),
    )
}

/// Collect every event the controller emits from now on.
pub fn record_events(controller: &mut TestController) -> Rc<RefCell<Vec<Event>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    controller.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

// ============================================================================
// Typing
// ============================================================================

pub fn type_text(controller: &mut TestController, text: &str) {
    for c in text.chars() {
        controller.tap(KeyEvent::char(c));
    }
}

pub fn enter(controller: &mut TestController) {
    controller.tap(KeyEvent::plain(Key::Enter));
}

pub fn backspace(controller: &mut TestController) {
    controller.tap(KeyEvent::plain(Key::Backspace));
}

pub fn escape(controller: &mut TestController) {
    controller.tap(KeyEvent::plain(Key::Escape));
}
