//! In-memory window and tab strip, and the key-script format that drives
//! them.

use actions::{Direction, FindRequest, OpenTarget, TabActuator, WindowActuator};
use anyhow::{anyhow, Result};
use commands::{Key, KeyEvent, Shortcut};
use modal::{Controller, Event};

// -- Window --

/// Window state without a window.
#[derive(Debug)]
pub struct HeadlessWindow {
    chrome_visible: bool,
    quit_requested: bool,
    /// Write chrome visibility back to config.toml.
    persist: bool,
}

impl HeadlessWindow {
    pub fn new(chrome_visible: bool, persist: bool) -> Self {
        Self {
            chrome_visible,
            quit_requested: false,
            persist,
        }
    }

    pub fn chrome_visible(&self) -> bool {
        self.chrome_visible
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl WindowActuator for HeadlessWindow {
    fn quit(&mut self) {
        self.quit_requested = true;
    }

    fn toggle_chrome(&mut self) {
        self.chrome_visible = !self.chrome_visible;
        if self.persist {
            settings::save_chrome_visible(self.chrome_visible);
        }
    }

    fn open_file(&mut self, path: &str) {
        if path.is_empty() {
            tracing::info!("No file picker in headless mode");
        } else {
            tracing::info!("Open file {:?}", path);
        }
    }
}

// -- Tabs --

/// One tab: its back/forward list and scroll position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    history: Vec<String>,
    position: usize,
    scroll: i64,
}

impl Page {
    fn new(address: String) -> Self {
        Self {
            history: vec![address],
            position: 0,
            scroll: 0,
        }
    }

    pub fn address(&self) -> &str {
        &self.history[self.position]
    }

    pub fn scroll(&self) -> i64 {
        self.scroll
    }

    fn visit(&mut self, address: String) {
        self.history.truncate(self.position + 1);
        self.history.push(address);
        self.position = self.history.len() - 1;
        self.scroll = 0;
    }
}

const BLANK: &str = "about:blank";
const SEARCH_URL: &str = "https://duckduckgo.com/?q=";

fn address_for(target: &OpenTarget) -> String {
    match target {
        OpenTarget::Blank => BLANK.to_string(),
        OpenTarget::Url(url) if url.contains("://") || url.starts_with("about:") => url.clone(),
        OpenTarget::Url(url) => format!("https://{url}"),
        OpenTarget::Search(query) => format!("{SEARCH_URL}{}", query.replace(' ', "+")),
    }
}

/// A tab strip held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessTabs {
    pages: Vec<Page>,
    current: usize,
}

impl Default for HeadlessTabs {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessTabs {
    /// One blank tab.
    pub fn new() -> Self {
        Self {
            pages: vec![Page::new(BLANK.to_string())],
            current: 0,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn addresses(&self) -> Vec<&str> {
        self.pages.iter().map(Page::address).collect()
    }

    fn current_page(&mut self) -> Option<&mut Page> {
        self.pages.get_mut(self.current)
    }
}

impl TabActuator for HeadlessTabs {
    fn tab_count(&self) -> usize {
        self.pages.len()
    }

    fn current_index(&self) -> usize {
        self.current
    }

    fn current_query(&self) -> Option<String> {
        self.pages
            .get(self.current)
            .map(|page| page.address().to_string())
            .filter(|address| address != BLANK)
    }

    fn open_tab(&mut self, target: &OpenTarget) {
        self.pages.push(Page::new(address_for(target)));
        self.current = self.pages.len() - 1;
    }

    fn close_tab(&mut self, index: usize) {
        if index >= self.pages.len() {
            return;
        }
        self.pages.remove(index);
        if index < self.current || self.current >= self.pages.len() {
            self.current = self.current.saturating_sub(1);
        }
    }

    fn move_tab(&mut self, from: usize, to: usize) {
        if from >= self.pages.len() || to >= self.pages.len() {
            return;
        }
        let page = self.pages.remove(from);
        self.pages.insert(to, page);
        self.current = to;
    }

    fn move_cursor(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        }
    }

    fn refresh_tab(&mut self, index: usize) {
        if let Some(page) = self.pages.get_mut(index) {
            page.scroll = 0;
            tracing::info!("Reload {}", page.address());
        }
    }

    fn search(&mut self, text: &str) {
        let address = address_for(&OpenTarget::classify(text));
        if let Some(page) = self.current_page() {
            page.visit(address);
        }
    }

    fn find(&mut self, request: &FindRequest) {
        tracing::info!(
            direction = ?request.direction,
            case_sensitive = request.case_sensitive,
            whole_word = request.whole_word,
            "Find {:?}",
            request.text
        );
    }

    fn scroll(&mut self, direction: Direction) {
        if let Some(page) = self.current_page() {
            page.scroll = (page.scroll + direction.sign()).max(0);
        }
    }

    fn navigate_history(&mut self, direction: Direction) {
        if let Some(page) = self.current_page() {
            let target = page.position as i64 + direction.sign();
            if let Ok(position) = usize::try_from(target) {
                if position < page.history.len() {
                    page.position = position;
                    page.scroll = 0;
                }
            }
        }
    }
}

// -- Scripts --

/// One step of a key script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptInput {
    Key(KeyEvent),
    FocusOut,
    FocusIn,
}

/// Parse a whitespace-separated key script.
///
/// Plain tokens type their characters. `<...>` names a key or chord
/// (`<Enter>`, `<Esc>`, `<BS>`, `<Space>`, `<Ctrl+m>`) or a focus change
/// (`<FocusOut>`, `<FocusIn>`). Lines starting with `#` are comments.
pub fn parse_script(text: &str) -> Result<Vec<ScriptInput>> {
    let mut inputs = Vec::new();
    for line in text.lines() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            match token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
                Some(name) if !name.is_empty() => inputs.push(named_input(name)?),
                _ => inputs.extend(token.chars().map(|c| ScriptInput::Key(KeyEvent::char(c)))),
            }
        }
    }
    Ok(inputs)
}

fn named_input(name: &str) -> Result<ScriptInput> {
    let input = match name.to_ascii_lowercase().as_str() {
        "focusout" => ScriptInput::FocusOut,
        "focusin" => ScriptInput::FocusIn,
        "bs" => ScriptInput::Key(KeyEvent::plain(Key::Backspace)),
        _ => {
            let shortcut = Shortcut::parse(name)
                .map_err(|e| anyhow!("bad key <{name}>: {e}"))?
                .ok_or_else(|| anyhow!("empty key name"))?;
            ScriptInput::Key(KeyEvent::new(shortcut.key(), shortcut.modifiers()))
        }
    };
    Ok(input)
}

/// Deliver one script step to the controller.
pub fn feed<W, T>(controller: &mut Controller<W, T>, input: ScriptInput)
where
    W: WindowActuator,
    T: TabActuator,
{
    match input {
        ScriptInput::Key(event) => {
            if !controller.tap(event).is_consumed() {
                tracing::debug!(key = %event.key, "Passed to page");
            }
        }
        ScriptInput::FocusOut => controller.focus_lost(),
        ScriptInput::FocusIn => controller.focus_gained(),
    }
}

/// One line of output per event.
pub fn describe(event: &Event) -> String {
    match event {
        Event::ModeChanged { from, to } => format!("mode    {from} -> {to}"),
        Event::TransitionRejected { from, to, reason } => {
            format!("reject  {from} -> {to}: {reason}")
        }
        Event::FocusChanged {
            owner,
            shortcuts_enabled,
        } => format!("focus   {owner:?} (shortcuts {})", on_off(*shortcuts_enabled)),
        Event::ActionDispatched(action) => format!("action  {action}"),
        Event::TabsChanged { count, current } => format!("tabs    {current}/{count}"),
        Event::StatusChanged(text) => format!("status  {text:?}"),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::{CommandTable, Mode, Modifiers};
    use modal::ControllerOptions;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn controller() -> Controller<HeadlessWindow, HeadlessTabs> {
        let table = CommandTable::from_json(settings::DEFAULT_COMMANDS).unwrap();
        Controller::new(
            table,
            ControllerOptions::default(),
            HeadlessWindow::new(true, false),
            HeadlessTabs::new(),
        )
    }

    fn run(script: &str) -> Controller<HeadlessWindow, HeadlessTabs> {
        let mut ctrl = controller();
        for input in parse_script(script).unwrap() {
            feed(&mut ctrl, input);
        }
        ctrl
    }

    #[test]
    fn plain_tokens_type_each_character() {
        assert_eq!(
            parse_script("c1 <Enter>").unwrap(),
            vec![
                ScriptInput::Key(KeyEvent::char('c')),
                ScriptInput::Key(KeyEvent::char('1')),
                ScriptInput::Key(KeyEvent::plain(Key::Enter)),
            ]
        );
    }

    #[test_case("<Esc>", ScriptInput::Key(KeyEvent::plain(Key::Escape)) ; "escape")]
    #[test_case("<BS>", ScriptInput::Key(KeyEvent::plain(Key::Backspace)) ; "backspace")]
    #[test_case("<Space>", ScriptInput::Key(KeyEvent::char(' ')) ; "space")]
    #[test_case("<Ctrl+m>", ScriptInput::Key(KeyEvent::new(Key::Char('m'), Modifiers::CTRL)) ; "chord")]
    #[test_case("<focusout>", ScriptInput::FocusOut ; "focus out")]
    #[test_case("<FocusIn>", ScriptInput::FocusIn ; "focus in")]
    fn named_tokens(token: &str, expected: ScriptInput) {
        assert_eq!(parse_script(token).unwrap(), vec![expected]);
    }

    #[test]
    fn comments_and_bad_names() {
        assert!(parse_script("# <Nope>\n").unwrap().is_empty());
        assert!(parse_script("<Hyper+x>").is_err());
        // A lone `<>` is just two characters.
        assert_eq!(parse_script("<>").unwrap().len(), 2);
    }

    #[test]
    fn open_and_close_tabs() {
        let ctrl = run(":open-tab <Space> example.org <Enter> o rust <Space> lang <Enter> c0 <Enter>");
        assert_eq!(
            ctrl.tabs().addresses(),
            vec!["https://example.org", "https://duckduckgo.com/?q=rust+lang"]
        );
        assert_eq!(ctrl.tabs().current_index(), 1);
        assert_eq!(ctrl.mode(), Mode::Idle);
    }

    #[test]
    fn move_tab_relative() {
        let ctrl = run("o a.com <Enter> o b.com <Enter> m l <Enter>");
        assert_eq!(
            ctrl.tabs().addresses(),
            vec!["https://b.com", "about:blank", "https://a.com"]
        );
        assert_eq!(ctrl.tabs().current_index(), 0);
    }

    #[test]
    fn search_and_history() {
        let ctrl = run("s one.org <Enter> s two.org <Enter> H");
        assert_eq!(ctrl.tabs().addresses(), vec!["https://one.org"]);
        let ctrl = run("s one.org <Enter> H L");
        assert_eq!(ctrl.tabs().addresses(), vec!["https://one.org"]);
    }

    #[test]
    fn edit_search_starts_from_address() {
        let ctrl = run("s one.org <Enter> e");
        assert_eq!(ctrl.mode(), Mode::EditSearch);
        assert_eq!(ctrl.buffer(), "https://one.org");
    }

    #[test]
    fn scroll_never_goes_negative() {
        let ctrl = run("k j j k k");
        assert_eq!(ctrl.tabs().pages()[0].scroll(), 0);
        let ctrl = run("j j");
        assert_eq!(ctrl.tabs().pages()[0].scroll(), 2);
    }

    #[test]
    fn chrome_and_quit() {
        let ctrl = run("<Ctrl+m> Q");
        assert!(!ctrl.window().chrome_visible());
        assert!(ctrl.window().quit_requested());
    }

    #[test]
    fn focus_round_trip() {
        let ctrl = run("/ nee <FocusOut> <FocusIn> dle");
        assert_eq!(ctrl.mode(), Mode::Find);
        assert_eq!(ctrl.buffer(), "needle");
    }

    #[test]
    fn closing_before_current_shifts_it() {
        let mut tabs = HeadlessTabs::new();
        tabs.open_tab(&OpenTarget::Url("a.com".into()));
        tabs.open_tab(&OpenTarget::Url("b.com".into()));
        tabs.close_tab(0);
        assert_eq!(tabs.current_index(), 1);
        assert_eq!(tabs.addresses(), vec!["https://a.com", "https://b.com"]);
        tabs.close_tab(1);
        assert_eq!(tabs.current_index(), 0);
        tabs.close_tab(0);
        assert_eq!(tabs.tab_count(), 0);
        assert_eq!(tabs.current_query(), None);
    }

    #[test]
    fn events_are_described() {
        assert_eq!(
            describe(&Event::ModeChanged {
                from: Mode::Idle,
                to: Mode::CloseTab
            }),
            "mode    IDLE -> CLOSE_TAB"
        );
        assert_eq!(
            describe(&Event::ActionDispatched(actions::Action::CloseTab(1))),
            "action  close-tab(1)"
        );
        assert_eq!(
            describe(&Event::TabsChanged {
                count: 3,
                current: 0
            }),
            "tabs    0/3"
        );
    }
}
