//! The modal controller: one active mode, the text typed for it, and the
//! actuators that carry out finished commands.

mod key_input;

pub use key_input::{KeyOutcome, KeyPhase};

use actions::{Action, TabActuator, WindowActuator};
use commands::{CommandTable, Key, Mode, ShortcutIndex, DEFAULT_COMMAND_KEY};

use crate::dispatch::{self, DispatchError, FindOptions, FindState, TabState};
use crate::events::{Event, EventBus, FocusOwner};
use crate::input_buffer::InputBuffer;
use crate::offset::OffsetKind;
use crate::snapshot::Snapshot;
use crate::status::status_text;
use crate::transition::{self, Policy, Rejected, TransitionContext};

/// Longest buffer excerpt written to the log.
const LOG_TEXT_LIMIT: usize = 64;

/// Settings the controller reads once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Key that enters COMMAND from IDLE.
    pub command_key: char,
    pub find: FindOptions,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            command_key: DEFAULT_COMMAND_KEY,
            find: FindOptions::default(),
        }
    }
}

/// Owns the modal state and drives the window and tab actuators.
///
/// All mutation goes through key events, transition requests and the focus
/// notifications. Actuators are owned here and receive plain calls, so an
/// action can never re-enter the controller while it is being carried out.
pub struct Controller<W, T> {
    mode: Mode,
    buffer: InputBuffer,
    offset: OffsetKind,
    table: CommandTable,
    shortcuts: ShortcutIndex,
    command_key: char,
    find: FindState,
    window: W,
    tabs: T,
    focus: FocusOwner,
    shortcuts_enabled: bool,
    saved: Option<Snapshot>,
    events: EventBus,
    status: String,
}

impl<W: WindowActuator, T: TabActuator> Controller<W, T> {
    pub fn new(table: CommandTable, options: ControllerOptions, window: W, tabs: T) -> Self {
        let shortcuts = table.shortcut_index();
        tracing::debug!(
            records = table.len(),
            shortcuts = shortcuts.len(),
            command_key = %options.command_key,
            "Modal controller ready"
        );
        Self {
            mode: Mode::Idle,
            buffer: InputBuffer::new(),
            offset: OffsetKind::None,
            table,
            shortcuts,
            command_key: options.command_key,
            find: FindState {
                options: options.find,
                last_text: None,
            },
            window,
            tabs,
            focus: FocusOwner::Content,
            shortcuts_enabled: true,
            saved: None,
            events: EventBus::new(),
            status: String::new(),
        }
    }

    // -- Accessors --

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn offset(&self) -> OffsetKind {
        self.offset
    }

    pub fn focus_owner(&self) -> FocusOwner {
        self.focus
    }

    pub fn shortcuts_enabled(&self) -> bool {
        self.shortcuts_enabled
    }

    pub fn status_text(&self) -> &str {
        &self.status
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn tabs(&self) -> &T {
        &self.tabs
    }

    pub fn find_options(&self) -> FindOptions {
        self.find.options
    }

    /// Register a callback for every [`Event`].
    pub fn subscribe(&mut self, callback: impl FnMut(&Event) + 'static) {
        self.events.subscribe(callback);
    }

    pub fn set_find_options(&mut self, options: FindOptions) {
        self.find.options = options;
    }

    /// Enable or disable idle shortcuts without changing mode.
    pub fn set_shortcuts_enabled(&mut self, enabled: bool) {
        self.set_focus(self.focus, enabled);
    }

    // -- Transitions --

    /// Ask to enter `next`. Rejections are logged, announced as
    /// [`Event::TransitionRejected`], and leave everything unchanged.
    pub fn request_transition(
        &mut self,
        next: Mode,
        policy: Policy,
        origin: Option<Key>,
    ) -> Result<(), Rejected> {
        self.transition_with(next, policy, origin, None)
    }

    /// Like [`Self::request_transition`], with the buffer of the new mode
    /// set to `seed` instead of cleared.
    fn transition_with(
        &mut self,
        next: Mode,
        policy: Policy,
        origin: Option<Key>,
        seed: Option<String>,
    ) -> Result<(), Rejected> {
        let from = self.mode;
        let cx = TransitionContext {
            origin,
            buffer_empty: self.buffer.is_empty(),
            tab_count: self.tabs.tab_count(),
        };
        if let Err(reason) = transition::check(from, next, cx) {
            tracing::warn!(%from, to = %next, "Transition rejected: {}", reason);
            self.events.emit(&Event::TransitionRejected {
                from,
                to: next,
                reason: reason.clone(),
            });
            return Err(reason);
        }

        // Backing out of an empty mode puts its long command on the line.
        let seed = if next == Mode::Command && origin == Some(Key::Backspace) && from != Mode::Idle
        {
            self.table
                .find_by_state(from)
                .map(|record| record.long_cmd().to_string())
        } else {
            seed
        };

        self.enter(next, policy, seed);
        Ok(())
    }

    fn enter(&mut self, next: Mode, policy: Policy, seed: Option<String>) {
        let from = self.mode;
        self.mode = next;
        match seed {
            Some(text) => self.buffer.set(text),
            None => self.buffer.clear(),
        }
        self.offset = OffsetKind::initial(next);
        tracing::debug!(%from, to = %next, ?policy, "Mode changed");
        self.events.emit(&Event::ModeChanged { from, to: next });

        if policy != Policy::None {
            self.setup();
        }
        self.publish_status();

        match policy {
            Policy::Action => self.complete(),
            Policy::Postprocess if next.fires_on_entry() => self.complete(),
            _ => {}
        }
    }

    /// Focus and shortcut state for the mode just entered.
    fn setup(&mut self) {
        match self.mode {
            Mode::Idle => self.set_focus(FocusOwner::Content, true),
            Mode::Find => self.set_focus(FocusOwner::FindBar, false),
            _ => self.set_focus(FocusOwner::CommandLine, false),
        }
        if self.mode == Mode::EditSearch && self.buffer.is_empty() {
            if let Some(query) = self.tabs.current_query() {
                self.buffer.set(query);
            }
        }
    }

    fn set_focus(&mut self, owner: FocusOwner, shortcuts_enabled: bool) {
        if self.focus == owner && self.shortcuts_enabled == shortcuts_enabled {
            return;
        }
        self.focus = owner;
        self.shortcuts_enabled = shortcuts_enabled;
        self.events.emit(&Event::FocusChanged {
            owner,
            shortcuts_enabled,
        });
    }

    /// Dispatch the current mode's action with the buffer as its argument.
    ///
    /// Returns to IDLE afterwards unless the argument failed to parse, in
    /// which case the mode and buffer stay so the user can correct it.
    fn complete(&mut self) {
        let mode = self.mode;
        let tabs = TabState {
            count: self.tabs.tab_count(),
            current: self.tabs.current_index(),
        };
        match dispatch::plan(mode, self.buffer.as_str(), self.offset, tabs, &self.find) {
            Ok(Some(action)) => self.run_action(action),
            Ok(None) => tracing::debug!(%mode, "Nothing to do"),
            Err(DispatchError::NoAction(mode)) => {
                util::debug_panic!("dispatch requested for {mode}, which has no action");
            }
            Err(err) if err.keeps_mode() => {
                let typed = util::truncate_for_log(self.buffer.as_str(), LOG_TEXT_LIMIT);
                tracing::warn!(%mode, buffer = %typed, "Bad argument: {}", err);
                return;
            }
            Err(err) => tracing::warn!(%mode, "Action skipped: {}", err),
        }
        self.return_to_idle();
    }

    fn run_action(&mut self, action: Action) {
        if let Action::Find(request) = &action {
            self.find.last_text = Some(request.text.clone());
        }
        let window_scoped = action.is_window_scoped();
        let before = (self.tabs.tab_count(), self.tabs.current_index());
        tracing::debug!(%action, "Dispatching");
        actions::apply(&action, &mut self.window, &mut self.tabs);
        self.events.emit(&Event::ActionDispatched(action));

        if window_scoped {
            return;
        }
        let (count, current) = (self.tabs.tab_count(), self.tabs.current_index());
        if (count, current) != before {
            self.events.emit(&Event::TabsChanged { count, current });
        }
    }

    fn return_to_idle(&mut self) {
        if self.mode != Mode::Idle {
            self.enter(Mode::Idle, Policy::Setup, None);
        }
    }

    fn publish_status(&mut self) {
        let text = status_text(self.mode, self.offset, self.buffer.as_str());
        if text != self.status {
            self.status = text.clone();
            self.events.emit(&Event::StatusChanged(text));
        }
    }

    // -- Focus snapshot --

    /// Capture the active mode and its pending argument.
    pub fn save(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            pending: self.buffer.as_str().to_string(),
            offset: self.offset,
        }
    }

    /// Re-enter a saved mode with its pending argument, without firing it.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), Rejected> {
        let Snapshot {
            mode,
            pending,
            offset,
        } = snapshot;
        if mode == self.mode {
            self.buffer.set(pending);
            self.setup();
        } else {
            self.transition_with(mode, Policy::Setup, None, Some(pending))?;
        }
        self.offset = offset;
        self.publish_status();
        Ok(())
    }

    /// The window lost focus: park the current command and go quiet.
    pub fn focus_lost(&mut self) {
        if self.saved.is_some() {
            tracing::trace!("Focus lost again, keeping the parked command");
            return;
        }
        let snapshot = self.save();
        tracing::debug!(mode = %snapshot.mode, "Focus lost");
        self.saved = Some(snapshot);
        if self.mode != Mode::Idle {
            self.enter(Mode::Idle, Policy::None, None);
        }
        self.set_focus(self.focus, false);
    }

    /// The window regained focus: bring back whatever was parked.
    pub fn focus_gained(&mut self) {
        let snapshot = self.saved.take().unwrap_or_default();
        tracing::debug!(mode = %snapshot.mode, "Focus gained");
        if let Err(reason) = self.restore(snapshot) {
            tracing::debug!("Saved mode not restored: {}", reason);
            self.setup();
        }
    }
}

impl<W, T> std::fmt::Debug for Controller<W, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("mode", &self.mode)
            .field("buffer", &self.buffer)
            .field("offset", &self.offset)
            .field("focus", &self.focus)
            .field("shortcuts_enabled", &self.shortcuts_enabled)
            .finish_non_exhaustive()
    }
}
