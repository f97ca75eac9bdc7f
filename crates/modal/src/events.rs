//! Notifications for whoever draws the browser around the controller.
//!
//! Events are delivered synchronously, in the order the state changes
//! happen, to every subscriber.

use actions::Action;
use commands::Mode;

use crate::transition::Rejected;

/// Which part of the window receives typed keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusOwner {
    /// The web page.
    #[default]
    Content,
    /// The `:` status line.
    CommandLine,
    /// The find bar.
    FindBar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ModeChanged { from: Mode, to: Mode },
    TransitionRejected { from: Mode, to: Mode, reason: Rejected },
    FocusChanged { owner: FocusOwner, shortcuts_enabled: bool },
    ActionDispatched(Action),
    TabsChanged { count: usize, current: usize },
    StatusChanged(String),
}

type Callback = Box<dyn FnMut(&Event)>;

/// Ordered list of subscriber callbacks.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Callback>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Event) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn emit(&mut self, event: &Event) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
