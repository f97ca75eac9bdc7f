//! Modal, keyboard-driven command engine for kbrowse.
//!
//! The [`Controller`] holds exactly one active [`Mode`](commands::Mode).
//! Key events either trigger a mode directly (idle shortcuts, `:`), add to
//! the [`InputBuffer`], or complete the mode, at which point the argument is
//! turned into an [`Action`](actions::Action) and handed to the window or
//! tab actuator.
//!
//! - **[`transition`]**: which mode changes are allowed
//! - **[`controller`]**: the state machine and key processing
//! - **[`dispatch`]**: argument parsing and action planning
//! - **[`resolver`]**: `:` line matching
//! - **[`offset`]**: relative tab offsets with wraparound
//! - **[`events`]**: notifications for the front end

pub mod controller;
pub mod dispatch;
pub mod events;
pub mod input_buffer;
pub mod offset;
pub mod resolver;
pub mod snapshot;
pub mod status;
pub mod transition;

pub use controller::{Controller, ControllerOptions, KeyOutcome, KeyPhase};
pub use dispatch::{DispatchError, FindOptions, TabState};
pub use events::{Event, FocusOwner};
pub use input_buffer::InputBuffer;
pub use offset::{wrap_index, OffsetKind};
pub use resolver::{resolve, Resolution};
pub use snapshot::Snapshot;
pub use status::status_text;
pub use transition::{Policy, Rejected};
