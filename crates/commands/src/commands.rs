//! Command table for kbrowse.
//!
//! Maps symbolic command names, idle-mode keyboard shortcuts and `:` long
//! commands onto controller [`Mode`]s. Tables are loaded from JSON files at
//! startup:
//!
//! ```json
//! [
//!   { "Key": "close", "Name": "Close tab", "State": "CLOSE_TAB",
//!     "Shortcut": "c", "LongCmd": "close-tab", "Help": "Close tab INDEX" }
//! ]
//! ```
//!
//! - **[`mode`]**: the closed `Mode` enumeration
//! - **[`keys`]**: key events, modifiers and shortcut codes
//! - **[`record`]**: `CommandRecord`
//! - **[`table`]**: `CommandTable` loading/merging and the `ShortcutIndex`

pub mod error;
pub mod keys;
pub mod mode;
pub mod record;
pub mod table;

pub use error::LoadError;
pub use keys::{Key, KeyEvent, Modifiers, Shortcut, ShortcutError};
pub use mode::{Mode, UnknownMode};
pub use record::CommandRecord;
pub use table::{
    CommandTable, ShortcutIndex, TableBuilder, DEFAULT_COMMAND_KEY, MAX_COMMAND_FILE_SIZE,
};
