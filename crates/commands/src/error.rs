use std::path::PathBuf;

use crate::keys::ShortcutError;

/// Why a command table could not be built. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no command files given")]
    NoFiles,

    #[error("failed to read command file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("command file {path:?} is too large ({size} bytes, limit {limit})")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("failed to parse command file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid record {entry} in {path:?}: {source}")]
    InvalidRecord {
        path: PathBuf,
        entry: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("record stored under {entry:?} in {path:?} declares Key {key:?}")]
    KeyMismatch {
        path: PathBuf,
        entry: String,
        key: String,
    },

    #[error("record {key:?} in {path:?} has unknown State {state:?}")]
    UnknownState {
        path: PathBuf,
        key: String,
        state: String,
    },

    #[error("record {key:?} in {path:?} has invalid Shortcut {spec:?}: {source}")]
    InvalidShortcut {
        path: PathBuf,
        key: String,
        spec: String,
        #[source]
        source: ShortcutError,
    },

    #[error("record {key:?} in {path:?} binds the reserved command key {spec:?}")]
    ReservedShortcut {
        path: PathBuf,
        key: String,
        spec: String,
    },

    #[error("duplicate command Key {key:?} (in {first:?} and {second:?})")]
    DuplicateKey {
        key: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("records {first:?} and {second:?} share LongCmd {long_cmd:?}")]
    DuplicateLongCommand {
        long_cmd: String,
        first: String,
        second: String,
    },

    #[error("records {first:?} and {second:?} share Shortcut {shortcut}")]
    DuplicateShortcut {
        shortcut: String,
        first: String,
        second: String,
    },
}
