//! Centralized configuration constants for kbrowse.

/// Config file validation limits.
pub mod config {
    /// Maximum config file size in bytes (64 KB).
    /// Config files should be tiny; anything larger is suspicious.
    pub const MAX_FILE_SIZE: u64 = 64 * 1024;
}

/// Command table files.
pub mod commands {
    /// File name of the built-in command table inside the config dir.
    pub const DEFAULT_FILE: &str = "commands.json";

    /// Upper bound on `command-files` entries; extra entries are dropped.
    pub const MAX_FILES: usize = 32;

    /// The key that enters COMMAND mode unless configured otherwise.
    pub const DEFAULT_COMMAND_KEY: char = ':';
}
