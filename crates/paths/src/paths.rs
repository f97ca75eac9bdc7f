//! Centralized path management for kbrowse.
//!
//! All application directories are lazily initialized and cached.
//! Call [`set_config_dir`] before first access to point them elsewhere.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();
static LOGS_DIR: OnceLock<PathBuf> = OnceLock::new();

/// ~/.config/kbrowse (or platform equivalent)
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kbrowse")
    })
}

/// ~/Library/Logs/kbrowse (or platform equivalent)
pub fn logs_dir() -> &'static PathBuf {
    LOGS_DIR.get_or_init(|| {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Library")
                .join("Logs")
                .join("kbrowse")
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("kbrowse")
                .join("logs")
        }
    })
}

/// Override config dir. Returns false if it was already read.
pub fn set_config_dir(path: PathBuf) -> bool {
    CONFIG_DIR.set(path).is_ok()
}

/// Config file path: config_dir()/config.toml
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Built-in command table path: config_dir()/commands.json
pub fn commands_file() -> PathBuf {
    config_dir().join("commands.json")
}

/// Resolve a command file named in the config.
///
/// Absolute paths are kept; relative ones are taken relative to the config dir.
pub fn resolve_command_file(name: &Path) -> PathBuf {
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        config_dir().join(name)
    }
}
