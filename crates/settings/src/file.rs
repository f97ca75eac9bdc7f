//! TOML config file support.
//!
//! Config location: `~/.config/kbrowse/config.toml`

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::defaults::DEFAULT_COMMANDS;

/// Find-bar toggles applied to every find request.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FindConfig {
    pub case_sensitive: bool,
    pub whole_word: bool,
}

/// User-facing config parsed from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Command table files, merged in order. Relative paths resolve against
    /// the config dir.
    pub command_files: Vec<PathBuf>,
    /// Key that enters COMMAND mode from IDLE.
    pub command_key: char,
    /// Whether the menu bar and other chrome are shown.
    pub chrome_visible: bool,
    pub find: FindConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_files: vec![PathBuf::from(constants::commands::DEFAULT_FILE)],
            command_key: constants::commands::DEFAULT_COMMAND_KEY,
            chrome_visible: true,
            find: FindConfig::default(),
        }
    }
}

impl Config {
    /// Replace values that cannot work with their defaults.
    pub fn validated(mut self) -> Self {
        if self.command_key.is_whitespace() || self.command_key.is_control() {
            tracing::warn!(
                "command-key {:?} cannot be typed, using {:?}",
                self.command_key,
                constants::commands::DEFAULT_COMMAND_KEY
            );
            self.command_key = constants::commands::DEFAULT_COMMAND_KEY;
        }
        if self.command_files.len() > constants::commands::MAX_FILES {
            tracing::warn!(
                "{} command files configured, only the first {} are loaded",
                self.command_files.len(),
                constants::commands::MAX_FILES
            );
            self.command_files.truncate(constants::commands::MAX_FILES);
        }
        self
    }

    /// Command files as absolute paths.
    pub fn command_file_paths(&self) -> Vec<PathBuf> {
        self.command_files
            .iter()
            .map(|name| kbrowse_paths::resolve_command_file(name))
            .collect()
    }
}

/// Default config file content with comments (generated on first launch).
const DEFAULT_CONFIG: &str = r#"# kbrowse configuration

# Command tables, merged in order. Relative paths are resolved against this
# directory. Later files may add commands but not redefine a Key, LongCmd or
# shortcut from an earlier one.
command-files = ["commands.json"]

# Key that opens the command line from idle mode
command-key = ":"

# Show the menu bar (toggle-chrome updates this)
chrome-visible = true

[find]
# case-sensitive = false
# whole-word = false
"#;

/// Return the config file path.
pub fn config_path() -> PathBuf {
    kbrowse_paths::config_file()
}

/// Ensure the config file exists, creating a default if missing.
/// Returns the path to the config file.
pub fn ensure_config_file() -> Option<PathBuf> {
    ensure_config_file_at(&config_path())
}

/// [`ensure_config_file`] for an explicit path.
pub fn ensure_config_file_at(path: &Path) -> Option<PathBuf> {
    write_if_missing(path, DEFAULT_CONFIG, "config")
}

/// Ensure the built-in command table exists in the config dir.
pub fn ensure_commands_file() -> Option<PathBuf> {
    ensure_commands_file_at(&kbrowse_paths::commands_file())
}

/// [`ensure_commands_file`] for an explicit path.
pub fn ensure_commands_file_at(path: &Path) -> Option<PathBuf> {
    write_if_missing(path, DEFAULT_COMMANDS, "command table")
}

fn write_if_missing(path: &Path, content: &str, what: &str) -> Option<PathBuf> {
    if !path.exists() {
        let parent = path.parent()?;
        std::fs::create_dir_all(parent).ok()?;
        std::fs::write(path, content).ok()?;
        tracing::info!("Created default {} at {:?}", what, path);
    }
    Some(path.to_path_buf())
}

/// Load and parse the config file. Returns default on any error.
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Config {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read config: {}", e);
            }
            return Config::default();
        }
    };

    // Size guard
    if content.len() > constants::config::MAX_FILE_SIZE as usize {
        tracing::warn!(
            "Config file too large ({} bytes), using defaults",
            content.len()
        );
        return Config::default();
    }

    match toml::from_str::<Config>(&content) {
        Ok(cfg) => cfg.validated(),
        Err(e) => {
            tracing::warn!("Failed to parse config.toml: {}", e);
            Config::default()
        }
    }
}

/// Persist menu bar visibility (preserving comments/formatting).
pub fn save_chrome_visible(visible: bool) {
    save_chrome_visible_at(&config_path(), visible);
}

/// [`save_chrome_visible`] for an explicit path.
pub fn save_chrome_visible_at(path: &Path, visible: bool) {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    let mut doc = match content.parse::<toml_edit::DocumentMut>() {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("Not saving chrome visibility, config does not parse: {}", e);
            return;
        }
    };

    doc["chrome-visible"] = toml_edit::value(visible);

    if let Err(e) = std::fs::write(path, doc.to_string()) {
        tracing::warn!("Failed to save chrome visibility: {}", e);
    }
}
