//! Configuration system for kbrowse.
//!
//! Provides compile-time constants, the TOML config file and the built-in
//! command table written on first launch.

pub mod constants;
pub mod defaults;
pub mod file;

pub use defaults::DEFAULT_COMMANDS;
pub use file::{
    config_path, ensure_commands_file, ensure_commands_file_at, ensure_config_file,
    ensure_config_file_at, load_config, load_config_from, save_chrome_visible,
    save_chrome_visible_at, Config, FindConfig,
};
