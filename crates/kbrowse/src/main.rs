//! kbrowse - keyboard-driven browser shell
//!
//! Headless entry point: loads the config and command tables, then replays a
//! key script (a file argument, or stdin) through the modal controller and
//! prints every event it raises.

mod headless;

use actions::TabActuator;
use anyhow::{Context, Result};
use commands::CommandTable;
use headless::{HeadlessTabs, HeadlessWindow};
use modal::{Controller, ControllerOptions, FindOptions};
use once_cell::sync::Lazy;
use std::io::Read;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, error, info};

/// Application startup time for performance monitoring
static STARTUP_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// Create the config and log directories. `KBROWSE_CONFIG_DIR` moves the
/// config dir.
fn init_paths() -> Result<()> {
    if let Some(dir) = std::env::var_os("KBROWSE_CONFIG_DIR") {
        kbrowse_paths::set_config_dir(dir.into());
    }
    let config_dir = kbrowse_paths::config_dir();
    let logs_dir = kbrowse_paths::logs_dir();

    std::fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs directory: {:?}", logs_dir))?;

    debug!(
        "Initialized paths - config: {:?}, logs: {:?}",
        config_dir, logs_dir
    );
    Ok(())
}

/// Check if debug mode is enabled via environment variable.
fn is_debug_mode() -> bool {
    std::env::var("KBROWSE_DEBUG").is_ok()
}

/// Initialize the logging system. Logs go to stderr so stdout stays the
/// event stream.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if is_debug_mode() {
        "kbrowse=trace,modal=trace,info"
    } else {
        "kbrowse=info,warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    if is_debug_mode() {
        info!(
            "kbrowse v{} starting up (DEBUG MODE ENABLED)",
            env!("CARGO_PKG_VERSION")
        );
        info!("Set RUST_LOG for custom log levels, e.g. RUST_LOG=modal=trace");
    } else {
        info!("kbrowse v{} starting up", env!("CARGO_PKG_VERSION"));
    }
}

/// Read the key script from the first argument, or stdin when absent or `-`.
fn read_script() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read script: {path}")),
        _ => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read script from stdin")?;
            Ok(script)
        }
    }
}

fn run() -> Result<()> {
    settings::ensure_config_file();
    let config = settings::load_config();
    settings::ensure_commands_file();

    let table = CommandTable::load_with_command_key(&config.command_file_paths(), config.command_key)
        .context("Failed to load command tables")?;
    info!("Loaded {} commands in {:?}", table.len(), STARTUP_TIME.elapsed());

    let options = ControllerOptions {
        command_key: config.command_key,
        find: FindOptions {
            case_sensitive: config.find.case_sensitive,
            whole_word: config.find.whole_word,
        },
    };
    let window = HeadlessWindow::new(config.chrome_visible, true);
    let mut controller = Controller::new(table, options, window, HeadlessTabs::new());
    controller.subscribe(|event| println!("{}", headless::describe(event)));

    let inputs = headless::parse_script(&read_script()?)?;
    for input in inputs {
        headless::feed(&mut controller, input);
        if controller.window().quit_requested() {
            info!("Quit requested");
            break;
        }
    }

    for (index, page) in controller.tabs().pages().iter().enumerate() {
        let marker = if index == controller.tabs().current_index() {
            '*'
        } else {
            ' '
        };
        println!("{marker}{index} {}", page.address());
    }
    debug!(chrome_visible = controller.window().chrome_visible(), "Replay done");
    Ok(())
}

fn main() -> ExitCode {
    let _ = *STARTUP_TIME;

    init_logging();

    if let Err(e) = init_paths() {
        error!("Failed to initialize paths: {}", e);
    }

    match run() {
        Ok(()) => {
            debug!("Finished in {:?}", STARTUP_TIME.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
