//! kbrowse build automation tasks.
//!
//! Usage: `cargo xtask <command>`

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::CommandTable;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(|s| s.as_str()) {
        Some("check-commands") => check_commands(&args[1..]),
        Some("print-default-commands") => {
            print!("{}", settings::DEFAULT_COMMANDS);
            ExitCode::SUCCESS
        }
        Some(cmd) => {
            eprintln!("Unknown command: {cmd}");
            print_help();
            ExitCode::FAILURE
        }
        None => {
            print_help();
            ExitCode::SUCCESS
        }
    }
}

/// Load the files as one merged table, the way the browser does at startup.
fn check_commands(files: &[String]) -> ExitCode {
    if files.is_empty() {
        eprintln!("Usage: cargo xtask check-commands <file>...");
        return ExitCode::FAILURE;
    }
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    match CommandTable::load(&paths) {
        Ok(table) => {
            for record in table.iter() {
                let shortcut = record
                    .shortcut()
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                println!(
                    "{:<16} {:<18} {:<10} :{}",
                    record.key(),
                    record.mode().name(),
                    shortcut,
                    record.long_cmd()
                );
            }
            println!("{} commands OK", table.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("kbrowse xtask");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    check-commands <file>...    Load and validate command files");
    println!("    print-default-commands      Print the built-in command table");
}
