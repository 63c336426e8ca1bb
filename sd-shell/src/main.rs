//! sd-shell - Stratdeck interactive dashboard shell
//!
//! Stands in for the presentation layer: a REPL whose commands drive the
//! session store, navigation policy, strategy catalog, portfolio store and
//! monitoring state.
//!
//! ```bash
//! sd-shell
//! sd> login admin password
//! sd:admin> menu
//! sd:admin> go /admin/audit
//! ```

mod app;
mod command;
mod error;
mod logger;

#[cfg(test)]
mod tests;

use crate::app::App;
use crate::command::Command;
use crate::error::ShellError;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

#[derive(Parser)]
#[command(name = "sd-shell")]
#[command(about = "Stratdeck trading-strategy dashboard shell")]
#[command(version)]
struct Cli {
    /// Log level override (off|error|warn|info|debug|trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable colored log output
    #[arg(long)]
    plain: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = match sd_config::Config::load().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let level = match cli.log_level.as_deref() {
        // Unknown values fall back to the configured level
        Some(s) => s.parse().unwrap_or(config.logging.level),
        None => config.logging.level,
    };

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = match resolve_log_file(&config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let colored = config.logging.colored && !cli.plain;
    if let Err(e) = logger::initialize(level, log_file_path, colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    info!("Starting sd-shell v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut app = App::new(config);
    run_repl(&mut app)
}

fn resolve_log_file(config: &sd_config::Config) -> Result<Option<PathBuf>, ShellError> {
    let Some(ref filename) = config.logging.file else {
        return Ok(None);
    };

    let config_dir = sd_config::Config::config_dir()?;
    let log_dir = config_dir.join(&config.logging.dir);
    std::fs::create_dir_all(&log_dir).map_err(|e| ShellError::Logger {
        message: format!("Failed to create log directory {}: {}", log_dir.display(), e),
    })?;

    Ok(Some(log_dir.join(filename)))
}

fn run_repl(app: &mut App) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error: failed to start line editor: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Stratdeck shell. Type 'help' for commands, 'quit' to exit.");

    loop {
        match editor.readline(&app.prompt()) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match Command::parse(line) {
                    Ok(Command::Quit) => return ExitCode::SUCCESS,
                    Ok(command) => match app.dispatch(command) {
                        Ok(output) if output.is_empty() => {}
                        Ok(output) => println!("{output}"),
                        Err(e) => eprintln!("Error: {e}"),
                    },
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
}
