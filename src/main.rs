use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use todo_tui::core::config::{self, CliOverrides};
use todo_tui::tui;

#[derive(Parser)]
#[command(name = "todo-tui", about = "A small todo list for the terminal")]
struct Args {
    /// Config file to read instead of ~/.todo-tui/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty list instead of the demo items
    #[arg(long)]
    empty: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("todo-tui: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            empty: args.empty,
        },
    );

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("todo-tui starting up with config: {:?}", resolved);

    match tui::run(&resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("todo-tui: {e}");
            ExitCode::FAILURE
        }
    }
}
