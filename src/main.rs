use anyhow::Result;

use chess_standings::cli::Command;
use chess_standings::{
    handle_completions, handle_import, handle_parse, handle_rankings, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Parse { file } => handle_parse(file),
        Command::Import { file } => handle_import(file),
        Command::Rankings { limit, json } => handle_rankings(limit.as_deref(), *json),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
