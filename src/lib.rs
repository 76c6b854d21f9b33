pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod parser;
pub mod ranking;
pub mod services;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::api::parsers::coerce_limit;
use crate::cli::Command;
use crate::config::AppConfig;
use crate::database::SqliteRepository;
use crate::services::{ImportService, RankingService, ServerService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_port(port);
        let service = ServerService::new(config);
        service.run().await
    })
}

pub fn handle_parse(file: &Path) -> Result<()> {
    let (file_name, bytes) = read_upload(file)?;
    let record = parser::TournamentParser::new(&file_name).parse(&bytes)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub fn handle_import(file: &Path) -> Result<()> {
    let config = AppConfig::new();
    let (file_name, bytes) = read_upload(file)?;
    let repository = SqliteRepository::open(&config.storage.database_path)?;

    let (summary, _) = ImportService::new(&repository).import(&file_name, &bytes)?;
    output::print_import_summary(&file_name, &summary);
    Ok(())
}

pub fn handle_rankings(limit: Option<&str>, json: bool) -> Result<()> {
    let config = AppConfig::new();
    let repository = SqliteRepository::open(&config.storage.database_path)?;
    let limit = coerce_limit(limit, config.ranking.default_limit);

    let rankings = RankingService::new(&repository, &config.ranking).rankings(limit)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rankings)?);
    } else {
        output::print_rankings(&rankings);
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn read_upload(file: &Path) -> Result<(String, Vec<u8>)> {
    let bytes = std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    Ok((file_name, bytes))
}
