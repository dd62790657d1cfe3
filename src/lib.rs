pub mod api;
pub mod bot;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::api::RiotClient;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::ChampionCatalog;
use crate::services::catalog::CatalogService;
use crate::services::live_game::{log_failure, LiveGameService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(handle: &str) -> Result<()> {
    let config = AppConfig::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = build_live_game_service(&config).await?;
        match service.report(handle).await {
            Ok(report) => {
                println!("{}", report);
                Ok(())
            }
            Err(err) => {
                log_failure(handle, &err);
                anyhow::bail!("{}", err.user_message())
            }
        }
    })
}

pub fn handle_listen() -> Result<()> {
    let config = AppConfig::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = build_live_game_service(&config).await?;
        bot::console::run(&service).await?;
        Ok(())
    })
}

pub fn handle_champions() -> Result<()> {
    let config = AppConfig::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let snapshot = CatalogService::new(&config)?
            .load()
            .await
            .context("Failed to load champion catalog")?;

        println!("Patch {} ({} champions)", snapshot.version, snapshot.champions.len());
        for champion in &snapshot.champions {
            println!("{:>4}  {}", champion.id, champion.name);
        }
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

/// Catalog first (fatal on failure), then the game API client
async fn build_live_game_service(config: &AppConfig) -> Result<LiveGameService<RiotClient>> {
    let api_key = config.require_api_key()?;

    let catalog = load_catalog(config).await?;
    let client = RiotClient::new(&config.riot, api_key)?;

    Ok(LiveGameService::new(client, catalog, config))
}

async fn load_catalog(config: &AppConfig) -> Result<Arc<ChampionCatalog>> {
    let snapshot = CatalogService::new(config)?
        .load()
        .await
        .context("Failed to load champion catalog")?;
    info!("Champion catalog ready (patch {})", snapshot.version);

    Ok(Arc::new(snapshot.into_catalog()))
}
