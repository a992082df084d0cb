//! CLI entrypoint for the IMS assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use ims_application::{InventoryRepository, RunChatUseCase, ToolExecutorPort};
use ims_infrastructure::{
    ConfigLoader, FileConfig, GeminiToolSchemaConverter, GeminiTransport, InMemoryInventoryStore,
    InventoryToolExecutor,
};
use ims_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, create_router};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    info!("Starting IMS assistant");

    // === Dependency Injection ===
    let store: Arc<dyn InventoryRepository> = Arc::new(build_store(&config)?);
    let executor = Arc::new(InventoryToolExecutor::new(store));

    if cli.command == Command::Tools {
        print!("{}", ConsoleFormatter::format_catalog(executor.tool_spec()));
        return Ok(());
    }

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.gemini.timeout_seconds))
        .build()
        .context("Failed to create HTTP client")?;
    let transport = Arc::new(GeminiTransport::new(
        http_client,
        config.gemini.api_url.clone(),
        config.gemini.resolve_api_key(),
    ));

    let use_case = RunChatUseCase::new(transport, executor, Arc::new(GeminiToolSchemaConverter))
        .with_execution_params(config.chat.to_execution_params());

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            serve(Arc::new(use_case), &bind).await
        }
        Command::Ask { message } => {
            let outcome = if cli.quiet {
                use_case
                    .execute(&message, &ims_application::NoChatProgress)
                    .await
            } else {
                use_case.execute(&message, &ProgressReporter::new()).await
            };
            print!("{}", ConsoleFormatter::format_outcome(&outcome));
            Ok(())
        }
        Command::Tools => Ok(()),
    }
}

fn build_store(config: &FileConfig) -> Result<InMemoryInventoryStore> {
    let store = match &config.inventory.seed_file {
        Some(path) => InMemoryInventoryStore::from_json_file(path)?,
        None => InMemoryInventoryStore::with_sample_data()?,
    };
    Ok(store)
}

async fn serve(use_case: Arc<RunChatUseCase>, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!("Listening on {}", listener.local_addr()?);

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => signal_token.cancel(),
            Err(e) => warn!("Failed to listen for ctrl-c: {}", e),
        }
    });

    axum::serve(listener, create_router(use_case))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Server stopped");
    Ok(())
}
