use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use toolshelf::catalog::Catalog;
use toolshelf::server::{AppContext, HttpServer};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::{Config, PORT_ENV};

fn resolve_log_path(log_file: &Path) -> PathBuf {
    if log_file.is_absolute() {
        return log_file.to_path_buf();
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolshelf")
        .join("logs")
        .join(log_file)
}

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    if let Some(log_file) = &config.log_file {
        let log_path = resolve_log_path(log_file);
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent).context("Failed to create log directory")?;
        }

        let target = Box::new(
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .context("Failed to open log file")?,
        );
        builder.target(env_logger::Target::Pipe(target));
        builder.init();
        info!("Logging initialized, writing to: {}", log_path.display());
    } else {
        builder.init();
        info!("Logging initialized, writing to stderr");
    }

    Ok(())
}

async fn run_application(cli: &Cli, command: &Commands, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match command {
        Commands::Serve { .. } => handle_serve_command(config).await,
        Commands::Catalog { category } => handle_catalog_command(category.as_deref()),
    }
}

async fn handle_serve_command(config: &Config) -> Result<()> {
    let server_config = config.http_server_config();
    let server = HttpServer::bind(&server_config)
        .await
        .with_context(|| format!("Failed to bind {}", server_config.bind_address()))?;

    let port = server.local_addr().context("Failed to read bound address")?.port();
    let ctx = AppContext::new();
    info!("Serving {} tools", ctx.tools_count());

    println!("{} Server running on port {}", "✅".green(), port.to_string().bold());
    println!("{} Health check: http://localhost:{}/health", "🩺".cyan(), port);
    println!("{} Tools API: http://localhost:{}/api/tools", "🧠".cyan(), port);
    println!("{} Favorites API: http://localhost:{}/api/favorites", "⭐".cyan(), port);

    server.run(ctx).await.context("Server failed")?;

    println!("{}", "Server stopped".yellow());
    Ok(())
}

fn handle_catalog_command(category: Option<&str>) -> Result<()> {
    info!("Listing catalog (category: {:?})", category);
    let catalog = Catalog::seeded();
    let tools = catalog.list(category);

    if tools.is_empty() {
        println!("{}", "No tools found".yellow());
        return Ok(());
    }

    for tool in tools {
        println!(
            "{:>3}  {:<12} {:<8} {}",
            tool.id.to_string().bold(),
            tool.name.green(),
            tool.category.cyan(),
            tool.url
        );
        println!("     {}", tool.excerpt);
        if !tool.tags.is_empty() {
            println!("     {}", tool.tags.join(", ").dimmed());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let command = cli.command.clone().unwrap_or_default();
    if let Commands::Serve { host, port, log_file } = &command {
        config
            .apply_env_port(env::var(PORT_ENV).ok().as_deref())
            .context("Failed to apply environment overrides")?;
        config.apply_cli_overrides(host.as_deref(), *port, log_file.as_ref());
    }

    // Setup logging once the log destination is known
    setup_logging(&config, cli.is_verbose()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &command, &config)
        .await
        .context("Application failed")?;

    Ok(())
}
