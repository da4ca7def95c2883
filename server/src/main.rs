use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use todo_server::config::{load_config, validate_config};
use todo_server::{observability, AppState};

#[derive(Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory todo CRUD service", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the file and PORT.
    #[arg(short, long)]
    bind: Option<String>,

    /// Log filter directives, overriding the file.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Ok(port) = std::env::var("PORT") {
        config.listener.bind_address = format!("127.0.0.1:{port}");
    }
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    validate_config(&config)?;

    observability::init_logging(&config.logging)?;
    tracing::info!(
        bind_address = %config.listener.bind_address,
        duplicate_ids = ?config.store.duplicate_ids,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    todo_server::run(listener, AppState::in_memory(config.store.duplicate_ids)).await?;
    Ok(())
}
