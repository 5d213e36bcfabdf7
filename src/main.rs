//! Todofile server binary.

use clap::Parser;
use std::process;
use todofile::cli::Cli;
use todofile::server;
use todofile::storage::TodoStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        "todofile {} (built {}, commit {})",
        env!("CARGO_PKG_VERSION"),
        env!("TODOFILE_BUILD_TIMESTAMP"),
        env!("TODOFILE_GIT_COMMIT"),
    );

    // The backing file must exist before the listener accepts connections.
    let store = TodoStore::new(&cli.file);
    if let Err(e) = store.ensure_initialized() {
        eprintln!(
            "Error: failed to initialize todo file {}: {}",
            cli.file.display(),
            e
        );
        process::exit(1);
    }
    tracing::info!("todo collection backed by {}", cli.file.display());

    if let Err(e) = server::start_server(store, cli.port, &cli.host).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
