use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use site_server::config::{load_config, SiteConfig};
use site_server::lifecycle::{signals, Shutdown};
use site_server::observability::logging;
use site_server::HttpServer;

#[derive(Parser)]
#[command(name = "site-server")]
#[command(about = "Personal website server", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!("site-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        template_dir = %config.content.template_dir,
        static_dir = %config.content.static_dir,
        static_url_prefix = %config.content.static_url_prefix,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    signals::spawn(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
