use anyhow::Context;
use clap::Parser;
use sat_config::SatConfig;
use sat_server::{AppState, build_router, extract_and_save, stats};

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("satwatch error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => SatConfig::load_from(path),
        None => SatConfig::load_with_dotenv(),
    }
    .context("failed to load configuration")?;

    if !config.spacetrack.is_configured() {
        tracing::warn!(
            "Space-Track credentials are not configured; set SPACE_TRACK_USERNAME and SPACE_TRACK_PASSWORD"
        );
    }

    match cli.command {
        cli::Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        cli::Commands::Extract { output_dir } => {
            if let Some(dir) = output_dir {
                config.output.root_dir = dir;
            }
            let outcome = extract_and_save(&config)
                .await
                .context("extraction failed")?;
            println!("{}", stats::render(&outcome));
            Ok(())
        }
    }
}

async fn serve(config: SatConfig) -> anyhow::Result<()> {
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "satwatch listening");

    axum::serve(listener, build_router(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SATWATCH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
