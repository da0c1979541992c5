use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use homeflow::format_diagnostics;
use homeflow::Config;
use homeflow::Diagnostic;
use homeflow::Home;
use homeflow::SystemClock;

/// Smart-home demo server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file to load; repeat to layer several files
    #[arg(short, long = "config", value_name = "FILE")]
    config: Vec<PathBuf>,

    /// Address to listen on, overriding `http.listen`
    #[arg(long, value_name = "ADDR")]
    listen: Option<String>,

    /// Port to listen on, overriding `http.port`
    #[arg(long)]
    port: Option<u16>,
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = if args.config.is_empty() {
        Config::default()
    } else {
        let (config, diagnostics) = Config::from_files(&args.config)?;
        if !diagnostics.is_empty() {
            eprint!("{}", format_diagnostics(&diagnostics));
        }
        config
    };

    if let Some(listen) = &args.listen {
        config.http.listen = listen.clone();
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    let errors: Vec<Diagnostic> = config
        .validate()
        .into_iter()
        .map(Diagnostic::from)
        .collect();
    if !errors.is_empty() {
        anyhow::bail!("{}", format_diagnostics(&errors));
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args).context("Invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.env_filter())
        .init();

    tracing::info!("homeflow {} starting", env!("CARGO_PKG_VERSION"));
    for path in &args.config {
        tracing::info!("Loaded config from: {}", path.display());
    }

    let home = Arc::new(Home::new(&config, Arc::new(SystemClock)));
    home.start().await;

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C"),
            Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
        }
        shutdown_tx.send(()).ok();
    });

    let result = homeflow::api::serve(config.http.clone(), Arc::clone(&home), shutdown_rx).await;

    home.shutdown().await;
    tracing::info!("homeflow stopped");

    result
}
