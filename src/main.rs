use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clickforge::{server, Cli, Clicker, EnigoEmitter};

fn init_logging(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn print_banner(cli: &Cli) {
    info!("--- Welcome to ClickForge Server ---");
    info!("To access the user interface, open your web browser and go to:");
    info!("http://127.0.0.1:{}", cli.port);
    info!("From a phone or another device on the same network, use this computer's local IP address,");
    info!("for example http://192.168.1.10:{}", cli.port);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    // No clicking is possible without an input backend; bail out before serving.
    let emitter = EnigoEmitter::new().context("mouse control is unavailable")?;
    let clicker = Arc::new(Clicker::with_config(Arc::new(emitter), cli.interval()));

    print_banner(&cli);
    server::serve(&cli.server(), clicker).await
}
