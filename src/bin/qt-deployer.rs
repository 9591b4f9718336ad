use anyhow::Result;
use clap::Parser;
use qt_deployer::cli::{self, DeployCli};
use tracing::info;

fn main() -> Result<()> {
    let cli = DeployCli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("starting qt-deployer v{}", env!("CARGO_PKG_VERSION"));

    cli::run(&cli)
}
