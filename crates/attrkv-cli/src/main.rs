use std::io;

use attrkv_store::InMemoryAttributeStore;
use clap::Parser;

mod cli;
mod config;
mod render;
mod session;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = config::ShellConfig::resolve(&cli)?;

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.level()?
    };
    // Replies go to stdout; keep diagnostics off it.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    tracing::debug!(?config, "starting shell");

    let store = InMemoryAttributeStore::new();
    let session = session::Session::new(&store, config);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
