mod command;
mod config;
mod rates;
mod session;
mod shell;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Interactive currency converter. Type an amount to convert it with the
/// active pair, or 'help' for the command list.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Override the defaults-file location. When omitted, the per-user
    /// config directory is used, so plain invocation needs no flags.
    #[arg(long, value_name = "PATH")]
    defaults_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let defaults = match args.defaults_file {
        Some(path) => config::DefaultsFile::at(path),
        None => config::DefaultsFile::per_user()?,
    };
    let pair = defaults.load();

    let mut shell = shell::Shell::new(pair, defaults, rates::CdnRateClient::new());
    shell.run().await
}
