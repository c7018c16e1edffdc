//! mesa - terminal client for the restaurant reservations API

mod cli;
mod commands;
mod logger;
mod output;

use std::process::ExitCode;

use clap::Parser;
use mesa_client::ClientConfig;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // .env before clap so its values feed the env-bound arguments
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.log_json)?;

    let config = ClientConfig::new(cli.api_url).with_timeout(cli.timeout);
    tracing::debug!(base_url = %config.base_url, timeout = config.timeout, "configuration loaded");
    let http = config.build_http_client()?;

    let ok = match cli.command {
        Command::Restaurants(cmd) => commands::restaurants(http, cmd).await,
        Command::Reservations(cmd) => commands::reservations(http, cmd).await,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
