//! # edgeviz
//!
//! Entry point: install tracing, parse the command line, dispatch.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use edgeviz::cli::Cli;
use edgeviz::commands::execute_command;

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    execute_command(cli.command)
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
