//
//  insightly-rs
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use insightly::auth::resolve_api_key;
use insightly::smoke::{self, SmokeReport};
use insightly::{exit_codes, Config, InsightlyClient};

/// Runs live read, write and delete calls against an Insightly account
#[derive(Parser, Debug)]
#[command(
    name = "insightly-smoke",
    version,
    about = "Smoke-test the Insightly API with your API key",
    after_help = "The run creates and deletes its own test records.\n\
                  Set INSIGHTLY_LOG=debug to see every request."
)]
struct Args {
    /// Insightly API key
    #[arg(env = "INSIGHTLY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    let args = Args::parse();

    match run(args).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("INSIGHTLY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

async fn run(args: Args) -> Result<i32> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let Some(api_key) = resolve_api_key(args.api_key, config.client.api_key.clone()) else {
        print_usage();
        return Ok(exit_codes::USAGE);
    };

    let client = InsightlyClient::from_config(&config.client, api_key.as_str())
        .context("Failed to create Insightly client")?;

    let mut report = SmokeReport::new();
    smoke::run(&client, &mut report).await;

    println!();
    println!("{}", style(report.summary()).bold());
    Ok(report.exit_code())
}

fn print_usage() {
    eprintln!("usage: insightly-smoke <API_KEY>");
    eprintln!();
    eprintln!("The key must be non-empty and contain no whitespace.");
    eprintln!();
    eprintln!("The key can also come from INSIGHTLY_API_KEY or `api_key` in the config file.");
}
