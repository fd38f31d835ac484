// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use anyhow::Context;
use gnfinder::client::Finder;
use gnfinder::config::load_and_validate_config;
use tracing_subscriber::EnvFilter;

fn usage(program: &str) {
    eprintln!("Usage: {} <config.yaml> <input_text>", program);
    eprintln!("       {} <config.yaml> --ping", program);
    eprintln!("       {} <config.yaml> --version", program);
    eprintln!("Example: {} configs/grpc.yaml \"Pardosa moesta is a spider\"", program);
}

/// argv[0], or the binary name when the OS passed no arguments at all.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("gnfinder", String::as_str)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        usage(program_name(&args));
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2]).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config_file: &str, argument: &str) -> anyhow::Result<()> {
    let config = load_and_validate_config(config_file)
        .with_context(|| format!("loading {}", config_file))?;
    let finder = Finder::from_config(&config)
        .await
        .context("building engine gateway")?;

    match argument {
        "--ping" => println!("{}", finder.ping().await?),
        "--version" => println!("{}", serde_json::to_string_pretty(&finder.version().await?)?),
        text => {
            let started = Instant::now();
            let result = finder.find(text).await?;
            tracing::debug!(
                "{} gateway answered in {:?}",
                finder.gateway_name(),
                started.elapsed()
            );
            match result {
                Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                None => println!("null"),
            }
        }
    }

    Ok(())
}
