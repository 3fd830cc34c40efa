// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use concat_depends::backends::{CachedSource, FsBackend};
use concat_depends::config::consts::DEFAULT_LOG_FILTER;
use concat_depends::config::{load_and_validate_config, RuntimeBuilder};
use concat_depends::engine::TargetStatus;
use concat_depends::traits::{OutputSink, SourceProvider};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <config.yaml|config.toml> [config ...]", args[0]);
        eprintln!("Example: {} configs/concat-depends.yaml", args[0]);
        std::process::exit(1);
    }

    // One cache for the whole invocation; written destinations are evicted from it.
    let cache = Arc::new(CachedSource::new(FsBackend::new()));
    let sink: Arc<dyn OutputSink> = Arc::new(cache.evicting(FsBackend::new()));
    let source: Arc<dyn SourceProvider> = cache;

    let mut all_succeeded = true;
    for config_file in &args[1..] {
        match run_single_config(config_file, Arc::clone(&source), Arc::clone(&sink)).await {
            Ok(succeeded) => all_succeeded &= succeeded,
            Err(e) => {
                eprintln!("❌ Failed to run {}: {:#}", config_file, e);
                all_succeeded = false;
            }
        }
    }

    if !all_succeeded {
        std::process::exit(1);
    }
}

/// Run every target in one config file. `Ok(false)` means some target failed.
async fn run_single_config(
    config_file: &str,
    source: Arc<dyn SourceProvider>,
    sink: Arc<dyn OutputSink>,
) -> anyhow::Result<bool> {
    let start_time = Instant::now();

    let config = load_and_validate_config(config_file)
        .with_context(|| format!("loading configuration {}", config_file))?;
    let (targets, runner) = RuntimeBuilder::from_config(&config)?;

    println!("📋 Configuration: {}", config_file);
    println!("⚙️  Max Concurrency: {}", runner.max_concurrency());
    println!("🛡️  Failure Strategy: {:?}", runner.failure_strategy());

    let reports = runner.run(targets, source, sink).await;

    let mut succeeded = true;
    for report in &reports {
        for warning in report.diagnostics.iter() {
            println!("⚠️  [{}] {}", report.name, warning);
        }
        match &report.status {
            TargetStatus::Written(_) => println!("File {} created.", report.dest.display()),
            TargetStatus::Failed(e) => {
                eprintln!("❌ Target '{}' failed: {}", report.name, e);
                succeeded = false;
            }
            TargetStatus::Skipped => println!("⏭️  Target '{}' skipped", report.name),
        }
    }

    println!("⏱️  Total Time: {:?}", start_time.elapsed());
    Ok(succeeded)
}
