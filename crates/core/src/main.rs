// Dredge is an open source secret scanner for web archives.
// Copyright (C) 2024 Dredge ApS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use dredge::config::{defaults, RetryStrategy, RulesPreset, ScanConfig};
use dredge::detect::{DefaultEngine, Detector};
use dredge::entrypoint::scan;
use dredge::report::{FindingSink, JsonSink, TextSink};
use tracing_subscriber::prelude::*;

/// Scan web archives for leaked secrets.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// What to scan: an HTTP(S) URL, an s3:// URL, a file path, or '-' for
    /// stdin. Compression is detected automatically.
    #[clap(default_value = "-")]
    identifier: String,

    /// Suppress the success summary.
    #[clap(short, long)]
    quiet: bool,

    /// Emit findings as JSON, one object per line.
    #[clap(short = 's', long)]
    json: bool,

    /// Number of parallel detection workers.
    #[clap(short, long, default_value_t = defaults::jobs())]
    jobs: usize,

    /// Only report secrets enclosed by delimiters on the matched line.
    #[clap(short, long)]
    enclosed: bool,

    /// Timeout for fetching the archive.
    #[clap(short, long, default_value = "30m", value_parser = humantime::parse_duration)]
    timeout: Duration,

    /// The set of built-in rules to scan with.
    #[clap(short, long, value_enum, default_value_t = RulesPreset::Secret)]
    preset: RulesPreset,

    /// Retry strategy for fetching the archive.
    #[clap(short, long, value_enum, default_value_t = RetryStrategy::Never)]
    retry: RetryStrategy,

    /// Additional detection rule (a regular expression). Can be repeated.
    #[clap(short = 'x', long = "rule")]
    rules: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive("dredge=info".parse().unwrap())
                .from_env_lossy(),
        )
        .without_time()
        .with_target(false)
        .finish()
        .init();

    let args = Args::parse();

    let config = ScanConfig {
        identifier: args.identifier,
        jobs: args.jobs,
        enclosed: args.enclosed,
        timeout: args.timeout,
        preset: args.preset,
        retry: args.retry,
        custom_rules: args.rules,
        quiet: args.quiet,
        json: args.json,
    };

    let detector = Arc::new(
        Detector::<DefaultEngine>::new(
            &config.preset.rules(),
            &config.custom_rules,
            config.enclosed,
        )
        .context("compile detection rules")?,
    );

    let sink: Arc<dyn FindingSink> = if config.json {
        Arc::new(JsonSink::stdout())
    } else {
        Arc::new(TextSink::stdout())
    };

    let start = Instant::now();
    let stats = scan::run(&config, detector, sink)?;

    if !config.quiet {
        eprintln!(
            "{} records scanned, {} secrets found in {:.2?}",
            stats.records,
            stats.findings,
            start.elapsed()
        );
    }

    Ok(())
}
