// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! McRun stats
//!
//! Kilometers per pair of shoes from Strava, either printed as a console
//! report or served as JSON for the dashboard.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mcrun_stats::{
    config::Config,
    models::GearLimits,
    services::{AggregateOptions, StatsRequest, StatsService, StravaClient},
    table, time_utils, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mcrun-stats", about = "Strava gear mileage report and dashboard API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the JSON stats endpoint
    Serve {
        /// Port override (defaults to $PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print a run table and gear summary to stdout
    Report {
        /// Start date (YYYY-MM-DD); prompts when omitted
        #[arg(long)]
        after: Option<String>,
        /// Pause between activity pages, in milliseconds
        #[arg(long, default_value_t = 1000)]
        page_delay_ms: u64,
        /// Show lifetime km and limits with each gear
        #[arg(long)]
        gear_extras: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port } => {
            init_json_logging();
            let mut config = Config::from_env().context("Failed to load configuration")?;
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await
        }
        Command::Report {
            after,
            page_delay_ms,
            gear_extras,
        } => {
            init_console_logging();
            let config = Config::from_env().context("Failed to load configuration")?;
            let after_date = match after {
                Some(raw) => Some(time_utils::parse_date(&raw)?),
                None => prompt_after_date()?,
            };
            report(
                config,
                StatsRequest {
                    after_date,
                    page_delay: Duration::from_millis(page_delay_ms),
                    options: AggregateOptions {
                        include_gear_extras: gear_extras,
                    },
                },
            )
            .await
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!(port = config.port, "Starting McRun stats API");

    let gear_limits = GearLimits::load_or_default(&config.gear_limits_path);
    let strava = StravaClient::new(&config);

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState {
        config,
        gear_limits,
        strava,
    });

    let app = mcrun_stats::routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn report(config: Config, request: StatsRequest) -> anyhow::Result<()> {
    let gear_limits = GearLimits::load_or_default(&config.gear_limits_path);
    let strava = StravaClient::new(&config);

    let report = StatsService::new(&strava, &gear_limits)
        .run(request)
        .await?;

    print!("{}", table::render_report(&report));
    Ok(())
}

/// Ask for an optional start date on stdin. An empty answer means all history.
fn prompt_after_date() -> anyhow::Result<Option<NaiveDate>> {
    print!("Enter start date (YYYY-MM-DD) or leave it empty for all data: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(time_utils::parse_date(line)?))
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_json_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(format)
        .init();
}

/// Compact logging on stderr so stdout carries only the report.
fn init_console_logging() {
    let format = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(format)
        .init();
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mcrun_stats=info,warn"))
}
