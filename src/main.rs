//! Command-line tool for inspecting event analytics JSON.
//!
//! # Usage
//!
//! ```bash
//! # Show registrations, capacity and the daily series
//! cargo run -- show analytics.json
//!
//! # Check ordering, totals and capacity
//! cargo run -- check analytics.json
//!
//! # Re-emit canonical JSON from stdin
//! cat analytics.json | cargo run -- format - --compact
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`, `LOG_FORMAT`, `OUTPUT_PRETTY` (see `config` module)

use event_analytics::availability::Availability;
use event_analytics::dto::EventAnalytics;
use event_analytics::{AppError, codec, config, consistency, telemetry};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Inspect and check event registration analytics.
#[derive(Parser)]
#[command(name = "event-analytics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show availability and the daily registration series
    Show {
        /// Analytics JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Check field values, ordering, totals and capacity
    Check {
        /// Analytics JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Print the canonical JSON form
    Format {
        /// Analytics JSON file, or `-` for stdin
        file: PathBuf,

        /// Emit single-line JSON regardless of OUTPUT_PRETTY
        #[arg(short, long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    telemetry::init(&config)?;
    config.print_summary();

    match cli.command {
        Commands::Show { file } => show(&load(&file)?),
        Commands::Check { file } => check(&load(&file)?),
        Commands::Format { file, compact } => {
            let analytics = load(&file)?;
            let json = codec::to_json(&analytics, config.output_pretty && !compact)?;
            println!("{json}");
            Ok(())
        }
    }
}

fn load(file: &Path) -> Result<EventAnalytics> {
    Ok(codec::read_analytics(file)?)
}

/// Prints availability followed by the daily table.
///
/// # Output Format
///
/// ```text
/// 📊 Event Analytics
///
///   Registered:  120 / 150
///   Spots left:  30
///   Full:        80%
///
///   Date         New      Total
///   ──────────────────────────────
///   2024-01-01   10       10
/// ```
fn show(analytics: &EventAnalytics) -> Result<()> {
    let availability = Availability::from(analytics);

    println!("{}", "📊 Event Analytics".bright_blue().bold());
    println!();
    println!(
        "  Registered:  {} / {}",
        or_dash(analytics.total_registrations).bright_white().bold(),
        or_dash(availability.capacity).bright_white()
    );

    let spots = or_dash(availability.spots_left);
    let spots = if availability.is_full() {
        spots.red().bold()
    } else {
        spots.green()
    };
    println!("  Spots left:  {spots}");
    println!(
        "  Full:        {}",
        availability
            .percent_full
            .map(|p| format!("{p}%"))
            .unwrap_or_else(|| "-".to_string())
            .cyan()
    );
    println!();

    if analytics.daily_stats.is_empty() {
        println!("{}", "  No registration data available yet.".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<12} {:<8} {:<8}",
        "Date".bright_white().bold(),
        "New".bright_white().bold(),
        "Total".bright_white().bold()
    );
    println!("  {}", "─".repeat(30).bright_black());

    for day in &analytics.daily_stats {
        println!(
            "  {:<12} {:<8} {:<8}",
            day.date.format("%Y-%m-%d").to_string().bright_black(),
            or_dash(day.count),
            or_dash(day.cumulative).cyan()
        );
    }

    println!();
    println!(
        "  Days: {}",
        analytics.daily_stats.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Runs [`consistency::verify`] and lists what failed.
///
/// Negative numbers are reported on their own; sequence rules are only
/// checked once every field holds a valid value.
/// Exits with an error when anything is wrong so the command can gate scripts.
fn check(analytics: &EventAnalytics) -> Result<()> {
    println!("{}", "🔍 Consistency Check".bright_blue().bold());
    println!();

    match consistency::verify(analytics) {
        Ok(()) => {
            println!("{}", "  ✅ All checks passed".green().bold());
            println!();
            Ok(())
        }
        Err(AppError::Inconsistent(report)) => {
            for violation in &report.violations {
                println!("  {} {}", "❌".red(), violation);
            }
            println!();
            anyhow::bail!("{} problem(s) found", report.len());
        }
        Err(err) => {
            println!("  {} {}", "❌".red(), err);
            println!();
            anyhow::bail!("field validation failed");
        }
    }
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}
