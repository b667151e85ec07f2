//! Tally CLI - terminal shell for the animated counter

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{count, interest};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Animated compound-interest counter for the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a tally.toml config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a sweep to a target value
    Count {
        /// Target value to converge to
        value: f64,

        /// Value to start from
        #[arg(long, default_value = "0")]
        from: f64,

        /// Sweep duration in milliseconds
        #[arg(long)]
        duration_ms: Option<f64>,

        /// Locale tag for digit grouping (e.g. en-IN)
        #[arg(long)]
        locale: Option<String>,

        /// Terminal redraw rate
        #[arg(long)]
        fps: Option<f64>,
    },

    /// Compound interest on a principal, with the total animated
    Interest {
        /// Principal amount
        #[arg(long, default_value = "100000")]
        principal: f64,

        /// Annual interest rate in percent
        #[arg(long, default_value = "6")]
        rate: f64,

        /// Investment period in years
        #[arg(long, default_value = "5")]
        years: f64,

        /// Compounding frequency
        #[arg(long, value_enum, default_value = "annually")]
        frequency: interest::Frequency,

        /// Sweep duration in milliseconds
        #[arg(long)]
        duration_ms: Option<f64>,

        /// Locale tag for digit grouping
        #[arg(long)]
        locale: Option<String>,

        /// Terminal redraw rate
        #[arg(long)]
        fps: Option<f64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Count {
            value,
            from,
            duration_ms,
            locale,
            fps,
        } => count::run(count::CountArgs {
            value,
            from,
            display: config.display.merged(duration_ms, locale, fps),
        }),
        Commands::Interest {
            principal,
            rate,
            years,
            frequency,
            duration_ms,
            locale,
            fps,
        } => interest::run(interest::InterestArgs {
            principal,
            rate,
            years,
            frequency,
            display: config.display.merged(duration_ms, locale, fps),
        }),
    }
}
