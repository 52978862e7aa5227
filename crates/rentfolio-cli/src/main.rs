mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::acquisition::ClosingCostsArgs;
use commands::amortization::{AmortizeArgs, PaymentArgs};
use commands::metrics::{AnnualMetricsArgs, LeveredMetricsArgs, PerformanceArgs};
use commands::rent_roll::{RentMonthArgs, RentYearArgs};

/// Rental-property investment calculations
#[derive(Parser)]
#[command(
    name = "rfa",
    version,
    about = "Rental-property investment calculations",
    long_about = "A CLI for rental-property investment analysis with decimal \
                  precision. Supports loan amortization schedules, acquisition \
                  costs, levered and unlevered annual metrics, and rent-roll \
                  aggregation across whole-unit and per-room leasing."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed monthly payment for a loan
    Payment(PaymentArgs),
    /// Month-by-month loan amortization schedule
    Amortize(AmortizeArgs),
    /// Total one-time acquisition costs
    ClosingCosts(ClosingCostsArgs),
    /// Annualized unlevered metrics (NOI, cap rate, gross yield)
    AnnualMetrics(AnnualMetricsArgs),
    /// Debt-aware metrics (CFAF, equity, cash-on-cash, DSCR, LTV)
    LeveredMetrics(LeveredMetricsArgs),
    /// Aggregated rent for one calendar month
    RentMonth(RentMonthArgs),
    /// Aggregated rent for a calendar year
    RentYear(RentYearArgs),
    /// Full per-property pipeline: rent roll-up plus levered metrics
    Performance(PerformanceArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::amortization::run_payment(args),
        Commands::Amortize(args) => commands::amortization::run_amortize(args),
        Commands::ClosingCosts(args) => commands::acquisition::run_closing_costs(args),
        Commands::AnnualMetrics(args) => commands::metrics::run_annual_metrics(args),
        Commands::LeveredMetrics(args) => commands::metrics::run_levered_metrics(args),
        Commands::RentMonth(args) => commands::rent_roll::run_rent_month(args),
        Commands::RentYear(args) => commands::rent_roll::run_rent_year(args),
        Commands::Performance(args) => commands::metrics::run_performance(args),
        Commands::Version => {
            println!("rfa {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
