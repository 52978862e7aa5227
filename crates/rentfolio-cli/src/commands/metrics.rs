use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use rentfolio_core::metrics::annual::{self, AnnualMetricsInput};
use rentfolio_core::metrics::levered::{self, LeveredMetricsInput};
use rentfolio_core::performance::{self, PropertyPerformanceInput};
use rentfolio_core::validate;

use crate::input;

#[derive(Args)]
pub struct AnnualMetricsArgs {
    /// Path to a JSON/YAML file (required for recurring expenses)
    #[arg(long)]
    pub input: Option<String>,

    /// Rent for an occupied month
    #[arg(long)]
    pub monthly_rent: Option<Decimal>,

    /// Vacancy as a fraction of the year (0.05 = 5%)
    #[arg(long)]
    pub vacancy_pct: Option<Decimal>,

    /// Annual budget for variable costs
    #[arg(long)]
    pub variable_annual_budget: Option<Decimal>,

    /// Acquisition price
    #[arg(long)]
    pub purchase_price: Option<Decimal>,

    /// Total one-time closing costs
    #[arg(long)]
    pub closing_costs_total: Option<Decimal>,
}

#[derive(Args)]
pub struct LeveredMetricsArgs {
    /// Path to a JSON/YAML file with the metrics input (loan nested)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct PerformanceArgs {
    /// Path to a JSON/YAML file with the property, leases, rooms, costs,
    /// and loan
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_annual_metrics(args: AnnualMetricsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let metrics_input: AnnualMetricsInput = if let Some(ref path) = args.input {
        input::read_file(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        AnnualMetricsInput {
            monthly_rent: args
                .monthly_rent
                .ok_or("--monthly-rent is required (or provide --input)")?,
            vacancy_pct: args.vacancy_pct.unwrap_or(Decimal::ZERO),
            recurring: Vec::new(),
            variable_annual_budget: args.variable_annual_budget.unwrap_or(Decimal::ZERO),
            purchase_price: args
                .purchase_price
                .ok_or("--purchase-price is required (or provide --input)")?,
            closing_costs_total: args.closing_costs_total.unwrap_or(Decimal::ZERO),
        }
    };

    validate::validate_annual_input(&metrics_input)?;
    Ok(serde_json::to_value(annual::compute_annual_metrics(
        &metrics_input,
    ))?)
}

pub fn run_levered_metrics(args: LeveredMetricsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let metrics_input: LeveredMetricsInput = if let Some(ref path) = args.input {
        input::read_file(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for levered metrics".into());
    };

    validate::validate_annual_input(&metrics_input.annual)?;
    if let Some(loan) = &metrics_input.loan {
        validate::validate_loan(loan)?;
    }

    Ok(serde_json::to_value(levered::compute_levered_metrics(
        &metrics_input,
    ))?)
}

pub fn run_performance(args: PerformanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let perf_input: PropertyPerformanceInput = if let Some(ref path) = args.input {
        input::read_file(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for performance analysis".into());
    };

    for lease in &perf_input.rent_roll.leases {
        validate::validate_lease(lease)?;
    }
    if let Some(loan) = &perf_input.loan {
        validate::validate_loan(loan)?;
    }

    Ok(serde_json::to_value(performance::analyze_property(
        &perf_input,
    ))?)
}
