use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use rentfolio_core::amortization::{self, LoanTerms};
use rentfolio_core::validate;

use crate::input;

#[derive(Args)]
pub struct PaymentArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Decimal,

    /// Nominal annual rate in percentage points (3.5 = 3.5%)
    #[arg(long)]
    pub annual_rate_pct: Decimal,

    /// Loan length in months
    #[arg(long)]
    pub term_months: u32,
}

#[derive(Args)]
pub struct AmortizeArgs {
    /// Path to a JSON/YAML file with the loan terms
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual rate in percentage points (3.5 = 3.5%)
    #[arg(long)]
    pub annual_rate_pct: Option<Decimal>,

    /// Loan length in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Initial months during which only interest is paid
    #[arg(long, default_value = "0")]
    pub interest_only_months: u32,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payment =
        amortization::monthly_payment(args.principal, args.annual_rate_pct, args.term_months);
    Ok(serde_json::json!({ "monthly_payment": payment }))
}

pub fn run_amortize(args: AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::read_file(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanTerms {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args
                .annual_rate_pct
                .ok_or("--annual-rate-pct is required (or provide --input)")?,
            term_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
            interest_only_months: args.interest_only_months,
            start_date: None,
            up_front_fees: None,
            notes: None,
        }
    };

    validate::validate_loan(&terms)?;
    let schedule = amortization::build_schedule(&terms);
    Ok(serde_json::to_value(schedule)?)
}
