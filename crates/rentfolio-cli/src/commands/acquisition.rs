use clap::Args;
use serde_json::Value;

use rentfolio_core::acquisition::{sum_closing_costs, AcquisitionCosts};

use crate::input;

#[derive(Args)]
pub struct ClosingCostsArgs {
    /// Path to a JSON/YAML file with the itemized costs
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_closing_costs(args: ClosingCostsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    // No input at all is a valid call: the total is 0.
    let costs: Option<AcquisitionCosts> = if let Some(ref path) = args.input {
        Some(input::read_file(path)?)
    } else if let Some(data) = input::read_stdin()? {
        Some(serde_json::from_value(data)?)
    } else {
        None
    };

    let total = sum_closing_costs(costs.as_ref());
    Ok(serde_json::json!({ "closing_costs_total": total }))
}
