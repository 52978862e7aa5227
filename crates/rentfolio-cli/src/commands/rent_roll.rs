use clap::Args;
use serde_json::Value;

use rentfolio_core::rent_roll::{self, RentRollInput};
use rentfolio_core::validate;

use crate::input;

#[derive(Args)]
pub struct RentMonthArgs {
    /// Path to a JSON/YAML file with the property, leases, and rooms
    #[arg(long)]
    pub input: Option<String>,

    /// Calendar year
    #[arg(long)]
    pub year: i32,

    /// Calendar month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,
}

#[derive(Args)]
pub struct RentYearArgs {
    /// Path to a JSON/YAML file with the property, leases, and rooms
    #[arg(long)]
    pub input: Option<String>,

    /// Calendar year
    #[arg(long)]
    pub year: i32,
}

fn read_rent_roll(path: Option<&str>) -> Result<RentRollInput, Box<dyn std::error::Error>> {
    let roll: RentRollInput = if let Some(path) = path {
        input::read_file(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for rent aggregation".into());
    };

    for lease in &roll.leases {
        validate::validate_lease(lease)?;
    }
    Ok(roll)
}

pub fn run_rent_month(args: RentMonthArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let roll = read_rent_roll(args.input.as_deref())?;
    let aggregated = rent_roll::aggregated_rent_for_month(&roll, args.year, args.month);
    Ok(serde_json::to_value(aggregated)?)
}

pub fn run_rent_year(args: RentYearArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let roll = read_rent_roll(args.input.as_deref())?;
    let aggregated = rent_roll::aggregated_rent_for_year(&roll, args.year);
    Ok(serde_json::to_value(aggregated)?)
}
