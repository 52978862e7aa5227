use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Itemized one-time purchase costs. All fields optional: records saved
/// mid-edit routinely carry only some of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionCosts {
    /// Transfer tax (ITP) on second-hand purchases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itp: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notary: Option<Money>,
    /// Land-registry fees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<Money>,
    /// Stamp duty (AJD) on new builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ajd: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_renovation: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliances: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub others: Option<Money>,
}

/// Total closing costs. A missing record and missing fields alike count
/// as 0.
pub fn sum_closing_costs(costs: Option<&AcquisitionCosts>) -> Money {
    let Some(c) = costs else {
        return Decimal::ZERO;
    };

    [
        c.itp,
        c.notary,
        c.registry,
        c.ajd,
        c.initial_renovation,
        c.appliances,
        c.others,
    ]
    .into_iter()
    .flatten()
    .sum()
}
