use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::acquisition::{sum_closing_costs, AcquisitionCosts};
use crate::amortization::LoanTerms;
use crate::metrics::annual::{AnnualMetricsInput, RecurringExpense};
use crate::metrics::levered::{compute_levered_metrics, LeveredMetrics, LeveredMetricsInput};
use crate::rent_roll::{aggregated_rent_for_year, RentRollInput, YearlyRent};
use crate::types::Money;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Everything a caller has fetched for one property, for one target year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyPerformanceInput {
    #[serde(flatten)]
    pub rent_roll: RentRollInput,
    pub year: i32,
    #[serde(default)]
    pub recurring: Vec<RecurringExpense>,
    #[serde(default)]
    pub variable_annual_budget: Money,
    pub purchase_price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_costs: Option<AcquisitionCosts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan: Option<LoanTerms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Money>,
}

/// One property's year: the rent roll-up and the metrics derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyPerformance {
    pub rent: YearlyRent,
    pub metrics: LeveredMetrics,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// The full per-property pipeline: aggregate the year's rent roll, sum the
/// closing costs, and feed both into the levered metrics.
pub fn analyze_property(input: &PropertyPerformanceInput) -> PropertyPerformance {
    let rent = aggregated_rent_for_year(&input.rent_roll, input.year);
    let closing_costs_total = sum_closing_costs(input.acquisition_costs.as_ref());

    let metrics = compute_levered_metrics(&LeveredMetricsInput {
        annual: AnnualMetricsInput {
            monthly_rent: rent.annual_gross / dec!(12),
            vacancy_pct: rent.average_effective_vacancy_pct,
            recurring: input.recurring.clone(),
            variable_annual_budget: input.variable_annual_budget,
            purchase_price: input.purchase_price,
            closing_costs_total,
        },
        loan: input.loan.clone(),
        current_value: input.current_value,
    });

    PropertyPerformance { rent, metrics }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
