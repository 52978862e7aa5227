use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::math::pct_of;
use crate::types::{Money, Percent, Rate};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How often a recurring expense is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    Monthly,
    Quarterly,
    Yearly,
    /// Catch-all for periodicity values this engine does not recognize.
    /// Annualizes to 0: an unrecognized periodicity must not distort NOI.
    #[serde(other)]
    Unknown,
}

impl Periodicity {
    /// Charges per year.
    pub fn annual_multiplier(self) -> Decimal {
        match self {
            Periodicity::Monthly => dec!(12),
            Periodicity::Quarterly => dec!(4),
            Periodicity::Yearly => Decimal::ONE,
            Periodicity::Unknown => Decimal::ZERO,
        }
    }
}

/// A recurring operating expense (community fees, insurance, IBI, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringExpense {
    pub amount: Money,
    pub periodicity: Periodicity,
}

impl RecurringExpense {
    pub fn annualized(&self) -> Money {
        self.amount * self.periodicity.annual_multiplier()
    }
}

/// Input for the unlevered annual metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualMetricsInput {
    pub monthly_rent: Money,
    /// Vacancy as a fraction of the year (0.05 = 5%)
    #[serde(default)]
    pub vacancy_pct: Rate,
    #[serde(default)]
    pub recurring: Vec<RecurringExpense>,
    /// Annual budget for variable costs (repairs, turnover, ...)
    #[serde(default)]
    pub variable_annual_budget: Money,
    pub purchase_price: Money,
    #[serde(default)]
    pub closing_costs_total: Money,
}

/// Annualized unlevered performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualMetrics {
    /// Annual rent net of vacancy
    pub rent_annual_gross: Money,
    pub recurring_annual: Money,
    pub variable_annual: Money,
    /// rent - recurring - variable, before debt service
    pub noi: Money,
    /// NOI / total investment, percentage points
    pub cap_rate_net: Percent,
    /// Gross rent / total investment, percentage points
    pub yield_gross: Percent,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Annualize a monthly rent and a recurring-expense list into NOI, cap
/// rate, and gross yield. Total: a non-positive total investment yields
/// zero percentages rather than an error.
pub fn compute_annual_metrics(input: &AnnualMetricsInput) -> AnnualMetrics {
    let rent_annual_gross =
        input.monthly_rent * dec!(12) * (Decimal::ONE - input.vacancy_pct);

    let recurring_annual: Money = input
        .recurring
        .iter()
        .map(RecurringExpense::annualized)
        .sum();

    let noi = rent_annual_gross - recurring_annual - input.variable_annual_budget;
    let total_investment = input.purchase_price + input.closing_costs_total;

    AnnualMetrics {
        rent_annual_gross,
        recurring_annual,
        variable_annual: input.variable_annual_budget,
        noi,
        cap_rate_net: pct_of(noi, total_investment),
        yield_gross: pct_of(rent_annual_gross, total_investment),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
