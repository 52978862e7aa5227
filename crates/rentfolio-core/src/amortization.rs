use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::math::{compound_factor, monthly_rate};
use crate::types::{Money, Percent};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Fixed-rate loan terms as entered on a financing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: Money,
    /// Nominal annual rate in percentage points (3.5 = 3.5%)
    pub annual_rate_pct: Percent,
    /// Total loan length in months
    pub term_months: u32,
    /// Initial months during which only interest is paid
    #[serde(default)]
    pub interest_only_months: u32,
    /// First payment date, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Origination / arrangement fees paid up front
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_front_fees: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One month of a loan schedule. `balance` is the remaining principal
/// after this month's payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month index
    pub month: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal_paid: Money,
    pub balance: Money,
}

/// Complete schedule. `payment` is the constant amortizing-phase payment;
/// during an interest-only phase each row's own payment differs from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub payment: Money,
    pub rows: Vec<AmortizationRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Standard fixed-payment ("French") annuity: P * r(1+r)^n / ((1+r)^n - 1).
///
/// A zero rate or zero term falls back to flat division of the principal
/// over `max(term, 1)` months. Total: no error cases.
pub fn monthly_payment(principal: Money, annual_rate_pct: Percent, term_months: u32) -> Money {
    if term_months == 0 || annual_rate_pct.is_zero() {
        return principal / Decimal::from(term_months.max(1));
    }

    let rate = monthly_rate(annual_rate_pct);
    let factor = compound_factor(rate, term_months);

    principal * rate * factor / (factor - Decimal::ONE)
}

/// Build the month-by-month schedule for a loan, with an optional
/// interest-only phase up front.
///
/// During the interest-only months the payment is exactly that month's
/// interest and the balance does not move. The amortizing payment is then
/// computed once from the remaining balance over the remaining term and
/// held constant. The returned row count always equals `term_months`;
/// `interest_only_months >= term_months` yields an all-interest-only
/// schedule, which is a valid configuration.
pub fn build_schedule(terms: &LoanTerms) -> AmortizationSchedule {
    let rate = monthly_rate(terms.annual_rate_pct);
    let io_months = terms.interest_only_months.min(terms.term_months);

    let mut rows = Vec::with_capacity(terms.term_months as usize);
    let mut balance = terms.principal;

    for month in 1..=io_months {
        let interest = balance * rate;
        rows.push(AmortizationRow {
            month,
            payment: interest,
            interest,
            principal_paid: Decimal::ZERO,
            balance,
        });
    }

    let payment = monthly_payment(
        balance,
        terms.annual_rate_pct,
        terms.term_months - io_months,
    );

    for month in (io_months + 1)..=terms.term_months {
        let interest = balance * rate;
        let principal_paid = payment - interest;
        balance = (balance - principal_paid).max(Decimal::ZERO);
        rows.push(AmortizationRow {
            month,
            payment,
            interest,
            principal_paid,
            balance,
        });
    }

    AmortizationSchedule { payment, rows }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
