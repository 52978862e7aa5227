//! Input-shape validation for boundary callers (CLI, bindings). The
//! calculation functions themselves are total and accept anything; these
//! checks reject records that would only produce meaningless-but-defined
//! zeros, before they reach a user.

use rust_decimal::Decimal;

use crate::amortization::LoanTerms;
use crate::error::RentfolioError;
use crate::metrics::annual::AnnualMetricsInput;
use crate::rent_roll::Lease;
use crate::RentfolioResult;

fn invalid(field: &str, reason: &str) -> RentfolioError {
    RentfolioError::InvalidInput {
        field: field.into(),
        reason: reason.into(),
    }
}

/// A loan must have a positive principal, a non-negative rate, and at
/// least one month of term. An interest-only period covering the whole
/// term is allowed.
pub fn validate_loan(terms: &LoanTerms) -> RentfolioResult<()> {
    if terms.principal <= Decimal::ZERO {
        return Err(invalid("principal", "must be positive"));
    }
    if terms.annual_rate_pct < Decimal::ZERO {
        return Err(invalid("annual_rate_pct", "must not be negative"));
    }
    if terms.term_months == 0 {
        return Err(invalid("term_months", "must be at least 1"));
    }
    Ok(())
}

/// A lease window must be ordered and its figures in range.
pub fn validate_lease(lease: &Lease) -> RentfolioResult<()> {
    if let Some(end) = lease.end_date {
        if end < lease.start_date {
            return Err(invalid("end_date", "must not precede start_date"));
        }
    }
    if lease.monthly_rent < Decimal::ZERO {
        return Err(invalid("monthly_rent", "must not be negative"));
    }
    if lease.vacancy_pct < Decimal::ZERO || lease.vacancy_pct > Decimal::ONE {
        return Err(invalid("vacancy_pct", "must be between 0 and 1"));
    }
    Ok(())
}

/// Metrics input sanity: vacancy in range, non-negative money fields.
pub fn validate_annual_input(input: &AnnualMetricsInput) -> RentfolioResult<()> {
    if input.vacancy_pct < Decimal::ZERO || input.vacancy_pct > Decimal::ONE {
        return Err(invalid("vacancy_pct", "must be between 0 and 1"));
    }
    if input.monthly_rent < Decimal::ZERO {
        return Err(invalid("monthly_rent", "must not be negative"));
    }
    if input.purchase_price < Decimal::ZERO {
        return Err(invalid("purchase_price", "must not be negative"));
    }
    Ok(())
}
