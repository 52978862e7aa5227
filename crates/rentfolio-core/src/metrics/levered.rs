use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::{build_schedule, LoanTerms};
use crate::math::{pct_of, ratio_of};
use crate::metrics::annual::{compute_annual_metrics, AnnualMetrics, AnnualMetricsInput};
use crate::types::{Money, Percent};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for the debt-aware metrics: the unlevered input plus the optional
/// financing and, once known, a market value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveredMetricsInput {
    #[serde(flatten)]
    pub annual: AnnualMetricsInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan: Option<LoanTerms>,
    /// Current market value; used for equity and LTV when positive,
    /// otherwise purchase price is the basis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Money>,
}

/// Debt-aware annual performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveredMetrics {
    #[serde(flatten)]
    pub annual: AnnualMetrics,
    /// Annual debt service: 12 x the amortizing monthly payment
    pub ads: Money,
    /// Interest paid over the first 12 schedule months
    pub interests_annual: Money,
    /// Principal repaid over the first 12 schedule months
    pub principal_annual: Money,
    /// Cash flow after financing: NOI - ADS
    pub cfaf: Money,
    /// Effective value + closing costs - outstanding principal
    pub equity: Money,
    /// CFAF / equity, percentage points
    pub cash_on_cash: Percent,
    /// NOI / ADS, bare ratio
    pub dscr: Decimal,
    /// Principal / effective value, percentage points
    pub ltv: Percent,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Combine the unlevered metrics with the loan schedule. Without a loan the
/// result collapses to the unlevered case: zero debt figures, CFAF equal to
/// NOI, and cash-on-cash equal to the cap rate.
pub fn compute_levered_metrics(input: &LeveredMetricsInput) -> LeveredMetrics {
    let annual = compute_annual_metrics(&input.annual);
    let purchase = input.annual.purchase_price;
    let closing = input.annual.closing_costs_total;

    let Some(loan) = &input.loan else {
        return LeveredMetrics {
            ads: Decimal::ZERO,
            interests_annual: Decimal::ZERO,
            principal_annual: Decimal::ZERO,
            cfaf: annual.noi,
            equity: purchase + closing,
            cash_on_cash: annual.cap_rate_net,
            dscr: Decimal::ZERO,
            ltv: Decimal::ZERO,
            annual,
        };
    };

    let schedule = build_schedule(loan);
    let ads = schedule.payment * dec!(12);

    // First 12 months of the schedule; a shorter term keeps the partial year.
    let first_year = &schedule.rows[..schedule.rows.len().min(12)];
    let interests_annual: Money = first_year.iter().map(|r| r.interest).sum();
    let principal_annual: Money = first_year.iter().map(|r| r.principal_paid).sum();

    let cfaf = annual.noi - ads;

    let effective_value = match input.current_value {
        Some(v) if v > Decimal::ZERO => v,
        _ => purchase,
    };
    let equity = effective_value + closing - loan.principal;

    LeveredMetrics {
        cfaf,
        equity,
        cash_on_cash: pct_of(cfaf, equity),
        dscr: ratio_of(annual.noi, ads),
        ltv: pct_of(loan.principal, effective_value),
        ads,
        interests_annual,
        principal_annual,
        annual,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::annual::{Periodicity, RecurringExpense};

    fn sample_loan() -> LoanTerms {
        LoanTerms {
            principal: dec!(160000),
            annual_rate_pct: dec!(3.5),
            term_months: 300,
            interest_only_months: 0,
            start_date: None,
            up_front_fees: None,
            notes: None,
        }
    }

    fn sample_input() -> LeveredMetricsInput {
        LeveredMetricsInput {
            annual: AnnualMetricsInput {
                monthly_rent: dec!(1000),
                vacancy_pct: dec!(0.05),
                recurring: vec![
                    RecurringExpense {
                        amount: dec!(100),
                        periodicity: Periodicity::Monthly,
                    },
                    RecurringExpense {
                        amount: dec!(600),
                        periodicity: Periodicity::Yearly,
                    },
                ],
                variable_annual_budget: dec!(500),
                purchase_price: dec!(200000),
                closing_costs_total: dec!(20000),
            },
            loan: Some(sample_loan()),
            current_value: None,
        }
    }

    #[test]
    fn test_levered_with_loan() {
        let m = compute_levered_metrics(&sample_input());

        // Equity on purchase basis: 200000 + 20000 - 160000
        assert_eq!(m.equity, dec!(60000));
        assert_eq!(m.ltv, dec!(80));

        // 160k at 3.5% over 300 months ≈ 801.00/month
        assert!((m.ads - dec!(9611.97)).abs() < dec!(0.1));
        assert!(m.cfaf < m.annual.noi);
        assert!(m.dscr > Decimal::ZERO);
    }

    #[test]
    fn test_first_year_split_sums_to_ads() {
        let m = compute_levered_metrics(&sample_input());

        // Twelve amortizing rows: interest + principal == 12 payments
        assert!((m.interests_annual + m.principal_annual - m.ads).abs() < dec!(0.000001));
        assert!((m.interests_annual - dec!(5535.01)).abs() < dec!(0.1));
        assert!((m.principal_annual - dec!(4076.96)).abs() < dec!(0.1));
    }

    #[test]
    fn test_no_loan_collapses_to_unlevered() {
        let mut input = sample_input();
        input.loan = None;
        let m = compute_levered_metrics(&input);

        assert_eq!(m.ads, Decimal::ZERO);
        assert_eq!(m.interests_annual, Decimal::ZERO);
        assert_eq!(m.principal_annual, Decimal::ZERO);
        assert_eq!(m.cfaf, m.annual.noi);
        assert_eq!(m.equity, dec!(220000));
        assert_eq!(m.cash_on_cash, m.annual.cap_rate_net);
        assert_eq!(m.dscr, Decimal::ZERO);
        assert_eq!(m.ltv, Decimal::ZERO);
    }

    #[test]
    fn test_current_value_drives_equity_and_ltv() {
        let mut input = sample_input();
        input.current_value = Some(dec!(250000));
        let m = compute_levered_metrics(&input);

        // 250000 + 20000 - 160000
        assert_eq!(m.equity, dec!(110000));
        // 160000 / 250000
        assert_eq!(m.ltv, dec!(64));
    }

    #[test]
    fn test_non_positive_current_value_falls_back_to_purchase() {
        let mut input = sample_input();
        input.current_value = Some(Decimal::ZERO);
        let m = compute_levered_metrics(&input);
        assert_eq!(m.ltv, dec!(80));
        assert_eq!(m.equity, dec!(60000));
    }

    #[test]
    fn test_negative_equity_guards_cash_on_cash() {
        let mut input = sample_input();
        input.loan = Some(LoanTerms {
            principal: dec!(300000),
            ..sample_loan()
        });
        let m = compute_levered_metrics(&input);

        assert!(m.equity < Decimal::ZERO);
        assert_eq!(m.cash_on_cash, Decimal::ZERO);
    }

    #[test]
    fn test_short_term_partial_first_year() {
        let mut input = sample_input();
        input.loan = Some(LoanTerms {
            principal: dec!(12000),
            annual_rate_pct: Decimal::ZERO,
            term_months: 6,
            ..sample_loan()
        });
        let m = compute_levered_metrics(&input);

        // Only six schedule rows exist; the whole principal is repaid in them
        assert_eq!(m.principal_annual, dec!(12000));
        assert_eq!(m.interests_annual, Decimal::ZERO);
    }
}
