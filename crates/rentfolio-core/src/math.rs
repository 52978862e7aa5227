use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Percent, Rate};

/// Guarded division: 0 when the denominator is 0, never an error.
pub fn safe_div(num: Decimal, den: Decimal) -> Decimal {
    if den.is_zero() {
        Decimal::ZERO
    } else {
        num / den
    }
}

/// Ratio of `num` to `den`, defined as 0 unless `den` is strictly positive.
pub fn ratio_of(num: Decimal, den: Decimal) -> Decimal {
    if den > Decimal::ZERO {
        num / den
    } else {
        Decimal::ZERO
    }
}

/// `ratio_of` scaled to percentage points.
pub fn pct_of(num: Decimal, den: Decimal) -> Percent {
    ratio_of(num, den) * dec!(100)
}

/// Periodic rate for a nominal annual percentage: pct / 100 / 12.
pub fn monthly_rate(annual_rate_pct: Percent) -> Rate {
    annual_rate_pct / dec!(100) / dec!(12)
}

/// (1 + r)^n via iterative multiplication.
pub fn compound_factor(periodic_rate: Rate, periods: u32) -> Decimal {
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= Decimal::ONE + periodic_rate;
    }
    factor
}
