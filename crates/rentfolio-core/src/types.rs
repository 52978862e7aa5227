use rust_decimal::Decimal;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as fractions (0.05 = 5%). Used for vacancy and for
/// per-period interest rates.
pub type Rate = Decimal;

/// Rates expressed as percentage points (5 = 5%). Used for nominal annual
/// loan rates on input and for the percentage-valued output metrics
/// (cap rate, gross yield, cash-on-cash, LTV).
pub type Percent = Decimal;
