pub mod acquisition;
pub mod amortization;
pub mod error;
pub mod math;
pub mod metrics;
pub mod performance;
pub mod rent_roll;
pub mod types;
pub mod validate;

pub use error::RentfolioError;
pub use types::*;

/// Standard result type for fallible boundary operations (validation,
/// deserialization). The calculation functions themselves are total and
/// never return this.
pub type RentfolioResult<T> = Result<T, RentfolioError>;
