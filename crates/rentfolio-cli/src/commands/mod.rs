pub mod acquisition;
pub mod amortization;
pub mod metrics;
pub mod rent_roll;
