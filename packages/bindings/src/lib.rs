use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct MonthlyPaymentInput {
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_months: u32,
}

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let input: MonthlyPaymentInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let payment = rentfolio_core::amortization::monthly_payment(
        input.principal,
        input.annual_rate_pct,
        input.term_months,
    );
    serde_json::to_string(&payment).map_err(to_napi_error)
}

#[napi]
pub fn build_amortization_schedule(input_json: String) -> NapiResult<String> {
    let terms: rentfolio_core::amortization::LoanTerms =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    rentfolio_core::validate::validate_loan(&terms).map_err(to_napi_error)?;
    let schedule = rentfolio_core::amortization::build_schedule(&terms);
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Acquisition costs
// ---------------------------------------------------------------------------

#[napi]
pub fn sum_closing_costs(input_json: String) -> NapiResult<String> {
    let costs: Option<rentfolio_core::acquisition::AcquisitionCosts> =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let total = rentfolio_core::acquisition::sum_closing_costs(costs.as_ref());
    serde_json::to_string(&total).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_annual_metrics(input_json: String) -> NapiResult<String> {
    let input: rentfolio_core::metrics::annual::AnnualMetricsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    rentfolio_core::validate::validate_annual_input(&input).map_err(to_napi_error)?;
    let output = rentfolio_core::metrics::annual::compute_annual_metrics(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_levered_metrics(input_json: String) -> NapiResult<String> {
    let input: rentfolio_core::metrics::levered::LeveredMetricsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    rentfolio_core::validate::validate_annual_input(&input.annual).map_err(to_napi_error)?;
    if let Some(loan) = &input.loan {
        rentfolio_core::validate::validate_loan(loan).map_err(to_napi_error)?;
    }
    let output = rentfolio_core::metrics::levered::compute_levered_metrics(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Rent aggregation
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RentMonthInput {
    #[serde(flatten)]
    roll: rentfolio_core::rent_roll::RentRollInput,
    year: i32,
    month: u32,
}

#[napi]
pub fn aggregated_rent_for_month(input_json: String) -> NapiResult<String> {
    let input: RentMonthInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        rentfolio_core::rent_roll::aggregated_rent_for_month(&input.roll, input.year, input.month);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct RentYearInput {
    #[serde(flatten)]
    roll: rentfolio_core::rent_roll::RentRollInput,
    year: i32,
}

#[napi]
pub fn aggregated_rent_for_year(input_json: String) -> NapiResult<String> {
    let input: RentYearInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = rentfolio_core::rent_roll::aggregated_rent_for_year(&input.roll, input.year);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Property performance
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_property(input_json: String) -> NapiResult<String> {
    let input: rentfolio_core::performance::PropertyPerformanceInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    for lease in &input.rent_roll.leases {
        rentfolio_core::validate::validate_lease(lease).map_err(to_napi_error)?;
    }
    if let Some(loan) = &input.loan {
        rentfolio_core::validate::validate_loan(loan).map_err(to_napi_error)?;
    }
    let output = rentfolio_core::performance::analyze_property(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}
