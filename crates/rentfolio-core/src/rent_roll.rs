use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::math::safe_div;
use crate::types::{Money, Rate};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How a property is let: one lease for the whole unit, or one lease per
/// room. Records written before per-room support existed carry no mode and
/// default to the whole unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalMode {
    #[default]
    EntireUnit,
    PerRoom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub rental_mode: RentalMode,
}

/// A lease as stored. `room_id` present means a per-room lease; absent
/// means the whole unit. Missing numeric fields contribute 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub start_date: NaiveDate,
    /// Open-ended when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub monthly_rent: Money,
    /// Vacancy as a fraction (0.05 = 5%)
    #[serde(default)]
    pub vacancy_pct: Rate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A property with its leases and rooms, as fetched by a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RentRollInput {
    #[serde(default)]
    pub property: Property,
    #[serde(default)]
    pub leases: Vec<Lease>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// Unified one-month rent figure across both rental modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRent {
    pub monthly_gross: Money,
    pub monthly_net: Money,
    /// 1 - net/gross, as a fraction; 0 when gross is 0
    pub effective_vacancy_pct: Rate,
    pub occupied_rooms: u32,
    pub total_rooms: u32,
}

/// Twelve months of `AggregatedRent` rolled up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRent {
    pub annual_gross: Money,
    pub annual_net: Money,
    pub average_effective_vacancy_pct: Rate,
}

// ---------------------------------------------------------------------------
// Activity window
// ---------------------------------------------------------------------------

/// Months since year 0, for month-granularity comparisons.
fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Whether a lease covers the given calendar month. Comparison is at month
/// granularity: a lease starting or ending mid-month counts for that whole
/// month.
fn active_in_month(lease: &Lease, year: i32, month: u32) -> bool {
    let target = year * 12 + (month as i32 - 1);
    if month_index(lease.start_date) > target {
        return false;
    }
    match lease.end_date {
        Some(end) => month_index(end) >= target,
        None => true,
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reconcile whole-unit and per-room occupancy into one monthly rent and
/// vacancy figure. Pure and cheap: callers loop it over months.
pub fn aggregated_rent_for_month(input: &RentRollInput, year: i32, month: u32) -> AggregatedRent {
    match input.property.rental_mode {
        RentalMode::EntireUnit => entire_unit_month(input, year, month),
        RentalMode::PerRoom => per_room_month(input, year, month),
    }
}

/// Roll a calendar year of monthly aggregates into annual gross/net and an
/// average vacancy fraction.
pub fn aggregated_rent_for_year(input: &RentRollInput, year: i32) -> YearlyRent {
    let mut annual_gross = Decimal::ZERO;
    let mut annual_net = Decimal::ZERO;
    let mut vacancy_sum = Decimal::ZERO;

    for month in 1..=12 {
        let m = aggregated_rent_for_month(input, year, month);
        annual_gross += m.monthly_gross;
        annual_net += m.monthly_net;
        vacancy_sum += m.effective_vacancy_pct;
    }

    YearlyRent {
        annual_gross,
        annual_net,
        average_effective_vacancy_pct: vacancy_sum / dec!(12),
    }
}

// ---------------------------------------------------------------------------
// Mode variants
// ---------------------------------------------------------------------------

fn entire_unit_month(input: &RentRollInput, year: i32, month: u32) -> AggregatedRent {
    let lease = input
        .leases
        .iter()
        .find(|l| l.room_id.is_none() && active_in_month(l, year, month));

    let Some(lease) = lease else {
        return AggregatedRent {
            monthly_gross: Decimal::ZERO,
            monthly_net: Decimal::ZERO,
            effective_vacancy_pct: Decimal::ZERO,
            occupied_rooms: 0,
            total_rooms: 1,
        };
    };

    let gross = lease.monthly_rent;
    let net = gross * (Decimal::ONE - lease.vacancy_pct);

    AggregatedRent {
        monthly_gross: gross,
        monthly_net: net,
        effective_vacancy_pct: safe_div(gross - net, gross),
        occupied_rooms: 1,
        total_rooms: 1,
    }
}

fn per_room_month(input: &RentRollInput, year: i32, month: u32) -> AggregatedRent {
    let mut gross = Decimal::ZERO;
    let mut net = Decimal::ZERO;
    let mut occupied: HashSet<&str> = HashSet::new();

    for lease in &input.leases {
        let Some(room_id) = &lease.room_id else {
            continue;
        };
        if !active_in_month(lease, year, month) {
            continue;
        }
        gross += lease.monthly_rent;
        net += lease.monthly_rent * (Decimal::ONE - lease.vacancy_pct);
        occupied.insert(room_id.as_str());
    }

    AggregatedRent {
        monthly_gross: gross,
        monthly_net: net,
        effective_vacancy_pct: safe_div(gross - net, gross),
        occupied_rooms: occupied.len() as u32,
        // A per-room property with no room records is a defined zero state,
        // not an error.
        total_rooms: input.rooms.len() as u32,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
