use chrono::NaiveDate;
use rentfolio_core::rent_roll::{
    aggregated_rent_for_month, aggregated_rent_for_year, Lease, Property, RentRollInput,
    RentalMode, Room,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn lease(start: NaiveDate, end: Option<NaiveDate>, rent: Decimal, room: Option<&str>) -> Lease {
    Lease {
        start_date: start,
        end_date: end,
        monthly_rent: rent,
        vacancy_pct: Decimal::ZERO,
        room_id: room.map(Into::into),
    }
}

fn room(id: &str) -> Room {
    Room {
        id: id.into(),
        name: None,
    }
}

// ===========================================================================
// Whole-unit mode
// ===========================================================================

#[test]
fn test_whole_unit_no_active_lease_is_all_zero() {
    let input = RentRollInput {
        property: Property::default(),
        leases: vec![lease(date(2025, 1, 1), None, dec!(950), None)],
        rooms: vec![],
    };
    let m = aggregated_rent_for_month(&input, 2024, 7);

    assert_eq!(m.monthly_gross, Decimal::ZERO);
    assert_eq!(m.monthly_net, Decimal::ZERO);
    assert_eq!(m.effective_vacancy_pct, Decimal::ZERO);
    assert_eq!(m.occupied_rooms, 0);
    assert_eq!(m.total_rooms, 1);
}

#[test]
fn test_whole_unit_vacancy_discount() {
    let input = RentRollInput {
        property: Property::default(),
        leases: vec![Lease {
            vacancy_pct: dec!(0.08),
            ..lease(date(2024, 1, 1), None, dec!(1200), None)
        }],
        rooms: vec![],
    };
    let m = aggregated_rent_for_month(&input, 2024, 7);

    assert_eq!(m.monthly_gross, dec!(1200));
    assert_eq!(m.monthly_net, dec!(1104));
    assert_eq!(m.effective_vacancy_pct, dec!(0.08));
    assert_eq!(m.occupied_rooms, 1);
}

#[test]
fn test_whole_unit_month_boundary_inclusion() {
    // Month-granularity activity: mid-month start/end cover those months
    let input = RentRollInput {
        property: Property::default(),
        leases: vec![lease(
            date(2024, 3, 20),
            Some(date(2024, 9, 5)),
            dec!(1000),
            None,
        )],
        rooms: vec![],
    };

    assert_eq!(
        aggregated_rent_for_month(&input, 2024, 3).monthly_gross,
        dec!(1000)
    );
    assert_eq!(
        aggregated_rent_for_month(&input, 2024, 9).monthly_gross,
        dec!(1000)
    );
    assert_eq!(
        aggregated_rent_for_month(&input, 2024, 2).monthly_gross,
        Decimal::ZERO
    );
    assert_eq!(
        aggregated_rent_for_month(&input, 2024, 10).monthly_gross,
        Decimal::ZERO
    );
}

// ===========================================================================
// Per-room mode
// ===========================================================================

fn per_room_property() -> Property {
    Property {
        name: Some("Flat 2B".into()),
        rental_mode: RentalMode::PerRoom,
    }
}

#[test]
fn test_per_room_sums_active_leases() {
    let input = RentRollInput {
        property: per_room_property(),
        leases: vec![
            lease(date(2024, 1, 1), None, dec!(400), Some("a")),
            lease(date(2024, 1, 1), None, dec!(450), Some("b")),
            // Not yet started in July
            lease(date(2024, 10, 1), None, dec!(500), Some("c")),
        ],
        rooms: vec![room("a"), room("b"), room("c")],
    };
    let m = aggregated_rent_for_month(&input, 2024, 7);

    assert_eq!(m.monthly_gross, dec!(850));
    assert_eq!(m.occupied_rooms, 2);
    assert_eq!(m.total_rooms, 3);
}

#[test]
fn test_per_room_overlapping_leases_one_room() {
    let input = RentRollInput {
        property: per_room_property(),
        leases: vec![
            lease(date(2024, 1, 1), Some(date(2024, 12, 31)), dec!(400), Some("a")),
            lease(date(2024, 6, 1), None, dec!(420), Some("a")),
        ],
        rooms: vec![room("a"), room("b")],
    };
    let m = aggregated_rent_for_month(&input, 2024, 7);

    // Both rents are collected but the room counts once
    assert_eq!(m.monthly_gross, dec!(820));
    assert_eq!(m.occupied_rooms, 1);
    assert_eq!(m.total_rooms, 2);
}

#[test]
fn test_per_room_mixed_vacancy() {
    let input = RentRollInput {
        property: per_room_property(),
        leases: vec![
            Lease {
                vacancy_pct: dec!(0.1),
                ..lease(date(2024, 1, 1), None, dec!(500), Some("a"))
            },
            lease(date(2024, 1, 1), None, dec!(500), Some("b")),
        ],
        rooms: vec![room("a"), room("b")],
    };
    let m = aggregated_rent_for_month(&input, 2024, 7);

    assert_eq!(m.monthly_gross, dec!(1000));
    assert_eq!(m.monthly_net, dec!(950));
    // 1 - 950/1000
    assert_eq!(m.effective_vacancy_pct, dec!(0.05));
}

#[test]
fn test_per_room_with_no_rooms_is_defined() {
    let input = RentRollInput {
        property: per_room_property(),
        leases: vec![],
        rooms: vec![],
    };
    let m = aggregated_rent_for_month(&input, 2024, 7);

    assert_eq!(m.monthly_gross, Decimal::ZERO);
    assert_eq!(m.effective_vacancy_pct, Decimal::ZERO);
    assert_eq!(m.occupied_rooms, 0);
    assert_eq!(m.total_rooms, 0);
}

// ===========================================================================
// Year roll-up
// ===========================================================================

#[test]
fn test_year_rollup_partial_occupancy() {
    let input = RentRollInput {
        property: Property::default(),
        leases: vec![lease(
            date(2024, 4, 1),
            Some(date(2024, 9, 30)),
            dec!(1000),
            None,
        )],
        rooms: vec![],
    };
    let y = aggregated_rent_for_year(&input, 2024);

    // April through September
    assert_eq!(y.annual_gross, dec!(6000));
    assert_eq!(y.annual_net, dec!(6000));
    assert_eq!(y.average_effective_vacancy_pct, Decimal::ZERO);
}

#[test]
fn test_year_rollup_empty_year() {
    let input = RentRollInput::default();
    let y = aggregated_rent_for_year(&input, 2024);

    assert_eq!(y.annual_gross, Decimal::ZERO);
    assert_eq!(y.annual_net, Decimal::ZERO);
    assert_eq!(y.average_effective_vacancy_pct, Decimal::ZERO);
}

#[test]
fn test_year_rollup_consecutive_leases() {
    // Tenant change in July: old lease ends June, new one starts July
    let input = RentRollInput {
        property: Property::default(),
        leases: vec![
            lease(date(2023, 7, 1), Some(date(2024, 6, 30)), dec!(900), None),
            lease(date(2024, 7, 1), None, dec!(1000), None),
        ],
        rooms: vec![],
    };
    let y = aggregated_rent_for_year(&input, 2024);

    // 6 x 900 + 6 x 1000
    assert_eq!(y.annual_gross, dec!(11400));
}
