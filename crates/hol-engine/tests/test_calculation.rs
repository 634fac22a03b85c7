//! Integration tests for the calculation engine, exercising every holiday
//! shape end to end.

use hol_engine::{
    calculate_date, calculate_observed_date, format_holiday_info, get_date_only,
    get_observed_date_only, is_weekend,
};
use hol_model::{Country, Holiday, HolidayKind, HolidayType, KnownHoliday, Locality};
use hol_time::{Date, Month};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn us() -> Locality {
    Locality::from(Country::new("US", "United States").unwrap())
}

fn independence_day() -> Holiday {
    Holiday::fixed_on(
        "Independence Day",
        "US national day",
        vec![us()],
        HolidayType::National,
        2024,
        Month::July,
        4,
    )
    .unwrap()
}

fn thanksgiving() -> Holiday {
    Holiday::moveable(
        "Thanksgiving",
        "Fourth Thursday of November",
        vec![us()],
        HolidayType::National,
        KnownHoliday::Thanksgiving,
        date(2024, 11, 28),
        true,
    )
    .unwrap()
}

fn memorial_day() -> Holiday {
    Holiday::moveable(
        "Memorial Day",
        "Last Monday of May",
        vec![us()],
        HolidayType::National,
        KnownHoliday::MemorialDay,
        date(2024, 5, 27),
        false,
    )
    .unwrap()
}

fn easter() -> Holiday {
    Holiday::moveable(
        "Easter",
        "Easter Sunday",
        vec![us()],
        HolidayType::Religious,
        KnownHoliday::Easter,
        date(2024, 3, 31),
        false,
    )
    .unwrap()
}

fn good_friday() -> Holiday {
    Holiday::moveable_from_base(
        "Good Friday",
        "Friday before Easter",
        vec![us()],
        HolidayType::Religious,
        KnownHoliday::GoodFriday,
        easter(),
        -2,
        date(2024, 3, 29),
        false,
    )
    .unwrap()
}

// ── Fixed ─────────────────────────────────────────────────────────────────────

#[test]
fn fixed_recalculation_replaces_year_only() {
    let h = independence_day();
    let h2031 = calculate_date(&h, 2031).unwrap();
    assert_eq!(h2031.date(), date(2031, 7, 4));
    assert!(matches!(h2031.kind(), HolidayKind::Fixed { .. }));
    // Input untouched
    assert_eq!(h.date(), date(2024, 7, 4));
}

#[test]
fn fixed_feb_29_rejected_for_non_leap_year() {
    let h = Holiday::fixed_on(
        "Leap Day",
        "",
        vec![us()],
        HolidayType::Commercial,
        2024,
        Month::February,
        29,
    )
    .unwrap();
    assert!(calculate_date(&h, 2025).is_err());
    assert!(calculate_date(&h, 2028).is_ok());
}

// ── Observed ──────────────────────────────────────────────────────────────────

#[test]
fn observed_recomputes_shift_per_year() {
    let h = Holiday::observed(
        "Independence Day",
        "",
        vec![us()],
        HolidayType::National,
        date(2024, 7, 4),
        date(2024, 7, 4),
        true,
    )
    .unwrap();

    // 2026-07-04 is a Saturday → observed Friday 2026-07-03
    let h2026 = calculate_date(&h, 2026).unwrap();
    assert_eq!(h2026.date(), date(2026, 7, 4));
    assert_eq!(h2026.observed_date(), Some(date(2026, 7, 3)));

    // 2027-07-04 is a Sunday → observed Monday 2027-07-05
    let h2027 = calculate_date(&h, 2027).unwrap();
    assert_eq!(h2027.observed_date(), Some(date(2027, 7, 5)));

    // 2025-07-04 is a Friday → no shift
    let h2025 = calculate_date(&h, 2025).unwrap();
    assert_eq!(h2025.observed_date(), Some(date(2025, 7, 4)));
}

#[test]
fn observed_shift_below_minimum_date_errors_instead_of_panicking() {
    let h = Holiday::observed(
        "New Year's Day",
        "",
        vec![us()],
        HolidayType::National,
        date(2024, 1, 1),
        date(2024, 1, 1),
        true,
    )
    .unwrap();
    // 1583-01-01 is a Saturday at the very bottom of the date range; the
    // shift to the preceding Friday is unrepresentable
    assert!(calculate_date(&h, 1583).is_err());
    assert!(get_observed_date_only(&h, 1583).is_err());
    // 1994-01-01 is also a Saturday, but shiftable
    let h1994 = calculate_date(&h, 1994).unwrap();
    assert_eq!(h1994.observed_date(), Some(date(1993, 12, 31)));
}

#[test]
fn observed_without_mondayisation_tracks_the_date() {
    let h = Holiday::observed(
        "Anzac Day",
        "",
        vec![Locality::from(Country::new("NZ", "New Zealand").unwrap())],
        HolidayType::National,
        date(2024, 4, 25),
        date(2024, 4, 25),
        false,
    )
    .unwrap();
    // 2026-04-25 is a Saturday, but with mondayisation off the observed
    // date equals the nominal date
    let h2026 = calculate_date(&h, 2026).unwrap();
    assert_eq!(h2026.observed_date(), Some(date(2026, 4, 25)));
}

// ── Moveable ──────────────────────────────────────────────────────────────────

#[test]
fn thanksgiving_dates() {
    let h = thanksgiving();
    assert_eq!(get_date_only(&h, 2024).unwrap(), date(2024, 11, 28));
    assert_eq!(get_date_only(&h, 2025).unwrap(), date(2025, 11, 27));
    let h2025 = calculate_date(&h, 2025).unwrap();
    assert_eq!(h2025.date(), date(2025, 11, 27));
    assert!(matches!(h2025.kind(), HolidayKind::Moveable { .. }));
}

#[test]
fn memorial_day_dates() {
    let h = memorial_day();
    assert_eq!(get_date_only(&h, 2024).unwrap(), date(2024, 5, 27));
    assert_eq!(get_date_only(&h, 2025).unwrap(), date(2025, 5, 26));
}

#[test]
fn easter_dates() {
    let h = easter();
    assert_eq!(get_date_only(&h, 2024).unwrap(), date(2024, 3, 31));
    assert_eq!(get_date_only(&h, 2025).unwrap(), date(2025, 4, 20));
    assert_eq!(get_date_only(&h, 2026).unwrap(), date(2026, 4, 5));
    assert!(get_date_only(&h, 1582).is_err());
}

#[test]
fn moveable_observed_date_stays_in_variant() {
    // Mother's Day always falls on a Sunday; with mondayisation on, the
    // observed date is the following Monday
    let h = Holiday::moveable(
        "Mother's Day",
        "",
        vec![us()],
        HolidayType::Commercial,
        KnownHoliday::MothersDay,
        date(2024, 5, 12),
        true,
    )
    .unwrap();
    let observed = calculate_observed_date(&h, 2024).unwrap();
    assert!(matches!(observed.kind(), HolidayKind::Moveable { .. }));
    assert_eq!(observed.date(), date(2024, 5, 13));
    // The unshifted date stays reachable
    assert_eq!(get_date_only(&h, 2024).unwrap(), date(2024, 5, 12));
    assert_eq!(get_observed_date_only(&h, 2024).unwrap(), date(2024, 5, 13));
}

// ── MoveableFromBase ──────────────────────────────────────────────────────────

#[test]
fn good_friday_follows_easter() {
    let h = good_friday();
    assert_eq!(get_date_only(&h, 2024).unwrap(), date(2024, 3, 29));
    assert_eq!(get_date_only(&h, 2025).unwrap(), date(2025, 4, 18));

    let h2025 = calculate_date(&h, 2025).unwrap();
    assert_eq!(h2025.date(), date(2025, 4, 18));
    // The embedded base was recomputed as well
    assert_eq!(h2025.base().unwrap().date(), date(2025, 4, 20));
    assert!(matches!(h2025.kind(), HolidayKind::MoveableFromBase { .. }));
}

#[test]
fn easter_monday_with_mondayisation_is_never_shifted() {
    // Easter Monday is a Monday by construction; the shift is a no-op
    let h = Holiday::moveable_from_base(
        "Easter Monday",
        "",
        vec![us()],
        HolidayType::Religious,
        KnownHoliday::EasterMonday,
        easter(),
        1,
        date(2024, 4, 1),
        true,
    )
    .unwrap();
    let observed = calculate_observed_date(&h, 2025).unwrap();
    assert_eq!(observed.date(), date(2025, 4, 21));
}

#[test]
fn palm_sunday_observed_shifts_to_monday() {
    let h = Holiday::moveable_from_base(
        "Palm Sunday",
        "",
        vec![us()],
        HolidayType::Religious,
        KnownHoliday::PalmSunday,
        easter(),
        -7,
        date(2024, 3, 24),
        true,
    )
    .unwrap();
    // Palm Sunday 2024 = March 24; observed Monday March 25
    assert_eq!(get_date_only(&h, 2024).unwrap(), date(2024, 3, 24));
    assert_eq!(get_observed_date_only(&h, 2024).unwrap(), date(2024, 3, 25));
    let observed = calculate_observed_date(&h, 2024).unwrap();
    assert_eq!(observed.date(), date(2024, 3, 25));
}

// ── Shared queries ────────────────────────────────────────────────────────────

#[test]
fn weekend_checks() {
    // Easter always falls on a Sunday
    assert!(is_weekend(&easter(), 2024).unwrap());
    // Thanksgiving always falls on a Thursday
    assert!(!is_weekend(&thanksgiving(), 2024).unwrap());
    // Independence Day 2026 is a Saturday
    assert!(is_weekend(&independence_day(), 2026).unwrap());
    assert!(!is_weekend(&independence_day(), 2025).unwrap());
}

#[test]
fn purity_of_calculate_date() {
    let h = good_friday();
    let snapshot = h.clone();
    let a = calculate_date(&h, 2030).unwrap();
    let b = calculate_date(&h, 2030).unwrap();
    assert_eq!(a, b);
    assert_eq!(h, snapshot);
}

#[test]
fn format_summaries() {
    assert_eq!(
        format_holiday_info(&thanksgiving()),
        "Thanksgiving - National holiday in United States on November 28 (mondayised)"
    );
    let observed = Holiday::observed(
        "Independence Day",
        "",
        vec![us()],
        HolidayType::National,
        date(2026, 7, 4),
        date(2026, 7, 3),
        true,
    )
    .unwrap();
    assert_eq!(
        format_holiday_info(&observed),
        "Independence Day - National holiday in United States on July 4 (observed July 3)"
    );
    assert_eq!(
        format_holiday_info(&easter()),
        "Easter - Religious holiday in United States on March 31"
    );
}

// ── Properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_fixed_recalculation_keeps_month_and_day(
        year in 1583u16..=2998,
        month in 1u8..=12,
        day in 1u8..=28,
    ) {
        let d = Date::from_ymd(2024, month, day).unwrap();
        let h = Holiday::fixed("Some Day", "", vec![us()], HolidayType::Commercial, d).unwrap();
        let recalc = calculate_date(&h, year).unwrap();
        prop_assert_eq!(recalc.date().year(), year);
        prop_assert_eq!(recalc.date().month(), month);
        prop_assert_eq!(recalc.date().day_of_month(), day);
    }

    #[test]
    fn prop_observed_date_is_never_a_weekend_when_mondayised(year in 1584u16..=2998) {
        let h = Holiday::moveable(
            "Mother's Day", "", vec![us()], HolidayType::Commercial,
            KnownHoliday::MothersDay, Date::from_ymd(2024, 5, 12).unwrap(), true,
        ).unwrap();
        let observed = get_observed_date_only(&h, year).unwrap();
        prop_assert!(!observed.is_weekend());
    }
}
