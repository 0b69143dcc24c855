use chrono::{DateTime, Days, Months, Utc};

use super::value_objects::ShelfLifeUnit;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Adds a shelf life to a production date.
///
/// Days are calendar days. Months and years follow calendar rollover and clamp
/// to the last valid day of the resulting month: Jan 31 + 1 month is Feb 29 in
/// a leap year and Feb 28 otherwise, Feb 29 + 1 year is Feb 28. A year is
/// twelve months. The time of day is preserved.
///
/// Returns `None` when the result leaves chrono's representable range.
pub fn add_duration(
    date: DateTime<Utc>,
    value: u32,
    unit: ShelfLifeUnit,
) -> Option<DateTime<Utc>> {
    match unit {
        ShelfLifeUnit::Day => date.checked_add_days(Days::new(u64::from(value))),
        ShelfLifeUnit::Month => date.checked_add_months(Months::new(value)),
        ShelfLifeUnit::Year => value
            .checked_mul(12)
            .and_then(|months| date.checked_add_months(Months::new(months))),
    }
}

/// Whole days left until `target`, rounded up.
///
/// Negative once `target` has passed by at least a full day; a target a few
/// hours in the past still yields 0. Always computed against the caller's
/// `now`, never stored.
pub fn remaining_days(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (target - now).num_milliseconds();
    let floor = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        floor
    } else {
        floor + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn should_add_one_month_on_same_day_of_month() {
        let expiry = add_duration(at(2024, 1, 15), 1, ShelfLifeUnit::Month).unwrap();

        assert_eq!(expiry, at(2024, 2, 15));
        assert_eq!(remaining_days(expiry, at(2024, 1, 15)), 31);
    }

    #[test]
    fn should_clamp_to_end_of_february_when_adding_month_to_january_31() {
        assert_eq!(
            add_duration(at(2024, 1, 31), 1, ShelfLifeUnit::Month),
            Some(at(2024, 2, 29))
        );
        assert_eq!(
            add_duration(at(2023, 1, 31), 1, ShelfLifeUnit::Month),
            Some(at(2023, 2, 28))
        );
    }

    #[test]
    fn should_clamp_leap_day_when_adding_year() {
        assert_eq!(
            add_duration(at(2024, 2, 29), 1, ShelfLifeUnit::Year),
            Some(at(2025, 2, 28))
        );
    }

    #[test]
    fn should_add_days_across_month_boundary() {
        assert_eq!(
            add_duration(at(2024, 6, 1), 7, ShelfLifeUnit::Day),
            Some(at(2024, 6, 8))
        );
        assert_eq!(
            add_duration(at(2024, 2, 27), 3, ShelfLifeUnit::Day),
            Some(at(2024, 3, 1))
        );
    }

    #[test]
    fn should_preserve_time_of_day() {
        let production = Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap();

        let expiry = add_duration(production, 2, ShelfLifeUnit::Month).unwrap();

        assert_eq!(expiry, Utc.with_ymd_and_hms(2024, 5, 10, 18, 30, 0).unwrap());
    }

    #[test]
    fn should_return_none_when_year_overflows() {
        assert_eq!(add_duration(at(2024, 1, 1), u32::MAX, ShelfLifeUnit::Year), None);
    }

    #[test]
    fn should_round_partial_days_up() {
        let now = at(2024, 6, 1);

        assert_eq!(remaining_days(now + Duration::hours(1), now), 1);
        assert_eq!(remaining_days(now + Duration::hours(49), now), 3);
        assert_eq!(remaining_days(now, now), 0);
    }

    #[test]
    fn should_return_zero_when_target_passed_less_than_a_day_ago() {
        let now = at(2024, 6, 8) + Duration::hours(5);

        assert_eq!(remaining_days(at(2024, 6, 8), now), 0);
    }

    #[test]
    fn should_return_negative_when_target_passed() {
        let now = at(2024, 6, 10);

        assert_eq!(remaining_days(at(2024, 6, 8), now), -2);
        assert_eq!(remaining_days(now - Duration::hours(36), now), -1);
    }

    proptest! {
        #[test]
        fn should_remain_exactly_shelf_life_days_at_creation(
            offset_days in 0i64..40_000,
            value in 1u32..5_000,
        ) {
            let production = at(1970, 1, 1) + Duration::days(offset_days);

            let expiry = add_duration(production, value, ShelfLifeUnit::Day).unwrap();

            prop_assert_eq!(remaining_days(expiry, production), i64::from(value));
        }

        #[test]
        fn should_match_calendar_distance_for_months_and_years(
            offset_days in 0i64..40_000,
            value in 1u32..120,
            yearly in any::<bool>(),
        ) {
            let production = at(1970, 1, 1) + Duration::days(offset_days);
            let unit = if yearly { ShelfLifeUnit::Year } else { ShelfLifeUnit::Month };

            let expiry = add_duration(production, value, unit).unwrap();
            let calendar_days = (expiry.date_naive() - production.date_naive()).num_days();

            prop_assert_eq!(remaining_days(expiry, production), calendar_days);
            prop_assert!(expiry > production);
        }
    }
}
