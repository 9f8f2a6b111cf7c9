//! ANBIMA business-day calendar for the Brazilian banking market.
//!
//! Covers Saturday/Sunday weekends, the fixed national banking holidays and
//! the movable holidays derived from Easter (Carnival Monday and Tuesday,
//! Good Friday, Corpus Christi).

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// ANBIMA banking calendar for Brazil.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnbimaCalendar;

impl AnbimaCalendar {
    /// Returns true if the date is a business day (not a weekend or holiday).
    #[must_use]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    /// Returns true if the date is a banking holiday.
    #[must_use]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        let year = date.year();

        match (date.month(), date.day()) {
            // New Year's Day
            (1, 1)
            // Tiradentes
            | (4, 21)
            // Labour Day
            | (5, 1)
            // Independence Day
            | (9, 7)
            // Our Lady of Aparecida
            | (10, 12)
            // All Souls' Day
            | (11, 2)
            // Republic Proclamation Day
            | (11, 15)
            // Christmas Day
            | (12, 25) => return true,

            // Black Awareness Day, a national holiday since 2024
            (11, 20) if year >= 2024 => return true,

            _ => {}
        }

        // Movable holidays anchored on Easter Sunday: Carnival Monday and
        // Tuesday, Good Friday, Corpus Christi.
        easter_sunday(year).is_some_and(|easter| {
            [-48, -47, -2, 60]
                .into_iter()
                .filter_map(|offset| offset_days(easter, offset))
                .any(|holiday| holiday == date)
        })
    }

    /// Ordered inclusive sequence of business days in `[start, end]`.
    ///
    /// Returns an empty sequence when `start > end`.
    #[must_use]
    pub fn business_days(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = start;
        while current <= end {
            if self.is_business_day(current) {
                days.push(current);
            }
            match current.checked_add_days(Days::new(1)) {
                Some(next) => current = next,
                None => break,
            }
        }
        days
    }

    /// The closest business day on or before the given date.
    #[must_use]
    pub fn previous_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            current = current
                .checked_sub_days(Days::new(1))
                .unwrap_or(NaiveDate::MIN);
        }
        current
    }

    /// Steps back `days` business days from the given date.
    ///
    /// A non-business start date first rolls back to the preceding business
    /// day, so the result is always a business day.
    #[must_use]
    pub fn sub_business_days(&self, date: NaiveDate, days: u32) -> NaiveDate {
        let mut current = self.previous_business_day(date);
        for _ in 0..days {
            let previous = current
                .checked_sub_days(Days::new(1))
                .unwrap_or(NaiveDate::MIN);
            current = self.previous_business_day(previous);
        }
        current
    }
}

/// Returns true for Saturday and Sunday.
fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Offsets a date by a signed number of calendar days.
fn offset_days(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    if offset >= 0 {
        date.checked_add_days(Days::new(u64::from(offset.unsigned_abs())))
    } else {
        date.checked_sub_days(Days::new(u64::from(offset.unsigned_abs())))
    }
}

/// Easter Sunday for a given year (Meeus/Jones/Butcher algorithm).
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn easter_sunday_known_years() {
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(date(2026, 4, 5)));
    }

    #[test_case(2024, 1, 1 ; "new years day")]
    #[test_case(2025, 4, 21 ; "tiradentes")]
    #[test_case(2024, 2, 12 ; "carnival monday 2024")]
    #[test_case(2024, 2, 13 ; "carnival tuesday 2024")]
    #[test_case(2024, 3, 29 ; "good friday 2024")]
    #[test_case(2024, 5, 30 ; "corpus christi 2024")]
    #[test_case(2025, 6, 19 ; "corpus christi 2025")]
    #[test_case(2024, 11, 20 ; "black awareness day 2024")]
    fn holidays_are_not_business_days(year: i32, month: u32, day: u32) {
        let cal = AnbimaCalendar;
        assert!(cal.is_holiday(date(year, month, day)));
        assert!(!cal.is_business_day(date(year, month, day)));
    }

    #[test]
    fn black_awareness_day_not_national_before_2024() {
        let cal = AnbimaCalendar;
        assert!(!cal.is_holiday(date(2023, 11, 20)));
    }

    #[test]
    fn weekends_are_not_business_days() {
        let cal = AnbimaCalendar;
        // A regular Saturday and Sunday.
        assert!(!cal.is_business_day(date(2024, 7, 6)));
        assert!(!cal.is_business_day(date(2024, 7, 7)));
        assert!(cal.is_business_day(date(2024, 7, 8)));
    }

    #[test]
    fn business_days_skip_weekends_and_holidays() {
        let cal = AnbimaCalendar;
        // 2024-05-27 (Mon) .. 2024-06-03 (Mon), with Corpus Christi on
        // Thursday 2024-05-30 and a weekend in between.
        let days = cal.business_days(date(2024, 5, 27), date(2024, 6, 3));
        assert_eq!(
            days,
            vec![
                date(2024, 5, 27),
                date(2024, 5, 28),
                date(2024, 5, 29),
                date(2024, 5, 31),
                date(2024, 6, 3),
            ]
        );
    }

    #[test]
    fn business_days_empty_for_inverted_range() {
        let cal = AnbimaCalendar;
        assert!(cal.business_days(date(2024, 7, 8), date(2024, 7, 1)).is_empty());
    }

    #[test]
    fn business_days_are_ordered_and_within_range() {
        let cal = AnbimaCalendar;
        let start = date(2024, 2, 1);
        let end = date(2024, 3, 15);
        let days = cal.business_days(start, end);
        assert!(days.windows(2).all(|w| w[0] < w[1]));
        assert!(days.iter().all(|d| *d >= start && *d <= end));
        assert!(days.iter().all(|d| cal.is_business_day(*d)));
    }

    #[test]
    fn sub_business_days_steps_over_weekend() {
        let cal = AnbimaCalendar;
        // Monday minus one business day is the previous Friday.
        assert_eq!(cal.sub_business_days(date(2024, 7, 8), 1), date(2024, 7, 5));
    }

    #[test]
    fn sub_business_days_rolls_back_from_weekend() {
        let cal = AnbimaCalendar;
        // Starting on a Sunday rolls to Friday before stepping.
        assert_eq!(cal.sub_business_days(date(2024, 7, 7), 0), date(2024, 7, 5));
    }

    #[test]
    fn previous_business_day_skips_holiday() {
        let cal = AnbimaCalendar;
        // Good Friday 2024-03-29 followed by a weekend.
        assert_eq!(
            cal.previous_business_day(date(2024, 3, 31)),
            date(2024, 3, 28)
        );
    }
}
