use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::holidayregistry::HolidaySource;
use super::weeklyoffdays::WeeklyOffDays;

/// Non-working days of a single year: public holidays of a locale and city
/// plus the weekly off-days.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    year: i32,
    weekly_off_days: WeeklyOffDays,
    holidays: HashSet<NaiveDate>
}

impl HolidayCalendar {
    pub fn new(year: i32, weekly_off_days: WeeklyOffDays, holidays: impl IntoIterator<Item = NaiveDate>) -> HolidayCalendar {
        HolidayCalendar {
            year,
            weekly_off_days,
            holidays: holidays.into_iter().collect()
        }
    }

    pub fn build(
        source: &dyn HolidaySource,
        year: i32,
        locale: &str,
        city: &str,
        weekly_off_days: WeeklyOffDays
    ) -> HolidayCalendar {
        let holidays = source.get_holidays(year, locale, city);
        debug!(year, locale, city, holidays = holidays.len(), "holiday calendar built");
        HolidayCalendar::new(year, weekly_off_days, holidays)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn weekly_off_days(&self) -> WeeklyOffDays {
        self.weekly_off_days
    }

    pub fn holiday_set(&self) -> &HashSet<NaiveDate> {
        &self.holidays
    }

    /// Whether the holiday table of this calendar applies to `d`.
    #[inline]
    pub fn covers(&self, d: NaiveDate) -> bool {
        d.year() == self.year
    }

    #[inline]
    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.contains(&d)
    }

    #[inline]
    pub fn is_non_working(&self, d: NaiveDate) -> bool {
        self.weekly_off_days.is_off_date(d) || self.is_holiday(d)
    }

    #[inline]
    pub fn is_working_day(&self, d: NaiveDate) -> bool {
        !self.is_non_working(d)
    }
}

/// The calendars a scan needs, one per year, built the first time a date of
/// that year is asked about.
pub struct YearCalendars<'a> {
    source: &'a dyn HolidaySource,
    locale: &'a str,
    city: &'a str,
    weekly_off_days: WeeklyOffDays,
    calendars: BTreeMap<i32, HolidayCalendar>
}

impl<'a> YearCalendars<'a> {
    pub fn new(
        source: &'a dyn HolidaySource,
        locale: &'a str,
        city: &'a str,
        weekly_off_days: WeeklyOffDays
    ) -> YearCalendars<'a> {
        YearCalendars {
            source,
            locale,
            city,
            weekly_off_days,
            calendars: BTreeMap::new()
        }
    }

    pub fn calendar_for(&mut self, d: NaiveDate) -> &HolidayCalendar {
        let (source, locale, city, weekly_off_days) = (self.source, self.locale, self.city, self.weekly_off_days);
        self.calendars
            .entry(d.year())
            .or_insert_with(|| HolidayCalendar::build(source, d.year(), locale, city, weekly_off_days))
    }

    pub fn is_non_working(&mut self, d: NaiveDate) -> bool {
        self.calendar_for(d).is_non_working(d)
    }

    /// Years whose calendar has been built so far, ascending.
    pub fn built_years(&self) -> Vec<i32> {
        self.calendars.keys().copied().collect()
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::rstest;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Only New Year's Day, counting how many tables were requested.
    struct NewYearOnly {
        calls: AtomicUsize
    }

    impl HolidaySource for NewYearOnly {
        fn get_holidays(&self, year: i32, _locale: &str, _city: &str) -> Vec<NaiveDate> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            vec![date(year, 1, 1)]
        }
    }

    #[rstest]
    fn weekly_off_days_and_holidays_are_non_working() {
        let weekend = WeeklyOffDays::from_indices(&[0, 6]).unwrap();
        let calendar = HolidayCalendar::new(2019, weekend, [date(2019, 4, 25)]);

        assert!(calendar.is_non_working(date(2019, 4, 25)));
        assert!(calendar.is_non_working(date(2019, 4, 27)));
        assert!(calendar.is_working_day(date(2019, 4, 26)));
        assert!(calendar.covers(date(2019, 12, 31)));
        assert!(!calendar.covers(date(2020, 1, 1)));
    }

    #[rstest]
    fn calendar_of_one_year_ignores_holidays_of_the_next() {
        let source = NewYearOnly { calls: AtomicUsize::new(0) };
        let calendar = HolidayCalendar::build(&source, 2019, "IT", "Milano", WeeklyOffDays::none());

        assert!(calendar.is_non_working(date(2019, 1, 1)));
        assert!(!calendar.is_non_working(date(2020, 1, 1)));
    }

    #[rstest]
    fn crossing_into_a_new_year_builds_its_calendar_once() {
        let source = NewYearOnly { calls: AtomicUsize::new(0) };
        let mut calendars = YearCalendars::new(&source, "IT", "Milano", WeeklyOffDays::none());

        assert!(!calendars.is_non_working(date(2019, 12, 31)));
        assert!(calendars.is_non_working(date(2020, 1, 1)));
        assert!(!calendars.is_non_working(date(2019, 12, 30)));
        assert!(calendars.is_non_working(date(2020, 1, 1)));

        assert_eq!(calendars.built_years(), vec![2019, 2020]);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
