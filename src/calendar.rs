use chrono::{Datelike, NaiveDate};

use crate::errors::{CalculatorError, Result};
use crate::types::{DayCountResult, YearsMonthsDays};

/// days in a 30/360 year
pub const DAYS_PER_YEAR: i64 = 360;
/// days in a 30/360 month
pub const DAYS_PER_MONTH: i64 = 30;

/// 30/360 calendar
///
/// Every month counts as 30 days and every year as 360. Day-of-month is taken
/// literally, so the 31st is not clamped to the 30th and February is not
/// stretched to 30 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayCountCalendar;

impl DayCountCalendar {
    pub fn new() -> Self {
        Self
    }

    /// calculate 30/360 days between dates
    pub fn days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let d1 = start.day() as i64;
        let d2 = end.day() as i64;

        (y2 - y1) * DAYS_PER_YEAR + (m2 - m1) * DAYS_PER_MONTH + (d2 - d1)
    }

    /// split a non-negative day count into years, months and days
    pub fn decompose(&self, total_days: i64) -> YearsMonthsDays {
        let remainder = total_days % DAYS_PER_YEAR;
        YearsMonthsDays {
            years: total_days / DAYS_PER_YEAR,
            months: remainder / DAYS_PER_MONTH,
            days: total_days % DAYS_PER_MONTH,
        }
    }

    /// validated date difference, refusing ranges where end is not after start
    pub fn date_difference(&self, start: NaiveDate, end: NaiveDate) -> Result<DayCountResult> {
        if end <= start {
            return Err(CalculatorError::InvalidDateRange { start, end });
        }

        let total_days = self.days_between(start, end);
        Ok(DayCountResult {
            total_days,
            breakdown: self.decompose(total_days),
        })
    }
}

/// parse an ISO `YYYY-MM-DD` date as entered in a date field
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| CalculatorError::InvalidDate {
        message: format!("{raw:?}: {e}"),
    })
}
