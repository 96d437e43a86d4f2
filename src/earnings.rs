//! Time-bucketed earnings derived from an hourly rate and monthly hours

use serde::{Deserialize, Serialize};

/// Days in a calendar month used by every per-day figure
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Seconds in a 30-day month (30 * 24 * 60 * 60)
pub const SECONDS_PER_MONTH: f64 = DAYS_PER_MONTH * 24.0 * 60.0 * 60.0;

pub const DAYS_PER_WEEK: f64 = 7.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Earnings for one hourly rate, spread over calendar and working time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    // Calendar time (monthly income spread over the whole month)
    pub per_second: f64,
    pub per_minute: f64,
    pub per_hour: f64,
    pub per_day: f64,
    pub per_week: f64,
    pub per_month: f64,
    pub per_year: f64,

    // Working time (only the hours actually worked)
    pub actual_working_second: f64,
    pub actual_working_minute: f64,

    /// Average working hours per calendar day
    pub working_hours_per_day: f64,
}

/// Derive the full earnings breakdown for an hourly rate.
///
/// No validation happens here: `hours_per_month = 0` gives zero per-day and
/// per-week figures, and non-finite inputs produce non-finite outputs.
pub fn derive_earnings(hourly_rate: f64, hours_per_month: f64) -> EarningsBreakdown {
    let monthly_income = hourly_rate * hours_per_month;

    let per_second = monthly_income / SECONDS_PER_MONTH;
    let per_minute = per_second * 60.0;
    let per_hour = hourly_rate;

    let working_hours_per_day = hours_per_month / DAYS_PER_MONTH;
    let per_day = per_hour * working_hours_per_day;
    let per_week = per_day * DAYS_PER_WEEK;

    EarningsBreakdown {
        per_second,
        per_minute,
        per_hour,
        per_day,
        per_week,
        per_month: monthly_income,
        per_year: monthly_income * MONTHS_PER_YEAR,
        actual_working_second: hourly_rate / 3600.0,
        actual_working_minute: hourly_rate / 60.0,
        working_hours_per_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_and_yearly() {
        let earnings = derive_earnings(10.0, 160.0);
        assert_eq!(earnings.per_month, 1600.0);
        assert_eq!(earnings.per_year, 19200.0);
    }

    #[test]
    fn test_per_hour_is_input_rate() {
        for &(rate, hours) in &[(0.0, 160.0), (137.5, 37.0), (200.0, 0.0), (1e6, 200.0)] {
            assert_eq!(derive_earnings(rate, hours).per_hour, rate);
        }
    }

    #[test]
    fn test_calendar_breakdown() {
        let earnings = derive_earnings(200.0, 160.0);

        // 32000 over 2_592_000 seconds
        assert_relative_eq!(earnings.per_second, 32000.0 / 2_592_000.0);
        assert_relative_eq!(earnings.per_minute, earnings.per_second * 60.0);
        assert_relative_eq!(earnings.working_hours_per_day, 160.0 / 30.0);
        assert_relative_eq!(earnings.per_day, 200.0 * 160.0 / 30.0);
        assert_relative_eq!(earnings.per_week, earnings.per_day * 7.0);
    }

    #[test]
    fn test_working_time_ignores_hours() {
        let a = derive_earnings(180.0, 160.0);
        let b = derive_earnings(180.0, 40.0);

        assert_eq!(a.actual_working_second, 0.05);
        assert_eq!(a.actual_working_minute, 3.0);
        assert_eq!(a.actual_working_second, b.actual_working_second);
        assert_eq!(a.actual_working_minute, b.actual_working_minute);
    }

    #[test]
    fn test_zero_hours() {
        let earnings = derive_earnings(150.0, 0.0);
        assert_eq!(earnings.per_month, 0.0);
        assert_eq!(earnings.per_day, 0.0);
        assert_eq!(earnings.per_week, 0.0);
        assert_eq!(earnings.working_hours_per_day, 0.0);
        assert_eq!(earnings.actual_working_minute, 2.5);
    }

    #[test]
    fn test_non_finite_passes_through() {
        let earnings = derive_earnings(f64::NAN, 160.0);
        assert!(earnings.per_month.is_nan());

        let earnings = derive_earnings(f64::INFINITY, 160.0);
        assert!(earnings.per_year.is_infinite());
    }
}
