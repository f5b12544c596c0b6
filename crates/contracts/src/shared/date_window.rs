//! Date restrictions attached to roles, plus the string formats used by
//! `<input type="date">` and `<input type="datetime-local">`.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// Accepts both `YYYY-MM-DDTHH:MM` and the seconds variant some browsers emit.
pub fn parse_datetime_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

pub fn format_datetime_input(value: NaiveDateTime) -> String {
    value.format(DATETIME_INPUT_FORMAT).to_string()
}

// ============================================================================
// Dashboard range
// ============================================================================

/// Restriction on the dashboard's from/to dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardRangeRule {
    Free,
    /// `to` is pinned to today and `from` must stay within
    /// `[to - lookback_days, to]`.
    TrailingWindow { lookback_days: i64 },
}

/// Why a requested range was rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeAdjustment {
    ToPinnedToToday,
    FromRaisedToWindowStart { lookback_days: i64 },
    FromLoweredToTo,
}

impl fmt::Display for RangeAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeAdjustment::ToPinnedToToday => {
                f.write_str("The end date is fixed to today")
            }
            RangeAdjustment::FromRaisedToWindowStart { lookback_days } => write!(
                f,
                "You can only view the last {} days. From date has been adjusted.",
                lookback_days
            ),
            RangeAdjustment::FromLoweredToTo => {
                f.write_str("From date cannot be later than to date. From date has been adjusted.")
            }
        }
    }
}

/// Outcome of applying a [`DashboardRangeRule`] to a requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCorrection {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Last adjustment applied, `None` when the range was already valid.
    pub adjustment: Option<RangeAdjustment>,
}

impl RangeCorrection {
    pub fn changed(&self) -> bool {
        self.adjustment.is_some()
    }
}

impl DashboardRangeRule {
    pub fn locks_to_date(&self) -> bool {
        matches!(self, DashboardRangeRule::TrailingWindow { .. })
    }

    /// Earliest permitted `from` for the given `to`.
    pub fn window_start(&self, to: NaiveDate) -> Option<NaiveDate> {
        match self {
            DashboardRangeRule::Free => None,
            DashboardRangeRule::TrailingWindow { lookback_days } => {
                Some(to - Duration::days(*lookback_days))
            }
        }
    }

    /// Clamps `from` into the window ending at `to`.
    pub fn clamp_from(&self, from: NaiveDate, to: NaiveDate) -> (NaiveDate, Option<RangeAdjustment>) {
        match self {
            DashboardRangeRule::Free => (from, None),
            DashboardRangeRule::TrailingWindow { lookback_days } => {
                let start = to - Duration::days(*lookback_days);
                if from < start {
                    (
                        start,
                        Some(RangeAdjustment::FromRaisedToWindowStart {
                            lookback_days: *lookback_days,
                        }),
                    )
                } else if from > to {
                    (to, Some(RangeAdjustment::FromLoweredToTo))
                } else {
                    (from, None)
                }
            }
        }
    }

    /// Rewrites a requested range so it satisfies the rule on `today`.
    pub fn correct(&self, from: NaiveDate, to: NaiveDate, today: NaiveDate) -> RangeCorrection {
        match self {
            DashboardRangeRule::Free => RangeCorrection {
                from,
                to,
                adjustment: None,
            },
            DashboardRangeRule::TrailingWindow { .. } => {
                let mut adjustment = None;
                if to != today {
                    adjustment = Some(RangeAdjustment::ToPinnedToToday);
                }
                let (from, from_adjustment) = self.clamp_from(from, today);
                RangeCorrection {
                    from,
                    to: today,
                    adjustment: from_adjustment.or(adjustment),
                }
            }
        }
    }
}

// ============================================================================
// Sale datetime
// ============================================================================

/// Restriction on the datetime of a new sales entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleDateTimeRule {
    Free,
    /// Date locked to today, time freely editable.
    SameDay,
}

impl SaleDateTimeRule {
    /// `min`/`max` for the datetime control, if any.
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match self {
            SaleDateTimeRule::Free => None,
            SaleDateTimeRule::SameDay => {
                Some((today.and_hms_opt(0, 0, 0)?, today.and_hms_opt(23, 59, 0)?))
            }
        }
    }

    /// Returns the value the control must be reset to, or `None` if
    /// `candidate` is acceptable. The edited time is kept.
    pub fn correct(&self, candidate: NaiveDateTime, today: NaiveDate) -> Option<NaiveDateTime> {
        match self {
            SaleDateTimeRule::SameDay if candidate.date() != today => {
                Some(today.and_time(candidate.time()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date_input(s).unwrap()
    }

    const SALES_WINDOW: DashboardRangeRule = DashboardRangeRule::TrailingWindow { lookback_days: 3 };

    #[test]
    fn from_below_window_is_raised_to_window_start() {
        let (from, adjustment) = SALES_WINDOW.clamp_from(date("2024-06-01"), date("2024-06-10"));
        assert_eq!(from, date("2024-06-07"));
        assert_eq!(
            adjustment,
            Some(RangeAdjustment::FromRaisedToWindowStart { lookback_days: 3 })
        );
    }

    #[test]
    fn from_after_to_is_lowered_to_to() {
        let (from, adjustment) = SALES_WINDOW.clamp_from(date("2024-06-12"), date("2024-06-10"));
        assert_eq!(from, date("2024-06-10"));
        assert_eq!(adjustment, Some(RangeAdjustment::FromLoweredToTo));
    }

    #[test]
    fn from_inside_window_is_kept() {
        let (from, adjustment) = SALES_WINDOW.clamp_from(date("2024-06-07"), date("2024-06-10"));
        assert_eq!(from, date("2024-06-07"));
        assert!(adjustment.is_none());
    }

    #[test]
    fn to_is_pinned_to_today() {
        let today = date("2024-06-10");
        let corrected = SALES_WINDOW.correct(date("2024-06-08"), date("2024-06-05"), today);
        assert_eq!(corrected.to, today);
        assert_eq!(corrected.from, date("2024-06-08"));
        assert_eq!(corrected.adjustment, Some(RangeAdjustment::ToPinnedToToday));
    }

    #[test]
    fn free_range_is_untouched() {
        let corrected =
            DashboardRangeRule::Free.correct(date("2023-01-01"), date("2024-06-10"), date("2024-06-10"));
        assert!(!corrected.changed());
        assert_eq!(corrected.from, date("2023-01-01"));
    }

    #[test]
    fn same_day_lock_keeps_time() {
        let today = date("2024-06-10");
        let yesterday = parse_datetime_input("2024-06-09T14:30").unwrap();
        let fixed = SaleDateTimeRule::SameDay.correct(yesterday, today).unwrap();
        assert_eq!(format_datetime_input(fixed), "2024-06-10T14:30");

        let fine = parse_datetime_input("2024-06-10T09:05").unwrap();
        assert!(SaleDateTimeRule::SameDay.correct(fine, today).is_none());
        assert!(SaleDateTimeRule::Free.correct(yesterday, today).is_none());
    }

    #[test]
    fn same_day_bounds_cover_the_calendar_day() {
        let (min, max) = SaleDateTimeRule::SameDay.bounds(date("2024-06-10")).unwrap();
        assert_eq!(format_datetime_input(min), "2024-06-10T00:00");
        assert_eq!(format_datetime_input(max), "2024-06-10T23:59");
    }

    #[test]
    fn datetime_input_accepts_seconds() {
        assert!(parse_datetime_input("2024-06-10T14:30:15").is_some());
        assert!(parse_datetime_input("10/06/2024").is_none());
    }
}
