use std::fmt;

use chrono::{Local, NaiveDate};
use tracing::trace;

/// Strict due-date format as the backend serves it.
pub const DUE_FORMAT: &str = "%Y-%m-%d";

/// Whole days between "today" and a task's due date, with sentinels for
/// overdue and missing/unreadable dates. Sentinels never count as due-soon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysLeft {
    Days(i64),
    Past,
    NotApplicable,
}

impl DaysLeft {
    /// Due-soon rule: a real day count between 0 and 3 inclusive.
    pub fn is_due_soon(self) -> bool {
        matches!(self, DaysLeft::Days(n) if (0..=3).contains(&n))
    }
}

impl fmt::Display for DaysLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysLeft::Days(n) => write!(f, "{n}"),
            DaysLeft::Past => f.write_str("past"),
            DaysLeft::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Days from `today` (local midnight) to `due` (local midnight). Pure: the
/// same inputs always produce the same value. A malformed date degrades to
/// `NotApplicable` for that task alone instead of failing the caller.
pub fn days_left(due: &str, today: NaiveDate) -> DaysLeft {
    let due = due.trim();
    if due.is_empty() {
        return DaysLeft::NotApplicable;
    }

    match NaiveDate::parse_from_str(due, DUE_FORMAT) {
        Ok(date) => {
            let diff = date.signed_duration_since(today).num_days();
            if diff < 0 {
                DaysLeft::Past
            } else {
                DaysLeft::Days(diff)
            }
        }
        Err(error) => {
            trace!(%due, %error, "unreadable due date, degrading to N/A");
            DaysLeft::NotApplicable
        }
    }
}

/// Today at local midnight, the reference point for every days-left pass.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DaysLeft, days_left};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).expect("valid date")
    }

    #[test]
    fn due_today_is_zero_days() {
        assert_eq!(days_left("2025-06-10", today()), DaysLeft::Days(0));
    }

    #[test]
    fn due_yesterday_is_past() {
        assert_eq!(days_left("2025-06-09", today()), DaysLeft::Past);
    }

    #[test]
    fn missing_due_is_not_applicable() {
        assert_eq!(days_left("", today()), DaysLeft::NotApplicable);
        assert_eq!(days_left("   ", today()), DaysLeft::NotApplicable);
    }

    #[test]
    fn malformed_due_degrades_to_not_applicable() {
        assert_eq!(days_left("next tuesday", today()), DaysLeft::NotApplicable);
        assert_eq!(days_left("2025-13-40", today()), DaysLeft::NotApplicable);
        assert_eq!(days_left("2025/06/10", today()), DaysLeft::NotApplicable);
    }

    #[test]
    fn computation_is_idempotent() {
        let first = days_left("2025-06-13", today());
        let second = days_left("2025-06-13", today());
        assert_eq!(first, second);
        assert_eq!(first, DaysLeft::Days(3));
    }

    #[test]
    fn due_soon_boundary() {
        assert!(DaysLeft::Days(0).is_due_soon());
        assert!(DaysLeft::Days(3).is_due_soon());
        assert!(!DaysLeft::Days(4).is_due_soon());
        assert!(!DaysLeft::Past.is_due_soon());
        assert!(!DaysLeft::NotApplicable.is_due_soon());
    }

    #[test]
    fn sentinels_format_as_documented() {
        assert_eq!(DaysLeft::Days(2).to_string(), "2");
        assert_eq!(DaysLeft::Past.to_string(), "past");
        assert_eq!(DaysLeft::NotApplicable.to_string(), "N/A");
    }
}
