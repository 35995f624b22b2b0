//! Relative due-date buckets.
//!
//! Buckets are computed against "today" at projection time, at whole-day
//! granularity. Lower bounds are inclusive: a task due today is "this
//! week", a task due exactly a week out is still "this week".

use chrono::{Days, Months, NaiveDate};

/// The four relative due-date buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueBucket {
    /// Due before today.
    Overdue,
    /// Due within the next seven days (inclusive).
    ThisWeek,
    /// Due after this week, up to one month out (inclusive).
    NextWeek,
    /// Due beyond the one-month boundary.
    Future,
}

impl DueBucket {
    /// All buckets in display order.
    pub const ALL: [DueBucket; 4] = [
        DueBucket::Overdue,
        DueBucket::ThisWeek,
        DueBucket::NextWeek,
        DueBucket::Future,
    ];

    /// Returns the string representation used as a group id.
    pub fn as_str(&self) -> &'static str {
        match self {
            DueBucket::Overdue => "overdue",
            DueBucket::ThisWeek => "this_week",
            DueBucket::NextWeek => "next_week",
            DueBucket::Future => "future",
        }
    }

    /// Display title for the column header.
    pub fn title(&self) -> &'static str {
        match self {
            DueBucket::Overdue => "Overdue",
            DueBucket::ThisWeek => "This Week",
            DueBucket::NextWeek => "Next Week",
            DueBucket::Future => "Future",
        }
    }

    /// Classify a due date relative to `today`.
    pub fn classify(due: NaiveDate, today: NaiveDate) -> DueBucket {
        let week_end = today.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
        let month_end = today
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);

        if due < today {
            DueBucket::Overdue
        } else if due <= week_end {
            DueBucket::ThisWeek
        } else if due <= month_end {
            DueBucket::NextWeek
        } else {
            DueBucket::Future
        }
    }
}
