use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Sentinel stored when no location is given at submission.
pub const UNKNOWN_LOCATION: &str = "UNKNOWN";

/// One logged range of days worked, the only persisted entity.
#[derive(Debug, Clone, Serialize)]
pub struct WorkInterval {
    pub id: i64,
    pub owner_id: String,      // ⇔ intervals.owner_id (TEXT)
    pub begin: NaiveDate,      // ⇔ intervals.begin_date (TEXT "YYYY-MM-DD")
    pub end: NaiveDate,        // ⇔ intervals.end_date (TEXT "YYYY-MM-DD")
    pub days: i64,             // ⇔ intervals.days, inclusive count
    pub location: String,      // ⇔ intervals.location (TEXT, default 'UNKNOWN')
    pub notes: Option<String>, // ⇔ intervals.notes (TEXT, nullable)
    pub status: bool,          // ⇔ intervals.status, counts toward quota
    pub created_at: String,    // ⇔ intervals.created_at (TEXT, ISO8601)
}

/// Inclusive day count of a range: begin == end yields 1.
pub fn count_days(begin: NaiveDate, end: NaiveDate) -> i64 {
    (end - begin).num_days() + 1
}

impl WorkInterval {
    /// High-level constructor for intervals submitted from the CLI.
    /// - Computes `days` from the inclusive range
    /// - Applies the `UNKNOWN` location sentinel
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(
        owner_id: &str,
        begin: NaiveDate,
        end: NaiveDate,
        location: Option<String>,
        notes: Option<String>,
        status: bool,
    ) -> Self {
        Self {
            id: 0,
            owner_id: owner_id.to_string(),
            begin,
            end,
            days: count_days(begin, end),
            location: location.unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
            notes,
            status,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn begin_str(&self) -> String {
        self.begin.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    /// True when the given day falls inside the inclusive range.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.begin <= day && day <= self.end
    }
}
