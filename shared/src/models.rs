use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-created calendar.
///
/// The UUID is generated at creation and doubles as the share key: whoever
/// knows it can open the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A dated entry in exactly one calendar.
///
/// The date carries no time component and is fixed at creation; edits only
/// touch title and description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub calendar_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day-of-month number.
    pub day: u32,
    /// Full ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// True for leading/trailing cells that belong to an adjacent month.
    pub padding: bool,
}

/// A paged 15-year slice of the 1900–2100 year-picker range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    pub start_year: i32,
    pub end_year: i32,
    pub years: Vec<i32>,
    pub page: i32,
    /// Absent when the window already starts at 1900.
    pub prev_page: Option<i32>,
    /// Absent when the window already reaches 2100.
    pub next_page: Option<i32>,
}

/// Everything a month page needs: the week grid, the month's events grouped
/// by day, adjacent-month navigation and the year-picker window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthView {
    /// Year actually rendered (post clamp-to-today resolution).
    pub year: i32,
    /// Month actually rendered, 1–12.
    pub month: u32,
    pub weeks: Vec<Vec<DayCell>>,
    /// ISO date string -> events on that day, in storage order. Present even
    /// when the month has no events.
    pub events_by_day: HashMap<String, Vec<Event>>,
    pub prev_year: i32,
    pub prev_month: u32,
    pub next_year: i32,
    pub next_month: u32,
    pub year_window: YearWindow,
    /// The real-world year, for highlighting "today".
    pub current_year: i32,
}
