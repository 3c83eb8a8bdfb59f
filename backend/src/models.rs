// Database models for Diesel
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Database representation of a calendar row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::calendars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CalendarRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<CalendarRow> for shared::models::Calendar {
    fn from(row: CalendarRow) -> Self {
        shared::models::Calendar {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

/// Database representation of an event row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EventRow {
    pub id: Uuid,
    pub calendar_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for shared::models::Event {
    fn from(row: EventRow) -> Self {
        shared::models::Event {
            id: row.id,
            calendar_id: row.calendar_id,
            title: row.title,
            description: row.description,
            date: row.date,
            created_at: row.created_at,
        }
    }
}
