use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Calendar, Event, MonthView};

// ============================================================================
// Calendar API Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCalendarRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Form body for the "enter calendar" gate: the calendar's name plus the
/// key the visitor claims is its UUID.
#[derive(Debug, Serialize, Deserialize)]
pub struct EnterCalendarForm {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Calendar> for CalendarResponse {
    fn from(calendar: Calendar) -> Self {
        Self {
            id: calendar.id,
            name: calendar.name,
            created_at: calendar.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListCalendarsResponse {
    pub calendars: Vec<CalendarResponse>,
    pub total: usize,
}

// ============================================================================
// Month View API Types
// ============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MonthPageQuery {
    /// Explicit year-picker page; defaults to the page containing the
    /// rendered year.
    pub page: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthViewResponse {
    pub calendar: CalendarResponse,
    #[serde(flatten)]
    pub view: MonthView,
}

// ============================================================================
// Event API Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct EventForm {
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    /// ISO date string, `YYYY-MM-DD`.
    pub date: String,
}

/// Edit payload; absent fields keep the event's current values.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct EventEditForm {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayEventsQuery {
    /// ISO date string, `YYYY-MM-DD`.
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.date,
            created_at: event.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayEventsResponse {
    pub events: Vec<EventResponse>,
}

// ============================================================================
// Status / Error Types
// ============================================================================

/// The `{"status": "success"|"error"}` envelope event mutations answer with.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_success_has_no_message_field() {
        let json = serde_json::to_value(StatusResponse::success()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "success" }));
    }

    #[test]
    fn status_error_carries_message() {
        let json = serde_json::to_value(StatusResponse::error("Invalid date")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "error", "message": "Invalid date" })
        );
    }

    #[test]
    fn create_calendar_request_rejects_empty_name() {
        let request = CreateCalendarRequest {
            name: String::new(),
        };
        assert!(request.validate().is_err());

        let request = CreateCalendarRequest {
            name: "Team standup".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
