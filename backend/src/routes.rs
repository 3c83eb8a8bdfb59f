use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{calendars, events, health, month};
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))

        // Calendar routes
        .route("/calendars", get(calendars::list_calendars))
        .route("/calendars", post(calendars::create_calendar))
        .route("/calendars/enter", post(calendars::enter_calendar))
        .route("/calendars/:id", get(calendars::get_calendar))
        .route("/calendars/:id", delete(calendars::delete_calendar))

        // Month view routes
        .route("/calendars/:id/month", get(month::current_month_view))
        .route("/calendars/:id/month/:year/:month", get(month::month_view))

        // Event routes
        .route("/calendars/:id/events", get(events::day_events))
        .route("/calendars/:id/events", post(events::add_event))
        .route("/calendars/:id/events/:event_id", post(events::edit_event))
        .route(
            "/calendars/:id/events/:event_id/delete",
            post(events::delete_event),
        )
}
