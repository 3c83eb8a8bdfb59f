use axum::{
    extract::{Path, Query, State},
    Form, Json,
};
use chrono::NaiveDate;
use uuid::Uuid;
use validator::Validate;

use crate::db;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;
use shared::api::{DayEventsQuery, DayEventsResponse, EventEditForm, EventForm, StatusResponse};

const ISO_DATE: &str = "%Y-%m-%d";

/// `GET /calendars/:id/events?date=YYYY-MM-DD` — all events on one day.
pub async fn day_events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DayEventsQuery>,
) -> ApiResult<Json<DayEventsResponse>> {
    let date = NaiveDate::parse_from_str(&query.date, ISO_DATE)
        .map_err(|_| AppError::Validation("invalid date".to_string()))?;

    let mut conn = super::connection(&state.pool).await?;

    db::calendars::get_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound("calendar not found".to_string()))?;

    let events = db::events::list_on_date(&mut conn, id, date).await?;

    Ok(Json(DayEventsResponse {
        events: events.into_iter().map(Into::into).collect(),
    }))
}

/// `POST /calendars/:id/events` — create an event. An unparseable date is
/// answered in-band as `{"status":"error"}`, matching the original contract;
/// nothing is written in that case.
pub async fn add_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<EventForm>,
) -> ApiResult<Json<StatusResponse>> {
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut conn = super::connection(&state.pool).await?;

    db::calendars::get_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound("calendar not found".to_string()))?;

    let Ok(date) = NaiveDate::parse_from_str(&form.date, ISO_DATE) else {
        return Ok(Json(StatusResponse::error("Invalid date")));
    };

    let event =
        db::events::create(&mut conn, id, &form.title, form.description.as_deref(), date).await?;

    tracing::debug!(calendar_id = %id, event_id = %event.id, "event created");

    Ok(Json(StatusResponse::success()))
}

/// `POST /calendars/:id/events/:event_id` — edit title/description in place.
/// Absent fields keep their current values; the date never changes. An event
/// belonging to a different calendar is not found here.
pub async fn edit_event(
    State(state): State<AppState>,
    Path((id, event_id)): Path<(Uuid, Uuid)>,
    Form(form): Form<EventEditForm>,
) -> ApiResult<Json<StatusResponse>> {
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut conn = super::connection(&state.pool).await?;

    let event = db::events::get_scoped(&mut conn, id, event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("event not found".to_string()))?;

    let title = form.title.as_deref().unwrap_or(&event.title);
    let description = form.description.as_deref().or(event.description.as_deref());

    db::events::update(&mut conn, id, event_id, title, description).await?;

    Ok(Json(StatusResponse::success()))
}

/// `POST /calendars/:id/events/:event_id/delete`
pub async fn delete_event(
    State(state): State<AppState>,
    Path((id, event_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<StatusResponse>> {
    let mut conn = super::connection(&state.pool).await?;

    let deleted = db::events::delete(&mut conn, id, event_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("event not found".to_string()));
    }

    Ok(Json(StatusResponse::success()))
}
