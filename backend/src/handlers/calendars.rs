use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    Form, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::db;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;
use shared::api::{
    CalendarResponse, CreateCalendarRequest, EnterCalendarForm, ListCalendarsResponse,
    StatusResponse,
};

pub async fn list_calendars(State(state): State<AppState>) -> ApiResult<Json<ListCalendarsResponse>> {
    let mut conn = super::connection(&state.pool).await?;

    let calendars = db::calendars::list_all(&mut conn).await?;
    let calendars: Vec<CalendarResponse> = calendars.into_iter().map(Into::into).collect();

    Ok(Json(ListCalendarsResponse {
        total: calendars.len(),
        calendars,
    }))
}

pub async fn create_calendar(
    State(state): State<AppState>,
    Json(payload): Json<CreateCalendarRequest>,
) -> ApiResult<Json<CalendarResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("calendar name is required".to_string()));
    }

    let mut conn = super::connection(&state.pool).await?;
    let calendar = db::calendars::create(&mut conn, name).await?;

    tracing::info!(calendar_id = %calendar.id, "calendar created");

    Ok(Json(calendar.into()))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CalendarResponse>> {
    let mut conn = super::connection(&state.pool).await?;

    let calendar = db::calendars::get_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound("calendar not found".to_string()))?;

    Ok(Json(calendar.into()))
}

/// The "enter calendar" gate: look the calendar up by name and check the
/// supplied key against it through the access policy.
pub async fn enter_calendar(
    State(state): State<AppState>,
    Form(form): Form<EnterCalendarForm>,
) -> ApiResult<Json<CalendarResponse>> {
    let mut conn = super::connection(&state.pool).await?;

    let calendar = db::calendars::get_by_name(&mut conn, &form.name)
        .await?
        .ok_or_else(|| AppError::NotFound("calendar not found".to_string()))?;

    if !state.access.may_enter(&calendar, &form.key) {
        return Err(AppError::Unauthorized("wrong calendar key".to_string()));
    }

    Ok(Json(calendar.into()))
}

pub async fn delete_calendar(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> ApiResult<Json<StatusResponse>> {
    if !state.access.may_administer(bearer_token(&headers)) {
        return Err(AppError::Unauthorized("admin token required".to_string()));
    }

    let mut conn = super::connection(&state.pool).await?;

    // Events go with the calendar via ON DELETE CASCADE.
    let deleted = db::calendars::delete(&mut conn, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("calendar not found".to_string()));
    }

    tracing::info!(calendar_id = %id, "calendar deleted");

    Ok(Json(StatusResponse::success()))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_strips_the_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer s3cret"),
        );
        assert_eq!(bearer_token(&headers), Some("s3cret"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes_and_absence() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcg=="),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
