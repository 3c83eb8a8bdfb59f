use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Datelike;
use uuid::Uuid;

use crate::error::{ApiResult, AppError};
use crate::state::AppState;
use crate::{db, grid};
use shared::api::{MonthPageQuery, MonthViewResponse};

/// `GET /calendars/:id/month` — this month, per the injected clock.
pub async fn current_month_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MonthPageQuery>,
) -> ApiResult<Json<MonthViewResponse>> {
    let today = state.clock.today();
    render_month(&state, id, today.year(), today.month() as i32, query.page).await
}

/// `GET /calendars/:id/month/:year/:month` — an explicit month. Values that
/// do not name a real month clamp to today instead of failing.
pub async fn month_view(
    State(state): State<AppState>,
    Path((id, year, month)): Path<(Uuid, i32, i32)>,
    Query(query): Query<MonthPageQuery>,
) -> ApiResult<Json<MonthViewResponse>> {
    render_month(&state, id, year, month, query.page).await
}

async fn render_month(
    state: &AppState,
    id: Uuid,
    year: i32,
    month: i32,
    page: Option<i32>,
) -> ApiResult<Json<MonthViewResponse>> {
    let mut conn = super::connection(&state.pool).await?;

    let calendar = db::calendars::get_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound("calendar not found".to_string()))?;

    let today = state.clock.today();
    let resolved = grid::resolve_month(year, month, today);
    let events =
        db::events::list_between(&mut conn, id, resolved.first_day, resolved.last_day).await?;

    Ok(Json(MonthViewResponse {
        calendar: calendar.into(),
        view: grid::build_month_view(&resolved, page, today, events),
    }))
}
