pub mod calendars;
pub mod events;
pub mod health;
pub mod month;

use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::AsyncPgConnection;

use crate::db::DbPool;
use crate::error::AppError;

pub(crate) async fn connection(pool: &DbPool) -> Result<Object<AsyncPgConnection>, AppError> {
    pool.get()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("database pool: {e}")))
}
