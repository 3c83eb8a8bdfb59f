use std::sync::Arc;

use crate::auth::{AccessPolicy, SharedKeyPolicy};
use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::db::DbPool;

/// Request-scoped collaborators: the pool plus the injected clock and
/// access-policy seams.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub clock: Arc<dyn Clock>,
    pub access: Arc<dyn AccessPolicy>,
}

impl AppState {
    pub fn new(pool: DbPool, config: &AppConfig) -> Self {
        Self {
            pool,
            clock: Arc::new(SystemClock),
            access: Arc::new(SharedKeyPolicy::new(config.admin_token.clone())),
        }
    }
}
