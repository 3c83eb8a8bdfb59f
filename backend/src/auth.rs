use shared::models::Calendar;

/// Access decisions for calendars.
///
/// The inherited model treats the calendar UUID itself as the shared secret:
/// whoever presents the right UUID may enter, and destructive administration
/// needs the configured admin token. Swapping in a real scheme means
/// replacing this one implementation; the grid and event logic never look at
/// credentials.
pub trait AccessPolicy: Send + Sync {
    /// The "enter calendar" gate: does `key` open `calendar`?
    fn may_enter(&self, calendar: &Calendar, key: &str) -> bool;

    /// May the bearer of `token` delete calendars?
    fn may_administer(&self, token: Option<&str>) -> bool;
}

pub struct SharedKeyPolicy {
    admin_token: Option<String>,
}

impl SharedKeyPolicy {
    pub fn new(admin_token: Option<String>) -> Self {
        Self { admin_token }
    }
}

impl AccessPolicy for SharedKeyPolicy {
    fn may_enter(&self, calendar: &Calendar, key: &str) -> bool {
        calendar.id.to_string() == key.trim()
    }

    // With no token configured, nobody administers.
    fn may_administer(&self, token: Option<&str>) -> bool {
        match (&self.admin_token, token) {
            (Some(expected), Some(given)) => expected == given,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn calendar() -> Calendar {
        Calendar {
            id: Uuid::new_v4(),
            name: "Team".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn the_calendar_uuid_is_the_key() {
        let policy = SharedKeyPolicy::new(None);
        let calendar = calendar();

        assert!(policy.may_enter(&calendar, &calendar.id.to_string()));
        assert!(policy.may_enter(&calendar, &format!("  {}  ", calendar.id)));
        assert!(!policy.may_enter(&calendar, &Uuid::new_v4().to_string()));
        assert!(!policy.may_enter(&calendar, ""));
    }

    #[test]
    fn admin_requires_the_configured_token() {
        let policy = SharedKeyPolicy::new(Some("s3cret".to_string()));
        assert!(policy.may_administer(Some("s3cret")));
        assert!(!policy.may_administer(Some("wrong")));
        assert!(!policy.may_administer(None));

        let unconfigured = SharedKeyPolicy::new(None);
        assert!(!unconfigured.may_administer(Some("s3cret")));
    }
}
