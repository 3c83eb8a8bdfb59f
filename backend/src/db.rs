use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    AsyncPgConnection,
};

pub type DbPool = Pool<AsyncPgConnection>;

pub fn establish_connection_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let pool = Pool::builder(config).build()?;

    Ok(pool)
}

// Calendar database operations
pub mod calendars {
    use diesel::prelude::*;
    use diesel_async::{AsyncPgConnection, RunQueryDsl};
    use shared::models::Calendar;
    use uuid::Uuid;

    use crate::models::CalendarRow;

    pub async fn list_all(conn: &mut AsyncPgConnection) -> QueryResult<Vec<Calendar>> {
        use crate::schema::calendars::dsl::*;

        let rows = calendars
            .order_by(created_at.desc())
            .load::<CalendarRow>(conn)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(
        conn: &mut AsyncPgConnection,
        calendar: Uuid,
    ) -> QueryResult<Option<Calendar>> {
        use crate::schema::calendars::dsl::*;

        let row = calendars
            .filter(id.eq(calendar))
            .first::<CalendarRow>(conn)
            .await
            .optional()?;

        Ok(row.map(Into::into))
    }

    pub async fn get_by_name(
        conn: &mut AsyncPgConnection,
        calendar_name: &str,
    ) -> QueryResult<Option<Calendar>> {
        use crate::schema::calendars::dsl::*;

        let row = calendars
            .filter(name.eq(calendar_name))
            .first::<CalendarRow>(conn)
            .await
            .optional()?;

        Ok(row.map(Into::into))
    }

    pub async fn create(
        conn: &mut AsyncPgConnection,
        calendar_name: &str,
    ) -> QueryResult<Calendar> {
        use crate::schema::calendars::dsl::*;

        let row = diesel::insert_into(calendars)
            .values((id.eq(Uuid::new_v4()), name.eq(calendar_name)))
            .get_result::<CalendarRow>(conn)
            .await?;

        Ok(row.into())
    }

    /// Returns the number of deleted rows; events go with the calendar via
    /// the schema's `ON DELETE CASCADE`.
    pub async fn delete(conn: &mut AsyncPgConnection, calendar: Uuid) -> QueryResult<usize> {
        use crate::schema::calendars::dsl::*;

        diesel::delete(calendars.filter(id.eq(calendar)))
            .execute(conn)
            .await
    }
}

// Event database operations
pub mod events {
    use chrono::NaiveDate;
    use diesel::prelude::*;
    use diesel_async::{AsyncPgConnection, RunQueryDsl};
    use shared::models::Event;
    use uuid::Uuid;

    use crate::models::EventRow;

    /// Events of one calendar falling within `[from_date, to_date]`, in
    /// creation order. This is the month view's single data dependency.
    pub async fn list_between(
        conn: &mut AsyncPgConnection,
        calendar: Uuid,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> QueryResult<Vec<Event>> {
        use crate::schema::events::dsl::*;

        let rows = events
            .filter(calendar_id.eq(calendar))
            .filter(date.between(from_date, to_date))
            .order_by(created_at.asc())
            .load::<EventRow>(conn)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn list_on_date(
        conn: &mut AsyncPgConnection,
        calendar: Uuid,
        day: NaiveDate,
    ) -> QueryResult<Vec<Event>> {
        use crate::schema::events::dsl::*;

        let rows = events
            .filter(calendar_id.eq(calendar))
            .filter(date.eq(day))
            .order_by(created_at.asc())
            .load::<EventRow>(conn)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Fetch one event, scoped to its stated calendar. An id that exists
    /// under a different calendar comes back as `None`.
    pub async fn get_scoped(
        conn: &mut AsyncPgConnection,
        calendar: Uuid,
        event: Uuid,
    ) -> QueryResult<Option<Event>> {
        use crate::schema::events::dsl::*;

        let row = events
            .filter(id.eq(event))
            .filter(calendar_id.eq(calendar))
            .first::<EventRow>(conn)
            .await
            .optional()?;

        Ok(row.map(Into::into))
    }

    pub async fn create(
        conn: &mut AsyncPgConnection,
        calendar: Uuid,
        event_title: &str,
        event_description: Option<&str>,
        event_date: NaiveDate,
    ) -> QueryResult<Event> {
        use crate::schema::events::dsl::*;

        let row = diesel::insert_into(events)
            .values((
                id.eq(Uuid::new_v4()),
                calendar_id.eq(calendar),
                title.eq(event_title),
                description.eq(event_description),
                date.eq(event_date),
            ))
            .get_result::<EventRow>(conn)
            .await?;

        Ok(row.into())
    }

    /// Update title/description in place; the date is never touched.
    pub async fn update(
        conn: &mut AsyncPgConnection,
        calendar: Uuid,
        event: Uuid,
        new_title: &str,
        new_description: Option<&str>,
    ) -> QueryResult<Event> {
        use crate::schema::events::dsl::*;

        let row = diesel::update(events.filter(id.eq(event)).filter(calendar_id.eq(calendar)))
            .set((title.eq(new_title), description.eq(new_description)))
            .get_result::<EventRow>(conn)
            .await?;

        Ok(row.into())
    }

    pub async fn delete(
        conn: &mut AsyncPgConnection,
        calendar: Uuid,
        event: Uuid,
    ) -> QueryResult<usize> {
        use crate::schema::events::dsl::*;

        diesel::delete(events.filter(id.eq(event)).filter(calendar_id.eq(calendar)))
            .execute(conn)
            .await
    }
}
