//! Month-grid computation: the week grid for one calendar month, per-day
//! event aggregation, adjacent-month navigation and the paged year picker.
//!
//! Everything here is a pure function of the requested month, the injected
//! "today" and an already-fetched event snapshot; storage errors are the
//! caller's problem.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use shared::models::{DayCell, Event, MonthView, YearWindow};

/// Year-picker bounds and page size. Fixed policy constants, not config.
const PICKER_MIN_YEAR: i32 = 1900;
const PICKER_MAX_YEAR: i32 = 2100;
const YEARS_PER_PAGE: i32 = 15;

/// A `(year, month)` pair that is known to name a real month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMonth {
    pub year: i32,
    pub month: u32,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

/// Resolve a caller-supplied `(year, month)` under the clamp-to-today
/// policy: anything that does not name a legal month silently becomes
/// today's month. Inherited compatibility behavior; callers relying on an
/// error here will not get one.
pub fn resolve_month(year: i32, month: i32, today: NaiveDate) -> ResolvedMonth {
    let requested = u32::try_from(month)
        .ok()
        .and_then(|m| NaiveDate::from_ymd_opt(year, m, 1));

    let first_day = match requested {
        Some(day) => day,
        None => {
            tracing::debug!(year, month, "illegal month requested, clamping to today");
            today.with_day(1).unwrap_or(today)
        }
    };

    ResolvedMonth {
        year: first_day.year(),
        month: first_day.month(),
        first_day,
        last_day: month_end(first_day),
    }
}

fn month_end(first_day: NaiveDate) -> NaiveDate {
    let next_month_start = if first_day.month() == 12 {
        NaiveDate::from_ymd_opt(first_day.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first_day.year(), first_day.month() + 1, 1)
    };

    next_month_start
        .and_then(|day| day.pred_opt())
        .unwrap_or(first_day)
}

/// Monday-first weeks of 7 cells covering the month, padded with
/// adjacent-month days. Yields however many weeks the month needs (4–6).
pub fn month_weeks(month: &ResolvedMonth) -> Vec<Vec<DayCell>> {
    let lead = u64::from(month.first_day.weekday().num_days_from_monday());
    let trail = u64::from(6 - month.last_day.weekday().num_days_from_monday());
    let start = month
        .first_day
        .checked_sub_days(Days::new(lead))
        .unwrap_or(month.first_day);
    let total = (month.last_day - start).num_days() as u64 + 1 + trail;

    let mut weeks = Vec::new();
    let mut week = Vec::with_capacity(7);
    for day in start.iter_days().take(total as usize) {
        week.push(DayCell {
            day: day.day(),
            date: day.format("%Y-%m-%d").to_string(),
            padding: day.month() != month.month || day.year() != month.year,
        });
        if week.len() == 7 {
            weeks.push(std::mem::take(&mut week));
        }
    }

    weeks
}

/// The 15-year picker window for `year`, or for an explicit page override.
/// Windows are anchored at 1900; paging stops once a window touches the
/// 1900/2100 bounds.
pub fn year_window(year: i32, page_override: Option<i32>) -> YearWindow {
    let page =
        page_override.unwrap_or_else(|| (year - PICKER_MIN_YEAR).div_euclid(YEARS_PER_PAGE));
    let start_year = PICKER_MIN_YEAR + page * YEARS_PER_PAGE;
    let end_year = start_year + YEARS_PER_PAGE - 1;

    YearWindow {
        start_year,
        end_year,
        years: (start_year..=end_year).collect(),
        page,
        prev_page: (start_year > PICKER_MIN_YEAR).then(|| page - 1),
        next_page: (end_year < PICKER_MAX_YEAR).then(|| page + 1),
    }
}

/// Group an event snapshot by ISO date string, preserving snapshot order
/// within each day.
fn group_by_day(events: Vec<Event>) -> HashMap<String, Vec<Event>> {
    let mut by_day: HashMap<String, Vec<Event>> = HashMap::new();
    for event in events {
        by_day
            .entry(event.date.format("%Y-%m-%d").to_string())
            .or_default()
            .push(event);
    }

    by_day
}

/// Assemble the full month view from a resolved month and its event
/// snapshot. No side effects beyond the clamp log in [`resolve_month`].
pub fn build_month_view(
    month: &ResolvedMonth,
    page_override: Option<i32>,
    today: NaiveDate,
    events: Vec<Event>,
) -> MonthView {
    let (prev_year, prev_month) = if month.month == 1 {
        (month.year - 1, 12)
    } else {
        (month.year, month.month - 1)
    };
    let (next_year, next_month) = if month.month == 12 {
        (month.year + 1, 1)
    } else {
        (month.year, month.month + 1)
    };

    MonthView {
        year: month.year,
        month: month.month,
        weeks: month_weeks(month),
        events_by_day: group_by_day(events),
        prev_year,
        prev_month,
        next_year,
        next_month,
        year_window: year_window(month.year, page_override),
        current_year: today.year(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use uuid::Uuid;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event_on(day: NaiveDate, title: &str) -> Event {
        Event {
            id: Uuid::new_v4(),
            calendar_id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            date: day,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn grid_weeks_are_monday_first_and_between_4_and_6() {
        for (year, month) in [
            (2021, 2), // 28 days starting on a Monday: the 4-week case
            (2024, 2), // leap February
            (2025, 3),
            (2026, 3), // 31 days starting on a Sunday: the 6-week case
            (1900, 1),
            (2100, 12),
        ] {
            let resolved = resolve_month(year, month, date(2025, 6, 15));
            let weeks = month_weeks(&resolved);

            assert!(
                (4..=6).contains(&weeks.len()),
                "{year}-{month}: {} weeks",
                weeks.len()
            );
            for week in &weeks {
                assert_eq!(week.len(), 7);
            }

            let first = NaiveDate::parse_from_str(&weeks[0][0].date, "%Y-%m-%d").unwrap();
            assert_eq!(first.weekday(), Weekday::Mon, "{year}-{month}");
        }
    }

    #[test]
    fn four_and_six_week_months() {
        let resolved = resolve_month(2021, 2, date(2025, 6, 15));
        assert_eq!(month_weeks(&resolved).len(), 4);

        let resolved = resolve_month(2026, 3, date(2025, 6, 15));
        assert_eq!(month_weeks(&resolved).len(), 6);
    }

    #[test]
    fn cells_round_trip_through_their_iso_date() {
        let resolved = resolve_month(2025, 3, date(2025, 6, 15));
        for week in month_weeks(&resolved) {
            for cell in week {
                let parsed = NaiveDate::parse_from_str(&cell.date, "%Y-%m-%d").unwrap();
                assert_eq!(parsed.day(), cell.day);
                assert_eq!(
                    parsed.month() != 3 || parsed.year() != 2025,
                    cell.padding,
                    "{}",
                    cell.date
                );
            }
        }
    }

    #[test]
    fn illegal_months_clamp_to_today() {
        let today = date(2025, 6, 15);

        for (year, month) in [(2024, 13), (2024, 0), (2024, -3), (i32::MAX, 5)] {
            let resolved = resolve_month(year, month, today);
            assert_eq!((resolved.year, resolved.month), (2025, 6));
            assert_eq!(resolved.first_day, date(2025, 6, 1));
            assert_eq!(resolved.last_day, date(2025, 6, 30));
        }
    }

    #[test]
    fn month_bounds_cover_leap_years() {
        let resolved = resolve_month(2024, 2, date(2025, 6, 15));
        assert_eq!(resolved.last_day, date(2024, 2, 29));

        let resolved = resolve_month(2025, 12, date(2025, 6, 15));
        assert_eq!(resolved.last_day, date(2025, 12, 31));
    }

    #[test]
    fn january_and_december_roll_the_year_over() {
        let today = date(2025, 6, 15);

        let resolved = resolve_month(2024, 1, today);
        let view = build_month_view(&resolved, None, today, vec![]);
        assert_eq!((view.prev_year, view.prev_month), (2023, 12));
        assert_eq!((view.next_year, view.next_month), (2024, 2));

        let resolved = resolve_month(2024, 12, today);
        let view = build_month_view(&resolved, None, today, vec![]);
        assert_eq!((view.prev_year, view.prev_month), (2024, 11));
        assert_eq!((view.next_year, view.next_month), (2025, 1));
    }

    #[test]
    fn default_year_window_for_2025() {
        let window = year_window(2025, None);

        assert_eq!(window.page, 8);
        assert_eq!(window.start_year, 2020);
        assert_eq!(window.end_year, 2034);
        assert_eq!(window.years.len(), 15);
        assert_eq!(window.years[0], 2020);
        assert_eq!(window.years[14], 2034);
        assert_eq!(window.prev_page, Some(7));
        assert_eq!(window.next_page, Some(9));
    }

    #[test]
    fn year_window_clamps_at_the_range_bounds() {
        let first = year_window(1900, None);
        assert_eq!(first.page, 0);
        assert_eq!(first.start_year, 1900);
        assert_eq!(first.prev_page, None);
        assert_eq!(first.next_page, Some(1));

        let last = year_window(2095, None);
        assert_eq!(last.page, 13);
        assert_eq!(last.start_year, 2095);
        assert_eq!(last.end_year, 2109);
        assert_eq!(last.prev_page, Some(12));
        assert_eq!(last.next_page, None);
    }

    #[test]
    fn year_window_honors_a_page_override() {
        let window = year_window(2025, Some(0));
        assert_eq!(window.start_year, 1900);
        assert_eq!(window.prev_page, None);
    }

    #[test]
    fn pre_1900_years_use_floor_division() {
        let window = year_window(1890, None);
        assert_eq!(window.page, -1);
        assert_eq!(window.start_year, 1885);
        assert_eq!(window.prev_page, None);
        assert_eq!(window.next_page, Some(0));
    }

    #[test]
    fn events_group_under_their_own_day_in_snapshot_order() {
        let today = date(2025, 6, 15);
        let resolved = resolve_month(2025, 3, today);
        let events = vec![
            event_on(date(2025, 3, 10), "Standup"),
            event_on(date(2025, 3, 11), "Review"),
            event_on(date(2025, 3, 10), "Retro"),
        ];

        let view = build_month_view(&resolved, None, today, events);

        assert_eq!(view.events_by_day.len(), 2);
        let tenth = &view.events_by_day["2025-03-10"];
        assert_eq!(tenth.len(), 2);
        assert_eq!(tenth[0].title, "Standup");
        assert_eq!(tenth[1].title, "Retro");
        assert_eq!(view.events_by_day["2025-03-11"].len(), 1);
    }

    #[test]
    fn empty_month_yields_an_empty_but_present_map() {
        let today = date(2025, 6, 15);
        let resolved = resolve_month(2025, 3, today);
        let view = build_month_view(&resolved, None, today, vec![]);

        assert!(view.events_by_day.is_empty());
        assert_eq!(view.current_year, 2025);
    }
}
