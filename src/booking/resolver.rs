//! Resolves calendar days against a property's availability periods.
//!
//! Status and price resolution are linear scans over the period list in
//! its stored order; the first period containing the day wins. The lists
//! involved cover one or two rendered months, so nothing cleverer than a
//! scan is warranted.

use rust_decimal::Decimal;
use serde::Serialize;
use time::{Date, Month};

use crate::db::models::{AvailabilityPeriod, PeriodStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Past,
    Available,
    Booked,
    Blocked,
    /// No period covers the day; callers treat it as unselectable.
    Unlisted,
}

impl From<PeriodStatus> for DayStatus {
    fn from(status: PeriodStatus) -> Self {
        match status {
            PeriodStatus::Available => DayStatus::Available,
            PeriodStatus::Booked => DayStatus::Booked,
            PeriodStatus::Blocked => DayStatus::Blocked,
        }
    }
}

impl DayStatus {
    /// Whether a click on this day may move the selection. Past, booked
    /// and blocked days are inert; unlisted days are left to the caller.
    pub fn is_selectable(self) -> bool {
        !matches!(self, DayStatus::Past | DayStatus::Booked | DayStatus::Blocked)
    }
}

/// Status of one calendar day. Days strictly before `today` are `Past`
/// no matter what any period says; otherwise the first period in list
/// order containing the day decides.
pub fn resolve_status(date: Date, today: Date, periods: &[AvailabilityPeriod]) -> DayStatus {
    if date < today {
        return DayStatus::Past;
    }
    periods
        .iter()
        .find(|p| p.contains(date))
        .map(|p| DayStatus::from(p.status))
        .unwrap_or(DayStatus::Unlisted)
}

/// Weekly price for a day, mirroring the status scan: the first
/// *available* period containing a non-past day prices it.
pub fn resolve_weekly_price(
    date: Date,
    today: Date,
    periods: &[AvailabilityPeriod],
) -> Option<Decimal> {
    if date < today {
        return None;
    }
    periods
        .iter()
        .find(|p| p.status == PeriodStatus::Available && p.contains(date))
        .map(|p| p.price_per_week)
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySlot {
    pub date: Date,
    pub status: DayStatus,
    pub price_per_week: Option<Decimal>,
}

/// Resolves every day of one rendered month.
pub fn month_grid(
    year: i32,
    month: Month,
    today: Date,
    periods: &[AvailabilityPeriod],
) -> Vec<DaySlot> {
    let days = time::util::days_in_year_month(year, month);
    (1..=days)
        .filter_map(|day| Date::from_calendar_date(year, month, day).ok())
        .map(|date| DaySlot {
            date,
            status: resolve_status(date, today, periods),
            price_per_week: resolve_weekly_price(date, today, periods),
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sqlx::types::Uuid;
    use time::macros::date;
    use time::OffsetDateTime;

    pub(crate) fn period(
        start: Date,
        end: Date,
        price: i64,
        status: PeriodStatus,
    ) -> AvailabilityPeriod {
        AvailabilityPeriod {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            start_date: start,
            end_date: end,
            price_per_week: Decimal::from(price),
            price_per_night: None,
            min_nights: 1,
            status,
            notes: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    const TODAY: Date = date!(2025 - 07 - 01);

    #[test]
    fn days_before_today_are_past_even_inside_periods() {
        let periods = vec![period(
            date!(2025 - 06 - 01),
            date!(2025 - 07 - 31),
            7000,
            PeriodStatus::Available,
        )];
        assert_eq!(
            resolve_status(date!(2025 - 06 - 15), TODAY, &periods),
            DayStatus::Past
        );
        assert_eq!(resolve_weekly_price(date!(2025 - 06 - 15), TODAY, &periods), None);
    }

    #[test]
    fn day_inside_single_available_period_gets_its_price() {
        let periods = vec![period(
            date!(2025 - 07 - 05),
            date!(2025 - 07 - 20),
            7000,
            PeriodStatus::Available,
        )];
        assert_eq!(
            resolve_status(date!(2025 - 07 - 10), TODAY, &periods),
            DayStatus::Available
        );
        assert_eq!(
            resolve_weekly_price(date!(2025 - 07 - 10), TODAY, &periods),
            Some(Decimal::from(7000))
        );
    }

    #[test]
    fn period_bounds_are_inclusive() {
        let periods = vec![period(
            date!(2025 - 07 - 05),
            date!(2025 - 07 - 20),
            7000,
            PeriodStatus::Booked,
        )];
        assert_eq!(resolve_status(date!(2025 - 07 - 05), TODAY, &periods), DayStatus::Booked);
        assert_eq!(resolve_status(date!(2025 - 07 - 20), TODAY, &periods), DayStatus::Booked);
        assert_eq!(
            resolve_status(date!(2025 - 07 - 21), TODAY, &periods),
            DayStatus::Unlisted
        );
    }

    #[test]
    fn overlapping_periods_resolve_by_list_order() {
        let periods = vec![
            period(date!(2025 - 07 - 01), date!(2025 - 07 - 31), 7000, PeriodStatus::Available),
            period(date!(2025 - 07 - 10), date!(2025 - 07 - 17), 7000, PeriodStatus::Booked),
        ];
        // The available period comes first, so it wins for the overlap.
        assert_eq!(
            resolve_status(date!(2025 - 07 - 12), TODAY, &periods),
            DayStatus::Available
        );

        let reversed: Vec<_> = periods.into_iter().rev().collect();
        assert_eq!(
            resolve_status(date!(2025 - 07 - 12), TODAY, &reversed),
            DayStatus::Booked
        );
    }

    #[test]
    fn booked_days_have_no_price() {
        let periods = vec![period(
            date!(2025 - 07 - 05),
            date!(2025 - 07 - 20),
            7000,
            PeriodStatus::Booked,
        )];
        assert_eq!(resolve_weekly_price(date!(2025 - 07 - 10), TODAY, &periods), None);
    }

    #[test]
    fn uncovered_days_are_unlisted() {
        assert_eq!(resolve_status(date!(2025 - 08 - 01), TODAY, &[]), DayStatus::Unlisted);
    }

    #[test]
    fn month_grid_covers_every_day_of_the_month() {
        let periods = vec![period(
            date!(2025 - 07 - 05),
            date!(2025 - 07 - 20),
            9500,
            PeriodStatus::Available,
        )];
        let grid = month_grid(2025, Month::July, TODAY, &periods);
        assert_eq!(grid.len(), 31);
        assert_eq!(grid[0].date, date!(2025 - 07 - 01));
        assert_eq!(grid[0].status, DayStatus::Unlisted);
        assert_eq!(grid[4].status, DayStatus::Available);
        assert_eq!(grid[4].price_per_week, Some(Decimal::from(9500)));
        assert_eq!(grid[30].date, date!(2025 - 07 - 31));
    }

    #[test]
    fn month_grid_marks_elapsed_days_past() {
        let grid = month_grid(2025, Month::June, TODAY, &[]);
        assert_eq!(grid.len(), 30);
        assert!(grid.iter().all(|slot| slot.status == DayStatus::Past));
    }
}
