use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Date, OffsetDateTime};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "period_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    Available,
    Booked,
    Blocked,
}

/// A date range on one property with a status and weekly price. Ranges are
/// inclusive on both ends. Overlapping periods are permitted; readers
/// resolve conflicts by list order.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AvailabilityPeriod {
    pub id: Uuid,
    pub property_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
    pub price_per_week: Decimal,
    pub price_per_night: Option<Decimal>,
    pub min_nights: i32,
    pub status: PeriodStatus,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
}

impl AvailabilityPeriod {
    /// Whether `date` falls inside the inclusive [start_date, end_date] range.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewAvailabilityPeriod {
    pub start_date: Date,
    pub end_date: Date,
    pub price_per_week: Decimal,
    pub price_per_night: Option<Decimal>,
    #[validate(range(min = 1, message = "Minimum nights must be at least 1"))]
    pub min_nights: Option<i32>,
    pub status: PeriodStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAvailabilityPeriod {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub price_per_week: Option<Decimal>,
    pub price_per_night: Option<Decimal>,
    #[validate(range(min = 1, message = "Minimum nights must be at least 1"))]
    pub min_nights: Option<i32>,
    pub status: Option<PeriodStatus>,
    pub notes: Option<String>,
}
