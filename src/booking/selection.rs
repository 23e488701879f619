//! In-progress check-in/check-out selection and the prorated weekly quote.
//!
//! The selection state round-trips through the calendar widget: each day
//! click posts the current state plus the clicked day, and the updated
//! state is rendered back. Clicks that do not extend the range forward
//! restart it, matching the usual date-range-picker feel.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::booking::resolver::{resolve_weekly_price, DayStatus};
use crate::db::models::AvailabilityPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    CheckIn,
    CheckOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub selecting: Endpoint,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub nights: i64,
    pub price_per_week: Decimal,
    pub total: Decimal,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            check_in: None,
            check_out: None,
            selecting: Endpoint::CheckIn,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Applies one day click. Clicks on past/booked/blocked days are
    /// ignored. A click while picking the checkout that does not lie
    /// strictly after the check-in starts a new selection instead.
    pub fn click(&mut self, date: Date, status: DayStatus) {
        if !status.is_selectable() {
            return;
        }

        match (self.selecting, self.check_in) {
            (Endpoint::CheckOut, Some(check_in)) if date > check_in => {
                self.check_out = Some(date);
                self.selecting = Endpoint::CheckIn;
            }
            _ => {
                self.check_in = Some(date);
                self.check_out = None;
                self.selecting = Endpoint::CheckOut;
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Nights between the endpoints, once both are set.
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some((check_out - check_in).whole_days()),
            _ => None,
        }
    }

    /// Prorated weekly quote for a complete selection:
    /// `total = round(price_per_week * nights / 7)`. Returns `None` when
    /// the selection is incomplete or no weekly price resolves for the
    /// check-in day, in which case no price may be shown.
    pub fn quote(&self, today: Date, periods: &[AvailabilityPeriod]) -> Option<Quote> {
        let check_in = self.check_in?;
        let nights = self.nights()?;
        let price_per_week = resolve_weekly_price(check_in, today, periods)?;
        let total = (price_per_week * Decimal::from(nights) / Decimal::from(7))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Some(Quote {
            nights,
            price_per_week,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::resolver::tests::period;
    use crate::db::models::PeriodStatus;
    use time::macros::date;

    const TODAY: Date = date!(2025 - 07 - 01);

    #[test]
    fn clicks_on_unavailable_days_are_ignored() {
        let mut selection = Selection::new();
        selection.click(date!(2025 - 07 - 10), DayStatus::Booked);
        assert_eq!(selection, Selection::new());
        selection.click(date!(2025 - 07 - 10), DayStatus::Blocked);
        assert_eq!(selection, Selection::new());
        selection.click(date!(2025 - 06 - 10), DayStatus::Past);
        assert_eq!(selection, Selection::new());
    }

    #[test]
    fn first_click_sets_check_in_and_moves_to_checkout() {
        let mut selection = Selection::new();
        selection.click(date!(2025 - 07 - 10), DayStatus::Available);
        assert_eq!(selection.check_in, Some(date!(2025 - 07 - 10)));
        assert_eq!(selection.check_out, None);
        assert_eq!(selection.selecting, Endpoint::CheckOut);
    }

    #[test]
    fn forward_second_click_completes_the_range() {
        let mut selection = Selection::new();
        selection.click(date!(2025 - 07 - 10), DayStatus::Available);
        selection.click(date!(2025 - 07 - 17), DayStatus::Available);
        assert_eq!(selection.check_in, Some(date!(2025 - 07 - 10)));
        assert_eq!(selection.check_out, Some(date!(2025 - 07 - 17)));
        assert_eq!(selection.selecting, Endpoint::CheckIn);
        assert_eq!(selection.nights(), Some(7));
    }

    #[test]
    fn backward_second_click_restarts_the_selection() {
        let mut selection = Selection::new();
        selection.click(date!(2025 - 07 - 10), DayStatus::Available);
        selection.click(date!(2025 - 07 - 05), DayStatus::Available);
        assert_eq!(selection.check_in, Some(date!(2025 - 07 - 05)));
        assert_eq!(selection.check_out, None);
        assert_eq!(selection.selecting, Endpoint::CheckOut);
    }

    #[test]
    fn clicking_the_check_in_day_again_restarts() {
        let mut selection = Selection::new();
        selection.click(date!(2025 - 07 - 10), DayStatus::Available);
        selection.click(date!(2025 - 07 - 10), DayStatus::Available);
        assert_eq!(selection.check_in, Some(date!(2025 - 07 - 10)));
        assert_eq!(selection.check_out, None);
    }

    #[test]
    fn one_week_stay_quotes_the_full_weekly_price() {
        let periods = vec![period(
            date!(2025 - 07 - 01),
            date!(2025 - 07 - 31),
            7000,
            PeriodStatus::Available,
        )];
        let mut selection = Selection::new();
        selection.click(date!(2025 - 07 - 10), DayStatus::Available);
        selection.click(date!(2025 - 07 - 17), DayStatus::Available);
        let quote = selection.quote(TODAY, &periods).unwrap();
        assert_eq!(quote.nights, 7);
        assert_eq!(quote.price_per_week, Decimal::from(7000));
        assert_eq!(quote.total, Decimal::from(7000));
    }

    #[test]
    fn partial_weeks_are_prorated_and_rounded() {
        let periods = vec![period(
            date!(2025 - 07 - 01),
            date!(2025 - 07 - 31),
            6999,
            PeriodStatus::Available,
        )];
        let mut selection = Selection::new();
        selection.click(date!(2025 - 07 - 10), DayStatus::Available);
        selection.click(date!(2025 - 07 - 13), DayStatus::Available);
        let quote = selection.quote(TODAY, &periods).unwrap();
        assert_eq!(quote.nights, 3);
        // 6999 * 3 / 7 = 2999.571..., rounded to 3000
        assert_eq!(quote.total, Decimal::from(3000));
    }

    #[test]
    fn no_resolvable_price_means_no_quote() {
        let periods = vec![period(
            date!(2025 - 07 - 01),
            date!(2025 - 07 - 31),
            7000,
            PeriodStatus::Booked,
        )];
        let mut selection = Selection {
            check_in: Some(date!(2025 - 07 - 10)),
            check_out: Some(date!(2025 - 07 - 17)),
            selecting: Endpoint::CheckIn,
        };
        assert!(selection.quote(TODAY, &periods).is_none());
        selection.clear();
        assert!(!selection.is_complete());
    }
}
