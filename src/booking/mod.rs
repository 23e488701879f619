pub mod resolver;
pub mod selection;

pub use resolver::{resolve_status, resolve_weekly_price, month_grid, DaySlot, DayStatus};
pub use selection::{Endpoint, Quote, Selection};
