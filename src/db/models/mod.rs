mod admin;
mod availability_period;
mod customer;
mod inquiry;
mod property;

pub use admin::*;
pub use availability_period::*;
pub use customer::*;
pub use inquiry::*;
pub use property::*;
