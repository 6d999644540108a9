//! Planting-calendar arithmetic.
//!
//! - [`parse_window`] turns catalog strings like `"Mar 22 - Apr 5"` into a
//!   [`MonthRange`]
//! - [`MonthRange::contains`] is the wrap-aware month membership test
//! - [`projected_harvest`] estimates when a sown crop is ready
//! - [`frost_countdown`] counts down to the next frost boundary
//! - [`PlantWindows`] bundles a plant's parsed windows for the advisor
//!
//! Nothing here reads the system clock directly; callers pass a [`Clock`].

mod clock;
mod frost;
mod harvest;
mod plant_windows;
mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use frost::{Direction, FrostCountdown, FrostDates, MonthDay, frost_countdown};
pub use harvest::{DAYS_PER_MONTH, harvest_month, projected_harvest, sow_window};
pub use plant_windows::PlantWindows;
pub use window::{
    MONTH_ABBREVIATIONS, MONTH_NAMES, MonthRange, in_window, month_abbreviation, month_name,
    month_number, parse_window,
};
