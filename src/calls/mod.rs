//! Call tracking
//!
//! Pure week bucketing over call events fetched from the API.

pub mod grid;
pub mod week;

pub use grid::{CallGrid, GridSummary, grid_key};
pub use week::{week_dates, week_start, previous_week, next_week, in_week, day_label};
