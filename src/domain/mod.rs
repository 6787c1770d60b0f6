//! Domain layer - Business logic and domain models

pub mod aggregate;
pub mod calendar;
pub mod date_ref;
pub mod entry;
pub mod grid;

pub use aggregate::Totals;
pub use calendar::{Calendar, MonthInterval};
pub use date_ref::DateReference;
pub use entry::WorkEntry;
pub use grid::{build_grid, GridCell, MonthGrid};
