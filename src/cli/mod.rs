//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_daily_totals, format_day_header, format_entry_list, format_form_summary, format_grid,
    format_totals, Theme,
};
