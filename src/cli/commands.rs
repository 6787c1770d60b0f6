//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "worktrack")]
#[command(about = "Track work sessions, hours and earnings per day and month", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tracker
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Day calendar weeks start on
        #[arg(long, default_value = "monday")]
        first_weekday: String,

        /// Currency label shown next to earnings
        #[arg(long, default_value = "PLN")]
        currency: String,
    },

    /// Record a work session; unset fields reuse the last entered values
    Add {
        /// Day to record for (e.g., today, yesterday, last monday, 2025-01-17)
        #[arg(value_name = "DATE")]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long)]
        end: Option<String>,

        /// Hourly rate
        #[arg(long, allow_hyphen_values = true)]
        rate: Option<String>,

        /// Show hours and earnings without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// List entries recorded for a day
    List {
        /// Day to show (default: today)
        #[arg(value_name = "DATE")]
        date: Option<String>,
    },

    /// Delete an entry by id or unique id prefix
    Delete {
        /// Entry id as shown by `list`
        id: String,
    },

    /// Show hours and earnings for a month
    Month {
        /// Month to summarize (YYYY-MM, default: current month)
        #[arg(value_name = "YYYY-MM")]
        month: Option<String>,

        /// Break the totals down by day
        #[arg(long)]
        daily: bool,
    },

    /// Show all-time hours and earnings
    Total,

    /// Show a month calendar marking days with entries
    Calendar {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(value_name = "YYYY-MM")]
        month: Option<String>,

        /// Day to highlight (default: today)
        #[arg(long, value_name = "DATE")]
        select: Option<String>,

        /// Move the shown month forward or back (e.g., -1 for the previous month)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        shift: i32,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
