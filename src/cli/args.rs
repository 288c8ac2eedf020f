use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dastyar", version, author, about = "A terminal companion for tracking daily prayers and devotional readings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record the timing of a prayer slot
    Mark {
        /// Prayer slot (fajr, dhuhr, maghrib)
        prayer: String,
        /// Timing (none, early, mid, late)
        timing: String,
        /// Day to record, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Toggle a devotional reading for the day
    Dua {
        /// Dua name (see --list)
        name: Option<String>,
        /// List the tracked duas
        #[arg(long)]
        list: bool,
        /// Day to record, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a day's log and score
    Show {
        /// Day to show, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show score trend, totals, and timing breakdown
    Stats {
        /// Use the 30-day window instead of 7 days
        #[arg(long)]
        month: bool,
    },
    /// Fetch today's motivational line
    Motivation,
    /// Export a weekly text summary to stdout
    Export,
    /// Delete all recorded days
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}
