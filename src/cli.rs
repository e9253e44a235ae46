//! CLI interface for adstat
//!
//! Defines the command-line interface using clap. The selectors mirror the
//! dashboard controls: a year dropdown, platform tabs, month picker, and
//! sortable column headers.
//!
//! # Example
//!
//! ```bash
//! # Full report for 2025, Google Ads tab, sorted by spend
//! adstat --year 2025 --platform google-ads report --sort spend --direction desc
//!
//! # KPI summary for everything, as JSON
//! adstat kpis --json
//!
//! # Per-platform comparison
//! adstat platforms
//! ```

use crate::error::{AdstatError, Result};
use crate::types::{PlatformFilter, SortDirection, SortField, YearFilter};
use clap::{Args, Parser, Subcommand};

/// Marketing performance reports over monthly ad platform data
#[derive(Parser, Debug, Clone)]
#[command(name = "adstat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show informational output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Filter by year ("all" or a calendar year, e.g. 2025)
    #[arg(long, short = 'y', default_value = "all", global = true)]
    pub year: String,

    /// Filter by platform tab
    #[arg(long, short = 'p', value_enum, default_value = "all", global = true)]
    pub platform: PlatformFilter,

    /// Filter by months of year (1-12, comma separated)
    #[arg(long, short = 'm', value_delimiter = ',', global = true)]
    pub months: Vec<u32>,

    /// Subcommand to execute; defaults to the full report
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available reports
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// KPI summary plus the sortable monthly table (the default)
    Report(ReportArgs),

    /// KPI summary only
    Kpis,

    /// Per-platform KPI comparison
    Platforms,
}

/// Arguments for the full report
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Column to sort the monthly table by
    #[arg(long, short = 's', value_enum, default_value = "month")]
    pub sort: SortField,

    /// Sort direction
    #[arg(long, short = 'd', value_enum, default_value = "asc")]
    pub direction: SortDirection,

    /// Expand multi-platform months into per-platform breakdown rows
    #[arg(long, short = 'e')]
    pub expand: bool,
}

/// Parse the --year selector
pub fn parse_year_filter(s: &str) -> Result<YearFilter> {
    s.parse::<YearFilter>().map_err(AdstatError::InvalidArgument)
}

/// Validate the --months selector
pub fn parse_month_selection(months: &[u32]) -> Result<Vec<u32>> {
    for &month in months {
        if !(1..=12).contains(&month) {
            return Err(AdstatError::InvalidArgument(format!(
                "month out of range (expected 1-12): {month}"
            )));
        }
    }
    Ok(months.to_vec())
}
