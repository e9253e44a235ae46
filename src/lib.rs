//! adstat - Marketing performance reports over monthly ad platform data
//!
//! This library provides functionality to:
//! - Filter a fixed monthly dataset by year, platform, and months
//! - Aggregate platform records into per-month rows with derived ratios
//!   (CPA, ROAS) and month-over-month growth
//! - Sort the monthly rows by any column with defined null placement
//! - Render reports in table and JSON formats
//!
//! # Examples
//!
//! ```
//! use adstat::{
//!     aggregation::{compute_kpis, group_by_month, sort_grouped},
//!     dataset::monthly_data,
//!     filters::ReportFilter,
//!     types::{PlatformFilter, SortConfig, SortDirection, SortField, YearFilter},
//! };
//!
//! let filter = ReportFilter::new()
//!     .with_year(YearFilter::Year(2025))
//!     .with_platform(PlatformFilter::GoogleAds);
//! let records = filter.apply(monthly_data());
//!
//! let kpis = compute_kpis(&records);
//! let groups = group_by_month(&records);
//! let sorted = sort_grouped(&groups, SortConfig::new(SortField::Spend, SortDirection::Desc));
//! ```

pub mod aggregation;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod filters;
pub mod format;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{AdstatError, Result};
pub use types::{
    MonthKey, MonthlyRecord, Platform, PlatformFilter, SortConfig, SortDirection, SortField,
    YearFilter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
