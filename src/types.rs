//! Core domain types for adstat
//!
//! This module contains the fundamental types used throughout the adstat
//! library: the platform enumeration, monthly records, the month key used
//! for grouping, and the sort configuration for the monthly table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ad platform that reported a monthly record
///
/// `Paused` is a synthetic source marking a month with no active campaign;
/// its numeric fields carry no meaning and are excluded from all totals.
///
/// # Examples
/// ```
/// use adstat::types::Platform;
///
/// let p: Platform = "google_ads".parse().unwrap();
/// assert_eq!(p, Platform::GoogleAds);
/// assert_eq!(p.label(), "Google Ads");
/// assert!(!p.is_paused());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    GoogleAds,
    MetaAds,
    Shopify,
    Paused,
}

impl Platform {
    /// Whether this record marks a paused month
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Human-readable platform label
    pub fn label(&self) -> &'static str {
        match self {
            Self::GoogleAds => "Google Ads",
            Self::MetaAds => "Meta Ads",
            Self::Shopify => "Shopify",
            Self::Paused => "Paused",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoogleAds => write!(f, "google_ads"),
            Self::MetaAds => write!(f, "meta_ads"),
            Self::Shopify => write!(f, "shopify"),
            Self::Paused => write!(f, "paused"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google_ads" => Ok(Self::GoogleAds),
            "meta_ads" => Ok(Self::MetaAds),
            "shopify" => Ok(Self::Shopify),
            "paused" => Ok(Self::Paused),
            _ => Err(format!("Invalid platform: {s}")),
        }
    }
}

/// Platform selector for filtering reports
///
/// Shopify attribution has no dedicated tab in the original report, so the
/// selector domain is smaller than [`Platform`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlatformFilter {
    /// All platforms
    #[default]
    All,
    /// Google Ads only
    GoogleAds,
    /// Meta Ads only
    MetaAds,
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::GoogleAds => write!(f, "google_ads"),
            Self::MetaAds => write!(f, "meta_ads"),
        }
    }
}

/// Year selector for filtering reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearFilter {
    /// All years
    #[default]
    All,
    /// A single calendar year
    Year(i32),
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Year(y) => write!(f, "{y}"),
        }
    }
}

impl std::str::FromStr for YearFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<i32>()
            .map(Self::Year)
            .map_err(|_| format!("Invalid year: {s}"))
    }
}

/// Calendar month key used for grouping and chronological ordering
///
/// Orders by year, then month-of-year. The derived `Ord` makes this usable
/// directly as a `BTreeMap` key so grouped output comes back chronological.
///
/// # Examples
/// ```
/// use adstat::types::MonthKey;
///
/// let a = MonthKey::new(2024, 11);
/// let b = MonthKey::new(2025, 1);
/// assert!(a < b);
/// assert_eq!(a.label(), "Nov 2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    /// Calendar year
    pub year: i32,
    /// Month of year, 1-12
    pub month: u32,
}

impl MonthKey {
    /// Create a new MonthKey
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Display label in "Mon YYYY" form
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%b %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// One platform's data for one calendar month
///
/// Numeric fields are individually optional: an absent value is treated as
/// zero in aggregations but rendered as a placeholder dash, distinguishing
/// "not reported" from a true zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Display label, e.g. "Nov 2024"
    pub month: String,
    /// Calendar year
    pub year: i32,
    /// Month of year, 1-12; orders records within a year
    pub month_index: u32,
    /// Ad impressions served
    pub impressions: Option<u64>,
    /// Clicks received
    pub clicks: Option<u64>,
    /// Ad spend in USD
    pub spend: Option<f64>,
    /// Conversions attributed
    pub conversions: Option<u64>,
    /// Revenue attributed to conversions, in USD
    pub conversion_value: Option<f64>,
    /// Reporting platform
    pub source: Platform,
}

impl MonthlyRecord {
    /// The (year, month) key positioning this record on the monthly timeline
    pub fn month_key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month_index)
    }

    /// Whether this record marks a paused month
    pub fn is_paused(&self) -> bool {
        self.source.is_paused()
    }
}

/// Sortable columns of the monthly table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Chronological (year, month) composite key
    #[default]
    Month,
    Impressions,
    Clicks,
    Spend,
    Conversions,
    ConversionValue,
    Cpa,
    Roas,
    MomGrowth,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// User-selected sort state for the monthly table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    /// Column to sort by
    pub field: SortField,
    /// Direction to sort in
    pub direction: SortDirection,
}

impl SortConfig {
    /// Create a new SortConfig
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}
