//! Aggregation module: the metrics engine behind the report
//!
//! This module turns the flat monthly-record sequence into the three derived
//! views the report renders:
//!
//! - a scalar KPI summary over a filtered record set ([`compute_kpis`]),
//! - month-grouped rows with per-row ratios and month-over-month growth
//!   ([`group_by_month`]),
//! - a user-sorted view of those rows ([`sort_grouped`]).
//!
//! Every operation here is a pure, total function: paused records and absent
//! values are excluded or defaulted explicitly, and all ratio divisions are
//! zero-guarded, so no input permitted by the data model can produce NaN,
//! infinity, or an error.
//!
//! # Examples
//!
//! ```
//! use adstat::aggregation::{compute_kpis, group_by_month, sort_grouped};
//! use adstat::dataset::monthly_data;
//! use adstat::types::{SortConfig, SortDirection, SortField};
//!
//! let records = monthly_data();
//! let kpis = compute_kpis(records);
//! assert!(kpis.total_spend > 0.0);
//!
//! let groups = group_by_month(records);
//! let by_spend = sort_grouped(&groups, SortConfig::new(SortField::Spend, SortDirection::Desc));
//! assert_eq!(by_spend.len(), groups.len());
//! ```

use crate::types::{MonthKey, MonthlyRecord, Platform, SortConfig, SortDirection, SortField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Scalar KPI summary over a filtered record set
///
/// Sums exclude paused records and records with absent conversions. The
/// ratio metrics keep the report's 0-sentinel convention: a zero divisor
/// yields exactly 0.0, never NaN or infinity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpiMetrics {
    /// Total ad impressions
    pub total_impressions: u64,
    /// Total clicks
    pub total_clicks: u64,
    /// Total ad spend in USD
    pub total_spend: f64,
    /// Total conversions
    pub total_conversions: u64,
    /// Total attributed revenue in USD
    pub total_conversion_value: f64,
    /// Conversions per impression, as a percentage
    pub avg_conversion_rate: f64,
    /// Revenue per conversion
    pub avg_order_value: f64,
    /// Cost per acquisition: spend / conversions
    pub cpa: f64,
    /// Return on ad spend: conversion value / spend
    pub roas: f64,
}

/// One aggregated row per calendar month, combining all platform records
///
/// Sums cover non-paused members only; a fully-paused month carries zero
/// sums. Unlike the sums, the derived ratios are explicitly optional: `None`
/// means "undefined" (zero divisor), which the display layer renders as a
/// dash. Row-expansion state lives with the renderer, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedMonth {
    /// Display label, e.g. "Jan 2025"
    pub month: String,
    /// Calendar year
    pub year: i32,
    /// Month of year, 1-12
    pub month_index: u32,
    /// Summed impressions over non-paused members
    pub impressions: u64,
    /// Summed clicks over non-paused members
    pub clicks: u64,
    /// Summed spend over non-paused members
    pub spend: f64,
    /// Summed conversions over non-paused members
    pub conversions: u64,
    /// Summed attributed revenue over non-paused members
    pub conversion_value: f64,
    /// Spend per conversion; `None` when the month has no conversions
    pub cpa: Option<f64>,
    /// Revenue per spend dollar; `None` when the month has no spend
    pub roas: Option<f64>,
    /// Percentage change in conversion value vs. the preceding month;
    /// `None` for the first month, across paused months, or after a
    /// zero-revenue month
    pub mom_growth: Option<f64>,
    /// The original records contributing to this month, for drill-down
    pub breakdown: Vec<MonthlyRecord>,
}

impl GroupedMonth {
    /// The (year, month) key of this row
    pub fn month_key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month_index)
    }

    /// Whether every contributing record marks a paused month
    pub fn is_fully_paused(&self) -> bool {
        self.breakdown.iter().all(|r| r.is_paused())
    }
}

/// Accumulator for one month's records
struct MonthAccumulator {
    impressions: u64,
    clicks: u64,
    spend: f64,
    conversions: u64,
    conversion_value: f64,
    breakdown: Vec<MonthlyRecord>,
}

impl MonthAccumulator {
    fn new() -> Self {
        Self {
            impressions: 0,
            clicks: 0,
            spend: 0.0,
            conversions: 0,
            conversion_value: 0.0,
            breakdown: Vec::new(),
        }
    }

    fn add_record(&mut self, record: &MonthlyRecord) {
        // paused members join the breakdown but contribute nothing to sums
        if !record.is_paused() {
            self.impressions += record.impressions.unwrap_or(0);
            self.clicks += record.clicks.unwrap_or(0);
            self.spend += record.spend.unwrap_or(0.0);
            self.conversions += record.conversions.unwrap_or(0);
            self.conversion_value += record.conversion_value.unwrap_or(0.0);
        }
        self.breakdown.push(record.clone());
    }

    fn into_grouped_month(self, key: MonthKey) -> GroupedMonth {
        let cpa = if self.conversions > 0 {
            Some(self.spend / self.conversions as f64)
        } else {
            None
        };
        let roas = if self.spend > 0.0 {
            Some(self.conversion_value / self.spend)
        } else {
            None
        };

        GroupedMonth {
            month: key.label(),
            year: key.year,
            month_index: key.month,
            impressions: self.impressions,
            clicks: self.clicks,
            spend: self.spend,
            conversions: self.conversions,
            conversion_value: self.conversion_value,
            cpa,
            roas,
            mom_growth: None,
            breakdown: self.breakdown,
        }
    }
}

/// Compute the KPI summary for a record set
///
/// Excludes paused records and records with absent conversions, sums the
/// five numeric fields, and derives the four ratio metrics under the
/// zero-guard policy.
pub fn compute_kpis(records: &[MonthlyRecord]) -> KpiMetrics {
    let mut kpis = KpiMetrics::default();

    for record in records {
        if record.is_paused() || record.conversions.is_none() {
            continue;
        }
        kpis.total_impressions += record.impressions.unwrap_or(0);
        kpis.total_clicks += record.clicks.unwrap_or(0);
        kpis.total_spend += record.spend.unwrap_or(0.0);
        kpis.total_conversions += record.conversions.unwrap_or(0);
        kpis.total_conversion_value += record.conversion_value.unwrap_or(0.0);
    }

    if kpis.total_impressions > 0 {
        kpis.avg_conversion_rate =
            kpis.total_conversions as f64 / kpis.total_impressions as f64 * 100.0;
    }
    if kpis.total_conversions > 0 {
        kpis.avg_order_value = kpis.total_conversion_value / kpis.total_conversions as f64;
        kpis.cpa = kpis.total_spend / kpis.total_conversions as f64;
    }
    if kpis.total_spend > 0.0 {
        kpis.roas = kpis.total_conversion_value / kpis.total_spend;
    }

    kpis
}

/// Compute a KPI summary per active platform
///
/// Platforms with no records in the input are omitted. Paused is not a
/// platform and never appears in the result.
pub fn kpis_by_platform(records: &[MonthlyRecord]) -> BTreeMap<Platform, KpiMetrics> {
    let mut result = BTreeMap::new();

    for platform in [Platform::GoogleAds, Platform::MetaAds, Platform::Shopify] {
        let platform_records: Vec<MonthlyRecord> = records
            .iter()
            .filter(|r| r.source == platform)
            .cloned()
            .collect();
        if !platform_records.is_empty() {
            result.insert(platform, compute_kpis(&platform_records));
        }
    }

    result
}

/// Month-over-month growth as a percentage
///
/// Growth from zero is undefined, not infinite.
pub fn mom_growth(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// Group records by calendar month and annotate month-over-month growth
///
/// Partitions by `(year, month_index)` regardless of input order; the result
/// is ascending chronological, which is the prerequisite for the growth pass
/// comparing each group to its immediate predecessor. Growth is skipped
/// across fully-paused months and after a zero-revenue month.
pub fn group_by_month(records: &[MonthlyRecord]) -> Vec<GroupedMonth> {
    let mut month_map: BTreeMap<MonthKey, MonthAccumulator> = BTreeMap::new();

    for record in records {
        month_map
            .entry(record.month_key())
            .or_insert_with(MonthAccumulator::new)
            .add_record(record);
    }

    let mut groups: Vec<GroupedMonth> = month_map
        .into_iter()
        .map(|(key, acc)| acc.into_grouped_month(key))
        .collect();

    for i in 1..groups.len() {
        if groups[i].is_fully_paused() || groups[i - 1].is_fully_paused() {
            continue;
        }
        let previous = groups[i - 1].conversion_value;
        let current = groups[i].conversion_value;
        groups[i].mom_growth = mom_growth(current, previous);
    }

    groups
}

/// Produce a new sequence of groups ordered by the chosen field
///
/// Month sorts by the `(year, month_index)` composite key, never by label.
/// Absent growth sorts to the end of the list for both directions. The sort
/// is stable, so equal-valued rows keep their chronological input order.
pub fn sort_grouped(groups: &[GroupedMonth], config: SortConfig) -> Vec<GroupedMonth> {
    let mut sorted = groups.to_vec();
    sorted.sort_by(|a, b| compare_groups(a, b, config));
    sorted
}

fn compare_groups(a: &GroupedMonth, b: &GroupedMonth, config: SortConfig) -> Ordering {
    let ordering = if config.field == SortField::Month {
        a.month_key().cmp(&b.month_key())
    } else {
        let ka = sort_key(a, config);
        let kb = sort_key(b, config);
        ka.partial_cmp(&kb).unwrap_or(Ordering::Equal)
    };

    match config.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn sort_key(group: &GroupedMonth, config: SortConfig) -> f64 {
    match config.field {
        // compared by composite key, not numerically
        SortField::Month => 0.0,
        SortField::Impressions => group.impressions as f64,
        SortField::Clicks => group.clicks as f64,
        SortField::Spend => group.spend,
        SortField::Conversions => group.conversions as f64,
        SortField::ConversionValue => group.conversion_value,
        // undefined ratios keep the legacy 0-sentinel ordering
        SortField::Cpa => group.cpa.unwrap_or(0.0),
        SortField::Roas => group.roas.unwrap_or(0.0),
        // absent growth lands at the end of the list for either direction
        SortField::MomGrowth => group.mom_growth.unwrap_or(match config.direction {
            SortDirection::Asc => f64::INFINITY,
            SortDirection::Desc => f64::NEG_INFINITY,
        }),
    }
}
