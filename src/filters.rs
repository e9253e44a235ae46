//! Filtering module for monthly records
//!
//! Provides the year, platform, and month selectors the report exposes.
//! Filters can be applied individually through the free functions or
//! combined through [`ReportFilter`].
//!
//! Platform filtering deliberately retains paused records so the monthly
//! timeline stays contiguous regardless of the selected platform tab.
//!
//! # Examples
//!
//! ```
//! use adstat::filters::ReportFilter;
//! use adstat::types::{PlatformFilter, YearFilter};
//!
//! let filter = ReportFilter::new()
//!     .with_year(YearFilter::Year(2025))
//!     .with_platform(PlatformFilter::GoogleAds);
//! ```

use crate::types::{MonthlyRecord, PlatformFilter, YearFilter};

/// Return the records matching the given year, order preserved
pub fn filter_by_year(records: &[MonthlyRecord], year: YearFilter) -> Vec<MonthlyRecord> {
    match year {
        YearFilter::All => records.to_vec(),
        YearFilter::Year(y) => records.iter().filter(|r| r.year == y).cloned().collect(),
    }
}

/// Return the records matching the given platform, plus all paused records
pub fn filter_by_platform(
    records: &[MonthlyRecord],
    platform: PlatformFilter,
) -> Vec<MonthlyRecord> {
    records
        .iter()
        .filter(|r| matches_platform(r, platform))
        .cloned()
        .collect()
}

/// Return the records whose month-of-year is in the given set
///
/// An empty set selects everything.
pub fn filter_by_months(records: &[MonthlyRecord], months: &[u32]) -> Vec<MonthlyRecord> {
    if months.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| months.contains(&r.month_index))
        .cloned()
        .collect()
}

fn matches_platform(record: &MonthlyRecord, platform: PlatformFilter) -> bool {
    // paused months are always retained so the timeline stays contiguous
    if record.is_paused() {
        return true;
    }
    match platform {
        PlatformFilter::All => true,
        PlatformFilter::GoogleAds => record.source == crate::types::Platform::GoogleAds,
        PlatformFilter::MetaAds => record.source == crate::types::Platform::MetaAds,
    }
}

/// Combined filter state for a report
///
/// All selectors are optional in effect: the defaults select everything.
#[derive(Debug, Default, Clone)]
pub struct ReportFilter {
    /// Year selector
    pub year: YearFilter,
    /// Platform selector
    pub platform: PlatformFilter,
    /// Month-of-year selector; empty selects all months
    pub months: Vec<u32>,
}

impl ReportFilter {
    /// Create a new filter with no restrictions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the year selector
    pub fn with_year(mut self, year: YearFilter) -> Self {
        self.year = year;
        self
    }

    /// Set the platform selector
    pub fn with_platform(mut self, platform: PlatformFilter) -> Self {
        self.platform = platform;
        self
    }

    /// Set the month-of-year selector
    pub fn with_months(mut self, months: Vec<u32>) -> Self {
        self.months = months;
        self
    }

    /// Check if a record passes the filter
    pub fn matches(&self, record: &MonthlyRecord) -> bool {
        if let YearFilter::Year(y) = self.year {
            if record.year != y {
                return false;
            }
        }

        if !self.months.is_empty() && !self.months.contains(&record.month_index) {
            return false;
        }

        matches_platform(record, self.platform)
    }

    /// Apply the filter to a record sequence, order preserved
    pub fn apply(&self, records: &[MonthlyRecord]) -> Vec<MonthlyRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MonthKey, Platform};

    fn record(year: i32, month: u32, source: Platform) -> MonthlyRecord {
        MonthlyRecord {
            month: MonthKey::new(year, month).label(),
            year,
            month_index: month,
            impressions: Some(1000),
            clicks: Some(50),
            spend: Some(200.0),
            conversions: Some(5),
            conversion_value: Some(600.0),
            source,
        }
    }

    #[test]
    fn test_year_filter() {
        let records = vec![
            record(2024, 11, Platform::GoogleAds),
            record(2025, 1, Platform::GoogleAds),
            record(2025, 2, Platform::MetaAds),
        ];

        let all = filter_by_year(&records, YearFilter::All);
        assert_eq!(all.len(), 3);

        let only_2025 = filter_by_year(&records, YearFilter::Year(2025));
        assert_eq!(only_2025.len(), 2);
        assert!(only_2025.iter().all(|r| r.year == 2025));
    }

    #[test]
    fn test_platform_filter_retains_paused() {
        let records = vec![
            record(2025, 1, Platform::GoogleAds),
            record(2025, 2, Platform::MetaAds),
            record(2025, 3, Platform::Shopify),
            record(2025, 7, Platform::Paused),
        ];

        let google = filter_by_platform(&records, PlatformFilter::GoogleAds);
        assert_eq!(google.len(), 2);
        assert_eq!(google[0].source, Platform::GoogleAds);
        assert_eq!(google[1].source, Platform::Paused);

        let meta = filter_by_platform(&records, PlatformFilter::MetaAds);
        assert_eq!(meta.len(), 2);

        // "all" keeps shopify, which has no dedicated tab
        let all = filter_by_platform(&records, PlatformFilter::All);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_month_filter() {
        let records = vec![
            record(2025, 1, Platform::GoogleAds),
            record(2025, 2, Platform::GoogleAds),
            record(2025, 3, Platform::GoogleAds),
        ];

        let picked = filter_by_months(&records, &[1, 3]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].month_index, 1);
        assert_eq!(picked[1].month_index, 3);

        // empty set selects everything
        assert_eq!(filter_by_months(&records, &[]).len(), 3);
    }

    #[test]
    fn test_combined_filter() {
        let records = vec![
            record(2024, 12, Platform::GoogleAds),
            record(2025, 1, Platform::GoogleAds),
            record(2025, 1, Platform::MetaAds),
            record(2025, 7, Platform::Paused),
        ];

        let filter = ReportFilter::new()
            .with_year(YearFilter::Year(2025))
            .with_platform(PlatformFilter::GoogleAds);

        let filtered = filter.apply(&records);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].source, Platform::GoogleAds);
        assert_eq!(filtered[1].source, Platform::Paused);
    }

    #[test]
    fn test_combined_filter_months() {
        let records = vec![
            record(2025, 1, Platform::GoogleAds),
            record(2025, 2, Platform::GoogleAds),
        ];

        let filter = ReportFilter::new().with_months(vec![2]);
        let filtered = filter.apply(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].month_index, 2);
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = vec![
            record(2025, 3, Platform::MetaAds),
            record(2025, 1, Platform::MetaAds),
            record(2025, 2, Platform::MetaAds),
        ];

        let filtered = ReportFilter::new().apply(&records);
        let months: Vec<u32> = filtered.iter().map(|r| r.month_index).collect();
        assert_eq!(months, vec![3, 1, 2]);
    }
}
