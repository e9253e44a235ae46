//! Embedded monthly performance dataset
//!
//! The report runs over a fixed, hand-curated dataset known at build time;
//! there is no loading, parsing, or persistence step. Coverage:
//!
//! - Google Ads: Nov 2024 - Jun 2025 and Dec 2025 - Jan 2026
//! - Meta Ads: Jan 2024 - Jan 2026 (around the paused interval)
//! - Shopify attribution: Oct - Nov 2025 (revenue only, no ad delivery)
//! - Jul - Sep 2025: campaign paused for seasonal product

use crate::types::{MonthKey, MonthlyRecord, Platform};
use once_cell::sync::Lazy;

fn active(
    year: i32,
    month: u32,
    source: Platform,
    impressions: u64,
    clicks: u64,
    spend: f64,
    conversions: u64,
    conversion_value: f64,
) -> MonthlyRecord {
    MonthlyRecord {
        month: MonthKey::new(year, month).label(),
        year,
        month_index: month,
        impressions: Some(impressions),
        clicks: Some(clicks),
        spend: Some(spend),
        conversions: Some(conversions),
        conversion_value: Some(conversion_value),
        source,
    }
}

// Shopify rows are attribution-only: revenue and order counts, no delivery
// or spend figures.
fn shopify(year: i32, month: u32, conversions: u64, conversion_value: f64) -> MonthlyRecord {
    MonthlyRecord {
        month: MonthKey::new(year, month).label(),
        year,
        month_index: month,
        impressions: None,
        clicks: None,
        spend: None,
        conversions: Some(conversions),
        conversion_value: Some(conversion_value),
        source: Platform::Shopify,
    }
}

fn paused(year: i32, month: u32) -> MonthlyRecord {
    MonthlyRecord {
        month: MonthKey::new(year, month).label(),
        year,
        month_index: month,
        impressions: None,
        clicks: None,
        spend: None,
        conversions: None,
        conversion_value: None,
        source: Platform::Paused,
    }
}

/// The full embedded dataset, chronological by month
pub static MONTHLY_DATA: Lazy<Vec<MonthlyRecord>> = Lazy::new(|| {
    use Platform::{GoogleAds, MetaAds};

    vec![
        // 2024: Meta only until the Google campaign launched in November
        active(2024, 1, MetaAds, 98_400, 2_130, 620.0, 18, 1_240.0),
        active(2024, 2, MetaAds, 91_200, 1_980, 590.0, 16, 1_105.0),
        active(2024, 3, MetaAds, 104_500, 2_310, 640.0, 21, 1_480.0),
        active(2024, 4, MetaAds, 110_300, 2_450, 665.0, 22, 1_530.0),
        active(2024, 5, MetaAds, 121_700, 2_720, 705.0, 25, 1_760.0),
        active(2024, 6, MetaAds, 117_900, 2_640, 690.0, 23, 1_610.0),
        active(2024, 7, MetaAds, 125_800, 2_810, 720.0, 26, 1_845.0),
        active(2024, 8, MetaAds, 131_200, 2_940, 748.0, 27, 1_930.0),
        active(2024, 9, MetaAds, 127_400, 2_850, 731.0, 25, 1_790.0),
        active(2024, 10, MetaAds, 138_600, 3_120, 770.0, 29, 2_085.0),
        active(2024, 11, MetaAds, 151_900, 3_430, 815.0, 33, 2_410.0),
        active(2024, 11, GoogleAds, 42_300, 1_860, 2_150.0, 46, 5_890.0),
        active(2024, 12, MetaAds, 149_300, 3_370, 804.0, 31, 2_280.0),
        active(2024, 12, GoogleAds, 48_900, 2_140, 2_480.0, 54, 7_120.0),
        // 2025: both platforms through June
        active(2025, 1, MetaAds, 142_700, 3_210, 782.0, 30, 2_150.0),
        active(2025, 1, GoogleAds, 38_700, 1_690, 1_980.0, 41, 5_260.0),
        active(2025, 2, MetaAds, 136_500, 3_060, 760.0, 28, 2_010.0),
        active(2025, 2, GoogleAds, 35_400, 1_540, 1_860.0, 38, 4_720.0),
        active(2025, 3, MetaAds, 144_800, 3_260, 788.0, 31, 2_230.0),
        active(2025, 3, GoogleAds, 41_200, 1_810, 2_040.0, 44, 5_580.0),
        active(2025, 4, MetaAds, 152_300, 3_440, 810.0, 32, 2_340.0),
        active(2025, 4, GoogleAds, 44_600, 1_970, 2_210.0, 49, 6_340.0),
        active(2025, 5, MetaAds, 158_100, 3_580, 829.0, 34, 2_490.0),
        active(2025, 5, GoogleAds, 47_800, 2_120, 2_370.0, 52, 6_910.0),
        active(2025, 6, MetaAds, 154_600, 3_490, 818.0, 33, 2_420.0),
        active(2025, 6, GoogleAds, 39_500, 1_720, 1_950.0, 40, 4_980.0),
        // Jul - Sep 2025: all campaigns paused for the seasonal product
        paused(2025, 7),
        paused(2025, 8),
        paused(2025, 9),
        // Oct - Nov 2025: Meta resumed, Shopify attribution window
        active(2025, 10, MetaAds, 161_400, 3_650, 842.0, 35, 2_570.0),
        shopify(2025, 10, 22, 3_140.0),
        active(2025, 11, MetaAds, 172_800, 3_920, 878.0, 38, 2_760.0),
        shopify(2025, 11, 27, 3_860.0),
        // Dec 2025 - Jan 2026: Google relaunch
        active(2025, 12, MetaAds, 168_500, 3_840, 861.0, 36, 2_640.0),
        active(2025, 12, GoogleAds, 51_300, 2_260, 2_540.0, 57, 7_480.0),
        active(2026, 1, MetaAds, 159_700, 3_610, 838.0, 34, 2_505.0),
        active(2026, 1, GoogleAds, 45_100, 1_990, 2_280.0, 48, 6_150.0),
    ]
});

/// Borrow the embedded dataset
pub fn monthly_data() -> &'static [MonthlyRecord] {
    &MONTHLY_DATA
}
