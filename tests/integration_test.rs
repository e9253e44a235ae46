//! Integration tests exercising the full report pipeline over the embedded
//! dataset: filter -> KPIs -> grouping -> sorting -> rendering.

use adstat::{
    aggregation::{compute_kpis, group_by_month, kpis_by_platform, sort_grouped},
    dataset::monthly_data,
    filters::ReportFilter,
    output::get_formatter,
    types::{MonthKey, Platform, PlatformFilter, SortConfig, SortDirection, SortField, YearFilter},
};

#[test]
fn test_unfiltered_dashboard() {
    let records = monthly_data();
    let kpis = compute_kpis(records);

    assert!(kpis.total_spend > 0.0);
    assert!(kpis.total_conversion_value > 0.0);
    assert!(kpis.roas.is_finite() && kpis.roas > 0.0);
    assert!(kpis.cpa.is_finite() && kpis.cpa > 0.0);

    let groups = group_by_month(records);
    // Jan 2024 through Jan 2026 is a contiguous 25-month timeline
    assert_eq!(groups.len(), 25);
    assert_eq!(groups.first().unwrap().month_key(), MonthKey::new(2024, 1));
    assert_eq!(groups.last().unwrap().month_key(), MonthKey::new(2026, 1));
}

#[test]
fn test_paused_interval_stays_on_timeline() {
    let records = monthly_data();

    // even on the Google Ads tab, Jul - Sep 2025 remain as rows
    let filtered = ReportFilter::new()
        .with_platform(PlatformFilter::GoogleAds)
        .apply(records);
    let groups = group_by_month(&filtered);

    for month in 7..=9 {
        let group = groups
            .iter()
            .find(|g| g.month_key() == MonthKey::new(2025, month))
            .expect("paused month missing from timeline");
        assert!(group.is_fully_paused());
        assert_eq!(group.spend, 0.0);
        assert_eq!(group.cpa, None);
        assert_eq!(group.roas, None);
        assert_eq!(group.mom_growth, None);
    }

    // the month after the paused interval has no growth reference
    let october = groups
        .iter()
        .find(|g| g.month_key() == MonthKey::new(2025, 10))
        .unwrap();
    assert_eq!(october.mom_growth, None);
}

#[test]
fn test_year_and_platform_filter_pipeline() {
    let records = monthly_data();

    let filtered = ReportFilter::new()
        .with_year(YearFilter::Year(2025))
        .with_platform(PlatformFilter::MetaAds)
        .apply(records);

    assert!(filtered
        .iter()
        .all(|r| r.year == 2025 && (r.source == Platform::MetaAds || r.is_paused())));

    let kpis = compute_kpis(&filtered);
    let meta_only: f64 = filtered
        .iter()
        .filter(|r| !r.is_paused())
        .filter_map(|r| r.spend)
        .sum();
    assert_eq!(kpis.total_spend, meta_only);
}

#[test]
fn test_multi_platform_months_group_into_one_row() {
    let records = monthly_data();
    let groups = group_by_month(records);

    let jan_25 = groups
        .iter()
        .find(|g| g.month_key() == MonthKey::new(2025, 1))
        .unwrap();
    // Google and Meta both reported Jan 2025
    assert_eq!(jan_25.breakdown.len(), 2);
    let breakdown_spend: f64 = jan_25.breakdown.iter().filter_map(|r| r.spend).sum();
    assert_eq!(jan_25.spend, breakdown_spend);

    let union: usize = groups.iter().map(|g| g.breakdown.len()).sum();
    assert_eq!(union, records.len());
}

#[test]
fn test_shopify_rows_survive_the_all_tab_only() {
    let records = monthly_data();

    let all_tab = ReportFilter::new()
        .with_platform(PlatformFilter::All)
        .apply(records);
    assert!(all_tab.iter().any(|r| r.source == Platform::Shopify));

    let google_tab = ReportFilter::new()
        .with_platform(PlatformFilter::GoogleAds)
        .apply(records);
    assert!(!google_tab.iter().any(|r| r.source == Platform::Shopify));
}

#[test]
fn test_sorting_end_to_end() {
    let groups = group_by_month(monthly_data());

    let asc = sort_grouped(&groups, SortConfig::new(SortField::Month, SortDirection::Asc));
    let desc = sort_grouped(&groups, SortConfig::new(SortField::Month, SortDirection::Desc));
    let asc_keys: Vec<_> = asc.iter().map(|g| g.month_key()).collect();
    let desc_keys: Vec<_> = desc.iter().rev().map(|g| g.month_key()).collect();
    assert_eq!(asc_keys, desc_keys);

    let by_growth = sort_grouped(
        &groups,
        SortConfig::new(SortField::MomGrowth, SortDirection::Desc),
    );
    let first_absent = by_growth
        .iter()
        .position(|g| g.mom_growth.is_none())
        .unwrap();
    assert!(by_growth[first_absent..]
        .iter()
        .all(|g| g.mom_growth.is_none()));

    let by_spend = sort_grouped(&groups, SortConfig::new(SortField::Spend, SortDirection::Desc));
    assert!(by_spend.windows(2).all(|w| w[0].spend >= w[1].spend));
}

#[test]
fn test_platform_comparison() {
    let by_platform = kpis_by_platform(monthly_data());

    assert_eq!(by_platform.len(), 3);
    // Shopify attribution has revenue but no spend
    let shopify = &by_platform[&Platform::Shopify];
    assert_eq!(shopify.total_spend, 0.0);
    assert!(shopify.total_conversion_value > 0.0);
    assert_eq!(shopify.roas, 0.0);
    assert_eq!(shopify.cpa, 0.0);
}

#[test]
fn test_rendered_outputs() {
    let records = monthly_data();
    let kpis = compute_kpis(records);
    let groups = group_by_month(records);

    let table = get_formatter(false).format_dashboard(&kpis, &groups, false);
    assert!(table.contains("Monthly Breakdown"));
    assert!(table.contains("Nov 2024"));
    assert!(table.contains("Jul 2025"));

    let json = get_formatter(true).format_dashboard(&kpis, &groups, false);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["monthly"].as_array().unwrap().len(), groups.len());
}
