//! Output formatting module for adstat
//!
//! Formatters for displaying report data in different formats:
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output and integration with other tools
//!
//! # Examples
//!
//! ```
//! use adstat::aggregation::{compute_kpis, group_by_month};
//! use adstat::dataset::monthly_data;
//! use adstat::output::get_formatter;
//!
//! let records = monthly_data();
//! let kpis = compute_kpis(records);
//! let groups = group_by_month(records);
//!
//! // Human-readable table output
//! let formatter = get_formatter(false);
//! println!("{}", formatter.format_dashboard(&kpis, &groups, false));
//!
//! // Machine-readable JSON output
//! let json_formatter = get_formatter(true);
//! println!("{}", json_formatter.format_kpis(&kpis));
//! ```

use crate::aggregation::{GroupedMonth, KpiMetrics};
use crate::format::{
    format_cpa, format_currency, format_growth, format_number, format_opt_currency,
    format_opt_number, format_roas, PLACEHOLDER,
};
use crate::types::{MonthlyRecord, Platform};
use colored::Colorize;
use prettytable::{format, row, Cell, Row, Table};
use serde_json::json;
use std::collections::BTreeMap;

/// Trait for report formatters
pub trait OutputFormatter {
    /// Format the full dashboard view: KPI summary plus monthly table
    fn format_dashboard(&self, kpis: &KpiMetrics, groups: &[GroupedMonth], expand: bool) -> String;

    /// Format the KPI summary
    fn format_kpis(&self, kpis: &KpiMetrics) -> String;

    /// Format the monthly table, optionally with per-platform breakdown rows
    fn format_monthly(&self, groups: &[GroupedMonth], expand: bool) -> String;

    /// Format the per-platform KPI comparison
    fn format_platforms(&self, platforms: &BTreeMap<Platform, KpiMetrics>) -> String;
}

/// Table formatter for human-readable output
///
/// Produces ASCII tables suitable for terminal display. Numbers carry
/// thousands separators, currency is whole-dollar, absent values render as
/// a dash, and growth cells are colored by sign.
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new TableFormatter
    pub fn new() -> Self {
        Self
    }

    fn platforms_label(group: &GroupedMonth) -> String {
        if group.is_fully_paused() {
            return Platform::Paused.label().to_string();
        }
        let mut labels: Vec<&str> = Vec::new();
        for record in &group.breakdown {
            if !record.is_paused() && !labels.contains(&record.source.label()) {
                labels.push(record.source.label());
            }
        }
        labels.join(", ")
    }

    fn growth_cell(growth: Option<f64>) -> Cell {
        let text = format_growth(growth);
        match growth {
            Some(g) if g >= 0.0 => Cell::new(&text).style_spec("rFg"),
            Some(_) => Cell::new(&text).style_spec("rFr"),
            None => Cell::new(&text).style_spec("r"),
        }
    }

    fn month_row(group: &GroupedMonth) -> Row {
        if group.is_fully_paused() {
            // a paused month keeps its place on the timeline but reports
            // nothing
            return Row::new(vec![
                Cell::new(&group.month),
                Cell::new(Platform::Paused.label()),
                Cell::new(PLACEHOLDER).style_spec("r"),
                Cell::new(PLACEHOLDER).style_spec("r"),
                Cell::new(PLACEHOLDER).style_spec("r"),
                Cell::new(PLACEHOLDER).style_spec("r"),
                Cell::new(PLACEHOLDER).style_spec("r"),
                Cell::new(PLACEHOLDER).style_spec("r"),
                Cell::new(PLACEHOLDER).style_spec("r"),
                Cell::new(PLACEHOLDER).style_spec("r"),
            ]);
        }

        Row::new(vec![
            Cell::new(&group.month),
            Cell::new(&Self::platforms_label(group)),
            Cell::new(&format_number(group.impressions)).style_spec("r"),
            Cell::new(&format_number(group.clicks)).style_spec("r"),
            Cell::new(&format_currency(group.spend)).style_spec("r"),
            Cell::new(&format_number(group.conversions)).style_spec("r"),
            Cell::new(&format_currency(group.conversion_value)).style_spec("r"),
            Cell::new(&format_cpa(group.cpa)).style_spec("r"),
            Cell::new(&format_roas(group.roas)).style_spec("r"),
            Self::growth_cell(group.mom_growth),
        ])
    }

    fn breakdown_row(record: &MonthlyRecord) -> Row {
        Row::new(vec![
            Cell::new(&format!("  └─ {}", record.source.label())),
            Cell::new(""),
            Cell::new(&format_opt_number(record.impressions)).style_spec("r"),
            Cell::new(&format_opt_number(record.clicks)).style_spec("r"),
            Cell::new(&format_opt_currency(record.spend)).style_spec("r"),
            Cell::new(&format_opt_number(record.conversions)).style_spec("r"),
            Cell::new(&format_opt_currency(record.conversion_value)).style_spec("r"),
            Cell::new("").style_spec("r"),
            Cell::new("").style_spec("r"),
            Cell::new("").style_spec("r"),
        ])
    }

    fn totals_row(groups: &[GroupedMonth]) -> Row {
        let impressions: u64 = groups.iter().map(|g| g.impressions).sum();
        let clicks: u64 = groups.iter().map(|g| g.clicks).sum();
        let spend: f64 = groups.iter().map(|g| g.spend).sum();
        let conversions: u64 = groups.iter().map(|g| g.conversions).sum();
        let value: f64 = groups.iter().map(|g| g.conversion_value).sum();

        let cpa = if conversions > 0 {
            Some(spend / conversions as f64)
        } else {
            None
        };
        let roas = if spend > 0.0 { Some(value / spend) } else { None };

        row![
            b -> "TOTAL",
            b -> "",
            br -> format_number(impressions),
            br -> format_number(clicks),
            br -> format_currency(spend),
            br -> format_number(conversions),
            br -> format_currency(value),
            br -> format_cpa(cpa),
            br -> format_roas(roas),
            br -> ""
        ]
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_dashboard(&self, kpis: &KpiMetrics, groups: &[GroupedMonth], expand: bool) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            "Performance Summary".bold(),
            self.format_kpis(kpis),
            "Monthly Breakdown".bold(),
            self.format_monthly(groups, expand)
        )
    }

    fn format_kpis(&self, kpis: &KpiMetrics) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![b -> "Metric", b -> "Value"]);
        table.add_row(row!["Ad Spend", r -> format_currency(kpis.total_spend)]);
        table.add_row(row!["Revenue", r -> format_currency(kpis.total_conversion_value)]);
        table.add_row(row!["ROAS", r -> format!("{:.2}x", kpis.roas)]);
        table.add_row(row!["Conversions", r -> format_number(kpis.total_conversions)]);
        table.add_row(row!["CPA", r -> format_currency(kpis.cpa)]);
        table.add_row(row!["Avg Order Value", r -> format_currency(kpis.avg_order_value)]);
        table.add_row(row!["Conversion Rate", r -> format!("{:.2}%", kpis.avg_conversion_rate)]);
        table.add_row(row!["Impressions", r -> format_number(kpis.total_impressions)]);
        table.add_row(row!["Clicks", r -> format_number(kpis.total_clicks)]);

        table.to_string()
    }

    fn format_monthly(&self, groups: &[GroupedMonth], expand: bool) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "Month",
            b -> "Platforms",
            b -> "Impressions",
            b -> "Clicks",
            b -> "Ad Spend",
            b -> "Conversions",
            b -> "Revenue",
            b -> "CPA",
            b -> "ROAS",
            b -> "MOM Growth"
        ]);

        for group in groups {
            table.add_row(Self::month_row(group));

            // drill-down rows only make sense for multi-platform months
            if expand && !group.is_fully_paused() && group.breakdown.len() > 1 {
                for record in &group.breakdown {
                    if !record.is_paused() {
                        table.add_row(Self::breakdown_row(record));
                    }
                }
            }
        }

        table.add_row(Self::totals_row(groups));

        table.to_string()
    }

    fn format_platforms(&self, platforms: &BTreeMap<Platform, KpiMetrics>) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "Platform",
            b -> "Impressions",
            b -> "Clicks",
            b -> "Ad Spend",
            b -> "Conversions",
            b -> "Revenue",
            b -> "CPA",
            b -> "ROAS"
        ]);

        for (platform, kpis) in platforms {
            table.add_row(row![
                platform.label(),
                r -> format_number(kpis.total_impressions),
                r -> format_number(kpis.total_clicks),
                r -> format_currency(kpis.total_spend),
                r -> format_number(kpis.total_conversions),
                r -> format_currency(kpis.total_conversion_value),
                r -> format_currency(kpis.cpa),
                r -> format!("{:.2}x", kpis.roas)
            ]);
        }

        table.to_string()
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    fn kpis_json(kpis: &KpiMetrics) -> serde_json::Value {
        json!({
            "total_impressions": kpis.total_impressions,
            "total_clicks": kpis.total_clicks,
            "total_spend": kpis.total_spend,
            "total_conversions": kpis.total_conversions,
            "total_conversion_value": kpis.total_conversion_value,
            "avg_conversion_rate": kpis.avg_conversion_rate,
            "avg_order_value": kpis.avg_order_value,
            "cpa": kpis.cpa,
            "roas": kpis.roas,
        })
    }

    fn group_json(group: &GroupedMonth, expand: bool) -> serde_json::Value {
        let mut group_json = json!({
            "month": group.month,
            "year": group.year,
            "month_index": group.month_index,
            "paused": group.is_fully_paused(),
            "impressions": group.impressions,
            "clicks": group.clicks,
            "spend": group.spend,
            "conversions": group.conversions,
            "conversion_value": group.conversion_value,
            "cpa": group.cpa,
            "roas": group.roas,
            "mom_growth": group.mom_growth,
        });

        if expand {
            group_json["breakdown"] = json!(group.breakdown);
        }

        group_json
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_dashboard(&self, kpis: &KpiMetrics, groups: &[GroupedMonth], expand: bool) -> String {
        let output = json!({
            "kpis": Self::kpis_json(kpis),
            "monthly": groups
                .iter()
                .map(|g| Self::group_json(g, expand))
                .collect::<Vec<_>>(),
        });
        serde_json::to_string_pretty(&output).unwrap()
    }

    fn format_kpis(&self, kpis: &KpiMetrics) -> String {
        serde_json::to_string_pretty(&Self::kpis_json(kpis)).unwrap()
    }

    fn format_monthly(&self, groups: &[GroupedMonth], expand: bool) -> String {
        let output = json!({
            "monthly": groups
                .iter()
                .map(|g| Self::group_json(g, expand))
                .collect::<Vec<_>>(),
        });
        serde_json::to_string_pretty(&output).unwrap()
    }

    fn format_platforms(&self, platforms: &BTreeMap<Platform, KpiMetrics>) -> String {
        let output = json!({
            "platforms": platforms
                .iter()
                .map(|(platform, kpis)| {
                    json!({
                        "platform": platform.to_string(),
                        "label": platform.label(),
                        "kpis": Self::kpis_json(kpis),
                    })
                })
                .collect::<Vec<_>>(),
        });
        serde_json::to_string_pretty(&output).unwrap()
    }
}

/// Get the appropriate formatter for the output mode
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{compute_kpis, group_by_month};
    use crate::types::{MonthKey, MonthlyRecord};

    fn sample_records() -> Vec<MonthlyRecord> {
        vec![
            MonthlyRecord {
                month: MonthKey::new(2025, 1).label(),
                year: 2025,
                month_index: 1,
                impressions: Some(10_000),
                clicks: Some(500),
                spend: Some(1000.0),
                conversions: Some(10),
                conversion_value: Some(3000.0),
                source: Platform::GoogleAds,
            },
            MonthlyRecord {
                month: MonthKey::new(2025, 1).label(),
                year: 2025,
                month_index: 1,
                impressions: Some(50_000),
                clicks: Some(1200),
                spend: Some(500.0),
                conversions: Some(5),
                conversion_value: Some(1000.0),
                source: Platform::MetaAds,
            },
            MonthlyRecord {
                month: MonthKey::new(2025, 2).label(),
                year: 2025,
                month_index: 2,
                impressions: None,
                clicks: None,
                spend: None,
                conversions: None,
                conversion_value: None,
                source: Platform::Paused,
            },
        ]
    }

    #[test]
    fn test_table_monthly() {
        let groups = group_by_month(&sample_records());
        let output = TableFormatter::new().format_monthly(&groups, false);

        assert!(output.contains("Jan 2025"));
        assert!(output.contains("Google Ads, Meta Ads"));
        assert!(output.contains("$1,500"));
        assert!(output.contains("2.67x"));
        assert!(output.contains("TOTAL"));
        // the paused month renders placeholder dashes
        assert!(output.contains("Feb 2025"));
        assert!(output.contains(PLACEHOLDER));
    }

    #[test]
    fn test_table_expand_shows_breakdown() {
        let groups = group_by_month(&sample_records());
        let formatter = TableFormatter::new();

        let collapsed = formatter.format_monthly(&groups, false);
        assert!(!collapsed.contains("└─"));

        let expanded = formatter.format_monthly(&groups, true);
        assert!(expanded.contains("└─ Google Ads"));
        assert!(expanded.contains("└─ Meta Ads"));
    }

    #[test]
    fn test_table_kpis() {
        let kpis = compute_kpis(&sample_records());
        let output = TableFormatter::new().format_kpis(&kpis);

        assert!(output.contains("Ad Spend"));
        assert!(output.contains("$1,500"));
        assert!(output.contains("ROAS"));
        assert!(output.contains("2.67x"));
    }

    #[test]
    fn test_table_platforms() {
        let platforms = crate::aggregation::kpis_by_platform(&sample_records());
        let output = TableFormatter::new().format_platforms(&platforms);

        assert!(output.contains("Google Ads"));
        assert!(output.contains("Meta Ads"));
        assert!(!output.contains("Paused"));
    }

    #[test]
    fn test_json_dashboard_round_trips() {
        let records = sample_records();
        let kpis = compute_kpis(&records);
        let groups = group_by_month(&records);

        let output = JsonFormatter.format_dashboard(&kpis, &groups, true);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["kpis"]["total_spend"], 1500.0);
        assert_eq!(parsed["monthly"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["monthly"][0]["cpa"], 100.0);
        // undefined ratios serialize as null, not 0
        assert!(parsed["monthly"][1]["cpa"].is_null());
        assert!(parsed["monthly"][1]["paused"].as_bool().unwrap());
        assert_eq!(parsed["monthly"][0]["breakdown"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_monthly_collapsed_omits_breakdown() {
        let groups = group_by_month(&sample_records());
        let output = JsonFormatter.format_monthly(&groups, false);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(parsed["monthly"][0].get("breakdown").is_none());
    }

    #[test]
    fn test_get_formatter() {
        let records = sample_records();
        let kpis = compute_kpis(&records);

        let json_output = get_formatter(true).format_kpis(&kpis);
        assert!(serde_json::from_str::<serde_json::Value>(&json_output).is_ok());

        let table_output = get_formatter(false).format_kpis(&kpis);
        assert!(table_output.contains("Metric"));
    }
}
