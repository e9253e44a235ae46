//! Display formatting helpers for report values
//!
//! Centralizes the numeric display conventions shared by the table and
//! summary renderers: thousands separators, whole-dollar currency, signed
//! growth percentages, and the placeholder dash for absent values.

/// Placeholder rendered for absent values
pub const PLACEHOLDER: &str = "—";

/// Format a count with thousands separators
///
/// # Examples
/// ```
/// use adstat::format::format_number;
///
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result.chars().rev().collect()
}

/// Format a dollar amount with thousands separators and no cents
///
/// Matches the report convention of whole-dollar KPI values.
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_number(amount.round() as u64))
}

/// Format a growth percentage with an explicit leading sign
///
/// Non-negative values get a `+` prefix; one decimal place always.
///
/// # Examples
/// ```
/// use adstat::format::format_percent;
///
/// assert_eq!(format_percent(5.0), "+5.0%");
/// assert_eq!(format_percent(-12.34), "-12.3%");
/// ```
pub fn format_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Format month-over-month growth, rendering absent as the placeholder
///
/// Absent growth is never rendered as "0.0%".
pub fn format_growth(growth: Option<f64>) -> String {
    match growth {
        Some(g) => format_percent(g),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a ROAS multiple, e.g. "2.67x", or the placeholder when undefined
pub fn format_roas(roas: Option<f64>) -> String {
    match roas {
        Some(r) => format!("{r:.2}x"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a CPA dollar amount, or the placeholder when undefined
pub fn format_cpa(cpa: Option<f64>) -> String {
    match cpa {
        Some(c) => format_currency(c),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format an optional count, rendering absent as the placeholder
pub fn format_opt_number(n: Option<u64>) -> String {
    match n {
        Some(v) => format_number(v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format an optional dollar amount, rendering absent as the placeholder
pub fn format_opt_currency(amount: Option<f64>) -> String {
    match amount {
        Some(v) => format_currency(v),
        None => PLACEHOLDER.to_string(),
    }
}
