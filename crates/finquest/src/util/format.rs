const CURRENCY_SYMBOL: &str = "₹";

/// Group whole units with thousands separators
fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value rounded to whole units (e.g. ₹1,234,567, -₹450)
pub fn format_currency(value: f64) -> String {
    let units = value.abs().round() as u64;
    let sign = if value < 0.0 && units > 0 { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{}", group_thousands(units))
}

/// Currency with an explicit sign, for gains and losses
pub fn format_change(value: f64) -> String {
    if value.round() > 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

/// Compact form for tight columns (e.g. ₹2.1M, ₹450K, ₹50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{sign}{CURRENCY_SYMBOL}{:.1}M", abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{sign}{CURRENCY_SYMBOL}{:.0}K", abs_value / 1_000.0)
    } else {
        format!("{sign}{CURRENCY_SYMBOL}{abs_value:.0}")
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Short month name for a 1-based month number
pub fn month_name(month: u8) -> &'static str {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    NAMES
        .get(usize::from(month).wrapping_sub(1))
        .copied()
        .unwrap_or("???")
}
