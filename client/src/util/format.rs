//! Display formatting for listing cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currency prefix shown before listing prices.
pub const CURRENCY: &str = "AED";

/// Group the integer part of `value` with commas, keeping up to two decimals.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 { "-" } else { "" };
    if frac.is_empty() { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{frac}") }
}

/// Price label for a listing card, e.g. `AED 1,000,000`.
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY} {}", group_thousands(price))
}
