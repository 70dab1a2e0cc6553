//! Money formatting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format an amount as dollars with two decimals, e.g. `$45.50`.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Sum prices without accumulating `-0.0` for empty input.
pub fn sum_prices<I: IntoIterator<Item = f64>>(prices: I) -> f64 {
    prices.into_iter().fold(0.0, |acc, p| acc + p)
}
