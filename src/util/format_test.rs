use super::*;

#[test]
fn format_money_uses_two_decimals() {
    assert_eq!(format_money(45.5), "$45.50");
    assert_eq!(format_money(0.0), "$0.00");
    assert_eq!(format_money(120.0), "$120.00");
}

#[test]
fn sum_prices_adds_values() {
    assert!((sum_prices([30.0, 45.5, 12.25]) - 87.75).abs() < f64::EPSILON);
    assert_eq!(format_money(sum_prices(std::iter::empty())), "$0.00");
}
