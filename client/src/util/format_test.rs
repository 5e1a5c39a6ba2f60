use super::*;

#[test]
fn groups_millions() {
    assert_eq!(format_price(1_000_000.0), "AED 1,000,000");
}

#[test]
fn small_values_have_no_separator() {
    assert_eq!(group_thousands(950.0), "950");
    assert_eq!(group_thousands(0.0), "0");
}

#[test]
fn keeps_significant_decimals() {
    assert_eq!(group_thousands(1234.5), "1,234.5");
    assert_eq!(group_thousands(1234.567), "1,234.57");
}

#[test]
fn negative_values_keep_sign() {
    assert_eq!(group_thousands(-12_345.0), "-12,345");
}
