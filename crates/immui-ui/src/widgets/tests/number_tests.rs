use super::*;

#[test]
fn formats_three_significant_digits() {
    assert_eq!(format_real(1.5), "1.5");
    assert_eq!(format_real(100.0), "100");
    assert_eq!(format_real(0.5), "0.5");
    assert_eq!(format_real(3.14159), "3.14");
    assert_eq!(format_real(-2.0), "-2");
    assert_eq!(format_real(0.0), "0");
}

#[test]
fn switches_to_exponent_for_large_and_small_values() {
    assert_eq!(format_real(1234.0), "1.23e+03");
    assert_eq!(format_real(0.00001), "1e-05");
    assert_eq!(format_real(0.0001), "0.0001");
}

#[test]
fn rounding_can_carry_into_the_exponent() {
    assert_eq!(format_real(999.6), "1e+03");
}

#[test]
fn unparsable_text_is_zero() {
    assert_eq!(parse_real(" 2.5 "), 2.5);
    assert_eq!(parse_real("abc"), 0.0);
    assert_eq!(parse_real(""), 0.0);
}
