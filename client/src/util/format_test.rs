use super::*;

#[test]
fn int_grouping_uses_dots() {
    assert_eq!(format_int_pt_br(0), "0");
    assert_eq!(format_int_pt_br(999), "999");
    assert_eq!(format_int_pt_br(1_000), "1.000");
    assert_eq!(format_int_pt_br(1_234_567), "1.234.567");
    assert_eq!(format_int_pt_br(-4_500), "-4.500");
}

#[test]
fn whole_areas_omit_decimals() {
    assert_eq!(format_area_m2(1_234.0), "1.234 m²");
}

#[test]
fn fractional_areas_use_comma_decimals() {
    assert_eq!(format_area_m2(87.5), "87,50 m²");
}

#[test]
fn brl_always_carries_two_decimals() {
    assert_eq!(format_brl(15_000.0), "R$ 15.000,00");
    assert_eq!(format_brl(0.5), "R$ 0,50");
    assert_eq!(format_brl(1_234.56), "R$ 1.234,56");
}

#[test]
fn iso_date_renders_as_br_date() {
    assert_eq!(format_date_br("2025-03-10"), "10/03/2025");
}

#[test]
fn rfc3339_timestamp_keeps_only_the_date() {
    assert_eq!(format_date_br("2025-03-10T12:34:56Z"), "10/03/2025");
}

#[test]
fn malformed_dates_pass_through_unchanged() {
    assert_eq!(format_date_br("ontem"), "ontem");
    assert_eq!(format_date_br("2025/03/10"), "2025/03/10");
    assert_eq!(format_date_br(""), "");
}

#[test]
fn request_codes_are_zero_padded_to_four() {
    assert_eq!(format_request_code(7), "#0007");
    assert_eq!(format_request_code(42), "#0042");
    assert_eq!(format_request_code(12_345), "#12345");
}
