// Tests for the string boundary: honest-precision display and the
// parse/format round-trip law.

use bigfloat::BigFloat;

fn bf(s: &str) -> BigFloat {
    s.parse().unwrap()
}

#[test]
fn display_shows_exact_dyadic_values() {
    assert_eq!(bf("2.5").to_string(), "2.5");
    assert_eq!(bf("6.25").to_string(), "6.25");
    assert_eq!(bf("0.00390625").to_string(), "0.00390625");
    assert_eq!(bf("-2.5").to_string(), "-2.5");
    assert_eq!(bf("42").to_string(), "42");
    assert_eq!(BigFloat::zero().to_string(), "0");
}

#[test]
fn display_uses_scientific_notation_at_the_edges() {
    assert_eq!(bf("1e30").to_string(), "1e+30");
    assert_eq!(bf("1e-10").to_string(), "1e-10");
    assert_eq!(bf("-2.5e40").to_string(), "-2.5e+40");
}

#[test]
fn parse_then_display_round_trips_within_ulps() {
    // the law holds for moderate binary exponents
    let cases = [
        "2.5",
        "-0.001234",
        "123456.789",
        "3.14159265358979",
        "0.000001999",
        "99999999.99",
        "-42",
        "1.0000001",
    ];
    for s in cases {
        let v = bf(s);
        assert!(v.binary_exponent().abs() <= 32, "test case out of range");
        let again = bf(&v.to_string());
        assert!(v.eq_ulp(&again, 12), "{} -> {} -> {}", s, v, again);
    }
}

#[test]
fn display_masks_bits_the_value_does_not_carry() {
    // few stored bits => few printed digits
    let narrow = bf("0.5");
    assert_eq!(narrow.to_string(), "0.5");

    // a wide value prints more digits
    let wide = bf("0.50000000000000000");
    assert!(wide.precision() > narrow.precision());
    assert_eq!(wide.to_string(), "0.5");
}

#[test]
fn guard_rendering_shows_the_dust() {
    let v = bf("1.5").next_up();
    let plain = v.to_string();
    assert_eq!(plain, "1.5");

    // the guard view renders the full mantissa and parses back close
    let with_guard: BigFloat = v.to_string_with_guard().parse().unwrap();
    assert!(with_guard.eq_ulp(&v, 2));
}

#[test]
fn debug_exposes_the_raw_triple() {
    let v = bf("2.5");
    let dbg = format!("{:?}", v);
    assert!(dbg.contains("mantissa"), "{}", dbg);
    assert!(dbg.contains("scale"), "{}", dbg);
    assert!(dbg.contains("size"), "{}", dbg);
}

#[test]
fn whitespace_and_signs_parse() {
    assert_eq!(bf(" 2.5 "), bf("2.5"));
    assert_eq!(bf("+2.5"), bf("2.5"));
    assert_eq!(bf("-0"), BigFloat::zero());
}
