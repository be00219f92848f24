// Tests for the arithmetic kernel: operators, zero semantics, and the
// algebraic laws that guard-bit rounding is supposed to uphold.

use bigfloat::BigFloat;

fn bf(s: &str) -> BigFloat {
    s.parse().unwrap()
}

#[test]
fn guard_bits_preserve_exact_products() {
    // 2.5 * 2.5 == 6.25 exactly, no decimal fuzz
    let a = bf("2.5");
    assert_eq!(&a * &a, bf("6.25"));

    let b = bf("0.125");
    assert_eq!(&b * &b, bf("0.015625"));
}

#[test]
fn subtraction_is_honest_about_precision() {
    let a = bf("123456789.012345678901234");
    let b = BigFloat::from_f64(1234.56789012345678);
    let diff = &a - &b;

    // reference value, good to twenty decimal digits
    let expect = bf("123455554.4444555554");
    assert!(diff.eq_ulp(&expect, 12), "diff = {}", diff);
    assert!(diff.is_positive());
}

#[test]
fn strict_zero_multiplication_keeps_tighter_accuracy() {
    let z = BigFloat::zero_with_accuracy(50);
    let v = BigFloat::one_with_accuracy(10);

    let p = &z * &v;
    assert!(p.is_strict_zero());
    assert_eq!(p.accuracy(), 50);
    assert_eq!(p, BigFloat::zero_with_accuracy(50));

    // commuted form picks the same accuracy
    assert_eq!((&v * &z).accuracy(), 50);
}

#[test]
fn additive_identity() {
    for s in ["1.5", "-0.001", "123456.789", "0.00000000012345"] {
        let v = bf(s);
        let z = BigFloat::zero();
        assert!((&v + &z).eq_ulp(&v, 2), "{} + 0", s);
        assert!((&z + &v).eq_ulp(&v, 2), "0 + {}", s);
    }
}

#[test]
fn multiplicative_identity() {
    for s in ["1.5", "-2.25", "987654.321", "0.0004882812"] {
        let v = bf(s);
        let one = BigFloat::from(1i64);
        assert!((&v * &one).eq_ulp(&v, 2), "{} * 1", s);
    }
}

#[test]
fn self_subtraction_is_zero() {
    for s in ["1.5", "-2.25", "31415.9265358979", "0.002"] {
        let v = bf(s);
        let d = &v - &v;
        assert!(d.is_zero(), "{} - {} = {:?}", s, s, d);
        assert!(d.eq_ulp(&BigFloat::zero(), 2));
    }
}

#[test]
fn addition_associativity_within_ulps() {
    let a = bf("1.25");
    let b = bf("37.5");
    let c = bf("-0.0625");
    let lhs = &(&a + &b) + &c;
    let rhs = &a + &(&b + &c);
    assert!(lhs.eq_ulp(&rhs, 4));
}

#[test]
fn negation_flips_sign_exactly() {
    for s in ["1.5", "-2.25", "0.002"] {
        let v = bf(s);
        assert_eq!((-&v).sign(), -v.sign());
    }
    assert_eq!((-BigFloat::zero()).sign(), 0);
}

#[test]
fn division_inverts_multiplication() {
    let a = bf("7.5");
    let b = bf("2.5");
    assert_eq!(&a / &b, BigFloat::from(3i32));

    let q = &bf("1.0") / &bf("3.0");
    assert!((&q * &bf("3.0")).eq_ulp(&bf("1.0"), 2));
}

#[test]
#[should_panic(expected = "division by zero")]
fn divide_by_strict_zero_panics() {
    let _ = &bf("1.5") / &BigFloat::zero();
}

#[test]
fn checked_division_reports_the_error() {
    let r = bf("1.5").checked_div(&BigFloat::zero());
    assert_eq!(r.unwrap_err(), bigfloat::Error::DivideByZero);
}

#[test]
fn remainder_follows_the_dividend_sign() {
    let seven = BigFloat::from(7i32);
    let three = BigFloat::from(3i32);
    assert_eq!(&seven % &three, BigFloat::from(1i32));
    assert_eq!(&-&seven % &three, BigFloat::from(-1i32));
}

#[test]
fn modulo_follows_the_divisor_sign() {
    let seven = BigFloat::from(7i32);
    let three = BigFloat::from(3i32);
    assert_eq!((-&seven).modulo(&three), BigFloat::from(2i32));
    assert_eq!(seven.modulo(&-&three), BigFloat::from(-2i32));
    assert_eq!(seven.modulo(&three), BigFloat::from(1i32));
}

#[test]
fn remainder_of_a_small_value_by_one() {
    let a = bf("0.00390625");
    let one = bf("1.00000000");

    let r = &a % &one;
    assert_eq!(r, a);
    // the decimal neighbourhood is not close enough: 2^-8 is not 0.004
    assert_ne!(r, bf("0.004"));
}

#[test]
fn remainder_with_fractional_divisors() {
    assert_eq!(&BigFloat::from(7i32) % &bf("2.5"), bf("2.0"));
    // power-of-two divisor takes the masking path
    assert_eq!(&bf("7.75") % &bf("0.5"), bf("0.25"));
}

#[test]
fn remainder_far_below_divisor_returns_dividend() {
    let tiny = bf("0.0000001");
    let big = bf("1000000");
    assert_eq!(&tiny % &big, tiny);
}

#[test]
fn shifts_only_move_the_scale() {
    let v = bf("1.5");
    let up = &v << 3;
    assert_eq!(up.size(), v.size());
    assert_eq!(up.scale(), v.scale() + 3);
    assert_eq!(up, BigFloat::from(12i32));

    let down = &up >> 3;
    assert_eq!(down, v);
}

#[test]
fn assign_forms_match_operators() {
    let mut v = bf("1.5");
    v += &bf("2.5");
    assert_eq!(v, BigFloat::from(4i32));
    v *= &bf("2.0");
    assert_eq!(v, BigFloat::from(8i32));
    v -= &bf("0.5");
    assert_eq!(v, bf("7.5"));
    v /= &bf("2.5");
    assert_eq!(v, BigFloat::from(3i32));
    v <<= 2;
    assert_eq!(v, BigFloat::from(12i32));
}

#[test]
fn results_keep_the_size_invariant() {
    let samples = [
        &bf("1.5") + &bf("0.0003"),
        &bf("123.75") * &bf("-8.5"),
        &bf("10") / &bf("7"),
        &bf("17.25") % &bf("1.5"),
        bf("3.75").sqrt(),
    ];
    for v in samples {
        assert_eq!(v.size(), v.mantissa().significant_bits() as usize);
        assert_eq!(v.mantissa().significant_bits() == 0, v.is_strict_zero());
    }
}
