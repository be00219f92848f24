// Tests for the math functions: pow, roots, log2 and the trig kernels.

use bigfloat::consts::{get_constant, Constant};
use bigfloat::{BigFloat, Error};

fn bf(s: &str) -> BigFloat {
    s.parse().unwrap()
}

fn close(a: f64, b: f64, rel: f64) -> bool {
    if b == 0.0 {
        a.abs() < rel
    } else {
        ((a - b) / b).abs() < rel
    }
}

#[test]
fn pow_matches_reference_for_small_cases() {
    assert_eq!(BigFloat::from(3i32).pow(2), BigFloat::from(9i32));
    assert_eq!(bf("1.5").pow(4), bf("5.0625"));
    assert_eq!(bf("-1.5").pow(2), bf("2.25"));
    assert_eq!(bf("-1.5").pow(3), bf("-3.375"));
    assert_eq!(BigFloat::from(10i32).pow(10), BigFloat::from(10_000_000_000i64));
}

#[test]
fn pow_zero_exponent_is_one() {
    let v = bf("123.456");
    let one = v.pow(0);
    assert_eq!(one, BigFloat::one());
    assert_eq!(one.accuracy(), v.accuracy().max(0));
}

#[test]
fn pow_of_strict_zero() {
    let z = BigFloat::zero_with_accuracy(10);
    assert!(z.pow(5).is_strict_zero());
}

#[test]
fn pow_negative_exponent_inverts() {
    assert_eq!(BigFloat::from(2i32).pow(-2), bf("0.25"));
    let v = bf("1.25");
    let prod = &v.pow(-3) * &v.pow(3);
    assert!(prod.eq_ulp(&BigFloat::one(), 4));
}

#[test]
fn pow_large_exponent_stays_within_a_ulp() {
    let v = bf("1.0000001");
    let direct = v.pow(1000);
    // reference through f64 in a regime it can handle
    let expect = BigFloat::from_f64(1.0000001f64.powi(1000));
    assert!(close(direct.to_f64(), expect.to_f64(), 1e-10));
}

#[test]
fn sqrt_of_perfect_square_is_exact() {
    let r = BigFloat::from(256i32).sqrt();
    assert_eq!(r, BigFloat::from(16i32));
    assert!(r.size() >= BigFloat::from(16i32).size());

    assert_eq!(bf("6.25").sqrt(), bf("2.5"));
}

#[test]
fn sqrt_squares_back_within_ulps() {
    for s in ["2", "3", "10", "0.5", "123.456", "0.00007", "98765.4321"] {
        let v = bf(s);
        let r = v.sqrt();
        let sq = &r * &r;
        assert!(sq.eq_ulp(&v, 6), "sqrt({})^2 = {}", s, sq);
    }
}

#[test]
fn sqrt_of_zero_is_zero() {
    assert!(BigFloat::zero_with_accuracy(10).sqrt().is_zero());
}

#[test]
#[should_panic(expected = "root or logarithm")]
fn sqrt_of_negative_panics() {
    let _ = bf("-4").sqrt();
}

#[test]
fn checked_sqrt_reports_negative_input() {
    assert_eq!(bf("-4").checked_sqrt(), Err(Error::NegativeRoot));
}

#[test]
fn nth_root_brackets_exactly() {
    assert_eq!(BigFloat::from(27i32).cube_root(), BigFloat::from(3i32));
    assert_eq!(BigFloat::from(1024i32).nth_root(10), BigFloat::from(2i32));

    let v = bf("2.5");
    let r = v.nth_root(5);
    assert!(r.pow(5).eq_ulp(&v, 6));
}

#[test]
fn odd_roots_of_negative_values_work() {
    assert_eq!(BigFloat::from(-27i32).cube_root(), BigFloat::from(-3i32));
    assert_eq!(
        BigFloat::from(-16i32).checked_nth_root(4),
        Err(Error::NegativeRoot)
    );
}

#[test]
fn inverse_matches_division() {
    assert_eq!(BigFloat::from(2i32).inverse(), bf("0.5"));
    for s in ["3", "-7.5", "0.004", "123456.789"] {
        let v = bf(s);
        let prod = &v.inverse() * &v;
        assert!(prod.eq_ulp(&BigFloat::one(), 4), "1/{} * {}", s, s);
    }
}

#[test]
fn checked_inverse_of_zero_is_an_error() {
    assert_eq!(BigFloat::zero().checked_inverse(), Err(Error::DivideByZero));
}

#[test]
fn log2_of_powers_of_two_is_exact() {
    assert_eq!(BigFloat::from(4i32).log2(), 2.0);
    assert_eq!(BigFloat::from(1i32).log2(), 0.0);
    assert_eq!(bf("0.25").log2(), -2.0);
}

#[test]
fn log2_round_trips_through_exp2() {
    for s in ["3", "10.5", "0.004", "12345678.9", "0.00000125"] {
        let v = bf(s);
        let back = v.log2().exp2();
        assert!(close(back, v.to_f64(), 1e-8), "2^log2({})", s);
    }
}

#[test]
fn checked_log2_rejects_non_positive_input() {
    assert_eq!(bf("-1").checked_log2(), Err(Error::NegativeRoot));
    assert_eq!(BigFloat::zero().checked_log2(), Err(Error::NegativeRoot));
}

#[test]
fn trig_matches_hardware_in_double_range() {
    for d in [0.5, 0.1, 1.0, -0.7, 2.0, 3.0, -4.5, 10.0] {
        let v = BigFloat::from_f64(d);
        assert!(close(v.sin().to_f64(), d.sin(), 1e-12), "sin({})", d);
        assert!(close(v.cos().to_f64(), d.cos(), 1e-12), "cos({})", d);
        assert!(close(v.tan().to_f64(), d.tan(), 1e-11), "tan({})", d);
    }
}

#[test]
fn trig_of_zero() {
    assert!(BigFloat::zero().sin().is_zero());
    assert_eq!(BigFloat::zero().cos(), BigFloat::one());
}

#[test]
fn sin_of_pi_is_nearly_zero() {
    let pi = get_constant(Constant::Pi, 128);
    let s = pi.sin();
    assert!(s.to_f64().abs() < 1e-30, "sin(pi) = {:?}", s);
}

#[test]
fn pythagorean_identity() {
    for d in [0.3, 1.1, -2.2, 5.0] {
        let v = BigFloat::from_f64(d);
        let s = v.sin();
        let c = v.cos();
        let sum = &(&s * &s) + &(&c * &c);
        assert!(sum.eq_ulp(&BigFloat::one(), 8), "sin^2+cos^2 at {}", d);
    }
}

#[test]
fn range_reduction_survives_large_arguments() {
    let v = BigFloat::from_f64(1000000.0);
    assert!(close(v.sin().to_f64(), 1000000.0f64.sin(), 1e-9));
    assert!(close(v.cos().to_f64(), 1000000.0f64.cos(), 1e-9));
}
