/*!
Integer kernels underneath the floating-point operators.

Everything here operates on plain [`rug::Integer`] values. The kernels are
seeded with hardware floating-point estimates where that is cheap, then
refined with integer Newton iteration until the exact answer brackets:
the results are exact integers, not approximations, except for
[`pow_most_significant_bits`] whose 1-ULP looseness is part of its
contract.
*/

use std::cmp::Ordering;

use num_traits::Zero;
use rug::ops::Pow;
use rug::Integer;

use crate::error::panic_divide_by_zero;
use crate::shift::rounding_right_shift;
use crate::util::bit_length;

/// Computes `floor(sqrt(n))` for a non-negative `n`.
///
/// Small inputs are answered by the hardware square root; larger inputs
/// seed Newton iteration from the top bits and refine in the integer
/// domain. The result `r` always satisfies `r^2 <= n < (r+1)^2`.
///
/// Panics on negative input.
pub fn isqrt(n: &Integer) -> Integer {
    assert!(n.cmp0() != Ordering::Less, "isqrt of a negative number");
    if *n < 2u8 {
        return n.clone();
    }

    let bits = bit_length(n);
    let mut x = if bits <= 52 {
        // exact in hardware up to the +2 safety margin
        Integer::from(n.to_f64().sqrt() as u64 + 2)
    } else {
        // seed from the top bits, keeping the dropped shift even
        let sh = ((bits - 52 + 1) & !1) as u32;
        let top = Integer::from(n >> sh).to_f64();
        (Integer::from(top.sqrt() as u64) + 2) << (sh / 2)
    };

    // one step lands at or above the true root, then descend
    loop {
        let next: Integer = (Integer::from(n / &x) + &x) >> 1;
        if next >= x {
            break;
        }
        x = next;
    }

    // the seed margin can leave us one high
    while Integer::from(x.square_ref()) > *n {
        x -= 1;
    }

    debug_assert!(Integer::from(x.square_ref()) <= *n);
    debug_assert!(Integer::from(&x + 1u8).square() > *n);
    x
}

/// Computes `floor(n^(1/k))` for `n >= 0` and `k >= 1`.
///
/// The bracketing `r^k <= n < (r+1)^k` is verified by two integer powers
/// before returning.
///
/// Panics on negative input or `k == 0`.
pub fn nth_root(n: &Integer, k: u32) -> Integer {
    assert!(k >= 1, "root order must be at least 1");
    assert!(n.cmp0() != Ordering::Less, "nth_root of a negative number");
    if k == 1 || *n < 2u8 {
        return n.clone();
    }
    if k == 2 {
        return isqrt(n);
    }

    let bits = bit_length(n);
    if (k as usize) >= bits {
        // 2^(bits-1) <= n implies 1 <= n^(1/k) < 2
        return Integer::from(1);
    }

    // f64 seed from the top bits; the dropped shift is a multiple of k
    let mut x = if bits <= 52 {
        Integer::from(n.to_f64().powf(1.0 / k as f64) as u64 + 2)
    } else {
        let sh = (((bits - 52) + k as usize - 1) / k as usize * k as usize) as u32;
        let top = Integer::from(n >> sh).to_f64();
        (Integer::from(top.powf(1.0 / k as f64) as u64) + 2) << (sh / k)
    };

    // Newton: x <- ((k-1)*x + n/x^(k-1)) / k, descending from above
    loop {
        let xk1 = Integer::from((&x).pow(k - 1));
        let next: Integer = (Integer::from(n / &xk1) + Integer::from(&x * (k - 1))) / k;
        if next >= x {
            break;
        }
        x = next;
    }

    // settle on the exact bracket
    while Integer::from((&x).pow(k)) > *n {
        x -= 1;
    }
    while Integer::from(&x + 1u8).pow(k) <= *n {
        x += 1;
    }
    x
}

/// Computes an approximation of `base^exp` keeping roughly `wanted_bits`
/// most-significant bits.
///
/// Returns `(m, s)` with `m * 2^s ~= base^exp`. When the exact power fits
/// in `wanted_bits` the exact value is returned with `s == 0`; otherwise
/// `m` is within one unit in its last place of the true leading bits and
/// `s` may differ from the ideal normalization by one. Callers reconcile
/// through the returned pair, never by recomputing the shift.
pub fn pow_most_significant_bits(
    base: &Integer,
    exp: u32,
    wanted_bits: usize,
    extra_accurate: bool,
) -> (Integer, isize) {
    if exp == 0 {
        return (Integer::from(1), 0);
    }

    let negative = base.cmp0() == Ordering::Less && exp % 2 == 1;
    let mag = Integer::from(base.abs_ref());
    let base_len = bit_length(&mag);

    // exact when the full power cannot exceed the wanted width
    if base_len.saturating_mul(exp as usize) <= wanted_bits {
        let exact = Integer::from((&mag).pow(exp));
        return (if negative { -exact } else { exact }, 0);
    }

    // working width: every trim loses at most half an ULP of the working
    // mantissa and there are ~2*log2(exp) trims
    let exp_log2 = (32 - exp.leading_zeros()) as usize;
    let slack = if extra_accurate {
        2 * exp_log2 + 32
    } else {
        exp_log2 + 8
    };
    let work_bits = wanted_bits + slack;

    let base_excess = base_len.saturating_sub(work_bits);
    let cur = if base_excess > 0 {
        rounding_right_shift(&mag, base_excess)
    } else {
        mag
    };
    let cur_shift = base_excess as isize;

    let mut acc = Integer::from(1);
    let mut acc_shift: isize = 0;
    let mut started = false;

    for i in (0..32 - exp.leading_zeros()).rev() {
        if started {
            acc.square_mut();
            acc_shift *= 2;
            let excess = bit_length(&acc).saturating_sub(work_bits);
            if excess > 0 {
                acc = rounding_right_shift(&acc, excess);
                acc_shift += excess as isize;
            }
        }
        if exp & (1 << i) != 0 {
            if started {
                acc *= &cur;
                acc_shift += cur_shift;
                let excess = bit_length(&acc).saturating_sub(work_bits);
                if excess > 0 {
                    acc = rounding_right_shift(&acc, excess);
                    acc_shift += excess as isize;
                }
            } else {
                acc = cur.clone();
                acc_shift = cur_shift;
                started = true;
            }
        }
    }

    let excess = bit_length(&acc).saturating_sub(wanted_bits);
    if excess > 0 {
        acc = rounding_right_shift(&acc, excess);
        acc_shift += excess as isize;
    }

    (if negative { -acc } else { acc }, acc_shift)
}

/// Computes the fixed-point reciprocal of `n`:
/// `round(2^(bitlen(n) + result_bits) / n)`, a value of about
/// `result_bits + 1` significant bits.
///
/// Panics when `n` is zero.
pub fn inverse(n: &Integer, result_bits: usize) -> Integer {
    if n.is_zero() {
        panic_divide_by_zero();
    }

    let mag = Integer::from(n.abs_ref());
    let len = bit_length(&mag);
    // one extra quotient bit so the final rounding is a true half-round
    let num = Integer::from(1) << (len + result_bits + 1) as u32;
    let q = num / &mag;
    let r = rounding_right_shift(&q, 1);

    match n.cmp0() {
        Ordering::Less => -r,
        _ => r,
    }
}
