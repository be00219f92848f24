/*!
Rounding right-shift primitives over [`rug::Integer`].

These are the only primitives used when guard bits are collapsed anywhere
in the crate. They round half-away-from-zero and preserve sign: a negative
number on a half rounds toward the more negative magnitude. A separate
ties-to-even shift exists solely for synthesizing IEEE 754 bit patterns;
it must never be used on the guard boundary.
*/

use std::cmp::Ordering;

use num_traits::Zero;
use rug::Integer;

use crate::util::bit_length;

/// Shifts `n` right by `k` bits, rounding half-away-from-zero.
/// Identity for `k == 0`.
pub fn rounding_right_shift(n: &Integer, k: usize) -> Integer {
    if k == 0 {
        return n.clone();
    }

    let mut mag = Integer::from(n.abs_ref());
    mag += Integer::from(1) << (k as u32 - 1);
    mag >>= k as u32;

    match n.cmp0() {
        Ordering::Less => -mag,
        _ => mag,
    }
}

/// Same as [`rounding_right_shift`], but also reports whether rounding
/// grew the magnitude past the bit length of the plain `|n| >> k`.
/// Callers use the carry to keep scale counters consistent.
pub fn rounding_right_shift_with_carry(n: &Integer, k: usize) -> (Integer, bool) {
    if k == 0 {
        return (n.clone(), false);
    }

    let truncated_len = bit_length(n).saturating_sub(k);
    let rounded = rounding_right_shift(n, k);
    let carry = bit_length(&rounded) > truncated_len;
    (rounded, carry)
}

/// Reduces `|n|` to `target_bits` significant bits by right-shifting with
/// rounding. Values already at or below the target width pass through
/// unchanged. A carry out of the rounding may leave `target_bits + 1`
/// bits; callers that need an exact width re-check the result length.
pub fn truncate_to_and_round(n: &Integer, target_bits: usize) -> Integer {
    let len = bit_length(n);
    if len <= target_bits {
        n.clone()
    } else {
        rounding_right_shift(n, len - target_bits)
    }
}

/// Shifts `n` right by `k` bits, rounding to nearest with ties to even.
/// Returns the shifted value and whether the rounding carried into a new
/// top bit. Used only when assembling IEEE 754 significands.
pub fn shift_right_ties_even(n: &Integer, k: usize) -> (Integer, bool) {
    if k == 0 {
        return (n.clone(), false);
    }

    let mag = Integer::from(n.abs_ref());
    let truncated_len = bit_length(&mag).saturating_sub(k);

    let mut q = Integer::from(&mag >> (k as u32));
    let half = mag.get_bit(k as u32 - 1);
    let sticky = if k >= 2 {
        !Integer::from(mag.keep_bits_ref(k as u32 - 1)).is_zero()
    } else {
        false
    };

    if half && (sticky || q.is_odd()) {
        q += 1;
    }

    let carry = bit_length(&q) > truncated_len;
    match n.cmp0() {
        Ordering::Less => (-q, carry),
        _ => (q, carry),
    }
}
