/*!
Precision and accuracy operations.

These are the operations that change how many bits a value carries, or
that move a value onto the integer grid. Growing a precision pads the
mantissa with trailing zeros; shrinking either truncates or collapses
with the half-away rounding shift. Every operation here preserves the
represented value except the ones whose purpose is to move it
(`round`, `truncate`, `ceiling`, `floor`, `next_up`, `next_down`).

`ceiling` and `floor` honor the guard window: a value whose entire
fractional content sits inside the guard bits is already "an integer
with dust" and is returned unchanged rather than being stepped.
*/

use num_traits::Zero;
use rug::Integer;

use crate::number::{BigFloat, GUARD_BITS};
use crate::shift::rounding_right_shift;
use crate::util::bitmask;

impl BigFloat {
    /// Sets the stored precision to `precision` in-precision bits.
    /// Growing pads with trailing zeros; shrinking truncates without
    /// rounding. The represented value is preserved up to the truncated
    /// bits.
    pub fn set_precision(&self, precision: usize) -> Self {
        if self.is_strict_zero() {
            return self.clone();
        }
        let target = precision + GUARD_BITS;
        if target >= self.size {
            let d = (target - self.size) as u32;
            Self::raw(Integer::from(&self.mantissa << d), self.scale - d as isize)
        } else {
            let d = self.size - target;
            let mag = Integer::from(self.mantissa.abs_ref()) >> d as u32;
            let m = if self.mantissa.cmp0() == std::cmp::Ordering::Less {
                -mag
            } else {
                mag
            };
            Self::raw(m, self.scale + d as isize)
        }
    }

    /// Same as [`BigFloat::set_precision`] but shrinking rounds half
    /// away from zero. A rounding carry may leave one extra bit.
    pub fn set_precision_with_round(&self, precision: usize) -> Self {
        let target = precision as isize + GUARD_BITS as isize;
        self.adjust_size(target - self.size as isize)
    }

    /// Changes the bit budget by `delta` while preserving the value:
    /// equivalent to `set_precision_with_round(precision + delta)`.
    pub fn adjust_precision(&self, delta: isize) -> Self {
        self.adjust_size(delta)
    }

    /// Changes the fractional resolution by `delta` bits while
    /// preserving the value. Identical mechanics to
    /// [`BigFloat::adjust_precision`] except that a strict zero keeps
    /// its accuracy bookkeeping.
    pub fn adjust_accuracy(&self, delta: isize) -> Self {
        if self.is_strict_zero() {
            return Self::zero_with_accuracy(self.accuracy() + delta);
        }
        self.adjust_size(delta)
    }

    /// Shifts mantissa and scale together by `delta` bits (left when
    /// positive, rounding right when negative).
    fn adjust_size(&self, delta: isize) -> Self {
        if self.is_strict_zero() || delta == 0 {
            return self.clone();
        }
        if delta > 0 {
            Self::raw(
                Integer::from(&self.mantissa << delta as u32),
                self.scale - delta,
            )
        } else {
            let k = ((-delta) as usize).min(self.size);
            Self::raw(
                rounding_right_shift(&self.mantissa, k),
                self.scale + k as isize,
            )
        }
    }

    /// Removes the `bits` least-significant in-precision bits, rounding.
    pub fn truncate_by_and_round(&self, bits: usize) -> Self {
        self.adjust_size(-(bits as isize))
    }

    /// Rounds to the nearest integer, half away from zero. The result
    /// carries [`GUARD_BITS`] bits of (zero) fractional accuracy, so its
    /// scale is `-GUARD_BITS`.
    pub fn round(&self) -> Self {
        let n = self.to_integer();
        if n.is_zero() {
            return Self::zero_with_accuracy(GUARD_BITS as isize);
        }
        Self::raw(n << (2 * GUARD_BITS) as u32, -(GUARD_BITS as isize))
    }

    /// Drops the fractional part, toward zero. Bits with weight below
    /// `2^0` are cleared; scale is unchanged.
    pub fn truncate(&self) -> Self {
        let k = GUARD_BITS as isize - self.scale;
        if k <= 0 || self.is_strict_zero() {
            return self.clone();
        }
        if k as usize >= self.size {
            return BigFloat {
                mantissa: Integer::new(),
                scale: self.scale,
                size: 0,
            };
        }
        let mut mag = Integer::from(self.mantissa.abs_ref());
        mag >>= k as u32;
        mag <<= k as u32;
        let m = if self.mantissa.cmp0() == std::cmp::Ordering::Less {
            -mag
        } else {
            mag
        };
        Self::raw(m, self.scale)
    }

    /// Rounds toward positive infinity, except that a value whose
    /// fractional content lies entirely inside the guard window is
    /// returned unchanged.
    pub fn ceiling(&self) -> Self {
        let k = GUARD_BITS as isize - self.scale;
        if k <= 0 || self.is_strict_zero() {
            return self.clone();
        }
        let k = k as usize;
        let mag = Integer::from(self.mantissa.abs_ref());

        // fractional bits above the guard window
        let frac_hi = if k >= self.size {
            Integer::from(&mag >> GUARD_BITS as u32)
        } else {
            Integer::from(&mag & bitmask(k)) >> GUARD_BITS as u32
        };
        if frac_hi.is_zero() {
            return self.clone();
        }

        let mut cleared = if k >= self.size {
            Integer::new()
        } else {
            let mut c = mag;
            c >>= k as u32;
            c <<= k as u32;
            c
        };
        let negative = self.mantissa.cmp0() == std::cmp::Ordering::Less;
        if !negative {
            cleared += Integer::from(1) << k as u32;
        }
        let m = if negative { -cleared } else { cleared };
        Self::raw(m, self.scale)
    }

    /// Rounds toward negative infinity, with the same guard-window rule
    /// as [`BigFloat::ceiling`].
    pub fn floor(&self) -> Self {
        -(-self).ceiling()
    }

    /// True when the value sits on the integer grid: its ceiling and
    /// floor coincide under value equality.
    pub fn is_integer(&self) -> bool {
        self.ceiling() == self.floor()
    }

    /// The adjacent value one guard-bit unit up (toward positive
    /// infinity).
    pub fn next_up(&self) -> Self {
        Self::raw(Integer::from(&self.mantissa + 1u8), self.scale)
    }

    /// The adjacent value one guard-bit unit down (toward negative
    /// infinity).
    pub fn next_down(&self) -> Self {
        Self::raw(Integer::from(&self.mantissa - 1u8), self.scale)
    }

    /// The adjacent value one in-precision unit up: adds `2^GUARD_BITS`
    /// to the mantissa.
    pub fn next_up_in_precision_bit(&self) -> Self {
        Self::raw(
            Integer::from(&self.mantissa + (Integer::from(1) << GUARD_BITS as u32)),
            self.scale,
        )
    }
}
