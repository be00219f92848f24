/*!
Construction from and conversion to primitive types.

Fixed-width integers enter with their full type width recorded as
precision (trailing-zero padding, scale compensated). Hardware floats
enter through their raw IEEE 754 fields, subnormals included, with 24
extra bits of padding so follow-up arithmetic has room to work.

Conversions out collapse the guard bits with the half-away rounding
shift; the float direction synthesizes IEEE 754 bit patterns directly
(ties-to-even, carry into the exponent, graded underflow) and
round-trips every finite input bit for bit.
*/

use num_traits::Zero;
use rug::Integer;

use crate::error::{panic_non_finite, Error};
use crate::number::{BigFloat, GUARD_BITS};
use crate::shift::{rounding_right_shift, shift_right_ties_even};
use crate::util::bit_length;

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigFloat {
            fn from(value: $t) -> Self {
                BigFloat::from_int_with_precision(value, <$t>::BITS as usize - 1)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigFloat {
            fn from(value: $t) -> Self {
                BigFloat::from_int_with_precision(value, <$t>::BITS as usize)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128);
impl_from_unsigned!(u8, u16, u32, u64, u128);

impl From<Integer> for BigFloat {
    fn from(value: Integer) -> Self {
        BigFloat::new(value, 0)
    }
}

impl From<&Integer> for BigFloat {
    fn from(value: &Integer) -> Self {
        BigFloat::new(value.clone(), 0)
    }
}

impl From<f64> for BigFloat {
    fn from(value: f64) -> Self {
        BigFloat::from_f64(value)
    }
}

impl From<f32> for BigFloat {
    fn from(value: f32) -> Self {
        BigFloat::from_f32(value)
    }
}

impl BigFloat {
    /// Integer construction with an explicit stored precision: the
    /// mantissa is padded with trailing zeros up to `precision` bits and
    /// the scale compensates, so the value is unchanged but the padding
    /// is visible to precision-driven operations.
    pub fn from_int_with_precision(value: impl Into<Integer>, precision: usize) -> Self {
        let v: Integer = value.into();
        if v.is_zero() {
            return Self::zero();
        }
        let pad = precision.saturating_sub(bit_length(&v));
        Self::raw(v << (GUARD_BITS + pad) as u32, -(pad as isize))
    }

    /// Constructs from a finite `f64` with the default 24 bits of
    /// trailing-zero padding. Panics on NaN or an infinity.
    pub fn from_f64(value: f64) -> Self {
        Self::from_f64_with_precision(value, 24)
    }

    /// Constructs from a finite `f64`, padding the 53-bit significand
    /// with `added_precision` trailing zero bits.
    /// Panics on NaN or an infinity.
    pub fn from_f64_with_precision(value: f64, added_precision: usize) -> Self {
        if !value.is_finite() {
            panic_non_finite();
        }
        if value == 0.0 {
            return Self::zero();
        }

        let bits = value.to_bits();
        let negative = bits >> 63 != 0;
        let raw_exp = (bits >> 52) & 0x7ff;
        let frac = bits & ((1u64 << 52) - 1);

        // subnormals have no implicit bit and a pinned exponent
        let (mant, exp) = if raw_exp == 0 {
            (frac, -1074isize)
        } else {
            (frac | (1u64 << 52), raw_exp as isize - 1075)
        };

        let mut m = Integer::from(mant);
        if negative {
            m = -m;
        }
        Self::raw(
            m << (GUARD_BITS + added_precision) as u32,
            exp - added_precision as isize,
        )
    }

    /// Constructs from a finite `f32`; see [`BigFloat::from_f64`].
    pub fn from_f32(value: f32) -> Self {
        Self::from_f32_with_precision(value, 24)
    }

    /// Constructs from a finite `f32`, padding the 24-bit significand
    /// with `added_precision` trailing zero bits.
    /// Panics on NaN or an infinity.
    pub fn from_f32_with_precision(value: f32, added_precision: usize) -> Self {
        if !value.is_finite() {
            panic_non_finite();
        }
        if value == 0.0 {
            return Self::zero();
        }

        let bits = value.to_bits();
        let negative = bits >> 31 != 0;
        let raw_exp = (bits >> 23) & 0xff;
        let frac = bits & ((1u32 << 23) - 1);

        let (mant, exp) = if raw_exp == 0 {
            (frac, -149isize)
        } else {
            (frac | (1u32 << 23), raw_exp as isize - 150)
        };

        let mut m = Integer::from(mant);
        if negative {
            m = -m;
        }
        Self::raw(
            m << (GUARD_BITS + added_precision) as u32,
            exp - added_precision as isize,
        )
    }

    /// Rounds to the nearest integer, half away from zero: guard bits
    /// are collapsed first, then the scale is applied with the same
    /// rounding.
    pub fn to_integer(&self) -> Integer {
        let u = self.unscaled_value();
        if self.scale >= 0 {
            u << self.scale as u32
        } else {
            rounding_right_shift(&u, (-self.scale) as usize)
        }
    }

    /// Converts to `f64`, rounding ties to even. Values beyond the
    /// binary-exponent range of `f64` become signed infinities; values
    /// below the subnormal range become signed zero.
    pub fn to_f64(&self) -> f64 {
        let (sign, bits) = self.ieee_bits(53, 1023);
        let word = ((sign as u64) << 63) | bits;
        f64::from_bits(word)
    }

    /// Converts to `f32`; see [`BigFloat::to_f64`].
    pub fn to_f32(&self) -> f32 {
        let (sign, bits) = self.ieee_bits(24, 127);
        let word = ((sign as u32) << 31) | bits as u32;
        f32::from_bits(word)
    }

    /// Assembles the exponent+significand field of an IEEE 754 binary
    /// interchange format with `sig_bits` significand bits (implicit bit
    /// included) and the given exponent bias. Returns `(sign, field)`.
    fn ieee_bits(&self, sig_bits: usize, bias: isize) -> (bool, u64) {
        let sign = self.mantissa.cmp0() == std::cmp::Ordering::Less;
        if self.is_strict_zero() {
            return (false, 0);
        }

        let mag = Integer::from(self.mantissa.abs_ref());
        let max_biased = (bias * 2 + 1) as u64; // all-ones exponent field

        // top sig_bits of the mantissa, ties to even
        let mut exp = self.binary_exponent();
        let mut sig = if self.size >= sig_bits {
            let (rounded, carry) = shift_right_ties_even(&mag, self.size - sig_bits);
            if carry {
                exp += 1;
                rounded >> 1u32
            } else {
                rounded
            }
        } else {
            Integer::from(&mag << (sig_bits - self.size) as u32)
        };

        let biased = exp + bias;
        if biased >= max_biased as isize {
            // overflow: signed infinity
            return (sign, max_biased << (sig_bits - 1));
        }

        if biased <= 0 {
            // graded underflow: re-round against the subnormal grid,
            // 2^(1 - bias - (sig_bits - 1))
            let shift = self.scale - GUARD_BITS as isize + (bias - 1) + (sig_bits as isize - 1);
            let sub = if shift >= 0 {
                mag << shift as u32
            } else {
                shift_right_ties_even(&mag, (-shift) as usize).0
            };
            if sub.is_zero() {
                return (sign, 0);
            }
            // a carry up to 2^(sig_bits-1) lands on the smallest normal
            // and sets the exponent field on its own
            return (sign, sub.to_u64().unwrap());
        }

        // normal: drop the implicit leading bit
        sig.keep_bits_mut(sig_bits as u32 - 1);
        (sign, ((biased as u64) << (sig_bits - 1)) | sig.to_u64().unwrap())
    }

    /// True when the binary exponent is inside `f64`'s representable
    /// range (subnormals included).
    pub fn fits_in_f64(&self) -> bool {
        self.is_zero() || (-1074..=1023).contains(&self.binary_exponent())
    }

    /// True when the binary exponent is inside `f32`'s representable
    /// range (subnormals included).
    pub fn fits_in_f32(&self) -> bool {
        self.is_zero() || (-149..=127).contains(&self.binary_exponent())
    }
}

impl From<&BigFloat> for f64 {
    fn from(value: &BigFloat) -> Self {
        value.to_f64()
    }
}

impl From<&BigFloat> for f32 {
    fn from(value: &BigFloat) -> Self {
        value.to_f32()
    }
}

impl From<&BigFloat> for Integer {
    fn from(value: &BigFloat) -> Self {
        value.to_integer()
    }
}

macro_rules! impl_try_into_int {
    ($(($t:ty, $to:ident)),*) => {$(
        impl TryFrom<&BigFloat> for $t {
            type Error = Error;

            fn try_from(value: &BigFloat) -> Result<Self, Error> {
                value.to_integer().$to().ok_or(Error::IntegerOverflow)
            }
        }
    )*};
}

impl_try_into_int!(
    (i8, to_i8),
    (i16, to_i16),
    (i32, to_i32),
    (i64, to_i64),
    (i128, to_i128),
    (u8, to_u8),
    (u16, to_u16),
    (u32, to_u32),
    (u64, to_u64),
    (u128, to_u128)
);
