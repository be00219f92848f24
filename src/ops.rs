/*!
Arithmetic operators.

Every binary operator aligns scales first, then works on mantissas, then
picks an output size reflecting how much precision is legitimately
present. Alignment always moves the finer operand up to the coarser
scale with the half-away rounding shift: a sum or difference cannot be
known more finely than its coarser input.

Shifts are the exception: `<<` and `>>` touch only the scale, never the
mantissa, so they are exact and precision-free.
*/

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use num_traits::Zero;
use rug::Integer;

use crate::error::panic_divide_by_zero;
use crate::number::{BigFloat, GUARD_BITS};
use crate::shift::rounding_right_shift;
use crate::util::bit_length;

impl BigFloat {
    /// Shared core of `+` and `-`.
    fn add_signed(&self, other: &Self, negate_other: bool) -> Self {
        if self.is_strict_zero() {
            let r = other.clone();
            return if negate_other { -r } else { r };
        }
        if other.is_strict_zero() {
            return self.clone();
        }

        let delta = self.scale - other.scale;
        if delta >= 0 {
            let d = delta as usize;
            if d > other.size {
                // other is entirely below the rounding floor of self
                return self.clone();
            }
            let shifted = rounding_right_shift(&other.mantissa, d);
            let m = if negate_other {
                Integer::from(&self.mantissa - shifted)
            } else {
                Integer::from(&self.mantissa + shifted)
            };
            Self::raw(m, self.scale)
        } else {
            let d = (-delta) as usize;
            if d > self.size {
                let r = other.clone();
                return if negate_other { -r } else { r };
            }
            let shifted = rounding_right_shift(&self.mantissa, d);
            let m = if negate_other {
                shifted - &other.mantissa
            } else {
                shifted + &other.mantissa
            };
            Self::raw(m, other.scale)
        }
    }

    fn mul_impl(&self, other: &Self) -> Self {
        if self.is_strict_zero() || other.is_strict_zero() {
            // keep the tighter (greater) accuracy of the two inputs
            return Self::zero_with_accuracy(self.accuracy().max(other.accuracy()));
        }

        let m = Integer::from(&self.mantissa * &other.mantissa);
        let target = self.size.min(other.size);
        let k = bit_length(&m).saturating_sub(target);
        let m = if k > 0 { rounding_right_shift(&m, k) } else { m };
        Self::raw(
            m,
            self.scale + other.scale - GUARD_BITS as isize + k as isize,
        )
    }

    fn div_impl(&self, other: &Self) -> Self {
        if other.is_strict_zero() {
            panic_divide_by_zero();
        }
        if self.is_strict_zero() {
            return Self::zero_with_accuracy(self.accuracy().max(other.accuracy()));
        }

        // land the quotient in a min-precision window, one bit wide of
        // the target so the final rounding is honest
        let target = self.size.min(other.size);
        let shift = (target + 1 + other.size).saturating_sub(self.size);
        let num = Integer::from(&self.mantissa << shift as u32);
        let q = num / &other.mantissa;

        let k = bit_length(&q).saturating_sub(target);
        let q = if k > 0 { rounding_right_shift(&q, k) } else { q };
        Self::raw(
            q,
            self.scale - other.scale - shift as isize + GUARD_BITS as isize + k as isize,
        )
    }

    /// Truncated remainder: `self - trunc(self/other) * other`, with the
    /// sign of `self`.
    fn rem_impl(&self, other: &Self) -> Self {
        if other.is_strict_zero() {
            panic_divide_by_zero();
        }
        if self.is_strict_zero() {
            return self.clone();
        }
        // two binary orders below the divisor: the quotient truncates
        // to zero and the remainder is the dividend itself
        if self.binary_exponent() < other.binary_exponent() - 1 {
            return self.clone();
        }

        let common = self.scale.min(other.scale);
        let da = (self.scale - common) as usize;
        let db = (other.scale - common) as usize;

        let b_mag = Integer::from(other.mantissa.abs_ref()) << db as u32;
        let a_mag = Integer::from(self.mantissa.abs_ref());
        let negative = self.mantissa.cmp0() == Ordering::Less;

        let r_mag = if b_mag.is_power_of_two() {
            // mask off the bits below the divisor
            let j = bit_length(&b_mag) - 1;
            if da >= j {
                Integer::new()
            } else {
                Integer::from(a_mag.keep_bits_ref((j - da) as u32)) << da as u32
            }
        } else if da > other.size + 64 {
            // the aligned dividend would be enormous; fold the scale
            // shift in with modular exponentiation instead
            let two_da = Integer::from(2)
                .pow_mod(&Integer::from(da), &b_mag)
                .unwrap();
            (a_mag % &b_mag * two_da) % &b_mag
        } else {
            (a_mag << da as u32) % &b_mag
        };

        let m = if negative { -r_mag } else { r_mag };
        Self::raw(m, common)
    }

    /// Remainder with the sign convention of the divisor.
    pub fn modulo(&self, other: &Self) -> Self {
        let r = self.rem_impl(other);
        if !r.is_strict_zero() && r.mantissa.cmp0() != other.mantissa.cmp0() {
            r + other.clone()
        } else {
            r
        }
    }

    /// `modulo` without the panic: divide-by-zero comes back as an error.
    pub fn checked_modulo(&self, other: &Self) -> Result<Self, crate::error::Error> {
        if other.is_strict_zero() {
            Err(crate::error::Error::DivideByZero)
        } else {
            Ok(self.modulo(other))
        }
    }

    /// `/` without the panic: divide-by-zero comes back as an error.
    pub fn checked_div(&self, other: &Self) -> Result<Self, crate::error::Error> {
        if other.is_strict_zero() {
            Err(crate::error::Error::DivideByZero)
        } else {
            Ok(self.div_impl(other))
        }
    }
}

impl Neg for &BigFloat {
    type Output = BigFloat;

    fn neg(self) -> BigFloat {
        BigFloat {
            mantissa: Integer::from(-&self.mantissa),
            scale: self.scale,
            size: self.size,
        }
    }
}

impl Neg for BigFloat {
    type Output = BigFloat;

    fn neg(self) -> BigFloat {
        BigFloat {
            mantissa: -self.mantissa,
            scale: self.scale,
            size: self.size,
        }
    }
}

impl Add for &BigFloat {
    type Output = BigFloat;

    fn add(self, rhs: Self) -> BigFloat {
        self.add_signed(rhs, false)
    }
}

impl Sub for &BigFloat {
    type Output = BigFloat;

    fn sub(self, rhs: Self) -> BigFloat {
        self.add_signed(rhs, true)
    }
}

impl Mul for &BigFloat {
    type Output = BigFloat;

    fn mul(self, rhs: Self) -> BigFloat {
        self.mul_impl(rhs)
    }
}

impl Div for &BigFloat {
    type Output = BigFloat;

    fn div(self, rhs: Self) -> BigFloat {
        self.div_impl(rhs)
    }
}

impl Rem for &BigFloat {
    type Output = BigFloat;

    fn rem(self, rhs: Self) -> BigFloat {
        self.rem_impl(rhs)
    }
}

/// Forwards the owned-operand operator forms to the borrowed core.
macro_rules! forward_binop {
    ($($imp:ident, $method:ident);*) => {$(
        impl $imp for BigFloat {
            type Output = BigFloat;

            fn $method(self, rhs: BigFloat) -> BigFloat {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigFloat> for BigFloat {
            type Output = BigFloat;

            fn $method(self, rhs: &BigFloat) -> BigFloat {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigFloat> for &BigFloat {
            type Output = BigFloat;

            fn $method(self, rhs: BigFloat) -> BigFloat {
                self.$method(&rhs)
            }
        }
    )*};
}

forward_binop!(Add, add; Sub, sub; Mul, mul; Div, div; Rem, rem);

macro_rules! forward_assign {
    ($($imp:ident, $method:ident, $op:ident);*) => {$(
        impl $imp for BigFloat {
            fn $method(&mut self, rhs: BigFloat) {
                *self = (&*self).$op(&rhs);
            }
        }

        impl $imp<&BigFloat> for BigFloat {
            fn $method(&mut self, rhs: &BigFloat) {
                *self = (&*self).$op(rhs);
            }
        }
    )*};
}

forward_assign!(
    AddAssign, add_assign, add;
    SubAssign, sub_assign, sub;
    MulAssign, mul_assign, mul;
    DivAssign, div_assign, div;
    RemAssign, rem_assign, rem
);

impl Shl<u32> for &BigFloat {
    type Output = BigFloat;

    // a scale operation, not a precision operation
    fn shl(self, rhs: u32) -> BigFloat {
        BigFloat {
            mantissa: self.mantissa.clone(),
            scale: self.scale + rhs as isize,
            size: self.size,
        }
    }
}

impl Shr<u32> for &BigFloat {
    type Output = BigFloat;

    fn shr(self, rhs: u32) -> BigFloat {
        BigFloat {
            mantissa: self.mantissa.clone(),
            scale: self.scale - rhs as isize,
            size: self.size,
        }
    }
}

impl Shl<u32> for BigFloat {
    type Output = BigFloat;

    fn shl(mut self, rhs: u32) -> BigFloat {
        self.scale += rhs as isize;
        self
    }
}

impl Shr<u32> for BigFloat {
    type Output = BigFloat;

    fn shr(mut self, rhs: u32) -> BigFloat {
        self.scale -= rhs as isize;
        self
    }
}

impl ShlAssign<u32> for BigFloat {
    fn shl_assign(&mut self, rhs: u32) {
        self.scale += rhs as isize;
    }
}

impl ShrAssign<u32> for BigFloat {
    fn shr_assign(&mut self, rhs: u32) {
        self.scale -= rhs as isize;
    }
}
