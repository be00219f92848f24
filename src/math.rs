/*!
Mathematical functions over [`BigFloat`].

The integer kernels in [`crate::intops`] do the heavy lifting; this
module handles exponent normalization (evenness for `sqrt`,
divisibility for `nth_root`), the scale bookkeeping around
[`crate::intops::pow_most_significant_bits`], and the π-based range
reduction for the trigonometric functions.

Fatal surfaces (`sqrt` of a negative, `log2` of a non-positive,
`inverse` of zero) panic from the plain methods and return
[`Error`](crate::error::Error) from the `checked_*` forms.
*/

use rug::Integer;

use crate::consts::{get_constant, Constant};
use crate::error::{panic_divide_by_zero, panic_negative_root, Error};
use crate::intops;
use crate::number::{BigFloat, GUARD_BITS};

impl BigFloat {
    /// The reciprocal `1 / self` at roughly the input's precision.
    /// Panics when `self` is strictly zero.
    pub fn inverse(&self) -> Self {
        match self.checked_inverse() {
            Ok(v) => v,
            Err(_) => panic_divide_by_zero(),
        }
    }

    /// The reciprocal, with divide-by-zero as an error.
    pub fn checked_inverse(&self) -> Result<Self, Error> {
        if self.is_strict_zero() {
            return Err(Error::DivideByZero);
        }
        let inv = intops::inverse(&self.mantissa, self.size);
        // inv ~= 2^(2*size) / mantissa, so
        // 1/v = inv * 2^(-2*size + GUARD_BITS - scale)
        Ok(Self::raw(
            inv,
            2 * GUARD_BITS as isize - self.scale - 2 * self.size as isize,
        ))
    }

    /// Integer power. `pow(v, 0)` is one at the input's accuracy;
    /// a negative exponent inverts the positive power. Panics when a
    /// strict zero is raised to a negative exponent.
    pub fn pow(&self, exp: i32) -> Self {
        if exp == 0 {
            return Self::one_with_accuracy(self.accuracy().max(0) as usize);
        }
        if self.is_strict_zero() {
            if exp < 0 {
                panic_divide_by_zero();
            }
            return self.clone();
        }
        if exp < 0 {
            // -(i32::MIN) fits once widened
            let e = (-(exp as i64)) as u32;
            return self.pow_unsigned(e).inverse();
        }
        self.pow_unsigned(exp as u32)
    }

    fn pow_unsigned(&self, exp: u32) -> Self {
        if exp == 1 {
            return self.clone();
        }
        let (m, sh) = intops::pow_most_significant_bits(&self.mantissa, exp, self.size, false);
        // (m_in * 2^(scale-G))^e = m * 2^(sh + e*(scale-G)); re-attach
        // the guard offset of the result representation
        Self::raw(
            m,
            sh + exp as isize * (self.scale - GUARD_BITS as isize) + GUARD_BITS as isize,
        )
    }

    /// The square root at roughly the input's precision.
    /// Panics on a negative input.
    pub fn sqrt(&self) -> Self {
        match self.checked_sqrt() {
            Ok(v) => v,
            Err(_) => panic_negative_root(),
        }
    }

    /// The square root, with a negative input as an error.
    pub fn checked_sqrt(&self) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::NegativeRoot);
        }
        if self.is_zero() {
            return Ok(Self::zero_with_accuracy(self.accuracy() / 2));
        }

        let exp = self.scale - GUARD_BITS as isize;
        // pad so the root keeps the input's size and the remaining
        // exponent is even
        let mut pad = self.size;
        if (exp - pad as isize) % 2 != 0 {
            pad += 1;
        }

        let mag = Integer::from(self.mantissa.abs_ref()) << pad as u32;
        let r = intops::isqrt(&mag);
        Ok(Self::raw(
            r,
            (exp - pad as isize) / 2 + GUARD_BITS as isize,
        ))
    }

    /// The `k`-th root. Negative inputs are allowed for odd `k`;
    /// an even-order root of a negative value panics.
    pub fn nth_root(&self, k: u32) -> Self {
        match self.checked_nth_root(k) {
            Ok(v) => v,
            Err(_) => panic_negative_root(),
        }
    }

    /// The `k`-th root, with the even-root-of-negative case as an error.
    pub fn checked_nth_root(&self, k: u32) -> Result<Self, Error> {
        assert!(k >= 1, "root order must be at least 1");
        if k == 1 {
            return Ok(self.clone());
        }
        if k == 2 {
            return self.checked_sqrt();
        }
        if self.is_negative() {
            return if k % 2 == 1 {
                Ok(-(-self).checked_nth_root(k)?)
            } else {
                Err(Error::NegativeRoot)
            };
        }
        if self.is_zero() {
            return Ok(Self::zero_with_accuracy(self.accuracy() / k as isize));
        }

        let exp = self.scale - GUARD_BITS as isize;
        // pad so the root keeps the input's size and the remaining
        // exponent is divisible by k
        let base_pad = (k as usize - 1) * self.size;
        let pad = base_pad + (exp - base_pad as isize).rem_euclid(k as isize) as usize;

        let mag = Integer::from(self.mantissa.abs_ref()) << pad as u32;
        let r = intops::nth_root(&mag, k);
        Ok(Self::raw(
            r,
            (exp - pad as isize) / k as isize + GUARD_BITS as isize,
        ))
    }

    /// The cube root.
    pub fn cube_root(&self) -> Self {
        self.nth_root(3)
    }

    /// Base-2 logarithm as a hardware double: the binary exponent plus
    /// `log2` of the top bits normalized into `[1, 2)`.
    /// Panics on a non-positive input.
    pub fn log2(&self) -> f64 {
        match self.checked_log2() {
            Ok(v) => v,
            Err(_) => panic_negative_root(),
        }
    }

    /// Base-2 logarithm, with a non-positive input as an error.
    pub fn checked_log2(&self) -> Result<f64, Error> {
        if self.sign() <= 0 {
            return Err(Error::NegativeRoot);
        }

        let mag = Integer::from(self.mantissa.abs_ref());
        let top = if self.size > 53 {
            crate::shift::rounding_right_shift(&mag, self.size - 53)
        } else {
            mag << (53 - self.size) as u32
        };
        // log2(m) == (size - 53) + log2(top); fold in the scale
        Ok((self.size as f64 - 53.0)
            + top.to_f64().log2()
            + (self.scale - GUARD_BITS as isize) as f64)
    }

    /// Sine, with π-based range reduction at the input's precision.
    pub fn sin(&self) -> Self {
        if self.is_zero() {
            return Self::zero_with_accuracy(self.accuracy());
        }
        let (x, quadrant) = self.trig_reduce();
        let (s, c) = sin_cos_reduced(&x);
        let r = match quadrant {
            0 => s,
            1 => c,
            2 => -s,
            _ => -c,
        };
        self.fit_trig_output(r)
    }

    /// Cosine, with π-based range reduction at the input's precision.
    pub fn cos(&self) -> Self {
        if self.is_zero() {
            return Self::one_with_accuracy(self.accuracy().max(0) as usize);
        }
        let (x, quadrant) = self.trig_reduce();
        let (s, c) = sin_cos_reduced(&x);
        let r = match quadrant {
            0 => c,
            1 => -s,
            2 => -c,
            _ => s,
        };
        self.fit_trig_output(r)
    }

    /// Tangent: `sin / cos` from a single range reduction.
    pub fn tan(&self) -> Self {
        if self.is_zero() {
            return Self::zero_with_accuracy(self.accuracy());
        }
        let (x, quadrant) = self.trig_reduce();
        let (s, c) = sin_cos_reduced(&x);
        let r = match quadrant {
            0 | 2 => &s / &c,
            _ => -(&c / &s),
        };
        self.fit_trig_output(r)
    }

    /// Reduces the argument by the nearest multiple of π/2.
    /// Returns the reduced angle (|x| <= π/4, up to rounding) and the
    /// multiple's residue modulo 4.
    fn trig_reduce(&self) -> (Self, u32) {
        // enough π bits to survive cancellation against a large argument
        let bits = self.size + self.binary_exponent().max(0) as usize + 32;
        let pi = get_constant(Constant::Pi, bits);
        let half_pi = &pi >> 1;

        let q = (self / &half_pi).to_integer();
        let quadrant = {
            let r = (Integer::from(&q % 4u8) + 4u8) % 4u8;
            r.to_u32().unwrap()
        };
        // pad the argument so the cancellation against q*π/2 happens at
        // the product's finer scale instead of the argument's
        let wide = self.adjust_accuracy(self.binary_exponent().max(0) + 64);
        let q_wide = Self::from_int_with_precision(q, bits);
        let x = &wide - &(q_wide * half_pi);
        (x, quadrant)
    }

    /// Trims a trig result back to the input's width.
    fn fit_trig_output(&self, r: Self) -> Self {
        let p = self.precision().max(1) as usize;
        r.set_precision_with_round(p)
    }
}

/// Sine and cosine of a reduced angle (|x| <= π/4): halve into the
/// Taylor regime, run both series, then double back up with the
/// double-angle identities.
fn sin_cos_reduced(x: &BigFloat) -> (BigFloat, BigFloat) {
    let work = x.size() + 32;

    // halve until |x| < 2^-8; halving only touches the scale
    let halvings = (x.binary_exponent() + 9).max(0) as u32;
    let small = x >> halvings;

    let (mut s, mut c) = sin_cos_taylor(&small, work);

    let two = BigFloat::from_int_with_precision(2, work);
    let one = BigFloat::one_with_accuracy(work);
    for _ in 0..halvings {
        // sin 2t = 2 sin t cos t, cos 2t = 1 - 2 sin^2 t
        let s2 = &two * &(&s * &c);
        let c2 = &one - &(&two * &(&s * &s));
        s = s2;
        c = c2;
    }
    (s, c)
}

/// Taylor kernels for very small angles.
fn sin_cos_taylor(x: &BigFloat, work: usize) -> (BigFloat, BigFloat) {
    let x2 = x * x;
    let floor = -(work as isize) - 8;

    // sin: x - x^3/3! + x^5/5! - ...
    let mut sin = x.clone();
    let mut term = x.clone();
    let mut k: u32 = 1;
    loop {
        let den = BigFloat::from_int_with_precision((k + 1) * (k + 2), work);
        term = -(&term * &x2) / den;
        if term.is_strict_zero() || term.binary_exponent() < floor {
            break;
        }
        sin += &term;
        k += 2;
    }

    // cos: 1 - x^2/2! + x^4/4! - ...
    let mut cos = BigFloat::one_with_accuracy(work);
    let mut term = BigFloat::one_with_accuracy(work);
    let mut k: u32 = 0;
    loop {
        let den = BigFloat::from_int_with_precision((k + 1) * (k + 2), work);
        term = -(&term * &x2) / den;
        if term.is_strict_zero() || term.binary_exponent() < floor {
            break;
        }
        cos += &term;
        k += 2;
    }

    (sin, cos)
}
