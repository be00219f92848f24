/*!
Formatting.

`Display` renders the honest decimal view: at most
`round(precision * log10(2))` significant digits, so bits the value does
not actually carry never show up as convincing-looking garbage. Plain
notation is used in a fixed magnitude window, scientific notation
outside it. `Debug` shows the raw triple with the mantissa in hex so the
guard split is visible.
*/

use std::fmt;

use num_traits::Zero;
use rug::ops::Pow;
use rug::Integer;

use crate::number::{BigFloat, GUARD_BITS};
use crate::shift::rounding_right_shift;
use crate::util::bit_length;

const LOG10_2: f64 = std::f64::consts::LOG10_2;

impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (self.precision().max(1) as f64 * LOG10_2).round().max(1.0) as usize;
        let u = self.unscaled_value();
        f.write_str(&format_decimal(&u, self.scale, digits))
    }
}

impl fmt::Debug for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigFloat")
            .field("mantissa", &format_args!("{:#x}", self.mantissa))
            .field("scale", &self.scale)
            .field("size", &self.size)
            .finish()
    }
}

impl BigFloat {
    /// Renders without collapsing the guard region: every stored bit,
    /// guard dust included, contributes to the digits.
    pub fn to_string_with_guard(&self) -> String {
        let digits = (self.size.max(1) as f64 * LOG10_2).round().max(1.0) as usize;
        format_decimal(
            &self.mantissa,
            self.scale - GUARD_BITS as isize,
            digits,
        )
    }
}

/// Formats `n * 2^scale` with the given number of significant decimal
/// digits.
fn format_decimal(n: &Integer, scale: isize, digits: usize) -> String {
    if n.is_zero() {
        return "0".to_string();
    }

    let negative = n.cmp0() == std::cmp::Ordering::Less;
    let mag = Integer::from(n.abs_ref());

    // binary exponent -> decimal exponent estimate, corrected below
    let e2 = scale + bit_length(&mag) as isize - 1;
    let e10_est = (e2 as f64 * LOG10_2).floor() as isize;
    let p = digits as isize - 1 - e10_est;

    // dec = round(mag * 2^scale * 10^p), assembled from the positive
    // parts of each exponent
    let mut num = mag;
    let mut den = Integer::from(1);
    if p >= 0 {
        num *= Integer::from(10u8).pow(p as u32);
    } else {
        den *= Integer::from(10u8).pow((-p) as u32);
    }
    if scale >= 0 {
        num <<= scale as u32;
    } else {
        den <<= (-scale) as u32;
    }
    let mut dec = {
        let q = Integer::from(&num << 1u32) / den;
        rounding_right_shift(&q, 1)
    };

    // the exponent estimate can be off by one; trim the extra digit
    let mut p_eff = p;
    let mut ndigits = decimal_len(&dec);
    if ndigits > digits {
        let t = ndigits - digits;
        dec = rounding_right_shift_dec(&dec, t);
        p_eff -= t as isize;
        ndigits = decimal_len(&dec);
    }
    let e10 = ndigits as isize - 1 - p_eff;

    let body = dec.to_string();
    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if e10 >= ndigits as isize - 1 && e10 <= 20 {
        // integer with trailing zeros
        out.push_str(&body);
        for _ in 0..(e10 - (ndigits as isize - 1)) {
            out.push('0');
        }
    } else if e10 >= 0 && e10 < ndigits as isize - 1 {
        let split = (e10 + 1) as usize;
        out.push_str(&body[..split]);
        let frac = body[split..].trim_end_matches('0');
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
    } else if e10 < 0 && e10 >= -5 {
        out.push_str("0.");
        for _ in 0..(-e10 - 1) {
            out.push('0');
        }
        out.push_str(body.trim_end_matches('0'));
    } else {
        // scientific
        out.push_str(&body[..1]);
        let frac = body[1..].trim_end_matches('0');
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
        out.push('e');
        if e10 >= 0 {
            out.push('+');
        }
        out.push_str(&e10.to_string());
    }
    out
}

/// Rounds away the low `k` decimal digits, half away from zero.
fn rounding_right_shift_dec(n: &Integer, k: usize) -> Integer {
    let den = Integer::from(10u8).pow(k as u32);
    let doubled = Integer::from(n << 1u32) / den;
    rounding_right_shift(&doubled, 1)
}

fn decimal_len(n: &Integer) -> usize {
    n.to_string().trim_start_matches('-').len()
}
