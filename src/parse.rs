/*!
Decimal parsing.

The grammar is the usual decimal one: optional sign, digits with an
optional point, optional `e`/`E` exponent. The stored binary precision
tracks the number of significant digits supplied (about 3.32 bits per
digit) plus the guard bits, so `"2.50"` parses wider than `"2.5"` while
denoting the same value.
*/

use std::str::FromStr;

use num_traits::Zero;
use rug::ops::Pow;
use rug::Integer;

use crate::error::Error;
use crate::number::{BigFloat, GUARD_BITS};
use crate::shift::rounding_right_shift;
use crate::util::bit_length;

impl FromStr for BigFloat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let mut digits = Integer::new();
        let mut ndigits = 0usize;
        let mut frac_digits: Option<usize> = None;
        let mut pos = 0usize;
        let bytes = rest.as_bytes();

        while pos < bytes.len() {
            match bytes[pos] {
                b'0'..=b'9' => {
                    digits *= 10u8;
                    digits += bytes[pos] - b'0';
                    ndigits += 1;
                    if let Some(f) = frac_digits.as_mut() {
                        *f += 1;
                    }
                }
                b'.' if frac_digits.is_none() => frac_digits = Some(0),
                b'e' | b'E' => break,
                _ => return Err(Error::ParseFailure),
            }
            pos += 1;
        }
        if ndigits == 0 {
            return Err(Error::ParseFailure);
        }

        let mut dec_exp = -(frac_digits.unwrap_or(0) as isize);
        if pos < bytes.len() {
            // exponent part
            let e: isize = rest[pos + 1..].parse().map_err(|_| Error::ParseFailure)?;
            dec_exp += e;
        }

        if digits.is_zero() {
            let accuracy = (frac_digits.unwrap_or(0) as f64 * LOG2_10).ceil() as isize;
            return Ok(Self::zero_with_accuracy(accuracy));
        }
        if negative {
            digits = -digits;
        }

        if dec_exp >= 0 {
            // exact integer
            let n = digits * Integer::from(10u8).pow(dec_exp as u32);
            Ok(Self::new(n, 0))
        } else {
            // digits / 10^d, rounded into a digit-count-sized window
            // with one extra quotient bit for the final half-round
            let denom = Integer::from(10u8).pow((-dec_exp) as u32);
            let shift = GUARD_BITS + bit_length(&denom);
            let num = digits << (shift + 1) as u32;
            let q = num / denom;
            Ok(Self::raw(
                rounding_right_shift(&q, 1),
                GUARD_BITS as isize - shift as isize,
            ))
        }
    }
}

const LOG2_10: f64 = 3.321928094887362;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_exactly() {
        let v: BigFloat = "42".parse().unwrap();
        assert_eq!(v, BigFloat::from(42i32));

        let v: BigFloat = "-1200".parse().unwrap();
        assert_eq!(v, BigFloat::from(-1200i32));

        let v: BigFloat = "12e3".parse().unwrap();
        assert_eq!(v, BigFloat::from(12000i32));
    }

    #[test]
    fn parses_dyadic_fractions_exactly() {
        let v: BigFloat = "2.5".parse().unwrap();
        assert_eq!(v, BigFloat::new(Integer::from(5), -1));

        let v: BigFloat = "0.00390625".parse().unwrap();
        assert_eq!(v, BigFloat::new(Integer::from(1), -8));

        let v: BigFloat = "-0.5".parse().unwrap();
        assert_eq!(v, BigFloat::new(Integer::from(-1), -1));
    }

    #[test]
    fn wider_strings_store_wider_precision() {
        let narrow: BigFloat = "2.5".parse().unwrap();
        let wide: BigFloat = "2.5000000000".parse().unwrap();
        assert_eq!(narrow, wide);
        assert!(wide.precision() > narrow.precision());
    }

    #[test]
    fn rejects_junk() {
        for s in ["", "abc", "1.2.3", "--5", "1e", "e5", "0x10"] {
            assert!(s.parse::<BigFloat>().is_err(), "{:?}", s);
        }
    }
}
