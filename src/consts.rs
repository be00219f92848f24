/*!
Mathematical constants at arbitrary precision.

[`get_constant`] returns a [`BigFloat`] with at least the requested
number of in-precision bits. Values are computed through MPFR (via
[`rug::Float`]) and converted with `mpfr_get_z_2exp`, which splits a
float into an exact mantissa/exponent pair.

A process-wide cache keeps the widest value computed so far per
constant; narrower requests are served from it. The cache is behind a
`Mutex`, so the provider is safe to hit from any number of threads.
*/

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use gmp_mpfr_sys::mpfr;
use num_traits::Zero;
use rug::{Float, Integer};

use crate::number::BigFloat;

/// Identifiers for the provided constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number e
    E,
    /// ln 2
    Ln2,
    /// √2
    Sqrt2,
    /// The Euler–Mascheroni constant γ
    EulerGamma,
}

static CACHE: OnceLock<Mutex<HashMap<Constant, BigFloat>>> = OnceLock::new();

/// Returns `which` with at least `bits` bits of precision.
/// Repeated calls for the same constant are answered from a shared
/// cache whenever the cached value is wide enough.
pub fn get_constant(which: Constant, bits: usize) -> BigFloat {
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    {
        let guard = cache.lock().unwrap();
        if let Some(v) = guard.get(&which) {
            if v.precision() >= bits as isize {
                return v.clone();
            }
        }
    }

    // overshoot so nearby requests keep hitting the cache
    let value = compute(which, bits + 32);
    cache.lock().unwrap().insert(which, value.clone());
    value
}

fn compute(which: Constant, bits: usize) -> BigFloat {
    let prec = bits as u32;
    let f = match which {
        Constant::Pi => Float::with_val(prec, rug::float::Constant::Pi),
        Constant::Ln2 => Float::with_val(prec, rug::float::Constant::Log2),
        Constant::EulerGamma => Float::with_val(prec, rug::float::Constant::Euler),
        Constant::E => Float::with_val(prec, 1u8).exp(),
        Constant::Sqrt2 => Float::with_val(prec, 2u8).sqrt(),
    };
    from_rug_float(&f)
}

/// Splits a finite non-zero MPFR float into mantissa and exponent.
fn from_rug_float(f: &Float) -> BigFloat {
    let mut m = Integer::zero();
    let exp = unsafe { mpfr::get_z_2exp(m.as_raw_mut(), f.as_raw()) as isize };
    BigFloat::new(m, exp)
}
