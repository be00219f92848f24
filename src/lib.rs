/*!
`bigfloat` is an arbitrary-precision binary floating-point library.
A [`BigFloat`] represents a real number as `mantissa * 2^(scale - G)`
where the mantissa is an arbitrary-size signed integer
([`rug::Integer`]), `scale` is a binary radix-point offset, and `G`
([`GUARD_BITS`]) is a fixed count of low-order guard bits carried by
every value to stabilize chained rounding.

Unlike IEEE 754 types there is no NaN, no infinity and no subnormal
range: the exponent is unbounded and every value is an exact rational.
Unlike a fixed-precision context (MPFR style), precision travels with
each value: operators pick an output width from their inputs, and the
guard bits below that width keep sequences of operations honest.

The library is pure value semantics: every value is immutable, every
operator allocates its result, and there is no global state beyond the
internally synchronized constants cache in [`consts`].

Quick tour:

```
use bigfloat::BigFloat;

let a: BigFloat = "2.5".parse().unwrap();
let b = &a * &a;
assert_eq!(b, "6.25".parse().unwrap());
assert_eq!(BigFloat::from(256i32).sqrt(), BigFloat::from(16i32));
```
*/

mod cmp;
mod context;
mod convert;
mod error;
mod fmt;
mod math;
mod number;
mod ops;
mod parse;
mod round;
mod util;

pub mod consts;
pub mod intops;
pub mod shift;

pub use crate::context::AccuracyContext;
pub use crate::error::Error;
pub use crate::number::{BigFloat, GUARD_BITS};
