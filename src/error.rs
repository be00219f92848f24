/*!
Error taxonomy.

Every failure in this crate is synchronous: an operation either returns a
value, returns one of the [`Error`] variants through a `checked_*` method
or a `TryFrom` conversion, or panics through one of the `panic_*` helpers
when the caller used the infix operator form.
*/

use std::fmt;

/// Failure kinds surfaced by fallible operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Divisor was strictly zero in `/`, `%`, `modulo` or `inverse`.
    DivideByZero,
    /// Square root of a negative value, logarithm of a non-positive
    /// value, or an even-order root of a negative value.
    NegativeRoot,
    /// `from_f64`/`from_f32` received NaN or an infinity.
    NonFiniteInput,
    /// Conversion to a fixed-width integer type would overflow.
    IntegerOverflow,
    /// The input string is not a decimal number.
    ParseFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivideByZero => write!(f, "division by zero"),
            Error::NegativeRoot => write!(f, "root or logarithm of a negative value"),
            Error::NonFiniteInput => write!(f, "NaN or infinity is not representable"),
            Error::IntegerOverflow => write!(f, "value does not fit in the target integer type"),
            Error::ParseFailure => write!(f, "invalid decimal number"),
        }
    }
}

impl std::error::Error for Error {}

/// Panics when a divisor is strictly zero.
pub(crate) fn panic_divide_by_zero() -> ! {
    panic!("{}", Error::DivideByZero)
}

/// Panics when taking a root or logarithm that would leave the reals.
pub(crate) fn panic_negative_root() -> ! {
    panic!("{}", Error::NegativeRoot)
}

/// Panics when constructing from a NaN or infinite float.
pub(crate) fn panic_non_finite() -> ! {
    panic!("{}", Error::NonFiniteInput)
}
