/*!
A caller-side precision context.

[`AccuracyContext`] threads a target precision through a block of
computations: every method forwards to the corresponding operator and
re-rounds the result to the target. It carries no state beyond the
target and adds no semantics; the core stays context-free.
*/

use crate::number::BigFloat;

/// A convenience wrapper holding a target precision in bits.
#[derive(Clone, Copy, Debug)]
pub struct AccuracyContext {
    precision: usize,
}

impl AccuracyContext {
    /// Constructs a context with the given target precision.
    pub fn new(precision: usize) -> Self {
        assert!(precision >= 1, "target precision must be at least 1");
        Self { precision }
    }

    /// The target precision in bits.
    pub fn precision(&self) -> usize {
        self.precision
    }

    fn fit(&self, v: BigFloat) -> BigFloat {
        v.set_precision_with_round(self.precision)
    }

    /// Addition rounded to the target precision.
    pub fn add(&self, a: &BigFloat, b: &BigFloat) -> BigFloat {
        self.fit(a + b)
    }

    /// Subtraction rounded to the target precision.
    pub fn sub(&self, a: &BigFloat, b: &BigFloat) -> BigFloat {
        self.fit(a - b)
    }

    /// Multiplication rounded to the target precision.
    pub fn mul(&self, a: &BigFloat, b: &BigFloat) -> BigFloat {
        self.fit(a * b)
    }

    /// Division rounded to the target precision.
    pub fn div(&self, a: &BigFloat, b: &BigFloat) -> BigFloat {
        self.fit(a / b)
    }

    /// Square root rounded to the target precision.
    pub fn sqrt(&self, a: &BigFloat) -> BigFloat {
        self.fit(a.sqrt())
    }

    /// Integer power rounded to the target precision.
    pub fn pow(&self, a: &BigFloat, exp: i32) -> BigFloat {
        self.fit(a.pow(exp))
    }
}
