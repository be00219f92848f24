/*!
Comparison taxonomy.

Three distinct semantics are exported:

- `==`, `<` and friends (`PartialEq`/`Ord`): canonical *value*
  comparison. Scales are aligned exactly, guard bits are collapsed with
  the half-away rounding shift on both sides, and the resulting signed
  integers are compared. Representations that differ only in trailing
  padding compare equal.
- [`BigFloat::cmp_ulp`] / [`BigFloat::eq_ulp`]: tolerant comparison. The
  finer operand is rounded to the coarser scale and the aligned
  difference is measured in units of the coarser operand's last place.
- Two total orders over representations:
  [`BigFloat::total_cmp_bitwise`] distinguishes `2.5` from `2.50`;
  [`BigFloat::total_cmp_preorder`] collapses trailing-zero padding
  before ordering.

`Hash` is derived from the reduced `(unscaled, scale)` pair and agrees
with `==` for values carrying the same alignment and precision (the
regime hash tables actually see).
*/

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rug::Integer;

use crate::number::{BigFloat, GUARD_BITS};
use crate::shift::rounding_right_shift;
use crate::util::bit_length;

impl BigFloat {
    /// Canonical value comparison: the semantics behind `==` and `<`.
    fn cmp_value(&self, other: &Self) -> Ordering {
        let sa = self.sign();
        let sb = other.sign();
        if sa != sb {
            return sa.cmp(&sb);
        }
        if sa == 0 {
            return Ordering::Equal;
        }

        // off by two binary orders or more: no shifting required,
        // collapsing guard bits cannot close the gap
        let ea = self.binary_exponent();
        let eb = other.binary_exponent();
        if ea > eb + 1 {
            return if sa > 0 {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        if eb > ea + 1 {
            return if sa > 0 {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        // careful path: exponents agree or roll over by one
        let common = self.scale.min(other.scale);
        let da = Integer::from(&self.mantissa << (self.scale - common) as u32);
        let db = Integer::from(&other.mantissa << (other.scale - common) as u32);
        let ua = rounding_right_shift(&da, GUARD_BITS);
        let ub = rounding_right_shift(&db, GUARD_BITS);
        ua.cmp(&ub)
    }

    /// Tolerant comparison: values within `ulp_tolerance` units in the
    /// last place of the coarser operand compare equal. When
    /// `include_guard_bits` is false the tolerance is counted above the
    /// guard window, i.e. in in-precision units.
    pub fn cmp_ulp(&self, other: &Self, ulp_tolerance: usize, include_guard_bits: bool) -> Ordering {
        let common = self.scale.max(other.scale);
        let da = rounding_right_shift(&self.mantissa, (common - self.scale) as usize);
        let db = rounding_right_shift(&other.mantissa, (common - other.scale) as usize);
        let diff = da - db;

        let tolerance = ulp_tolerance + if include_guard_bits { 0 } else { GUARD_BITS };
        if bit_length(&diff) <= tolerance {
            Ordering::Equal
        } else {
            diff.cmp0()
        }
    }

    /// True when the two values compare equal within `ulp_tolerance`
    /// in-precision units of the coarser operand's last place.
    pub fn eq_ulp(&self, other: &Self, ulp_tolerance: usize) -> bool {
        self.cmp_ulp(other, ulp_tolerance, false) == Ordering::Equal
    }

    /// Exact comparison of the represented reals, guard bits and all.
    /// Finer than the canonical comparison; no rounding anywhere.
    fn cmp_exact(&self, other: &Self) -> Ordering {
        let sa = self.mantissa.cmp0();
        let sb = other.mantissa.cmp0();
        if sa != sb {
            return sa.cmp(&sb);
        }
        if sa == Ordering::Equal {
            return Ordering::Equal;
        }

        let ea = self.binary_exponent();
        let eb = other.binary_exponent();
        if ea != eb {
            let mag = ea.cmp(&eb);
            return if sa == Ordering::Less { mag.reverse() } else { mag };
        }

        let common = self.scale.min(other.scale);
        let da = Integer::from(&self.mantissa << (self.scale - common) as u32);
        let db = Integer::from(&other.mantissa << (other.scale - common) as u32);
        da.cmp(&db)
    }

    /// Strict total order over representations: exact value order with
    /// lexicographic `(scale, mantissa)` tie-breaking, so `2.5` and
    /// `2.50` (same value, different padding) are distinct.
    pub fn total_cmp_bitwise(&self, other: &Self) -> Ordering {
        self.cmp_exact(other)
            .then_with(|| self.scale.cmp(&other.scale))
            .then_with(|| self.mantissa.cmp(&other.mantissa))
    }

    /// Total preorder over representations: trailing-zero padding is
    /// collapsed first, then values are ordered exactly. A stable but
    /// less discriminating key than [`BigFloat::total_cmp_bitwise`].
    pub fn total_cmp_preorder(&self, other: &Self) -> Ordering {
        let (ua, sa) = self.reduced();
        let (ub, sb) = other.reduced();

        let signs = ua.cmp0().cmp(&ub.cmp0());
        if signs != Ordering::Equal {
            return signs;
        }
        if ua.cmp0() == Ordering::Equal {
            return Ordering::Equal;
        }

        let ea = sa + bit_length(&ua) as isize;
        let eb = sb + bit_length(&ub) as isize;
        if ea != eb {
            let mag = ea.cmp(&eb);
            return if ua.cmp0() == Ordering::Less {
                mag.reverse()
            } else {
                mag
            };
        }

        let common = sa.min(sb);
        let da = Integer::from(&ua << (sa - common) as u32);
        let db = Integer::from(&ub << (sb - common) as u32);
        da.cmp(&db)
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl Eq for BigFloat {}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_value(other))
    }
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl Hash for BigFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (u, s) = self.reduced();
        u.hash(state);
        s.hash(state);
    }
}
