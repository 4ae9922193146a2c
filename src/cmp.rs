use crate::bigint::{BigInt, Sign};
use crate::limb::{large, small, Math};
use core::cmp::Ordering;
use core::ptr;

impl BigInt {
    /// True if every limb is zero, whatever the sign. Empty values are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        small::is_zero(&self.limbs)
    }
}

impl PartialEq for BigInt {
    /// Numeric equality.
    ///
    /// Zero limbs past the end of the shorter operand are implied, so
    /// `[5, 0]` equals `[5]`, and zeros are equal regardless of sign.
    fn eq(&self, other: &BigInt) -> bool {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => true,
            (false, false) => self.sign == other.sign && large::equal(&self.limbs, &other.limbs),
            _ => false,
        }
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        if ptr::eq(self, other) {
            return Ordering::Equal;
        }

        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return positive_if(other.sign, Ordering::Less),
            (false, true) => return positive_if(self.sign, Ordering::Greater),
            (false, false) => {}
        }

        // Neither is zero, so differing signs decide on their own.
        if self.sign != other.sign {
            return positive_if(self.sign, Ordering::Greater);
        }

        // Larger magnitudes are smaller numbers once both are negative.
        positive_if(self.sign, self.compare_magnitude(other))
    }
}

/// `ordering` when `sign` is positive, its reverse otherwise.
#[inline]
fn positive_if(sign: Sign, ordering: Ordering) -> Ordering {
    match sign {
        Sign::Positive => ordering,
        Sign::Negative => ordering.reverse(),
    }
}
