//! Signed big integer type definition.

use crate::error::{Error, Result};
use crate::limb::{self, large, small, Limb, Math};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::ops;

/// Sign of a [`BigInt`].
///
/// Zero may carry either sign; `+0` and `-0` compare equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Sign {
    /// Less than zero, or a zero that was negated.
    Negative,
    /// Greater than or equal to zero.
    #[default]
    Positive,
}

impl Sign {
    /// Returns `-1` for `Negative` and `+1` for `Positive`.
    #[inline]
    pub fn to_int(self) -> i32 {
        match self {
            Sign::Negative => -1,
            Sign::Positive => 1,
        }
    }

    /// The inverse of [`Sign::to_int`]. Anything but `-1` and `+1` is `None`.
    #[inline]
    pub fn from_int(sign: i32) -> Option<Sign> {
        match sign {
            -1 => Some(Sign::Negative),
            1 => Some(Sign::Positive),
            _ => None,
        }
    }

    /// The opposite sign.
    #[inline]
    pub fn flip(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl ops::Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        self.flip()
    }
}

/// An arbitrary-precision signed integer.
///
/// The magnitude is a vector of 32-bit [`Limb`]s, least significant first,
/// so the value is `sign * sum(limbs[i] * 2^(32 * i))`. Zero limbs above the
/// most significant non-zero limb are allowed and kept until [`trim`] is
/// called.
///
/// A value with no limbs at all is *empty* (see [`BigInt::empty`]). Empty
/// values compare equal to zero and can be parsed into, but arithmetic and
/// hex output on them fail with [`ErrorCode::NullTarget`].
///
/// [`trim`]: BigInt::trim
/// [`ErrorCode::NullTarget`]: crate::error::ErrorCode::NullTarget
#[derive(Clone)]
pub struct BigInt {
    /// Internal storage for the BigInt, in little-endian order.
    pub(crate) limbs: Vec<Limb>,
    pub(crate) sign: Sign,
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

impl Math for BigInt {
    #[inline]
    fn data(&self) -> &Vec<Limb> {
        &self.limbs
    }

    #[inline]
    fn data_mut(&mut self) -> &mut Vec<Limb> {
        &mut self.limbs
    }
}

impl BigInt {
    // CONSTRUCTORS

    /// Zero, positive, with a single limb.
    pub fn new() -> Self {
        BigInt {
            limbs: alloc::vec![0],
            sign: Sign::Positive,
        }
    }

    /// Zero, positive, pre-sized to `len` limbs.
    ///
    /// Useful to avoid repeated growth when the size of the result is known.
    /// `with_length(0)` is the same as [`BigInt::empty`].
    pub fn with_length(len: usize) -> Result<Self> {
        let mut limbs = Vec::new();
        limb::grow(&mut limbs, len)?;
        Ok(BigInt {
            limbs,
            sign: Sign::Positive,
        })
    }

    /// A value without a limb buffer.
    ///
    /// Empty values exist to be assigned into, for example by
    /// [`BigInt::parse_radix`] or [`BigInt::init`].
    pub const fn empty() -> Self {
        BigInt {
            limbs: Vec::new(),
            sign: Sign::Positive,
        }
    }

    /// Build a value from limbs in little-endian order. The limbs are taken
    /// as they are, trailing zeros included.
    pub fn from_limbs(sign: Sign, limbs: &[Limb]) -> Self {
        BigInt {
            limbs: limbs.to_vec(),
            sign,
        }
    }

    // LIFECYCLE

    /// Give an empty value its buffer: zero, positive, one limb.
    ///
    /// On a value that already has limbs this is [`BigInt::reset`].
    #[inline]
    pub fn init(&mut self) -> Result<()> {
        self.reset()
    }

    /// Release the current buffer and start over as zero, positive, with a
    /// single limb.
    ///
    /// If the new buffer cannot be allocated, `self` is left as it was.
    pub fn reset(&mut self) -> Result<()> {
        let mut limbs = Vec::new();
        limb::grow(&mut limbs, 1)?;
        self.limbs = limbs;
        self.sign = Sign::Positive;
        Ok(())
    }

    /// Zero every limb without changing the length or the sign.
    #[inline]
    pub fn set_zero(&mut self) {
        small::clear(&mut self.limbs);
    }

    /// A copy with its own buffer and the same sign, length and limbs.
    ///
    /// Unlike `clone`, a failed allocation is reported instead of aborting.
    pub fn copy(&self) -> Result<BigInt> {
        Ok(BigInt {
            limbs: limb::try_to_vec(&self.limbs)?,
            sign: self.sign,
        })
    }

    /// Drop the zero limbs above the most significant non-zero limb, keeping
    /// at least one, and release the unused capacity.
    pub fn trim(&mut self) -> Result<()> {
        if self.limbs.is_empty() {
            return Err(Error::null_target());
        }
        self.normalize();
        Ok(())
    }

    /// Free the limb buffer, leaving an empty value behind.
    ///
    /// Dropping a `BigInt` frees everything; this is for values that stay
    /// around to be reused as a target.
    #[inline]
    pub fn release(&mut self) {
        self.limbs = Vec::new();
    }

    // ACCESSORS

    /// The limbs, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Number of limbs, trailing zero limbs included.
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// True if the value has no limb buffer. See [`BigInt::empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// The sign, which may be negative for a zero value.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Replace the sign, leaving the limbs alone.
    #[inline]
    pub fn set_sign(&mut self, sign: Sign) {
        self.sign = sign;
    }

    /// True if the sign is negative, even if the value is zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// True if the sign is positive, even if the value is zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    /// Index of the most significant non-zero limb, or `None` for zero.
    #[inline]
    pub fn highest_limb(&self) -> Option<usize> {
        self.highest_index()
    }

    // MUTATION

    /// Flip the sign in place.
    #[inline]
    pub fn neg(&mut self) {
        self.sign = self.sign.flip();
    }

    /// Add `value * 2^(32 * position)` to the magnitude, ignoring the sign.
    ///
    /// The buffer grows to `position + 1` limbs if needed, and by one limb
    /// more if a carry leaves the top. Adding zero never grows the buffer.
    #[inline]
    pub fn add_limb_at(&mut self, value: Limb, position: usize) -> Result<()> {
        self.iadd_small_at(value, position)
    }

    /// Multiply the magnitude in place by `multiplier`.
    ///
    /// Multiplying by zero zeroes the value but keeps its length. The buffer
    /// only grows if the product does not fit.
    pub fn mul_limb(&mut self, multiplier: Limb) -> Result<()> {
        if self.limbs.is_empty() {
            return Err(Error::null_target());
        }
        self.imul_small(multiplier)
    }

    // ARITHMETIC

    /// `self + other` as a new value. Neither operand is modified.
    pub fn add(&self, other: &BigInt) -> Result<BigInt> {
        if self.limbs.is_empty() || other.limbs.is_empty() {
            return Err(Error::null_target());
        }

        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ok(BigInt::new()),
            (true, false) => return other.copy(),
            (false, true) => return self.copy(),
            (false, false) => {}
        }

        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Positive) => add_magnitudes(self, other),
            (Sign::Positive, Sign::Negative) => sub_magnitudes(self, other),
            (Sign::Negative, Sign::Positive) => sub_magnitudes(other, self),
            (Sign::Negative, Sign::Negative) => {
                let mut sum = add_magnitudes(self, other)?;
                sum.neg();
                Ok(sum)
            }
        }
    }

    /// `self - other` as a new value. Neither operand is modified.
    pub fn sub(&self, other: &BigInt) -> Result<BigInt> {
        let mut negated = other.copy()?;
        negated.neg();
        self.add(&negated)
    }

    // CONVERSIONS

    /// The value as a `u64`, if it is not negative and fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_zero() {
            return Some(0);
        }
        if self.is_negative() {
            return None;
        }
        match self.highest_index() {
            Some(0) => Some(u64::from(self.limbs[0])),
            Some(1) => Some(u64::from(self.limbs[0]) | u64::from(self.limbs[1]) << limb::LIMB_BITS),
            _ => None,
        }
    }
}

/// `|x| + |y|`, positive.
fn add_magnitudes(x: &BigInt, y: &BigInt) -> Result<BigInt> {
    Ok(BigInt {
        limbs: large::add(&x.limbs, &y.limbs)?,
        sign: Sign::Positive,
    })
}

/// `|x| - |y|`, signed by whichever magnitude is larger.
fn sub_magnitudes(x: &BigInt, y: &BigInt) -> Result<BigInt> {
    match x.compare_magnitude(y) {
        Ordering::Equal => Ok(BigInt::new()),
        Ordering::Greater => Ok(BigInt {
            limbs: large::sub(&x.limbs, &y.limbs)?,
            sign: Sign::Positive,
        }),
        Ordering::Less => Ok(BigInt {
            limbs: large::sub(&y.limbs, &x.limbs)?,
            sign: Sign::Negative,
        }),
    }
}

impl ops::Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        BigInt::neg(&mut self);
        self
    }
}

impl From<u64> for BigInt {
    /// Uses one limb if `x` fits in 32 bits, two otherwise.
    fn from(x: u64) -> Self {
        let [lo, hi] = limb::split_u64(x);
        let limbs = if hi == 0 {
            alloc::vec![lo]
        } else {
            alloc::vec![lo, hi]
        };
        BigInt {
            limbs,
            sign: Sign::Positive,
        }
    }
}

impl From<u32> for BigInt {
    fn from(x: u32) -> Self {
        BigInt {
            limbs: alloc::vec![x],
            sign: Sign::Positive,
        }
    }
}

impl From<i64> for BigInt {
    fn from(x: i64) -> Self {
        let mut value = BigInt::from(x.unsigned_abs());
        if x < 0 {
            value.sign = Sign::Negative;
        }
        value
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("sign", &self.sign)
            .field("limbs", &self.limbs)
            .finish()
    }
}
