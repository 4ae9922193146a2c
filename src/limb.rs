//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Buffers are not normalized: zero limbs may sit above the most significant
//! non-zero limb, and every relative operation reads a missing limb as zero.

use crate::error::{Error, Result};
use alloc::vec::Vec;
use core::cmp;

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except, it stores 32-bit
/// numbers instead.
pub type Limb = u32;

/// Type wide enough to hold the full product of two limbs.
type Wide = u64;

/// Number of bits in a limb.
pub(crate) const LIMB_BITS: usize = 32;

/// Split u64 into limbs, in little-endian order.
#[inline]
pub(crate) fn split_u64(x: u64) -> [Limb; 2] {
    [x as Limb, (x >> LIMB_BITS) as Limb]
}

// BUFFER
// ------

/// Grow `vec` to exactly `len` limbs, zero-filling the new limbs.
///
/// This is the only place limb buffers get longer. If the allocation fails,
/// the buffer keeps its previous contents and length.
#[inline]
pub(crate) fn grow(vec: &mut Vec<Limb>, len: usize) -> Result<()> {
    debug_assert!(len >= vec.len());
    vec.try_reserve_exact(len - vec.len())?;
    vec.resize(len, 0);
    Ok(())
}

/// Copy limbs into a new buffer of exactly the same length.
#[inline]
pub(crate) fn try_to_vec(x: &[Limb]) -> Result<Vec<Limb>> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(x.len())?;
    vec.extend_from_slice(x);
    Ok(vec)
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

mod scalar {
use super::*;

// ADDITION

/// Add two small integers and return the resulting value and if overflow happens.
#[inline]
pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
    x.overflowing_add(y)
}

/// AddAssign two small integers and return if overflow happens.
#[inline]
pub fn iadd(x: &mut Limb, y: Limb) -> bool {
    let t = add(*x, y);
    *x = t.0;
    t.1
}

// SUBTRACTION

/// Subtract two small integers and return the resulting value and if overflow happens.
#[inline]
pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
    x.overflowing_sub(y)
}

// MULTIPLICATION

/// Multiply two small integers (with carry) (and return the overflow contribution).
///
/// Returns the (low, high) components.
#[inline]
pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
    // Cannot overflow, as long as wide is 2x as wide. This is because
    // the following is always true:
    // `Wide::MAX - (Limb::MAX * Limb::MAX) >= Limb::MAX`
    let z: Wide = Wide::from(x) * Wide::from(y) + Wide::from(carry);
    (z as Limb, (z >> LIMB_BITS) as Limb)
}

/// Multiply two small integers (with carry) (and return the overflow contribution).
#[inline]
pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
    let t = mul(*x, y, carry);
    *x = t.0;
    t.1
}

}   // scalar

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
use super::*;

// PROPERTIES

/// Index of the most significant non-zero limb, if any.
#[inline]
pub fn highest(x: &[Limb]) -> Option<usize> {
    x.iter().rposition(|&xi| xi != 0)
}

/// Check if every limb is zero. An empty buffer is zero.
#[inline]
pub fn is_zero(x: &[Limb]) -> bool {
    x.iter().all(|&xi| xi == 0)
}

// ADDITION

/// AddAssign `y * 2^(32 * xstart)` to bigint.
///
/// Grows the buffer to `xstart + 1` limbs when `xstart` is past the end,
/// and by one more limb when the carry runs off the top. Adding zero never
/// grows the buffer.
pub fn iadd_impl(x: &mut Vec<Limb>, y: Limb, xstart: usize) -> Result<()> {
    if y == 0 {
        return Ok(());
    }
    if xstart >= x.len() {
        let len = xstart.checked_add(1).ok_or_else(Error::alloc)?;
        grow(x, len)?;
    }

    // The carry only leaves the buffer if every limb above `xstart` is
    // saturated, so reserve the extra limb before anything is written.
    let runs_off = x[xstart].checked_add(y).is_none()
        && x[xstart + 1..].iter().all(|&xi| xi == Limb::MAX);
    if runs_off {
        x.try_reserve_exact(1)?;
    }

    // Initial add
    let mut carry = scalar::iadd(&mut x[xstart], y);

    // Increment until overflow stops occurring.
    let mut index = xstart + 1;
    while carry && index < x.len() {
        carry = scalar::iadd(&mut x[index], 1);
        index += 1;
    }

    // If we overflowed the buffer entirely, need to add 1 to the end
    // of the buffer.
    if carry {
        x.push(1);
    }
    Ok(())
}

// MULTIPLICATION

/// MulAssign small integer to bigint.
///
/// Multiplying by 0 zeroes every limb but keeps the length, and multiplying
/// by 1 leaves the buffer alone.
pub fn imul(x: &mut Vec<Limb>, y: Limb) -> Result<()> {
    match y {
        0 => {
            clear(x);
            return Ok(());
        }
        1 => return Ok(()),
        _ => {}
    }

    // A carry out of the top limb is only possible if that limb is set.
    if x.last().map_or(false, |&xi| xi != 0) {
        x.try_reserve_exact(1)?;
    }

    // Multiply iteratively over all elements, adding the carry each time.
    let mut carry: Limb = 0;
    for xi in x.iter_mut() {
        carry = scalar::imul(xi, y, carry);
    }

    // Overflow of value, add to end.
    let len = x.len();
    iadd_impl(x, carry, len)
}

// NORMALIZE

/// Zero every limb, keeping the length.
#[inline]
pub fn clear(x: &mut [Limb]) {
    for xi in x.iter_mut() {
        *xi = 0;
    }
}

/// Drop zero limbs above the most significant non-zero limb, keeping at
/// least one limb, and give the unused capacity back.
#[inline]
pub fn normalize(x: &mut Vec<Limb>) {
    let len = highest(x).map_or(1, |index| index + 1);
    x.truncate(len);
    x.shrink_to_fit();
}

}   // small

// LARGE
// -----

// Large-to-large operations, to modify a big integer from a native scalar.

pub(crate) mod large {
use super::*;

// RELATIVE OPERATORS

/// Compare `x` to `y`, in little-endian order.
///
/// Zero limbs above the most significant non-zero limb are ignored.
#[inline]
pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
    let xlen = small::highest(x).map_or(0, |index| index + 1);
    let ylen = small::highest(y).map_or(0, |index| index + 1);
    if xlen != ylen {
        return xlen.cmp(&ylen);
    }

    let iter = x[..xlen].iter().rev().zip(y[..ylen].iter().rev());
    for (xi, yi) in iter {
        match xi.cmp(yi) {
            cmp::Ordering::Equal => {}
            ordering => return ordering,
        }
    }
    cmp::Ordering::Equal
}

/// Check if `x` and `y` hold the same magnitude.
///
/// The shorter buffer is treated as if it were padded with zero limbs.
#[inline]
pub fn equal(x: &[Limb], y: &[Limb]) -> bool {
    let (shorter, longer) = if x.len() <= y.len() { (x, y) } else { (y, x) };
    let (low, high) = longer.split_at(shorter.len());
    shorter == low && small::is_zero(high)
}

// ADDITION

/// Add bigint to bigint.
///
/// Copies the longer buffer and accumulates the shorter one into it, so
/// the result only grows if the final carry leaves the top limb.
pub fn add(x: &[Limb], y: &[Limb]) -> Result<Vec<Limb>> {
    let (shorter, longer) = if x.len() < y.len() { (x, y) } else { (y, x) };
    let mut z = try_to_vec(longer)?;
    for (index, &yi) in shorter.iter().enumerate() {
        small::iadd_impl(&mut z, yi, index)?;
    }
    Ok(z)
}

// SUBTRACTION

/// Sub bigint from bigint, where `x >= y`.
///
/// The result has exactly as many limbs as `x`. Limbs missing from `y`
/// read as zero.
pub fn sub(x: &[Limb], y: &[Limb]) -> Result<Vec<Limb>> {
    // Basic underflow checks.
    debug_assert!(compare(x, y) != cmp::Ordering::Less);

    let mut z = Vec::new();
    z.try_reserve_exact(x.len())?;

    let mut borrow = false;
    for (index, &xi) in x.iter().enumerate() {
        let yi = y.get(index).copied().unwrap_or(0);
        // Only one op of the two can overflow, since we subtract at most
        // Limb::MAX + 1. Take the previous borrow, and store the current
        // one for the next limb.
        let (mut zi, mut tmp) = scalar::sub(xi, yi);
        if borrow {
            let (zj, underflow) = scalar::sub(zi, 1);
            zi = zj;
            tmp |= underflow;
        }
        borrow = tmp;
        z.push(zi);
    }
    debug_assert!(!borrow);
    Ok(z)
}

}   // large

// TRAITS
// ------

/// Magnitude operations shared by everything that owns a limb buffer.
///
/// None of these look at a sign.
pub(crate) trait Math {
    // DATA

    /// Get access to the underlying data
    fn data(&self) -> &Vec<Limb>;

    /// Get access to the underlying data
    fn data_mut(&mut self) -> &mut Vec<Limb>;

    // RELATIVE OPERATIONS

    /// Compare the magnitude of self to y.
    #[inline]
    fn compare_magnitude(&self, y: &Self) -> cmp::Ordering {
        large::compare(self.data(), y.data())
    }

    // PROPERTIES

    /// Index of the most significant non-zero limb.
    #[inline]
    fn highest_index(&self) -> Option<usize> {
        small::highest(self.data())
    }

    // NORMALIZE

    /// Remove zero limbs above the most significant non-zero limb.
    #[inline]
    fn normalize(&mut self) {
        small::normalize(self.data_mut());
    }

    // ADDITION

    /// AddAssign a limb scaled by `2^(32 * position)`.
    #[inline]
    fn iadd_small_at(&mut self, y: Limb, position: usize) -> Result<()> {
        small::iadd_impl(self.data_mut(), y, position)
    }

    // MULTIPLICATION

    /// MulAssign small integer.
    #[inline]
    fn imul_small(&mut self, y: Limb) -> Result<()> {
        small::imul(self.data_mut(), y)
    }
}

// TESTS
// -----
