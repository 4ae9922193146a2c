//! Hexadecimal output.

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::limb::Limb;
use alloc::string::String;
use core::fmt;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";
const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Hex digits in one limb.
const NIBBLES: u32 = 8;

impl BigInt {
    /// Render the value as uppercase hexadecimal.
    ///
    /// Negative values get a leading `-`. There are no leading zeros, and
    /// zero, positive or negative, is `"0"`.
    ///
    /// ```
    /// use arbint::BigInt;
    ///
    /// # fn main() -> arbint::Result<()> {
    /// let x = BigInt::from_str_radix("999999999999999999999999999999999999", 10)?;
    /// assert_eq!(x.to_hex()?, "C097CE7BC90715B34B9F0FFFFFFFFF");
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_hex(&self) -> Result<String> {
        if self.limbs.is_empty() {
            return Err(Error::null_target());
        }

        // Worst case is every limb in full plus the sign.
        let mut out = String::new();
        out.try_reserve_exact(NIBBLES as usize * self.limbs.len() + 1)?;
        if self.is_negative() && !self.is_zero() {
            out.push('-');
        }
        push_digits(&mut out, &self.limbs, HEX_UPPER);
        out.shrink_to_fit();
        Ok(out)
    }

    fn fmt_hex(&self, f: &mut fmt::Formatter, table: &[u8; 16]) -> fmt::Result {
        let mut digits = String::new();
        push_digits(&mut digits, &self.limbs, table);
        f.pad_integral(!self.is_negative() || self.is_zero(), "0x", &digits)
    }
}

/// Append the digits of `limbs`, most significant first, skipping leading
/// zeros. A zero magnitude appends a single `0`.
fn push_digits(out: &mut String, limbs: &[Limb], table: &[u8; 16]) {
    let mut nibbles = limbs
        .iter()
        .rev()
        .flat_map(|&limb| (0..NIBBLES).rev().map(move |i| (limb >> (4 * i)) & 0xF))
        .skip_while(|&nibble| nibble == 0)
        .peekable();

    if nibbles.peek().is_none() {
        out.push('0');
        return;
    }
    out.extend(nibbles.map(|nibble| table[nibble as usize] as char));
}

impl fmt::UpperHex for BigInt {
    /// Same digits as [`BigInt::to_hex`]. Width, fill and `#` are honored,
    /// and an empty value prints as `0`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_hex(f, HEX_UPPER)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_hex(f, HEX_LOWER)
    }
}
