//! Parse big integers from text.

use crate::bigint::{BigInt, Sign};
use crate::digit;
use crate::error::{Error, ErrorCode, Result};
use core::str::FromStr;

impl BigInt {
    /// Parse `text` in `radix` into `self`.
    ///
    /// The text is an optional `+` or `-` followed by one or more digits of
    /// the radix, case-insensitive. There is no whitespace trimming and no
    /// `0x`-style prefix.
    ///
    /// On error `self` is left untouched: the number is built on the side
    /// and only moved in once every digit was accepted.
    ///
    /// ```
    /// use arbint::{BigInt, Sign};
    ///
    /// # fn main() -> arbint::Result<()> {
    /// let mut x = BigInt::empty();
    /// x.parse_radix("-4294967296", 10)?;
    /// assert_eq!(x.limbs(), &[0, 1]);
    /// assert_eq!(x.sign(), Sign::Negative);
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse_radix(&mut self, text: &str, radix: u32) -> Result<()> {
        *self = BigInt::from_str_radix(text, radix)?;
        Ok(())
    }

    /// Parse `text` in `radix` into a new value. See [`BigInt::parse_radix`].
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigInt> {
        if !digit::is_valid_radix(radix) {
            return Err(Error::invalid_radix(radix));
        }

        let (sign, offset) = match text.as_bytes().first() {
            Some(b'-') => (Sign::Negative, 1),
            Some(b'+') => (Sign::Positive, 1),
            _ => (Sign::Positive, 0),
        };
        let digits = &text[offset..];
        if digits.is_empty() {
            return Err(Error::at(ErrorCode::EmptyNumber, offset));
        }

        let mut value = BigInt::new();
        value.sign = sign;

        // Horner's rule, adding each digit before scaling so the last digit
        // is not followed by a useless multiplication.
        let mut chars = digits.char_indices().peekable();
        while let Some((index, c)) = chars.next() {
            let d = match digit::to_digit(c, radix) {
                Some(d) => d,
                None => return Err(Error::at(ErrorCode::InvalidDigit(c), offset + index)),
            };
            value.add_limb_at(d, 0)?;
            if chars.peek().is_some() {
                value.mul_limb(radix)?;
            }
        }

        Ok(value)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse decimal text.
    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::from_str_radix(s, 10)
    }
}
