//! Helpers to convert characters into digits.

/// Smallest radix accepted by the parser.
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by the parser: ten decimal digits plus the 26
/// letters of the alphabet.
pub const MAX_RADIX: u32 = 36;

/// Check if `radix` is in `MIN_RADIX..=MAX_RADIX`.
#[inline]
pub fn is_valid_radix(radix: u32) -> bool {
    (MIN_RADIX..=MAX_RADIX).contains(&radix)
}

/// Convert a character to its digit value in `radix`.
///
/// `'0'..='9'` map to 0 through 9, and `'a'..='z'` and `'A'..='Z'` map to
/// 10 through 35. Returns `None` if the character is not a digit, if its
/// value is not below `radix`, or if `radix` itself is unsupported.
///
/// ```
/// use arbint::digit::to_digit;
///
/// assert_eq!(to_digit('9', 10), Some(9));
/// assert_eq!(to_digit('a', 10), None);
/// assert_eq!(to_digit('a', 11), Some(10));
/// assert_eq!(to_digit('Z', 36), Some(35));
/// ```
#[inline]
pub fn to_digit(c: char, radix: u32) -> Option<u32> {
    if !is_valid_radix(radix) {
        return None;
    }
    c.to_digit(radix)
}
