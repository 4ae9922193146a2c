//! # arbint
//!
//! Sign-magnitude arbitrary-precision integers.
//!
//! A [`BigInt`] stores its magnitude as a vector of 32-bit limbs in
//! little-endian order next to a two-state [`Sign`]. Values grow without an
//! upper bound other than available memory, and every operation that may
//! grow the limb buffer reports allocation failure through [`Result`]
//! instead of aborting.
//!
//! ```
//! use arbint::BigInt;
//!
//! # fn main() -> arbint::Result<()> {
//! let a = BigInt::from_str_radix("88888888888888888888888888888888888888", 10)?;
//! let b = BigInt::from_str_radix("-33333333333333333333333333333333333333", 10)?;
//! let sum = a.add(&b)?;
//!
//! assert_eq!(sum, "55555555555555555555555555555555555555".parse::<BigInt>()?);
//! assert_eq!(sum.to_hex()?, "29CB9C5D87A03443CC692F78E38E38E3");
//! # Ok(())
//! # }
//! ```
//!
//! # Operations
//!
//! - Construction: [`BigInt::new`], [`BigInt::with_length`],
//!   [`BigInt::empty`], `From<u64>`, `From<u32>`, `From<i64>`.
//! - Parsing from any radix in `2..=36`: [`BigInt::parse_radix`],
//!   [`BigInt::from_str_radix`], and `FromStr` for decimal text.
//! - In-place mutation: [`BigInt::add_limb_at`], [`BigInt::mul_limb`],
//!   [`BigInt::neg`], [`BigInt::reset`], [`BigInt::set_zero`],
//!   [`BigInt::trim`].
//! - Binary arithmetic returning new values: [`BigInt::add`],
//!   [`BigInt::sub`].
//! - Comparison through `PartialEq`/`Ord`. Both are insensitive to trailing
//!   zero limbs and treat `+0` and `-0` as equal.
//! - Hexadecimal output: [`BigInt::to_hex`], `{:X}` and `{:x}`.
//!
//! There is deliberately no division and no big × big multiplication.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! arbint = { version = "0.4", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/arbint/0.4.0")]
// Ignored clippy lints
#![allow(
    // the arithmetic entry points are fallible, so they cannot be the
    // std::ops traits
    clippy::should_implement_trait,
    clippy::len_without_is_empty,
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
)]
#![deny(missing_docs)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "std", feature = "alloc")))]
mod features_check;

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[doc(inline)]
pub use crate::bigint::{BigInt, Sign};
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::limb::Limb;

mod bigint;
mod cmp;
pub mod digit;
pub mod error;
mod hex;
mod limb;
mod parse;

#[cfg(feature = "serde")]
mod ser;
