//! When parsing, growing or combining big integers goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when parsing,
/// growing or combining a [`BigInt`](crate::BigInt).
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `arbint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset into the parsed text at which the error was
    /// detected.
    ///
    /// Errors that are not tied to a position in some input text, such as an
    /// allocation failure, report 0.
    pub fn index(&self) -> usize {
        self.err.index
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Config` - a radix outside of `2..=36` was requested
    /// - `Category::Syntax` - input text that is not a valid number
    /// - `Category::State` - an empty value was used where a buffer is needed
    /// - `Category::Resource` - the limb buffer could not be grown
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::InvalidRadix(_) => Category::Config,
            ErrorCode::InvalidDigit(_) | ErrorCode::EmptyNumber => Category::Syntax,
            ErrorCode::NullTarget => Category::State,
            ErrorCode::AllocationFailure => Category::Resource,
        }
    }

    /// Returns true if this error was caused by an unsupported radix.
    pub fn is_config(&self) -> bool {
        self.classify() == Category::Config
    }

    /// Returns true if this error was caused by input text that is not a
    /// number in the requested radix.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by passing an empty value (see
    /// [`BigInt::empty`](crate::BigInt::empty)) to an operation that needs
    /// its limbs.
    pub fn is_state(&self) -> bool {
        self.classify() == Category::State
    }

    /// Returns true if this error was caused by a failed allocation.
    ///
    /// The value that was being grown keeps its previous limbs and length.
    pub fn is_resource(&self) -> bool {
        self.classify() == Category::Resource
    }
}

/// Categorizes the cause of an `arbint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a radix outside of `2..=36`.
    Config,

    /// The error was caused by input text that is not a valid number.
    Syntax,

    /// The error was caused by an empty value where an initialized one was
    /// required.
    State,

    /// The error was caused by a failure to allocate limbs.
    Resource,
}

struct ErrorImpl {
    code: ErrorCode,
    index: usize,
}

/// This type describes all possible errors that can occur when parsing,
/// growing or combining big integers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// The requested radix is outside of `2..=36`.
    InvalidRadix(u32),

    /// The character is not a digit in the requested radix.
    InvalidDigit(char),

    /// The input has no digits after the optional sign.
    EmptyNumber,

    /// An empty value was passed where one with a limb buffer was required.
    NullTarget,

    /// The limb buffer could not be grown.
    AllocationFailure,
}

impl Error {
    #[cold]
    pub(crate) fn at(code: ErrorCode, index: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, index }),
        }
    }

    #[cold]
    pub(crate) fn invalid_radix(radix: u32) -> Self {
        Error::at(ErrorCode::InvalidRadix(radix), 0)
    }

    #[cold]
    pub(crate) fn null_target() -> Self {
        Error::at(ErrorCode::NullTarget, 0)
    }

    #[cold]
    pub(crate) fn alloc() -> Self {
        Error::at(ErrorCode::AllocationFailure, 0)
    }
}

impl From<alloc::collections::TryReserveError> for Error {
    #[cold]
    fn from(_: alloc::collections::TryReserveError) -> Self {
        Error::alloc()
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorCode::InvalidRadix(radix) => {
                write!(f, "invalid radix {}, expected 2 through 36", radix)
            }
            ErrorCode::InvalidDigit(c) => write!(f, "invalid digit {:?}", c),
            ErrorCode::EmptyNumber => f.write_str("expected at least one digit"),
            ErrorCode::NullTarget => f.write_str("value has no limb buffer"),
            ErrorCode::AllocationFailure => f.write_str("failed to allocate limbs"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.code {
            ErrorCode::InvalidDigit(_) | ErrorCode::EmptyNumber => {
                write!(f, "{} at index {}", self.code, self.index)
            }
            _ => Display::fmt(&self.code, f),
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, index: {})",
            self.err.to_string(),
            self.err.index
        )
    }
}
