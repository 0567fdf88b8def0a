//! Error type for textual value input.
//!
//! Byte order conversions are total and never fail. The only fallible path
//! in the crate is turning user-supplied text into an integer of a given
//! width, which reports a [`ValueError`].

use std::fmt;

use crate::config::Width;

/// Failure to parse a value for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The input was empty once separators were stripped.
    Empty {
        /// Width the value was requested at.
        width: Width,
    },
    /// The input was not a decimal or `0x`-prefixed hexadecimal integer.
    ///
    /// Signs are rejected, including the `+` that [`str::parse`] accepts.
    Invalid {
        /// The rejected input.
        input: String,
        /// Width the value was requested at.
        width: Width,
    },
    /// The value is well formed but does not fit in the requested width,
    /// however many digits it has.
    OutOfRange {
        /// The rejected input, trimmed.
        input: String,
        /// Width the value was requested at.
        width: Width,
    },
}

impl ValueError {
    /// Width the failed value was requested at.
    #[must_use]
    pub fn width(&self) -> Width {
        match self {
            Self::Empty { width } | Self::Invalid { width, .. } | Self::OutOfRange { width, .. } => {
                *width
            }
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width } => write!(f, "empty {width} value"),
            Self::Invalid { input, width, .. } => write!(f, "invalid {width} value {input:?}"),
            Self::OutOfRange { input, width } => write!(
                f,
                "value {input} does not fit in {width} (max {max})",
                max = width.max()
            ),
        }
    }
}

impl std::error::Error for ValueError {}

/// Result alias for fallible value input.
pub type Result<T> = std::result::Result<T, ValueError>;
