//! Output configuration for the `netorder` tool.
//!
//! This module defines the integer widths the tool converts and the formats
//! it prints results in.

use std::fmt;

/// Width of a converted integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// `u16` values.
    Bits16,
    /// `u32` values.
    Bits32,
}

impl Width {
    /// Number of bits in a value of this width.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Width::Bits16 => u16::BITS,
            Width::Bits32 => u32::BITS,
        }
    }

    /// Number of hexadecimal digits needed to print any value of this width.
    #[must_use]
    pub const fn hex_digits(self) -> usize {
        match self {
            Width::Bits16 => 4,
            Width::Bits32 => 8,
        }
    }

    /// Largest value representable at this width.
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Width::Bits16 => u16::MAX as u32,
            Width::Bits32 => u32::MAX,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "u{}", self.bits()) }
}

/// Formats the tool can print converted values in.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Zero-padded hexadecimal with a `0x` prefix.
    Hex,
    /// Plain decimal.
    Decimal,
}

impl OutputFormat {
    /// The default format (currently [`Hex`](OutputFormat::Hex)).
    pub const DEFAULT: OutputFormat = OutputFormat::Hex;

    /// Render `value` as a string of the given width.
    ///
    /// ```
    /// use netorder::config::{OutputFormat, Width};
    ///
    /// assert_eq!(OutputFormat::Hex.render(0x12, Width::Bits16), "0x0012");
    /// assert_eq!(OutputFormat::Decimal.render(0x12, Width::Bits16), "18");
    /// ```
    #[must_use]
    pub fn render(self, value: u32, width: Width) -> String {
        match self {
            OutputFormat::Hex => format!("0x{value:0digits$X}", digits = width.hex_digits()),
            OutputFormat::Decimal => value.to_string(),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self { OutputFormat::DEFAULT }
}
