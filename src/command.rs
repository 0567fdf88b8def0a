//! Operations exposed by the `netorder` tool.
//!
//! The binary parses its arguments into a [`Conversion`] and hands the raw
//! value text to [`run`], which parses, converts through the native byte
//! order and renders the result.

use tracing::{debug, warn};

use crate::{
    config::{OutputFormat, Width},
    error::{Result, ValueError},
    native::{
        NATIVE,
        host_to_network_16,
        host_to_network_32,
        network_to_host_16,
        network_to_host_32,
    },
};

/// A single byte order conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// [`host_to_network_16`].
    HostToNetwork16,
    /// [`host_to_network_32`].
    HostToNetwork32,
    /// [`network_to_host_16`].
    NetworkToHost16,
    /// [`network_to_host_32`].
    NetworkToHost32,
}

impl Conversion {
    /// Every conversion, in declaration order.
    pub const ALL: [Conversion; 4] = [
        Conversion::HostToNetwork16,
        Conversion::HostToNetwork32,
        Conversion::NetworkToHost16,
        Conversion::NetworkToHost32,
    ];

    /// Width of the values this conversion operates on.
    #[must_use]
    pub const fn width(self) -> Width {
        match self {
            Conversion::HostToNetwork16 | Conversion::NetworkToHost16 => Width::Bits16,
            Conversion::HostToNetwork32 | Conversion::NetworkToHost32 => Width::Bits32,
        }
    }

    /// Short name used on the command line and in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Conversion::HostToNetwork16 => "hton16",
            Conversion::HostToNetwork32 => "hton32",
            Conversion::NetworkToHost16 => "ntoh16",
            Conversion::NetworkToHost32 => "ntoh32",
        }
    }

    /// Apply the conversion to a value already checked against [`width`].
    ///
    /// 16-bit conversions read and return only the low half of `value`, so
    /// callers outside this module go through [`run`] and [`parse_value`].
    ///
    /// [`width`]: Conversion::width
    #[must_use]
    pub(crate) fn apply(self, value: u32) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "16-bit conversions operate on the low half only."
        )]
        let low = value as u16;
        match self {
            Conversion::HostToNetwork16 => u32::from(host_to_network_16(low)),
            Conversion::HostToNetwork32 => host_to_network_32(value),
            Conversion::NetworkToHost16 => u32::from(network_to_host_16(low)),
            Conversion::NetworkToHost32 => network_to_host_32(value),
        }
    }
}

/// Parse `input` as an unsigned integer that fits in `width`.
///
/// Accepts decimal or `0x`/`0X`-prefixed hexadecimal. Surrounding whitespace
/// and `_` digit separators are ignored.
///
/// # Errors
///
/// Returns a [`ValueError`] when the input is empty, malformed or too large
/// for `width`.
///
/// # Examples
///
/// ```
/// use netorder::{command::parse_value, config::Width};
///
/// assert_eq!(parse_value("0x1234", Width::Bits16), Ok(0x1234));
/// assert_eq!(parse_value("65_535", Width::Bits16), Ok(0xFFFF));
/// assert!(parse_value("65536", Width::Bits16).is_err());
/// ```
pub fn parse_value(input: &str, width: Width) -> Result<u32> {
    let cleaned = input.trim().replace('_', "");
    let (digits, radix) = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (cleaned.as_str(), 10),
    };
    if digits.is_empty() {
        return Err(ValueError::Empty { width });
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ValueError::Invalid {
            input: input.to_owned(),
            width,
        });
    }

    // Only overflow is left to fail once every digit is valid for the radix.
    u32::from_str_radix(digits, radix)
        .ok()
        .filter(|value| *value <= width.max())
        .ok_or_else(|| ValueError::OutOfRange {
            input: input.trim().to_owned(),
            width,
        })
}

/// Human-readable description of the native byte order.
#[must_use]
pub fn describe_native() -> String { format!("native byte order: {NATIVE}") }

/// Parse `input`, apply `conversion` and render the result in `format`.
///
/// # Errors
///
/// Returns a [`ValueError`] if `input` cannot be parsed at the conversion's
/// width.
pub fn run(conversion: Conversion, input: &str, format: OutputFormat) -> Result<String> {
    let width = conversion.width();
    let value = parse_value(input, width).inspect_err(|error| {
        warn!(conversion = conversion.name(), %error, "rejected input value");
    })?;
    let output = conversion.apply(value);
    debug!(
        conversion = conversion.name(),
        input = value,
        output,
        native = %NATIVE,
        "converted value"
    );
    Ok(format.render(output, width))
}
