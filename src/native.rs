//! The host's native byte order.
//!
//! [`Native`] is bound to one [`ByteOrder`] implementation at compile time
//! from the target architecture, and [`NATIVE`] describes it. The free
//! functions in this module convert through [`Native`] and are what protocol
//! code should call.

use std::fmt;

use static_assertions::const_assert_eq;

use crate::order::ByteOrder;

/// Byte order of the compilation target.
#[cfg(all(
    target_endian = "little",
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "loongarch64",
        target_arch = "mips64",
        target_arch = "powerpc64",
        target_arch = "riscv64",
        target_arch = "wasm32",
        target_arch = "wasm64",
    )
))]
pub type Native = crate::order::LittleEndianOrder;

/// Byte order of the compilation target.
#[cfg(not(all(
    target_endian = "little",
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "loongarch64",
        target_arch = "mips64",
        target_arch = "powerpc64",
        target_arch = "riscv64",
        target_arch = "wasm32",
        target_arch = "wasm64",
    )
)))]
pub type Native = crate::order::BigEndianOrder;

// A little-endian target outside the list above must not silently get the
// identity conversions.
const_assert_eq!(
    <Native as ByteOrder>::IS_LITTLE_ENDIAN,
    cfg!(target_endian = "little")
);

/// Layout of multi-byte integers in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big => f.write_str("big-endian"),
            Self::Little => f.write_str("little-endian"),
        }
    }
}

/// Read-only description of a [`ByteOrder`] implementation.
///
/// There is no way to construct one that disagrees with its implementation,
/// and no way to change one after construction.
///
/// ```
/// use netorder::{
///     native::NativeOrder,
///     order::{BigEndianOrder, LittleEndianOrder},
/// };
///
/// assert!(NativeOrder::of::<LittleEndianOrder>().is_little_endian());
/// assert!(!NativeOrder::of::<BigEndianOrder>().is_little_endian());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeOrder {
    little_endian: bool,
}

impl NativeOrder {
    /// Describe the byte order implemented by `O`.
    #[must_use]
    pub const fn of<O: ByteOrder>() -> Self {
        Self {
            little_endian: O::IS_LITTLE_ENDIAN,
        }
    }

    /// Whether the described order stores the least significant byte first.
    #[must_use]
    pub const fn is_little_endian(self) -> bool { self.little_endian }

    /// The described order as an [`Endianness`].
    #[must_use]
    pub const fn endianness(self) -> Endianness {
        if self.little_endian {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }
}

impl fmt::Display for NativeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.endianness(), f)
    }
}

/// Descriptor of [`Native`], fixed for the lifetime of the process.
pub const NATIVE: NativeOrder = NativeOrder::of::<Native>();

/// Convert a `u16` from host order to network order.
///
/// # Examples
///
/// ```
/// use netorder::host_to_network_16;
///
/// assert_eq!(host_to_network_16(0x1234).to_ne_bytes(), [0x12, 0x34]);
/// ```
#[must_use]
#[inline]
pub fn host_to_network_16(value: u16) -> u16 { Native::host_to_network_16(value) }

/// Convert a `u32` from host order to network order.
///
/// # Examples
///
/// ```
/// use netorder::host_to_network_32;
///
/// assert_eq!(
///     host_to_network_32(0x1234_5678).to_ne_bytes(),
///     [0x12, 0x34, 0x56, 0x78]
/// );
/// ```
#[must_use]
#[inline]
pub fn host_to_network_32(value: u32) -> u32 { Native::host_to_network_32(value) }

/// Convert a `u16` from network order to host order.
///
/// # Examples
///
/// ```
/// use netorder::network_to_host_16;
///
/// assert_eq!(network_to_host_16(u16::from_ne_bytes([0x12, 0x34])), 0x1234);
/// ```
#[must_use]
#[inline]
pub fn network_to_host_16(value: u16) -> u16 { Native::network_to_host_16(value) }

/// Convert a `u32` from network order to host order.
#[must_use]
#[inline]
pub fn network_to_host_32(value: u32) -> u32 { Native::network_to_host_32(value) }
