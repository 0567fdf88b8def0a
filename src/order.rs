//! Conversions between host and network byte order.
//!
//! [`ByteOrder`] is the single conversion interface. It has exactly two
//! implementations: [`LittleEndianOrder`], which reverses bytes, and
//! [`BigEndianOrder`], whose native layout already matches the wire. The crate
//! binds one of them to [`Native`](crate::native::Native) at compile time;
//! both remain usable directly so either variant can be exercised on any host.
//!
//! Every conversion is total, pure and constant time. Byte reversal uses
//! `swap_bytes`, which lowers to a single data-independent permutation
//! (`bswap`/`rev`/`rev16`), so the functions are safe to apply to values
//! derived from untrusted input.

/// Conversion between a host's native integer layout and network byte order
/// (big-endian).
///
/// Implementations must be branch-free with respect to the converted value.
///
/// # Examples
///
/// ```
/// use netorder::order::{BigEndianOrder, ByteOrder, LittleEndianOrder};
///
/// assert_eq!(LittleEndianOrder::host_to_network_16(0x1234), 0x3412);
/// assert_eq!(BigEndianOrder::host_to_network_16(0x1234), 0x1234);
/// ```
pub trait ByteOrder: Copy + Send + Sync + 'static {
    /// `true` when the least-significant byte is stored at the lowest address.
    const IS_LITTLE_ENDIAN: bool;

    /// Convert a `u16` from host order to network order.
    fn host_to_network_16(value: u16) -> u16;

    /// Convert a `u32` from host order to network order.
    fn host_to_network_32(value: u32) -> u32;

    /// Convert a `u16` from network order to host order.
    fn network_to_host_16(value: u16) -> u16;

    /// Convert a `u32` from network order to host order.
    fn network_to_host_32(value: u32) -> u32;
}

/// Byte order of hosts that store the least-significant byte first.
///
/// Every conversion reverses the bytes of its argument, so each function is
/// its own inverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndianOrder;

impl LittleEndianOrder {
    /// `const` form of [`ByteOrder::host_to_network_16`].
    #[must_use]
    #[inline]
    pub const fn swap16(value: u16) -> u16 { value.swap_bytes() }

    /// `const` form of [`ByteOrder::host_to_network_32`].
    #[must_use]
    #[inline]
    pub const fn swap32(value: u32) -> u32 { value.swap_bytes() }
}

impl ByteOrder for LittleEndianOrder {
    const IS_LITTLE_ENDIAN: bool = true;

    #[inline]
    fn host_to_network_16(value: u16) -> u16 { Self::swap16(value) }

    #[inline]
    fn host_to_network_32(value: u32) -> u32 { Self::swap32(value) }

    #[inline]
    fn network_to_host_16(value: u16) -> u16 { Self::swap16(value) }

    #[inline]
    fn network_to_host_32(value: u32) -> u32 { Self::swap32(value) }
}

/// Byte order of hosts that store the most-significant byte first.
///
/// Native layout already equals network order, so every conversion is the
/// identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndianOrder;

impl ByteOrder for BigEndianOrder {
    const IS_LITTLE_ENDIAN: bool = false;

    #[inline]
    fn host_to_network_16(value: u16) -> u16 { value }

    #[inline]
    fn host_to_network_32(value: u32) -> u32 { value }

    #[inline]
    fn network_to_host_16(value: u16) -> u16 { value }

    #[inline]
    fn network_to_host_32(value: u32) -> u32 { value }
}

#[cfg(test)]
mod tests {
    //! Known-vector tests for both byte order variants.

    use rstest::rstest;

    use super::{BigEndianOrder, ByteOrder, LittleEndianOrder};

    #[rstest]
    #[case::typical(0x1234, 0x3412)]
    #[case::zero(0x0000, 0x0000)]
    #[case::all_set(0xFFFF, 0xFFFF)]
    #[case::palindrome(0x1212, 0x1212)]
    #[case::near_palindrome(0x1221, 0x2112)]
    #[case::low_byte_only(0x00FF, 0xFF00)]
    fn little_endian_swaps_16(#[case] host: u16, #[case] wire: u16) {
        assert_eq!(LittleEndianOrder::host_to_network_16(host), wire);
        assert_eq!(LittleEndianOrder::network_to_host_16(wire), host);
    }

    #[rstest]
    #[case::typical(0x1234_5678, 0x7856_3412)]
    #[case::zero(0x0000_0000, 0x0000_0000)]
    #[case::all_set(0xFFFF_FFFF, 0xFFFF_FFFF)]
    #[case::palindrome(0x1234_3412, 0x1234_3412)]
    #[case::alternating(0x00FF_00FF, 0xFF00_FF00)]
    #[case::single_byte(0x0000_0001, 0x0100_0000)]
    fn little_endian_swaps_32(#[case] host: u32, #[case] wire: u32) {
        assert_eq!(LittleEndianOrder::host_to_network_32(host), wire);
        assert_eq!(LittleEndianOrder::network_to_host_32(wire), host);
    }

    #[rstest]
    #[case(0x0000)]
    #[case(0x1234)]
    #[case(0xFFFF)]
    fn big_endian_is_identity_16(#[case] value: u16) {
        assert_eq!(BigEndianOrder::host_to_network_16(value), value);
        assert_eq!(BigEndianOrder::network_to_host_16(value), value);
    }

    #[rstest]
    #[case(0x0000_0000)]
    #[case(0x1234_5678)]
    #[case(0xFFFF_FFFF)]
    fn big_endian_is_identity_32(#[case] value: u32) {
        assert_eq!(BigEndianOrder::host_to_network_32(value), value);
        assert_eq!(BigEndianOrder::network_to_host_32(value), value);
    }

    #[test]
    fn descriptors_report_their_layout() {
        assert!(LittleEndianOrder::IS_LITTLE_ENDIAN);
        assert!(!BigEndianOrder::IS_LITTLE_ENDIAN);
    }

    #[test]
    fn const_swaps_usable_at_compile_time() {
        const WIRE: u32 = LittleEndianOrder::swap32(0x1234_5678);
        assert_eq!(WIRE, 0x7856_3412);
    }
}
