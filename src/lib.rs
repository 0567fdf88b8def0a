#![doc(html_root_url = "https://docs.rs/netorder/latest")]
//! Public API for the `netorder` library.
//!
//! This crate converts 16- and 32-bit integers between host byte order and
//! network byte order (big-endian), and reports which order the host uses.
//! The conversion implementation is chosen once, at compile time, from the
//! target architecture.
//!
//! ```
//! use netorder::{NATIVE, host_to_network_32, network_to_host_32};
//!
//! let wire = host_to_network_32(0x1234_5678);
//! assert_eq!(wire.to_ne_bytes(), [0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(network_to_host_32(wire), 0x1234_5678);
//! assert_eq!(NATIVE.is_little_endian(), cfg!(target_endian = "little"));
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod native;
pub mod order;

pub use error::{Result, ValueError};
pub use native::{
    Endianness,
    NATIVE,
    Native,
    NativeOrder,
    host_to_network_16,
    host_to_network_32,
    network_to_host_16,
    network_to_host_32,
};
pub use order::{BigEndianOrder, ByteOrder, LittleEndianOrder};
