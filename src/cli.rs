//! Command line interface for the `netorder` binary.
//!
//! Kept free of crate imports so the build script can render a man page
//! from it.

use clap::{Parser, Subcommand, ValueEnum};

/// Command line arguments for the `netorder` binary.
#[derive(Debug, Parser)]
#[command(
    name = "netorder",
    version,
    about = "Report the native byte order and convert values to and from network order"
)]
pub struct Cli {
    /// How converted values are printed.
    #[arg(short, long, value_enum, default_value_t = Format::Hex, global = true)]
    pub format: Format,

    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations accepted by the binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print whether this host is little- or big-endian.
    Native,
    /// Convert a 16-bit value from host to network order.
    Hton16 {
        /// Decimal or 0x-prefixed hexadecimal value.
        value: String,
    },
    /// Convert a 32-bit value from host to network order.
    Hton32 {
        /// Decimal or 0x-prefixed hexadecimal value.
        value: String,
    },
    /// Convert a 16-bit value from network to host order.
    Ntoh16 {
        /// Decimal or 0x-prefixed hexadecimal value.
        value: String,
    },
    /// Convert a 32-bit value from network to host order.
    Ntoh32 {
        /// Decimal or 0x-prefixed hexadecimal value.
        value: String,
    },
}

/// Output formats selectable with `--format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Zero-padded hexadecimal.
    Hex,
    /// Plain decimal.
    Decimal,
}
