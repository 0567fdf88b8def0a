//! `netorder` binary.
//!
//! Reports the native byte order or converts a single value given on the
//! command line.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use netorder::{
    command::{self, Conversion},
    config::OutputFormat,
};

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only the converted value.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = cli::Cli::parse();
    let format = match cli.format {
        cli::Format::Hex => OutputFormat::Hex,
        cli::Format::Decimal => OutputFormat::Decimal,
    };
    let (conversion, value) = match cli.command {
        cli::Command::Native => {
            println!("{}", command::describe_native());
            return ExitCode::SUCCESS;
        }
        cli::Command::Hton16 { value } => (Conversion::HostToNetwork16, value),
        cli::Command::Hton32 { value } => (Conversion::HostToNetwork32, value),
        cli::Command::Ntoh16 { value } => (Conversion::NetworkToHost16, value),
        cli::Command::Ntoh32 { value } => (Conversion::NetworkToHost32, value),
    };

    match command::run(conversion, &value, format) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
