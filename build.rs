//! Build script rendering the `netorder(1)` man page from the CLI definition.
//!
//! The page lands in `<target dir>/generated-man/netorder.1`, honouring
//! `CARGO_TARGET_DIR` when it is set.

use std::{
    env,
    fs,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli.rs"]
#[allow(dead_code, reason = "only the command definition is needed here")]
mod cli;

fn man_dir(manifest_dir: &Path) -> PathBuf {
    let target_dir = env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .map_or_else(|| manifest_dir.join("target"), |dir| manifest_dir.join(dir));
    target_dir.join("generated-man")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=CARGO_TARGET_DIR");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = man_dir(&manifest_dir);
    fs::create_dir_all(&out_dir)?;

    let mut page = Vec::new();
    Man::new(cli::Cli::command()).render(&mut page)?;
    fs::write(out_dir.join("netorder.1"), page)?;
    println!("cargo:rustc-env=NETORDER_MAN_PAGE={}", out_dir.join("netorder.1").display());

    Ok(())
}
