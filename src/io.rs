//! Read minterm files and write minimization reports

mod minterms;
mod report;

use std::fs::File;
use std::path::Path;

pub use minterms::{read_minterms, write_minterms};
pub use report::{write_implicants, write_minimization};

use crate::error::Result;
use crate::logging::targets;

/// Read a list of minterms from a file
pub fn read_minterm_file(path: &Path) -> Result<Vec<u32>> {
    log::info!(target: targets::IO, "Reading minterms from {}", path.display());
    let f = File::open(path)?;
    read_minterms(f)
}

/// Write a list of minterms to a file
pub fn write_minterm_file(path: &Path, minterms: &[u32]) -> Result<()> {
    let mut f = File::create(path)?;
    write_minterms(&mut f, minterms)?;
    Ok(())
}
