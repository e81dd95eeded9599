//! IO for minterm lists

use std::io::{BufRead, BufReader, Read, Write};

use crate::error::{Error, Result};
use crate::logging::targets;

/// Read a list of minterms
///
/// Minterms are natural numbers separated by whitespace, on one or several lines.
/// Everything after a `#` is a comment:
/// ```text
///     # On-set of f
///     0 1 2
///     5
///     6 7  # last line
/// ```
pub fn read_minterms<R: Read>(r: R) -> Result<Vec<u32>> {
    let mut ret = Vec::new();
    for (i, l) in BufReader::new(r).lines().enumerate() {
        let s = l?;
        let t = s.split('#').next().unwrap_or_default();
        for token in t.split_whitespace() {
            let m = token.parse::<u32>().map_err(|_| Error::Parse {
                line: i + 1,
                token: token.to_string(),
            })?;
            ret.push(m);
        }
    }
    log::debug!(target: targets::IO, "Read {} minterms", ret.len());
    Ok(ret)
}

/// Write a list of minterms, one per line
pub fn write_minterms<W: Write>(w: &mut W, minterms: &[u32]) -> std::io::Result<()> {
    for m in minterms {
        writeln!(w, "{m}")?;
    }
    Ok(())
}
