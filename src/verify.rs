//! Check that a cover implements a function
//!
//! ```
//! use primecover::{minimize, Config};
//! use primecover::verify::check_cover;
//!
//! let config = Config::new(3).unwrap();
//! let result = minimize(&[0, 2, 7], &[6], &config).unwrap();
//! let check = check_cover(result.essentials(), &[0, 2, 7], &[6], 3).unwrap();
//! assert!(check.is_ok());
//! ```

use volute::Lut;

use crate::error::{Error, Result};
use crate::term::Term;

/// Truth table of a sum of implicants
pub fn cover_function(cover: &[Term], nb_vars: usize) -> Lut {
    let mut lut = Lut::zero(nb_vars);
    for t in cover {
        for m in t.minterms(nb_vars) {
            lut.set_value(m as usize, true);
        }
    }
    lut
}

/// Differences between a cover and the function it should implement
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverCheck {
    /// On-set minterms not covered
    pub missing: Vec<u32>,
    /// Off-set minterms covered
    pub spurious: Vec<u32>,
}

impl CoverCheck {
    /// Returns true if the cover implements the function
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.spurious.is_empty()
    }
}

/// Truth table holding the given minterms
fn minterm_function(minterms: &[u32], nb_vars: usize) -> Result<Lut> {
    let mut lut = Lut::zero(nb_vars);
    for m in minterms {
        if *m as usize >= lut.num_bits() {
            return Err(Error::MintermOutOfRange {
                minterm: *m,
                nb_variables: nb_vars,
            });
        }
        lut.set_value(*m as usize, true);
    }
    Ok(lut)
}

/// Compare a cover to the function given by its on-set and don't-care minterms
///
/// Don't-care minterms may be covered or not. Fails if a minterm does not fit in `nb_vars`
/// variables.
pub fn check_cover(
    cover: &[Term],
    on_set: &[u32],
    dont_cares: &[u32],
    nb_vars: usize,
) -> Result<CoverCheck> {
    let expected = minterm_function(on_set, nb_vars)?;
    let free = minterm_function(dont_cares, nb_vars)?;
    let lut = cover_function(cover, nb_vars);
    let mut ret = CoverCheck::default();
    for mask in 0..lut.num_bits() {
        if free.value(mask) && !expected.value(mask) {
            continue;
        }
        match (expected.value(mask), lut.value(mask)) {
            (true, false) => ret.missing.push(mask as u32),
            (false, true) => ret.spurious.push(mask as u32),
            _ => (),
        }
    }
    Ok(ret)
}
