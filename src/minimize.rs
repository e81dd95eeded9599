//! Complete minimization flow
//!
//! ```
//! use primecover::{minimize, Config};
//!
//! // f(x, y) = 1 for minterms 1, 2 and 3
//! let config = Config::new(2).unwrap();
//! let result = minimize(&[1, 2, 3], &[], &config).unwrap();
//! assert!(!result.is_cyclic());
//! assert_eq!(result.sum_of_products(), "y + x");
//! ```

use itertools::Itertools;

use crate::chart::Chart;
use crate::config::{Config, VariableNames};
use crate::error::{Error, Result};
use crate::petrick::{reduce, Outcome, ReductionStats};
use crate::qmc::{execute_qmc, initial_list, MergeStats};
use crate::term::Term;

/// Result of the minimization of a function
#[derive(Clone, Debug)]
pub struct Minimization {
    nb_variables: usize,
    names: VariableNames,
    primes: Vec<Term>,
    essentials: Vec<Term>,
    outcome: Outcome,
    merge_stats: MergeStats,
    reduction_stats: ReductionStats,
}

impl Minimization {
    /// Number of variables of the function
    pub fn nb_variables(&self) -> usize {
        self.nb_variables
    }

    /// Display names of the variables
    pub fn names(&self) -> &VariableNames {
        &self.names
    }

    /// Prime implicants, in canonical order
    pub fn primes(&self) -> &[Term] {
        &self.primes
    }

    /// Essential implicants, in extraction order
    ///
    /// When the chart is not cyclic, they form a cover of the function.
    pub fn essentials(&self) -> &[Term] {
        &self.essentials
    }

    /// Final state of the chart
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns true if some constraints could not be covered by essential implicants
    pub fn is_cyclic(&self) -> bool {
        matches!(self.outcome, Outcome::Cyclic(_))
    }

    /// The part of the chart that could not be reduced, if any
    pub fn cyclic_chart(&self) -> Option<&Chart> {
        match &self.outcome {
            Outcome::Cyclic(chart) => Some(chart),
            Outcome::Reduced => None,
        }
    }

    /// Statistics of the merge phase
    pub fn merge_stats(&self) -> MergeStats {
        self.merge_stats
    }

    /// Statistics of the chart reduction
    pub fn reduction_stats(&self) -> ReductionStats {
        self.reduction_stats
    }

    /// Sum of the essential implicants as products of literals
    ///
    /// Products are separated by `" + "`, or by `" +\n"` from 8 variables up.
    /// An empty sum renders as `0`.
    pub fn sum_of_products(&self) -> String {
        if self.essentials.is_empty() {
            return "0".to_string();
        }
        let sep = if self.nb_variables < 8 { " + " } else { " +\n" };
        // The configuration holds at least one name per variable
        self.essentials
            .iter()
            .map(|t| t.product_string(&self.names, self.nb_variables))
            .join(sep)
    }
}

/// Check the minterms against the configuration and convert them to positional cubes
pub fn to_terms(minterms: &[u32], config: &Config) -> Result<Vec<Term>> {
    let mut ret = Vec::new();
    ret.try_reserve(minterms.len())?;
    for m in minterms {
        if *m >= config.nb_minterms() {
            return Err(Error::MintermOutOfRange {
                minterm: *m,
                nb_variables: config.nb_variables(),
            });
        }
        ret.push(Term::from_minterm(*m, config.nb_variables()));
    }
    Ok(ret)
}

/// Prime implicants of the function that cover at least one on-set minterm
pub fn prime_implicants(
    on_set: &[u32],
    dont_cares: &[u32],
    config: &Config,
) -> Result<Vec<Term>> {
    let on = to_terms(on_set, config)?;
    let dc = to_terms(dont_cares, config)?;
    crate::qmc::prime_implicants(&on, &dc)
}

/// Minimize a function given by its on-set and don't-care minterms
pub fn minimize(on_set: &[u32], dont_cares: &[u32], config: &Config) -> Result<Minimization> {
    let on = to_terms(on_set, config)?;
    let dc = to_terms(dont_cares, config)?;

    let mut implicants = initial_list(&on, &dc)?;
    let merge_stats = execute_qmc(&mut implicants)?;
    let primes = implicants.terms();

    // Constraints in the same order as the merge phase
    let constraints = initial_list(&on, &[])?.terms();
    let chart = Chart::new(&constraints, &primes)?;
    let reduction = reduce(chart)?;

    Ok(Minimization {
        nb_variables: config.nb_variables(),
        names: config.names().clone(),
        primes,
        essentials: reduction.essentials,
        outcome: reduction.outcome,
        merge_stats,
        reduction_stats: reduction.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_variables() {
        let config = Config::new(2).unwrap();
        let res = minimize(&[1, 2, 3], &[], &config).unwrap();
        assert_eq!(res.primes().len(), 2);
        assert_eq!(res.essentials(), res.primes());
        assert!(!res.is_cyclic());
        assert!(res.cyclic_chart().is_none());
        assert_eq!(res.sum_of_products(), "y + x");
    }

    #[test]
    fn test_out_of_range() {
        let config = Config::new(3).unwrap();
        assert!(matches!(
            minimize(&[1, 8], &[], &config),
            Err(Error::MintermOutOfRange {
                minterm: 8,
                nb_variables: 3
            })
        ));
        assert!(minimize(&[1], &[9], &config).is_err());
    }

    #[test]
    fn test_empty() {
        let config = Config::new(3).unwrap();
        let res = minimize(&[], &[1, 2], &config).unwrap();
        assert!(res.primes().is_empty());
        assert!(res.essentials().is_empty());
        assert!(!res.is_cyclic());
        assert_eq!(res.sum_of_products(), "0");
    }

    #[test]
    fn test_tautology() {
        let config = Config::new(2).unwrap();
        let res = minimize(&[0, 1, 2, 3], &[], &config).unwrap();
        assert_eq!(res.essentials(), &[Term::default()]);
        assert_eq!(res.sum_of_products(), "1");
    }

    #[test]
    fn test_dont_cares() {
        // f = x'y'z' + x'yz' with don't-cares on the other z' minterms: f = z'
        let config = Config::new(3).unwrap();
        let res = minimize(&[0, 2], &[4, 6], &config).unwrap();
        assert_eq!(res.sum_of_products(), "z'");
    }

    #[test]
    fn test_cyclic() {
        let config = Config::new(3).unwrap();
        let res = minimize(&[0, 1, 2, 5, 6, 7], &[], &config).unwrap();
        assert!(res.is_cyclic());
        assert_eq!(res.primes().len(), 6);
        let chart = res.cyclic_chart().unwrap();
        assert_eq!(chart.nb_live_columns(), 6);
    }

    #[test]
    fn test_separator() {
        let config = Config::new(8).unwrap();
        let res = minimize(&[0, 255], &[], &config).unwrap();
        assert_eq!(
            res.sum_of_products(),
            "x'y'z'w't'a'b'c' +\nxyzwtabc"
        );
    }

    #[test]
    fn test_names() {
        let config = Config::new(2)
            .unwrap()
            .with_names(VariableNames::new(["A", "B"]))
            .unwrap();
        let res = minimize(&[2, 3], &[], &config).unwrap();
        assert_eq!(res.sum_of_products(), "A");
    }
}
