//! Function generators and templates
//!
//! Functions are returned as a pair of on-set and don't-care minterm lists.

/// Random functions
pub mod random {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::error::{Error, Result};

    /// A random function where each minterm is in the on-set with probability `on_ratio`,
    /// else a don't-care with probability `dc_ratio`
    ///
    /// Fails if a ratio is not between 0 and 1.
    pub fn random_function(
        nb_vars: usize,
        on_ratio: f64,
        dc_ratio: f64,
        seed: u64,
    ) -> Result<(Vec<u32>, Vec<u32>)> {
        for ratio in [on_ratio, dc_ratio] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(Error::InvalidRatio(ratio));
            }
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut on_set = Vec::new();
        let mut dont_cares = Vec::new();
        for m in 0u32..(1 << nb_vars) {
            if rng.gen_bool(on_ratio) {
                on_set.push(m);
            } else if rng.gen_bool(dc_ratio) {
                dont_cares.push(m);
            }
        }
        Ok((on_set, dont_cares))
    }
}

/// Simple functions with known minimal covers, to test functionality
pub mod testcases {
    /// Odd parity: no two minterms are adjacent, every minterm is an essential implicant
    pub fn parity(nb_vars: usize) -> (Vec<u32>, Vec<u32>) {
        let on_set = (0u32..(1 << nb_vars))
            .filter(|m| m.count_ones() % 2 == 1)
            .collect();
        (on_set, Vec::new())
    }

    /// Majority: one implicant per pair of variables
    pub fn majority(nb_vars: usize) -> (Vec<u32>, Vec<u32>) {
        let on_set = (0u32..(1 << nb_vars))
            .filter(|m| 2 * m.count_ones() as usize > nb_vars)
            .collect();
        (on_set, Vec::new())
    }

    /// Classic function of 3 variables whose chart is cyclic
    pub fn cyclic() -> (Vec<u32>, Vec<u32>) {
        (vec![0, 1, 2, 5, 6, 7], Vec::new())
    }

    /// A single minterm, with every other minterm of the first half as don't-care
    pub fn half_dont_care(nb_vars: usize) -> (Vec<u32>, Vec<u32>) {
        let half = 1u32 << (nb_vars - 1);
        (vec![0], (1..half).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{random, testcases};
    use crate::error::Error;

    #[test]
    fn test_random() {
        for nb_vars in 1..8 {
            let (on, dc) = random::random_function(nb_vars, 0.4, 0.3, 1).unwrap();
            assert!(on.iter().all(|m| *m < 1 << nb_vars));
            assert!(dc.iter().all(|m| !on.contains(m)));
            assert_eq!(
                (on, dc),
                random::random_function(nb_vars, 0.4, 0.3, 1).unwrap()
            );
        }
        let (on, dc) = random::random_function(4, 1.0, 0.0, 2).unwrap();
        assert_eq!(on.len(), 16);
        assert!(dc.is_empty());
    }

    #[test]
    fn test_invalid_ratio() {
        assert!(matches!(
            random::random_function(3, 1.5, 0.2, 1),
            Err(Error::InvalidRatio(r)) if r == 1.5
        ));
        assert!(matches!(
            random::random_function(3, 0.4, -0.1, 1),
            Err(Error::InvalidRatio(_))
        ));
        assert!(random::random_function(3, f64::NAN, 0.2, 1).is_err());
    }

    #[test]
    fn test_testcases() {
        assert_eq!(testcases::parity(3).0, vec![1, 2, 4, 7]);
        assert_eq!(testcases::majority(3).0, vec![3, 5, 6, 7]);
        assert_eq!(testcases::half_dont_care(3).1, vec![1, 2, 3]);
        assert_eq!(testcases::cyclic().0.len(), 6);
    }
}
