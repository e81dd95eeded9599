//! Run parameters: number of variables and their display names

use crate::error::{Error, Result};
use crate::term::{MAX_VARIABLES, MIN_VARIABLES};

/// Default display symbols, most significant variable first
const DEFAULT_NAMES: [&str; 16] = [
    "x", "y", "z", "w", "t", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k",
];

/// Ordered display symbols for the variables
///
/// The first name is used for the most significant variable of the minterms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableNames {
    names: Vec<String>,
}

impl VariableNames {
    /// Create a table from explicit names
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> VariableNames {
        VariableNames {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a table with one single-character name per character of the string
    pub fn from_chars(s: &str) -> VariableNames {
        VariableNames::new(s.chars().filter(|c| !c.is_whitespace()).map(String::from))
    }

    /// Number of names available
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there is no name
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the i-th variable, starting from the most significant
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }
}

impl Default for VariableNames {
    fn default() -> Self {
        VariableNames::new(DEFAULT_NAMES)
    }
}

/// Configuration of a minimization run
#[derive(Clone, Debug)]
pub struct Config {
    nb_variables: usize,
    names: VariableNames,
}

impl Config {
    /// Create a configuration for a function of `nb_variables` inputs, with the default names
    pub fn new(nb_variables: usize) -> Result<Config> {
        if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&nb_variables) {
            return Err(Error::InvalidVariableCount(nb_variables));
        }
        Ok(Config {
            nb_variables,
            names: VariableNames::default(),
        })
    }

    /// Replace the display names
    pub fn with_names(mut self, names: VariableNames) -> Result<Config> {
        if names.len() < self.nb_variables {
            return Err(Error::NotEnoughNames {
                expected: self.nb_variables,
                got: names.len(),
            });
        }
        self.names = names;
        Ok(self)
    }

    /// Number of input variables
    pub fn nb_variables(&self) -> usize {
        self.nb_variables
    }

    /// Display names of the variables
    pub fn names(&self) -> &VariableNames {
        &self.names
    }

    /// Number of minterms of the function
    pub fn nb_minterms(&self) -> u32 {
        1 << self.nb_variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_count() {
        assert!(Config::new(0).is_err());
        assert!(Config::new(1).is_ok());
        assert!(Config::new(15).is_ok());
        assert!(matches!(
            Config::new(16),
            Err(Error::InvalidVariableCount(16))
        ));
        assert_eq!(Config::new(4).unwrap().nb_minterms(), 16);
    }

    #[test]
    fn test_names() {
        let names = VariableNames::from_chars("a b c");
        assert_eq!(names.len(), 3);
        assert_eq!(names.name(2), "c");
        assert!(Config::new(3).unwrap().with_names(names.clone()).is_ok());
        assert!(matches!(
            Config::new(4).unwrap().with_names(names),
            Err(Error::NotEnoughNames {
                expected: 4,
                got: 3
            })
        ));
        assert_eq!(VariableNames::default().name(0), "x");
    }
}
