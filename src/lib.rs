//! Exact two-level logic minimization
//!
//! This crate minimizes boolean functions of up to 15 variables, given by their on-set and
//! don't-care minterms, into a sum of products.
//!
//! # Usage
//!
//! Primecover generates all [prime implicants](https://en.wikipedia.org/wiki/Implicant) with the
//! [Quine-McCluskey method](https://en.wikipedia.org/wiki/Quine%E2%80%93McCluskey_algorithm),
//! then reduces the prime implicant chart in the manner of
//! [Petrick's method](https://en.wikipedia.org/wiki/Petrick%27s_method): essential implicants,
//! row dominance and column dominance.
//! When the chart is cyclic, the remaining part is reported instead of being solved.
//!
//! ```bash
//! # Show available commands
//! primecover help
//! # Minimize a function of 4 variables, with on-set and don't-care minterms in two files
//! primecover min on.txt -d dc.txt -n 4
//! # Show its prime implicants
//! primecover primes on.txt -d dc.txt -n 4
//! # Minimize random functions and check the results
//! primecover stress -n 6 --count 1000
//! ```
//!
//! # Library
//!
//! The whole flow is available through [`minimize`]:
//! ```
//! use primecover::{minimize, Config};
//!
//! // f(x, y, z) = 1 for minterms 0, 2 and 7, with 6 as don't-care
//! let config = Config::new(3).unwrap();
//! let result = minimize(&[0, 2, 7], &[6], &config).unwrap();
//! assert_eq!(result.sum_of_products(), "x'z' + xy");
//! ```
//!
//! ## Datastructures
//!
//! A [`Term`] is a positional cube, with two bits per variable packed in a single integer.
//! During the merge phase, all terms live in a single [`list::TermList`], ordered by number of
//! literals then by number of ones, and flagged as essential or don't-care.
//! The [`Chart`] is a boolean matrix whose rows and columns are removed by liveness flags.
//!
//! Logging goes through the `log` crate, with one target per phase: see [`logging::targets`].

#![warn(missing_docs)]

pub mod chart;
pub mod config;
pub mod error;
pub mod generators;
pub mod io;
pub mod list;
pub mod logging;
pub mod minimize;
pub mod petrick;
pub mod qmc;
pub mod term;
pub mod verify;

pub use chart::Chart;
pub use config::{Config, VariableNames};
pub use error::{Error, Result};
pub use minimize::{minimize, prime_implicants, Minimization};
pub use petrick::Outcome;
pub use term::{Literal, Term};
