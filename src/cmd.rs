//! Command line interface

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kdam::{tqdm, BarExt};

use primecover::generators::random::random_function;
use primecover::io::{read_minterm_file, write_implicants, write_minimization};
use primecover::verify::check_cover;
use primecover::{
    minimize, prime_implicants, Config, Error, Minimization, Result, Term, VariableNames,
};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Command line arguments
#[derive(Subcommand)]
pub enum Commands {
    /// Minimize a boolean function
    ///
    /// The function is given by a file of on-set minterms and an optional file of
    /// don't-care minterms, as natural numbers separated by whitespace:
    ///    0 1 2
    ///    5 6 7
    ///
    /// Prints the essential implicants, the cyclic part of the chart if any,
    /// and the sum-of-products form.
    #[clap(alias = "min")]
    Minimize(MinimizeArgs),

    /// Show the prime implicants of a boolean function
    #[clap()]
    Primes(PrimesArgs),

    /// Minimize random functions and check the results
    ///
    /// Each cover is compared to the truth table of its function. The command fails
    /// if any cover is incorrect.
    #[clap()]
    Stress(StressArgs),
}

/// Read the configuration and the function from the command line
fn read_function(
    nb_variables: usize,
    names: Option<&str>,
    on_file: &Path,
    dc_file: Option<&Path>,
) -> Result<(Config, Vec<u32>, Vec<u32>)> {
    let mut config = Config::new(nb_variables)?;
    if let Some(s) = names {
        config = config.with_names(VariableNames::from_chars(s))?;
    }
    let on_set = read_minterm_file(on_file)?;
    let dont_cares = match dc_file {
        Some(f) => read_minterm_file(f)?,
        None => Vec::new(),
    };
    Ok((config, on_set, dont_cares))
}

/// Implicants that still cover the function when the chart is cyclic
fn complete_cover(res: &Minimization) -> Vec<Term> {
    let mut cover = res.essentials().to_vec();
    if let Some(chart) = res.cyclic_chart() {
        cover.extend(chart.live_implicants());
    }
    cover
}

/// Check a cover against the function, failing with the minterms in error
fn check_function(
    cover: &[Term],
    on_set: &[u32],
    dont_cares: &[u32],
    nb_vars: usize,
) -> Result<()> {
    let check = check_cover(cover, on_set, dont_cares, nb_vars)?;
    if check.is_ok() {
        Ok(())
    } else {
        Err(Error::IncorrectCover {
            missing: check.missing,
            spurious: check.spurious,
        })
    }
}

/// Command arguments for minimization
#[derive(Args)]
pub struct MinimizeArgs {
    /// File of on-set minterms
    on_file: PathBuf,

    /// File of don't-care minterms
    #[arg(short = 'd', long)]
    dc_file: Option<PathBuf>,

    /// Number of variables, from 1 to 15
    #[arg(short = 'n', long)]
    nb_variables: usize,

    /// Single-character variable names, most significant variable first
    #[arg(long)]
    names: Option<String>,

    /// Check the result against the truth table of the function
    #[arg(long)]
    check: bool,
}

impl MinimizeArgs {
    pub fn run(&self) -> Result<()> {
        let (config, on_set, dont_cares) = read_function(
            self.nb_variables,
            self.names.as_deref(),
            &self.on_file,
            self.dc_file.as_deref(),
        )?;
        let res = minimize(&on_set, &dont_cares, &config)?;
        let mut out = std::io::stdout().lock();
        write_minimization(&mut out, &res)?;
        if self.check {
            check_function(
                &complete_cover(&res),
                &on_set,
                &dont_cares,
                config.nb_variables(),
            )?;
            writeln!(out, "\nCover is correct")?;
        }
        Ok(())
    }
}

/// Command arguments for prime implicant generation
#[derive(Args)]
pub struct PrimesArgs {
    /// File of on-set minterms
    on_file: PathBuf,

    /// File of don't-care minterms
    #[arg(short = 'd', long)]
    dc_file: Option<PathBuf>,

    /// Number of variables, from 1 to 15
    #[arg(short = 'n', long)]
    nb_variables: usize,

    /// Single-character variable names, most significant variable first
    #[arg(long)]
    names: Option<String>,
}

impl PrimesArgs {
    pub fn run(&self) -> Result<()> {
        let (config, on_set, dont_cares) = read_function(
            self.nb_variables,
            self.names.as_deref(),
            &self.on_file,
            self.dc_file.as_deref(),
        )?;
        let primes = prime_implicants(&on_set, &dont_cares, &config)?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "Prime implicants:")?;
        write_implicants(&mut out, &primes, config.nb_variables(), config.names())?;
        Ok(())
    }
}

/// Command arguments for random testing
#[derive(Args)]
pub struct StressArgs {
    /// Number of variables, from 1 to 15
    #[arg(short = 'n', long)]
    nb_variables: usize,

    /// Number of random functions
    #[arg(short = 'c', long, default_value_t = 100)]
    count: usize,

    /// Probability for a minterm to be in the on-set
    #[arg(long, default_value_t = 0.4)]
    on_ratio: f64,

    /// Probability for a minterm outside the on-set to be a don't-care
    #[arg(long, default_value_t = 0.2)]
    dc_ratio: f64,

    /// Seed of the first function
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

impl StressArgs {
    pub fn run(&self) -> Result<()> {
        let config = Config::new(self.nb_variables)?;
        let mut nb_cyclic = 0;
        let mut nb_failed = 0;
        let mut progress = tqdm!(total = self.count);
        progress.set_description("Functions checked");
        for i in 0..self.count {
            let seed = self.seed + i as u64;
            let (on_set, dont_cares) =
                random_function(self.nb_variables, self.on_ratio, self.dc_ratio, seed)?;
            let res = minimize(&on_set, &dont_cares, &config)?;
            if res.is_cyclic() {
                nb_cyclic += 1;
            }
            let check = check_function(
                &complete_cover(&res),
                &on_set,
                &dont_cares,
                config.nb_variables(),
            );
            if let Err(e) = check {
                nb_failed += 1;
                progress.write(format!("Seed {seed}: {e}"))?;
            }
            progress.set_postfix(format!("cyclic={}, failed={}", nb_cyclic, nb_failed));
            progress.update(1)?;
        }
        println!(
            "\nChecked {} functions: {} cyclic, {} incorrect",
            self.count, nb_cyclic, nb_failed
        );
        if nb_failed > 0 {
            return Err(Error::FailedChecks {
                failed: nb_failed,
                total: self.count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_function() {
        let cover = [Term::from_minterm(1, 2)];
        assert!(check_function(&cover, &[1], &[], 2).is_ok());
        assert!(check_function(&cover, &[], &[1], 2).is_ok());
        match check_function(&cover, &[2], &[], 2) {
            Err(Error::IncorrectCover { missing, spurious }) => {
                assert_eq!(missing, vec![2]);
                assert_eq!(spurious, vec![1]);
            }
            r => panic!("Unexpected result {r:?}"),
        }
        assert!(matches!(
            check_function(&cover, &[4], &[], 2),
            Err(Error::MintermOutOfRange { .. })
        ));
    }

    #[test]
    fn test_stress_invalid_ratio() {
        let args = StressArgs {
            nb_variables: 3,
            count: 1,
            on_ratio: 1.5,
            dc_ratio: 0.2,
            seed: 1,
        };
        assert!(matches!(args.run(), Err(Error::InvalidRatio(_))));
    }

    #[test]
    fn test_cli() {
        let cli =
            Cli::try_parse_from(["primecover", "min", "on.txt", "-n", "3", "--check"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Minimize(MinimizeArgs { check: true, .. })
        ));
    }
}
