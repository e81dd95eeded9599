//! Text reports of minimization results

use std::io::Write;

use crate::config::VariableNames;
use crate::error::Result;
use crate::minimize::Minimization;
use crate::term::Term;

/// Write one implicant per line, as a positional cube followed by its product of literals
///
/// Fails if there are fewer names than variables.
pub fn write_implicants<W: Write>(
    w: &mut W,
    implicants: &[Term],
    nb_vars: usize,
    names: &VariableNames,
) -> Result<()> {
    for t in implicants {
        let product = t.to_product_string(names, nb_vars)?;
        writeln!(w, "{}\t{}", t.to_cube_string(nb_vars), product)?;
    }
    Ok(())
}

/// Write the result of a minimization
///
/// The report lists the essential implicants, then the cyclic part of the chart if the
/// reduction did not complete, then the sum-of-products form:
/// ```text
///     Essential implicants:
///     -1	y
///     1-	x
///
///     SoP form:
///     y + x
/// ```
pub fn write_minimization<W: Write>(w: &mut W, res: &Minimization) -> Result<()> {
    let nb_vars = res.nb_variables();
    writeln!(w, "Essential implicants:")?;
    write_implicants(w, res.essentials(), nb_vars, res.names())?;
    if let Some(chart) = res.cyclic_chart() {
        writeln!(w)?;
        writeln!(w, "Cyclic table:")?;
        write!(w, "{}", chart.table(nb_vars))?;
    }
    writeln!(w)?;
    writeln!(w, "SoP form:")?;
    writeln!(w, "{}", res.sum_of_products())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{minimize, Config, Error};

    fn report(on_set: &[u32], nb_vars: usize) -> String {
        let config = Config::new(nb_vars).unwrap();
        let res = minimize(on_set, &[], &config).unwrap();
        let mut buf = Vec::new();
        write_minimization(&mut buf, &res).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report() {
        assert_eq!(
            report(&[1, 2, 3], 2),
            "Essential implicants:\n-1\ty\n1-\tx\n\nSoP form:\ny + x\n"
        );
    }

    #[test]
    fn test_short_names() {
        let implicants = [Term::from_minterm(5, 3)];
        let mut buf = Vec::new();
        let names = VariableNames::from_chars("a");
        assert!(matches!(
            write_implicants(&mut buf, &implicants, 3, &names),
            Err(Error::NotEnoughNames {
                expected: 3,
                got: 1
            })
        ));
        write_implicants(&mut buf, &implicants, 3, &VariableNames::from_chars("abc")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "101\tab'c\n");
    }

    #[test]
    fn test_cyclic_report() {
        let r = report(&[0, 1, 2, 5, 6, 7], 3);
        assert!(r.starts_with("Essential implicants:\n\nCyclic table:\n"));
        assert!(r.contains("   \t0\t1\t2\t5\t6\t7\n"));
        assert!(r.ends_with("SoP form:\n0\n"));
    }
}
