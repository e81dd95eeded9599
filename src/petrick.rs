//! Reduction of the prime implicant chart
//!
//! The chart is reduced by repeatedly applying, in this order of priority:
//! * extraction of essential implicants, the only live row covering some live column;
//! * row dominance, removing implicants whose coverage is included in another's;
//! * column dominance, removing constraints whose covering rows include another's.
//!
//! When none of them applies and constraints remain, the chart is cyclic and is returned
//! as is, for display or for an exact covering algorithm.

use crate::chart::Chart;
use crate::error::Result;
use crate::list::{Append, TermList};
use crate::logging::targets;
use crate::term::Term;

/// Number of elements only present in the first or only in the second of two sets
fn relative_cardinality(
    a: impl Iterator<Item = bool>,
    b: impl Iterator<Item = bool>,
) -> [usize; 2] {
    let mut ret = [0, 0];
    for (x, y) in a.zip(b) {
        if x && !y {
            ret[0] += 1;
        } else if y && !x {
            ret[1] += 1;
        }
    }
    ret
}

/// Extract the essential implicants to `essentials`
///
/// Columns are scanned in order. When a live column is covered by exactly one live row,
/// the row's implicant is appended to `essentials`, the row is removed, and so are all the
/// columns it covers. Returns the number of columns removed.
pub fn find_essentials(chart: &mut Chart, essentials: &mut TermList) -> Result<usize> {
    let mut covered = 0;
    for col in 0..chart.nb_columns() {
        if !chart.is_column_live(col) {
            continue;
        }
        let row = {
            let mut rows = chart.rows_covering(col);
            match (rows.next(), rows.next()) {
                (Some(row), None) => row,
                _ => continue,
            }
        };
        let implicant = chart.implicant(row);
        essentials.insert(implicant, &Append)?;
        chart.remove_row(row);
        let columns: Vec<usize> = chart.columns_covered(row).collect();
        for c in columns {
            chart.remove_column(c);
            covered += 1;
        }
        log::trace!(
            target: targets::PETRICK,
            "Essential implicant {implicant:?} for constraint {}",
            chart.constraint(col).value()
        );
    }
    Ok(covered)
}

/// Remove the live rows that cover no live column; returns the number of rows removed
pub fn remove_empty_rows(chart: &mut Chart) -> usize {
    let empty: Vec<usize> = chart
        .live_rows()
        .filter(|r| chart.columns_covered(*r).next().is_none())
        .collect();
    for r in &empty {
        chart.remove_row(*r);
    }
    empty.len()
}

/// Remove the dominated rows; returns the number of rows removed
///
/// A row whose coverage of the live columns is strictly included in another row's is removed.
/// Of two rows with identical coverage, the one with more literals is removed, or the
/// later one if they have as many.
pub fn row_dominance(chart: &mut Chart) -> usize {
    let mut removed = 0;
    for r1 in 0..chart.nb_rows() {
        for r2 in r1 + 1..chart.nb_rows() {
            if !chart.is_row_live(r1) {
                break;
            }
            if !chart.is_row_live(r2) {
                continue;
            }
            let columns: Vec<usize> = chart.live_columns().collect();
            let [only1, only2] = relative_cardinality(
                columns.iter().map(|c| chart.covers(r1, *c)),
                columns.iter().map(|c| chart.covers(r2, *c)),
            );
            let dominated = match (only1 != 0, only2 != 0) {
                (false, false) => {
                    if chart.implicant(r1).nb_literals() <= chart.implicant(r2).nb_literals() {
                        r2
                    } else {
                        r1
                    }
                }
                (true, false) => r2,
                (false, true) => r1,
                (true, true) => continue,
            };
            chart.remove_row(dominated);
            removed += 1;
            log::trace!(
                target: targets::PETRICK,
                "Implicant {:?} dominated",
                chart.implicant(dominated)
            );
        }
    }
    removed
}

/// Remove the dominating columns; returns the number of columns removed
///
/// A column whose set of covering rows strictly includes another column's is removed:
/// covering the other one covers it too. Of two columns with the same covering rows,
/// the later one is removed.
pub fn column_dominance(chart: &mut Chart) -> usize {
    let mut removed = 0;
    for c1 in 0..chart.nb_columns() {
        for c2 in c1 + 1..chart.nb_columns() {
            if !chart.is_column_live(c1) {
                break;
            }
            if !chart.is_column_live(c2) {
                continue;
            }
            let rows: Vec<usize> = chart.live_rows().collect();
            let [only1, only2] = relative_cardinality(
                rows.iter().map(|r| chart.covers(*r, c1)),
                rows.iter().map(|r| chart.covers(*r, c2)),
            );
            let dominating = match (only1 != 0, only2 != 0) {
                (false, false) => c2,
                (true, false) => c1,
                (false, true) => c2,
                (true, true) => continue,
            };
            chart.remove_column(dominating);
            removed += 1;
            log::trace!(
                target: targets::PETRICK,
                "Constraint {} dominates another",
                chart.constraint(dominating).value()
            );
        }
    }
    removed
}

/// Final state of the chart after reduction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every constraint is covered by the essential implicants
    Reduced,
    /// No reduction applies anymore: the live part of the chart is cyclic
    Cyclic(Chart),
}

/// Number of successful applications of each reduction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Passes of essential extraction that covered at least one constraint
    pub nb_essential_passes: usize,
    /// Passes of row dominance that removed at least one implicant
    pub nb_row_passes: usize,
    /// Passes of column dominance that removed at least one constraint
    pub nb_column_passes: usize,
}

/// Result of the reduction of a chart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// Essential implicants, in extraction order
    pub essentials: Vec<Term>,
    /// Whether the chart was completely reduced
    pub outcome: Outcome,
    /// Statistics of the reduction
    pub stats: ReductionStats,
}

impl Reduction {
    /// Returns true if the chart ended up cyclic
    pub fn is_cyclic(&self) -> bool {
        matches!(self.outcome, Outcome::Cyclic(_))
    }
}

/// Reduce a chart until it is empty or cyclic
pub fn reduce(mut chart: Chart) -> Result<Reduction> {
    let mut essentials = TermList::new();
    let mut stats = ReductionStats::default();
    while !chart.is_empty() {
        let covered = find_essentials(&mut chart, &mut essentials)?;
        if covered != 0 {
            let empty = remove_empty_rows(&mut chart);
            stats.nb_essential_passes += 1;
            log::debug!(
                target: targets::PETRICK,
                "Essentials covered {covered} constraints, {empty} implicants left empty"
            );
            continue;
        }
        let rows = row_dominance(&mut chart);
        if rows != 0 {
            stats.nb_row_passes += 1;
            log::debug!(target: targets::PETRICK, "Row dominance removed {rows} implicants");
            continue;
        }
        let columns = column_dominance(&mut chart);
        if columns != 0 {
            let empty = remove_empty_rows(&mut chart);
            stats.nb_column_passes += 1;
            log::debug!(
                target: targets::PETRICK,
                "Column dominance removed {columns} constraints, {empty} implicants left empty"
            );
            continue;
        }
        break;
    }
    // Constraints left without any implicant are reported the same way
    let outcome = if chart.nb_live_columns() != 0 {
        log::debug!(
            target: targets::PETRICK,
            "Cyclic chart with {} implicants and {} constraints",
            chart.nb_live_rows(),
            chart.nb_live_columns()
        );
        Outcome::Cyclic(chart)
    } else {
        Outcome::Reduced
    };
    Ok(Reduction {
        essentials: essentials.terms(),
        outcome,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qmc::prime_implicants;

    fn minterms(values: &[u32], nb_vars: usize) -> Vec<Term> {
        values
            .iter()
            .map(|v| Term::from_minterm(*v, nb_vars))
            .collect()
    }

    fn chart_for(values: &[u32], nb_vars: usize) -> Chart {
        let on = minterms(values, nb_vars);
        let primes = prime_implicants(&on, &[]).unwrap();
        Chart::new(&on, &primes).unwrap()
    }

    #[test]
    fn test_trivial() {
        let t = Term::from_minterm(2, 2);
        let red = reduce(Chart::new(&[t], &[t]).unwrap()).unwrap();
        assert_eq!(red.essentials, vec![t]);
        assert_eq!(red.outcome, Outcome::Reduced);
        assert_eq!(
            red.stats,
            ReductionStats {
                nb_essential_passes: 1,
                nb_row_passes: 0,
                nb_column_passes: 0
            }
        );
    }

    #[test]
    fn test_empty() {
        let red = reduce(Chart::new(&[], &[]).unwrap()).unwrap();
        assert!(red.essentials.is_empty());
        assert!(!red.is_cyclic());
    }

    #[test]
    fn test_essentials() {
        let chart = chart_for(&[1, 2, 3], 2);
        let red = reduce(chart).unwrap();
        assert_eq!(red.outcome, Outcome::Reduced);
        let names = crate::config::VariableNames::default();
        let products: Vec<String> = red
            .essentials
            .iter()
            .map(|t| t.to_product_string(&names, 2).unwrap())
            .collect();
        assert_eq!(products, vec!["y", "x"]);
    }

    #[test]
    fn test_essential_column_has_single_row() {
        let mut chart = chart_for(&[0, 1, 2, 5, 6, 7, 8, 9, 10, 14], 4);
        let mut essentials = TermList::new();
        let before = chart.clone();
        find_essentials(&mut chart, &mut essentials).unwrap();
        for t in essentials.terms() {
            let row = (0..before.nb_rows())
                .find(|r| before.implicant(*r) == t)
                .unwrap();
            assert!(before
                .columns_covered(row)
                .any(|c| before.rows_covering(c).count() == 1));
        }
    }

    #[test]
    fn test_cyclic() {
        let red = reduce(chart_for(&[0, 1, 2, 5, 6, 7], 3)).unwrap();
        assert!(red.essentials.is_empty());
        let Outcome::Cyclic(chart) = red.outcome else {
            panic!("Chart should be cyclic");
        };
        assert_eq!(chart.nb_live_rows(), 6);
        assert_eq!(chart.nb_live_columns(), 6);
    }

    #[test]
    fn test_row_dominance() {
        // Row 1 covers a subset of row 0
        let constraints = minterms(&[0, 1, 3], 2);
        let implicants = vec![
            Term::from_minterm(0, 2).join(&Term::from_minterm(1, 2)),
            Term::from_minterm(1, 2),
            Term::from_minterm(1, 2).join(&Term::from_minterm(3, 2)),
        ];
        let mut chart = Chart::new(&constraints, &implicants).unwrap();
        assert_eq!(row_dominance(&mut chart), 1);
        assert!(!chart.is_row_live(1));

        // Identical rows: the one with fewer literals stays
        let constraints = minterms(&[1], 2);
        let implicants = vec![Term::from_minterm(1, 2), implicants[0]];
        let mut chart = Chart::new(&constraints, &implicants).unwrap();
        assert_eq!(row_dominance(&mut chart), 1);
        assert!(!chart.is_row_live(0));
        assert!(chart.is_row_live(1));

        // Identical rows with as many literals: the later one is removed
        let constraints = minterms(&[1], 2);
        let implicants = vec![
            Term::from_minterm(1, 2).join(&Term::from_minterm(3, 2)),
            Term::from_minterm(0, 2).join(&Term::from_minterm(1, 2)),
        ];
        let mut chart = Chart::new(&constraints, &implicants).unwrap();
        assert_eq!(row_dominance(&mut chart), 1);
        assert!(chart.is_row_live(0));
        assert!(!chart.is_row_live(1));
    }

    #[test]
    fn test_column_dominance() {
        // Column 1 is covered by rows 0 and 1, column 0 only by row 0
        let constraints = minterms(&[0, 1], 2);
        let implicants = vec![
            Term::from_minterm(0, 2).join(&Term::from_minterm(1, 2)),
            Term::from_minterm(1, 2),
        ];
        let mut chart = Chart::new(&constraints, &implicants).unwrap();
        assert_eq!(column_dominance(&mut chart), 1);
        assert!(chart.is_column_live(0));
        assert!(!chart.is_column_live(1));

        // Identical columns: the later one is removed
        let constraints = minterms(&[0, 1], 2);
        let implicants = vec![implicants[0]];
        let mut chart = Chart::new(&constraints, &implicants).unwrap();
        assert_eq!(column_dominance(&mut chart), 1);
        assert!(chart.is_column_live(0));
        assert!(!chart.is_column_live(1));
    }

    #[test]
    fn test_dominance_then_essentials() {
        // Rows with identical coverage: dominance leaves a single essential row
        let constraints = minterms(&[1], 2);
        let implicants = vec![
            Term::from_minterm(1, 2),
            Term::from_minterm(1, 2).join(&Term::from_minterm(3, 2)),
        ];
        let red = reduce(Chart::new(&constraints, &implicants).unwrap()).unwrap();
        assert_eq!(red.essentials, vec![implicants[1]]);
        assert_eq!(red.stats.nb_row_passes, 1);
        assert_eq!(red.stats.nb_essential_passes, 1);
    }
}
