//! Prime implicant chart
//!
//! Rows are implicants, columns are the on-set minterms that must be covered.
//! Rows and columns are never physically removed: a liveness flag excludes them from
//! subsequent scans, so indices stay valid during the whole reduction.

use std::fmt;

use crate::error::Result;
use crate::logging::targets;
use crate::term::Term;

/// Covering matrix between implicants and constraints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chart {
    implicants: Vec<Term>,
    constraints: Vec<Term>,
    /// Row-major coverage, one row per implicant
    cells: Vec<Vec<bool>>,
    live_rows: Vec<bool>,
    live_columns: Vec<bool>,
}

impl Chart {
    /// Build the chart of `implicants` against `constraints`
    ///
    /// Duplicate constraints are only kept once.
    pub fn new(constraints: &[Term], implicants: &[Term]) -> Result<Chart> {
        let mut cols: Vec<Term> = Vec::new();
        cols.try_reserve(constraints.len())?;
        for c in constraints {
            if !cols.contains(c) {
                cols.push(*c);
            }
        }
        let mut rows = Vec::new();
        rows.try_reserve(implicants.len())?;
        rows.extend_from_slice(implicants);

        let mut cells = Vec::new();
        cells.try_reserve(rows.len())?;
        for r in &rows {
            let mut row = Vec::new();
            row.try_reserve(cols.len())?;
            row.extend(cols.iter().map(|c| r.covers(c)));
            cells.push(row);
        }
        let mut live_rows = Vec::new();
        live_rows.try_reserve(rows.len())?;
        live_rows.resize(rows.len(), true);
        let mut live_columns = Vec::new();
        live_columns.try_reserve(cols.len())?;
        live_columns.resize(cols.len(), true);

        log::debug!(
            target: targets::CHART,
            "Built chart with {} implicants and {} constraints",
            rows.len(),
            cols.len()
        );
        Ok(Chart {
            implicants: rows,
            constraints: cols,
            cells,
            live_rows,
            live_columns,
        })
    }

    /// Total number of rows, including removed ones
    pub fn nb_rows(&self) -> usize {
        self.implicants.len()
    }

    /// Total number of columns, including removed ones
    pub fn nb_columns(&self) -> usize {
        self.constraints.len()
    }

    /// Number of rows still in the chart
    pub fn nb_live_rows(&self) -> usize {
        self.live_rows.iter().filter(|b| **b).count()
    }

    /// Number of columns still in the chart
    pub fn nb_live_columns(&self) -> usize {
        self.live_columns.iter().filter(|b| **b).count()
    }

    /// Returns true if there is no live row or no live column left
    pub fn is_empty(&self) -> bool {
        self.nb_live_rows() == 0 || self.nb_live_columns() == 0
    }

    /// Implicant of a row
    pub fn implicant(&self, row: usize) -> Term {
        self.implicants[row]
    }

    /// Constraint of a column
    pub fn constraint(&self, column: usize) -> Term {
        self.constraints[column]
    }

    /// Returns true if the implicant of the row covers the constraint of the column
    pub fn covers(&self, row: usize, column: usize) -> bool {
        self.cells[row][column]
    }

    /// Returns true if the row has not been removed
    pub fn is_row_live(&self, row: usize) -> bool {
        self.live_rows[row]
    }

    /// Returns true if the column has not been removed
    pub fn is_column_live(&self, column: usize) -> bool {
        self.live_columns[column]
    }

    /// Indices of the live rows
    pub fn live_rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nb_rows()).filter(|r| self.live_rows[*r])
    }

    /// Indices of the live columns
    pub fn live_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nb_columns()).filter(|c| self.live_columns[*c])
    }

    /// Live rows covering a column
    pub fn rows_covering(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        self.live_rows().filter(move |r| self.cells[*r][column])
    }

    /// Live columns covered by a row
    pub fn columns_covered(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.live_columns().filter(move |c| self.cells[row][*c])
    }

    /// Remove a row from subsequent scans
    pub fn remove_row(&mut self, row: usize) {
        self.live_rows[row] = false;
    }

    /// Remove a column from subsequent scans
    pub fn remove_column(&mut self, column: usize) {
        self.live_columns[column] = false;
    }

    /// Live implicants, in row order
    pub fn live_implicants(&self) -> Vec<Term> {
        self.live_rows().map(|r| self.implicants[r]).collect()
    }

    /// Live constraints, in column order
    pub fn live_constraints(&self) -> Vec<Term> {
        self.live_columns().map(|c| self.constraints[c]).collect()
    }

    /// Display the live part of the chart for a function of `nb_vars` variables
    pub fn table(&self, nb_vars: usize) -> ChartTable<'_> {
        ChartTable {
            chart: self,
            nb_vars,
        }
    }
}

/// Tabular view of a [`Chart`], as returned by [`Chart::table`]
///
/// The header holds the natural value of each live constraint. Each live implicant
/// follows on its own line, in positional cube form, with an `X` under every constraint
/// it covers.
pub struct ChartTable<'a> {
    chart: &'a Chart,
    nb_vars: usize,
}

impl fmt::Display for ChartTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.nb_vars)?;
        for c in self.chart.live_columns() {
            write!(f, "\t{}", self.chart.constraint(c).value())?;
        }
        writeln!(f)?;
        for r in self.chart.live_rows() {
            write!(f, "{}", self.chart.implicant(r).to_cube_string(self.nb_vars))?;
            for c in self.chart.live_columns() {
                let mark = if self.chart.covers(r, c) { 'X' } else { ' ' };
                write!(f, "\t{mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
