//! Log targets
//!
//! Each phase of the minimization logs under its own target, so that
//! `RUST_LOG=petrick=debug` shows only the covering phase.

/// Targets passed to the `log` macros
pub mod targets {
    /// Merge phase
    pub const QMC: &str = "qmc";
    /// Construction of the prime implicant chart
    pub const CHART: &str = "chart";
    /// Reduction of the chart
    pub const PETRICK: &str = "petrick";
    /// Reading of minterm files
    pub const IO: &str = "io";
}
