//! Prime implicant generation with the Quine-McCluskey method
//!
//! All terms, whatever their size, share a single [`TermList`]. Each sweep compares every
//! pair of nodes and inserts the merge of adjacent pairs. Merged nodes lose their essential
//! flag: once a sweep changes nothing, the nodes that are still essential are the
//! prime implicants.

use crate::error::Result;
use crate::list::{CanonicalOrder, NodeFlag, NodeKey, Removal, TermList};
use crate::logging::targets;
use crate::term::Term;

/// Statistics of a merge phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Number of sweeps, including the last one that changed nothing
    pub nb_sweeps: usize,
    /// Number of new implicants inserted
    pub nb_inserted: usize,
    /// Number of nodes removed because they were merged
    pub nb_merged: usize,
    /// Number of prime implicants removed because they only cover don't-cares
    pub nb_dont_care: usize,
}

/// Build the initial list from the on-set and the don't-care set
///
/// The minterms must already be in positional cube form. Duplicates are ignored, and
/// don't-cares that also belong to the on-set are treated as on-set minterms.
pub fn initial_list(on_set: &[Term], dont_cares: &[Term]) -> Result<TermList> {
    let mut list = TermList::new();
    for t in on_set {
        if !list.contains(*t) {
            list.insert(*t, &CanonicalOrder)?;
        }
    }
    for t in dont_cares {
        if !list.contains(*t) {
            let key = list.insert(*t, &CanonicalOrder)?;
            if let Some(node) = list.get_mut(key) {
                node.set_dont_care(true);
            }
        }
    }
    Ok(list)
}

/// Effect of merging a pair of nodes on the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Merge {
    /// The merged implicant is new
    Inserted,
    /// The merged implicant existed and is no longer a pure don't-care
    Updated,
    /// Nothing changed apart from the essential flags of the pair
    Unchanged,
}

/// Result of a single sweep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sweep {
    /// Number of new implicants
    pub nb_inserted: usize,
    /// Number of existing implicants that lost their don't-care flag
    pub nb_updated: usize,
}

impl Sweep {
    /// Returns true if the sweep changed nothing but essential flags
    pub fn is_fixpoint(&self) -> bool {
        self.nb_inserted == 0 && self.nb_updated == 0
    }
}

/// Merge two nodes, inserting the result if it is new
fn merge_pair(list: &mut TermList, a: NodeKey, b: NodeKey) -> Result<Merge> {
    let (ta, dca) = (list[a].term(), list[a].is_dont_care());
    let (tb, dcb) = (list[b].term(), list[b].is_dont_care());
    let joined = ta.join(&tb);
    let both_dont_care = dca && dcb;
    let ret = match list.find(joined) {
        Some(key) => {
            // Only a pure don't-care implicant if every way to build it is
            let node = &mut list[key];
            if node.is_dont_care() && !both_dont_care {
                node.set_dont_care(false);
                Merge::Updated
            } else {
                Merge::Unchanged
            }
        }
        None => {
            let key = list.insert(joined, &CanonicalOrder)?;
            list[key].set_dont_care(both_dont_care);
            log::trace!(target: targets::QMC, "Merged {ta:?} and {tb:?} into {joined:?}");
            Merge::Inserted
        }
    };
    list[a].set_essential(false);
    list[b].set_essential(false);
    Ok(ret)
}

/// Compare every ordered pair of nodes once, merging the adjacent ones
///
/// Nodes inserted after the cursor during the sweep take part in the same sweep.
pub fn merge_sweep(list: &mut TermList) -> Result<Sweep> {
    let mut sweep = Sweep::default();
    let mut cursor = list.first();
    while let Some(c) = cursor {
        let mut later = list.next(c);
        while let Some(l) = later {
            if list[c].term().is_adjacent(&list[l].term()) {
                match merge_pair(list, c, l)? {
                    Merge::Inserted => sweep.nb_inserted += 1,
                    Merge::Updated => sweep.nb_updated += 1,
                    Merge::Unchanged => (),
                }
            }
            later = list.next(l);
        }
        cursor = list.next(c);
    }
    Ok(sweep)
}

/// Reduce the list to the prime implicants that cover at least one on-set minterm
///
/// Sweeps are repeated until one leaves the list unchanged. The nodes that were merged
/// are then removed, followed by the implicants made only of don't-cares.
pub fn execute_qmc(list: &mut TermList) -> Result<MergeStats> {
    let mut stats = MergeStats::default();
    loop {
        let sweep = merge_sweep(list)?;
        stats.nb_sweeps += 1;
        stats.nb_inserted += sweep.nb_inserted;
        log::debug!(
            target: targets::QMC,
            "Sweep {}: {} new implicants, {} updated, {} nodes",
            stats.nb_sweeps,
            sweep.nb_inserted,
            sweep.nb_updated,
            list.len()
        );
        if sweep.is_fixpoint() {
            break;
        }
    }
    stats.nb_merged = list.remove_where(&NodeFlag::Essential, Removal::NotMatching);
    stats.nb_dont_care = list.remove_where(&NodeFlag::DontCare, Removal::Matching);
    log::debug!(
        target: targets::QMC,
        "Found {} prime implicants ({} merged nodes, {} don't-care implicants removed)",
        list.len(),
        stats.nb_merged,
        stats.nb_dont_care
    );
    Ok(stats)
}

/// Prime implicants of a function given as minterms in positional cube form
pub fn prime_implicants(on_set: &[Term], dont_cares: &[Term]) -> Result<Vec<Term>> {
    let mut list = initial_list(on_set, dont_cares)?;
    execute_qmc(&mut list)?;
    Ok(list.terms())
}
