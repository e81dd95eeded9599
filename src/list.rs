//! Ordered collection of terms
//!
//! Nodes live in an arena and are chained in both directions through stable keys.
//! A key stays valid until its node is removed, so a traversal may remove the node under
//! the cursor as long as it fetched the next key first.

use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};

use fxhash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::term::Term;

new_key_type! {
    /// Stable handle on a node of a [`TermList`]
    pub struct NodeKey;
}

/// A term with the flags tracked during the merge phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TermNode {
    term: Term,
    essential: bool,
    dont_care: bool,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

impl TermNode {
    /// The term held by the node
    pub fn term(&self) -> Term {
        self.term
    }

    /// Returns true until the term has been merged with another one
    pub fn is_essential(&self) -> bool {
        self.essential
    }

    /// Returns true if the term only covers don't-care minterms
    pub fn is_dont_care(&self) -> bool {
        self.dont_care
    }

    /// Set the essential flag
    pub fn set_essential(&mut self, essential: bool) {
        self.essential = essential;
    }

    /// Set the don't-care flag
    pub fn set_dont_care(&mut self, dont_care: bool) {
        self.dont_care = dont_care;
    }
}

/// Ordering strategy used when inserting in a [`TermList`]
///
/// A new term is inserted before the first node for which `precedes(node, new)` is false.
pub trait TermOrder {
    /// Returns true if `existing` should stay before `new`
    fn precedes(&self, existing: Term, new: Term) -> bool;
}

/// Canonical order of the merge phase
///
/// Terms with fewer absent variables come first. Terms with the same number of asserted
/// variables are sorted by natural value, otherwise by number of asserted variables.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalOrder;

impl TermOrder for CanonicalOrder {
    fn precedes(&self, existing: Term, new: Term) -> bool {
        if existing.nb_literals() != new.nb_literals() {
            return existing.nb_literals() > new.nb_literals();
        }
        if existing.nb_ones() == new.nb_ones() {
            return existing.value() < new.value();
        }
        existing.nb_ones() < new.nb_ones()
    }
}

/// Insertion at the end of the list
#[derive(Clone, Copy, Debug, Default)]
pub struct Append;

impl TermOrder for Append {
    fn precedes(&self, _: Term, _: Term) -> bool {
        true
    }
}

impl<F: Fn(Term, Term) -> bool> TermOrder for F {
    fn precedes(&self, existing: Term, new: Term) -> bool {
        self(existing, new)
    }
}

/// Selection criterion for [`TermList::remove_where`]
pub trait NodePredicate {
    /// Returns true if the node satisfies the criterion
    fn matches(&self, node: &TermNode) -> bool;
}

/// Flags of a [`TermNode`] usable as a removal criterion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeFlag {
    /// The node has not been merged
    Essential,
    /// The node only covers don't-care minterms
    DontCare,
}

impl NodePredicate for NodeFlag {
    fn matches(&self, node: &TermNode) -> bool {
        match self {
            NodeFlag::Essential => node.is_essential(),
            NodeFlag::DontCare => node.is_dont_care(),
        }
    }
}

impl<F: Fn(&TermNode) -> bool> NodePredicate for F {
    fn matches(&self, node: &TermNode) -> bool {
        self(node)
    }
}

/// Whether [`TermList::remove_where`] removes the nodes that satisfy the criterion or the others
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    /// Remove the nodes satisfying the criterion
    Matching,
    /// Remove the nodes not satisfying the criterion
    NotMatching,
}

/// Ordered list of terms with membership lookup
#[derive(Clone, Debug, Default)]
pub struct TermList {
    nodes: SlotMap<NodeKey, TermNode>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    index: FxHashMap<Term, NodeKey>,
}

impl TermList {
    /// Create an empty list
    pub fn new() -> TermList {
        TermList::default()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list holds no node
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node of the list
    pub fn first(&self) -> Option<NodeKey> {
        self.head
    }

    /// Last node of the list
    pub fn last(&self) -> Option<NodeKey> {
        self.tail
    }

    /// Node following `key`
    pub fn next(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(|n| n.next)
    }

    /// Node preceding `key`
    pub fn prev(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(|n| n.prev)
    }

    /// Access a node
    pub fn get(&self, key: NodeKey) -> Option<&TermNode> {
        self.nodes.get(key)
    }

    /// Access a node mutably
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut TermNode> {
        self.nodes.get_mut(key)
    }

    /// Returns true if a node holds this term
    pub fn contains(&self, term: Term) -> bool {
        self.index.contains_key(&term)
    }

    /// Find a node holding this term
    pub fn find(&self, term: Term) -> Option<NodeKey> {
        self.index.get(&term).copied()
    }

    /// Insert a new term, essential and not don't-care, at the position given by `order`
    pub fn insert<O: TermOrder + ?Sized>(
        &mut self,
        term: Term,
        order: &O,
    ) -> Result<NodeKey, TryReserveError> {
        self.index.try_reserve(1)?;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(c) = cursor {
            let node = &self.nodes[c];
            if !order.precedes(node.term, term) {
                break;
            }
            prev = cursor;
            cursor = node.next;
        }
        let key = self.nodes.insert(TermNode {
            term,
            essential: true,
            dont_care: false,
            prev,
            next: cursor,
        });
        match cursor {
            Some(c) => self.nodes[c].prev = Some(key),
            None => self.tail = Some(key),
        }
        match prev {
            Some(p) => self.nodes[p].next = Some(key),
            None => self.head = Some(key),
        }
        self.index.entry(term).or_insert(key);
        Ok(key)
    }

    /// Remove a node and return it
    pub fn remove(&mut self, key: NodeKey) -> Option<TermNode> {
        let node = self.nodes.remove(key)?;
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        if self.index.get(&node.term) == Some(&key) {
            self.index.remove(&node.term);
            // Keep the lookup valid if the term was inserted twice
            let other = self.keys().find(|k| self.nodes[*k].term == node.term);
            if let Some(other) = other {
                self.index.insert(node.term, other);
            }
        }
        Some(node)
    }

    /// Remove the first node holding this term
    pub fn remove_term(&mut self, term: Term) -> bool {
        match self.find(term) {
            Some(key) => self.remove(key).is_some(),
            None => false,
        }
    }

    /// Remove every node that satisfies (or does not satisfy) a criterion, in a single pass
    ///
    /// Returns the number of nodes removed.
    pub fn remove_where<P: NodePredicate + ?Sized>(&mut self, pred: &P, mode: Removal) -> usize {
        let mut removed = 0;
        let mut cursor = self.head;
        while let Some(c) = cursor {
            cursor = self.nodes[c].next;
            let m = pred.matches(&self.nodes[c]);
            let remove = match mode {
                Removal::Matching => m,
                Removal::NotMatching => !m,
            };
            if remove {
                self.remove(c);
                removed += 1;
            }
        }
        removed
    }

    /// Keys of the nodes, in list order
    pub fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        std::iter::successors(self.head, move |k| self.nodes[*k].next)
    }

    /// Nodes, in list order
    pub fn iter(&self) -> impl Iterator<Item = &TermNode> + '_ {
        self.keys().map(move |k| &self.nodes[k])
    }

    /// Terms, in list order
    pub fn terms(&self) -> Vec<Term> {
        self.iter().map(|n| n.term).collect()
    }
}

impl Index<NodeKey> for TermList {
    type Output = TermNode;

    fn index(&self, key: NodeKey) -> &TermNode {
        &self.nodes[key]
    }
}

impl IndexMut<NodeKey> for TermList {
    fn index_mut(&mut self, key: NodeKey) -> &mut TermNode {
        &mut self.nodes[key]
    }
}
