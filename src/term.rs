//! Positional cube representation of minterms and implicants

use std::fmt;

use crate::config::VariableNames;
use crate::error::{Error, Result};

/// Maximum number of variables supported by the packed representation
pub const MAX_VARIABLES: usize = 15;

/// Minimum number of variables of a function
pub const MIN_VARIABLES: usize = 1;

/// Low bit of every pair
const LOW_BITS: u32 = 0x5555_5555;

/// Pair encoding of an asserted variable
const ONE: u32 = 0b01;

/// Pair encoding of a complemented variable
const ZERO: u32 = 0b10;

/// Number of pairs held by the packed word
const NB_PAIRS: usize = 16;

/// State of a single variable in a term
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Literal {
    /// The variable is asserted (`01`)
    Positive,
    /// The variable is complemented (`10`)
    Negative,
    /// The variable is absent from the implicant (`00`)
    Absent,
}

/// Representation of a minterm or implicant in positional cube notation
///
/// Each variable occupies 2 bits: `01` for the variable, `10` for its complement,
/// `00` when the variable does not appear. Variable `i` of the natural value (bit `i`)
/// lives in bits `2i` and `2i + 1`. The number of variables is a property of the run and
/// is not stored in the term.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Term {
    a: u32,
}

/// Mask with both bits set on every pair that differs from `00`
fn pair_mask(low: u32) -> u32 {
    low | (low << 1)
}

impl Term {
    /// Expand a minterm into its fully specified positional cube
    ///
    /// Bits of `value` above `nb_vars` are ignored. `nb_vars` must not exceed [`MAX_VARIABLES`].
    pub fn from_minterm(value: u32, nb_vars: usize) -> Term {
        debug_assert!(nb_vars <= MAX_VARIABLES);
        let mut a = 0;
        for i in 0..nb_vars {
            let pair = if (value >> i) & 1 != 0 { ONE } else { ZERO };
            a |= pair << (2 * i);
        }
        Term { a }
    }

    /// Create a term from its packed representation
    pub fn from_raw(a: u32) -> Term {
        debug_assert_eq!(a & (a >> 1) & LOW_BITS, 0, "Invalid pair 11 in {a:#b}");
        Term { a }
    }

    /// Create a term from the state of each variable, starting from variable 0
    pub fn from_literals(literals: &[Literal]) -> Term {
        debug_assert!(literals.len() <= MAX_VARIABLES);
        let mut a = 0;
        for (i, l) in literals.iter().enumerate() {
            let pair = match l {
                Literal::Positive => ONE,
                Literal::Negative => ZERO,
                Literal::Absent => 0,
            };
            a |= pair << (2 * i);
        }
        Term { a }
    }

    /// Return the internal representation of the term
    pub fn raw(&self) -> u32 {
        self.a
    }

    /// Natural value of the term, where absent variables read as 0
    ///
    /// Exact for fully specified terms only.
    pub fn value(&self) -> u32 {
        let mut ret = 0;
        for i in 0..NB_PAIRS {
            ret |= ((self.a >> (2 * i)) & 1) << i;
        }
        ret
    }

    /// State of variable `i`
    pub fn literal(&self, i: usize) -> Literal {
        match (self.a >> (2 * i)) & 0b11 {
            ONE => Literal::Positive,
            ZERO => Literal::Negative,
            _ => Literal::Absent,
        }
    }

    /// Bits set on the low bit of every specified pair
    fn specified(&self) -> u32 {
        (self.a | (self.a >> 1)) & LOW_BITS
    }

    /// Number of asserted variables
    pub fn nb_ones(&self) -> u32 {
        (self.a & LOW_BITS).count_ones()
    }

    /// Number of variables present in the term, asserted or complemented
    pub fn nb_literals(&self) -> u32 {
        self.specified().count_ones()
    }

    /// Number of absent variables among the `nb_vars` of the function
    pub fn nb_dont_cares(&self, nb_vars: usize) -> u32 {
        nb_vars as u32 - self.nb_literals()
    }

    /// Returns true if the absent variables are the same in both terms
    pub fn is_compatible(&self, other: &Term) -> bool {
        self.specified() == other.specified()
    }

    /// Number of variables in which the two terms differ
    pub fn distance(&self, other: &Term) -> u32 {
        let d = self.a ^ other.a;
        ((d | (d >> 1)) & LOW_BITS).count_ones()
    }

    /// Returns true if the two terms can be merged into a larger implicant
    pub fn is_adjacent(&self, other: &Term) -> bool {
        self.is_compatible(other) && self.distance(other) == 1
    }

    /// Merge two adjacent terms, removing the variable in which they differ
    ///
    /// The terms must be compatible and differ in exactly one variable.
    pub fn join(&self, other: &Term) -> Term {
        debug_assert!(self.is_adjacent(other), "Joining {self:?} and {other:?}");
        let d = self.a ^ other.a;
        let mask = pair_mask((d | (d >> 1)) & LOW_BITS);
        Term { a: self.a & !mask }
    }

    /// Returns true if no variable is asserted in one term and complemented in the other
    ///
    /// For a fully specified `other`, this means that `self` contains it.
    pub fn covers(&self, other: &Term) -> bool {
        let d = self.a ^ other.a;
        d & (d >> 1) & LOW_BITS == 0
    }

    /// All minterms contained in the term, in increasing order
    pub fn minterms(&self, nb_vars: usize) -> Vec<u32> {
        let base = self.value();
        let free: Vec<usize> = (0..nb_vars)
            .filter(|i| self.literal(*i) == Literal::Absent)
            .collect();
        let mut ret = Vec::with_capacity(1 << free.len());
        for filter in 0u32..(1 << free.len()) {
            let mut m = base;
            for (n, v) in free.iter().enumerate() {
                m |= ((filter >> n) & 1) << v;
            }
            ret.push(m);
        }
        ret.sort();
        ret
    }

    /// Positional cube string, most significant variable first: `1`, `0` or `-`
    pub fn to_cube_string(&self, nb_vars: usize) -> String {
        (0..nb_vars)
            .rev()
            .map(|i| match self.literal(i) {
                Literal::Positive => '1',
                Literal::Negative => '0',
                Literal::Absent => '-',
            })
            .collect()
    }

    /// Product of literals, using `names[0]` for the most significant variable
    ///
    /// Complemented variables are followed by `'`. A term without literals renders as `1`.
    /// Fails if there are fewer names than variables.
    pub fn to_product_string(&self, names: &VariableNames, nb_vars: usize) -> Result<String> {
        if names.len() < nb_vars {
            return Err(Error::NotEnoughNames {
                expected: nb_vars,
                got: names.len(),
            });
        }
        Ok(self.product_string(names, nb_vars))
    }

    /// Product of literals, with at least `nb_vars` names
    pub(crate) fn product_string(&self, names: &VariableNames, nb_vars: usize) -> String {
        let mut ret = String::new();
        for (pos, i) in (0..nb_vars).rev().enumerate() {
            match self.literal(i) {
                Literal::Positive => ret.push_str(names.name(pos)),
                Literal::Negative => {
                    ret.push_str(names.name(pos));
                    ret.push('\'');
                }
                Literal::Absent => (),
            }
        }
        if ret.is_empty() {
            ret.push('1');
        }
        ret
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(MAX_VARIABLES);
        write!(f, "{}", self.to_cube_string(width))
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({:#b})", self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minterm() {
        let t = Term::from_minterm(1, 2);
        assert_eq!(t.raw(), 0b1001);
        assert_eq!(Term::from_minterm(2, 2).raw(), 0b0110);
        assert_eq!(Term::from_minterm(3, 2).raw(), 0b0101);
        assert_eq!(Term::from_minterm(0, 3).raw(), 0b101010);
        assert_eq!(t.nb_literals(), 2);
        assert_eq!(t.nb_dont_cares(2), 0);
        assert_eq!(t.nb_ones(), 1);
    }

    #[test]
    fn test_round_trip() {
        for nb_vars in 1..=MAX_VARIABLES {
            for v in [0u32, 1, 5, 127, (1 << nb_vars) - 1] {
                let v = v & ((1 << nb_vars) - 1);
                assert_eq!(Term::from_minterm(v, nb_vars).value(), v);
            }
        }
    }

    #[test]
    fn test_value_with_dont_care() {
        let t = Term::from_literals(&[Literal::Absent, Literal::Positive, Literal::Negative]);
        assert_eq!(t.value(), 0b010);
        assert_eq!(t.nb_literals(), 2);
        assert_eq!(t.nb_dont_cares(3), 1);
        assert_eq!(t.minterms(3), vec![2, 3]);
    }

    #[test]
    fn test_join() {
        let t1 = Term::from_minterm(1, 2);
        let t2 = Term::from_minterm(2, 2);
        let t3 = Term::from_minterm(3, 2);
        assert!(t1.is_adjacent(&t3));
        assert!(t2.is_adjacent(&t3));
        assert!(!t1.is_adjacent(&t2));
        assert_eq!(t1.distance(&t2), 2);
        let j13 = t1.join(&t3);
        assert_eq!(j13.raw(), 0b0001);
        assert_eq!(j13, t3.join(&t1));
        assert_eq!(t2.join(&t3).raw(), 0b0100);
        assert_eq!(j13.nb_literals(), 1);
        assert_eq!(j13.minterms(2), vec![1, 3]);
    }

    #[test]
    fn test_compatible() {
        let a = Term::from_literals(&[Literal::Absent, Literal::Positive]);
        let b = Term::from_literals(&[Literal::Absent, Literal::Negative]);
        let c = Term::from_literals(&[Literal::Positive, Literal::Absent]);
        assert!(a.is_compatible(&b));
        assert!(b.is_compatible(&a));
        assert!(!a.is_compatible(&c));
        assert!(!c.is_compatible(&a));
        assert!(a.is_adjacent(&b));
        assert!(a.join(&b).nb_literals() == 0);
        // Distance 1 but the absent variables differ
        let d = Term::from_literals(&[Literal::Positive, Literal::Positive]);
        assert_eq!(a.distance(&d), 1);
        assert!(!a.is_adjacent(&d));
    }

    #[test]
    fn test_covers() {
        let implicant = Term::from_literals(&[Literal::Absent, Literal::Positive]);
        assert!(implicant.covers(&Term::from_minterm(2, 2)));
        assert!(implicant.covers(&Term::from_minterm(3, 2)));
        assert!(!implicant.covers(&Term::from_minterm(0, 2)));
        assert!(!implicant.covers(&Term::from_minterm(1, 2)));
        assert!(Term::default().covers(&Term::from_minterm(1, 2)));
    }

    #[test]
    fn test_format() {
        let names = VariableNames::default();
        let t = Term::from_literals(&[Literal::Absent, Literal::Positive, Literal::Negative]);
        assert_eq!(t.to_cube_string(3), "01-");
        assert_eq!(format!("{t:3}"), "01-");
        assert_eq!(t.to_product_string(&names, 3).unwrap(), "x'y");
        assert_eq!(
            Term::from_minterm(5, 3).to_product_string(&names, 3).unwrap(),
            "xy'z"
        );
        assert_eq!(Term::default().to_product_string(&names, 3).unwrap(), "1");
        assert_eq!(format!("{:?}", Term::from_minterm(1, 2)), "Term(0b1001)");
    }

    #[test]
    fn test_not_enough_names() {
        let names = VariableNames::from_chars("a");
        let t = Term::from_minterm(5, 3);
        assert!(matches!(
            t.to_product_string(&names, 3),
            Err(Error::NotEnoughNames {
                expected: 3,
                got: 1
            })
        ));
        assert_eq!(t.to_product_string(&names, 1).unwrap(), "a");
    }
}
