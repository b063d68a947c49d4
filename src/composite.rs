//! Composite sets: unions of atoms and the set algebra over them.
//!
//! A [`CompositeSet`] is an ordered, duplicate-free collection of atoms of one
//! type, interpreted as their union. Every operation is written once, in terms
//! of the [`Atom`] contract, and returns a new composite.
//!
//! ## Canonical form
//!
//! A composite is *canonical* when its atoms are pairwise disjoint, sorted, and
//! no two neighbours can be merged into one atom. Composites built by hand need
//! not be canonical; [`make_disjoint`](CompositeSet::make_disjoint) turns any
//! collection into canonical form, and both [`union_with`](CompositeSet::union_with)
//! and [`difference_with`](CompositeSet::difference_with) always return
//! canonical results.
//!
//! ## Normalization
//!
//! [`make_disjoint`](CompositeSet::make_disjoint) repeatedly splits the
//! collection into the parts covered by exactly one atom and the pairwise
//! intersections. Each round removes one level of overlap, so the number of
//! rounds is bounded by the largest number of atoms sharing a single point.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Not, Sub};

use log::debug;

use crate::atom::Atom;
use crate::types::EMPTY_SET_SYMBOL;
use crate::utils::unique_pairs;

/// Union of atoms of type `A`.
#[derive(Debug, Clone)]
pub struct CompositeSet<A: Atom> {
    atoms: BTreeSet<A>,
    domain: A::Domain,
}

impl<A: Atom> CompositeSet<A> {
    /// Creates an empty composite in the given domain.
    pub fn empty(domain: A::Domain) -> Self {
        Self {
            atoms: BTreeSet::new(),
            domain,
        }
    }

    /// Creates a composite from the given atoms, as they are (no normalization).
    pub fn from_atoms(domain: A::Domain, atoms: impl IntoIterator<Item = A>) -> Self {
        Self {
            atoms: atoms.into_iter().collect(),
            domain,
        }
    }

    /// Creates a composite holding a single atom.
    pub fn from_atom(atom: A) -> Self {
        let domain = atom.domain();
        Self::from_atoms(domain, [atom])
    }

    /// The composite covering the whole universe of `domain`.
    pub fn universal(domain: A::Domain) -> Self {
        let atoms = A::universal(&domain);
        Self { atoms, domain }
    }

    pub fn domain(&self) -> &A::Domain {
        &self.domain
    }

    pub fn atoms(&self) -> &BTreeSet<A> {
        &self.atoms
    }

    pub fn into_atoms(self) -> BTreeSet<A> {
        self.atoms
    }

    /// Iterates over the atoms in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, A> {
        self.atoms.iter()
    }

    /// Number of atoms (not the number of covered elements).
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Adds an atom without normalizing. Returns true if it was not present.
    pub fn insert(&mut self, atom: A) -> bool {
        self.atoms.insert(atom)
    }

    /// Creates a composite in the same domain as `self`.
    fn with_atoms(&self, atoms: BTreeSet<A>) -> Self {
        Self {
            atoms,
            domain: self.domain.clone(),
        }
    }
}

impl<A: Atom> CompositeSet<A> {
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Checks that no two atoms intersect.
    pub fn is_disjoint(&self) -> bool {
        let atoms: Vec<&A> = self.atoms.iter().collect();
        let disjoint = unique_pairs(&atoms).all(|(a, b)| a.intersection_with(b).is_empty());
        disjoint
    }

    /// Checks whether some atom contains `element`.
    pub fn contains_element(&self, element: &A::Element) -> bool {
        self.atoms.iter().any(|atom| atom.contains(element))
    }

    /// Checks whether `other` is a subset of `self`.
    ///
    /// The check compares `self ∩ other` with `other` structurally, so `other`
    /// is expected to be canonical.
    pub fn contains(&self, other: &Self) -> bool {
        self.intersection_with(other) == *other
    }

    /// Intersects every atom with `atom`, keeping the non-empty results.
    pub fn intersection_with_atom(&self, atom: &A) -> Self {
        let atoms = self
            .atoms
            .iter()
            .map(|own| own.intersection_with(atom))
            .filter(|intersection| !intersection.is_empty())
            .collect();
        self.with_atoms(atoms)
    }

    fn intersection_with_atoms<'a>(&self, atoms: impl IntoIterator<Item = &'a A>) -> Self
    where
        A: 'a,
    {
        let mut result = BTreeSet::new();
        for atom in atoms {
            result.extend(self.intersection_with_atom(atom).atoms);
        }
        self.with_atoms(result)
    }

    /// Intersection with another composite.
    ///
    /// The result is disjoint whenever both operands are, but it is not
    /// simplified; normalize non-canonical inputs first.
    pub fn intersection_with(&self, other: &Self) -> Self {
        debug!("intersection_with(self = {}, other = {})", self, other);
        self.intersection_with_atoms(&other.atoms)
    }

    /// Complement within the universe: the intersection of the complements of all atoms.
    pub fn complement(&self) -> Self {
        debug!("complement(self = {})", self);

        let mut atoms = self.atoms.iter();
        let Some(first) = atoms.next() else {
            return Self::universal(self.domain.clone());
        };

        let mut result = self.with_atoms(first.complement());
        for atom in atoms {
            if result.is_empty() {
                break;
            }
            result = result.intersection_with_atoms(&atom.complement());
        }
        result
    }

    /// Union with a single atom, in canonical form.
    pub fn union_with_atom(&self, atom: &A) -> Self {
        debug!("union_with_atom(self = {}, atom = {})", self, atom);
        let mut result = self.clone();
        result.atoms.insert(atom.clone());
        result.make_disjoint()
    }

    /// Union with another composite, in canonical form.
    pub fn union_with(&self, other: &Self) -> Self {
        debug!("union_with(self = {}, other = {})", self, other);
        let mut result = self.clone();
        result.atoms.extend(other.atoms.iter().cloned());
        result.make_disjoint()
    }

    /// Removes `atom` from every member atom, in canonical form.
    pub fn difference_with_atom(&self, atom: &A) -> Self {
        debug!("difference_with_atom(self = {}, atom = {})", self, atom);
        let mut result = BTreeSet::new();
        for own in &self.atoms {
            result.extend(own.difference_with(atom));
        }
        self.with_atoms(result).make_disjoint()
    }

    /// Set difference `self - other`, in canonical form.
    ///
    /// Each own atom is narrowed by its differences against every atom of
    /// `other` in turn, which computes `a ∩ ¬b₁ ∩ ¬b₂ ∩ ...` incrementally.
    pub fn difference_with(&self, other: &Self) -> Self {
        debug!("difference_with(self = {}, other = {})", self, other);
        let mut result = BTreeSet::new();

        for own in &self.atoms {
            let mut current = self.with_atoms(BTreeSet::from([own.clone()]));

            for other_atom in &other.atoms {
                let difference = self.with_atoms(own.difference_with(other_atom));
                current = current.intersection_with(&difference);
                if current.is_empty() {
                    break;
                }
            }

            result.extend(current.atoms);
        }

        self.with_atoms(result).make_disjoint()
    }
}

impl<A: Atom> CompositeSet<A> {
    /// Separates the parts of each atom covered by no other atom from the pairwise intersections.
    ///
    /// Returns `(disjoint, non_disjoint)`: `disjoint` holds, for every atom, what
    /// is left after removing its intersections with all other atoms; these
    /// pieces are pairwise disjoint. `non_disjoint` holds the non-empty pairwise
    /// intersections, which may still overlap one another.
    ///
    /// The remainder of an atom is kept as a collection of pieces, since cutting
    /// an intersection out of the middle of an atom leaves more than one piece.
    pub fn split_into_disjoint_and_non_disjoint(&self) -> (Self, Self) {
        debug!("split_into_disjoint_and_non_disjoint(self = {})", self);

        let mut disjoint = BTreeSet::new();
        let mut non_disjoint = BTreeSet::new();

        for (i, atom_i) in self.atoms.iter().enumerate() {
            if atom_i.is_empty() {
                continue;
            }

            let mut difference = vec![atom_i.clone()];

            for (j, atom_j) in self.atoms.iter().enumerate() {
                if i == j {
                    continue;
                }

                let intersection = atom_i.intersection_with(atom_j);
                if intersection.is_empty() {
                    continue;
                }

                difference = difference
                    .iter()
                    .flat_map(|piece| piece.difference_with(&intersection))
                    .collect();
                non_disjoint.insert(intersection);

                if difference.is_empty() {
                    break;
                }
            }

            disjoint.extend(difference);
        }

        (self.with_atoms(disjoint), self.with_atoms(non_disjoint))
    }

    /// Converts the collection into an equivalent canonical union of disjoint atoms.
    pub fn make_disjoint(&self) -> Self {
        debug!("make_disjoint(self = {})", self);

        let (mut disjoint, mut intersections) = self.split_into_disjoint_and_non_disjoint();

        let mut round = 1;
        while !intersections.is_empty() {
            round += 1;
            debug!(
                "make_disjoint: round {}, {} intersections left",
                round,
                intersections.len()
            );

            let (current_disjoint, rest) = intersections.split_into_disjoint_and_non_disjoint();
            disjoint.atoms.extend(current_disjoint.atoms);
            intersections = rest;
        }

        let result = disjoint.simplify();
        debug!("make_disjoint: {} rounds, result = {}", round, result);
        result
    }

    /// Merges adjacent or duplicate atoms, as defined by the atom type.
    pub fn simplify(&self) -> Self {
        self.with_atoms(A::simplify(self.atoms.clone()))
    }
}

impl<A: Atom> PartialEq for CompositeSet<A> {
    fn eq(&self, other: &Self) -> bool {
        self.atoms == other.atoms
    }
}

impl<A: Atom> Eq for CompositeSet<A> {}

impl<A: Atom> Hash for CompositeSet<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.atoms.hash(state);
    }
}

impl<A: Atom> fmt::Display for CompositeSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", EMPTY_SET_SYMBOL);
        }
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, " u ")?;
            }
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}

impl<'a, A: Atom> IntoIterator for &'a CompositeSet<A> {
    type Item = &'a A;
    type IntoIter = btree_set::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

impl<A: Atom> BitAnd for &CompositeSet<A> {
    type Output = CompositeSet<A>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection_with(rhs)
    }
}

impl<A: Atom> BitOr for &CompositeSet<A> {
    type Output = CompositeSet<A>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union_with(rhs)
    }
}

impl<A: Atom> Sub for &CompositeSet<A> {
    type Output = CompositeSet<A>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference_with(rhs)
    }
}

impl<A: Atom> Not for &CompositeSet<A> {
    type Output = CompositeSet<A>;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::{closed, closed_open, empty, open, open_closed, reals, Interval, SimpleInterval};
    use crate::types::BorderType::*;

    use test_log::test;

    fn interval(atoms: &[SimpleInterval]) -> Interval {
        Interval::from_atoms((), atoms.iter().copied())
    }

    #[test]
    fn test_is_disjoint() {
        let a = interval(&[SimpleInterval::closed(0.0, 1.0), SimpleInterval::closed(2.0, 3.0)]);
        assert!(a.is_disjoint());
        let b = interval(&[SimpleInterval::closed(0.0, 1.0), SimpleInterval::closed(1.0, 3.0)]);
        assert!(!b.is_disjoint());
        assert!(empty().is_disjoint());
    }

    #[test]
    fn test_is_disjoint_checks_every_pair() {
        let a = interval(&[
            SimpleInterval::closed_open(0.0, 1.0),
            SimpleInterval::closed(1.0, 2.0),
            SimpleInterval::open_closed(2.0, 3.0),
        ]);
        assert!(a.is_disjoint());
        let b = interval(&[
            SimpleInterval::closed(0.0, 1.0),
            SimpleInterval::open(1.0, 2.0),
            SimpleInterval::closed(0.5, 0.75),
        ]);
        assert!(!b.is_disjoint());
        assert!(closed(0.0, 1.0).is_disjoint());
    }

    #[test]
    fn test_split_into_disjoint_and_non_disjoint() {
        let composite = interval(&[
            SimpleInterval::new(0.0, 1.0, Closed, Open),
            SimpleInterval::new(1.0, 1.5, Closed, Open),
            SimpleInterval::new(1.5, 2.0, Open, Closed),
            SimpleInterval::new(3.0, 5.0, Closed, Closed),
        ]);
        let (disjoint, non_disjoint) = composite.split_into_disjoint_and_non_disjoint();
        assert!(disjoint.is_disjoint());
        assert!(non_disjoint.is_empty());
        assert_eq!(disjoint, composite);
    }

    #[test]
    fn test_split_overlapping() {
        let composite = interval(&[SimpleInterval::closed(0.0, 2.0), SimpleInterval::closed(1.0, 3.0)]);
        let (disjoint, non_disjoint) = composite.split_into_disjoint_and_non_disjoint();
        assert_eq!(
            disjoint,
            interval(&[
                SimpleInterval::new(0.0, 1.0, Closed, Open),
                SimpleInterval::new(2.0, 3.0, Open, Closed),
            ])
        );
        assert_eq!(non_disjoint, closed(1.0, 2.0));
    }

    #[test]
    fn test_split_keeps_both_sides_of_a_contained_atom() {
        let composite = interval(&[SimpleInterval::closed(0.0, 3.0), SimpleInterval::closed(1.0, 2.0)]);
        let (disjoint, non_disjoint) = composite.split_into_disjoint_and_non_disjoint();
        assert_eq!(
            disjoint,
            interval(&[
                SimpleInterval::new(0.0, 1.0, Closed, Open),
                SimpleInterval::new(2.0, 3.0, Open, Closed),
            ])
        );
        assert_eq!(non_disjoint, closed(1.0, 2.0));
        assert_eq!(composite.make_disjoint(), closed(0.0, 3.0));
    }

    #[test]
    fn test_make_disjoint_chain() {
        let composite = interval(&[
            SimpleInterval::closed(0.0, 1.0),
            SimpleInterval::closed(0.5, 1.5),
            SimpleInterval::closed(1.5, 2.0),
            SimpleInterval::closed(2.0, 3.0),
        ]);
        let disjoint = composite.make_disjoint();
        assert_eq!(disjoint.len(), 1);
        assert!(disjoint.is_disjoint());
        assert_eq!(disjoint, closed(0.0, 3.0));
    }

    #[test]
    fn test_make_disjoint_triple_overlap() {
        let composite = interval(&[
            SimpleInterval::closed(0.0, 2.0),
            SimpleInterval::closed(1.0, 3.0),
            SimpleInterval::closed(1.5, 2.5),
        ]);
        assert_eq!(composite.make_disjoint(), closed(0.0, 3.0));
    }

    #[test]
    fn test_make_disjoint_drops_empty_atoms() {
        let composite = interval(&[SimpleInterval::empty(), SimpleInterval::closed(0.0, 1.0)]);
        assert_eq!(composite.make_disjoint(), closed(0.0, 1.0));
    }

    #[test]
    fn test_intersection_with_atom() {
        let composite = interval(&[SimpleInterval::closed(0.0, 1.0), SimpleInterval::closed(2.0, 3.0)]);
        let intersection = composite.intersection_with_atom(&SimpleInterval::closed(0.5, 2.5));
        assert!(intersection.is_disjoint());
        assert_eq!(intersection.len(), 2);
        assert_eq!(
            intersection,
            interval(&[SimpleInterval::closed(0.5, 1.0), SimpleInterval::closed(2.0, 2.5)])
        );
    }

    #[test]
    fn test_intersection_with_composite() {
        let a = interval(&[SimpleInterval::closed(0.0, 1.0), SimpleInterval::closed(2.0, 3.0)]);
        let b = interval(&[SimpleInterval::closed(2.0, 3.0), SimpleInterval::closed(4.0, 5.0)]);
        let intersection = a.intersection_with(&b);
        assert!(intersection.is_disjoint());
        assert_eq!(intersection, closed(2.0, 3.0));
        assert_eq!(&a & &b, intersection);
    }

    #[test]
    fn test_complement() {
        let composite = interval(&[SimpleInterval::closed(0.0, 1.0), SimpleInterval::closed(2.0, 3.0)]);
        let complement = composite.complement();
        assert_eq!(complement.len(), 3);
        assert!(complement.is_disjoint());
        assert!(complement.intersection_with(&composite).is_empty());
        assert_eq!(complement.to_string(), "(-inf, 0) u (1, 2) u (3, inf)");
    }

    #[test]
    fn test_complement_of_empty_is_reals() {
        assert_eq!(empty().complement(), reals());
        assert!(reals().complement().is_empty());
    }

    #[test]
    fn test_union() {
        let a = closed(0.0, 1.0);
        let union = a.union_with_atom(&SimpleInterval::closed(0.5, 1.5));
        assert_eq!(union.len(), 1);
        assert!(union.is_disjoint());

        let other = interval(&[SimpleInterval::closed(0.5, 1.5), SimpleInterval::closed(2.0, 3.0)]);
        let union_2 = union.union_with(&other);
        assert_eq!(union_2.len(), 2);
        assert!(union_2.is_disjoint());
        assert_eq!(union_2.to_string(), "[0, 1.5] u [2, 3]");
    }

    #[test]
    fn test_difference() {
        let other = interval(&[SimpleInterval::closed(0.5, 1.5), SimpleInterval::closed(2.0, 3.0)]);
        let difference = other.difference_with_atom(&SimpleInterval::closed(0.0, 1.0));
        assert_eq!(difference.len(), 2);
        assert!(difference.is_disjoint());
        assert_eq!(difference.to_string(), "(1, 1.5] u [2, 3]");

        let difference_2 = other.difference_with(&difference);
        assert_eq!(difference_2.len(), 1);
        assert!(difference_2.is_disjoint());
        assert_eq!(difference_2, closed(0.5, 1.0));
    }

    #[test]
    fn test_difference_with_empty() {
        let a = closed(0.0, 1.0);
        assert_eq!(a.difference_with(&empty()), a);
        assert!(empty().difference_with(&a).is_empty());
        assert!(a.difference_with(&a).is_empty());
    }

    #[test]
    fn test_difference_splits_atom() {
        let a = open_closed(0.0, 3.0);
        let b = open_closed(1.0, 2.0);
        assert_eq!((&a - &b).to_string(), "(0, 1] u (2, 3]");
    }

    #[test]
    fn test_contains() {
        let composite = interval(&[SimpleInterval::closed(0.0, 1.0), SimpleInterval::closed(2.0, 3.0)]);
        assert!(composite.contains_element(&0.5));
        assert!(!composite.contains_element(&1.5));
        assert!(composite.contains(&closed(2.5, 2.7)));
        assert!(!composite.contains(&closed(0.5, 1.5)));
        assert!(composite.contains(&composite));
        assert!(composite.contains(&empty()));
    }

    #[test]
    fn test_operators() {
        let a = closed_open(0.0, 2.0);
        let b = open(1.0, 3.0);
        assert_eq!(&a | &b, closed_open(0.0, 3.0));
        assert_eq!(&a & &b, open(1.0, 2.0));
        assert_eq!(&a - &b, closed(0.0, 1.0));
        assert_eq!(!&a, a.complement());
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(empty().to_string(), "∅");
    }

    #[test]
    fn test_equality_ignores_construction_order() {
        let a = interval(&[SimpleInterval::closed(2.0, 3.0), SimpleInterval::closed(0.0, 1.0)]);
        let b = interval(&[SimpleInterval::closed(0.0, 1.0), SimpleInterval::closed(2.0, 3.0)]);
        assert_eq!(a, b);
        let atoms: Vec<_> = a.iter().copied().collect();
        assert_eq!(atoms[0], SimpleInterval::closed(0.0, 1.0));
    }
}
