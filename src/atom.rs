//! The atom contract.
//!
//! An atom (or *simple set*) is an indivisible member of one sigma algebra: an
//! interval, a single labeled element, or anything else that can intersect,
//! complement and compare itself. [`CompositeSet`][crate::composite::CompositeSet]
//! implements the full set algebra once on top of this trait, so a new kind of
//! measurable space only has to provide an [`Atom`] implementation.
//!
//! Atoms never mix: an algebra is always homogeneous over one atom type.

use std::collections::BTreeSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Capabilities required of every atomic set type.
///
/// # Invariants
///
/// - The order is total and agrees with structural equality; composites store
///   their atoms in a [`BTreeSet`] ordered by it.
/// - [`is_empty`](Atom::is_empty) is decided from the atom's own fields.
/// - Operations return new atoms and never mutate their operands.
/// - Atoms that are combined must belong to the same [`Domain`](Atom::Domain).
///   This is a precondition, checked at most by debug assertions.
pub trait Atom: Clone + Ord + Hash + Debug + Display {
    /// A single point of the universe, as accepted by [`contains`](Atom::contains).
    type Element: ?Sized;

    /// Shared context of the algebra the atom lives in.
    ///
    /// Intervals need none (`()`), symbolic atoms carry their universe.
    type Domain: Clone + Debug;

    /// The context this atom belongs to.
    fn domain(&self) -> Self::Domain;

    /// The atoms whose union is the whole universe of `domain`.
    fn universal(domain: &Self::Domain) -> BTreeSet<Self>;

    /// Atom-level intersection. The result may be empty.
    fn intersection_with(&self, other: &Self) -> Self;

    /// Complement within the universe, as a set of pairwise disjoint atoms.
    fn complement(&self) -> BTreeSet<Self>;

    /// Membership test for a single element of the universe.
    fn contains(&self, element: &Self::Element) -> bool;

    fn is_empty(&self) -> bool;

    /// Set difference `self - other`, as a set of pairwise disjoint non-empty atoms.
    ///
    /// Derived from [`intersection_with`](Atom::intersection_with) and
    /// [`complement`](Atom::complement): the part of `self` outside of
    /// `self ∩ other` is the union of `self ∩ c` over every piece `c` of the
    /// complement of the intersection.
    fn difference_with(&self, other: &Self) -> BTreeSet<Self> {
        let intersection = self.intersection_with(other);

        if intersection.is_empty() {
            return BTreeSet::from([self.clone()]);
        }

        intersection
            .complement()
            .iter()
            .map(|piece| self.intersection_with(piece))
            .filter(|piece| !piece.is_empty())
            .collect()
    }

    /// Merge adjacent or duplicate atoms of an already disjoint collection.
    ///
    /// The default keeps the atoms as they are: the ordered set already removes
    /// duplicates, which is all that atoms without adjacency need.
    fn simplify(atoms: BTreeSet<Self>) -> BTreeSet<Self> {
        atoms
    }
}
