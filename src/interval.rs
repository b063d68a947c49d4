//! Intervals over the reals.
//!
//! A [`SimpleInterval`] is a single interval with an independent
//! [`BorderType`] on each side; unbounded ends are `±∞` with an open border.
//! An [`Interval`] is a union of simple intervals.
//!
//! ```
//! use sigma_rs::interval::{closed, closed_open};
//!
//! let a = closed(0.0, 1.0);
//! let b = closed_open(0.5, 2.0);
//! assert_eq!(a.union_with(&b).to_string(), "[0, 2)");
//! assert_eq!(a.complement().to_string(), "(-inf, 0) u (1, inf)");
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::atom::Atom;
use crate::composite::CompositeSet;
use crate::types::{BorderType, EMPTY_SET_SYMBOL};
use crate::utils::{cmp_f64, hash_f64};

/// An atomic interval `{x : lower ◁ x ◁ upper}`.
///
/// Emptiness is derived, never a construction error: any pair of bounds is
/// accepted, and the interval is empty when `lower > upper`, or when
/// `lower == upper` and either border is open.
///
/// Intervals are ordered by `lower`, then `upper`, then by their borders.
#[derive(Debug, Copy, Clone)]
pub struct SimpleInterval {
    pub lower: f64,
    pub upper: f64,
    pub left: BorderType,
    pub right: BorderType,
}

impl SimpleInterval {
    pub fn new(lower: f64, upper: f64, left: BorderType, right: BorderType) -> Self {
        Self {
            lower,
            upper,
            left,
            right,
        }
    }

    /// `[lower, upper]`
    pub fn closed(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, BorderType::Closed, BorderType::Closed)
    }

    /// `(lower, upper)`
    pub fn open(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, BorderType::Open, BorderType::Open)
    }

    /// `(lower, upper]`
    pub fn open_closed(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, BorderType::Open, BorderType::Closed)
    }

    /// `[lower, upper)`
    pub fn closed_open(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, BorderType::Closed, BorderType::Open)
    }

    /// `[value, value]`
    pub fn singleton(value: f64) -> Self {
        Self::closed(value, value)
    }

    /// The canonical empty interval `(0, 0)`.
    pub fn empty() -> Self {
        Self::open(0.0, 0.0)
    }

    /// `(-∞, ∞)`
    pub fn reals() -> Self {
        Self::open(f64::NEG_INFINITY, f64::INFINITY)
    }
}

impl Atom for SimpleInterval {
    type Element = f64;
    type Domain = ();

    fn domain(&self) -> Self::Domain {}

    fn universal(_: &Self::Domain) -> BTreeSet<Self> {
        BTreeSet::from([Self::reals()])
    }

    /// Takes the larger lower and the smaller upper bound, each with its own border.
    /// When both bounds coincide on a side, the open border wins.
    fn intersection_with(&self, other: &Self) -> Self {
        let (lower, left) = match cmp_f64(self.lower, other.lower) {
            Ordering::Greater => (self.lower, self.left),
            Ordering::Less => (other.lower, other.left),
            Ordering::Equal => (self.lower, self.left.intersect(other.left)),
        };
        let (upper, right) = match cmp_f64(self.upper, other.upper) {
            Ordering::Less => (self.upper, self.right),
            Ordering::Greater => (other.upper, other.right),
            Ordering::Equal => (self.upper, self.right.intersect(other.right)),
        };

        let result = Self::new(lower, upper, left, right);
        if result.is_empty() {
            Self::empty()
        } else {
            result
        }
    }

    /// Up to two half-unbounded intervals: everything below and everything above.
    fn complement(&self) -> BTreeSet<Self> {
        if self.is_empty() {
            return Self::universal(&());
        }

        let below = Self::new(f64::NEG_INFINITY, self.lower, BorderType::Open, self.left.invert());
        let above = Self::new(self.upper, f64::INFINITY, self.right.invert(), BorderType::Open);

        [below, above].into_iter().filter(|piece| !piece.is_empty()).collect()
    }

    fn contains(&self, element: &f64) -> bool {
        self.left.admits(self.lower, *element) && self.right.admits(*element, self.upper)
    }

    fn is_empty(&self) -> bool {
        match cmp_f64(self.lower, self.upper) {
            Ordering::Greater => true,
            Ordering::Equal => self.left.is_open() || self.right.is_open(),
            Ordering::Less => false,
        }
    }

    /// Merges neighbours that touch at a shared bound included on at least one side.
    fn simplify(atoms: BTreeSet<Self>) -> BTreeSet<Self> {
        let mut result = BTreeSet::new();

        let mut atoms = atoms.into_iter().filter(|atom| !atom.is_empty());
        let Some(mut current) = atoms.next() else {
            return result;
        };

        for next in atoms {
            let touching = cmp_f64(current.upper, next.lower) == Ordering::Equal;
            if touching && (current.right.is_closed() || next.left.is_closed()) {
                current = Self::new(current.lower, next.upper, current.left, next.right);
            } else {
                result.insert(current);
                current = next;
            }
        }

        result.insert(current);
        result
    }
}

impl Ord for SimpleInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_f64(self.lower, other.lower)
            .then_with(|| cmp_f64(self.upper, other.upper))
            .then_with(|| self.left.cmp(&other.left))
            .then_with(|| self.right.cmp(&other.right))
    }
}

impl PartialOrd for SimpleInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SimpleInterval {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimpleInterval {}

impl Hash for SimpleInterval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.lower, state);
        hash_f64(self.upper, state);
        self.left.hash(state);
        self.right.hash(state);
    }
}

impl fmt::Display for SimpleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", EMPTY_SET_SYMBOL);
        }
        let left = if self.left.is_closed() { '[' } else { '(' };
        let right = if self.right.is_closed() { ']' } else { ')' };
        write!(f, "{}{}, {}{}", left, self.lower, self.upper, right)
    }
}

/// A union of [`SimpleInterval`]s.
pub type Interval = CompositeSet<SimpleInterval>;

fn from_simple(simple: SimpleInterval) -> Interval {
    Interval::from_atoms((), Some(simple).filter(|s| !s.is_empty()))
}

/// `[lower, upper]`
pub fn closed(lower: f64, upper: f64) -> Interval {
    from_simple(SimpleInterval::closed(lower, upper))
}

/// `(lower, upper)`
pub fn open(lower: f64, upper: f64) -> Interval {
    from_simple(SimpleInterval::open(lower, upper))
}

/// `(lower, upper]`
pub fn open_closed(lower: f64, upper: f64) -> Interval {
    from_simple(SimpleInterval::open_closed(lower, upper))
}

/// `[lower, upper)`
pub fn closed_open(lower: f64, upper: f64) -> Interval {
    from_simple(SimpleInterval::closed_open(lower, upper))
}

/// `[value, value]`
pub fn singleton(value: f64) -> Interval {
    from_simple(SimpleInterval::singleton(value))
}

/// The empty interval.
pub fn empty() -> Interval {
    Interval::empty(())
}

/// The whole real line.
pub fn reals() -> Interval {
    Interval::universal(())
}
