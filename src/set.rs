//! Finite symbolic sets.
//!
//! A [`Universe`] is the fixed, ordered set of labels a symbolic algebra is
//! built over (in Kolmogorov's terms, the elementary events). It is created
//! once and shared through an [`Arc`] by every [`SetElement`] and [`Set`]
//! derived from it; operations hand the same reference on and never copy the
//! labels.
//!
//! ```
//! use sigma_rs::set::{Set, Universe};
//!
//! let universe = Universe::new(["a", "b", "c"]);
//! let a = Set::from_label(&universe, "a")?;
//! assert_eq!(a.complement().to_string(), "b u c");
//! # Ok::<(), sigma_rs::error::Error>(())
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::atom::Atom;
use crate::composite::CompositeSet;
use crate::error::{Error, Result};
use crate::types::EMPTY_SET_SYMBOL;

/// Ordered, duplicate-free collection of element labels.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Universe {
    labels: Vec<String>,
}

impl Universe {
    /// Creates a shared universe. Labels are sorted and deduplicated.
    pub fn new<I, S>(labels: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        Arc::new(Self {
            labels: labels.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `index`, if in range.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Position of `label`, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.binary_search_by(|candidate| candidate.as_str().cmp(label)).ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// A single element of a [`Universe`], or the empty set.
///
/// Equality and order only look at the element index; comparing elements of
/// different universes is a logic error (checked by debug assertions).
#[derive(Clone)]
pub struct SetElement {
    index: Option<usize>,
    universe: Arc<Universe>,
}

impl SetElement {
    /// The element at `index` of `universe`.
    pub fn new(index: usize, universe: &Arc<Universe>) -> Result<Self> {
        if index >= universe.len() {
            return Err(Error::IndexOutOfRange {
                index,
                size: universe.len(),
            });
        }
        Ok(Self {
            index: Some(index),
            universe: Arc::clone(universe),
        })
    }

    /// Like [`SetElement::new`], for callers holding signed indices.
    pub fn from_signed(index: i64, universe: &Arc<Universe>) -> Result<Self> {
        let index = usize::try_from(index).map_err(|_| Error::NegativeIndex(index))?;
        Self::new(index, universe)
    }

    /// The element labeled `label`.
    pub fn from_label(label: &str, universe: &Arc<Universe>) -> Result<Self> {
        if label.is_empty() {
            return Err(Error::EmptyLabel);
        }
        let index = universe
            .index_of(label)
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))?;
        Ok(Self {
            index: Some(index),
            universe: Arc::clone(universe),
        })
    }

    /// The empty element of `universe`.
    pub fn empty(universe: &Arc<Universe>) -> Self {
        Self {
            index: None,
            universe: Arc::clone(universe),
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn label(&self) -> Option<&str> {
        self.index.and_then(|index| self.universe.label(index))
    }

    pub fn universe(&self) -> &Arc<Universe> {
        &self.universe
    }

    fn shares_universe(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.universe, &other.universe)
    }
}

impl Atom for SetElement {
    type Element = str;
    type Domain = Arc<Universe>;

    fn domain(&self) -> Self::Domain {
        Arc::clone(&self.universe)
    }

    fn universal(domain: &Self::Domain) -> BTreeSet<Self> {
        (0..domain.len())
            .map(|index| Self {
                index: Some(index),
                universe: Arc::clone(domain),
            })
            .collect()
    }

    fn intersection_with(&self, other: &Self) -> Self {
        debug_assert!(self.shares_universe(other), "elements of different universes");
        if self.index == other.index {
            self.clone()
        } else {
            Self::empty(&self.universe)
        }
    }

    /// Every other element of the universe, one atom each.
    fn complement(&self) -> BTreeSet<Self> {
        let mut result = Self::universal(&self.universe);
        result.remove(self);
        result
    }

    fn contains(&self, element: &str) -> bool {
        self.label() == Some(element)
    }

    fn is_empty(&self) -> bool {
        self.index.is_none()
    }
}

impl Ord for SetElement {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(self.shares_universe(other), "elements of different universes");
        self.index.cmp(&other.index)
    }
}

impl PartialOrd for SetElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SetElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SetElement {}

impl Hash for SetElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl fmt::Debug for SetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetElement")
            .field("index", &self.index)
            .field("label", &self.label())
            .finish()
    }
}

impl fmt::Display for SetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{}", label),
            None => write!(f, "{}", EMPTY_SET_SYMBOL),
        }
    }
}

/// A union of [`SetElement`]s of one universe.
pub type Set = CompositeSet<SetElement>;

impl Set {
    /// The empty set over `universe`.
    pub fn new(universe: &Arc<Universe>) -> Self {
        Self::empty(Arc::clone(universe))
    }

    pub fn from_index(universe: &Arc<Universe>, index: usize) -> Result<Self> {
        Ok(Self::from_atom(SetElement::new(index, universe)?))
    }

    pub fn from_label(universe: &Arc<Universe>, label: &str) -> Result<Self> {
        Ok(Self::from_atom(SetElement::from_label(label, universe)?))
    }

    /// The set of all given labels. Fails on the first invalid one.
    pub fn from_labels<'a>(
        universe: &Arc<Universe>,
        labels: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let elements = labels
            .into_iter()
            .map(|label| SetElement::from_label(label, universe))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_atoms(Arc::clone(universe), elements))
    }
}
