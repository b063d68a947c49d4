//! # sigma-rs: Sigma algebras in Rust
//!
//! **`sigma-rs`** is a library for representing and manipulating measurable sets
//! built from atomic pieces. It ships two kinds of atoms: real intervals with open
//! or closed borders, and elements of a finite labeled universe.
//!
//! ## What is a composite set?
//!
//! Every set is a union of *atoms* of a single type. The set algebra (intersection,
//! union, complement, difference, containment) is written once over the [`Atom`]
//! trait and works the same for every atom type.
//!
//! Results of union and difference are always kept in **canonical form**: the atoms
//! are pairwise disjoint, sorted, and no two neighbours could be merged into one.
//! Two canonical sets are equal exactly when they cover the same elements, so
//! structural equality is set equality.
//!
//! ## Basic Usage
//!
//! ```rust
//! use sigma_rs::interval::{closed, open_closed};
//!
//! // 1. Build sets from atoms
//! let a = closed(0.0, 1.0);
//! let b = closed(0.5, 1.5);
//!
//! // 2. Combine them; unions are normalized automatically
//! let u = a.union_with(&b);
//! assert_eq!(u.to_string(), "[0, 1.5]");
//!
//! // 3. Complements may be unbounded
//! let c = open_closed(0.0, 1.0).complement();
//! assert_eq!(c.to_string(), "(-inf, 0] u (1, inf)");
//! assert!(c.contains_element(&-5.0));
//! ```
//!
//! Symbolic sets share one [`Universe`][crate::set::Universe]:
//!
//! ```rust
//! use sigma_rs::set::{Set, Universe};
//!
//! let universe = Universe::new(["a", "b", "c"]);
//! let a = Set::from_label(&universe, "a")?;
//! let bc = Set::from_labels(&universe, ["b", "c"])?;
//! assert_eq!(a.complement(), bc);
//! assert!(a.difference_with(&a).is_empty());
//! # Ok::<(), sigma_rs::error::Error>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`atom`]**: The [`Atom`] contract every atomic set type implements.
//! - **[`composite`]**: [`CompositeSet`] and the disjoint normalization algorithm.
//! - **[`interval`]**: Intervals over the reals.
//! - **[`set`]**: Finite symbolic sets.
//!
//! The library logs through the [`log`] facade and never installs a logger itself.

pub mod atom;
pub mod composite;
pub mod error;
pub mod interval;
pub mod set;
pub mod types;
pub mod utils;

pub use atom::Atom;
pub use composite::CompositeSet;
