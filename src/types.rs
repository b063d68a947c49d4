//! Border types of interval endpoints and the small algebra over them.
//!
//! Every side of a [`SimpleInterval`][crate::interval::SimpleInterval] carries
//! its own [`BorderType`], so `[0, 1)` and `(0, 1]` are distinct atoms.
use std::fmt;

/// Symbol used to render an empty atom or an empty composite set.
pub const EMPTY_SET_SYMBOL: &str = "∅";

/// Whether an interval endpoint belongs to the interval.
///
/// `Open` sorts before `Closed`, which makes the atom order total even for
/// intervals that only differ in their borders.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BorderType {
    /// The endpoint is excluded (`<`).
    Open,
    /// The endpoint is included (`<=`).
    Closed,
}

impl BorderType {
    /// Returns true for [`BorderType::Open`].
    pub fn is_open(self) -> bool {
        self == BorderType::Open
    }

    /// Returns true for [`BorderType::Closed`].
    pub fn is_closed(self) -> bool {
        self == BorderType::Closed
    }

    /// Swaps `Open` and `Closed`.
    pub fn invert(self) -> Self {
        match self {
            BorderType::Open => BorderType::Closed,
            BorderType::Closed => BorderType::Open,
        }
    }

    /// Logical intersection of two borders at the same point: open wins.
    pub fn intersect(self, other: Self) -> Self {
        if self.is_open() || other.is_open() {
            BorderType::Open
        } else {
            BorderType::Closed
        }
    }

    /// Compare `bound` against `value` from this border's side.
    ///
    /// Returns `bound < value` for an open border and `bound <= value` for a closed one.
    pub(crate) fn admits(self, bound: f64, value: f64) -> bool {
        match self {
            BorderType::Open => bound < value,
            BorderType::Closed => bound <= value,
        }
    }
}

impl fmt::Display for BorderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderType::Open => write!(f, "open"),
            BorderType::Closed => write!(f, "closed"),
        }
    }
}

/// Free-function form of [`BorderType::intersect`].
pub fn intersect_borders(border_1: BorderType, border_2: BorderType) -> BorderType {
    border_1.intersect(border_2)
}

/// Free-function form of [`BorderType::invert`].
pub fn invert_border(border: BorderType) -> BorderType {
    border.invert()
}
