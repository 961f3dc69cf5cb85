//! Fixed-arity heterogeneous element storage.
//!
//! A bundle keeps its values in an ordinary tuple. This module describes
//! what a tuple must support to be compared against an operand of type `U`:
//!
//! - [`Elements`] marks the tuple types a bundle can hold (arity 0 to 12).
//! - [`Quantify`] folds one [`Relation`](crate::Relation) over every element,
//!   either existentially or universally.
//! - [`EqElements`] and [`OrdElements`] bundle the quantifier bounds needed
//!   for the equality and ordering operators respectively.
//!
//! None of these traits are meant to be spelled out by callers beyond the
//! occasional `where` clause; the tuple impls live in `tuples.rs`.

mod tuples;

use crate::relation::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

/// A tuple type that can be held by a bundle.
///
/// This trait is sealed: it is implemented for `()` and for tuples of up to
/// twelve elements, and cannot be implemented elsewhere.
pub trait Elements: private::Sealed {
    /// Number of values in the tuple.
    const ARITY: usize;
}

/// Folds the relation `R` over every element of a tuple against `u`.
///
/// Both folds evaluate left to right and stop at the first element that
/// settles the answer.
pub trait Quantify<U: ?Sized, R>: Elements {
    /// `true` iff at least one element relates to `u`. `false` when empty.
    fn exists(&self, u: &U) -> bool;

    /// `true` iff every element relates to `u`. `true` when empty.
    fn for_all(&self, u: &U) -> bool;
}

/// Every element supports `==` and `!=` against `U`.
pub trait EqElements<U: ?Sized>: Quantify<U, Equal> + Quantify<U, NotEqual> {}

impl<T, U: ?Sized> EqElements<U> for T where T: Quantify<U, Equal> + Quantify<U, NotEqual> {}

/// Every element supports all six relational operators against `U`.
pub trait OrdElements<U: ?Sized>:
    EqElements<U>
    + Quantify<U, Less>
    + Quantify<U, LessEqual>
    + Quantify<U, Greater>
    + Quantify<U, GreaterEqual>
{
}

impl<T, U: ?Sized> OrdElements<U> for T where
    T: EqElements<U>
        + Quantify<U, Less>
        + Quantify<U, LessEqual>
        + Quantify<U, Greater>
        + Quantify<U, GreaterEqual>
{
}

mod private {
    /// Keeps [`Elements`](super::Elements) closed to the tuple impls.
    pub trait Sealed {}
}
