//! Negated-existential bundle.

use crate::elements::{Elements, Quantify};
use crate::relation::NotEqual;

/// Compares as true when no bundled value satisfies the relation.
///
/// Every operator is the negation of the matching [`AnyOf`](crate::AnyOf)
/// combination:
///
/// - `==`, `<`, `<=`, `>`, `>=`: not (some element `OP u`). An empty bundle
///   satisfies all of them.
/// - `!=`: not (every element `!= u`), which holds when some element fails
///   its own `!=`.
///
/// # Examples
///
/// ```
/// use dry_comparisons::none_of;
///
/// let x: i32 = 5;
/// assert!(none_of!(1, 2, 3) == x);
/// assert!(none_of!(6, 7) < x);
/// assert!(none_of!(4, 5) != x);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NoneOf<T>(T);

/// Bundles a tuple of values into a [`NoneOf`].
#[inline]
pub const fn none_of<T: Elements>(elements: T) -> NoneOf<T> {
    NoneOf::new(elements)
}

impl<T> NoneOf<T> {
    #[inline]
    fn quantify<R, U: ?Sized>(&self, u: &U) -> bool
    where
        T: Quantify<U, R>,
    {
        !<T as Quantify<U, R>>::exists(&self.0, u)
    }

    #[inline]
    fn quantify_ne<U: ?Sized>(&self, u: &U) -> bool
    where
        T: Quantify<U, NotEqual>,
    {
        !<T as Quantify<U, NotEqual>>::for_all(&self.0, u)
    }
}

bundle_impls!(NoneOf);
