//! Universal bundle.

use crate::elements::{Elements, Quantify};
use crate::relation::NotEqual;

/// Compares as true when every bundled value satisfies the relation.
///
/// - `==`, `<`, `<=`, `>`, `>=`: every element `OP u`. An empty bundle
///   satisfies all of them.
/// - `!=`: some element `!= u`.
///
/// # Examples
///
/// ```
/// use dry_comparisons::all_of;
///
/// let limit: i32 = 5;
/// assert!(all_of!(1, 2, 3) < limit);
/// assert!(all_of!(1, 5) != limit);
/// assert!(!(all_of!(1, 5) == limit));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AllOf<T>(T);

/// Bundles a tuple of values into an [`AllOf`].
#[inline]
pub const fn all_of<T: Elements>(elements: T) -> AllOf<T> {
    AllOf::new(elements)
}

impl<T> AllOf<T> {
    #[inline]
    fn quantify<R, U: ?Sized>(&self, u: &U) -> bool
    where
        T: Quantify<U, R>,
    {
        <T as Quantify<U, R>>::for_all(&self.0, u)
    }

    #[inline]
    fn quantify_ne<U: ?Sized>(&self, u: &U) -> bool
    where
        T: Quantify<U, NotEqual>,
    {
        <T as Quantify<U, NotEqual>>::exists(&self.0, u)
    }
}

bundle_impls!(AllOf);
