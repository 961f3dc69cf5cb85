//! Existential bundle.

use crate::elements::{Elements, Quantify};
use crate::relation::NotEqual;

/// Compares as true when at least one bundled value satisfies the relation.
///
/// - `==`, `<`, `<=`, `>`, `>=`: some element `OP u`. An empty bundle is
///   never equal to, nor ordered against, anything.
/// - `!=`: every element `!= u`, i.e. the operand is none of the values.
///
/// # Examples
///
/// ```
/// use dry_comparisons::any_of;
///
/// let x: i32 = 2;
/// assert!(any_of!(1, 2, 3) == x);
/// assert!(any_of!(4, 5) != x);
/// assert!(any_of!(1, 7) < x);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AnyOf<T>(T);

/// Bundles a tuple of values into an [`AnyOf`].
///
/// ```
/// use dry_comparisons::any_of;
///
/// assert!(any_of(("red", "green")) == "green");
/// ```
#[inline]
pub const fn any_of<T: Elements>(elements: T) -> AnyOf<T> {
    AnyOf::new(elements)
}

impl<T> AnyOf<T> {
    #[inline]
    fn quantify<R, U: ?Sized>(&self, u: &U) -> bool
    where
        T: Quantify<U, R>,
    {
        <T as Quantify<U, R>>::exists(&self.0, u)
    }

    #[inline]
    fn quantify_ne<U: ?Sized>(&self, u: &U) -> bool
    where
        T: Quantify<U, NotEqual>,
    {
        <T as Quantify<U, NotEqual>>::for_all(&self.0, u)
    }
}

bundle_impls!(AnyOf);
