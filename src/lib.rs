//! Compare several values against one operand with the ordinary operators.
//!
//! Wrap the values in a bundle and compare the bundle:
//!
//! - **[`AnyOf`]**: true when at least one value satisfies the relation.
//! - **[`NoneOf`]**: true when no value satisfies the relation.
//! - **[`AllOf`]**: true when every value satisfies the relation.
//!
//! ```
//! use dry_comparisons::{all_of, any_of, none_of};
//!
//! let x: i32 = 3;
//! assert!(any_of!(1, 2, 3) == x);
//! assert!(none_of!(4, 5) == x);
//! assert!(all_of!(4, 5) > x);
//! assert!(x < all_of!(4, 5));
//! ```
//!
//! Values of different types can share a bundle as long as each one can be
//! compared with the operand:
//!
//! ```
//! use dry_comparisons::any_of;
//!
//! let name = "beta";
//! assert!(any_of!(String::from("alpha"), "beta") == name);
//! ```
//!
//! An element that cannot be compared with the operand is a type error, not
//! a runtime failure:
//!
//! ```compile_fail
//! use dry_comparisons::any_of;
//!
//! let _ = any_of!(1, "two") == 1;
//! ```
//!
//! # Operator semantics
//!
//! Every operator is defined element-wise from the elements' own operator
//! of the same name. In particular `!=` is never computed as `!(==)`; see
//! [`bundle`] for the exact combinations and the empty-bundle results.
//!
//! Comparisons with the operand on the left are provided for the standard
//! scalar and string types and can be added for others with [`reflect!`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the bundles (as their tuple)
//!   and for [`Operator`].

pub mod bundle;
pub mod elements;
pub mod reflect;
pub mod relation;

pub use bundle::{all_of, any_of, none_of, AllOf, AnyOf, NoneOf};
pub use elements::{Elements, EqElements, OrdElements, Quantify};
pub use relation::{Operator, ParseOperatorError, Relation};

/// Builds an [`AnyOf`] from a list of values.
///
/// ```
/// use dry_comparisons::any_of;
///
/// assert!(any_of!('a', 'e', 'i', 'o', 'u') == 'o');
/// assert!(!(any_of!() == 'o'));
/// ```
#[macro_export]
macro_rules! any_of {
    ($($value:expr),* $(,)?) => {
        $crate::AnyOf::new(($($value,)*))
    };
}

/// Builds a [`NoneOf`] from a list of values.
///
/// ```
/// use dry_comparisons::none_of;
///
/// assert!(none_of!('a', 'e', 'i', 'o', 'u') == 'x');
/// ```
#[macro_export]
macro_rules! none_of {
    ($($value:expr),* $(,)?) => {
        $crate::NoneOf::new(($($value,)*))
    };
}

/// Builds an [`AllOf`] from a list of values.
///
/// ```
/// use dry_comparisons::all_of;
///
/// assert!(all_of!(10, 20, 30) >= 10);
/// ```
#[macro_export]
macro_rules! all_of {
    ($($value:expr),* $(,)?) => {
        $crate::AllOf::new(($($value,)*))
    };
}
