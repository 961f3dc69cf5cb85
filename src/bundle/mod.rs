//! Comparison bundles.
//!
//! A bundle wraps a tuple of values and compares the whole tuple against a
//! single operand with the ordinary operators. The three variants share one
//! shape and differ only in how the per-element results are combined:
//!
//! | variant    | `==`, `<`, `<=`, `>`, `>=` | `!=`                    |
//! |------------|----------------------------|-------------------------|
//! | [`AnyOf`]  | some element holds         | every element `!=`      |
//! | [`NoneOf`] | no element holds           | not every element `!=`  |
//! | [`AllOf`]  | every element holds        | some element `!=`       |
//!
//! `!=` is always built from the elements' own `!=`, never by negating the
//! bundle's `==`. For element types whose `ne` is not the complement of
//! `eq` the two can disagree.
//!
//! The bundle is always the left operand of the element comparison. Putting
//! the operand on the left (`u < bundle`) is handled in
//! [`reflect`](mod@crate::reflect).

/// Generates the shared API and operator impls of one bundle variant.
///
/// The variant must provide two private helpers:
///
/// - `quantify::<R, U>(&self, u)`: the combination used for `==` and the
///   four ordering operators;
/// - `quantify_ne(&self, u)`: the combination used for `!=`.
macro_rules! bundle_impls {
    ($bundle:ident) => {
        impl<T: $crate::elements::Elements> $bundle<T> {
            /// Wraps `elements` into a bundle.
            #[inline]
            pub const fn new(elements: T) -> Self {
                Self(elements)
            }

            /// Number of bundled values.
            #[inline]
            pub const fn len(&self) -> usize {
                T::ARITY
            }

            /// Whether the bundle holds no value.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                T::ARITY == 0
            }
        }

        impl<T> $bundle<T> {
            /// Borrows the bundled tuple.
            #[inline]
            pub const fn elements(&self) -> &T {
                &self.0
            }

            /// Unwraps the bundled tuple.
            #[inline]
            pub fn into_inner(self) -> T {
                self.0
            }

            /// Compares the bundle against `u` with an operator chosen at
            /// runtime. Same result as writing the operator out.
            pub fn evaluate<U: ?Sized>(&self, op: $crate::relation::Operator, u: &U) -> bool
            where
                T: $crate::elements::OrdElements<U>,
            {
                use $crate::relation::Operator;
                match op {
                    Operator::Eq => <Self as PartialEq<U>>::eq(self, u),
                    Operator::Ne => <Self as PartialEq<U>>::ne(self, u),
                    Operator::Lt => <Self as PartialOrd<U>>::lt(self, u),
                    Operator::Le => <Self as PartialOrd<U>>::le(self, u),
                    Operator::Gt => <Self as PartialOrd<U>>::gt(self, u),
                    Operator::Ge => <Self as PartialOrd<U>>::ge(self, u),
                }
            }
        }

        impl<T: $crate::elements::Elements> From<T> for $bundle<T> {
            #[inline]
            fn from(elements: T) -> Self {
                Self(elements)
            }
        }

        #[allow(clippy::partialeq_ne_impl)]
        impl<T, U: ?Sized> PartialEq<U> for $bundle<T>
        where
            T: $crate::elements::EqElements<U>,
        {
            #[inline]
            fn eq(&self, u: &U) -> bool {
                self.quantify::<$crate::relation::Equal, U>(u)
            }

            #[inline]
            fn ne(&self, u: &U) -> bool {
                self.quantify_ne(u)
            }
        }

        impl<T, U: ?Sized> PartialOrd<U> for $bundle<T>
        where
            T: $crate::elements::OrdElements<U>,
        {
            /// `Equal` if the bundle `==` the operand, else `Less` if it is
            /// `<`, else `Greater` if it is `>`, else `None`.
            ///
            /// The operators do not go through this method.
            fn partial_cmp(&self, u: &U) -> Option<::core::cmp::Ordering> {
                if <Self as PartialEq<U>>::eq(self, u) {
                    Some(::core::cmp::Ordering::Equal)
                } else if <Self as PartialOrd<U>>::lt(self, u) {
                    Some(::core::cmp::Ordering::Less)
                } else if <Self as PartialOrd<U>>::gt(self, u) {
                    Some(::core::cmp::Ordering::Greater)
                } else {
                    None
                }
            }

            #[inline]
            fn lt(&self, u: &U) -> bool {
                self.quantify::<$crate::relation::Less, U>(u)
            }

            #[inline]
            fn le(&self, u: &U) -> bool {
                self.quantify::<$crate::relation::LessEqual, U>(u)
            }

            #[inline]
            fn gt(&self, u: &U) -> bool {
                self.quantify::<$crate::relation::Greater, U>(u)
            }

            #[inline]
            fn ge(&self, u: &U) -> bool {
                self.quantify::<$crate::relation::GreaterEqual, U>(u)
            }
        }
    };
}

mod all;
mod any;
mod none;

pub use all::{all_of, AllOf};
pub use any::{any_of, AnyOf};
pub use none::{none_of, NoneOf};
