//! Operand-first comparisons: `u == bundle`, `u < bundle`, ...
//!
//! The comparison is always carried out with the bundle on the left, so the
//! directional operators swap:
//!
//! | written          | evaluated         |
//! |------------------|-------------------|
//! | `u == b`         | `b == u`          |
//! | `u != b`         | `b != u`          |
//! | `u < b`          | `b > u`           |
//! | `u <= b`         | `b >= u`          |
//! | `u > b`          | `b < u`           |
//! | `u >= b`         | `b <= u`          |
//!
//! Coherence rules do not allow a single blanket impl for every operand
//! type, so the impls are generated per type with [`reflect!`](macro@crate::reflect).
//! The standard scalar and string types are covered here; downstream crates
//! call the macro for their own types. The bundle types themselves are never
//! given reflected impls, which keeps `bundle == bundle` unambiguous.

/// Implements operand-first comparisons against [`AnyOf`](crate::AnyOf),
/// [`NoneOf`](crate::NoneOf) and [`AllOf`](crate::AllOf) for the listed
/// types.
///
/// Generic types name their parameters after `for`:
///
/// ```
/// use dry_comparisons::{any_of, reflect};
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Meters(u32);
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Tagged<X>(X);
///
/// reflect!(Meters);
/// reflect!(for<X> Tagged<X>);
///
/// assert!(Meters(3) == any_of!(Meters(1), Meters(3)));
/// assert!(Tagged('b') > any_of!(Tagged('a'), Tagged('z')));
/// ```
#[macro_export]
macro_rules! reflect {
    (@bundle [$($gen:tt)*] $t:ty, $bundle:ident) => {
        #[allow(clippy::partialeq_ne_impl)]
        impl<$($gen)* __T> ::core::cmp::PartialEq<$crate::$bundle<__T>> for $t
        where
            __T: $crate::EqElements<$t>,
        {
            #[inline]
            fn eq(&self, other: &$crate::$bundle<__T>) -> bool {
                <$crate::$bundle<__T> as ::core::cmp::PartialEq<$t>>::eq(other, self)
            }

            #[inline]
            fn ne(&self, other: &$crate::$bundle<__T>) -> bool {
                <$crate::$bundle<__T> as ::core::cmp::PartialEq<$t>>::ne(other, self)
            }
        }

        impl<$($gen)* __T> ::core::cmp::PartialOrd<$crate::$bundle<__T>> for $t
        where
            __T: $crate::OrdElements<$t>,
        {
            #[inline]
            fn partial_cmp(
                &self,
                other: &$crate::$bundle<__T>,
            ) -> ::core::option::Option<::core::cmp::Ordering> {
                <$crate::$bundle<__T> as ::core::cmp::PartialOrd<$t>>::partial_cmp(other, self)
                    .map(::core::cmp::Ordering::reverse)
            }

            #[inline]
            fn lt(&self, other: &$crate::$bundle<__T>) -> bool {
                <$crate::$bundle<__T> as ::core::cmp::PartialOrd<$t>>::gt(other, self)
            }

            #[inline]
            fn le(&self, other: &$crate::$bundle<__T>) -> bool {
                <$crate::$bundle<__T> as ::core::cmp::PartialOrd<$t>>::ge(other, self)
            }

            #[inline]
            fn gt(&self, other: &$crate::$bundle<__T>) -> bool {
                <$crate::$bundle<__T> as ::core::cmp::PartialOrd<$t>>::lt(other, self)
            }

            #[inline]
            fn ge(&self, other: &$crate::$bundle<__T>) -> bool {
                <$crate::$bundle<__T> as ::core::cmp::PartialOrd<$t>>::le(other, self)
            }
        }
    };
    (@variants [$($gen:tt)*] $t:ty) => {
        $crate::reflect!(@bundle [$($gen)*] $t, AnyOf);
        $crate::reflect!(@bundle [$($gen)*] $t, NoneOf);
        $crate::reflect!(@bundle [$($gen)*] $t, AllOf);
    };
    (for<$($gen:tt),+ $(,)?> $t:ty) => {
        $crate::reflect!(@variants [$($gen,)+] $t);
    };
    ($($t:ty),+ $(,)?) => {
        $($crate::reflect!(@variants [] $t);)+
    };
}

reflect!(i8, i16, i32, i64, i128, isize);
reflect!(u8, u16, u32, u64, u128, usize);
reflect!(f32, f64, bool, char);
reflect!(str, String);
reflect!(for<'a> &'a str);
