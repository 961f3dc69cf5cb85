//! Tuple implementations of the element traits.

use super::{private::Sealed, Elements, Quantify};
use crate::relation::Relation;

/// Generates `Elements` and `Quantify` for one tuple arity.
///
/// Each element is listed as `TypeParam . field_index`.
macro_rules! tuple {
    ($arity:literal; $($name:ident . $idx:tt),*) => {
        impl<$($name),*> Sealed for ($($name,)*) {}

        impl<$($name),*> Elements for ($($name,)*) {
            const ARITY: usize = $arity;
        }

        impl<U: ?Sized, R, $($name),*> Quantify<U, R> for ($($name,)*)
        where
            $(R: Relation<$name, U>,)*
        {
            #[inline]
            #[allow(unused_variables)]
            fn exists(&self, u: &U) -> bool {
                false $(|| <R as Relation<$name, U>>::holds(&self.$idx, u))*
            }

            #[inline]
            #[allow(unused_variables)]
            fn for_all(&self, u: &U) -> bool {
                true $(&& <R as Relation<$name, U>>::holds(&self.$idx, u))*
            }
        }
    };
}

tuple!(0;);
tuple!(1; A.0);
tuple!(2; A.0, B.1);
tuple!(3; A.0, B.1, C.2);
tuple!(4; A.0, B.1, C.2, D.3);
tuple!(5; A.0, B.1, C.2, D.3, E.4);
tuple!(6; A.0, B.1, C.2, D.3, E.4, F.5);
tuple!(7; A.0, B.1, C.2, D.3, E.4, F.5, G.6);
tuple!(8; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
tuple!(9; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
tuple!(10; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
tuple!(11; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
tuple!(12; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);
