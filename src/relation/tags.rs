//! Compile-time operator tags.

/// A binary relation between a value of type `A` and a value of type `B`.
///
/// Implemented by the operator tags in this module. The tag is only ever
/// used as a type parameter; it carries no data.
pub trait Relation<A: ?Sized, B: ?Sized> {
    /// Whether `a` stands in this relation to `b`.
    fn holds(a: &A, b: &B) -> bool;
}

/// `a == b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Equal;

/// `a != b`, through `PartialEq::ne`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotEqual;

/// `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Less;

/// `a <= b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LessEqual;

/// `a > b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Greater;

/// `a >= b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GreaterEqual;

impl<A: ?Sized + PartialEq<B>, B: ?Sized> Relation<A, B> for Equal {
    #[inline]
    fn holds(a: &A, b: &B) -> bool {
        a.eq(b)
    }
}

impl<A: ?Sized + PartialEq<B>, B: ?Sized> Relation<A, B> for NotEqual {
    #[inline]
    fn holds(a: &A, b: &B) -> bool {
        a.ne(b)
    }
}

impl<A: ?Sized + PartialOrd<B>, B: ?Sized> Relation<A, B> for Less {
    #[inline]
    fn holds(a: &A, b: &B) -> bool {
        a.lt(b)
    }
}

impl<A: ?Sized + PartialOrd<B>, B: ?Sized> Relation<A, B> for LessEqual {
    #[inline]
    fn holds(a: &A, b: &B) -> bool {
        a.le(b)
    }
}

impl<A: ?Sized + PartialOrd<B>, B: ?Sized> Relation<A, B> for Greater {
    #[inline]
    fn holds(a: &A, b: &B) -> bool {
        a.gt(b)
    }
}

impl<A: ?Sized + PartialOrd<B>, B: ?Sized> Relation<A, B> for GreaterEqual {
    #[inline]
    fn holds(a: &A, b: &B) -> bool {
        a.ge(b)
    }
}
