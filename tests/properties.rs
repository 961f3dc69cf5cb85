//! Property tests for bundle comparisons against their element-wise
//! definitions.

use dry_comparisons::{all_of, any_of, none_of, Operator};
use proptest::prelude::*;

fn small() -> impl Strategy<Value = i32> {
    -4i32..4
}

fn operator() -> impl Strategy<Value = Operator> {
    proptest::sample::select(Operator::ALL.to_vec())
}

fn finite_or_nan() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => (-3i32..3).prop_map(f64::from),
        1 => Just(f64::NAN),
    ]
}

proptest! {
    #[test]
    fn any_of_is_existential(x in small(), y in small(), u in small()) {
        prop_assert_eq!(any_of!(x, y) == u, x == u || y == u);
        prop_assert_eq!(any_of!(x, y) != u, x != u && y != u);
        prop_assert_eq!(any_of!(x, y) < u, x < u || y < u);
        prop_assert_eq!(any_of!(x, y) >= u, x >= u || y >= u);
    }

    #[test]
    fn all_of_is_universal(x in small(), y in small(), u in small()) {
        prop_assert_eq!(all_of!(x, y) == u, x == u && y == u);
        prop_assert_eq!(all_of!(x, y) != u, x != u || y != u);
        prop_assert_eq!(all_of!(x, y) <= u, x <= u && y <= u);
        prop_assert_eq!(all_of!(x, y) > u, x > u && y > u);
    }

    #[test]
    fn none_of_is_negated_existential(x in small(), y in small(), u in small()) {
        prop_assert_eq!(none_of!(x, y) == u, !(x == u || y == u));
        prop_assert_eq!(none_of!(x, y) != u, !(x != u && y != u));
        prop_assert_eq!(none_of!(x, y) < u, !(x < u || y < u));
        prop_assert_eq!(none_of!(x, y) >= u, !(x >= u || y >= u));
    }

    #[test]
    fn empty_bundles_follow_vacuous_laws(u in any::<i64>()) {
        prop_assert!(!(any_of!() == u));
        prop_assert!(all_of!() == u);
        prop_assert!(none_of!() == u);
    }

    #[test]
    fn operand_first_mirrors_bundle_first(x in small(), y in small(), u in small()) {
        let a = any_of!(x, y);
        let n = none_of!(x, y);
        let l = all_of!(x, y);

        prop_assert_eq!(u == a, a == u);
        prop_assert_eq!(u < a, a > u);
        prop_assert_eq!(u > a, a < u);
        prop_assert_eq!(u <= a, a >= u);
        prop_assert_eq!(u >= a, a <= u);

        prop_assert_eq!(u == n, n == u);
        prop_assert_eq!(u < n, n > u);
        prop_assert_eq!(u > n, n < u);
        prop_assert_eq!(u <= n, n >= u);
        prop_assert_eq!(u >= n, n <= u);

        prop_assert_eq!(u == l, l == u);
        prop_assert_eq!(u < l, l > u);
        prop_assert_eq!(u > l, l < u);
        prop_assert_eq!(u <= l, l >= u);
        prop_assert_eq!(u >= l, l <= u);
    }

    #[test]
    fn evaluate_agrees_with_element_operators(
        x in finite_or_nan(),
        y in finite_or_nan(),
        u in finite_or_nan(),
        op in operator(),
    ) {
        let any = op.apply(&x, &u) || op.apply(&y, &u);
        let all = op.apply(&x, &u) && op.apply(&y, &u);
        let expected = match op {
            Operator::Ne => (all, !all, any),
            _ => (any, !any, all),
        };
        prop_assert_eq!(any_of!(x, y).evaluate(op, &u), expected.0);
        prop_assert_eq!(none_of!(x, y).evaluate(op, &u), expected.1);
        prop_assert_eq!(all_of!(x, y).evaluate(op, &u), expected.2);
    }

    #[test]
    fn operand_first_evaluates_mirrored_operator(
        x in finite_or_nan(),
        u in finite_or_nan(),
        op in operator(),
    ) {
        let b = all_of!(x, 0.5);
        let written = match op {
            Operator::Eq => u == b,
            Operator::Ne => u != b,
            Operator::Lt => u < b,
            Operator::Le => u <= b,
            Operator::Gt => u > b,
            Operator::Ge => u >= b,
        };
        prop_assert_eq!(written, b.evaluate(op.mirrored(), &u));
    }
}
