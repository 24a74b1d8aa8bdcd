use std::cell::Cell;

use nullable::prelude::*;
use proptest::prelude::*;

fn nullable_strategy() -> impl Strategy<Value = Nullable<i64>> {
    prop_oneof![
        1 => Just(Nullable::<i64>::absent()),
        3 => any::<i64>().prop_map(Nullable::present),
    ]
}

fn halve_if_even(x: i64) -> Nullable<i64> {
    if x % 2 == 0 {
        present(x / 2)
    } else {
        absent()
    }
}

proptest! {
    #[test]
    fn prop_present_has_value(x in any::<i64>()) {
        prop_assert!(present(x).has_value());
        prop_assert!(!present(x).is_absent());
        prop_assert!(!absent::<i64>().has_value());
    }

    #[test]
    fn prop_value_roundtrip(x in any::<i64>()) {
        prop_assert_eq!(present(x).value(), Ok(x));
    }

    #[test]
    fn prop_equality(a in nullable_strategy(), b in nullable_strategy()) {
        prop_assert_eq!(a, a);
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(a == b, a.into_option() == b.into_option());
    }

    #[test]
    fn prop_map_functor(x in any::<i64>()) {
        let f = |v: i64| v.wrapping_mul(3);
        prop_assert_eq!(present(x).map(f), present(f(x)));

        let calls = Cell::new(0);
        let mapped = absent::<i64>().map(|v| {
            calls.set(calls.get() + 1);
            f(v)
        });
        prop_assert_eq!(mapped, absent());
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn prop_flat_map_left_identity(x in any::<i64>()) {
        prop_assert_eq!(present(x).flat_map(halve_if_even), halve_if_even(x));
    }

    #[test]
    fn prop_flat_map_right_identity(n in nullable_strategy()) {
        prop_assert_eq!(n.flat_map(present), n);
    }

    #[test]
    fn prop_flat_map_associativity(n in nullable_strategy()) {
        let g = |v: i64| if v > 0 { present(v.wrapping_add(1)) } else { absent() };
        prop_assert_eq!(
            n.flat_map(halve_if_even).flat_map(g),
            n.flat_map(|v| halve_if_even(v).flat_map(g))
        );
    }

    #[test]
    fn prop_map_composition(n in nullable_strategy()) {
        let f = |v: i64| v.wrapping_sub(7);
        let g = |v: i64| v.to_string();
        prop_assert_eq!(n.map(f).map(g), n.map(|v| g(f(v))));
    }

    #[test]
    fn prop_get_or_else(x in any::<i64>(), d in any::<i64>()) {
        prop_assert_eq!(present(x).get_or_else(d), x);
        prop_assert_eq!(absent().get_or_else(d), d);
    }

    #[test]
    fn prop_display(x in any::<i64>()) {
        prop_assert_eq!(present(x).to_display_string(), format!("Some({x})"));
        prop_assert_eq!(absent::<i64>().to_display_string(), "None");
    }

    #[test]
    fn prop_option_agreement(n in nullable_strategy()) {
        let opt: Option<i64> = n.into();
        prop_assert_eq!(Nullable::from(opt), n);
        prop_assert_eq!(n.has_value(), opt.is_some());
    }
}
