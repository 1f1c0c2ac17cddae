//! Property-based tests for Optional laws.
//!
//! This module verifies that Optional satisfies:
//!
//! - **Presence**: `of(v)` is present and yields `v`; `empty()` is absent
//! - **Absence propagation**: every combinator keeps an empty Optional empty
//! - **Functor Laws**: identity and composition
//! - **Monad Laws**: left identity, right identity, associativity
//! - **Caching**: cached and memoized reads equal uncached reads

use optionals::Optional;
use proptest::prelude::*;

fn optional_from(value: Option<i32>) -> Optional<i32> {
    Optional::of_nullable(value)
}

// =============================================================================
// Presence
// =============================================================================

proptest! {
    /// of(v) is present and get returns v
    #[test]
    fn prop_of_is_present(value in any::<i32>()) {
        let optional = Optional::of(value);
        prop_assert!(optional.is_present());
        prop_assert_eq!(optional.get(), Ok(value));
    }

    /// of_nullable round-trips through to_option
    #[test]
    fn prop_of_nullable_preserves_option(value in any::<Option<String>>()) {
        prop_assert_eq!(Optional::of_nullable(value.clone()).to_option(), value);
    }

    /// filter presence matches the predicate
    #[test]
    fn prop_filter_presence_matches_predicate(value in any::<i32>()) {
        let predicate = |n: &i32| n % 3 == 0;
        prop_assert_eq!(Optional::of(value).filter(predicate).is_present(), predicate(&value));
    }
}

// =============================================================================
// Absence Propagation
// =============================================================================

proptest! {
    /// Mapping an empty Optional stays empty whatever the function
    #[test]
    fn prop_empty_map_is_empty(offset in any::<i32>()) {
        let mapped = Optional::<i32>::empty().map(move |n| n.wrapping_add(offset));
        prop_assert!(mapped.is_empty());
    }

    /// reduce is empty whenever either side is empty
    #[test]
    fn prop_reduce_absence_propagates(left in any::<Option<i32>>(), right in any::<Option<i32>>()) {
        let reduced = optional_from(left).reduce(optional_from(right), i32::wrapping_add);
        let expected = left.zip(right).map(|(a, b)| a.wrapping_add(b));
        prop_assert_eq!(reduced.to_option(), expected);
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: optional.map(|x| x) == optional
    #[test]
    fn prop_functor_identity(value in any::<Option<i32>>()) {
        let mapped = optional_from(value).map(|x| x);
        prop_assert_eq!(mapped.to_option(), value);
    }

    /// Functor Composition Law: optional.map(f).map(g) == optional.map(|x| g(f(x)))
    #[test]
    fn prop_functor_composition(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = optional_from(value).map(function1).map(function2);
        let right = optional_from(value).map(move |x| function2(function1(x)));

        prop_assert_eq!(left.to_option(), right.to_option());
    }

    /// map agrees with Option::map
    #[test]
    fn prop_map_agrees_with_option(value in any::<Option<String>>()) {
        let mapped = Optional::of_nullable(value.clone()).map(|text| text.len());
        prop_assert_eq!(mapped.to_option(), value.map(|text| text.len()));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

fn half(n: i32) -> Optional<i32> {
    if n % 2 == 0 { Optional::of(n / 2) } else { Optional::empty() }
}

fn decrement(n: i32) -> Optional<i32> {
    n.checked_sub(1).map_or_else(Optional::empty, Optional::of)
}

proptest! {
    /// Left Identity: of(a).flat_map(f) == f(a)
    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Optional::of(value).flat_map(half).to_option(), half(value).to_option());
    }

    /// Right Identity: m.flat_map(of) == m
    #[test]
    fn prop_monad_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(optional_from(value).flat_map(Optional::of).to_option(), value);
    }

    /// Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_monad_associativity(value in any::<Option<i32>>()) {
        let left = optional_from(value).flat_map(half).flat_map(decrement);
        let right = optional_from(value).flat_map(|x| half(x).flat_map(decrement));
        prop_assert_eq!(left.to_option(), right.to_option());
    }
}

// =============================================================================
// Caching
// =============================================================================

proptest! {
    /// cache() does not change the observed value
    #[test]
    fn prop_cache_preserves_value(value in any::<Option<i32>>()) {
        let pending = optional_from(value).map(|n| n.wrapping_mul(3)).filter(|n| n % 2 == 0);
        let expected = pending.to_option();
        prop_assert_eq!(pending.cache().to_option(), expected);
    }

    /// memoize() does not change the observed value, across repeated reads
    #[test]
    fn prop_memoize_is_idempotent(value in any::<Option<i32>>()) {
        let memoized = optional_from(value).map(|n| n.wrapping_sub(7)).memoize();
        let first = memoized.to_option();
        let second = memoized.to_option();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, value.map(|n| n.wrapping_sub(7)));
    }
}
