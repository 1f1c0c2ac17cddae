//! The `chain!` macro for callable-style chaining.

/// Maps an [`Optional`](crate::Optional) through a series of functions from
/// left to right.
///
/// `chain!(optional, f, g, h)` is equivalent to
/// `optional.map(f).map(g).map(h)`. Each step produces a new `Optional`, and
/// an empty `Optional` stays empty without calling any of the functions.
///
/// # Syntax
///
/// - `chain!(optional)` - Returns `optional` unchanged
/// - `chain!(optional, f)` - Returns `optional.map(f)`
/// - `chain!(optional, f, g, ...)` - Returns `optional.map(f).map(g)...`
///
/// # Examples
///
/// ```
/// use optionals::{Optional, chain};
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn describe(x: i32) -> String { format!("value: {x}") }
///
/// let result = chain!(Optional::of(21), double, describe);
/// assert_eq!(result.get().as_deref(), Ok("value: 42"));
///
/// let nothing = chain!(Optional::<i32>::empty(), double, describe);
/// assert!(nothing.is_empty());
/// ```
///
/// Closures work the same way:
///
/// ```
/// use optionals::{Optional, chain};
///
/// let result = chain!(Optional::of(3), |x| x + 1, |x| x * 10);
/// assert_eq!(result.get(), Ok(40));
/// ```
#[macro_export]
macro_rules! chain {
    // Optional only: return as is
    ($optional:expr $(,)?) => {
        $optional
    };

    // Single function: map it
    ($optional:expr, $function:expr $(,)?) => {
        $crate::Optional::call($optional, $function)
    };

    // Multiple functions: map left to right recursively
    ($optional:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::chain!($crate::Optional::call($optional, $function), $($remaining_functions),+)
    };
}
