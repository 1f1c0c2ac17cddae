//! Adapters that route a function's result through an `Optional`.
//!
//! Each adapter wraps a producer whose result may be missing (anything
//! implementing [`IntoOptional`]), and returns a closure that callers use
//! exactly like the original function, except that they always receive a
//! plain value: the producer's result when present, the fallback otherwise.
//!
//! # Examples
//!
//! ```rust
//! use optionals::decorator::{with_default, with_fallback};
//!
//! let lookup = || std::env::var("OPTIONALS_DOC_EXAMPLE_UNSET").ok();
//!
//! let name = with_fallback(lookup, || String::from("anonymous"));
//! assert_eq!(name(), "anonymous");
//!
//! let name_or_blank = with_default(lookup);
//! assert_eq!(name_or_blank(), "");
//! ```

use crate::optional::{IntoOptional, Optional};

/// Wraps a zero-argument `producer` so that a missing result is replaced by
/// `fallback()`.
///
/// `fallback` only runs when the producer's result is empty.
///
/// # Examples
///
/// ```rust
/// use optionals::decorator::with_fallback;
///
/// let first_even = with_fallback(|| [1, 3, 4].into_iter().find(|n| n % 2 == 0), || -1);
/// assert_eq!(first_even(), 4);
///
/// let none_found = with_fallback(|| [1, 3].into_iter().find(|n| n % 2 == 0), || -1);
/// assert_eq!(none_found(), -1);
/// ```
pub fn with_fallback<T, R, P, S>(producer: P, fallback: S) -> impl Fn() -> T
where
    T: Clone,
    R: IntoOptional<T>,
    P: Fn() -> R,
    S: Fn() -> T,
{
    move || producer().into_optional().get_or_else(&fallback)
}

/// Wraps a zero-argument `producer` so that a missing result is replaced by
/// `T::default()`.
///
/// # Examples
///
/// ```rust
/// use optionals::Optional;
/// use optionals::decorator::with_default;
///
/// let count = with_default(|| Optional::<u32>::empty());
/// assert_eq!(count(), 0);
/// ```
pub fn with_default<T, R, P>(producer: P) -> impl Fn() -> T
where
    T: Clone + Default,
    R: IntoOptional<T>,
    P: Fn() -> R,
{
    with_fallback(producer, T::default)
}

/// Wraps a single-argument `function` so that a missing result is replaced
/// by `fallback()`.
///
/// # Examples
///
/// ```rust
/// use optionals::decorator::with_fallback_fn;
///
/// let parse = with_fallback_fn(|text: &str| text.parse::<i32>().ok(), || 0);
/// assert_eq!(parse("42"), 42);
/// assert_eq!(parse("forty-two"), 0);
/// ```
pub fn with_fallback_fn<A, T, R, F, S>(function: F, fallback: S) -> impl Fn(A) -> T
where
    T: Clone,
    R: IntoOptional<T>,
    F: Fn(A) -> R,
    S: Fn() -> T,
{
    move |argument| function(argument).into_optional().get_or_else(&fallback)
}

/// Runs `producer` once and captures its result into an `Optional`.
///
/// This is the non-decorating form: useful when the caller wants to keep
/// chaining instead of unwrapping.
///
/// # Examples
///
/// ```rust
/// use optionals::decorator::capture;
///
/// let doubled = capture(|| Some(21)).map(|x| x * 2);
/// assert_eq!(doubled.get(), Ok(42));
/// ```
pub fn capture<T, R, P>(producer: P) -> Optional<T>
where
    R: IntoOptional<T>,
    P: FnOnce() -> R,
{
    producer().into_optional()
}
