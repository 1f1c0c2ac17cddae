//! The lazy, chainable optional container.
//!
//! [`Optional<T>`] holds either a present value of type `T` or nothing.
//! Combinators such as [`map`](Optional::map), [`filter`](Optional::filter)
//! and [`flat_map`](Optional::flat_map) do not run their callbacks
//! immediately: they are queued on a flat transform chain that runs, in
//! attachment order, whenever the value is materialized (`get`, `is_present`,
//! comparisons, and so on).
//!
//! Without caching, every materialization runs the chain again. The value is
//! the same each time for pure callbacks, but side effects repeat.
//! [`cache`](Optional::cache) runs the chain once, right away, and freezes the
//! result; [`memoize`](Optional::memoize) does the same on first demand.
//!
//! # Examples
//!
//! ```rust
//! use optionals::Optional;
//!
//! let result = Optional::of(10)
//!     .map(|x| x * 2)
//!     .filter(|x| *x > 15)
//!     .flat_map(|x| Optional::of(x + 10))
//!     .get_or_else(|| 0);
//! assert_eq!(result, 30);
//!
//! let missing = Optional::<i32>::empty().map(|x| x * 2);
//! assert!(missing.is_empty());
//! ```
//!
//! # Thread Safety
//!
//! `Optional` is neither `Send` nor `Sync`: transform chains are
//! reference counted with `Rc` and memos use `RefCell`.

mod chain;
mod combinators;
mod conversions;
mod state;

#[cfg(feature = "serde")]
mod serde_support;

pub use conversions::IntoOptional;

use std::fmt;
use std::rc::Rc;

use crate::error::ValueAbsentError;
use crate::trace::trace_event;
use state::{Memo, State};

/// A container holding either a present value of type `T` or nothing.
///
/// Construct one with [`Optional::of`], [`Optional::of_nullable`] or
/// [`Optional::empty`]. Reading operations take `&self` and hand back owned
/// values, which is why most of the API requires `T: Clone`.
///
/// # Examples
///
/// ```rust
/// use optionals::Optional;
///
/// let present = Optional::of(5);
/// assert!(present.is_present());
/// assert_eq!(present.get(), Ok(5));
///
/// let empty: Optional<i32> = Optional::of_nullable(None);
/// assert!(empty.is_empty());
/// assert_eq!(empty.get_or(0), 0);
/// ```
pub struct Optional<T> {
    state: State<T>,
}

static_assertions::assert_not_impl_any!(Optional<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Optional<String>: Send, Sync);

// =============================================================================
// Construction
// =============================================================================

impl<T> Optional<T> {
    /// Creates a present `Optional` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of(42).get(), Ok(42));
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self {
            state: State::Resolved(Some(value)),
        }
    }

    /// Creates an empty `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// let empty: Optional<String> = Optional::empty();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self {
            state: State::Resolved(None),
        }
    }

    /// Creates an `Optional` from a value that may be missing.
    ///
    /// `None` becomes an empty `Optional`, never a present one wrapping
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of_nullable(Some(3)).get(), Ok(3));
    /// assert!(Optional::<i32>::of_nullable(None).is_empty());
    /// ```
    #[inline]
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self {
            state: State::Resolved(value),
        }
    }

    /// Creates an `Optional` that treats `null_value` as absence.
    ///
    /// Useful for APIs that signal "nothing" with a reserved value such as
    /// `-1` or an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert!(Optional::of_unless(-1, &-1).is_empty());
    /// assert_eq!(Optional::of_unless(4, &-1).get(), Ok(4));
    /// ```
    #[inline]
    pub fn of_unless(value: T, null_value: &T) -> Self
    where
        T: PartialEq,
    {
        if value == *null_value {
            Self::empty()
        } else {
            Self::of(value)
        }
    }

    pub(crate) const fn from_state(state: State<T>) -> Self {
        Self { state }
    }
}

// =============================================================================
// Presence Queries and Value Extraction
// =============================================================================

impl<T: Clone> Optional<T> {
    /// Returns `true` if a value is present after running pending transforms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert!(Optional::of(1).is_present());
    /// assert!(!Optional::of(1).filter(|x| *x > 1).is_present());
    /// ```
    pub fn is_present(&self) -> bool {
        self.state.resolve().is_some()
    }

    /// Returns `true` if no value is present after running pending transforms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert!(Optional::<i32>::empty().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Returns the materialized value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueAbsentError`] if the `Optional` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::{Optional, ValueAbsentError};
    ///
    /// assert_eq!(Optional::of(10).map(|x| x + 1).get(), Ok(11));
    /// assert_eq!(Optional::<i32>::empty().get(), Err(ValueAbsentError));
    /// ```
    pub fn get(&self) -> Result<T, ValueAbsentError> {
        self.state.resolve().ok_or(ValueAbsentError)
    }

    /// Returns the materialized value, or `default` if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of(1).get_or(0), 1);
    /// assert_eq!(Optional::empty().get_or(0), 0);
    /// ```
    pub fn get_or(&self, default: T) -> T {
        self.state.resolve().unwrap_or(default)
    }

    /// Returns the materialized value, or the result of `supplier` if empty.
    ///
    /// `supplier` is only called when the `Optional` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of(1).get_or_else(|| unreachable!()), 1);
    /// assert_eq!(Optional::empty().get_or_else(|| 7), 7);
    /// ```
    pub fn get_or_else<F>(&self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.state.resolve().unwrap_or_else(supplier)
    }

    /// Materializes the value into a standard `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of("a").to_option(), Some("a"));
    /// ```
    pub fn to_option(&self) -> Option<T> {
        self.state.resolve()
    }

    /// Consumes the `Optional` and returns its value as a standard `Option`.
    ///
    /// A resolved value is moved out without cloning.
    pub fn into_option(self) -> Option<T> {
        self.state.into_resolved()
    }

    /// Calls `consumer` with the materialized value if one is present.
    ///
    /// Unlike [`peek`](Optional::peek), this runs immediately and returns
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// Optional::of(5).if_present(|value| seen.set(value));
    /// Optional::<i32>::empty().if_present(|_| unreachable!());
    /// assert_eq!(seen.get(), 5);
    /// ```
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.state.resolve() {
            consumer(value);
        }
    }

    /// Returns `true` if reading the value will not run any transform.
    ///
    /// Plain values, results of [`cache`](Optional::cache), and memos that
    /// have already been filled are cached; pending chains are not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// let pending = Optional::of(2).map(|x| x * x);
    /// assert!(!pending.is_cached());
    /// assert!(pending.cache().is_cached());
    /// ```
    pub fn is_cached(&self) -> bool {
        self.state.is_settled()
    }
}

// =============================================================================
// Caching
// =============================================================================

impl<T: Clone + 'static> Optional<T> {
    /// Runs pending transforms now and freezes the result.
    ///
    /// The returned `Optional` never runs the transform chain again, no
    /// matter how often it is read. Caching an empty `Optional` yields an
    /// empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let cached = Optional::of(10)
    ///     .map(move |x| {
    ///         counter.set(counter.get() + 1);
    ///         x * 2
    ///     })
    ///     .cache();
    ///
    /// assert_eq!(cached.get(), Ok(20));
    /// assert_eq!(cached.get(), Ok(20));
    /// assert_eq!(calls.get(), 1);
    /// ```
    #[must_use]
    pub fn cache(self) -> Self {
        if self.state.is_settled() {
            return self;
        }
        let value = self.state.into_resolved();
        trace_event!(present = value.is_some(), "optional cached");
        Self::of_nullable(value)
    }

    /// Freezes the result of the transform chain on first demand.
    ///
    /// Nothing runs until the value is first read; the chain then runs once
    /// and every later read, including reads through clones, returns the
    /// stored result. If a callback panics, the panic propagates and the
    /// next read runs the chain again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let memoized = Optional::of(3)
    ///     .peek(move |_| counter.set(counter.get() + 1))
    ///     .memoize();
    ///
    /// assert_eq!(calls.get(), 0);
    /// let copy = memoized.clone();
    /// assert_eq!(memoized.get(), Ok(3));
    /// assert_eq!(copy.get(), Ok(3));
    /// assert_eq!(calls.get(), 1);
    /// ```
    #[must_use]
    pub fn memoize(self) -> Self {
        match self.state {
            State::Deferred(chain) => Self::from_state(State::Memoized(Rc::new(Memo::new(chain)))),
            settled @ (State::Resolved(_) | State::Memoized(_)) => Self::from_state(settled),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Clone> Clone for Optional<T> {
    /// Clones the `Optional`. Pending chains and memos are shared, not copied.
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T> Default for Optional<T> {
    /// Creates an empty `Optional`.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug + Clone> fmt::Debug for Optional<T> {
    /// Formats the `Optional` without running any pending transform.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settled = match &self.state {
            State::Resolved(value) => Some(value.clone()),
            State::Deferred(_) => None,
            State::Memoized(memo) => memo.peek(),
        };
        match settled {
            Some(Some(value)) => formatter.debug_tuple("Optional").field(&value).finish(),
            Some(None) => formatter
                .debug_tuple("Optional")
                .field(&format_args!("<empty>"))
                .finish(),
            None => formatter
                .debug_tuple("Optional")
                .field(&format_args!("<deferred>"))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_of_is_present() {
        let optional = Optional::of(10);
        assert!(optional.is_present());
        assert!(!optional.is_empty());
        assert_eq!(optional.get(), Ok(10));
    }

    #[rstest]
    fn test_empty_is_empty() {
        let optional: Optional<i32> = Optional::empty();
        assert!(optional.is_empty());
        assert_eq!(optional.get(), Err(ValueAbsentError));
    }

    #[rstest]
    #[case(Some(1), true)]
    #[case(None, false)]
    fn test_of_nullable(#[case] input: Option<i32>, #[case] expected: bool) {
        assert_eq!(Optional::of_nullable(input).is_present(), expected);
    }

    #[rstest]
    #[case(String::new(), true)]
    #[case(String::from("text"), false)]
    fn test_of_unless_treats_null_value_as_empty(#[case] input: String, #[case] empty: bool) {
        assert_eq!(Optional::of_unless(input, &String::new()).is_empty(), empty);
    }

    #[rstest]
    fn test_get_or_else_supplier_not_called_when_present() {
        let calls = Cell::new(0);
        let value = Optional::of(10).get_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 10);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_get_or_else_supplier_called_when_empty() {
        let calls = Cell::new(0);
        let value = Optional::empty().get_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_into_option_moves_resolved_value() {
        let optional = Optional::of(vec![1, 2, 3]);
        assert_eq!(optional.into_option(), Some(vec![1, 2, 3]));
    }

    #[rstest]
    fn test_cache_on_empty_is_empty() {
        let cached = Optional::<i32>::empty().cache();
        assert!(cached.is_empty());
        assert!(cached.is_cached());
    }

    #[rstest]
    fn test_default_is_empty() {
        let optional: Optional<u8> = Optional::default();
        assert!(optional.is_empty());
    }

    #[rstest]
    fn test_debug_does_not_materialize() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let pending = Optional::of(1).map(move |x| {
            counter.set(counter.get() + 1);
            x
        });

        assert_eq!(format!("{pending:?}"), "Optional(<deferred>)");
        assert_eq!(calls.get(), 0);
        assert_eq!(format!("{:?}", Optional::of(1)), "Optional(1)");
        assert_eq!(
            format!("{:?}", Optional::<i32>::empty()),
            "Optional(<empty>)"
        );
    }

    #[rstest]
    fn test_debug_shows_filled_memo() {
        let memoized = Optional::of(4).map(|x| x + 1).memoize();
        assert_eq!(format!("{memoized:?}"), "Optional(<deferred>)");
        let _ = memoized.get();
        assert_eq!(format!("{memoized:?}"), "Optional(5)");
    }
}
