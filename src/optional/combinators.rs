//! Chainable combinators for `Optional`.
//!
//! Every combinator here is lazy: it appends a link to the current transform
//! chain and returns immediately. A known-empty receiver short-circuits to
//! `Optional::empty()` without queuing anything.

use std::rc::Rc;

use super::Optional;
use super::chain::{Link, erase, unerase, unerase_ref};
use super::state::State;

impl<T: Clone + 'static> Optional<T> {
    fn then<U: Clone + 'static>(self, link: Link) -> Optional<U> {
        Optional::from_state(State::Deferred(self.state.into_chain().then(link)))
    }

    /// Applies `function` to the value, producing a new `Optional`.
    ///
    /// `function` is queued and runs each time the result is materialized.
    /// An empty `Optional` stays empty and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of(21).map(|x| x * 2).get(), Ok(42));
    /// assert!(Optional::<i32>::empty().map(|x| x * 2).is_empty());
    /// ```
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        if self.state.is_known_empty() {
            return Optional::empty();
        }
        self.then(Link::OnPresent(Rc::new(move |value| {
            Some(erase(function(unerase::<T>(value))))
        })))
    }

    /// Applies `function` to the value, treating a `None` result as absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// let parsed = Optional::of("12").map_nullable(|text| text.parse::<i32>().ok());
    /// assert_eq!(parsed.get(), Ok(12));
    ///
    /// let invalid = Optional::of("twelve").map_nullable(|text| text.parse::<i32>().ok());
    /// assert!(invalid.is_empty());
    /// ```
    pub fn map_nullable<U, F>(self, function: F) -> Optional<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> Option<U> + 'static,
    {
        if self.state.is_known_empty() {
            return Optional::empty();
        }
        self.then(Link::OnPresent(Rc::new(move |value| {
            function(unerase::<T>(value)).map(erase)
        })))
    }

    /// Alias for [`map`](Optional::map), used by the [`chain!`](crate::chain!)
    /// macro for callable-style chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// let result = Optional::of(2).call(|x| x + 1).call(|x| x * 10);
    /// assert_eq!(result.get(), Ok(30));
    /// ```
    #[inline]
    pub fn call<U, F>(self, function: F) -> Optional<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        self.map(function)
    }

    /// Applies `function`, which itself returns an `Optional`, and flattens
    /// the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of(10).flat_map(|x| Optional::of(x * 3)).get(), Ok(30));
    /// assert!(Optional::of(10).flat_map(|_| Optional::<i32>::empty()).is_empty());
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> Optional<U> + 'static,
    {
        if self.state.is_known_empty() {
            return Optional::empty();
        }
        self.then(Link::OnPresent(Rc::new(move |value| {
            function(unerase::<T>(value)).into_option().map(erase)
        })))
    }

    /// Keeps the value only if `predicate` returns `true` for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert!(Optional::of(10).filter(|x| *x > 5).is_present());
    /// assert!(Optional::of(10).filter(|x| *x < 5).is_empty());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        if self.state.is_known_empty() {
            return self;
        }
        self.then(Link::OnPresent(Rc::new(move |value| {
            predicate(unerase_ref::<T>(&value)).then_some(value)
        })))
    }

    /// Queues `consumer` to observe the value without changing it.
    ///
    /// `consumer` runs each time the result is materialized, unless the
    /// result is cached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let seen = Rc::new(Cell::new(0));
    /// let sink = Rc::clone(&seen);
    /// let peeked = Optional::of(10).peek(move |value| sink.set(*value));
    ///
    /// assert_eq!(seen.get(), 0);
    /// assert_eq!(peeked.get(), Ok(10));
    /// assert_eq!(seen.get(), 10);
    /// ```
    pub fn peek<C>(self, consumer: C) -> Self
    where
        C: Fn(&T) + 'static,
    {
        if self.state.is_known_empty() {
            return self;
        }
        self.then(Link::OnPresent(Rc::new(move |value| {
            consumer(unerase_ref::<T>(&value));
            Some(value)
        })))
    }

    /// Combines this value with the value of `other` using `combiner`.
    ///
    /// `combiner` is only called when both sides are present; otherwise the
    /// result is empty. The left side is materialized first, and the right
    /// side is not materialized at all when the left is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of(10).reduce(Optional::of(20), |a, _| a).get(), Ok(10));
    /// assert_eq!(Optional::of(10).reduce(Optional::of(20), |_, b| b).get(), Ok(20));
    /// assert!(Optional::of(10).reduce(Optional::<i32>::empty(), |a, _| a).is_empty());
    /// ```
    pub fn reduce<U, R, F>(self, other: Optional<U>, combiner: F) -> Optional<R>
    where
        U: Clone + 'static,
        R: Clone + 'static,
        F: Fn(T, U) -> R + 'static,
    {
        if self.state.is_known_empty() || other.state.is_known_empty() {
            return Optional::empty();
        }
        self.then(Link::OnPresent(Rc::new(move |value| {
            let left_value = unerase::<T>(value);
            other
                .to_option()
                .map(|right_value| erase(combiner(left_value, right_value)))
        })))
    }

    /// Pairs this value with the value of `other` when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of(1).zip(Optional::of("a")).get(), Ok((1, "a")));
    /// assert!(Optional::of(1).zip(Optional::<&str>::empty()).is_empty());
    /// ```
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)>
    where
        U: Clone + 'static,
    {
        self.reduce(other, |left, right| (left, right))
    }

    /// Returns this `Optional` if it is present, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of(1).or(Optional::of(2)).get(), Ok(1));
    /// assert_eq!(Optional::empty().or(Optional::of(2)).get(), Ok(2));
    /// ```
    pub fn or(self, alternative: Self) -> Self {
        match self.state {
            State::Resolved(Some(_)) => self,
            State::Resolved(None) => alternative,
            State::Deferred(_) | State::Memoized(_) => self.then(Link::OnAbsent(Rc::new(
                move || alternative.to_option().map(erase),
            ))),
        }
    }

    /// Returns this `Optional` if it is present, otherwise the result of
    /// `supplier`. `supplier` only runs when this side is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// let fallback = Optional::of(0).filter(|x| *x > 0).or_else(|| Optional::of(99));
    /// assert_eq!(fallback.get(), Ok(99));
    /// ```
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        if let State::Resolved(Some(_)) = self.state {
            return self;
        }
        self.then(Link::OnAbsent(Rc::new(move || {
            supplier().into_option().map(erase)
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    fn counter() -> (Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (Rc::clone(&calls), calls)
    }

    #[rstest]
    fn test_map_is_deferred_until_materialized() {
        let (calls, handle) = counter();
        let mapped = Optional::of(3).map(move |x| {
            calls.set(calls.get() + 1);
            x + 1
        });

        assert_eq!(handle.get(), 0);
        assert_eq!(mapped.get(), Ok(4));
        assert_eq!(handle.get(), 1);
    }

    #[rstest]
    fn test_map_reruns_without_cache() {
        let (calls, handle) = counter();
        let mapped = Optional::of(3).map(move |x| {
            calls.set(calls.get() + 1);
            x + 1
        });

        assert_eq!(mapped.get(), Ok(4));
        assert_eq!(mapped.get(), Ok(4));
        assert_eq!(handle.get(), 2);
    }

    #[rstest]
    fn test_empty_never_calls_callbacks() {
        let (calls, handle) = counter();
        let map_calls = Rc::clone(&calls);
        let filter_calls = Rc::clone(&calls);
        let peek_calls = Rc::clone(&calls);
        let result = Optional::<i32>::empty()
            .map(move |x| {
                map_calls.set(map_calls.get() + 1);
                x
            })
            .filter(move |_| {
                filter_calls.set(filter_calls.get() + 1);
                true
            })
            .peek(move |_| peek_calls.set(peek_calls.get() + 1))
            .flat_map(move |x| {
                calls.set(calls.get() + 1);
                Optional::of(x)
            });

        assert!(result.is_empty());
        assert_eq!(result.get_or(5), 5);
        assert_eq!(handle.get(), 0);
    }

    #[rstest]
    fn test_transforms_apply_in_attachment_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&log);
        let second = Rc::clone(&log);
        let third = Rc::clone(&log);

        let result = Optional::of(1)
            .map(move |x| {
                first.borrow_mut().push("map");
                x + 1
            })
            .peek(move |_| second.borrow_mut().push("peek"))
            .filter(move |_| {
                third.borrow_mut().push("filter");
                true
            });

        assert_eq!(result.get(), Ok(2));
        assert_eq!(*log.borrow(), vec!["map", "peek", "filter"]);
    }

    #[rstest]
    fn test_filter_failure_short_circuits_later_links() {
        let (calls, handle) = counter();
        let result = Optional::of(1).filter(|x| *x > 1).map(move |x| {
            calls.set(calls.get() + 1);
            x
        });

        assert!(result.is_empty());
        assert_eq!(handle.get(), 0);
    }

    #[rstest]
    fn test_reduce_skips_right_side_when_left_is_empty() {
        let (calls, handle) = counter();
        let left = Optional::of(1).filter(|x| *x > 1);
        let right = Optional::of(2).peek(move |_| calls.set(calls.get() + 1));

        assert!(left.reduce(right, |a, b| a + b).is_empty());
        assert_eq!(handle.get(), 0);
    }

    #[rstest]
    fn test_reduce_combines_pending_operands() {
        let left = Optional::of(2).map(|x| x * 10);
        let right = Optional::of(3).map(|x| x + 1);
        assert_eq!(left.reduce(right, |a, b| a - b).get(), Ok(16));
    }

    #[rstest]
    fn test_map_nullable_wraps_none_as_empty() {
        let result = Optional::of(4).map_nullable(|x| if x > 5 { Some(x) } else { None });
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_or_prefers_present_pending_value() {
        let primary = Optional::of(1).map(|x| x + 1);
        assert_eq!(primary.or(Optional::of(10)).get(), Ok(2));
    }

    #[rstest]
    fn test_or_else_supplier_not_called_when_present() {
        let (calls, handle) = counter();
        let result = Optional::of(1).map(|x| x * 2).or_else(move || {
            calls.set(calls.get() + 1);
            Optional::of(0)
        });

        assert_eq!(result.get(), Ok(2));
        assert_eq!(handle.get(), 0);
    }

    #[rstest]
    fn test_memoized_operand_is_read_once_through_chain() {
        let (calls, handle) = counter();
        let source = Optional::of(5)
            .peek(move |_| calls.set(calls.get() + 1))
            .memoize();
        let doubled = source.clone().map(|x| x * 2);
        let tripled = source.map(|x| x * 3);

        assert_eq!(doubled.get(), Ok(10));
        assert_eq!(tripled.get(), Ok(15));
        assert_eq!(doubled.get(), Ok(10));
        assert_eq!(handle.get(), 1);
    }
}
