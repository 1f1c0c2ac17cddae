//! Internal state of an `Optional`.
//!
//! An `Optional` is either already resolved, holds a flat transform chain
//! that runs on every materialization, or holds a memo that runs the chain
//! at most once and serves the frozen result afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use super::chain::{Chain, erase};
use crate::trace::trace_event;

pub(crate) enum State<T> {
    /// Nothing pending: a present value or absence.
    Resolved(Option<T>),
    /// A transform chain evaluated on every read.
    Deferred(Chain<T>),
    /// A transform chain evaluated on first read and then frozen.
    Memoized(Rc<Memo<T>>),
}

impl<T: Clone> Clone for State<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Resolved(value) => Self::Resolved(value.clone()),
            Self::Deferred(chain) => Self::Deferred(chain.clone()),
            Self::Memoized(memo) => Self::Memoized(Rc::clone(memo)),
        }
    }
}

impl<T: Clone> State<T> {
    /// Materializes the current value, running any pending transforms.
    pub(crate) fn resolve(&self) -> Option<T> {
        match self {
            Self::Resolved(value) => value.clone(),
            Self::Deferred(chain) => chain.run(),
            Self::Memoized(memo) => memo.force(),
        }
    }

    /// Materializes the value, moving it out when nothing is pending.
    pub(crate) fn into_resolved(self) -> Option<T> {
        match self {
            Self::Resolved(value) => value,
            Self::Deferred(chain) => chain.run(),
            Self::Memoized(memo) => memo.force(),
        }
    }

    /// Returns `true` when reading the value will not run any transform.
    pub(crate) fn is_settled(&self) -> bool {
        match self {
            Self::Resolved(_) => true,
            Self::Deferred(_) => false,
            Self::Memoized(memo) => memo.is_filled(),
        }
    }

    /// Returns `true` when the state is known to be absent without running
    /// anything.
    pub(crate) const fn is_known_empty(&self) -> bool {
        matches!(self, Self::Resolved(None))
    }
}

impl<T: Clone + 'static> State<T> {
    /// Converts the state into a chain that further links can be appended to.
    pub(crate) fn into_chain(self) -> Chain<T> {
        match self {
            Self::Resolved(value) => Chain::from_value(value),
            Self::Deferred(chain) => chain,
            Self::Memoized(memo) => Chain::new(Rc::new(move || memo.force().map(erase))),
        }
    }
}

enum MemoState<T> {
    Pending(Chain<T>),
    Filled(Option<T>),
}

/// A write-once cache over a transform chain.
///
/// The chain is cloned out of the cell before it runs, so no borrow is held
/// while user callbacks execute. If a callback panics the memo stays
/// pending and the next read runs the chain again.
pub(crate) struct Memo<T> {
    state: RefCell<MemoState<T>>,
}

impl<T: Clone> Memo<T> {
    pub(crate) const fn new(source: Chain<T>) -> Self {
        Self {
            state: RefCell::new(MemoState::Pending(source)),
        }
    }

    pub(crate) fn force(&self) -> Option<T> {
        let chain = {
            let state = self.state.borrow();
            match &*state {
                MemoState::Filled(value) => return value.clone(),
                MemoState::Pending(chain) => chain.clone(),
            }
        };

        let value = chain.run();

        let mut state = self.state.borrow_mut();
        // A reentrant read may have filled the memo while the chain ran.
        if let MemoState::Filled(existing) = &*state {
            return existing.clone();
        }
        trace_event!(present = value.is_some(), "memoized optional filled");
        *state = MemoState::Filled(value.clone());
        value
    }

    pub(crate) fn peek(&self) -> Option<Option<T>> {
        match &*self.state.borrow() {
            MemoState::Filled(value) => Some(value.clone()),
            MemoState::Pending(_) => None,
        }
    }

    pub(crate) fn is_filled(&self) -> bool {
        matches!(&*self.state.borrow(), MemoState::Filled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn counting_chain(counter: &Rc<Cell<usize>>, value: i32) -> Chain<i32> {
        let counter = Rc::clone(counter);
        Chain::new(Rc::new(move || {
            counter.set(counter.get() + 1);
            Some(erase(value))
        }))
    }

    #[rstest]
    fn test_deferred_state_reruns_on_every_resolve() {
        let counter = Rc::new(Cell::new(0));
        let state = State::Deferred(counting_chain(&counter, 7));

        assert_eq!(state.resolve(), Some(7));
        assert_eq!(state.resolve(), Some(7));
        assert_eq!(counter.get(), 2);
        assert!(!state.is_settled());
    }

    #[rstest]
    fn test_memo_runs_source_once() {
        let counter = Rc::new(Cell::new(0));
        let memo = Memo::new(counting_chain(&counter, 7));

        assert!(!memo.is_filled());
        assert_eq!(memo.peek(), None);
        assert_eq!(memo.force(), Some(7));
        assert_eq!(memo.force(), Some(7));
        assert_eq!(counter.get(), 1);
        assert!(memo.is_filled());
        assert_eq!(memo.peek(), Some(Some(7)));
    }

    #[rstest]
    fn test_memo_stays_pending_after_panic() {
        let attempts = Rc::new(Cell::new(0));
        let attempts_in_source = Rc::clone(&attempts);
        let memo: Memo<i32> = Memo::new(Chain::new(Rc::new(move || {
            attempts_in_source.set(attempts_in_source.get() + 1);
            assert!(attempts_in_source.get() > 1, "first attempt fails");
            Some(erase(1_i32))
        })));

        let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| memo.force()));
        assert!(first.is_err());
        assert!(!memo.is_filled());

        assert_eq!(memo.force(), Some(1));
        assert_eq!(attempts.get(), 2);
    }

    #[rstest]
    fn test_resolved_state_into_chain_yields_value_repeatedly() {
        let chain = State::Resolved(Some(String::from("value"))).into_chain();
        assert_eq!(chain.run().as_deref(), Some("value"));
        assert_eq!(chain.run().as_deref(), Some("value"));
    }

    #[rstest]
    fn test_memoized_state_into_chain_reads_memo_once() {
        let counter = Rc::new(Cell::new(0));
        let memo = Rc::new(Memo::new(counting_chain(&counter, 3)));
        let chain = State::Memoized(memo).into_chain();

        assert_eq!(chain.run(), Some(3));
        assert_eq!(chain.run(), Some(3));
        assert_eq!(counter.get(), 1);
    }

    #[rstest]
    fn test_known_empty_only_for_resolved_none() {
        assert!(State::<i32>::Resolved(None).is_known_empty());
        assert!(!State::Resolved(Some(1)).is_known_empty());
        assert!(!State::<i32>::Deferred(Chain::from_value(None)).is_known_empty());
    }
}
