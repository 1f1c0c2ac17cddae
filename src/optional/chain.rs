//! Flat, type-erased transform chains.
//!
//! A pending `Optional` keeps its transforms as a queue of links over
//! `Box<dyn Any>` values instead of nesting one closure inside the next.
//! Materializing folds the queue in a loop and dropping it releases the
//! links one by one, so neither depends on the length of the chain.
//!
//! # Invariants
//!
//! - **FIFO Order**: links run in the order they were attached
//! - **Typed Ends**: the value entering a link has the type the link was
//!   built for, and the value leaving the last link has the chain's type
//! - **Shared Links**: clones share the queue; appending to a shared queue
//!   copies the link handles first, so other clones are unaffected

use std::any::Any;
use std::rc::Rc;

/// A value travelling through a chain with its type erased.
pub(crate) type Erased = Box<dyn Any>;

/// Produces the value a chain starts from.
pub(crate) type Source = Rc<dyn Fn() -> Option<Erased>>;

/// One step of a chain.
#[derive(Clone)]
pub(crate) enum Link {
    /// Runs when a value is present. `None` makes the chain empty from here.
    OnPresent(Rc<dyn Fn(Erased) -> Option<Erased>>),
    /// Runs only when the chain is empty at this point.
    OnAbsent(Rc<dyn Fn() -> Option<Erased>>),
}

/// Boxes a value for a link.
#[inline]
pub(crate) fn erase<T: 'static>(value: T) -> Erased {
    Box::new(value)
}

/// Unboxes a value produced by a link.
///
/// # Panics
///
/// Panics if the value is not a `T`. Links are only ever built with matching
/// types, so this indicates a bug in the chain construction.
#[inline]
pub(crate) fn unerase<T: 'static>(value: Erased) -> T {
    *value
        .downcast::<T>()
        .expect("Type mismatch in optional chain")
}

/// Borrows a value produced by a link.
///
/// # Panics
///
/// Panics under the same condition as [`unerase`].
#[inline]
pub(crate) fn unerase_ref<T: 'static>(value: &Erased) -> &T {
    value
        .downcast_ref::<T>()
        .expect("Type mismatch in optional chain")
}

/// A source followed by a queue of links, producing a `T`.
pub(crate) struct Chain<T> {
    source: Source,
    links: Rc<Vec<Link>>,
    finish: fn(Erased) -> T,
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            links: Rc::clone(&self.links),
            finish: self.finish,
        }
    }
}

impl<T: 'static> Chain<T> {
    /// Creates a chain with no links.
    pub(crate) fn new(source: Source) -> Self {
        Self {
            source,
            links: Rc::new(Vec::new()),
            finish: unerase::<T>,
        }
    }

    /// Creates a chain that starts from a fixed value.
    pub(crate) fn from_value(value: Option<T>) -> Self
    where
        T: Clone,
    {
        Self::new(Rc::new(move || value.clone().map(erase)))
    }
}

impl<T> Chain<T> {
    /// Appends `link`, whose output is a `U`.
    ///
    /// O(1) amortized when the queue is not shared.
    pub(crate) fn then<U: 'static>(self, link: Link) -> Chain<U> {
        let mut links = self.links;
        Rc::make_mut(&mut links).push(link);
        Chain {
            source: self.source,
            links,
            finish: unerase::<U>,
        }
    }

    /// Runs the source and every link in order.
    pub(crate) fn run(&self) -> Option<T> {
        let mut current = (self.source)();
        for link in self.links.iter() {
            current = match (link, current) {
                (Link::OnPresent(step), Some(value)) => step(value),
                (Link::OnAbsent(step), None) => step(),
                (_, unchanged) => unchanged,
            };
        }
        current.map(self.finish)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.links.len()
    }
}
