//! Equality and ordering for `Optional`.
//!
//! Empty sorts before every present value, which matches the ordering of
//! `Option`. Against raw values, an empty `Optional` is never equal and is
//! always less.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::Optional;
use crate::error::UnsupportedOperationError;

impl<T: Clone + PartialEq> Optional<T> {
    /// Returns `true` if both are empty, or both are present with equal
    /// values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert!(Optional::of(2).equals(&Optional::of(1).map(|x| x + 1)));
    /// assert!(Optional::<i32>::empty().equals(&Optional::empty()));
    /// assert!(!Optional::of(1).equals(&Optional::empty()));
    /// ```
    pub fn equals(&self, other: &Self) -> bool {
        self.to_option() == other.to_option()
    }
}

impl<T: Clone + PartialOrd> Optional<T> {
    /// Compares two optionals, with empty ordered before any present value.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperationError`] when both values are present
    /// but have no ordering, such as `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(Optional::of(3).compare_to(&Optional::of(4)), Ok(Ordering::Less));
    /// assert_eq!(Optional::empty().compare_to(&Optional::of(0)), Ok(Ordering::Less));
    /// assert!(Optional::of(f64::NAN).compare_to(&Optional::of(1.0)).is_err());
    /// ```
    pub fn compare_to(&self, other: &Self) -> Result<Ordering, UnsupportedOperationError> {
        self.to_option()
            .partial_cmp(&other.to_option())
            .ok_or(UnsupportedOperationError::new("<=>", "values are unordered"))
    }
}

impl<T: Clone + PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Clone + Eq> Eq for Optional<T> {}

impl<T: Clone + PartialOrd> PartialOrd for Optional<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl<T: Clone + Ord> Ord for Optional<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_option().cmp(&other.to_option())
    }
}

impl<T: Clone + Hash> Hash for Optional<T> {
    /// Hashes the materialized value, consistent with `Eq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_option().hash(state);
    }
}

macro_rules! impl_raw_comparison {
    ($($raw:ty),+ $(,)?) => {
        $(
            impl PartialEq<$raw> for Optional<$raw> {
                fn eq(&self, other: &$raw) -> bool {
                    self.to_option().is_some_and(|value| value == *other)
                }
            }

            impl PartialEq<Optional<$raw>> for $raw {
                fn eq(&self, other: &Optional<$raw>) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$raw> for Optional<$raw> {
                fn partial_cmp(&self, other: &$raw) -> Option<Ordering> {
                    match self.to_option() {
                        Some(value) => value.partial_cmp(other),
                        None => Some(Ordering::Less),
                    }
                }
            }

            impl PartialOrd<Optional<$raw>> for $raw {
                fn partial_cmp(&self, other: &Optional<$raw>) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )+
    };
}

impl_raw_comparison!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String
);

impl PartialEq<str> for Optional<String> {
    fn eq(&self, other: &str) -> bool {
        self.to_option().is_some_and(|value| value == other)
    }
}

impl PartialEq<&str> for Optional<String> {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<&str> for Optional<&str> {
    fn eq(&self, other: &&str) -> bool {
        self.to_option().is_some_and(|value| value == *other)
    }
}
