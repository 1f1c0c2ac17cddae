//! Conversions between `Optional` and standard types.

use super::Optional;

/// Converts a value into an [`Optional`].
///
/// Implemented for `Option<T>` (where `None` becomes empty) and for
/// `Optional<T>` itself. The decorator adapters accept any producer whose
/// return type implements this trait.
///
/// # Examples
///
/// ```rust
/// use optionals::{IntoOptional, Optional};
///
/// assert_eq!(Some(1).into_optional().get(), Ok(1));
/// assert!(None::<i32>.into_optional().is_empty());
/// assert_eq!(Optional::of(2).into_optional().get(), Ok(2));
/// ```
pub trait IntoOptional<T> {
    /// Performs the conversion.
    fn into_optional(self) -> Optional<T>;
}

impl<T> IntoOptional<T> for Option<T> {
    #[inline]
    fn into_optional(self) -> Optional<T> {
        Optional::of_nullable(self)
    }
}

impl<T> IntoOptional<T> for Optional<T> {
    #[inline]
    fn into_optional(self) -> Self {
        self
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T: Clone> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

/// Boolean context: `true` exactly when a value is present.
impl<T: Clone> From<&Optional<T>> for bool {
    fn from(optional: &Optional<T>) -> Self {
        optional.is_present()
    }
}

impl<T: Clone> From<Optional<T>> for bool {
    fn from(optional: Optional<T>) -> Self {
        optional.is_present()
    }
}

impl<T: Clone> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the materialized value, if any.
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: Clone> IntoIterator for &Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<T> FromIterator<T> for Optional<T> {
    /// Takes the first element of the iterator, or empty if there is none.
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::of_nullable(iterator.into_iter().next())
    }
}
