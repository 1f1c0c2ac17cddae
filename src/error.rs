//! Error types for the optional container.
//!
//! Absence is represented structurally by an empty [`Optional`](crate::Optional),
//! so these errors only surface when a caller forces a value out of an empty
//! container, or when an operator is applied to values that do not support it.

/// Represents an attempt to read the value of an empty `Optional`.
///
/// Returned by [`Optional::get`](crate::Optional::get). Callers that can
/// tolerate absence should use `get_or`, `get_or_else` or `is_present`
/// instead.
///
/// # Examples
///
/// ```rust
/// use optionals::{Optional, ValueAbsentError};
///
/// let empty: Optional<i32> = Optional::empty();
/// assert_eq!(empty.get(), Err(ValueAbsentError));
/// assert_eq!(format!("{}", ValueAbsentError), "Optional is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueAbsentError;

impl std::fmt::Display for ValueAbsentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Optional is empty")
    }
}

impl std::error::Error for ValueAbsentError {}

/// Represents an operator applied to values that do not support it.
///
/// The unchecked operators (`+`, `<`, ...) are constrained at compile time,
/// so this error only comes from the checked paths: integer overflow or
/// division by zero in `checked_*` arithmetic, and unordered values (such
/// as `NaN`) in `compare_to`.
///
/// # Examples
///
/// ```rust
/// use optionals::UnsupportedOperationError;
///
/// let error = UnsupportedOperationError {
///     operator: "/",
///     reason: "division by zero",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "unsupported operation `/`: division by zero"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedOperationError {
    /// The operator symbol that was applied.
    pub operator: &'static str,
    /// Why the underlying values could not support it.
    pub reason: &'static str,
}

impl UnsupportedOperationError {
    /// Creates a new error for the given operator and reason.
    #[inline]
    pub const fn new(operator: &'static str, reason: &'static str) -> Self {
        Self { operator, reason }
    }
}

impl std::fmt::Display for UnsupportedOperationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "unsupported operation `{}`: {}",
            self.operator, self.reason
        )
    }
}

impl std::error::Error for UnsupportedOperationError {}

/// Represents every error the optional container can report.
///
/// Both concrete errors convert into `OptionalError`, so a function mixing
/// `get` and checked arithmetic can use `?` on either.
///
/// # Examples
///
/// ```rust
/// use optionals::{Optional, OptionalError};
///
/// fn total(left: &Optional<u8>, right: &Optional<u8>) -> Result<u8, OptionalError> {
///     Ok(left.get()? + right.get()?)
/// }
///
/// assert_eq!(total(&Optional::of(1), &Optional::of(2)), Ok(3));
/// assert!(matches!(
///     total(&Optional::of(1), &Optional::empty()),
///     Err(OptionalError::ValueAbsent(_))
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionalError {
    /// A value was demanded from an empty `Optional`.
    ValueAbsent(ValueAbsentError),
    /// An operator was applied to values that do not support it.
    UnsupportedOperation(UnsupportedOperationError),
}

impl std::fmt::Display for OptionalError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValueAbsent(error) => write!(formatter, "{error}"),
            Self::UnsupportedOperation(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for OptionalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ValueAbsent(error) => Some(error),
            Self::UnsupportedOperation(error) => Some(error),
        }
    }
}

impl From<ValueAbsentError> for OptionalError {
    fn from(error: ValueAbsentError) -> Self {
        Self::ValueAbsent(error)
    }
}

impl From<UnsupportedOperationError> for OptionalError {
    fn from(error: UnsupportedOperationError) -> Self {
        Self::UnsupportedOperation(error)
    }
}
