//! Checked arithmetic: reports unsupported operations instead of panicking
//! or producing non-finite results.

use crate::Optional;
use crate::error::UnsupportedOperationError;

const OVERFLOW: &str = "arithmetic overflow";
const DIVISION_BY_ZERO: &str = "division by zero";
const NOT_FINITE: &str = "result is not finite";

/// Arithmetic that can refuse operands it does not support.
///
/// Implemented for every primitive integer (overflow and division by zero
/// are refused) and for `f32`/`f64` (division by zero and non-finite
/// results are refused).
///
/// # Examples
///
/// ```rust
/// use optionals::CheckedArithmetic;
///
/// assert_eq!(2_u8.try_add(3), Ok(5));
/// assert!(u8::MAX.try_add(1).is_err());
/// assert!(1.0_f64.try_div(0.0).is_err());
/// ```
pub trait CheckedArithmetic: Sized {
    /// Adds `other`, or reports why the values cannot be added.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperationError`] when the sum is not representable.
    fn try_add(self, other: Self) -> Result<Self, UnsupportedOperationError>;

    /// Subtracts `other`, or reports why the values cannot be subtracted.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperationError`] when the difference is not
    /// representable.
    fn try_sub(self, other: Self) -> Result<Self, UnsupportedOperationError>;

    /// Multiplies by `other`, or reports why the values cannot be multiplied.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperationError`] when the product is not
    /// representable.
    fn try_mul(self, other: Self) -> Result<Self, UnsupportedOperationError>;

    /// Divides by `other`, or reports why the values cannot be divided.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperationError`] on division by zero or when the
    /// quotient is not representable.
    fn try_div(self, other: Self) -> Result<Self, UnsupportedOperationError>;
}

macro_rules! impl_checked_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl CheckedArithmetic for $integer {
                fn try_add(self, other: Self) -> Result<Self, UnsupportedOperationError> {
                    self.checked_add(other)
                        .ok_or(UnsupportedOperationError::new("+", OVERFLOW))
                }

                fn try_sub(self, other: Self) -> Result<Self, UnsupportedOperationError> {
                    self.checked_sub(other)
                        .ok_or(UnsupportedOperationError::new("-", OVERFLOW))
                }

                fn try_mul(self, other: Self) -> Result<Self, UnsupportedOperationError> {
                    self.checked_mul(other)
                        .ok_or(UnsupportedOperationError::new("*", OVERFLOW))
                }

                fn try_div(self, other: Self) -> Result<Self, UnsupportedOperationError> {
                    if other == 0 {
                        return Err(UnsupportedOperationError::new("/", DIVISION_BY_ZERO));
                    }
                    self.checked_div(other)
                        .ok_or(UnsupportedOperationError::new("/", OVERFLOW))
                }
            }
        )+
    };
}

impl_checked_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_checked_float {
    ($($float:ty),+ $(,)?) => {
        $(
            impl CheckedArithmetic for $float {
                fn try_add(self, other: Self) -> Result<Self, UnsupportedOperationError> {
                    finite("+", self + other)
                }

                fn try_sub(self, other: Self) -> Result<Self, UnsupportedOperationError> {
                    finite("-", self - other)
                }

                fn try_mul(self, other: Self) -> Result<Self, UnsupportedOperationError> {
                    finite("*", self * other)
                }

                fn try_div(self, other: Self) -> Result<Self, UnsupportedOperationError> {
                    if other == 0.0 {
                        return Err(UnsupportedOperationError::new("/", DIVISION_BY_ZERO));
                    }
                    finite("/", self / other)
                }
            }
        )+
    };
}

impl_checked_float!(f32, f64);

trait Finite: Copy {
    fn is_finite_value(self) -> bool;
}

impl Finite for f32 {
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

impl Finite for f64 {
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

fn finite<F: Finite>(operator: &'static str, result: F) -> Result<F, UnsupportedOperationError> {
    if result.is_finite_value() {
        Ok(result)
    } else {
        Err(UnsupportedOperationError::new(operator, NOT_FINITE))
    }
}

macro_rules! checked_operations {
    ($($name:ident => $operation:ident, $symbol:literal);+ $(;)?) => {
        paste::paste! {
            impl<T: CheckedArithmetic + Clone + 'static> Optional<T> {
                $(
                    #[doc = concat!("Materializes both operands and applies `", $symbol, "`, refusing")]
                    /// values that do not support it.
                    ///
                    /// An empty operand yields `Ok` with an empty `Optional`.
                    ///
                    /// # Errors
                    ///
                    /// Returns [`UnsupportedOperationError`] when both values are
                    /// present but the operation is not defined for them.
                    pub fn [<checked_ $name>](self, other: Self) -> Result<Self, UnsupportedOperationError> {
                        match (self.into_option(), other.into_option()) {
                            (Some(left), Some(right)) => left.$operation(right).map(Self::of),
                            _ => Ok(Self::empty()),
                        }
                    }
                )+
            }
        }
    };
}

checked_operations! {
    plus => try_add, "+";
    minus => try_sub, "-";
    times => try_mul, "*";
    divide => try_div, "/";
}
