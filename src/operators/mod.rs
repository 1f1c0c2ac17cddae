//! Arithmetic and comparison operators for `Optional`.
//!
//! Operators are backed by named methods so the behavior is available
//! without operator syntax:
//!
//! | Operator | Method |
//! |---|---|
//! | `a + b` | [`plus`](crate::Optional::plus) |
//! | `a - b` | [`minus`](crate::Optional::minus) |
//! | `a * b` | [`times`](crate::Optional::times) |
//! | `a / b` | [`divide`](crate::Optional::divide) |
//! | `a == b` | [`equals`](crate::Optional::equals) |
//! | `a < b`, ... | [`compare_to`](crate::Optional::compare_to) |
//!
//! Arithmetic is lazy and absence-propagating: an empty operand makes the
//! result empty. The right-hand side may be another `Optional` or, for
//! primitive numbers, a raw value (in either operand position).
//!
//! Comparison treats two empty optionals as equal, and orders empty before
//! every present value and every raw value.
//!
//! # Examples
//!
//! ```rust
//! use optionals::Optional;
//!
//! let three: Optional<i32> = Optional::of(3);
//! let sum = three.clone() + Optional::of(2);
//! assert!(sum == 5);
//!
//! assert!(three.clone() < Optional::of(4));
//! assert!(three < 4);
//! assert!(Optional::<i32>::empty() < Optional::of(i32::MIN));
//! assert!((Optional::of(1) + Optional::<i32>::empty()).is_empty());
//! ```

mod arithmetic;
mod checked;
mod comparison;

pub use checked::CheckedArithmetic;
