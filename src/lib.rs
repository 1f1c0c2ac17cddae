//! # optionals
//!
//! A lazy, chainable optional container for Rust.
//!
//! ## Overview
//!
//! [`Optional<T>`] holds either a present value or nothing, and exposes a
//! fluent set of combinators that manipulate the value without explicit
//! presence checks at each call site:
//!
//! - **Transformation**: `map`, `map_nullable`, `flat_map`, `filter`, `reduce`, `zip`
//! - **Inspection**: `peek`, `if_present`
//! - **Extraction**: `get`, `get_or`, `get_or_else`, `to_option`
//! - **Caching**: `cache` (eager) and `memoize` (on first demand)
//! - **Operators**: `+ - * /` and `== < <= > >=` between optionals and raw values
//! - **Decorators**: adapters that route a function's result through an `Optional`
//!
//! Transformations are deferred: they run, in the order they were attached,
//! when the value is materialized. Empty optionals never call user callbacks.
//!
//! ## Feature Flags
//!
//! - `operators`: Arithmetic and comparison operators (default)
//! - `decorator`: Function-wrapping adapters (default)
//! - `serde`: `Serialize`/`Deserialize` with the representation of `Option<T>`
//! - `tracing`: Trace events when values are cached or memoized
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optionals::prelude::*;
//!
//! let result = Optional::of(10)
//!     .map(|x| x * 2)
//!     .filter(|x| *x > 15)
//!     .flat_map(|x| Optional::of(x + 10))
//!     .cache()
//!     .get_or_else(|| 0);
//! assert_eq!(result, 30);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optionals::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chain;
    pub use crate::error::{OptionalError, UnsupportedOperationError, ValueAbsentError};
    pub use crate::optional::{IntoOptional, Optional};

    #[cfg(feature = "operators")]
    pub use crate::operators::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;
}

mod chain_macro;
mod trace;

pub mod error;
pub mod optional;

#[cfg(feature = "operators")]
pub mod operators;

#[cfg(feature = "decorator")]
pub mod decorator;

pub use error::{OptionalError, UnsupportedOperationError, ValueAbsentError};
pub use optional::{IntoOptional, Optional};

#[cfg(feature = "operators")]
pub use operators::CheckedArithmetic;
