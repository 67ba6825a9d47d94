//! # Breakwater
//!
//! > *Fail fast at the boundary, stay calm inside*
//!
//! A small Rust library of guard clauses: fail-fast checks that validate
//! method arguments and operation state at the top of a function and reject
//! violations with a typed error.
//!
//! ## Philosophy
//!
//! A **breakwater** shelters the harbor: invalid input is turned away at the
//! boundary so the code behind it never has to doubt its preconditions.
//! Every guard is a pure function returning `Result`: it either passes
//! silently or fails immediately with an error the caller can match on.
//! There is no recovery, retry, or suppression inside the library.
//!
//! ## Quick Example
//!
//! ```rust
//! use breakwater::{argument, operation, ArgumentError, ArgumentErrorKind};
//!
//! fn greet(name: Option<&str>, times: usize) -> Result<String, ArgumentError> {
//!     // Presence is checked before emptiness, and the value passes through.
//!     let name = argument::not_null_or_empty(name, Some("name"), None)?;
//!     argument::requires(times > 0, Some("must greet at least once"), Some("times"))?;
//!     Ok(format!("hello, {}", name).repeat(times))
//! }
//!
//! assert_eq!(greet(Some("sea"), 1).unwrap(), "hello, sea");
//!
//! let err = greet(None, 1).unwrap_err();
//! assert_eq!(err.kind(), ArgumentErrorKind::Missing);
//! assert_eq!(err.parameter(), Some("name"));
//!
//! // State checks are not argument-scoped and carry no parameter name.
//! let ready = false;
//! assert!(operation::requires(ready, Some("not ready")).is_err());
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: emit a `tracing::debug!` event whenever a guard rejects.
//! - `serde`: `Serialize` implementations for the failure types.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod argument;
pub mod error;
pub mod operation;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use error::{
    default_empty_message, set_default_empty_message, ArgumentError, ArgumentErrorKind,
    OperationError,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::argument;
    pub use crate::error::{ArgumentError, ArgumentErrorKind, OperationError};
    pub use crate::operation;
}
