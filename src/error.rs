//! Failure types raised by guard clauses
//!
//! This module provides the error taxonomy shared by the [`argument`](crate::argument)
//! and [`operation`](crate::operation) guards:
//!
//! - [`ArgumentError`]: an argument violated a precondition. Carries an
//!   [`ArgumentErrorKind`] describing *how* it was violated, plus the optional
//!   parameter name and message supplied at the call site.
//! - [`OperationError`]: the current state does not permit the operation.
//!   Carries only an optional message; state checks are not argument-scoped.
//!
//! # Examples
//!
//! ```
//! use breakwater::{ArgumentError, ArgumentErrorKind};
//!
//! let err = ArgumentError::empty(Some("items"), None);
//! assert_eq!(err.kind(), ArgumentErrorKind::Empty);
//! assert_eq!(err.parameter(), Some("items"));
//! assert_eq!(
//!     err.to_string(),
//!     "The specified argument must not be empty. (parameter 'items')"
//! );
//! ```
//!
//! # Default messages
//!
//! Each kind has a fixed message used when the call site supplies none. The
//! empty-argument default is special: it is a process-wide, mutable string
//! (see [`set_default_empty_message`]) read once when the error is
//! constructed, so changing it never rewrites errors that already exist.

use std::error::Error as StdError;
use std::fmt;
use std::sync::RwLock;

/// Message used by a generic [`ArgumentError`] constructed without one.
pub const INVALID_ARGUMENT_MESSAGE: &str = "The specified argument is invalid.";

/// Message used by a missing-argument [`ArgumentError`] constructed without one.
pub const MISSING_ARGUMENT_MESSAGE: &str = "The specified argument must not be None.";

/// Initial value of the process-wide empty-argument default message.
pub const EMPTY_ARGUMENT_MESSAGE: &str = "The specified argument must not be empty.";

/// Message used by an [`OperationError`] constructed without one.
pub const INVALID_OPERATION_MESSAGE: &str = "The operation is not valid for the current state.";

// None means "not overridden": fall back to EMPTY_ARGUMENT_MESSAGE.
static EMPTY_MESSAGE_OVERRIDE: RwLock<Option<String>> = RwLock::new(None);

/// Get the current process-wide default message for empty-argument failures.
///
/// # Examples
///
/// ```
/// use breakwater::error::{default_empty_message, EMPTY_ARGUMENT_MESSAGE};
///
/// assert_eq!(default_empty_message(), EMPTY_ARGUMENT_MESSAGE);
/// ```
pub fn default_empty_message() -> String {
    EMPTY_MESSAGE_OVERRIDE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
        .unwrap_or_else(|| EMPTY_ARGUMENT_MESSAGE.to_string())
}

/// Replace the process-wide default message for empty-argument failures.
///
/// Affects only [`ArgumentError::empty`] constructions that supply no explicit
/// message, and only those that happen after the call. Errors constructed
/// earlier keep the message they captured.
///
/// # Examples
///
/// ```
/// use breakwater::error::{set_default_empty_message, ArgumentError};
///
/// let before = ArgumentError::empty(None, None);
/// set_default_empty_message("nothing to work with");
/// let after = ArgumentError::empty(None, None);
///
/// assert_eq!(before.to_string(), "The specified argument must not be empty.");
/// assert_eq!(after.to_string(), "nothing to work with");
/// ```
pub fn set_default_empty_message(message: impl Into<String>) {
    *EMPTY_MESSAGE_OVERRIDE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(message.into());
}

/// How an argument violated its precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentErrorKind {
    /// A boolean precondition about the argument did not hold.
    Invalid,
    /// The argument was required but absent (`None`).
    Missing,
    /// The argument was present but had zero length.
    Empty,
}

impl ArgumentErrorKind {
    /// The fixed message used for this kind when none is supplied.
    ///
    /// For [`Empty`](ArgumentErrorKind::Empty) this is the *initial* default;
    /// the live value is [`default_empty_message`].
    pub fn default_message(self) -> &'static str {
        match self {
            ArgumentErrorKind::Invalid => INVALID_ARGUMENT_MESSAGE,
            ArgumentErrorKind::Missing => MISSING_ARGUMENT_MESSAGE,
            ArgumentErrorKind::Empty => EMPTY_ARGUMENT_MESSAGE,
        }
    }
}

/// An argument rejected by a guard clause.
///
/// Immutable once constructed. The parameter name and message are stored
/// verbatim: an explicit empty string stays an empty string and is distinct
/// from absent.
///
/// # Examples
///
/// ```
/// use breakwater::{ArgumentError, ArgumentErrorKind};
///
/// let err = ArgumentError::missing(Some("user_id"), None);
/// assert_eq!(err.kind(), ArgumentErrorKind::Missing);
/// assert_eq!(err.parameter(), Some("user_id"));
/// assert_eq!(err.message(), None);
/// ```
#[derive(Debug)]
pub struct ArgumentError {
    kind: ArgumentErrorKind,
    parameter: Option<String>,
    message: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ArgumentError {
    fn new(
        kind: ArgumentErrorKind,
        parameter: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        ArgumentError {
            kind,
            parameter: parameter.map(str::to_string),
            message: message.map(str::to_string),
            source: None,
        }
    }

    /// A generic precondition failure, as raised by
    /// [`argument::requires`](crate::argument::requires) and
    /// [`argument::forbids`](crate::argument::forbids).
    pub fn invalid(parameter: Option<&str>, message: Option<&str>) -> Self {
        Self::new(ArgumentErrorKind::Invalid, parameter, message)
    }

    /// A missing-argument failure, as raised by
    /// [`argument::not_null`](crate::argument::not_null).
    pub fn missing(parameter: Option<&str>, message: Option<&str>) -> Self {
        Self::new(ArgumentErrorKind::Missing, parameter, message)
    }

    /// An empty-argument failure, as raised by the `not_empty` family.
    ///
    /// When `message` is `None`, the process-wide default (see
    /// [`set_default_empty_message`]) is captured into the error here, at
    /// construction time. Later changes to the default leave this error
    /// unchanged.
    pub fn empty(parameter: Option<&str>, message: Option<&str>) -> Self {
        let mut err = Self::new(ArgumentErrorKind::Empty, parameter, message);
        if err.message.is_none() {
            err.message = Some(default_empty_message());
        }
        err
    }

    /// Attach a root cause, surfaced through [`std::error::Error::source`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error;
    /// use breakwater::ArgumentError;
    ///
    /// let parse = "abc".parse::<u32>().unwrap_err();
    /// let err = ArgumentError::invalid(Some("port"), None).with_source(parse);
    /// assert!(err.source().is_some());
    /// ```
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// How the argument violated its precondition.
    pub fn kind(&self) -> ArgumentErrorKind {
        self.kind
    }

    /// The name of the offending parameter, exactly as given at the call site.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// The explanation, exactly as given at the call site.
    ///
    /// `None` means the call site supplied none; [`Display`](fmt::Display)
    /// then falls back to the kind's fixed message. Empty-argument errors
    /// always carry `Some`, since the process default is captured at
    /// construction.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self
            .message
            .as_deref()
            .unwrap_or_else(|| self.kind.default_message());
        write!(f, "{}", message)?;
        if let Some(parameter) = &self.parameter {
            write!(f, " (parameter '{}')", parameter)?;
        }
        Ok(())
    }
}

impl StdError for ArgumentError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

/// A state precondition rejected by a guard clause.
///
/// No parameter name: state checks describe the operation as a whole, not a
/// single argument.
///
/// # Examples
///
/// ```
/// use breakwater::OperationError;
///
/// let err = OperationError::new(Some("connection already closed"));
/// assert_eq!(err.message(), Some("connection already closed"));
/// assert_eq!(err.to_string(), "connection already closed");
///
/// let bare = OperationError::new(None);
/// assert_eq!(bare.to_string(), "The operation is not valid for the current state.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationError {
    message: Option<String>,
}

impl OperationError {
    /// Create a state failure with an optional explanation.
    pub fn new(message: Option<&str>) -> Self {
        OperationError {
            message: message.map(str::to_string),
        }
    }

    /// The explanation, exactly as given at the call site.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.message.as_deref().unwrap_or(INVALID_OPERATION_MESSAGE)
        )
    }
}

impl StdError for OperationError {}
