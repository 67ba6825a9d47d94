//! Guard clauses for method arguments
//!
//! Every function here validates a value a caller passed in and rejects it
//! with an [`ArgumentError`] attributing the failure to a named parameter.
//! Guards either pass silently (returning `Ok`) or fail immediately; nothing
//! is retried or recovered locally.
//!
//! Each guard takes the parameter name and message as `Option<&str>` in place
//! of an overload family: `None` means "not supplied", and an explicit empty
//! string is preserved as-is, distinct from `None`.
//!
//! # Examples
//!
//! ```
//! use breakwater::{argument, ArgumentError};
//!
//! fn connect(host: Option<&str>, port: u16) -> Result<(), ArgumentError> {
//!     let host = argument::not_null_or_empty(host, Some("host"), None)?;
//!     argument::requires(port != 0, Some("port must be non-zero"), Some("port"))?;
//!     println!("connecting to {}:{}", host, port);
//!     Ok(())
//! }
//!
//! assert!(connect(Some("localhost"), 8080).is_ok());
//! assert!(connect(None, 8080).is_err());
//! assert!(connect(Some("localhost"), 0).is_err());
//! ```
//!
//! # Emptiness and the three value shapes
//!
//! Rust has no overloading, so the emptiness checks come in three named
//! shapes with materially different semantics:
//!
//! - [`not_empty`] / [`not_null_or_empty`]: text. Pure checks on length.
//! - [`not_empty_slice`] / [`not_null_or_empty_slice`]: sized collections that
//!   are safe to re-read. Checked in place, no value produced.
//! - [`not_empty_iter`] / [`not_null_or_empty_iter`]: lazy sequences that may
//!   only be safe to read once. Drained into an ordered snapshot exactly
//!   once; the snapshot is returned and the source must not be re-drained.

use crate::error::ArgumentError;

fn reject<T>(error: ArgumentError) -> Result<T, ArgumentError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %error, "argument guard rejected input");
    Err(error)
}

/// Require `condition` to hold for an argument.
///
/// Passes silently when `condition` is `true`; otherwise fails with a generic
/// [`ArgumentError`] carrying `message` and `parameter` verbatim.
///
/// # Examples
///
/// ```
/// use breakwater::argument;
///
/// assert!(argument::requires(true, None, None).is_ok());
///
/// let err = argument::requires(false, Some("out of range"), Some("index")).unwrap_err();
/// assert_eq!(err.message(), Some("out of range"));
/// assert_eq!(err.parameter(), Some("index"));
/// ```
pub fn requires(
    condition: bool,
    message: Option<&str>,
    parameter: Option<&str>,
) -> Result<(), ArgumentError> {
    if condition {
        Ok(())
    } else {
        reject(ArgumentError::invalid(parameter, message))
    }
}

/// Forbid `condition` from holding for an argument.
///
/// The logical complement of [`requires`]: passes silently when `condition`
/// is `false`, fails with the same payload rules when it is `true`.
///
/// # Examples
///
/// ```
/// use breakwater::argument;
///
/// assert!(argument::forbids(false, None, None).is_ok());
/// assert!(argument::forbids(true, None, Some("flags")).is_err());
/// ```
pub fn forbids(
    condition: bool,
    message: Option<&str>,
    parameter: Option<&str>,
) -> Result<(), ArgumentError> {
    if condition {
        reject(ArgumentError::invalid(parameter, message))
    } else {
        Ok(())
    }
}

/// Require an argument to be present, returning it unwrapped.
///
/// Fails with a missing-argument error when `value` is `None`; otherwise
/// returns the inner value unchanged so the caller keeps working with a
/// non-optional type.
///
/// # Examples
///
/// ```
/// use breakwater::{argument, ArgumentErrorKind};
///
/// let n = argument::not_null(Some(42), Some("count"), None).unwrap();
/// assert_eq!(n, 42);
///
/// let err = argument::not_null::<i32>(None, Some("count"), None).unwrap_err();
/// assert_eq!(err.kind(), ArgumentErrorKind::Missing);
/// ```
pub fn not_null<T>(
    value: Option<T>,
    parameter: Option<&str>,
    message: Option<&str>,
) -> Result<T, ArgumentError> {
    match value {
        Some(value) => Ok(value),
        None => reject(ArgumentError::missing(parameter, message)),
    }
}

/// Require text to be non-empty, tolerating absence.
///
/// `None` passes silently: this guard intentionally does not check presence.
/// Present zero-length text fails with an empty-argument error.
///
/// # Examples
///
/// ```
/// use breakwater::{argument, ArgumentErrorKind};
///
/// assert!(argument::not_empty(None, None, None).is_ok());
/// assert!(argument::not_empty(Some("x"), None, None).is_ok());
///
/// let err = argument::not_empty(Some(""), Some("name"), None).unwrap_err();
/// assert_eq!(err.kind(), ArgumentErrorKind::Empty);
/// ```
pub fn not_empty(
    text: Option<&str>,
    parameter: Option<&str>,
    message: Option<&str>,
) -> Result<(), ArgumentError> {
    match text {
        Some("") => reject(ArgumentError::empty(parameter, message)),
        _ => Ok(()),
    }
}

/// Require text to be present and non-empty, returning it.
///
/// The presence check strictly precedes the emptiness check: `None` fails as
/// missing, `Some("")` fails as empty, anything else passes through
/// unchanged.
///
/// # Examples
///
/// ```
/// use breakwater::{argument, ArgumentErrorKind};
///
/// let name = argument::not_null_or_empty(Some("alice"), Some("name"), None).unwrap();
/// assert_eq!(name, "alice");
///
/// let err = argument::not_null_or_empty::<&str>(None, Some("name"), None).unwrap_err();
/// assert_eq!(err.kind(), ArgumentErrorKind::Missing);
///
/// let err = argument::not_null_or_empty(Some(""), Some("name"), None).unwrap_err();
/// assert_eq!(err.kind(), ArgumentErrorKind::Empty);
/// ```
pub fn not_null_or_empty<S: AsRef<str>>(
    text: Option<S>,
    parameter: Option<&str>,
    message: Option<&str>,
) -> Result<S, ArgumentError> {
    let text = not_null(text, parameter, message)?;
    not_empty(Some(text.as_ref()), parameter, message)?;
    Ok(text)
}

fn drain<I: IntoIterator>(
    sequence: I,
    parameter: Option<&str>,
    message: Option<&str>,
) -> Result<Vec<I::Item>, ArgumentError> {
    let snapshot: Vec<_> = sequence.into_iter().collect();
    if snapshot.is_empty() {
        reject(ArgumentError::empty(parameter, message))
    } else {
        Ok(snapshot)
    }
}

/// Require a lazy sequence to be non-empty, returning an ordered snapshot.
///
/// `None` propagates as `Ok(None)` without failing. A present sequence is
/// drained exactly once into a `Vec`; a zero-element sequence fails with an
/// empty-argument error, otherwise the snapshot is returned. Callers must
/// treat the source as consumed and use the returned snapshot instead. This
/// makes the guard safe for read-once sources, at the cost of an O(n)
/// materialization.
///
/// For collections that are cheap to re-read, use [`not_empty_slice`], which
/// checks in place without copying.
///
/// # Examples
///
/// ```
/// use breakwater::{argument, ArgumentErrorKind};
///
/// let snapshot = argument::not_empty_iter(Some(1..=3), None, None).unwrap();
/// assert_eq!(snapshot, Some(vec![1, 2, 3]));
///
/// assert_eq!(argument::not_empty_iter::<[i32; 0]>(None, None, None).unwrap(), None);
///
/// let err = argument::not_empty_iter(Some(Vec::<i32>::new()), None, None).unwrap_err();
/// assert_eq!(err.kind(), ArgumentErrorKind::Empty);
/// ```
pub fn not_empty_iter<I: IntoIterator>(
    sequence: Option<I>,
    parameter: Option<&str>,
    message: Option<&str>,
) -> Result<Option<Vec<I::Item>>, ArgumentError> {
    match sequence {
        None => Ok(None),
        Some(sequence) => drain(sequence, parameter, message).map(Some),
    }
}

/// Require a lazy sequence to be present and non-empty, returning a snapshot.
///
/// Composes [`not_null`] then the drain of [`not_empty_iter`], in that order:
/// `None` fails as missing before any enumeration happens, a zero-element
/// sequence fails as empty, and otherwise the ordered snapshot is returned
/// (never `None`, since absence already failed).
///
/// # Examples
///
/// ```
/// use breakwater::{argument, ArgumentErrorKind};
///
/// let snapshot = argument::not_null_or_empty_iter(Some(vec!["a", "b"]), None, None).unwrap();
/// assert_eq!(snapshot, vec!["a", "b"]);
///
/// let err = argument::not_null_or_empty_iter::<Vec<i32>>(None, None, None).unwrap_err();
/// assert_eq!(err.kind(), ArgumentErrorKind::Missing);
/// ```
pub fn not_null_or_empty_iter<I: IntoIterator>(
    sequence: Option<I>,
    parameter: Option<&str>,
    message: Option<&str>,
) -> Result<Vec<I::Item>, ArgumentError> {
    let sequence = not_null(sequence, parameter, message)?;
    drain(sequence, parameter, message)
}

/// Require a sized collection to be non-empty, tolerating absence.
///
/// `None` passes silently. A present zero-length slice fails with an
/// empty-argument error. No value is produced: a sized collection needs no
/// snapshot, so this is a pure in-place check.
///
/// # Examples
///
/// ```
/// use breakwater::{argument, ArgumentErrorKind};
///
/// assert!(argument::not_empty_slice::<i32>(None, None, None).is_ok());
/// assert!(argument::not_empty_slice(Some(&[1, 2][..]), None, None).is_ok());
///
/// let err = argument::not_empty_slice::<i32>(Some(&[]), Some("items"), None).unwrap_err();
/// assert_eq!(err.kind(), ArgumentErrorKind::Empty);
/// ```
pub fn not_empty_slice<T>(
    collection: Option<&[T]>,
    parameter: Option<&str>,
    message: Option<&str>,
) -> Result<(), ArgumentError> {
    match collection {
        Some(items) if items.is_empty() => reject(ArgumentError::empty(parameter, message)),
        _ => Ok(()),
    }
}

/// Require a sized collection to be present and non-empty.
///
/// `None` fails as missing, a zero-length slice fails as empty, in that
/// order. Like [`not_empty_slice`] this is a pure check producing no value.
///
/// # Examples
///
/// ```
/// use breakwater::{argument, ArgumentErrorKind};
///
/// assert!(argument::not_null_or_empty_slice(Some(&[1][..]), None, None).is_ok());
///
/// let err = argument::not_null_or_empty_slice::<i32>(None, Some("items"), None).unwrap_err();
/// assert_eq!(err.kind(), ArgumentErrorKind::Missing);
/// ```
pub fn not_null_or_empty_slice<T>(
    collection: Option<&[T]>,
    parameter: Option<&str>,
    message: Option<&str>,
) -> Result<(), ArgumentError> {
    let items = not_null(collection, parameter, message)?;
    not_empty_slice(Some(items), parameter, message)
}
