//! Guard clauses for operation state
//!
//! These guards assert that the current object or operation state permits an
//! action. Unlike the [`argument`](crate::argument) guards they attribute
//! failures to the operation as a whole, so the resulting
//! [`OperationError`] carries no parameter name.
//!
//! # Examples
//!
//! ```
//! use breakwater::{operation, OperationError};
//!
//! struct Connection {
//!     open: bool,
//! }
//!
//! impl Connection {
//!     fn send(&self, payload: &[u8]) -> Result<(), OperationError> {
//!         operation::requires(self.open, Some("connection is closed"))?;
//!         operation::forbids(payload.len() > 1024, Some("payload too large"))?;
//!         Ok(())
//!     }
//! }
//!
//! let conn = Connection { open: false };
//! let err = conn.send(b"hi").unwrap_err();
//! assert_eq!(err.message(), Some("connection is closed"));
//! ```

use crate::error::OperationError;

/// Require `condition` to hold for the current state.
///
/// Passes silently when `condition` is `true`; otherwise fails with an
/// [`OperationError`] carrying `message` verbatim.
///
/// # Examples
///
/// ```
/// use breakwater::operation;
///
/// assert!(operation::requires(true, None).is_ok());
///
/// let err = operation::requires(false, Some("not initialized")).unwrap_err();
/// assert_eq!(err.message(), Some("not initialized"));
/// ```
pub fn requires(condition: bool, message: Option<&str>) -> Result<(), OperationError> {
    if condition {
        Ok(())
    } else {
        let error = OperationError::new(message);
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %error, "state guard rejected operation");
        Err(error)
    }
}

/// Forbid `condition` from holding for the current state.
///
/// Defined as `requires(!condition, message)` rather than a second code
/// path, so the failure construction stays in one place.
///
/// # Examples
///
/// ```
/// use breakwater::operation;
///
/// assert!(operation::forbids(false, None).is_ok());
/// assert!(operation::forbids(true, Some("already running")).is_err());
/// ```
pub fn forbids(condition: bool, message: Option<&str>) -> Result<(), OperationError> {
    requires(!condition, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_true_is_silent() {
        assert!(requires(true, None).is_ok());
        assert!(requires(true, Some("msg")).is_ok());
    }

    #[test]
    fn test_requires_false_fails_with_verbatim_message() {
        let err = requires(false, Some("msg")).unwrap_err();
        assert_eq!(err.message(), Some("msg"));

        let err = requires(false, Some("")).unwrap_err();
        assert_eq!(err.message(), Some(""));

        let err = requires(false, None).unwrap_err();
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_forbids_false_is_silent() {
        assert!(forbids(false, None).is_ok());
        assert!(forbids(false, Some("msg")).is_ok());
    }

    #[test]
    fn test_forbids_true_fails_with_verbatim_message() {
        let err = forbids(true, Some("msg")).unwrap_err();
        assert_eq!(err.message(), Some("msg"));
    }

    #[test]
    fn test_requires_and_forbids_are_duals() {
        for condition in [true, false] {
            assert_eq!(
                requires(condition, None).is_ok(),
                forbids(!condition, None).is_ok()
            );
        }
    }
}
