//! Serde support for failure types (feature-gated)
//!
//! This module provides `Serialize` implementations for [`ArgumentError`],
//! [`ArgumentErrorKind`] and [`OperationError`] when the `serde` feature is
//! enabled, so adapting layers (API error responses, structured logs) can
//! surface the failure kind, parameter name and message.
//!
//! The wrapped `source` of an [`ArgumentError`] is not serialized: arbitrary
//! error trait objects have no serial form. There is no `Deserialize`;
//! failures are constructed by guards, not parsed back in.
//!
//! # Example
//!
//! ```rust,ignore
//! use breakwater::ArgumentError;
//!
//! let err = ArgumentError::missing(Some("user_id"), None);
//! let json = serde_json::to_string(&err).unwrap();
//! assert_eq!(json, r#"{"kind":"missing","parameter":"user_id","message":null}"#);
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{ArgumentError, ArgumentErrorKind, OperationError};

impl Serialize for ArgumentErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            ArgumentErrorKind::Invalid => "invalid",
            ArgumentErrorKind::Missing => "missing",
            ArgumentErrorKind::Empty => "empty",
        })
    }
}

impl Serialize for ArgumentError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ArgumentError", 3)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("parameter", &self.parameter())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl Serialize for OperationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OperationError", 1)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
