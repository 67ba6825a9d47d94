//! Lifecycle of the process-wide empty-argument default message
//!
//! The default message is shared mutable state, so the whole lifecycle runs
//! in a single test: integration test files get their own process, and one
//! `#[test]` keeps writers from interleaving with readers.

use breakwater::error::{
    default_empty_message, set_default_empty_message, ArgumentError, EMPTY_ARGUMENT_MESSAGE,
};
use breakwater::{argument, ArgumentErrorKind};

#[test]
fn default_empty_message_lifecycle() {
    // Startup value.
    assert_eq!(default_empty_message(), EMPTY_ARGUMENT_MESSAGE);

    let before = argument::not_empty(Some(""), Some("name"), None).unwrap_err();
    assert_eq!(before.message(), Some(EMPTY_ARGUMENT_MESSAGE));
    assert_eq!(
        before.to_string(),
        "The specified argument must not be empty. (parameter 'name')"
    );

    set_default_empty_message("value required");
    assert_eq!(default_empty_message(), "value required");

    // Constructions after the write pick up the new default.
    let after = argument::not_empty(Some(""), Some("name"), None).unwrap_err();
    assert_eq!(after.message(), Some("value required"));
    assert_eq!(after.to_string(), "value required (parameter 'name')");

    // Failures constructed before the write keep their captured message.
    assert_eq!(before.message(), Some(EMPTY_ARGUMENT_MESSAGE));

    // Explicit messages are never replaced by the default.
    let explicit = argument::not_empty(Some(""), None, Some("specific")).unwrap_err();
    assert_eq!(explicit.message(), Some("specific"));

    // Direct construction behaves like the guard path.
    let direct = ArgumentError::empty(None, None);
    assert_eq!(direct.kind(), ArgumentErrorKind::Empty);
    assert_eq!(direct.message(), Some("value required"));

    // The guards that do not raise empty failures never read the default.
    let missing = argument::not_null::<i32>(None, Some("n"), None).unwrap_err();
    assert_eq!(missing.message(), None);

    set_default_empty_message(EMPTY_ARGUMENT_MESSAGE);
    assert_eq!(default_empty_message(), EMPTY_ARGUMENT_MESSAGE);
}
