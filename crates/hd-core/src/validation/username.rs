//! Username rules.
//!
//! A valid username is 3 to 20 characters of dot-separated segments, where
//! each segment is `[A-Za-z0-9_]+` (no leading, trailing, or doubled dots)
//! and the whole name contains at least one alphanumeric character.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::{FieldError, FormField};

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;

pub const MSG_USERNAME_REQUIRED: &str = "Oops! A username is required.";
pub const MSG_USERNAME_TOO_SHORT: &str = "Oops! Your username is too short.";
pub const MSG_USERNAME_TOO_LONG: &str = "Oops! Your username is too long.";
pub const MSG_USERNAME_INVALID: &str = "Oops! That's not a valid username.";

static SEGMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+\.)*[A-Za-z0-9_]+$").expect("username pattern is valid")
});

/// Validate a candidate username, surfacing the first unmet rule.
///
/// Rules apply in schema order: required, minimum length, segment pattern,
/// maximum length — each with its own message.
pub fn validate_username(username: &str) -> Result<(), FieldError> {
    let fail = |message| Err(FieldError::new(FormField::Username, message));

    if username.is_empty() {
        return fail(MSG_USERNAME_REQUIRED);
    }
    if username.chars().count() < USERNAME_MIN_LEN {
        return fail(MSG_USERNAME_TOO_SHORT);
    }
    // The pattern alone admits all-underscore names; require one alphanumeric.
    if !SEGMENT_PATTERN.is_match(username)
        || !username.chars().any(|c| c.is_ascii_alphanumeric())
    {
        return fail(MSG_USERNAME_INVALID);
    }
    if username.chars().count() > USERNAME_MAX_LEN {
        return fail(MSG_USERNAME_TOO_LONG);
    }

    Ok(())
}
