//! Password rules.
//!
//! A valid password has at least [`PASSWORD_MIN_LEN`] characters and contains
//! a lowercase letter, an uppercase letter, a digit, and a symbol from
//! [`SPECIAL_CHARS`]. Checks run in that rule order after the required check,
//! with the character-class rules ahead of the length rule, so the first
//! unmet rule is the one surfaced.

use crate::validation::{FieldError, FormField};

pub const PASSWORD_MIN_LEN: usize = 10;

/// The fixed symbol set a password must draw from.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

pub const MSG_PASSWORD_REQUIRED: &str = "Oops! A password is required.";
pub const MSG_PASSWORD_MISSING_LOWERCASE: &str = "Oops! Missing a lowercase letter.";
pub const MSG_PASSWORD_MISSING_UPPERCASE: &str = "Oops! Missing an uppercase letter.";
pub const MSG_PASSWORD_MISSING_DIGIT: &str = "Oops! Missing a number.";
pub const MSG_PASSWORD_MISSING_SPECIAL: &str = "Oops! Missing a special character.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Oops! Enter at least 10 characters.";
pub const MSG_PASSWORDS_DONT_MATCH: &str = "Oops! Passwords don't match.";

/// Validate a candidate password, surfacing the first unmet rule.
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    let fail = |message| Err(FieldError::new(FormField::Password, message));

    if password.is_empty() {
        return fail(MSG_PASSWORD_REQUIRED);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return fail(MSG_PASSWORD_MISSING_LOWERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return fail(MSG_PASSWORD_MISSING_UPPERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return fail(MSG_PASSWORD_MISSING_DIGIT);
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return fail(MSG_PASSWORD_MISSING_SPECIAL);
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return fail(MSG_PASSWORD_TOO_SHORT);
    }

    Ok(())
}

/// Check the confirmation field at submit time.
///
/// The mismatch error attaches to the confirm field, not the password field.
pub fn validate_confirmation(password: &str, confirm: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        return Err(FieldError::new(
            FormField::ConfirmPassword,
            MSG_PASSWORD_REQUIRED,
        ));
    }
    if password != confirm {
        return Err(FieldError::new(
            FormField::ConfirmPassword,
            MSG_PASSWORDS_DONT_MATCH,
        ));
    }
    Ok(())
}

/// Cosmetic strength tier shown beside the password input.
///
/// Advisory only: the pass/fail contract is [`validate_password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

/// Score a password for the strength indicator. None for empty input.
pub fn strength(password: &str) -> Option<PasswordStrength> {
    if password.is_empty() {
        return None;
    }

    let lower = password.chars().any(|c| c.is_ascii_lowercase());
    let upper = password.chars().any(|c| c.is_ascii_uppercase());
    let digit = password.chars().any(|c| c.is_ascii_digit());
    let special = password.chars().any(|c| SPECIAL_CHARS.contains(c));
    let long_enough = password.chars().count() >= PASSWORD_MIN_LEN;

    let tier = if lower && upper && digit && special && long_enough {
        PasswordStrength::Strong
    } else if lower && upper && (digit || special) {
        PasswordStrength::Moderate
    } else {
        PasswordStrength::Weak
    };
    Some(tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_password_meeting_every_rule() {
        assert_eq!(validate_password("Abc123!@#x"), Ok(()));
    }

    #[test]
    fn test_empty_password_is_required() {
        let err = validate_password("").unwrap_err();
        assert_eq!(err.field, FormField::Password);
        assert_eq!(err.message, MSG_PASSWORD_REQUIRED);
    }

    #[test]
    fn test_first_unmet_rule_surfaces() {
        // Short and symbol-free, but the uppercase rule is hit first.
        let err = validate_password("abc123").unwrap_err();
        assert_eq!(err.message, MSG_PASSWORD_MISSING_UPPERCASE);
    }

    #[test]
    fn test_reports_each_missing_class() {
        let cases = [
            ("ABC123!@#X", MSG_PASSWORD_MISSING_LOWERCASE),
            ("abc123!@#x", MSG_PASSWORD_MISSING_UPPERCASE),
            ("Abcdef!@#x", MSG_PASSWORD_MISSING_DIGIT),
            ("Abcdef123x", MSG_PASSWORD_MISSING_SPECIAL),
        ];
        for (password, expected) in cases {
            let err = validate_password(password).unwrap_err();
            assert_eq!(err.message, expected, "password: {password}");
        }
    }

    #[test]
    fn test_length_rule_surfaces_last() {
        let err = validate_password("Abc123!@#").unwrap_err();
        assert_eq!(err.message, MSG_PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_confirmation_mismatch_attaches_to_confirm_field() {
        let err = validate_confirmation("Abc123!@#x", "Abc123!@#y").unwrap_err();
        assert_eq!(err.field, FormField::ConfirmPassword);
        assert_eq!(err.message, MSG_PASSWORDS_DONT_MATCH);
    }

    #[test]
    fn test_confirmation_match_passes() {
        assert_eq!(validate_confirmation("Abc123!@#x", "Abc123!@#x"), Ok(()));
    }

    #[test]
    fn test_strength_tiers() {
        assert_eq!(strength(""), None);
        assert_eq!(strength("abcdefgh"), Some(PasswordStrength::Weak));
        assert_eq!(strength("Abc123"), Some(PasswordStrength::Moderate));
        assert_eq!(strength("Abc123!@#x"), Some(PasswordStrength::Strong));
    }
}
