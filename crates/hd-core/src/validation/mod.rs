//! Field validation for the settings forms.
//!
//! Validation is synchronous and per-field: every violated rule maps to its
//! own message, attached to the field that failed. Failures never produce a
//! single global error and never reach the network.

pub mod password;
pub mod username;

use std::fmt::{Display, Formatter};

use thiserror::Error;

pub use password::{validate_confirmation, validate_password, PasswordStrength};
pub use username::validate_username;

/// Form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Password,
    ConfirmPassword,
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormField::Username => "username",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirm_password",
        };
        write!(f, "{name}")
    }
}

/// A field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: FormField, message: &'static str) -> Self {
        Self { field, message }
    }
}
