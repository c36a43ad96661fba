//! Input checks run before anything is sent to the server.
//!
//! These mirror the server's rules closely enough to catch typos early.
//! The server remains the authority; in particular the admin password
//! check on bulk clean operations is cosmetic.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;
use uuid::Uuid;

use super::user::{Credentials, UserInput, UserUpdate};

pub const MIN_USERNAME_LEN: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("birthday cannot be in the future")]
    FutureBirthday,

    #[error("new password and confirmation do not match")]
    PasswordMismatch,

    #[error("nothing to update")]
    EmptyUpdate,

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error("'{0}' is not a valid user id")]
    InvalidUserId(String),
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

fn min_len(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    required(field, value)?;
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    required("email", email)?;
    if !EMAIL.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    min_len("password", password, MIN_PASSWORD_LEN)
}

fn validate_birthday(birthday: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if birthday > today {
        return Err(ValidationError::FutureBirthday);
    }
    Ok(())
}

/// Registration form.
pub fn validate_user_input(input: &UserInput, today: NaiveDate) -> Result<(), ValidationError> {
    required("name", &input.name)?;
    required("lastname", &input.lastname)?;
    min_len("username", &input.username, MIN_USERNAME_LEN)?;
    validate_email(&input.email)?;
    if let Some(password) = &input.password {
        validate_password(password)?;
    }
    match input.birthday {
        Some(birthday) => validate_birthday(birthday, today),
        None => Err(ValidationError::Required { field: "birthday" }),
    }
}

/// Profile edit: every present field follows the registration rules.
pub fn validate_user_update(update: &UserUpdate, today: NaiveDate) -> Result<(), ValidationError> {
    if update.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }
    if let Some(name) = &update.name {
        required("name", name)?;
    }
    if let Some(lastname) = &update.lastname {
        required("lastname", lastname)?;
    }
    if let Some(username) = &update.username {
        min_len("username", username, MIN_USERNAME_LEN)?;
    }
    if let Some(email) = &update.email {
        validate_email(email)?;
    }
    if let Some(birthday) = update.birthday {
        validate_birthday(birthday, today)?;
    }
    Ok(())
}

pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    validate_email(&credentials.email)?;
    validate_password(&credentials.password)
}

pub fn validate_password_change(
    current: &str,
    new: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    required("current password", current)?;
    min_len("new password", new, MIN_PASSWORD_LEN)?;
    if new != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Trimmed comment body, rejected when blank.
pub fn validate_comment(content: &str) -> Result<&str, ValidationError> {
    required("comment", content)?;
    Ok(content.trim())
}

/// Confirmation password for the admin bulk clean operations.
///
/// Only a length check; the server decides whether the password is right.
pub fn validate_clean_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }
    min_len("password", password, MIN_PASSWORD_LEN)
}

pub fn validate_user_id(id: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidUserId(id.to_string()))
}
