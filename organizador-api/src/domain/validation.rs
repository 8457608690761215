//! Field rules applied before anything is written.

use std::sync::LazyLock;

use regex::Regex;
use time::Date;

use super::{OrganizerError, Rejection, Subject};

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{5}-[0-9]{4}$").expect("phone pattern is valid")
});
static PHONE_WITH_AREA_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{2}\)[0-9]{5}-[0-9]{4}$").expect("phone pattern is valid")
});

/// Requires a value to be present and non-empty.
pub(crate) fn required(value: Option<String>, subject: Subject) -> Result<String, OrganizerError> {
    match value {
        None => Err(OrganizerError::Invalid(Rejection::NotNull(subject))),
        Some(value) if value.is_empty() => {
            Err(OrganizerError::Invalid(Rejection::NotEmpty(subject)))
        }
        Some(value) => Ok(value),
    }
}

/// Requires a value to be present; empty strings are fine.
pub(crate) fn present<T>(value: Option<T>, subject: Subject) -> Result<T, OrganizerError> {
    value.ok_or(OrganizerError::Invalid(Rejection::NotNull(subject)))
}

/// Accepts `11111-1111` and `(11)11111-1111`.
pub(crate) fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone) || PHONE_WITH_AREA_CODE.is_match(phone)
}

pub(crate) fn check_phone(phone: &str) -> Result<(), OrganizerError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(OrganizerError::Invalid(Rejection::PhoneFormat))
    }
}

/// Due dates may be today but never in the past.
pub(crate) fn check_due_date(due_date: Date, today: Date) -> Result<(), OrganizerError> {
    if due_date < today {
        Err(OrganizerError::Invalid(Rejection::DateBeforeToday))
    } else {
        Ok(())
    }
}
