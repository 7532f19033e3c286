//! # Field Validation
//!
//! The rules an enquiry must pass before it reaches the store. The same functions run
//! in the service (before any write) and in the dashboard (before any request), so a
//! form the dashboard accepts is never rejected by the service for a rule reason.
//!
//! | Field   | Rule                                                                 |
//! |---------|----------------------------------------------------------------------|
//! | name    | 2 to 100 characters after trimming                                   |
//! | email   | `local@domain.tld`, no whitespace, checked after trimming            |
//! | phone   | whitespace removed, 10 to 15 characters of `0-9 - ( )`, leading `+` |
//! | message | 10 to 1000 characters after trimming                                 |
//!
//! The predicates accept anything implementing [`FieldInput`], so a missing value
//! (`None`) is simply invalid rather than a separate code path.

use crate::error::{QueryError, Result};
use crate::model::{EnquiryFields, NewEnquiry};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

pub const NAME_LENGTH: RangeInclusive<usize> = 2..=100;
pub const MESSAGE_LENGTH: RangeInclusive<usize> = 10..=1000;
pub const PHONE_LENGTH: RangeInclusive<usize> = 10..=15;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\-()]{10,15}$").expect("phone pattern compiles"));

pub const NAME_INVALID: &str = "Please enter a valid name (2-100 characters)";
pub const EMAIL_MISSING: &str = "Please enter your email";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_MISSING: &str = "Please enter your phone number to continue.";
pub const PHONE_INVALID: &str = "Please enter a valid phone number (10-15 digits). You can include country code, spaces, dashes, or parentheses.";
pub const MESSAGE_INVALID: &str = "Please enter a valid message (10-1000 characters)";

/// A value that may or may not carry a string.
pub trait FieldInput {
    fn as_field(&self) -> Option<&str>;
}

impl FieldInput for str {
    fn as_field(&self) -> Option<&str> {
        Some(self)
    }
}

impl FieldInput for String {
    fn as_field(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl FieldInput for Option<String> {
    fn as_field(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl FieldInput for Option<&str> {
    fn as_field(&self) -> Option<&str> {
        *self
    }
}

impl<T: FieldInput + ?Sized> FieldInput for &T {
    fn as_field(&self) -> Option<&str> {
        (**self).as_field()
    }
}

pub fn validate_email<T: FieldInput + ?Sized>(input: &T) -> bool {
    input
        .as_field()
        .is_some_and(|email| EMAIL_RE.is_match(email.trim()))
}

pub fn validate_phone<T: FieldInput + ?Sized>(input: &T) -> bool {
    input.as_field().is_some_and(|phone| {
        let cleaned: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        PHONE_LENGTH.contains(&cleaned.chars().count()) && PHONE_RE.is_match(&cleaned)
    })
}

pub fn validate_name<T: FieldInput + ?Sized>(input: &T) -> bool {
    trimmed_len_within(input, NAME_LENGTH)
}

pub fn validate_message<T: FieldInput + ?Sized>(input: &T) -> bool {
    trimmed_len_within(input, MESSAGE_LENGTH)
}

fn trimmed_len_within<T: FieldInput + ?Sized>(input: &T, range: RangeInclusive<usize>) -> bool {
    input
        .as_field()
        .is_some_and(|value| range.contains(&value.trim().chars().count()))
}

fn is_blank<T: FieldInput + ?Sized>(input: &T) -> bool {
    input.as_field().map_or(true, |value| value.trim().is_empty())
}

/// Check a submitted form in the order the dashboard reports problems and
/// return the trimmed fields, or the first failure.
pub fn validate_fields(fields: &EnquiryFields) -> Result<NewEnquiry> {
    if !validate_name(&fields.name) {
        return Err(QueryError::validation("name", NAME_INVALID));
    }
    if is_blank(&fields.email) {
        return Err(QueryError::validation("email", EMAIL_MISSING));
    }
    if !validate_email(&fields.email) {
        return Err(QueryError::validation("email", EMAIL_INVALID));
    }
    if is_blank(&fields.phone) {
        return Err(QueryError::validation("phone", PHONE_MISSING));
    }
    if !validate_phone(&fields.phone) {
        return Err(QueryError::validation("phone", PHONE_INVALID));
    }
    if !validate_message(&fields.message) {
        return Err(QueryError::validation("message", MESSAGE_INVALID));
    }

    let trimmed = |value: &Option<String>| value.as_deref().unwrap_or_default().trim().to_string();
    Ok(NewEnquiry {
        name: trimmed(&fields.name),
        email: trimmed(&fields.email),
        phone: trimmed(&fields.phone),
        message: trimmed(&fields.message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> EnquiryFields {
        EnquiryFields::new(
            "Grace Hopper",
            "grace@navy.mil",
            "+1 (555) 123-4567",
            "Please call me back about COBOL.",
        )
    }

    fn field_of(err: QueryError) -> &'static str {
        match err {
            QueryError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn email_requires_an_at_sign() {
        for s in ["", "plain", "no.at.sign.com", "a.b.co", "   "] {
            assert!(!validate_email(s), "{s:?} should be rejected");
        }
        assert!(validate_email("a@b.co"));
    }

    #[test]
    fn email_rejects_whitespace_and_missing_dot_after_at() {
        assert!(!validate_email("a b@c.co"));
        assert!(!validate_email("a@bco"));
        assert!(!validate_email("a@@b.co"));
        assert!(validate_email("  a@b.co  "));
    }

    #[test]
    fn phone_accepts_formatted_international_numbers() {
        assert!(validate_phone("+1 (555) 123-4567"));
        assert!(validate_phone("0123456789"));
        assert!(validate_phone("012 345 6789"));
    }

    #[test]
    fn phone_length_bounds_apply_after_stripping_whitespace() {
        assert!(!validate_phone("123456789"));
        assert!(!validate_phone("1234 5678 9"));
        assert!(validate_phone("123456789012345"));
        assert!(!validate_phone("1234567890123456"));
        assert!(!validate_phone("555-CALL-NOW"));
        assert!(!validate_phone("12345+67890"));
        assert!(!validate_phone("+123456789012345"));
        assert!(validate_phone("+12345678901234"));
    }

    #[test]
    fn name_bounds() {
        assert!(!validate_name(""));
        assert!(!validate_name("A"));
        assert!(validate_name("Al"));
        assert!(validate_name(&"x".repeat(100)));
        assert!(!validate_name(&format!(" {}", "x".repeat(101))));
        assert!(!validate_name("  A  "));
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        assert!(validate_name("Zoë"));
        assert!(validate_name(&"é".repeat(100)));
    }

    #[test]
    fn message_bounds() {
        assert!(!validate_message("short"));
        assert!(validate_message("0123456789"));
        assert!(validate_message("   0123456789   "));
        assert!(!validate_message(&"m".repeat(1001)));
    }

    #[test]
    fn missing_input_is_invalid() {
        let missing: Option<String> = None;
        assert!(!validate_email(&missing));
        assert!(!validate_phone(&missing));
        assert!(!validate_name(&missing));
        assert!(!validate_message(&missing));
        assert!(!validate_name(&None::<&str>));
    }

    #[test]
    fn validate_fields_trims_accepted_values() {
        let mut fields = valid_fields();
        fields.name = Some("  Grace Hopper ".into());
        fields.email = Some(" grace@navy.mil ".into());

        let new = validate_fields(&fields).unwrap();
        assert_eq!(new.name, "Grace Hopper");
        assert_eq!(new.email, "grace@navy.mil");
        assert_eq!(new.phone, "+1 (555) 123-4567");
    }

    #[test]
    fn validate_fields_reports_first_failure_in_form_order() {
        let mut fields = valid_fields();
        fields.email = None;
        fields.message = Some("short".into());
        assert_eq!(field_of(validate_fields(&fields).unwrap_err()), "email");

        let mut fields = valid_fields();
        fields.name = Some("X".into());
        fields.phone = None;
        assert_eq!(field_of(validate_fields(&fields).unwrap_err()), "name");
    }

    #[test]
    fn validate_fields_distinguishes_missing_from_malformed() {
        let mut fields = valid_fields();
        fields.phone = Some("  ".into());
        let err = validate_fields(&fields).unwrap_err();
        assert_eq!(err.to_string(), PHONE_MISSING);

        fields.phone = Some("12".into());
        let err = validate_fields(&fields).unwrap_err();
        assert_eq!(err.to_string(), PHONE_INVALID);
    }
}
