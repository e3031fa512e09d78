//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email) so that once a value reaches the domain layer it
//! can be treated as trusted.
use std::ops::Deref;

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided amount is negative.
    #[error("amount cannot be negative")]
    NegativeAmount,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Strips all markup from user-entered text, keeping the inner content.
fn strip_markup(value: &str) -> String {
    ammonia::Builder::empty().clean(value).to_string()
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CategoryId, "Unique identifier for an offer category.");
id_newtype!(InterestId, "Unique identifier for a shopper interest.");
id_newtype!(RetailerId, "Unique identifier for a retailer.");
id_newtype!(PaymentId, "Unique identifier for a payment record.");
id_newtype!(ApplicationId, "Unique identifier for an onboarding application.");
id_newtype!(TemplateId, "Unique identifier for a notification template.");

/// Lower-cased and validated email address of a retailer contact.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RetailerEmail(String);

impl RetailerEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for RetailerEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RetailerEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RetailerEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RetailerEmail> for String {
    fn from(value: RetailerEmail) -> Self {
        value.0
    }
}

/// Retailer contact phone normalized to the E.164 format.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RetailerPhone(String);

impl RetailerPhone {
    /// Parses and normalizes a phone number string.
    pub fn new<S: Into<String>>(phone: S) -> Result<Self, TypeConstraintError> {
        let raw = phone.into();
        let parsed = parse(None, raw.trim()).map_err(|_| TypeConstraintError::InvalidPhone)?;
        if !parsed.is_valid() {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(parsed.format().mode(Mode::E164).to_string()))
    }

    /// Borrow the phone as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for RetailerPhone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RetailerPhone {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RetailerPhone {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a sanitized, trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let sanitized = strip_markup(&value.into());
                let inner = NonEmptyString::new(sanitized)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    CategoryName,
    "Offer category label enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    InterestName,
    "Shopper interest label enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    RetailerName,
    "Retailer display name enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    TemplateName,
    "Notification template name enforcing trimmed, non-empty values."
);

/// Monetary amount in minor units, never negative.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AmountCents(i64);

impl AmountCents {
    /// Creates a new amount rejecting negative values.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value < 0 {
            return Err(TypeConstraintError::NegativeAmount);
        }
        Ok(Self(value))
    }

    /// Returns the raw minor-unit value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for AmountCents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<i64> for AmountCents {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_newtype_rejects_non_positive() {
        assert!(CategoryId::new(1).is_ok());
        assert_eq!(CategoryId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(RetailerId::new(-5), Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn retailer_email_normalizes() {
        let email = RetailerEmail::new("  Shop@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "shop@example.com");
        assert!(RetailerEmail::new("not-an-email").is_err());
    }

    #[test]
    fn retailer_phone_normalizes_to_e164() {
        let phone = RetailerPhone::new("+7 921 123-45-67").unwrap();
        assert_eq!(phone.as_str(), "+79211234567");
        assert!(RetailerPhone::new("12").is_err());
    }

    #[test]
    fn name_newtype_strips_markup_and_trims() {
        let name = CategoryName::new("  <b>Обувь</b>  ").unwrap();
        assert_eq!(name.as_str(), "Обувь");
        assert!(CategoryName::new("   ").is_err());
    }

    #[test]
    fn amount_rejects_negative() {
        assert_eq!(AmountCents::new(1250).unwrap().to_string(), "12.50");
        assert!(AmountCents::new(-1).is_err());
    }
}
