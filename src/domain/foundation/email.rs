//! Email address value object.
//!
//! Email is the only join key available between a payment provider checkout
//! session and an internal profile, so it gets a real type: normalized at
//! construction and compared case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A syntactically plausible, lowercase-normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalizes an email address.
    ///
    /// Validation is intentionally shallow (non-empty local part and domain
    /// around a single `@`); deliverability is the identity service's
    /// problem, not ours.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }

        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
                Ok(Self(trimmed.to_lowercase()))
            }
            _ => Err(ValidationError::invalid_format(
                "email",
                "expected local@domain.tld",
            )),
        }
    }

    /// Returns the normalized address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
