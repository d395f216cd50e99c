//! Account name validation.

use std::fmt;

use regex::Regex;

use crate::error::{HerdError, Result};

/// Pattern for valid account names: alphanumeric and hyphens, with no
/// leading or trailing hyphen.
pub const ACCOUNT_PATTERN: &str = r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$";

/// Maximum length GitHub allows for a user or organization name.
pub const MAX_ACCOUNT_LEN: usize = 39;

/// A validated GitHub user or organization name.
///
/// Validation happens before any network call, so a typo'd account fails
/// fast with a usage error instead of a confusing API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Validate and wrap an account name.
    pub fn parse(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();

        if name.is_empty() {
            return Err(HerdError::InvalidAccount(
                "account name must not be empty".into(),
            ));
        }
        if name.len() > MAX_ACCOUNT_LEN {
            return Err(HerdError::InvalidAccount(format!(
                "'{}' exceeds {} characters",
                name, MAX_ACCOUNT_LEN
            )));
        }

        let pattern = Regex::new(ACCOUNT_PATTERN)?;
        if !pattern.is_match(name) {
            return Err(HerdError::InvalidAccount(format!(
                "'{}' may only contain alphanumerics and hyphens, and must not start or end with a hyphen",
                name
            )));
        }

        Ok(Self(name.to_string()))
    }

    /// The validated name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
