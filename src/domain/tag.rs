use std::{fmt, str::FromStr};

use non_empty_string::NonEmptyString;

/// A free-text label attached to a module, lecture, or video.
///
/// Tags are alphanumeric and case-sensitive: `fun` and `Fun` are distinct
/// labels. Entities hold their tags in a set, so attaching a label twice has
/// no effect.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tag(NonEmptyString);

impl Tag {
    /// Creates a new `Tag` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTagError` if the string is empty or contains
    /// characters other than ASCII letters and digits.
    pub fn new(s: String) -> Result<Self, InvalidTagError> {
        let non_empty = NonEmptyString::new(s.clone()).map_err(|_| InvalidTagError(s.clone()))?;

        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidTagError(s));
        }

        Ok(Self(non_empty))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<&str> for Tag {
    type Error = InvalidTagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tag {
    type Err = InvalidTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Error returned when a string is not a valid tag label.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("Invalid tag '{0}': tags must be non-empty and alphanumeric")]
pub struct InvalidTagError(String);
