//! Modules, the top level of the hierarchy.

use std::{collections::BTreeSet, fmt, str::FromStr};

use super::{DuplicateKeyError, Keyed, Lecture, LectureName, Tag, UniqueList};

/// A module code, unique within the tracker.
///
/// Format: two or more uppercase letters, a four-digit number, and an
/// optional trailing run of uppercase letters. Examples: `CS2040S`,
/// `EG2310`, `ST2334`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModuleCode(String);

impl ModuleCode {
    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ModuleCode {
    type Err = InvalidCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars().peekable();

        let mut letters = 0;
        while chars.next_if(char::is_ascii_uppercase).is_some() {
            letters += 1;
        }

        let mut digits = 0;
        while chars.next_if(char::is_ascii_digit).is_some() {
            digits += 1;
        }

        // Whatever remains may only be a trailing variant suffix.
        let suffix_ok = chars.all(|c| c.is_ascii_uppercase());

        if letters < 2 || digits != 4 || !suffix_ok {
            return Err(InvalidCodeError(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for ModuleCode {
    type Error = InvalidCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

/// Error returned when a string is not a valid module code.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error(
    "Invalid module code '{0}': expected uppercase letters, a four-digit number, and an optional \
     suffix (e.g. CS2040S)"
)]
pub struct InvalidCodeError(String);

/// The human-readable title of a module.
///
/// Free text; may be empty when a module is tracked by code alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleName(String);

impl ModuleName {
    /// Creates a module name.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if no title was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ModuleName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ModuleName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked module.
///
/// A module owns its lectures. Lecture names are unique within the module
/// and the sequence keeps insertion order; replacing a lecture keeps its
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    code: ModuleCode,
    name: ModuleName,
    tags: BTreeSet<Tag>,
    lectures: UniqueList<Lecture>,
}

impl Module {
    /// Creates a module snapshot.
    #[must_use]
    pub const fn new(
        code: ModuleCode,
        name: ModuleName,
        tags: BTreeSet<Tag>,
        lectures: UniqueList<Lecture>,
    ) -> Self {
        Self {
            code,
            name,
            tags,
            lectures,
        }
    }

    /// The module's code.
    #[must_use]
    pub const fn code(&self) -> &ModuleCode {
        &self.code
    }

    /// The module's title.
    #[must_use]
    pub const fn name(&self) -> &ModuleName {
        &self.name
    }

    /// The tags on the module.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// The lectures in this module, in insertion order.
    #[must_use]
    pub const fn lectures(&self) -> &UniqueList<Lecture> {
        &self.lectures
    }

    /// Retrieves a lecture by name.
    #[must_use]
    pub fn lecture(&self, name: &LectureName) -> Option<&Lecture> {
        self.lectures.get(name)
    }

    /// Returns `true` if a lecture with the given name is present.
    #[must_use]
    pub fn has_lecture(&self, name: &LectureName) -> bool {
        self.lectures.contains(name)
    }

    /// Returns a copy of this module carrying the given tag set.
    #[must_use]
    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            code: self.code.clone(),
            name: self.name.clone(),
            tags,
            lectures: self.lectures.clone(),
        }
    }

    /// Returns a copy of this module with one lecture replaced, keeping the
    /// lecture's position.
    ///
    /// # Errors
    ///
    /// Returns an error if the replacement's name collides with a different
    /// lecture in this module.
    ///
    /// # Panics
    ///
    /// Panics if no lecture named `old` is present.
    pub fn with_lecture(&self, old: &LectureName, new: Lecture) -> Result<Self, DuplicateKeyError> {
        let mut lectures = self.lectures.clone();
        lectures.replace(old, new)?;
        Ok(Self {
            code: self.code.clone(),
            name: self.name.clone(),
            tags: self.tags.clone(),
            lectures,
        })
    }
}

impl Keyed for Module {
    type Key = ModuleCode;

    fn key(&self) -> &ModuleCode {
        &self.code
    }
}
