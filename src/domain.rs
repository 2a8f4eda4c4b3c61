//! Domain models for the study tracker.
//!
//! Modules contain lectures, and lectures contain videos. Entities are
//! immutable value objects identified by a validated name or code; editing
//! one means building a replacement and substituting it into the parent's
//! collection through the [`Model`](crate::Model).

mod keyed;
pub use keyed::{DuplicateKeyError, Keyed, UniqueList};

mod tag;
pub use tag::{InvalidTagError, Tag};

/// Video names and the video entity.
pub mod video;
pub use video::{Video, VideoName};

/// Lecture names and the lecture entity.
pub mod lecture;
pub use lecture::{Lecture, LectureName};

/// Module codes, titles, and the module entity.
pub mod module;
pub use module::{InvalidCodeError, Module, ModuleCode, ModuleName};

mod tracker;
pub use tracker::Tracker;

mod config;
pub use config::Config;

/// Error returned when a string is not a valid lecture or video name.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error(
    "Invalid name '{0}': names must start with a letter or digit and use only letters, digits, \
     spaces, and . _ -"
)]
pub struct InvalidNameError(String);

impl InvalidNameError {
    pub(crate) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

/// Names start with a letter or digit and stick to a small charset so they
/// survive command lines and archive files unquoted.
pub(crate) fn is_valid_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-'))
}
