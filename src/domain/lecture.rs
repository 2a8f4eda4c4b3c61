//! Lectures, the middle level of the hierarchy.

use std::{collections::BTreeSet, fmt, str::FromStr};

use non_empty_string::NonEmptyString;

use super::{
    DuplicateKeyError, InvalidNameError, Keyed, Tag, UniqueList, Video, VideoName, is_valid_name,
};

/// The name of a lecture, unique within its owning module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LectureName(NonEmptyString);

impl LectureName {
    /// Creates a new `LectureName` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNameError` if the string is empty, does not start
    /// with a letter or digit, or contains characters outside letters,
    /// digits, spaces, and `.`, `_`, `-`.
    pub fn new(s: String) -> Result<Self, InvalidNameError> {
        let non_empty =
            NonEmptyString::new(s.clone()).map_err(|_| InvalidNameError::new(s.clone()))?;

        if !is_valid_name(&s) {
            return Err(InvalidNameError::new(s));
        }

        Ok(Self(non_empty))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<&str> for LectureName {
    type Error = InvalidNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl AsRef<str> for LectureName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LectureName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LectureName {
    type Err = InvalidNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// A lecture belonging to a module.
///
/// A lecture owns its videos. Video names are unique within the lecture and
/// the sequence keeps insertion order; replacing a video keeps its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lecture {
    name: LectureName,
    tags: BTreeSet<Tag>,
    videos: UniqueList<Video>,
}

impl Lecture {
    /// Creates a lecture snapshot.
    #[must_use]
    pub const fn new(name: LectureName, tags: BTreeSet<Tag>, videos: UniqueList<Video>) -> Self {
        Self { name, tags, videos }
    }

    /// The lecture's name.
    #[must_use]
    pub const fn name(&self) -> &LectureName {
        &self.name
    }

    /// The tags on the lecture.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// The videos in this lecture, in insertion order.
    #[must_use]
    pub const fn videos(&self) -> &UniqueList<Video> {
        &self.videos
    }

    /// Retrieves a video by name.
    #[must_use]
    pub fn video(&self, name: &VideoName) -> Option<&Video> {
        self.videos.get(name)
    }

    /// Returns `true` if a video with the given name is present.
    #[must_use]
    pub fn has_video(&self, name: &VideoName) -> bool {
        self.videos.contains(name)
    }

    /// Returns a copy of this lecture carrying the given tag set.
    #[must_use]
    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            name: self.name.clone(),
            tags,
            videos: self.videos.clone(),
        }
    }

    /// Returns a copy of this lecture with one video replaced, keeping the
    /// video's position.
    ///
    /// # Errors
    ///
    /// Returns an error if the replacement's name collides with a different
    /// video in this lecture.
    ///
    /// # Panics
    ///
    /// Panics if no video named `old` is present.
    pub fn with_video(&self, old: &VideoName, new: Video) -> Result<Self, DuplicateKeyError> {
        let mut videos = self.videos.clone();
        videos.replace(old, new)?;
        Ok(Self {
            name: self.name.clone(),
            tags: self.tags.clone(),
            videos,
        })
    }
}

impl Keyed for Lecture {
    type Key = LectureName;

    fn key(&self) -> &LectureName {
        &self.name
    }
}
