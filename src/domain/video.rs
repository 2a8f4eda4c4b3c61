//! Videos, the leaves of the hierarchy.

use std::{collections::BTreeSet, fmt, str::FromStr};

use non_empty_string::NonEmptyString;

use super::{InvalidNameError, Keyed, Tag, is_valid_name};

/// The name of a video, unique within its owning lecture.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VideoName(NonEmptyString);

impl VideoName {
    /// Creates a new `VideoName` from a string.
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

impl TryFrom<&str> for VideoName {
    type Error = InvalidNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl AsRef<str> for VideoName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VideoName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VideoName {
    type Err = InvalidNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// A video belonging to a lecture.
///
/// Videos are immutable value objects: editing one means building a
/// replacement with [`Video::with_tags`] or [`Video::with_watched`] and
/// substituting it through the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    name: VideoName,
    watched: bool,
    tags: BTreeSet<Tag>,
}

impl Video {
    /// Creates a video snapshot.
    #[must_use]
    pub const fn new(name: VideoName, watched: bool, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            watched,
            tags,
        }
    }

    /// The video's name.
    #[must_use]
    pub const fn name(&self) -> &VideoName {
        &self.name
    }

    /// Whether the video has been watched.
    #[must_use]
    pub const fn watched(&self) -> bool {
        self.watched
    }

    /// The tags on the video.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns a copy of this video carrying the given tag set.
    #[must_use]
    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            name: self.name.clone(),
            watched: self.watched,
            tags,
        }
    }

    /// Returns a copy of this video carrying the given watched flag.
    #[must_use]
    pub fn with_watched(&self, watched: bool) -> Self {
        Self {
            name: self.name.clone(),
            watched,
            tags: self.tags.clone(),
        }
    }
}

impl Keyed for Video {
    type Key = VideoName;

    fn key(&self) -> &VideoName {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn tag(label: &str) -> Tag {
        Tag::try_from(label).unwrap()
    }

    #[test_case("Video_1"; "underscored")]
    #[test_case("Intro to sorting"; "with spaces")]
    #[test_case("3.2 Heaps"; "leading digit")]
    #[test_case("recap-week-1"; "dashed")]
    fn valid_names(name: &str) {
        assert_eq!(VideoName::try_from(name).unwrap().as_str(), name);
    }

    #[test_case(""; "empty")]
    #[test_case(" leading space"; "leading space")]
    #[test_case("_underscore first"; "leading underscore")]
    #[test_case("semi;colon"; "punctuation")]
    fn invalid_names(name: &str) {
        assert!(VideoName::try_from(name).is_err());
    }

    #[test]
    fn with_tags_preserves_name_and_flag() {
        let video = Video::new(
            VideoName::try_from("Video_1").unwrap(),
            true,
            BTreeSet::new(),
        );

        let tagged = video.with_tags([tag("fun")].into());

        assert_eq!(tagged.name(), video.name());
        assert!(tagged.watched());
        assert_eq!(tagged.tags().len(), 1);
    }

    #[test]
    fn with_watched_preserves_name_and_tags() {
        let video = Video::new(
            VideoName::try_from("Video_1").unwrap(),
            false,
            [tag("fun")].into(),
        );

        let watched = video.with_watched(true);

        assert_eq!(watched.name(), video.name());
        assert!(watched.watched());
        assert_eq!(watched.tags(), video.tags());
    }
}
