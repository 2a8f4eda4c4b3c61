//! JSON archive storage for trackers.
//!
//! The on-disk format is a plain serde mirror of the hierarchy. Records are
//! converted into domain types on load, so an archive is revalidated as it
//! is read rather than trusted: invalid codes, names, tags, and duplicate
//! keys are all rejected with a typed error.

use std::{collections::BTreeSet, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::domain::{
    DuplicateKeyError, InvalidCodeError, InvalidNameError, InvalidTagError, Lecture, Module,
    ModuleName, Tag, Tracker, UniqueList, Video, VideoName,
};

/// Error returned when an archive cannot be written.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The archive file could not be written.
    #[error("Failed to write archive: {0}")]
    Io(#[from] io::Error),

    /// The tracker could not be serialized.
    #[error("Failed to serialize tracker: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when an archive cannot be read back into a tracker.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The archive file could not be read.
    #[error("Failed to read archive: {0}")]
    Io(#[from] io::Error),

    /// The archive is not valid JSON.
    #[error("Failed to parse archive: {0}")]
    Json(#[from] serde_json::Error),

    /// A record carries an invalid module code.
    #[error(transparent)]
    Code(#[from] InvalidCodeError),

    /// A record carries an invalid lecture or video name.
    #[error(transparent)]
    Name(#[from] InvalidNameError),

    /// A record carries an invalid tag label.
    #[error(transparent)]
    Tag(#[from] InvalidTagError),

    /// Two records at the same level share a key.
    #[error(transparent)]
    Duplicate(#[from] DuplicateKeyError),
}

/// Writes the tracker to a JSON archive at the given path.
///
/// # Errors
///
/// Returns an error if the tracker cannot be serialized or the file cannot
/// be written.
pub fn save(tracker: &Tracker, path: &Path) -> Result<(), SaveError> {
    let record = TrackerRecord::from(tracker);
    let content = serde_json::to_string_pretty(&record)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Reads a tracker from a JSON archive at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// records that violate the hierarchy's validation or uniqueness rules.
pub fn load(path: &Path) -> Result<Tracker, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let record: TrackerRecord = serde_json::from_str(&content)?;
    record.try_into()
}

#[derive(Debug, Serialize, Deserialize)]
struct TrackerRecord {
    modules: Vec<ModuleRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ModuleRecord {
    code: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    lectures: Vec<LectureRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LectureRecord {
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    videos: Vec<VideoRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct VideoRecord {
    name: String,
    #[serde(default)]
    watched: bool,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<&Tracker> for TrackerRecord {
    fn from(tracker: &Tracker) -> Self {
        Self {
            modules: tracker.modules().iter().map(ModuleRecord::from).collect(),
        }
    }
}

impl From<&Module> for ModuleRecord {
    fn from(module: &Module) -> Self {
        Self {
            code: module.code().to_string(),
            name: module.name().to_string(),
            tags: tag_records(module.tags()),
            lectures: module.lectures().iter().map(LectureRecord::from).collect(),
        }
    }
}

impl From<&Lecture> for LectureRecord {
    fn from(lecture: &Lecture) -> Self {
        Self {
            name: lecture.name().to_string(),
            tags: tag_records(lecture.tags()),
            videos: lecture.videos().iter().map(VideoRecord::from).collect(),
        }
    }
}

impl From<&Video> for VideoRecord {
    fn from(video: &Video) -> Self {
        Self {
            name: video.name().to_string(),
            watched: video.watched(),
            tags: tag_records(video.tags()),
        }
    }
}

fn tag_records(tags: &BTreeSet<Tag>) -> Vec<String> {
    tags.iter().map(|tag| tag.as_str().to_string()).collect()
}

impl TryFrom<TrackerRecord> for Tracker {
    type Error = LoadError;

    fn try_from(record: TrackerRecord) -> Result<Self, Self::Error> {
        let modules = record
            .modules
            .into_iter()
            .map(Module::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from(UniqueList::try_from(modules)?))
    }
}

impl TryFrom<ModuleRecord> for Module {
    type Error = LoadError;

    fn try_from(record: ModuleRecord) -> Result<Self, Self::Error> {
        let code = record.code.parse()?;
        let lectures = record
            .lectures
            .into_iter()
            .map(Lecture::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(
            code,
            ModuleName::from(record.name),
            parse_tags(record.tags)?,
            UniqueList::try_from(lectures)?,
        ))
    }
}

impl TryFrom<LectureRecord> for Lecture {
    type Error = LoadError;

    fn try_from(record: LectureRecord) -> Result<Self, Self::Error> {
        let name = record.name.parse()?;
        let videos = record
            .videos
            .into_iter()
            .map(Video::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(
            name,
            parse_tags(record.tags)?,
            UniqueList::try_from(videos)?,
        ))
    }
}

impl TryFrom<VideoRecord> for Video {
    type Error = LoadError;

    fn try_from(record: VideoRecord) -> Result<Self, Self::Error> {
        let name = VideoName::new(record.name)?;
        Ok(Self::new(name, record.watched, parse_tags(record.tags)?))
    }
}

fn parse_tags(labels: Vec<String>) -> Result<BTreeSet<Tag>, InvalidTagError> {
    labels.into_iter().map(Tag::new).collect()
}
