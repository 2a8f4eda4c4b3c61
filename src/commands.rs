//! Command objects executed against the model.
//!
//! Commands arrive with fully validated, typed arguments; no raw text is
//! parsed here. Each mutating command fetches an immutable entity, builds a
//! replacement differing only in the target attribute, and applies exactly
//! one model replacement. Validation happens before any mutation, so a
//! failed command leaves the tracker untouched.

use std::path::{Path, PathBuf};

use crate::{
    Model,
    domain::{LectureName, ModuleCode, VideoName},
    model, storage,
};

mod tag;
pub use tag::{TagCommand, UntagCommand};

mod watch;
pub use watch::MarkCommand;

mod list;
pub use list::{ListCommand, ListScope};

mod export;
pub use export::ExportCommand;

/// Identifies the entity a command acts on.
///
/// Which identifying arguments were supplied decides the level: a module
/// code alone, a code plus a lecture name, or the full three-level path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A module, by code.
    Module(ModuleCode),
    /// A lecture within a module.
    Lecture(ModuleCode, LectureName),
    /// A video within a lecture of a module.
    Video(ModuleCode, LectureName, VideoName),
}

impl Target {
    /// The module code at the root of the target path.
    #[must_use]
    pub const fn code(&self) -> &ModuleCode {
        match self {
            Self::Module(code) | Self::Lecture(code, _) | Self::Video(code, _, _) => code,
        }
    }

    /// The name of the addressed entity, as shown in messages.
    fn display_name(&self) -> String {
        match self {
            Self::Module(code) => code.to_string(),
            Self::Lecture(_, lecture) => lecture.to_string(),
            Self::Video(_, _, video) => video.to_string(),
        }
    }
}

/// Error returned when a command cannot be executed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tag command received an empty tag set.
    #[error("Tags should not be empty")]
    EmptyTags,

    /// The addressed module is not tracked.
    #[error("Module {0} does not exist")]
    ModuleNotFound(ModuleCode),

    /// The addressed lecture is not in the module.
    #[error("Lecture {0} does not exist in module {1}")]
    LectureNotFound(LectureName, ModuleCode),

    /// The addressed video is not in the lecture.
    #[error("Video {0} does not exist in lecture {1} of module {2}")]
    VideoNotFound(VideoName, LectureName, ModuleCode),

    /// The export destination already exists and overwriting was not
    /// requested.
    #[error("File {0} already exists; pass --overwrite to replace it")]
    ArchiveExists(PathBuf),

    /// The archive could not be written.
    #[error(transparent)]
    Archive(#[from] storage::SaveError),

    /// A replacement violated a uniqueness invariant.
    #[error(transparent)]
    Replace(#[from] model::Error),
}

/// The outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    message: String,
    exported: Option<PathBuf>,
}

impl CommandResult {
    /// Creates a result carrying a user-facing message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exported: None,
        }
    }

    /// Creates a result that also reports the path an archive was written
    /// to.
    #[must_use]
    pub fn exported(message: impl Into<String>, path: PathBuf) -> Self {
        Self {
            message: message.into(),
            exported: Some(path),
        }
    }

    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The archive path, for commands that wrote one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.exported.as_deref()
    }
}

/// Checks the target's ancestor chain, deepest level last.
///
/// Validation is strictly prefix-ordered: a missing module is reported
/// before the lecture or video is looked at, whatever else is missing.
fn ensure_exists(model: &Model, target: &Target) -> Result<(), Error> {
    let code = target.code();
    if !model.has_module(code) {
        return Err(Error::ModuleNotFound(code.clone()));
    }

    let lecture = match target {
        Target::Module(_) => return Ok(()),
        Target::Lecture(_, lecture) | Target::Video(_, lecture, _) => lecture,
    };
    if !model.has_lecture(code, lecture) {
        return Err(Error::LectureNotFound(lecture.clone(), code.clone()));
    }

    if let Target::Video(_, _, video) = target {
        if !model.has_video(code, lecture, video) {
            return Err(Error::VideoNotFound(
                video.clone(),
                lecture.clone(),
                code.clone(),
            ));
        }
    }

    Ok(())
}
