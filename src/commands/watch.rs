use super::{CommandResult, Error, Target, ensure_exists};
use crate::{
    Model,
    domain::{LectureName, ModuleCode, VideoName},
};

/// Sets a video's watched flag.
///
/// Marking and unmarking are the same command with opposite flags.
/// Re-applying a flag the video already carries succeeds and changes
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkCommand {
    module: ModuleCode,
    lecture: LectureName,
    video: VideoName,
    watched: bool,
}

impl MarkCommand {
    /// Creates a command marking the video as watched.
    #[must_use]
    pub const fn watched(module: ModuleCode, lecture: LectureName, video: VideoName) -> Self {
        Self {
            module,
            lecture,
            video,
            watched: true,
        }
    }

    /// Creates a command marking the video as not watched.
    #[must_use]
    pub const fn unwatched(module: ModuleCode, lecture: LectureName, video: VideoName) -> Self {
        Self {
            module,
            lecture,
            video,
            watched: false,
        }
    }

    /// Flips the flag through the model.
    ///
    /// # Errors
    ///
    /// Fails without mutating anything if any level of the video's path does
    /// not exist; ancestors are checked first.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, Error> {
        let target = Target::Video(
            self.module.clone(),
            self.lecture.clone(),
            self.video.clone(),
        );
        ensure_exists(model, &target)?;

        let marked = model
            .video(&self.module, &self.lecture, &self.video)
            .expect("target was checked")
            .with_watched(self.watched);
        model.set_video(&self.module, &self.lecture, &self.video, marked)?;

        let state = if self.watched { "watched" } else { "unwatched" };
        Ok(CommandResult::new(format!(
            "{} marked as {state}",
            self.video
        )))
    }
}
