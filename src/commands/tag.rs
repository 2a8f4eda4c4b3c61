//! The tagging command family.

use std::collections::BTreeSet;

use super::{CommandResult, Error, Target, ensure_exists};
use crate::{Model, domain::Tag};

/// Merges tags into a module, lecture, or video.
///
/// The requested tags are united with the entity's current tags. Tags that
/// are already present are absorbed by set semantics, so repeating a tag
/// command is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCommand {
    target: Target,
    tags: BTreeSet<Tag>,
}

impl TagCommand {
    /// Creates a command tagging the given target.
    #[must_use]
    pub const fn new(target: Target, tags: BTreeSet<Tag>) -> Self {
        Self { target, tags }
    }

    /// Applies the tags through the model.
    ///
    /// # Errors
    ///
    /// Fails without mutating anything if the tag set is empty or any level
    /// of the target path does not exist; ancestors are checked first.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, Error> {
        if self.tags.is_empty() {
            return Err(Error::EmptyTags);
        }
        ensure_exists(model, &self.target)?;

        apply_tags(model, &self.target, |current| {
            self.tags.union(current).cloned().collect()
        })?;

        Ok(CommandResult::new(format!(
            "{} tagged",
            self.target.display_name()
        )))
    }
}

/// Removes tags from a module, lecture, or video.
///
/// Requested tags that are not on the entity are ignored, so removal is
/// idempotent like the merge performed by [`TagCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntagCommand {
    target: Target,
    tags: BTreeSet<Tag>,
}

impl UntagCommand {
    /// Creates a command untagging the given target.
    #[must_use]
    pub const fn new(target: Target, tags: BTreeSet<Tag>) -> Self {
        Self { target, tags }
    }

    /// Removes the tags through the model.
    ///
    /// # Errors
    ///
    /// Fails without mutating anything if the tag set is empty or any level
    /// of the target path does not exist; ancestors are checked first.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, Error> {
        if self.tags.is_empty() {
            return Err(Error::EmptyTags);
        }
        ensure_exists(model, &self.target)?;

        apply_tags(model, &self.target, |current| {
            current.difference(&self.tags).cloned().collect()
        })?;

        Ok(CommandResult::new(format!(
            "{} untagged",
            self.target.display_name()
        )))
    }
}

/// Replaces the target's tag set with `edit(current)`, leaving every other
/// attribute untouched. Exactly one model replacement is performed.
fn apply_tags(
    model: &mut Model,
    target: &Target,
    edit: impl Fn(&BTreeSet<Tag>) -> BTreeSet<Tag>,
) -> Result<(), Error> {
    match target {
        Target::Module(code) => {
            let module = model.module(code).expect("target was checked");
            let tagged = module.with_tags(edit(module.tags()));
            model.set_module(code, tagged)?;
        }
        Target::Lecture(code, name) => {
            let lecture = model.lecture(code, name).expect("target was checked");
            let tagged = lecture.with_tags(edit(lecture.tags()));
            model.set_lecture(code, name, tagged)?;
        }
        Target::Video(code, lecture, name) => {
            let video = model
                .video(code, lecture, name)
                .expect("target was checked");
            let tagged = video.with_tags(edit(video.tags()));
            model.set_video(code, lecture, name, tagged)?;
        }
    }
    Ok(())
}
