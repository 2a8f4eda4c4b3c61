use super::{CommandResult, Error};
use crate::{
    Model,
    domain::{LectureName, ModuleCode},
};

/// The granularity of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScope {
    /// Every tracked module.
    Modules,
    /// The lectures of one module.
    Lectures(ModuleCode),
    /// The videos of one lecture.
    Videos(ModuleCode, LectureName),
}

/// Enumerates the tracker at a requested granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommand {
    scope: ListScope,
}

impl ListCommand {
    /// Creates a listing command.
    #[must_use]
    pub const fn new(scope: ListScope) -> Self {
        Self { scope }
    }

    /// Produces the listing.
    ///
    /// Read-only. The enumeration follows the owning sequence's insertion
    /// order, which replacement operations never disturb.
    ///
    /// # Errors
    ///
    /// Fails if an ancestor in the requested path does not exist; the
    /// module is checked before the lecture.
    pub fn execute(&self, model: &Model) -> Result<CommandResult, Error> {
        match &self.scope {
            ListScope::Modules => {
                let lines: Vec<String> = model
                    .tracker()
                    .modules()
                    .iter()
                    .map(|module| {
                        if module.name().is_empty() {
                            module.code().to_string()
                        } else {
                            format!("{}  {}", module.code(), module.name())
                        }
                    })
                    .collect();
                Ok(CommandResult::new(render("Modules tracked:", &lines)))
            }
            ListScope::Lectures(code) => {
                let module = model
                    .module(code)
                    .ok_or_else(|| Error::ModuleNotFound(code.clone()))?;
                let lines: Vec<String> = module
                    .lectures()
                    .iter()
                    .map(|lecture| lecture.name().to_string())
                    .collect();
                Ok(CommandResult::new(render(
                    &format!("Lectures of {code}:"),
                    &lines,
                )))
            }
            ListScope::Videos(code, lecture) => {
                if !model.has_module(code) {
                    return Err(Error::ModuleNotFound(code.clone()));
                }
                let owner = model
                    .lecture(code, lecture)
                    .ok_or_else(|| Error::LectureNotFound(lecture.clone(), code.clone()))?;
                let lines: Vec<String> = owner
                    .videos()
                    .iter()
                    .map(|video| {
                        let marker = if video.watched() { "[x]" } else { "[ ]" };
                        format!("{marker} {}", video.name())
                    })
                    .collect();
                Ok(CommandResult::new(render(
                    &format!("Videos of {lecture} in {code}:"),
                    &lines,
                )))
            }
        }
    }
}

fn render(header: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        format!("{header} (none)")
    } else {
        format!("{header}\n{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testutil::{code, lecture_name, tags, typical_model, video_name};
    use crate::commands::{MarkCommand, TagCommand, Target};

    #[test]
    fn lists_modules_with_their_titles() {
        let model = typical_model();

        let result = ListCommand::new(ListScope::Modules).execute(&model).unwrap();

        assert_eq!(
            result.message(),
            "Modules tracked:\n\
             CS2040S  Data Structures and Algorithms\n\
             ST2334  Probability and Statistics"
        );
    }

    #[test]
    fn module_order_is_stable_across_unrelated_edits() {
        let mut model = typical_model();
        let before = ListCommand::new(ListScope::Modules).execute(&model).unwrap();

        TagCommand::new(Target::Module(code("ST2334")), tags(&["stats"]))
            .execute(&mut model)
            .unwrap();
        MarkCommand::watched(
            code("CS2040S"),
            lecture_name("Lecture_1"),
            video_name("Video_1"),
        )
        .execute(&mut model)
        .unwrap();

        let after = ListCommand::new(ListScope::Modules).execute(&model).unwrap();
        assert_eq!(after.message(), before.message());
    }

    #[test]
    fn lists_lectures_of_a_module() {
        let model = typical_model();

        let result = ListCommand::new(ListScope::Lectures(code("CS2040S")))
            .execute(&model)
            .unwrap();

        assert_eq!(
            result.message(),
            "Lectures of CS2040S:\nLecture_1\nLecture_2"
        );
    }

    #[test]
    fn lists_videos_with_watch_markers() {
        let mut model = typical_model();
        MarkCommand::watched(
            code("CS2040S"),
            lecture_name("Lecture_1"),
            video_name("Video_1"),
        )
        .execute(&mut model)
        .unwrap();

        let result = ListCommand::new(ListScope::Videos(
            code("CS2040S"),
            lecture_name("Lecture_1"),
        ))
        .execute(&model)
        .unwrap();

        assert_eq!(
            result.message(),
            "Videos of Lecture_1 in CS2040S:\n[x] Video_1\n[ ] Video_2"
        );
    }

    #[test]
    fn missing_module_is_reported_for_either_scope() {
        let model = typical_model();

        let lectures = ListCommand::new(ListScope::Lectures(code("MA1521"))).execute(&model);
        let videos = ListCommand::new(ListScope::Videos(
            code("MA1521"),
            lecture_name("Lecture_1"),
        ))
        .execute(&model);

        assert!(matches!(lectures, Err(Error::ModuleNotFound(..))));
        assert!(matches!(videos, Err(Error::ModuleNotFound(..))));
    }

    #[test]
    fn missing_lecture_is_reported_with_both_keys() {
        let model = typical_model();

        let error = ListCommand::new(ListScope::Videos(
            code("CS2040S"),
            lecture_name("Lecture_9"),
        ))
        .execute(&model)
        .unwrap_err();

        match error {
            Error::LectureNotFound(lecture, module) => {
                assert_eq!(lecture, lecture_name("Lecture_9"));
                assert_eq!(module, code("CS2040S"));
            }
            other => panic!("expected LectureNotFound, got {other:?}"),
        }
    }

    #[test]
    fn empty_collections_render_a_placeholder() {
        let model = Model::default();

        let result = ListCommand::new(ListScope::Modules).execute(&model).unwrap();

        assert_eq!(result.message(), "Modules tracked: (none)");
    }
}
