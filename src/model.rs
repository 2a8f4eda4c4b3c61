//! The mutation and query facade over the tracker.
//!
//! Every command reads and edits the hierarchy through the [`Model`].
//! Entities are immutable, so editing a nested entity means rebuilding each
//! ancestor up to the tracker. The model performs that cascade itself and
//! applies it as one final substitution, so callers never observe a
//! partially rebuilt hierarchy.

use crate::domain::{Lecture, LectureName, Module, ModuleCode, Tracker, Video, VideoName};

/// Error returned when a replacement would violate a uniqueness invariant.
///
/// Replacements that keep the entity's identity key cannot collide; only a
/// replacement that changes the key can.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The replacement module's code collides with another tracked module.
    #[error("Module {0} already exists")]
    DuplicateModule(ModuleCode),

    /// The replacement lecture's name collides with another lecture in the
    /// same module.
    #[error("Lecture {0} already exists in module {1}")]
    DuplicateLecture(LectureName, ModuleCode),

    /// The replacement video's name collides with another video in the same
    /// lecture.
    #[error("Video {0} already exists in lecture {1} of module {2}")]
    DuplicateVideo(VideoName, LectureName, ModuleCode),
}

/// The single source of truth for querying and mutating the tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    tracker: Tracker,
}

impl Model {
    /// Creates a model over the given tracker snapshot.
    #[must_use]
    pub const fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    /// The current snapshot of the whole hierarchy.
    ///
    /// Used by persistence collaborators; read-only.
    #[must_use]
    pub const fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Returns `true` if a module with the given code is tracked.
    #[must_use]
    pub fn has_module(&self, code: &ModuleCode) -> bool {
        self.tracker.has_module(code)
    }

    /// Retrieves a module by code.
    #[must_use]
    pub fn module(&self, code: &ModuleCode) -> Option<&Module> {
        self.tracker.module(code)
    }

    /// Returns `true` if the given module exists and contains the lecture.
    ///
    /// A missing ancestor yields `false`, never a panic.
    #[must_use]
    pub fn has_lecture(&self, code: &ModuleCode, lecture: &LectureName) -> bool {
        self.lecture(code, lecture).is_some()
    }

    /// Retrieves a lecture by its full path.
    #[must_use]
    pub fn lecture(&self, code: &ModuleCode, lecture: &LectureName) -> Option<&Lecture> {
        self.module(code)?.lecture(lecture)
    }

    /// Returns `true` if the full module, lecture, video path exists.
    #[must_use]
    pub fn has_video(&self, code: &ModuleCode, lecture: &LectureName, video: &VideoName) -> bool {
        self.video(code, lecture, video).is_some()
    }

    /// Retrieves a video by its full path.
    #[must_use]
    pub fn video(
        &self,
        code: &ModuleCode,
        lecture: &LectureName,
        video: &VideoName,
    ) -> Option<&Video> {
        self.lecture(code, lecture)?.video(video)
    }

    /// Replaces the module identified by `old`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateModule`] if the replacement changes the
    /// code to one that collides with a different tracked module.
    ///
    /// # Panics
    ///
    /// Panics if `old` is not tracked. Callers obtain the target from this
    /// model before building a replacement, so a missing target is a
    /// programming error.
    pub fn set_module(&mut self, old: &ModuleCode, new: Module) -> Result<(), Error> {
        assert!(self.has_module(old), "Module {old} is not tracked");

        let code = new.code().clone();
        self.tracker
            .set_module(old, new)
            .map_err(|_| Error::DuplicateModule(code))
    }

    /// Replaces a lecture within the given module, keeping its position.
    ///
    /// The owning module is rebuilt around the replacement and substituted
    /// through the module path in one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLecture`] if the replacement changes the
    /// name to one that collides with a different lecture in the module.
    ///
    /// # Panics
    ///
    /// Panics if the module is not tracked or no lecture named `old` is in
    /// it.
    pub fn set_lecture(
        &mut self,
        module: &ModuleCode,
        old: &LectureName,
        new: Lecture,
    ) -> Result<(), Error> {
        let owner = self
            .module(module)
            .unwrap_or_else(|| panic!("Module {module} is not tracked"));

        let name = new.name().clone();
        let rebuilt = owner
            .with_lecture(old, new)
            .map_err(|_| Error::DuplicateLecture(name, module.clone()))?;

        self.tracker
            .set_module(module, rebuilt)
            .expect("module code is unchanged");
        Ok(())
    }

    /// Replaces a video within the given lecture, keeping its position.
    ///
    /// Rebuilds the lecture, then the owning module, and swaps the module
    /// into the tracker. The whole chain is constructed before the single
    /// substitution, so a failure leaves the tracker untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVideo`] if the replacement changes the
    /// name to one that collides with a different video in the lecture.
    ///
    /// # Panics
    ///
    /// Panics if the module or lecture is missing, or no video named `old`
    /// is in the lecture.
    pub fn set_video(
        &mut self,
        module: &ModuleCode,
        lecture: &LectureName,
        old: &VideoName,
        new: Video,
    ) -> Result<(), Error> {
        let owner = self
            .lecture(module, lecture)
            .unwrap_or_else(|| panic!("Lecture {lecture} is not in module {module}"));

        let name = new.name().clone();
        let rebuilt_lecture = owner
            .with_video(old, new)
            .map_err(|_| Error::DuplicateVideo(name, lecture.clone(), module.clone()))?;

        let rebuilt_module = self
            .module(module)
            .expect("owning module was just traversed")
            .with_lecture(lecture, rebuilt_lecture)
            .expect("lecture name is unchanged");

        self.tracker
            .set_module(module, rebuilt_module)
            .expect("module code is unchanged");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::{ModuleName, Tag, UniqueList};

    fn code(s: &str) -> ModuleCode {
        s.parse().unwrap()
    }

    fn lecture_name(s: &str) -> LectureName {
        s.parse().unwrap()
    }

    fn video_name(s: &str) -> VideoName {
        s.parse().unwrap()
    }

    fn video(name: &str) -> Video {
        Video::new(video_name(name), false, BTreeSet::new())
    }

    fn lecture(name: &str, videos: Vec<Video>) -> Lecture {
        Lecture::new(
            lecture_name(name),
            BTreeSet::new(),
            UniqueList::try_from(videos).unwrap(),
        )
    }

    fn module(code_str: &str, lectures: Vec<Lecture>) -> Module {
        Module::new(
            code(code_str),
            ModuleName::default(),
            BTreeSet::new(),
            UniqueList::try_from(lectures).unwrap(),
        )
    }

    /// CS2040S with two lectures, followed by ST2334 with one.
    fn typical_model() -> Model {
        let mut tracker = Tracker::new();
        tracker.add_module(module(
            "CS2040S",
            vec![
                lecture("Lecture_1", vec![video("Video_1"), video("Video_2")]),
                lecture("Lecture_2", vec![video("Video_3")]),
            ],
        ));
        tracker.add_module(module(
            "ST2334",
            vec![lecture("Lecture_1", vec![video("Video_1")])],
        ));
        Model::new(tracker)
    }

    #[test]
    fn composite_lookups_tolerate_missing_ancestors() {
        let model = typical_model();

        assert!(!model.has_lecture(&code("MA1521"), &lecture_name("Lecture_1")));
        assert!(!model.has_video(
            &code("MA1521"),
            &lecture_name("Lecture_1"),
            &video_name("Video_1")
        ));
        assert!(!model.has_video(
            &code("CS2040S"),
            &lecture_name("Lecture_9"),
            &video_name("Video_1")
        ));
        assert!(model.has_video(
            &code("CS2040S"),
            &lecture_name("Lecture_1"),
            &video_name("Video_2")
        ));
    }

    #[test]
    fn set_module_replaces_in_place() {
        let mut model = typical_model();
        let target = code("CS2040S");

        let tagged = model
            .module(&target)
            .unwrap()
            .with_tags([Tag::try_from("fun").unwrap()].into());
        model.set_module(&target, tagged).unwrap();

        assert_eq!(model.tracker().modules().position(&target), Some(0));
        assert_eq!(model.module(&target).unwrap().tags().len(), 1);
        assert_eq!(model.tracker().modules().len(), 2);
    }

    #[test]
    fn set_module_rejects_code_collision() {
        let mut model = typical_model();
        let target = code("CS2040S");

        let renamed = Module::new(
            code("ST2334"),
            ModuleName::default(),
            BTreeSet::new(),
            UniqueList::new(),
        );

        assert_eq!(
            model.set_module(&target, renamed),
            Err(Error::DuplicateModule(code("ST2334")))
        );
        // Nothing changed.
        assert!(model.has_module(&target));
        assert_eq!(model.module(&target).unwrap().lectures().len(), 2);
    }

    #[test]
    #[should_panic(expected = "is not tracked")]
    fn set_module_missing_target_panics() {
        let mut model = typical_model();
        let _ = model.set_module(
            &code("MA1521"),
            module("MA1521", Vec::new()),
        );
    }

    #[test]
    fn set_lecture_rebuilds_the_owning_module() {
        let mut model = typical_model();
        let owner = code("CS2040S");
        let target = lecture_name("Lecture_2");

        let tagged = model
            .lecture(&owner, &target)
            .unwrap()
            .with_tags([Tag::try_from("hard").unwrap()].into());
        model.set_lecture(&owner, &target, tagged).unwrap();

        let module = model.module(&owner).unwrap();
        assert_eq!(module.lectures().position(&target), Some(1));
        assert_eq!(module.lecture(&target).unwrap().tags().len(), 1);
        // The sibling lecture and its videos are untouched.
        assert_eq!(
            module
                .lecture(&lecture_name("Lecture_1"))
                .unwrap()
                .videos()
                .len(),
            2
        );
    }

    #[test]
    fn set_video_cascades_to_the_tracker() {
        let mut model = typical_model();
        let owner = code("CS2040S");
        let in_lecture = lecture_name("Lecture_1");
        let target = video_name("Video_2");

        let watched = model
            .video(&owner, &in_lecture, &target)
            .unwrap()
            .with_watched(true);
        model
            .set_video(&owner, &in_lecture, &target, watched)
            .unwrap();

        let video = model.video(&owner, &in_lecture, &target).unwrap();
        assert!(video.watched());
        assert_eq!(
            model
                .lecture(&owner, &in_lecture)
                .unwrap()
                .videos()
                .position(&target),
            Some(1)
        );
        // The other module is untouched.
        assert!(
            !model
                .video(&code("ST2334"), &lecture_name("Lecture_1"), &video_name("Video_1"))
                .unwrap()
                .watched()
        );
    }

    #[test]
    fn set_video_rejects_name_collision() {
        let mut model = typical_model();
        let owner = code("CS2040S");
        let in_lecture = lecture_name("Lecture_1");
        let target = video_name("Video_1");

        let result = model.set_video(&owner, &in_lecture, &target, video("Video_2"));

        assert_eq!(
            result,
            Err(Error::DuplicateVideo(
                video_name("Video_2"),
                in_lecture.clone(),
                owner.clone()
            ))
        );
        // The original video survives the failed replacement.
        assert!(model.has_video(&owner, &in_lecture, &target));
    }

    #[test]
    #[should_panic(expected = "is not in module")]
    fn set_video_missing_lecture_panics() {
        let mut model = typical_model();
        let _ = model.set_video(
            &code("CS2040S"),
            &lecture_name("Lecture_9"),
            &video_name("Video_1"),
            video("Video_1"),
        );
    }

    #[test]
    fn uniqueness_holds_after_a_sequence_of_edits() {
        let mut model = typical_model();
        let owner = code("CS2040S");
        let in_lecture = lecture_name("Lecture_1");

        for name in ["Video_1", "Video_2"] {
            let target = video_name(name);
            let watched = model
                .video(&owner, &in_lecture, &target)
                .unwrap()
                .with_watched(true);
            model
                .set_video(&owner, &in_lecture, &target, watched)
                .unwrap();
        }

        let names: Vec<_> = model
            .lecture(&owner, &in_lecture)
            .unwrap()
            .videos()
            .iter()
            .map(|v| v.name().as_str().to_string())
            .collect();
        assert_eq!(names, ["Video_1", "Video_2"]);
    }
}
