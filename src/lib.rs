//! Command-line study tracker.
//!
//! Modules contain lectures, and lectures contain videos. The hierarchy is
//! held in memory by a [`Tracker`] and edited through the [`Model`], which
//! replaces immutable entities rather than mutating them in place.

pub mod domain;
pub use domain::{
    Lecture, LectureName, Module, ModuleCode, ModuleName, Tag, Tracker, Video, VideoName,
};

/// The mutation and query facade over the tracker.
pub mod model;
pub use model::Model;

/// Command objects executed against the model.
pub mod commands;
pub use commands::CommandResult;

/// JSON archive storage for trackers.
pub mod storage;
