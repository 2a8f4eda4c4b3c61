use std::path::PathBuf;

use super::{CommandResult, Error};
use crate::{Model, storage};

/// Writes the tracker to a JSON archive on disk.
///
/// The archive uses the same format as the working data file, so an export
/// can be opened directly with `--data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCommand {
    path: PathBuf,
    overwrite: bool,
}

impl ExportCommand {
    /// Creates a command exporting to the given path.
    #[must_use]
    pub const fn new(path: PathBuf, overwrite: bool) -> Self {
        Self { path, overwrite }
    }

    /// Writes the archive.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ArchiveExists`] if the destination exists and
    /// overwriting was not requested, and with [`Error::Archive`] if the
    /// file cannot be written. The destination is untouched on failure.
    pub fn execute(&self, model: &Model) -> Result<CommandResult, Error> {
        if !self.overwrite && self.path.exists() {
            return Err(Error::ArchiveExists(self.path.clone()));
        }

        storage::save(model.tracker(), &self.path)?;

        Ok(CommandResult::exported(
            format!("Tracker archived to {}", self.path.display()),
            self.path.clone(),
        ))
    }
}
