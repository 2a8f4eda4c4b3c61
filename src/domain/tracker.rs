use super::{DuplicateKeyError, Module, ModuleCode, UniqueList};

/// The root aggregate holding every tracked module.
///
/// The tracker is the only long-lived container in the crate. Commands read
/// it and replace nested entities through the [`Model`](crate::Model)
/// rather than mutating anything in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    modules: UniqueList<Module>,
}

impl Tracker {
    /// Creates an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modules: UniqueList::new(),
        }
    }

    /// The tracked modules, in insertion order.
    #[must_use]
    pub const fn modules(&self) -> &UniqueList<Module> {
        &self.modules
    }

    /// Retrieves a module by code.
    #[must_use]
    pub fn module(&self, code: &ModuleCode) -> Option<&Module> {
        self.modules.get(code)
    }

    /// Returns `true` if a module with the given code is tracked.
    #[must_use]
    pub fn has_module(&self, code: &ModuleCode) -> bool {
        self.modules.contains(code)
    }

    /// Adds a module to the tracker.
    ///
    /// # Panics
    ///
    /// Panics if a module with the same code is already tracked.
    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    pub(crate) fn set_module(
        &mut self,
        old: &ModuleCode,
        new: Module,
    ) -> Result<(), DuplicateKeyError> {
        self.modules.replace(old, new)
    }
}

impl From<UniqueList<Module>> for Tracker {
    fn from(modules: UniqueList<Module>) -> Self {
        Self { modules }
    }
}
