use crate::domain::model::PatchOutcome;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
    fn is_file(&self, path: &Path) -> bool;
    /// Immediate subdirectories of `path`, sorted by name.
    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

pub trait Patcher {
    /// Step name used when wrapping errors, e.g. `inject index.js`.
    fn name(&self) -> &str;
    fn locate(&self, storage: &dyn Storage, root: &Path) -> Result<PathBuf>;
    /// Returns `None` when the content needs no change.
    fn patch(&self, content: &str) -> Result<Option<PatchOutcome>>;
}
