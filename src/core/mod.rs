pub mod activity;
pub mod engine;
pub mod entry;
pub mod locator;

pub use crate::domain::model::{InstallReport, PatchOutcome, PatchReport, PatchStatus};
pub use crate::domain::ports::{Patcher, Storage};
pub use crate::utils::error::Result;
pub use activity::{java_import_offset, ActivityPatcher};
pub use engine::InstallEngine;
pub use entry::EntryPatcher;
pub use locator::find_project_root;
