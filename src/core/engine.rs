use crate::config::TargetConfig;
use crate::core::{find_project_root, ActivityPatcher, EntryPatcher};
use crate::domain::model::{InstallReport, PatchReport, PatchStatus};
use crate::domain::ports::{Patcher, Storage};
use crate::utils::error::{InstallError, Result};
use crate::utils::validation::Validate;
use std::path::Path;

pub struct InstallEngine<S: Storage> {
    storage: S,
    config: TargetConfig,
    dry_run: bool,
}

impl<S: Storage> InstallEngine<S> {
    pub fn new(storage: S, config: TargetConfig) -> Self {
        Self {
            storage,
            config,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Locate root, patch the entry file, then patch the activity file.
    pub fn run(&self, start: &Path) -> Result<InstallReport> {
        self.config.validate()?;

        tracing::info!("Looking for project root from '{}'", start.display());
        let root = find_project_root(&self.storage, &self.config, start)?;
        tracing::info!("Found project root at '{}'", root.display());

        let entry = self.apply(&EntryPatcher::new(&self.config), &root)?;
        let activity = self.apply(&ActivityPatcher::new(&self.config), &root)?;

        Ok(InstallReport {
            root,
            entry,
            activity,
        })
    }

    fn apply(&self, patcher: &dyn Patcher, root: &Path) -> Result<PatchReport> {
        let path = patcher.locate(&self.storage, root)?;
        tracing::info!("Found {} at '{}'", file_label(&path), path.display());

        let step = |e| InstallError::in_step(patcher.name(), e);
        let content = self.storage.read_to_string(&path).map_err(step)?;
        let outcome = patcher.patch(&content).map_err(step)?;

        let (status, inserted) = match outcome {
            None => (PatchStatus::Unchanged, Vec::new()),
            Some(outcome) if self.dry_run => {
                tracing::info!("Dry run, not writing {}", path.display());
                (PatchStatus::WouldPatch, outcome.inserted)
            }
            Some(outcome) => {
                tracing::info!("Write changes");
                self.storage.write(&path, &outcome.content).map_err(step)?;
                (PatchStatus::Patched, outcome.inserted)
            }
        };
        tracing::info!("Done");

        Ok(PatchReport {
            step: patcher.name().to_string(),
            file: path,
            status,
            inserted,
        })
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
