use serde::Deserialize;
use std::path::PathBuf;

/// The slice of `package.json` the root locator cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: Option<serde_json::Map<String, serde_json::Value>>,
}

impl PackageManifest {
    /// A dependency mapped to JSON `null` counts as absent.
    pub fn depends_on(&self, library: &str) -> bool {
        self.dependencies
            .as_ref()
            .and_then(|deps| deps.get(library))
            .is_some_and(|version| !version.is_null())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
    Unchanged,
    Patched,
    WouldPatch,
}

/// Result of one patcher's edit, before it is written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub content: String,
    pub inserted: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PatchReport {
    pub step: String,
    pub file: PathBuf,
    pub status: PatchStatus,
    pub inserted: Vec<String>,
}

impl PatchReport {
    pub fn changed(&self) -> bool {
        self.status != PatchStatus::Unchanged
    }
}

#[derive(Debug, Clone)]
pub struct InstallReport {
    pub root: PathBuf,
    pub entry: PatchReport,
    pub activity: PatchReport,
}
