use crate::config::TargetConfig;
use crate::domain::model::PatchOutcome;
use crate::domain::ports::{Patcher, Storage};
use crate::utils::error::{InstallError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Puts `import "<library>"` at the top of the JavaScript entry file.
pub struct EntryPatcher {
    library: String,
    entry_file: String,
    step: String,
}

impl EntryPatcher {
    pub fn new(config: &TargetConfig) -> Self {
        Self {
            library: config.library.clone(),
            entry_file: config.entry_file.clone(),
            step: format!("inject {}", config.entry_file),
        }
    }

    fn starts_with_library_import(&self, content: &str) -> Result<bool> {
        let library = regex::escape(&self.library);
        let re = Regex::new(&format!(
            r#"^\s*import\s+(?:"{library}"|'{library}')\s*;?"#
        ))?;
        Ok(re.is_match(content))
    }
}

/// First line holding nothing but `import "x"` or `import 'x'`.
fn find_bare_import(content: &str) -> Result<Option<&str>> {
    let re = Regex::new(r#"(?m)^\s*import\s+(?:"[^"\n]+"|'[^'\n]+')\s*;?\s*$"#)?;
    Ok(re.find(content).map(|m| m.as_str().trim()))
}

impl Patcher for EntryPatcher {
    fn name(&self) -> &str {
        &self.step
    }

    fn locate(&self, storage: &dyn Storage, root: &Path) -> Result<PathBuf> {
        let path = root.join(&self.entry_file);
        if !storage.is_file(&path) {
            return Err(InstallError::FileNotFound {
                name: self.entry_file.clone(),
                dir: root.to_path_buf(),
                guidance: None,
            });
        }
        Ok(path)
    }

    fn patch(&self, content: &str) -> Result<Option<PatchOutcome>> {
        if self.starts_with_library_import(content)? {
            tracing::debug!("{} already imports {}", self.entry_file, self.library);
            return Ok(None);
        }

        // Any standalone import is taken as a hand-made setup and left alone.
        if let Some(existing) = find_bare_import(content)? {
            tracing::info!("Patched! Ignore (found `{}`)", existing);
            return Ok(None);
        }

        tracing::info!("Injecting content...");
        let comment = format!("// auto import {}", self.library);
        let import = format!("import \"{}\"", self.library);
        let patched = [comment.as_str(), import.as_str(), content].join("\n");

        Ok(Some(PatchOutcome {
            content: patched,
            inserted: vec![comment, import],
        }))
    }
}
