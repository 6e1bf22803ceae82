use crate::config::TargetConfig;
use crate::domain::model::PatchOutcome;
use crate::domain::ports::{Patcher, Storage};
use crate::utils::error::{InstallError, Result};
use crate::utils::validation::validate_package_name;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Byte offset of the first `import <package>;` line in `content`.
///
/// Whitespace is allowed after each dot of the package name. The offset may
/// point at a preceding blank line, since `^\s*` spans line breaks.
pub fn java_import_offset(content: &str, package: &str) -> Result<Option<usize>> {
    validate_package_name("package name", package)?;

    let segments: Vec<String> = Regex::new(r"\.\s*")?
        .split(package)
        .map(regex::escape)
        .collect();
    let re = Regex::new(&format!(
        r"(?m)^\s*import\s+{}\s*;",
        segments.join(r"\.\s*")
    ))?;

    Ok(re.find(content).map(|m| m.start()))
}

/// Wires the gesture-handler root view into the host `MainActivity`.
pub struct ActivityPatcher {
    java_root: String,
    activity_file: String,
    activity_class: String,
    base_activity_import: String,
    root_view_import: String,
    delegate_import: String,
    enabled_root_view_import: String,
    docs_url: String,
    step: String,
}

impl ActivityPatcher {
    pub fn new(config: &TargetConfig) -> Self {
        Self {
            java_root: config.java_root.clone(),
            activity_file: config.activity_file.clone(),
            activity_class: config.activity_class.clone(),
            base_activity_import: config.base_activity_import.clone(),
            root_view_import: config.root_view_import.clone(),
            delegate_import: config.delegate_import.clone(),
            enabled_root_view_import: config.enabled_root_view_import.clone(),
            docs_url: config.docs_url.clone(),
            step: format!("inject {}", config.activity_file),
        }
    }

    /// Inserts the missing imports as a block before the base activity import.
    fn inject_imports(&self, content: &str, inserted: &mut Vec<String>) -> Result<String> {
        if java_import_offset(content, &self.enabled_root_view_import)?.is_some() {
            tracing::debug!("{} already imported", self.enabled_root_view_import);
            return Ok(content.to_string());
        }

        let anchor = java_import_offset(content, &self.base_activity_import)?.ok_or_else(|| {
            InstallError::PatternNotMatched {
                anchor: self.base_activity_import.clone(),
            }
        })?;

        let mut packages = vec![self.enabled_root_view_import.as_str()];
        for supporting in [&self.root_view_import, &self.delegate_import] {
            if java_import_offset(content, supporting)?.is_none() {
                packages.insert(0, supporting.as_str());
            }
        }
        tracing::info!("Going to add packages: {}", packages.join(", "));

        let mut parts = vec![content[..anchor].to_string()];
        for package in packages {
            let line = format!("import {};", package);
            inserted.push(line.clone());
            parts.push(line);
        }
        parts.push(content[anchor..].to_string());

        Ok(parts.join("\n"))
    }

    fn override_block(&self) -> String {
        let delegate = TargetConfig::simple_name(&self.delegate_import);
        let root_view = TargetConfig::simple_name(&self.root_view_import);
        let enabled = TargetConfig::simple_name(&self.enabled_root_view_import);

        format!(
            "  // Auto import gesture
  @Override
  protected {delegate} create{delegate}() {{
    return new {delegate}(this, getMainComponentName()) {{
      @Override
      protected {root_view} createRootView() {{
       return new {enabled}({activity}.this);
      }}
    }};
  }}
",
            activity = self.activity_class,
        )
    }

    /// Adds the delegate override right after the activity class header.
    fn inject_override(&self, content: &str, inserted: &mut Vec<String>) -> Result<String> {
        let delegate = regex::escape(TargetConfig::simple_name(&self.delegate_import));
        let existing = Regex::new(&format!(r"\s+{delegate}\s+create{delegate}"))?;
        if existing.is_match(content) {
            tracing::debug!("create{} override already present", delegate);
            return Ok(content.to_string());
        }

        let header_tokens = [
            "class".to_string(),
            regex::escape(&self.activity_class),
            "extends".to_string(),
            regex::escape(TargetConfig::simple_name(&self.base_activity_import)),
            r"\{".to_string(),
        ];
        let header = Regex::new(&format!(r"{}\s*\n", header_tokens.join(r"\s+")))?;
        let end = header
            .find(content)
            .ok_or_else(|| InstallError::PatternNotMatched {
                anchor: format!("class {} declaration", self.activity_class),
            })?
            .end();

        tracing::info!("createRootView override");
        let block = self.override_block();
        let patched = [&content[..end], block.as_str(), &content[end..]].join("\n");
        inserted.push(block);

        Ok(patched)
    }
}

impl Patcher for ActivityPatcher {
    fn name(&self) -> &str {
        &self.step
    }

    /// Scans vendor packages under the Java root in name order; first hit wins.
    fn locate(&self, storage: &dyn Storage, root: &Path) -> Result<PathBuf> {
        let java_root = root.join(&self.java_root);
        let not_found = || InstallError::FileNotFound {
            name: self.activity_file.clone(),
            dir: java_root.clone(),
            guidance: Some(format!(
                "Please follow instruction here: {}",
                self.docs_url
            )),
        };

        let vendors = storage.list_dirs(&java_root).map_err(|e| {
            tracing::debug!("Cannot list {}: {}", java_root.display(), e);
            not_found()
        })?;

        vendors
            .into_iter()
            .map(|vendor| vendor.join(&self.activity_file))
            .find(|candidate| storage.is_file(candidate))
            .ok_or_else(not_found)
    }

    fn patch(&self, content: &str) -> Result<Option<PatchOutcome>> {
        let mut inserted = Vec::new();
        let with_imports = self.inject_imports(content, &mut inserted)?;
        let patched = self.inject_override(&with_imports, &mut inserted)?;

        if patched == content {
            return Ok(None);
        }
        Ok(Some(PatchOutcome {
            content: patched,
            inserted,
        }))
    }
}
