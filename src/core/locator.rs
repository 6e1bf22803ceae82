use crate::config::TargetConfig;
use crate::domain::model::PackageManifest;
use crate::domain::ports::Storage;
use crate::utils::error::{InstallError, Result};
use std::path::{Component, Path, PathBuf};

/// Lexically resolves `.` and `..` so that `parent()` only ever climbs.
/// `..` at the filesystem root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

fn load_manifest(storage: &dyn Storage, path: &Path) -> Result<PackageManifest> {
    let content = storage.read_to_string(path)?;
    let manifest = serde_json::from_str(&content)?;
    Ok(manifest)
}

/// Walks from `start` up to the filesystem root and returns the first
/// directory whose manifest lists `config.library` under `dependencies`.
///
/// A relative `start` is resolved against the current directory first.
/// Unreadable or malformed manifests are skipped like missing ones.
pub fn find_project_root(
    storage: &dyn Storage,
    config: &TargetConfig,
    start: &Path,
) -> Result<PathBuf> {
    let start = if start.is_absolute() {
        normalize_path(start)
    } else {
        normalize_path(&std::env::current_dir()?.join(start))
    };
    let mut candidate = start.as_path();

    loop {
        let manifest_path = candidate.join(&config.manifest_file);
        match load_manifest(storage, &manifest_path) {
            Ok(manifest) if manifest.depends_on(&config.library) => {
                tracing::debug!("{} lists {}", manifest_path.display(), config.library);
                return Ok(candidate.to_path_buf());
            }
            Ok(_) => {
                tracing::debug!(
                    "{} does not list {}",
                    manifest_path.display(),
                    config.library
                );
            }
            Err(e) => {
                tracing::debug!("Skipping {}: {}", manifest_path.display(), e);
            }
        }

        match candidate.parent() {
            Some(parent) => candidate = parent,
            None => {
                return Err(InstallError::RootNotFound {
                    library: config.library.clone(),
                    start: start.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{"name": "app", "dependencies": {"react-native-gesture-handler": "^1.0"}}"#;

    #[test]
    fn test_start_directory_itself_matches() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("package.json"), MANIFEST).unwrap();

        let root = find_project_root(&LocalStorage::new(), &TargetConfig::default(), temp_dir.path())
            .unwrap();

        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_grandparent_is_found() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("node_modules").join("react-native-gesture-handler");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("package.json"), MANIFEST).unwrap();
        // The library's own manifest has no dependency on itself.
        fs::write(nested.join("package.json"), r#"{"name": "react-native-gesture-handler"}"#)
            .unwrap();

        let root =
            find_project_root(&LocalStorage::new(), &TargetConfig::default(), &nested).unwrap();

        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_malformed_manifest_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();
        fs::write(child.join("package.json"), "{ not json").unwrap();
        fs::write(temp_dir.path().join("package.json"), MANIFEST).unwrap();

        let root =
            find_project_root(&LocalStorage::new(), &TargetConfig::default(), &child).unwrap();

        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_parent_dir_in_start_is_not_walked_into() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();
        let config = TargetConfig {
            library: "a-library-only-child-lists-91be".to_string(),
            ..Default::default()
        };
        fs::write(
            child.join("package.json"),
            r#"{"dependencies": {"a-library-only-child-lists-91be": "^1.0"}}"#,
        )
        .unwrap();

        let err = find_project_root(&LocalStorage::new(), &config, &child.join(".."))
            .unwrap_err();

        match err {
            InstallError::RootNotFound { start, .. } => assert_eq!(start, temp_dir.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dotted_start_resolves_to_sibling_project() {
        let temp_dir = TempDir::new().unwrap();
        let tools = temp_dir.path().join("tools");
        let app = temp_dir.path().join("app");
        fs::create_dir(&tools).unwrap();
        fs::create_dir(&app).unwrap();
        fs::write(app.join("package.json"), MANIFEST).unwrap();

        let start = tools.join(".").join("..").join("app");
        let root = find_project_root(&LocalStorage::new(), &TargetConfig::default(), &start)
            .unwrap();

        assert_eq!(root, app);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("/a/b/../c/./d")), PathBuf::from("/a/c/d"));
        assert_eq!(normalize_path(Path::new("/a/b/..")), PathBuf::from("/a"));
        assert_eq!(normalize_path(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize_path(Path::new("../../x/..")), PathBuf::from("../.."));
    }

    #[test]
    fn test_null_dependency_counts_as_absent() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{"dependencies": {"react-native-gesture-handler": null, "react": "18.0.0"}}"#,
        )
        .unwrap();

        assert!(!manifest.depends_on("react-native-gesture-handler"));
        assert!(manifest.depends_on("react"));
    }

    #[test]
    fn test_dev_dependency_is_not_enough() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{"devDependencies": {"react-native-gesture-handler": "^1.0"}}"#,
        )
        .unwrap();

        assert!(!manifest.depends_on("react-native-gesture-handler"));
    }

    #[test]
    fn test_missing_everywhere_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = TargetConfig {
            library: "a-library-nobody-installs-7f3c".to_string(),
            ..Default::default()
        };

        let err = find_project_root(&LocalStorage::new(), &config, temp_dir.path()).unwrap_err();

        assert!(matches!(err, InstallError::RootNotFound { .. }));
        assert!(err
            .to_string()
            .contains("yarn add a-library-nobody-installs-7f3c"));
    }
}
