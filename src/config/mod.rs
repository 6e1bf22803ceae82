pub mod target;

pub use target::TargetConfig;

#[cfg(feature = "cli")]
use clap::Parser;
use crate::core::locator::normalize_path;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "gesture-autolink"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Wire react-native-gesture-handler into index.js and MainActivity.java")
)]
pub struct CliConfig {
    /// Directory to start searching for the project root (defaults to the current directory)
    #[cfg_attr(feature = "cli", arg(long))]
    pub project_dir: Option<PathBuf>,

    /// Report the changes without writing any file
    #[cfg_attr(feature = "cli", arg(long))]
    pub dry_run: bool,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves the start directory against the process working directory,
    /// with `.` and `..` folded away.
    pub fn start_dir(&self) -> std::io::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        let dir = match &self.project_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd,
        };
        Ok(normalize_path(&dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_dir_defaults_to_cwd() {
        let config = CliConfig::default();
        assert_eq!(config.start_dir().unwrap(), std::env::current_dir().unwrap());
    }

    #[test]
    fn test_relative_project_dir_is_joined() {
        let config = CliConfig {
            project_dir: Some(PathBuf::from("app")),
            ..Default::default()
        };
        assert_eq!(
            config.start_dir().unwrap(),
            std::env::current_dir().unwrap().join("app")
        );
    }

    #[test]
    fn test_parent_dir_project_dir_is_folded() {
        let config = CliConfig {
            project_dir: Some(PathBuf::from("app/../..")),
            ..Default::default()
        };
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(config.start_dir().unwrap(), cwd.parent().unwrap_or(cwd.as_path()));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_flags() {
        let config =
            CliConfig::try_parse_from(["gesture-autolink", "--dry-run", "-v", "--project-dir", "/proj"])
                .unwrap();
        assert!(config.dry_run);
        assert!(config.verbose);
        assert_eq!(config.project_dir, Some(PathBuf::from("/proj")));
    }
}
