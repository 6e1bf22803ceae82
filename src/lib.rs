pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalStorage;
pub use config::{CliConfig, TargetConfig};
pub use self::core::{InstallEngine, InstallReport, PatchReport, PatchStatus};
pub use utils::error::{InstallError, Result};
