use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Could not detect root project path. Maybe you forgot to install? \"yarn add {library}\"")]
    RootNotFound { library: String, start: PathBuf },

    #[error("{name} not found in '{}'{}", .dir.display(), guidance_suffix(.guidance))]
    FileNotFound {
        name: String,
        dir: PathBuf,
        guidance: Option<String>,
    },

    #[error("Could not detect {anchor}")]
    PatternNotMatched { anchor: String },

    #[error("Invalid {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{step} failed: {source}")]
    Step {
        step: String,
        #[source]
        source: Box<InstallError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern compile error: {0}")]
    RegexError(#[from] regex::Error),
}

fn guidance_suffix(guidance: &Option<String>) -> String {
    guidance
        .as_deref()
        .map(|text| format!(". {}", text))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Discovery,
    Filesystem,
    Pattern,
    Input,
    Internal,
}

impl InstallError {
    /// Wraps an error with the name of the step that produced it.
    pub fn in_step(step: impl Into<String>, source: InstallError) -> Self {
        InstallError::Step {
            step: step.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping any step wrappers.
    pub fn root_cause(&self) -> &InstallError {
        match self {
            InstallError::Step { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            InstallError::Step { source, .. } => source.category(),
            InstallError::RootNotFound { .. } => ErrorCategory::Discovery,
            InstallError::FileNotFound { .. } | InstallError::IoError(_) => {
                ErrorCategory::Filesystem
            }
            InstallError::PatternNotMatched { .. } => ErrorCategory::Pattern,
            InstallError::InvalidInput { .. } => ErrorCategory::Input,
            InstallError::SerializationError(_) | InstallError::RegexError(_) => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.root_cause() {
            InstallError::RootNotFound { library, .. } => format!(
                "Run the tool from inside a project whose package.json lists \"{}\" in dependencies",
                library
            ),
            InstallError::FileNotFound { .. } => {
                "Check that the file exists at the expected location".to_string()
            }
            InstallError::PatternNotMatched { .. } => {
                "The file does not have the expected shape; apply the changes by hand".to_string()
            }
            InstallError::InvalidInput { .. } => {
                "Fix the reported value and run again".to_string()
            }
            InstallError::IoError(_) => "Check file permissions and try again".to_string(),
            _ => "Re-run with --verbose and report the output".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Discovery => format!("Project not found: {}", self),
            ErrorCategory::Filesystem => format!("Missing file: {}", self),
            ErrorCategory::Pattern => format!("Unexpected file contents: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Internal => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;
