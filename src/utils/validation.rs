use crate::utils::error::{InstallError, Result};
use regex::Regex;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts dotted Java package names such as `com.facebook.react.ReactActivity`.
/// Whitespace is tolerated after each dot, matching how imports may be written.
pub fn validate_package_name(field_name: &str, name: &str) -> Result<()> {
    let re = Regex::new(r"^[a-z]+(\.\s*[a-zA-Z0-9]+)*$")?;
    if !re.is_match(name) {
        return Err(InstallError::InvalidInput {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "expected a dotted Java package name".to_string(),
        });
    }
    Ok(())
}

/// Paths inside the project tree: non-empty, free of NUL bytes, never absolute.
pub fn validate_relative_path(field_name: &str, path: &str) -> Result<()> {
    let reason = if path.is_empty() {
        Some("Path cannot be empty")
    } else if path.contains('\0') {
        Some("Path contains null bytes")
    } else if Path::new(path).has_root() {
        Some("Path must be relative to the project root")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(InstallError::InvalidInput {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InstallError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// File names must be a single path component.
pub fn validate_file_name(field_name: &str, value: &str) -> Result<()> {
    validate_relative_path(field_name, value)?;
    if value.contains('/') || value.contains('\\') {
        return Err(InstallError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "File name cannot contain path separators".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_package_name() {
        assert!(validate_package_name("import", "com.facebook.react.ReactActivity").is_ok());
        assert!(validate_package_name("import", "com. facebook.react").is_ok());
        assert!(validate_package_name("import", "Com.facebook").is_err());
        assert!(validate_package_name("import", "com..facebook").is_err());
        assert!(validate_package_name("import", "com.facebook.*").is_err());
        assert!(validate_package_name("import", "").is_err());
    }

    #[test]
    fn test_validate_relative_path() {
        assert!(validate_relative_path("java_root", "android/app/src/main/java/com").is_ok());
        assert!(validate_relative_path("java_root", "").is_err());
        assert!(validate_relative_path("java_root", "bad\0path").is_err());
        assert!(validate_relative_path("java_root", "/android/app").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("entry_file", "index.js").is_ok());
        assert!(validate_file_name("entry_file", "src/index.js").is_err());
        assert!(validate_non_empty_string("library", "   ").is_err());
    }
}
