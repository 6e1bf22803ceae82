use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_package_name, validate_relative_path,
    Validate,
};

/// Names and locations the installer patches against.
///
/// There is no configuration file; `Default` carries the values for
/// react-native-gesture-handler on a stock React Native Android project.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub library: String,
    pub manifest_file: String,
    pub entry_file: String,
    /// Relative to the project root; each vendor package sits one level below.
    pub java_root: String,
    pub activity_file: String,
    pub activity_class: String,
    pub base_activity_import: String,
    pub root_view_import: String,
    pub delegate_import: String,
    pub enabled_root_view_import: String,
    pub docs_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            library: "react-native-gesture-handler".to_string(),
            manifest_file: "package.json".to_string(),
            entry_file: "index.js".to_string(),
            java_root: "android/app/src/main/java/com".to_string(),
            activity_file: "MainActivity.java".to_string(),
            activity_class: "MainActivity".to_string(),
            base_activity_import: "com.facebook.react.ReactActivity".to_string(),
            root_view_import: "com.facebook.react.ReactRootView".to_string(),
            delegate_import: "com.facebook.react.ReactActivityDelegate".to_string(),
            enabled_root_view_import:
                "com.swmansion.gesturehandler.react.RNGestureHandlerEnabledRootView".to_string(),
            docs_url: "https://docs.swmansion.com/react-native-gesture-handler/docs/#android"
                .to_string(),
        }
    }
}

impl TargetConfig {
    /// Simple class name of a fully qualified import.
    pub fn simple_name(qualified: &str) -> &str {
        qualified.rsplit('.').next().unwrap_or(qualified).trim()
    }
}

impl Validate for TargetConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("library", &self.library)?;
        validate_file_name("manifest_file", &self.manifest_file)?;
        validate_file_name("entry_file", &self.entry_file)?;
        validate_relative_path("java_root", &self.java_root)?;
        validate_file_name("activity_file", &self.activity_file)?;
        validate_non_empty_string("activity_class", &self.activity_class)?;
        validate_package_name("base_activity_import", &self.base_activity_import)?;
        validate_package_name("root_view_import", &self.root_view_import)?;
        validate_package_name("delegate_import", &self.delegate_import)?;
        validate_package_name("enabled_root_view_import", &self.enabled_root_view_import)?;
        Ok(())
    }
}
