//! Scaffold configuration.
//!
//! Settings are read from an optional TOML file; every key has a default
//! matching the layout of the Fuzion test suite.
//!
//! ```toml
//! tests-dir = "tests"
//! create-parents = false
//! makefile-include = "../simple.mk"
//! ```

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings loaded from a scaffold config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Directory the `reg_issue<N>` directories are created in.
    #[serde(default = "default_tests_dir")]
    pub tests_dir: PathBuf,

    /// Create `tests_dir` and its parents if missing.
    #[serde(default)]
    pub create_parents: bool,

    /// Makefile included by every generated Makefile.
    #[serde(default = "default_makefile_include")]
    pub makefile_include: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            tests_dir: default_tests_dir(),
            create_parents: false,
            makefile_include: default_makefile_include(),
        }
    }
}

pub(crate) fn default_tests_dir() -> PathBuf {
    PathBuf::from("tests")
}

pub(crate) fn default_makefile_include() -> String {
    "../simple.mk".to_string()
}

impl ScaffoldConfig {
    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Applies command line overrides and validates the result.
    ///
    /// # Arguments
    ///
    /// * `tests_dir` - Replaces `tests-dir` when given
    /// * `create_parents` - Enables `create-parents` when set
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if an override is empty.
    pub fn with_overrides(
        mut self,
        tests_dir: Option<PathBuf>,
        create_parents: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(tests_dir) = tests_dir {
            self.tests_dir = tests_dir;
        }
        self.create_parents |= create_parents;

        self.validate(Path::new("command line"))?;
        Ok(self)
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for empty paths.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.tests_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "tests-dir is empty".to_string(),
            });
        }

        if self.makefile_include.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "makefile-include is empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scaffold.toml");
        fs::write(
            &path,
            r#"
tests-dir = "fuzion/tests"
create-parents = true
makefile-include = "../../simple.mk"
"#,
        )
        .unwrap();

        let config = ScaffoldConfig::load(&path).unwrap();

        assert_eq!(config.tests_dir, PathBuf::from("fuzion/tests"));
        assert!(config.create_parents);
        assert_eq!(config.makefile_include, "../../simple.mk");
    }

    #[test]
    fn load_empty_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scaffold.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(ScaffoldConfig::load(&path).unwrap(), ScaffoldConfig::default());
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();

        let result = ScaffoldConfig::load(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn load_rejects_unknown_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scaffold.toml");
        fs::write(&path, "test-dir = \"tests\"\n").unwrap();

        let result = ScaffoldConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = ScaffoldConfig::default()
            .with_overrides(Some(PathBuf::from("regressions")), true)
            .unwrap();

        assert_eq!(config.tests_dir, PathBuf::from("regressions"));
        assert!(config.create_parents);
        assert_eq!(config.makefile_include, "../simple.mk");
    }

    #[test]
    fn overrides_keep_file_values_when_absent() {
        let mut loaded = ScaffoldConfig::default();
        loaded.create_parents = true;

        let config = loaded.clone().with_overrides(None, false).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn overrides_reject_empty_tests_dir() {
        let result = ScaffoldConfig::default().with_overrides(Some(PathBuf::new()), false);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_rejects_empty_include() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scaffold.toml");
        fs::write(&path, "makefile-include = \" \"\n").unwrap();

        let result = ScaffoldConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
