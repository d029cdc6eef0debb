//! Runner configuration.

use crate::config::{default_makefile_include, ScaffoldConfig};
use std::path::{Path, PathBuf};

/// Configuration for a scaffold generation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory the test directories are created in.
    tests_dir: PathBuf,
    /// Whether missing parents of the test directories are created.
    create_parents: bool,
    /// Whether to render scaffolds without writing them.
    dry_run: bool,
    /// Makefile included by every generated Makefile.
    makefile_include: String,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(tests_dir: PathBuf, create_parents: bool, dry_run: bool) -> Self {
        Self {
            tests_dir,
            create_parents,
            dry_run,
            makefile_include: default_makefile_include(),
        }
    }

    /// Creates a configuration from loaded settings.
    pub fn from_config(config: ScaffoldConfig, dry_run: bool) -> Self {
        Self {
            tests_dir: config.tests_dir,
            create_parents: config.create_parents,
            dry_run,
            makefile_include: config.makefile_include,
        }
    }

    /// Sets a custom Makefile include.
    pub fn with_makefile_include(mut self, makefile_include: String) -> Self {
        self.makefile_include = makefile_include;
        self
    }

    /// Returns the tests directory.
    pub fn tests_dir(&self) -> &Path {
        &self.tests_dir
    }

    /// Returns whether missing parents are created.
    pub fn create_parents(&self) -> bool {
        self.create_parents
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the Makefile include.
    pub fn makefile_include(&self) -> &str {
        &self.makefile_include
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::from_config(ScaffoldConfig::default(), false)
    }
}
