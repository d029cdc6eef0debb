//! Rendered scaffold for one issue.

use crate::issues::IssueRecord;
use crate::templates::{directory_name, source_file_name, TemplateError, TemplateRenderer};
use std::path::{Path, PathBuf};

/// File name of the skip marker.
pub const SKIP_FILE_NAME: &str = "skip";

/// File name of the test Makefile.
pub const MAKEFILE_NAME: &str = "Makefile";

/// The directory and file contents generated for one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldBundle {
    /// Issue number the bundle was derived from.
    pub number: u64,

    /// Test directory, `<tests_dir>/reg_issue<number>`.
    pub directory: PathBuf,

    /// Contents of `skip`.
    pub skip_content: String,

    /// Contents of `Makefile`.
    pub makefile_content: String,

    /// Contents of `reg_issue<number>.fz`.
    pub source_content: String,
}

impl ScaffoldBundle {
    /// Renders the bundle for an issue.
    ///
    /// # Arguments
    ///
    /// * `issue` - Issue to render
    /// * `tests_dir` - Directory the test directories are created in
    /// * `makefile_include` - Makefile included by the generated Makefile
    /// * `renderer` - Template renderer
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if rendering fails.
    pub fn render(
        issue: &IssueRecord,
        tests_dir: &Path,
        makefile_include: &str,
        renderer: &TemplateRenderer,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            number: issue.number,
            directory: tests_dir.join(directory_name(issue.number)),
            skip_content: renderer.render_skip(),
            makefile_content: renderer.render_makefile(issue.number, makefile_include)?,
            source_content: renderer.render_source(issue)?,
        })
    }

    /// Path of the skip marker.
    #[must_use]
    pub fn skip_path(&self) -> PathBuf {
        self.directory.join(SKIP_FILE_NAME)
    }

    /// Path of the Makefile.
    #[must_use]
    pub fn makefile_path(&self) -> PathBuf {
        self.directory.join(MAKEFILE_NAME)
    }

    /// Path of the source stub. Its existence marks the bundle as done.
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.directory.join(source_file_name(self.number))
    }
}
