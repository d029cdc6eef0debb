//! Template renderer.

use crate::issues::IssueRecord;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Header shared by every generated file, parameterized by what the file is.
macro_rules! license_header {
    ($kind:literal) => {
        concat!(
            "# This file is part of the Fuzion language implementation.\n",
            "#\n",
            "# The Fuzion language implementation is free software: you can redistribute it\n",
            "# and/or modify it under the terms of the GNU General Public License as published\n",
            "# by the Free Software Foundation, version 3 of the License.\n",
            "#\n",
            "# The Fuzion language implementation is distributed in the hope that it will be\n",
            "# useful, but WITHOUT ANY WARRANTY; without even the implied warranty of\n",
            "# MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public\n",
            "# License for more details.\n",
            "#\n",
            "# You should have received a copy of the GNU General Public License along with The\n",
            "# Fuzion language implementation.  If not, see <https://www.gnu.org/licenses/>.\n",
            "\n",
            "\n",
            "# -----------------------------------------------------------------------\n",
            "#\n",
            "#  Tokiwa Software GmbH, Germany\n",
            "#\n",
            "#  Source code of Fuzion ",
            $kind,
            "\n",
            "#\n",
            "# -----------------------------------------------------------------------\n",
            "\n",
        )
    };
}

/// Contents of the `skip` marker.
pub const SKIP_NOTICE: &str = "NYI: this test was copied from issue automatically. \
Delete this skip file once implementation is done.";

const MAKEFILE_TEMPLATE: &str = concat!(
    license_header!("test Makefile"),
    "override NAME = {{name}}\n",
    "include {{include}}\n",
);

const SOURCE_TEMPLATE: &str = concat!(license_header!("test"), "\n", "{{comment}}");

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (issue text is copied verbatim)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders the files of a test scaffold.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Returns the contents of the `skip` marker.
    #[must_use]
    pub fn render_skip(&self) -> String {
        SKIP_NOTICE.to_string()
    }

    /// Renders the test Makefile for an issue.
    ///
    /// # Arguments
    ///
    /// * `number` - Issue number
    /// * `include` - Makefile to include, relative to the test directory
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_makefile(
        &self,
        number: u64,
        include: &str,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "name": super::directory_name(number),
            "include": include
        });

        self.render_template(MAKEFILE_TEMPLATE, &data)
    }

    /// Renders the Fuzion source stub holding the issue text as a comment.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_source(&self, issue: &IssueRecord) -> Result<String, super::TemplateError> {
        let data = json!({
            "comment": super::comment_block(&issue.title, issue.body())
        });

        self.render_template(SOURCE_TEMPLATE, &data)
    }

    fn render_template(
        &self,
        template: &str,
        data: &Value,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
