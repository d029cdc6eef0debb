//! Template rendering using Handlebars.
//!
//! The three files of a scaffold are rendered from fixed templates. Issue
//! text is inserted verbatim, without escaping.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer, SKIP_NOTICE};

/// Name of the test directory for an issue.
///
/// Format: "reg_issue{number}"
#[must_use]
pub fn directory_name(number: u64) -> String {
    format!("reg_issue{number}")
}

/// Name of the Fuzion source stub for an issue.
///
/// Format: "reg_issue{number}.fz"
#[must_use]
pub fn source_file_name(number: u64) -> String {
    format!("reg_issue{number}.fz")
}

/// Renders an issue as a `#` comment block.
///
/// Every line of the title, a `===` underline, two empty lines and the body
/// is prefixed with `"# "`. Empty lines keep the trailing space.
#[must_use]
pub fn comment_block(title: &str, body: &str) -> String {
    format!("# {title}\n===\n\n\n{body}").replace('\n', "\n# ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_name() {
        assert_eq!(directory_name(1234), "reg_issue1234");
    }

    #[test]
    fn test_source_file_name() {
        assert_eq!(source_file_name(1234), "reg_issue1234.fz");
    }

    #[test]
    fn comment_block_prefixes_every_line() {
        assert_eq!(
            comment_block("T", "line1\nline2"),
            "# T\n# ===\n# \n# \n# line1\n# line2"
        );
    }

    #[test]
    fn comment_block_with_empty_body() {
        assert_eq!(comment_block("T", ""), "# T\n# ===\n# \n# \n# ");
    }

    #[test]
    fn comment_block_prefixes_multiline_title() {
        assert_eq!(comment_block("a\nb", "c"), "# a\n# b\n# ===\n# \n# \n# c");
    }

    #[test]
    fn comment_block_keeps_carriage_returns() {
        assert_eq!(
            comment_block("T", "x\r\ny"),
            "# T\n# ===\n# \n# \n# x\r\n# y"
        );
    }
}
