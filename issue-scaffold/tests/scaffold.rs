use std::fs;
use std::path::{Path, PathBuf};

use issue_scaffold::{ParseError, Runner, RunnerConfig, RunnerError};
use tempfile::TempDir;

const LICENSE: &str = "# This file is part of the Fuzion language implementation.
#
# The Fuzion language implementation is free software: you can redistribute it
# and/or modify it under the terms of the GNU General Public License as published
# by the Free Software Foundation, version 3 of the License.
#
# The Fuzion language implementation is distributed in the hope that it will be
# useful, but WITHOUT ANY WARRANTY; without even the implied warranty of
# MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public
# License for more details.
#
# You should have received a copy of the GNU General Public License along with The
# Fuzion language implementation.  If not, see <https://www.gnu.org/licenses/>.


# -----------------------------------------------------------------------
#
#  Tokiwa Software GmbH, Germany
#
";

const RULE: &str = "#
# -----------------------------------------------------------------------
";

fn fixture_input() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/issues.json");
    fs::read_to_string(path).unwrap()
}

/// Creates `<temp>/tests` and a runner writing into it.
fn setup() -> (TempDir, PathBuf, Runner) {
    let temp = TempDir::new().unwrap();
    let tests_dir = temp.path().join("tests");
    fs::create_dir(&tests_dir).unwrap();
    let runner = Runner::new(RunnerConfig::new(tests_dir.clone(), false, false));
    (temp, tests_dir, runner)
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

#[tokio::test]
async fn creates_exact_files() {
    let (_temp, tests_dir, runner) = setup();

    let summary = runner
        .run(r#"[{"number": 12, "title": "T", "body": "line1\nline2"}]"#)
        .await
        .unwrap();
    assert_eq!(summary.scaffolds_created, 1);

    let dir = tests_dir.join("reg_issue12");
    let mut files: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    assert_eq!(files, ["Makefile", "reg_issue12.fz", "skip"]);

    assert_eq!(
        read(&dir, "skip"),
        "NYI: this test was copied from issue automatically. Delete this skip file once implementation is done."
    );
    assert_eq!(
        read(&dir, "Makefile"),
        format!(
            "{LICENSE}#  Source code of Fuzion test Makefile\n{RULE}\noverride NAME = reg_issue12\ninclude ../simple.mk\n"
        )
    );
    assert_eq!(
        read(&dir, "reg_issue12.fz"),
        format!(
            "{LICENSE}#  Source code of Fuzion test\n{RULE}\n\n# T\n# ===\n# \n# \n# line1\n# line2"
        )
    );
}

#[tokio::test]
async fn creates_scaffolds_for_fixture() {
    let (_temp, tests_dir, runner) = setup();

    let summary = runner.run(&fixture_input()).await.unwrap();

    assert_eq!(summary.records_processed, 3);
    assert_eq!(summary.scaffolds_created, 3);
    assert!(summary.all_success());

    let source = read(&tests_dir.join("reg_issue1204"), "reg_issue1204.fz");
    assert!(source.ends_with(
        "# Crash on assignment\n# ===\n# \n# \n# The following code crashes the front end:\n# \n# ```\n# x := 3\n# ```"
    ));

    let source = read(&tests_dir.join("reg_issue1402"), "reg_issue1402.fz");
    assert!(source.ends_with("# Null body\n# ===\n# \n# \n# "));
}

#[tokio::test]
async fn second_run_changes_nothing() {
    let (_temp, tests_dir, runner) = setup();
    let input = fixture_input();

    runner.run(&input).await.unwrap();
    let dir = tests_dir.join("reg_issue1204");
    let before = (
        read(&dir, "skip"),
        read(&dir, "Makefile"),
        read(&dir, "reg_issue1204.fz"),
    );

    let summary = runner.run(&input).await.unwrap();

    assert_eq!(summary.scaffolds_created, 0);
    assert_eq!(summary.scaffolds_skipped, 3);
    assert_eq!(
        before,
        (
            read(&dir, "skip"),
            read(&dir, "Makefile"),
            read(&dir, "reg_issue1204.fz"),
        )
    );
}

#[tokio::test]
async fn existing_source_stub_is_not_touched() {
    let (_temp, tests_dir, runner) = setup();
    let dir = tests_dir.join("reg_issue7");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("reg_issue7.fz"), "say \"fixed\"\n").unwrap();

    let summary = runner
        .run(r#"[{"number": 7, "title": "t", "body": "b"}]"#)
        .await
        .unwrap();

    assert_eq!(summary.scaffolds_skipped, 1);
    assert!(summary.all_success());
    assert_eq!(read(&dir, "reg_issue7.fz"), "say \"fixed\"\n");
    assert!(!dir.join("skip").exists());
    assert!(!dir.join("Makefile").exists());
}

#[tokio::test]
async fn missing_tests_dir_fails_every_record() {
    let temp = TempDir::new().unwrap();
    let tests_dir = temp.path().join("tests");
    let runner = Runner::new(RunnerConfig::new(tests_dir.clone(), false, false));

    let summary = runner.run(&fixture_input()).await.unwrap();

    assert_eq!(summary.records_processed, 3);
    assert_eq!(summary.scaffolds_failed, 3);
    assert!(summary.failures[0].starts_with("issue #1204: Failed to create directory"));
    assert!(!tests_dir.exists());
}

#[tokio::test]
async fn missing_tests_dir_is_created_on_request() {
    let temp = TempDir::new().unwrap();
    let tests_dir = temp.path().join("tests");
    let runner = Runner::new(RunnerConfig::new(tests_dir.clone(), true, false));

    let summary = runner.run(&fixture_input()).await.unwrap();

    assert_eq!(summary.scaffolds_created, 3);
    assert!(tests_dir.join("reg_issue1310/reg_issue1310.fz").exists());
}

#[tokio::test]
async fn object_input_fails_before_writing() {
    let (_temp, tests_dir, runner) = setup();

    let result = runner
        .run(r#"{"number": 1, "title": "t", "body": "b"}"#)
        .await;

    assert!(matches!(
        result,
        Err(RunnerError::Parse(ParseError::NotAnArray { .. }))
    ));
    assert_eq!(fs::read_dir(&tests_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn custom_makefile_include() {
    let (_temp, tests_dir, _) = setup();
    let runner = Runner::new(
        RunnerConfig::new(tests_dir.clone(), false, false)
            .with_makefile_include("../../simple_c.mk".to_string()),
    );

    runner
        .run(r#"[{"number": 3, "title": "t", "body": "b"}]"#)
        .await
        .unwrap();

    assert!(read(&tests_dir.join("reg_issue3"), "Makefile")
        .ends_with("override NAME = reg_issue3\ninclude ../../simple_c.mk\n"));
}

#[tokio::test]
async fn generate_reports_each_record() {
    let (_temp, tests_dir, runner) = setup();

    let summary = runner
        .generate(vec![
            serde_json::json!({"number": 1, "title": "a", "body": "b"}),
            serde_json::json!({"title": "no number"}),
        ])
        .await;

    assert_eq!(summary.scaffolds_created, 1);
    assert_eq!(summary.scaffolds_failed, 1);
    assert!(summary.failures[0].starts_with("record 1: Invalid issue record at index 1"));
    assert!(tests_dir.join("reg_issue1").exists());
}

#[tokio::test]
async fn failed_write_does_not_stop_batch() {
    let (_temp, tests_dir, runner) = setup();
    let blocked = tests_dir.join("reg_issue1");
    fs::create_dir_all(blocked.join("skip")).unwrap();

    let summary = runner
        .run(r#"[{"number": 1, "title": "a", "body": "b"}, {"number": 2, "title": "c", "body": "d"}]"#)
        .await
        .unwrap();

    assert_eq!(summary.scaffolds_failed, 1);
    assert_eq!(summary.scaffolds_created, 1);
    assert!(summary.failures[0].starts_with("issue #1: Failed to write"));
    assert!(!blocked.join("Makefile").exists());
    assert!(!blocked.join("reg_issue1.fz").exists());
    assert!(tests_dir.join("reg_issue2/reg_issue2.fz").exists());
}
