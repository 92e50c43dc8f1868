use crate::common::command::{run_confdiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_when_a_file_is_missing(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.yaml"),
        "a\n".to_string(),
    ));

    run_confdiff_command(workspace_dir.path(), &["diff", "old.yaml", "new.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read text file new.yaml"));
}
