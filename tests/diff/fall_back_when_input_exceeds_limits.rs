use crate::common::command::{renamed_home_dir, run_confdiff_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fall_back_when_input_exceeds_byte_limit(renamed_home_dir: TempDir) {
    run_confdiff_command(
        renamed_home_dir.path(),
        &["diff", "old.yaml", "new.yaml", "--max-bytes", "4"],
    )
    .assert()
    .success()
    .stdout(predicate::str::starts_with("diff too large to display"))
    .stdout(predicate::str::contains("4 byte limit"));
}

#[rstest]
fn fall_back_when_input_exceeds_line_limit_from_env(renamed_home_dir: TempDir) {
    run_confdiff_command(renamed_home_dir.path(), &["diff", "old.yaml", "new.yaml"])
        .env("CONFDIFF_MAX_LINES", "2")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 lines exceeds the 2 line limit"));
}

#[rstest]
fn invalid_limit_variable_fails(renamed_home_dir: TempDir) {
    run_confdiff_command(renamed_home_dir.path(), &["stats", "old.yaml", "new.yaml"])
        .env("CONFDIFF_MAX_BYTES", "lots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFDIFF_MAX_BYTES"));
}
