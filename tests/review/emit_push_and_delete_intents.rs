use crate::common::command::{run_confdiff_command, stdout_of, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["push", "7", "--server", "-m", "tune name"], r#"{"type":"push","id":"7","push_to_server":true,"push_to_github":false,"commit_message":"tune name"}"#)]
#[case(&["push", "7", "--server", "--github"], r#"{"type":"push","id":"7","push_to_server":true,"push_to_github":true}"#)]
#[case(&["delete", "9"], r#"{"type":"delete","id":"9"}"#)]
fn emit_push_and_delete_intents(
    workspace_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected_json: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_confdiff_command(workspace_dir.path(), args))?;

    pretty_assertions::assert_eq!(actual_output, format!("{expected_json}\n"));

    Ok(())
}

#[rstest]
fn push_without_a_target_fails(workspace_dir: TempDir) {
    run_confdiff_command(workspace_dir.path(), &["push", "7"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("select at least one push target"));
}
