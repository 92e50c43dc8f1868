use crate::common::command::{run_confdiff_command, stdout_of, workspace_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&["approve", "42", "--comment", "lgtm"], r#"{"type":"review","id":"42","status":"approved","comment":"lgtm"}"#)]
#[case(&["approve", "42"], r#"{"type":"review","id":"42","status":"approved"}"#)]
#[case(&["reject", "42", "-c", "wrong entity"], r#"{"type":"review","id":"42","status":"rejected","comment":"wrong entity"}"#)]
#[case(&["reject", "42", "-c", "   "], r#"{"type":"review","id":"42","status":"rejected"}"#)]
fn emit_decision_intents(
    workspace_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected_json: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_confdiff_command(workspace_dir.path(), args))?;

    pretty_assertions::assert_eq!(actual_output, format!("{expected_json}\n"));

    Ok(())
}
