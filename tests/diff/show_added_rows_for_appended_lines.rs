use crate::common::command::{run_confdiff_command, stdout_of, workspace_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_added_rows_for_appended_lines(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "a\nc\n", "a\nb\nc\n");

    let actual_output = stdout_of(&mut run_confdiff_command(
        workspace_dir.path(),
        &["diff", "old.yaml", "new.yaml"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, "   1   a\n   2 + b\n   3   c\n   4\n");

    Ok(())
}

#[rstest]
fn show_removed_rows_for_dropped_lines(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "a\nb\nc\n", "a\nc\n");

    let actual_output = stdout_of(&mut run_confdiff_command(
        workspace_dir.path(),
        &["diff", "old.yaml", "new.yaml"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, "   1   a\n   2 - b\n   3   c\n   4\n");

    Ok(())
}

#[rstest]
fn appended_final_newline_is_marked_on_the_break(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "a\nb", "a\nb\n");

    let actual_output = stdout_of(&mut run_confdiff_command(
        workspace_dir.path(),
        &["diff", "old.yaml", "new.yaml"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, "   1   a\n   2 ~ b{+↵+}\n   3\n");

    Ok(())
}

#[rstest]
fn joined_lines_keep_the_second_line_unchanged(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "on\noff\n", "onoff\n");

    let actual_output = stdout_of(&mut run_confdiff_command(
        workspace_dir.path(),
        &["diff", "old.yaml", "new.yaml"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, "   1 ~ on[-↵-]\n   2   off\n   3\n");

    Ok(())
}
