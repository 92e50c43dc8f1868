use crate::common::command::{renamed_home_dir, renamed_home_output, run_confdiff_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_unified_diff_for_changed_value(
    renamed_home_dir: TempDir,
    renamed_home_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_confdiff_command(
        renamed_home_dir.path(),
        &["diff", "old.yaml", "new.yaml"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, renamed_home_output);

    Ok(())
}

#[rstest]
fn inline_is_an_alias_for_unified(
    renamed_home_dir: TempDir,
    renamed_home_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_confdiff_command(
        renamed_home_dir.path(),
        &["diff", "old.yaml", "new.yaml", "--mode", "inline"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, renamed_home_output);

    Ok(())
}

#[rstest]
fn windows_line_endings_render_like_unix_ones(
    renamed_home_dir: TempDir,
    renamed_home_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    crate::common::file::write_pair(
        renamed_home_dir.path(),
        "homeassistant:\r\n  name: Home\r\n",
        "homeassistant:\n  name: Cabin\n",
    );

    let actual_output = stdout_of(&mut run_confdiff_command(
        renamed_home_dir.path(),
        &["diff", "old.yaml", "new.yaml"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, renamed_home_output);

    Ok(())
}
