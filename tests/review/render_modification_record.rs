use crate::common::command::{
    config_after, config_before, renamed_home_output, run_confdiff_command, stdout_of,
    workspace_dir,
};
use crate::common::file::{FileSpec, write_file, write_record};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn render_modification_record(
    workspace_dir: TempDir,
    config_before: String,
    config_after: String,
    renamed_home_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_record(
        workspace_dir.path(),
        "configuration.yaml",
        "update",
        Some(&config_before),
        &config_after,
    );

    let actual_output = stdout_of(&mut run_confdiff_command(
        workspace_dir.path(),
        &["review", "record.json"],
    ))?;

    let expected_output =
        format!("configuration.yaml (update, pending) +5 -4\n{renamed_home_output}");
    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn render_created_file_as_added_rows(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_record(
        workspace_dir.path(),
        "scripts.yaml",
        "create",
        None,
        "wake:\n  alias: Wake up\n",
    );

    let actual_output = stdout_of(&mut run_confdiff_command(
        workspace_dir.path(),
        &["review", "record.json", "--status", "approved"],
    ))?;

    let expected_output = concat!(
        "scripts.yaml (create, approved) +23 -0\n",
        "   1 + wake:\n",
        "   2 +   alias: Wake up\n",
        "   3\n",
    );
    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn render_record_in_split_mode(
    workspace_dir: TempDir,
    config_before: String,
    config_after: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_record(
        workspace_dir.path(),
        "configuration.yaml",
        "update",
        Some(&config_before),
        &config_after,
    );

    let actual_output = stdout_of(&mut run_confdiff_command(
        workspace_dir.path(),
        &["review", "record.json", "--mode", "split"],
    ))?;

    let expected_output = concat!(
        "configuration.yaml (update, pending) +5 -4\n",
        "   1 homeassistant: │    1 homeassistant:\n",
        "   2   name: Home   │    2   name: Cabin\n",
        "   3                │    3\n",
    );
    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn malformed_record_fails(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("record.json"),
        r#"{"file_path":"configuration.yaml","action":"rename"}"#.to_string(),
    ));

    run_confdiff_command(workspace_dir.path(), &["review", "record.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed modification record"));
}
