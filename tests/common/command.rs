use crate::common::file::write_pair;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn config_before() -> String {
    "homeassistant:\n  name: Home\n".to_string()
}

#[fixture]
pub fn config_after() -> String {
    "homeassistant:\n  name: Cabin\n".to_string()
}

#[fixture]
pub fn renamed_home_dir(
    workspace_dir: TempDir,
    config_before: String,
    config_after: String,
) -> TempDir {
    write_pair(workspace_dir.path(), &config_before, &config_after);
    workspace_dir
}

#[fixture]
pub fn renamed_home_output() -> String {
    "   1   homeassistant:\n   2 ~   name: [-Home-]{+Cabin+}\n   3\n".to_string()
}

pub fn run_confdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("confdiff").expect("Failed to find confdiff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("CONFDIFF_MAX_BYTES");
    cmd.env_remove("CONFDIFF_MAX_LINES");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    let stdout = output.get_output().stdout.clone();
    Ok(String::from_utf8(stdout)?)
}
