use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn passages_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    dir.child("old.txt")
        .write_str("The cat sat\non the mat.")
        .expect("Failed to write old passage");
    dir.child("new.txt")
        .write_str("The dog sat\non the mat!")
        .expect("Failed to write new passage");

    dir
}

pub fn run_passdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("passdiff").expect("Failed to find passdiff binary");
    cmd.env_remove("NO_COLOR");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}
