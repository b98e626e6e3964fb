#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// The seven-section sample deck used throughout the CLI tests.
#[allow(dead_code)]
pub const SAMPLE_SECTIONS: &str = r#"[
  {"title": "Intro", "startSlide": 1, "level": 0},
  {"title": "Background", "startSlide": 2, "level": 1},
  {"title": "Main", "startSlide": 4, "level": 0},
  {"title": "TopicA", "startSlide": 4, "level": 1},
  {"title": "Sub A1", "startSlide": 5, "level": 2},
  {"title": "TopicB", "startSlide": 7, "level": 1},
  {"title": "Conclusion", "startSlide": 9, "level": 0}
]"#;

/// A `lectern` command isolated from the user's environment: config is read
/// from `dir` and colors are off.
#[allow(dead_code)]
pub fn lectern_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lectern"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("LECTERN_METADATA");
    cmd.env_remove("LECTERN_CONFIG");
    cmd.env_remove("LECTERN_OUTPUT_FORMAT");
    cmd.env("LECTERN_CONFIG_DIR", dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Generate the ten-slide sample deck inside `dir` and return its path.
#[allow(dead_code)]
pub fn write_sample_deck(dir: &Path) -> PathBuf {
    let sections = dir.join("sections.json");
    std::fs::write(&sections, SAMPLE_SECTIONS).unwrap();
    let metadata = dir.join("slides").join("metadata.json");

    lectern_cmd(dir)
        .args(["generate", "--slides", "10", "--sections"])
        .arg(&sections)
        .arg("--metadata")
        .arg(&metadata)
        .assert()
        .success();
    metadata
}

/// Run `lectern` with `args` against `metadata` and parse stdout as JSON.
#[allow(dead_code)]
pub fn run_json(dir: &Path, metadata: &Path, args: &[&str]) -> serde_json::Value {
    let output = lectern_cmd(dir)
        .args(args)
        .arg("--metadata")
        .arg(metadata)
        .args(["--format", "json"])
        .output()
        .expect("should run lectern");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
