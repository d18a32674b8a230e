#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Two morning/evening punches, a blank line and a short line in between.
pub const SAMPLE_LOG: &str = "72\t2025-11-03 08:52:08\t104\t15\tJohn Doe\tI\t0\t1\n\
\n\
72\t2025-11-03 18:18:47\t104\t15\tJohn Doe\tI\t0\t1\n\
garbage\n\
73\t2025-11-03 07:40:00\n";

pub fn aub() -> Command {
    cargo_bin_cmd!("aubconv")
}

/// Create (or reset) a per-test working directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("aubconv_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `content` to `<dir>/<file>` and return the full path as String
pub fn write_input(dir: &PathBuf, file: &str, content: &[u8]) -> String {
    let path = dir.join(file);
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}

/// Config path inside the test dir, so tests never touch the user's home
pub fn config_path(dir: &PathBuf) -> String {
    dir.join("aubconv.conf").to_string_lossy().to_string()
}
