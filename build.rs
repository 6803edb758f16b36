//! Build metadata for `BuildInfo`: build time, git hash and compiler version

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let build_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    emit("BUILD_TIME", Some(build_time));
    emit("GIT_HASH", command_output("git", &["rev-parse", "--short", "HEAD"]));
    emit("RUST_VERSION", command_output("rustc", &["--version"]));

    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn emit(key: &str, value: Option<String>) {
    let value = value.unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env={}={}", key, value);
}

/// Trimmed stdout of a successful command
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
