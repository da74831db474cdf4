use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=SSHCONFIG_VERSION");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let version = env::var("SSHCONFIG_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=SSHCONFIG_VERSION={version}");

    println!("cargo:rustc-env=SSHCONFIG_BUILD_HASH={}", git_hash());
}

/// Short commit hash of the checkout, or `unknown` outside a git tree.
fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
