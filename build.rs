//! Stamps the binary with a version and short commit hash.
//!
//! `APP_VERSION` and `APP_GIT_SHA` may be set by the release pipeline; otherwise
//! the package version and `git rev-parse` are used.

use std::env;
use std::process::Command;

fn stamp(key: &str, fallback: impl FnOnce() -> String) {
    let value = env::var(key).unwrap_or_else(|_| fallback());
    println!("cargo:rustc-env={key}={value}");
    println!("cargo:rerun-if-env-changed={key}");
}

fn short_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?;
    Some(sha.trim().to_owned()).filter(|s| !s.is_empty())
}

fn main() {
    stamp("APP_VERSION", || env!("CARGO_PKG_VERSION").to_owned());
    stamp("APP_GIT_SHA", || short_head().unwrap_or_else(|| "unknown".to_owned()));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
