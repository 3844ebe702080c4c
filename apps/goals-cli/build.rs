// build.rs — Stamp `goals --version` with the commit and build date.
//
// Packagers building outside a git checkout can pin both values by setting
// GOALS_GIT_HASH / GOALS_BUILD_DATE in the build environment.

use std::env;
use std::process::Command;

fn main() {
    let hash = env::var("GOALS_GIT_HASH").ok().unwrap_or_else(|| {
        let hash = run("git", &["rev-parse", "--short", "HEAD"]);
        let dirty = run("git", &["status", "--porcelain"]).is_some_and(|s| !s.is_empty());
        match (hash, dirty) {
            (Some(h), true) => format!("{}-dirty", h),
            (Some(h), false) => h,
            (None, _) => "unknown".into(),
        }
    });
    let date = env::var("GOALS_BUILD_DATE")
        .ok()
        .or_else(|| run("date", &["+%Y-%m-%d"]))
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=GOALS_GIT_HASH={}", hash);
    println!("cargo:rustc-env=GOALS_BUILD_DATE={}", date);

    println!("cargo:rerun-if-env-changed=GOALS_GIT_HASH");
    println!("cargo:rerun-if-env-changed=GOALS_BUILD_DATE");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");
}

/// Trimmed stdout of a successful command.
fn run(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
}
