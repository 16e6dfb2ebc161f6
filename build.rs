use std::process::Command;

/// run git with the given args, returning trimmed stdout or None when git
/// is unavailable or the source tree is not a repository
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    // get git commit hash
    let commit = git(&["rev-parse", "HEAD"]).unwrap_or_else(|| "unknown".to_string());

    // get short commit hash
    let short_commit = if commit.len() >= 8 {
        &commit[..8]
    } else {
        &commit
    };

    // get commit timestamp
    let timestamp = git(&["log", "-1", "--format=%ct"]).unwrap_or_else(|| "0".to_string());

    // check if working directory is dirty
    let dirty = git(&["status", "--porcelain"])
        .map(|s| !s.is_empty())
        .unwrap_or(false);

    // set environment variables for compilation
    println!("cargo:rustc-env=GIT_COMMIT={}", commit);
    println!("cargo:rustc-env=GIT_COMMIT_SHORT={}", short_commit);
    println!("cargo:rustc-env=GIT_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=GIT_DIRTY={}", dirty);

    // build date
    let build_date = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    // release channel from environment or default to dev
    let channel = std::env::var("RELEASE_CHANNEL").unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=RELEASE_CHANNEL={}", channel);

    // rerun if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=RELEASE_CHANNEL");
}
