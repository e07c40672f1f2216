use std::process::Command;

/// Output of `git <args>`, or "unknown" outside a git checkout.
fn git_output(args: &[&str]) -> String {
    match Command::new("git").args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // short commit hash for `wordsearch --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_output(&["rev-parse", "--short", "HEAD"]));
    // full hash for `wordsearch --help` / long version
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_output(&["rev-parse", "HEAD"]));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
