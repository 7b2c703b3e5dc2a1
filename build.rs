#![forbid(unsafe_code)]

fn main() {
    // Git metadata is unavailable when building from a source archive, so
    // emit placeholders rather than failing the build.
    emit("GIT_BRANCH", build_data::get_git_branch().unwrap_or_else(|_| "unknown".to_string()));
    emit("GIT_COMMIT_SHORT", build_data::get_git_commit_short().unwrap_or_else(|_| "unknown".to_string()));
    emit("GIT_DIRTY", build_data::get_git_dirty().map(|d| d.to_string()).unwrap_or_else(|_| "unknown".to_string()));
    emit("RUSTC_VERSION", build_data::get_rustc_version().unwrap_or_else(|_| "unknown".to_string()));
}

fn emit(key: &str, value: String) {
    println!("cargo:rustc-env={}={}", key, value);
}
