use std::path::{Path, PathBuf};
use toolboard_core::{config, docs};

/// Resolve the project root.
///
/// Priority:
/// 1. `--root` flag / `TOOLBOARD_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `toolboard.yaml` or the status doc
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut dir = cwd.clone();
    loop {
        if dir.join(config::CONFIG_FILE).is_file() || dir.join(docs::STATUS_DOC).is_file() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    let mut dir = cwd.clone();
    loop {
        if dir.join(".git").is_dir() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd
}
