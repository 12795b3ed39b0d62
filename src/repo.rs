use std::fs;
use std::path::{Path, PathBuf};

/// A directory is a repository root when it carries a `.git` metadata
/// entry (a directory for a normal clone, a file for a linked worktree).
pub(crate) fn is_repository_root(path: &Path) -> bool {
    path.join(".git").exists()
}

/// Flatten saved directories into the candidate set offered for session
/// launch: a directory that is itself a repository root is kept as-is,
/// otherwise its immediate subdirectories that are repository roots are
/// substituted. Directories matching neither rule are dropped. Recomputed
/// on every invocation; repository status can change between runs.
pub(crate) fn expand_repositories(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for dir in dirs {
        if is_repository_root(dir) {
            candidates.push(dir.clone());
            continue;
        }
        for sub in list_subdirectories(dir) {
            if is_repository_root(&sub) {
                candidates.push(sub);
            }
        }
    }
    candidates
}

fn list_subdirectories(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut subdirs: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| {
            entry
                .file_type()
                .map(|kind| kind.is_dir())
                .unwrap_or(false)
        })
        .map(|entry| entry.path())
        .collect();
    subdirs.sort();
    subdirs
}
