use crate::config::Config;
use crate::constants::DEFAULT_EDITOR;
use crate::process::{path_to_str, run_stream};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolution order: config file, then `$VISUAL`, then `$EDITOR`, then the
/// built-in default.
pub(crate) fn preferred_editor(config: &Config) -> String {
    if let Some(editor) = &config.editor
        && !editor.trim().is_empty()
    {
        return editor.clone();
    }
    for var in ["VISUAL", "EDITOR"] {
        if let Ok(value) = env::var(var)
            && !value.trim().is_empty()
        {
            return value;
        }
    }
    DEFAULT_EDITOR.to_string()
}

/// Restores the original working directory when dropped, on every exit
/// path, so an editor failure cannot leave the process in the wrong
/// directory.
pub(crate) struct WorkingDirGuard {
    original: PathBuf,
}

impl WorkingDirGuard {
    pub(crate) fn change_to(target: &Path) -> Result<Self> {
        let original = env::current_dir().context("failed to read current directory")?;
        env::set_current_dir(target)
            .with_context(|| format!("failed to change directory to {}", target.display()))?;
        Ok(Self { original })
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

/// Directory relative operations should resolve against while the editor
/// runs: the path itself for directories, its parent otherwise.
pub(crate) fn editing_dir(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.to_path_buf();
    }
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub(crate) fn launch(config: &Config, path: &Path) -> Result<()> {
    let editor = preferred_editor(config);
    let _guard = WorkingDirGuard::change_to(&editing_dir(path))?;
    run_stream(&editor, &[path_to_str(path)?], None)
}
