use crate::constants::{DATA_DIR_NAME, DEFAULT_FINDER_BIN, DEFAULT_TMUX_BIN};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    finder_bin: Option<String>,
    tmux_bin: Option<String>,
    editor: Option<String>,
    data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) finder_bin: String,
    pub(crate) tmux_bin: String,
    pub(crate) editor: Option<String>,
    pub(crate) data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            finder_bin: DEFAULT_FINDER_BIN.to_string(),
            tmux_bin: DEFAULT_TMUX_BIN.to_string(),
            editor: None,
            data_dir: None,
        }
    }
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        let mut config = Self::default();
        for path in config_paths() {
            if !path.exists() {
                continue;
            }
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let parsed: PartialConfig = toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file {}", path.display()))?;
            if let Some(finder_bin) = parsed.finder_bin
                && !finder_bin.trim().is_empty()
            {
                config.finder_bin = finder_bin;
            }
            if let Some(tmux_bin) = parsed.tmux_bin
                && !tmux_bin.trim().is_empty()
            {
                config.tmux_bin = tmux_bin;
            }
            if let Some(editor) = parsed.editor
                && !editor.trim().is_empty()
            {
                config.editor = Some(editor);
            }
            if let Some(data_dir) = parsed.data_dir {
                config.data_dir = Some(data_dir);
            }
            break;
        }
        Ok(config)
    }

    /// Root directory holding the per-command list files.
    pub(crate) fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(DATA_DIR_NAME))
            .context("could not determine a user data directory")
    }
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("quickfuzz").join("config.toml"));
    }
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".quickfuzz.toml"));
    }
    paths
}
