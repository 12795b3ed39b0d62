use crate::constants::LIST_FILE_EXTENSION;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Durable mapping from command name to an ordered, duplicate-free
/// sequence of path strings. Injected into the dispatcher so command flow
/// stays free of direct I/O.
pub(crate) trait ListStore {
    /// Guarantee a persisted, possibly-empty list exists for `command`.
    fn ensure(&self, command: &str) -> Result<()>;
    /// Current entries in insertion order.
    fn read(&self, command: &str) -> Result<Vec<String>>;
    /// Append `value` unless an exactly-equal entry already exists.
    fn append(&self, command: &str, value: &str) -> Result<()>;
    /// Remove every entry exactly equal to `value`.
    fn remove(&self, command: &str, value: &str) -> Result<()>;
}

/// One newline-delimited file per command under the data directory, no
/// header or metadata, safe to hand-edit. No locking: concurrent
/// invocations against the same command are racy by design.
#[derive(Debug, Clone)]
pub(crate) struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn list_path(&self, command: &str) -> PathBuf {
        self.root.join(format!("{command}.{LIST_FILE_EXTENSION}"))
    }
}

impl ListStore for FileStore {
    fn ensure(&self, command: &str) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;
        let path = self.list_path(command);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to create list file {}", path.display()))?;
        Ok(())
    }

    fn read(&self, command: &str) -> Result<Vec<String>> {
        let path = self.list_path(command);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read list file {}", path.display()))?;
        Ok(raw
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn append(&self, command: &str, value: &str) -> Result<()> {
        self.ensure(command)?;
        if self.read(command)?.iter().any(|entry| entry == value) {
            return Ok(());
        }
        let path = self.list_path(command);
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open list file {}", path.display()))?;
        writeln!(file, "{value}")
            .with_context(|| format!("failed to write to list file {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, command: &str, value: &str) -> Result<()> {
        let entries = self.read(command)?;
        let kept: Vec<&str> = entries
            .iter()
            .map(String::as_str)
            .filter(|entry| *entry != value)
            .collect();
        if kept.len() == entries.len() {
            return Ok(());
        }
        let path = self.list_path(command);
        let mut contents = kept.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&path, contents)
            .with_context(|| format!("failed to rewrite list file {}", path.display()))?;
        Ok(())
    }
}
