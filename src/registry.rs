use std::fmt;
use std::fs::{self, File};
use std::path::Path;

/// The closed set of launcher commands. Each variant bundles what the
/// dispatcher needs to know about it: the list it persists to, the
/// save-time validator, and the corrective example quoted in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandKind {
    Tmux,
    Edit,
}

impl CommandKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Tmux => "tmux",
            Self::Edit => "edit",
        }
    }

    /// File stem of the command's persisted list.
    pub(crate) fn list_key(self) -> &'static str {
        self.name()
    }

    pub(crate) fn save_requirement(self) -> &'static str {
        match self {
            Self::Tmux => "a readable directory",
            Self::Edit => "a readable file or directory",
        }
    }

    pub(crate) fn usage_example(self) -> &'static str {
        match self {
            Self::Tmux => "quickfuzz tmux --save ~/projects",
            Self::Edit => "quickfuzz edit --save ~/.config/nvim/init.lua",
        }
    }

    /// Save-time predicate over an already-canonicalized path.
    pub(crate) fn validate(self, path: &Path) -> bool {
        match self {
            Self::Tmux => readable_dir(path),
            Self::Edit => readable_dir(path) || readable_file(path),
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn readable_dir(path: &Path) -> bool {
    path.is_dir() && fs::read_dir(path).is_ok()
}

fn readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}
