pub(crate) const DEFAULT_EDITOR: &str = "vi";
pub(crate) const DEFAULT_FINDER_BIN: &str = "fzf";
pub(crate) const DEFAULT_TMUX_BIN: &str = "tmux";

pub(crate) const DATA_DIR_NAME: &str = "quickfuzz";
pub(crate) const LIST_FILE_EXTENSION: &str = "list";

pub(crate) const TMUX_WINDOW_EDITOR: &str = "editor";
pub(crate) const TMUX_WINDOW_SHELL: &str = "shell";
pub(crate) const TMUX_WINDOW_GIT: &str = "git";
pub(crate) const SESSION_NAME_FALLBACK: &str = "quickfuzz";
