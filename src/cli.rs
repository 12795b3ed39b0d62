use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "quickfuzz",
    version,
    about = "Keep per-command lists of paths, fuzzy-select one, and launch it"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Manage project directories and launch tmux sessions from them.
    Tmux(CommandArgs),
    /// Manage edit targets and open the chosen one in the editor.
    Edit(CommandArgs),
    /// Run sanity checks against the external tools quickfuzz drives.
    Doctor,
}

#[derive(Debug, Args)]
pub(crate) struct CommandArgs {
    /// Validate PATH and persist it to this command's list.
    #[arg(short = 's', long = "save", value_name = "PATH")]
    pub(crate) save: Option<String>,
    /// Fuzzy-select an entry and remove it from the list.
    #[arg(short = 'd', long = "delete", conflicts_with = "save")]
    pub(crate) delete: bool,
    /// Print every saved entry, one per line, in stored order.
    #[arg(short = 'l', long = "list", conflicts_with_all = ["save", "delete"])]
    pub(crate) list: bool,
}

/// What one invocation of a launcher command should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Save(String),
    Delete,
    List,
    Run,
}

impl CommandArgs {
    pub(crate) fn action(self) -> Action {
        if let Some(value) = self.save {
            return Action::Save(value);
        }
        if self.delete {
            return Action::Delete;
        }
        if self.list {
            return Action::List;
        }
        Action::Run
    }
}
