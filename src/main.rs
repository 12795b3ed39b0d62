mod cli;
mod commands;
mod config;
mod constants;
mod editor;
mod process;
mod registry;
mod repo;
mod select;
mod store;
mod tmux;
mod ui;


use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::Cli;
use config::Config;
use process::ToolError;
use select::FzfSelector;
use store::FileStore;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap sends help/version to stdout (exit 0) and usage errors
            // to stderr (exit 1).
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        let code = err
            .downcast_ref::<ToolError>()
            .map(ToolError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load()?;
    let store = FileStore::new(config.data_dir()?);
    let selector = FzfSelector::new(config.finder_bin.clone());
    commands::run(command, &config, &store, &selector)
}
