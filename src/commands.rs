use crate::cli::{Action, CommandArgs, Commands};
use crate::config::Config;
use crate::editor;
use crate::process::binary_available;
use crate::registry::CommandKind;
use crate::repo::expand_repositories;
use crate::select::Selector;
use crate::store::ListStore;
use crate::tmux;
use crate::ui::progress;
use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn run(
    command: Commands,
    config: &Config,
    store: &dyn ListStore,
    selector: &dyn Selector,
) -> Result<()> {
    match command {
        Commands::Tmux(args) => run_command(CommandKind::Tmux, args, config, store, selector),
        Commands::Edit(args) => run_command(CommandKind::Edit, args, config, store, selector),
        Commands::Doctor => cmd_doctor(config),
    }
}

fn run_command(
    kind: CommandKind,
    args: CommandArgs,
    config: &Config,
    store: &dyn ListStore,
    selector: &dyn Selector,
) -> Result<()> {
    match args.action() {
        Action::Save(value) => cmd_save(kind, &value, store),
        Action::Delete => cmd_delete(kind, store, selector),
        Action::List => cmd_list(kind, store),
        Action::Run => match kind {
            CommandKind::Tmux => cmd_run_tmux(config, store, selector),
            CommandKind::Edit => cmd_run_edit(config, store, selector),
        },
    }
}

/// Canonicalize a save candidate and run the command's validator. The
/// stored entry is always an absolute canonical path.
pub(crate) fn resolve_candidate(kind: CommandKind, value: &str) -> Result<String> {
    let validation_error = || {
        anyhow!(
            "cannot save `{value}` for `{kind}`: not {}; try `{}`",
            kind.save_requirement(),
            kind.usage_example()
        )
    };
    let resolved = fs::canonicalize(value).map_err(|_| validation_error())?;
    if !kind.validate(&resolved) {
        return Err(validation_error());
    }
    resolved
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("path is not valid UTF-8: {}", resolved.display()))
}

fn cmd_save(kind: CommandKind, value: &str, store: &dyn ListStore) -> Result<()> {
    let entry = resolve_candidate(kind, value)?;
    store.append(kind.list_key(), &entry)
}

fn cmd_delete(kind: CommandKind, store: &dyn ListStore, selector: &dyn Selector) -> Result<()> {
    store.ensure(kind.list_key())?;
    let entries = store.read(kind.list_key())?;
    match selector.choose(&entries)? {
        Some(chosen) => store.remove(kind.list_key(), &chosen),
        None => Ok(()),
    }
}

fn cmd_list(kind: CommandKind, store: &dyn ListStore) -> Result<()> {
    store.ensure(kind.list_key())?;
    for entry in store.read(kind.list_key())? {
        println!("{entry}");
    }
    Ok(())
}

fn cmd_run_tmux(config: &Config, store: &dyn ListStore, selector: &dyn Selector) -> Result<()> {
    let kind = CommandKind::Tmux;
    store.ensure(kind.list_key())?;
    let saved: Vec<PathBuf> = store
        .read(kind.list_key())?
        .iter()
        .map(PathBuf::from)
        .collect();
    let candidates: Vec<String> = expand_repositories(&saved)
        .iter()
        .map(|dir| dir.to_string_lossy().to_string())
        .collect();
    // A cancelled selection is a clean no-op, as is an empty candidate
    // set: the selector is still invoked and trivially returns none.
    let Some(chosen) = selector.choose(&candidates)? else {
        return Ok(());
    };
    let dir = PathBuf::from(&chosen);
    let name = tmux::session_name(&dir);
    if !tmux::session_exists(config, &name) {
        progress(&format!("tmux: creating session `{name}`"));
        tmux::create_session(config, &name, &dir)?;
    }
    tmux::attach_session(config, &name)
}

fn cmd_run_edit(config: &Config, store: &dyn ListStore, selector: &dyn Selector) -> Result<()> {
    let kind = CommandKind::Edit;
    store.ensure(kind.list_key())?;
    let entries = store.read(kind.list_key())?;
    let Some(chosen) = selector.choose(&entries)? else {
        return Ok(());
    };
    editor::launch(config, Path::new(&chosen))
}

#[derive(Debug)]
struct Check {
    name: String,
    ok: bool,
    detail: String,
    fix: Option<String>,
}

impl Check {
    fn ok(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok: true,
            detail: detail.into(),
            fix: None,
        }
    }

    fn fail(name: impl Into<String>, detail: impl Into<String>, fix: Option<String>) -> Self {
        Self {
            name: name.into(),
            ok: false,
            detail: detail.into(),
            fix,
        }
    }

    fn print(&self) {
        let state = if self.ok { "OK" } else { "FAIL" };
        println!("[{state}] {}: {}", self.name, self.detail);
        if let Some(fix) = &self.fix {
            println!("      fix: {fix}");
        }
    }
}

fn cmd_doctor(config: &Config) -> Result<()> {
    progress("doctor: running environment checks");
    let mut checks = Vec::new();
    let mut failed = false;

    if binary_available(&config.finder_bin) {
        checks.push(Check::ok(
            "Fuzzy finder installed",
            format!("`{} --version` works", config.finder_bin),
        ));
    } else {
        failed = true;
        checks.push(Check::fail(
            "Fuzzy finder installed",
            format!("`{}` is not callable", config.finder_bin),
            Some("install fzf and ensure it is on PATH".to_string()),
        ));
    }

    if binary_available(&config.tmux_bin) {
        checks.push(Check::ok(
            "tmux installed",
            format!("`{} --version` works", config.tmux_bin),
        ));
    } else {
        failed = true;
        checks.push(Check::fail(
            "tmux installed",
            format!("`{}` is not callable", config.tmux_bin),
            Some("install tmux and ensure it is on PATH".to_string()),
        ));
    }

    let editor = editor::preferred_editor(config);
    if binary_available(&editor) {
        checks.push(Check::ok(
            "Editor resolvable",
            format!("`{editor} --version` works"),
        ));
    } else {
        failed = true;
        checks.push(Check::fail(
            "Editor resolvable",
            format!("`{editor}` is not callable"),
            Some("set $EDITOR or add `editor = \"...\"` to the config file".to_string()),
        ));
    }

    match config.data_dir() {
        Ok(dir) => match fs::create_dir_all(&dir) {
            Ok(()) => checks.push(Check::ok(
                "Data directory writable",
                format!("lists live under {}", dir.display()),
            )),
            Err(err) => {
                failed = true;
                checks.push(Check::fail(
                    "Data directory writable",
                    format!("cannot create {}: {err}", dir.display()),
                    Some("set `data_dir` in the config file to a writable path".to_string()),
                ));
            }
        },
        Err(err) => {
            failed = true;
            checks.push(Check::fail(
                "Data directory writable",
                err.to_string(),
                Some("set `data_dir` in the config file".to_string()),
            ));
        }
    }

    for check in checks {
        check.print();
    }

    if failed {
        Err(anyhow!("doctor found failing checks"))
    } else {
        Ok(())
    }
}
