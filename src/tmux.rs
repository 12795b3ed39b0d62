use crate::config::Config;
use crate::constants::{
    SESSION_NAME_FALLBACK, TMUX_WINDOW_EDITOR, TMUX_WINDOW_GIT, TMUX_WINDOW_SHELL,
};
use crate::process::{best_error_line, path_to_str, run_capture, run_stream};
use anyhow::{Result, bail};
use std::env;
use std::path::Path;

/// Session name derived from the final path segment, reduced to the
/// characters tmux accepts in `-t` targets (`.` and `:` are separators
/// there).
pub(crate) fn session_name(dir: &Path) -> String {
    let segment = dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let mut out = String::with_capacity(segment.len());
    for ch in segment.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            out.push(ch);
        } else {
            out.push('-');
        }
    }
    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        SESSION_NAME_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}

pub(crate) fn session_exists(config: &Config, name: &str) -> bool {
    run_capture(&config.tmux_bin, &["has-session", "-t", name], None)
        .map(|output| output.status.success())
        .unwrap_or(false)
}

pub(crate) fn inside_tmux() -> bool {
    env::var("TMUX").is_ok_and(|value| !value.is_empty())
}

/// Create a detached session rooted at `dir` with the three standard
/// windows, leaving the first one selected.
pub(crate) fn create_session(config: &Config, name: &str, dir: &Path) -> Result<()> {
    let dir_str = path_to_str(dir)?;
    tmux_checked(
        config,
        &[
            "new-session",
            "-d",
            "-s",
            name,
            "-c",
            dir_str,
            "-n",
            TMUX_WINDOW_EDITOR,
        ],
    )?;
    tmux_checked(
        config,
        &["new-window", "-t", name, "-c", dir_str, "-n", TMUX_WINDOW_SHELL],
    )?;
    tmux_checked(
        config,
        &["new-window", "-t", name, "-c", dir_str, "-n", TMUX_WINDOW_GIT],
    )?;
    tmux_checked(
        config,
        &[
            "select-window",
            "-t",
            &format!("{name}:{TMUX_WINDOW_EDITOR}"),
        ],
    )
}

/// Attach from outside tmux, or move the current client when already
/// inside one.
pub(crate) fn attach_session(config: &Config, name: &str) -> Result<()> {
    if inside_tmux() {
        tmux_checked(config, &["switch-client", "-t", name])
    } else {
        run_stream(&config.tmux_bin, &["attach-session", "-t", name], None)
    }
}

fn tmux_checked(config: &Config, args: &[&str]) -> Result<()> {
    let output = run_capture(&config.tmux_bin, args, None)?;
    if !output.status.success() {
        bail!(
            "`{} {}` failed: {}",
            config.tmux_bin,
            args.join(" "),
            best_error_line(&output.stderr)
        );
    }
    Ok(())
}
