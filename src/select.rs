use crate::process::run_filter;
use anyhow::Result;

/// One interactive fuzzy choice over a candidate sequence. Implementations
/// block until the user confirms or cancels; cancel maps to `None`.
/// Stateless across calls.
pub(crate) trait Selector {
    fn choose(&self, candidates: &[String]) -> Result<Option<String>>;
}

/// Shells out to an fzf-style line filter: candidates on stdin, the chosen
/// line on stdout, interaction on the terminal.
#[derive(Debug, Clone)]
pub(crate) struct FzfSelector {
    bin: String,
}

impl FzfSelector {
    pub(crate) fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Selector for FzfSelector {
    fn choose(&self, candidates: &[String]) -> Result<Option<String>> {
        let mut input = candidates.join("\n");
        if !input.is_empty() {
            input.push('\n');
        }
        let output = run_filter(&self.bin, &[], &input)?;
        // Non-zero finder exit means cancel or no match, not a failure.
        if !output.status.success() {
            return Ok(None);
        }
        let chosen = output.stdout.trim_end_matches('\n');
        if chosen.is_empty() {
            Ok(None)
        } else {
            Ok(Some(chosen.to_string()))
        }
    }
}
