//! Command scripts for the replay driver
//!
//! One command per line, optionally followed by a repeat count. `#` starts a comment.
//!
//! ```text
//! start
//! moveLeft 3
//! rotateRight
//! tick 10   # let gravity run
//! dropDown
//! ```

use anyhow::{bail, Context, Result};

use tetris_rules::types::Command;

/// One parsed script line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub command: Command,
    pub repeat: u32,
}

pub fn parse(source: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let mut words = text.split_whitespace();
        let Some(name) = words.next() else {
            continue;
        };
        let command = Command::from_str(name)
            .with_context(|| format!("line {line}: unknown command `{name}`"))?;
        let repeat = match words.next() {
            Some(count) => count
                .parse::<u32>()
                .with_context(|| format!("line {line}: bad repeat count `{count}`"))?,
            None => 1,
        };
        if let Some(extra) = words.next() {
            bail!("line {line}: unexpected `{extra}` after repeat count");
        }

        steps.push(Step {
            line,
            command,
            repeat,
        });
    }

    Ok(steps)
}
