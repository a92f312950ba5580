use std::fmt;
use std::path::PathBuf;

use crate::config::TerminalConfig;
use crate::entry::DesktopEntry;
use crate::error::{Error, Result};


/// A resolved command, ready to hand to [`crate::launcher::launch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Program to run: a name looked up on `PATH`, or a path.
    pub program: String,
    /// Arguments passed to `program`.
    pub args: Vec<String>,
    /// Working directory; `None` inherits the caller's.
    pub working_dir: Option<PathBuf>,
}

impl LaunchPlan {
    /// Expand `entry`'s `Exec` field and wrap it in `terminal` if the entry
    /// asks for one.
    pub fn from_entry(entry: &DesktopEntry, terminal: &TerminalConfig) -> Result<Self> {
        let mut tokens = Vec::new();
        if entry.runs_in_terminal() {
            tokens.push(terminal.command.clone());
            if !terminal.exec_flag.is_empty() {
                tokens.push(terminal.exec_flag.clone());
            }
        }
        tokens.extend(expand(entry));

        let mut tokens = tokens.into_iter();
        let program = tokens.next().ok_or_else(|| Error::EmptyCommand {
            path: entry.path.clone(),
        })?;

        Ok(Self {
            program,
            args: tokens.collect(),
            working_dir: (!entry.working_dir.is_empty())
                .then(|| PathBuf::from(&entry.working_dir)),
        })
    }

    /// Program followed by its arguments.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
    }
}

impl fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.tokens();
        if let Some(first) = tokens.next() {
            f.write_str(first)?;
        }
        for token in tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}

/// Split `entry.exec` on single spaces and expand its field codes.
///
/// There is no quoting: `sh -c "a b"` yields `sh`, `-c`, `"a`, `b"`. File and
/// URL codes (`%f %F %u %U`) expand to nothing since only bare launches are
/// supported, as do unknown codes and a lone `%`.
pub fn expand(entry: &DesktopEntry) -> Vec<String> {
    let mut out = Vec::new();
    for token in entry.exec.split(' ') {
        expand_token(token, entry, &mut out);
    }
    out
}

fn expand_token(token: &str, entry: &DesktopEntry, out: &mut Vec<String>) {
    let bytes = token.as_bytes();
    match bytes {
        [] | [b'%'] => {}
        [b'%', b'%', ..] => out.push(format!("%{}", &token[2..])),
        [b'%', b'c', ..] => out.push(entry.name.clone()),
        [b'%', b'k', ..] => out.push(entry.path.display().to_string()),
        [b'%', b'i', ..] => {
            if !entry.icon.is_empty() {
                out.push("--icon".into());
                out.push(entry.icon.clone());
            }
        }
        // %f %F %u %U and anything unrecognised
        [b'%', ..] => {}
        _ => out.push(token.to_string()),
    }
}
