use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::launcher::lookup;

mod parse;

#[cfg(test)]
mod tests;

/// Section of a desktop file that holds the launcher fields.
pub const SECTION: &str = "Desktop Entry";

/// File extension that marks a desktop file.
pub const EXTENSION: &str = "desktop";

/// The `Type` of a desktop entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntryKind {
    /// `Type=Application`, the only kind that carries a command.
    Application,
    /// `Type=Link`
    Link,
    /// `Type=Directory`
    Directory,
    /// Any other non-empty value.
    Other(String),
    /// No `Type` key.
    #[default]
    Unspecified,
}

impl EntryKind {
    fn parse(value: &str) -> Self {
        match value {
            "" => Self::Unspecified,
            "Application" => Self::Application,
            "Link" => Self::Link,
            "Directory" => Self::Directory,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One launcher definition, read from one `.desktop` file.
///
/// String fields keep the raw on-disk value; flags such as `terminal` only
/// count as set when they are the literal string `"true"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopEntry {
    /// File this entry was read from.
    pub path: PathBuf,
    /// `Name`
    pub name: String,
    /// `GenericName`
    pub generic_name: String,
    /// `Comment`
    pub comment: String,
    /// `Icon`
    pub icon: String,
    /// `Exec`, unparsed.
    pub exec: String,
    /// `Path`: working directory for the launched program.
    pub working_dir: String,
    /// `Terminal`
    pub terminal: String,
    /// `Hidden`
    pub hidden: String,
    /// `NoDisplay`
    pub no_display: String,
    /// `TryExec`, as written in the file.
    pub try_exec: String,
    /// Absolute path `try_exec` resolved to, once validated.
    pub try_exec_path: Option<PathBuf>,
    /// `Type`
    pub kind: EntryKind,
    /// `Keywords`, split on `;`.
    pub keywords: Vec<String>,
}

/// Read and validate the desktop file at `path`.
///
/// Returns `Ok(None)` for entries that exist but must not be offered: hidden
/// ones, and ones whose `TryExec` program is not on `PATH`. Bytes that are not
/// UTF-8 are replaced rather than rejected. Unreadable files and files without
/// a `[Desktop Entry]` section are errors.
pub fn load(path: &Path) -> Result<Option<DesktopEntry>> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // Legacy files carry Latin-1 localized values; keep the rest readable.
    let text = String::from_utf8_lossy(&bytes);
    DesktopEntry::parse(path, &text)?.admit()
}

impl DesktopEntry {
    /// Project the `[Desktop Entry]` section of `text` onto an entry.
    /// No filtering happens here; see [`load`].
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let mut fields = parse::read_section(path, text, SECTION)?.ok_or_else(|| {
            Error::MissingSection {
                path: path.to_path_buf(),
            }
        })?;
        let mut take = |key: &str| fields.remove(key).unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            name: take("Name"),
            generic_name: take("GenericName"),
            comment: take("Comment"),
            icon: take("Icon"),
            exec: take("Exec"),
            working_dir: take("Path"),
            terminal: take("Terminal"),
            hidden: take("Hidden"),
            no_display: take("NoDisplay"),
            try_exec: take("TryExec"),
            try_exec_path: None,
            kind: EntryKind::parse(&take("Type")),
            keywords: split_list(&take("Keywords")),
        })
    }

    /// Apply the visibility and `TryExec` filters.
    fn admit(mut self) -> Result<Option<Self>> {
        if self.hidden == "true" || self.no_display == "true" {
            return Ok(None);
        }
        if !self.try_exec.is_empty() {
            match lookup(&self.try_exec) {
                Ok(resolved) => self.try_exec_path = Some(resolved),
                Err(e) => {
                    debug!(path = %self.path.display(), "skipping entry: {e}");
                    return Ok(None);
                }
            }
        }
        Ok(Some(self))
    }

    /// Whether the entry asks to be run inside a terminal emulator.
    pub fn runs_in_terminal(&self) -> bool {
        self.terminal == "true"
    }

    /// Label shown in the picker for this entry.
    pub fn display_key(&self) -> String {
        compose_key(&self.name, &self.generic_name, &self.comment)
    }
}

/// Build a picker label out of an entry's `Name`, `GenericName` and
/// `Comment`, dropping whichever of the latter two are empty.
pub fn compose_key(name: &str, generic_name: &str, comment: &str) -> String {
    match (generic_name.is_empty(), comment.is_empty()) {
        (false, false) => format!("{name} ({generic_name}; {comment})"),
        (true, false) => format!("{name} ({comment})"),
        (false, true) => format!("{name} ({generic_name})"),
        (true, true) => name.to_string(),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

