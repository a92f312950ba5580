mod ops;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use serde::Serialize;

/// Everything a run needs to know about its environment, built once at
/// startup and passed down by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Config {
    /// Where to look for desktop files.
    pub discovery: DiscoveryConfig,
    /// How to wrap `Terminal=true` entries.
    pub terminal: TerminalConfig,
    /// How to invoke the picker.
    pub picker: PickerConfig,
}

/// Settings for [`crate::discovery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryConfig {
    /// Directories walked recursively for `.desktop` files.
    pub roots: Vec<PathBuf>,
    /// Carry on with partial results when a root fails instead of aborting.
    pub keep_going: bool,
}

/// Terminal emulator used for entries with `Terminal=true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalConfig {
    /// Terminal emulator command, e.g. `x-terminal-emulator`.
    pub command: String,
    /// Flag after which the terminal takes the command to run, e.g. `-e`.
    pub exec_flag: String,
}

/// Options for the dmenu-style picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerConfig {
    /// Picker program.
    pub command: String,
    /// Number of lines to list vertically.
    pub lines: usize,
    /// Prompt shown left of the input field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Match candidates case-insensitively.
    pub case_insensitive: bool,
    /// Show the picker at the bottom of the screen.
    pub bottom: bool,
    /// Grab the keyboard before reading candidates.
    pub early_grab: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        let mut roots = vec![
            PathBuf::from("/usr/share/applications"),
            PathBuf::from("/usr/local/share/applications"),
        ];
        if let Some(home) = dirs::home_dir() {
            roots.push(home.join(".local").join("share").join("applications"));
        }
        Self {
            roots,
            keep_going: false,
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            command: "x-terminal-emulator".into(),
            exec_flag: "-e".into(),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            command: "dmenu".into(),
            lines: 10,
            prompt: None,
            case_insensitive: true,
            bottom: false,
            early_grab: true,
        }
    }
}
