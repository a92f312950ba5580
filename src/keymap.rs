//! Keyboard layout switching for the `dxkbmap` helper.

use std::process::Command;

use tracing::{info, warn};

/// Layouts offered when none are given on the command line.
pub const DEFAULT_LAYOUTS: [&str; 5] = ["pl", "el", "de", "ru", "hr"];

/// Shell commands that switch to `layout` and restore the local tweaks
/// that `setxkbmap` resets. An empty layout only restores the tweaks.
pub fn commands(layout: &str) -> Vec<String> {
    let mut commands = Vec::with_capacity(3);
    if !layout.is_empty() {
        commands.push(format!("setxkbmap {layout}"));
    }
    commands.push("xmodmap ~/.xmodmap".to_string());
    commands.push("setxkbmap -option ctrl:nocaps".to_string());
    commands
}

/// Run each of [`commands`] through `sh -c`, in order.
///
/// A failing command prints a warning but does not stop the rest. Returns
/// the number of commands that exited successfully.
pub fn apply(layout: &str) -> usize {
    commands(layout)
        .iter()
        .filter(|script| run_shell(script))
        .count()
}

fn run_shell(script: &str) -> bool {
    info!(%script, "running");
    match Command::new("/bin/sh").arg("-c").arg(script).status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!(%script, "exited with status {:?}", status.code());
            false
        }
        Err(e) => {
            warn!(%script, "failed to run: {e}");
            false
        }
    }
}
