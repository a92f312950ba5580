//! Discover freedesktop desktop entries, offer them through a dmenu-style
//! picker and launch the chosen one.

/// Picker labels mapped back to entries.
pub mod catalog;
/// Runtime configuration.
pub mod config;
pub mod discovery;
/// Reading and filtering `.desktop` files.
pub mod entry;
mod error;
/// `Exec` field expansion.
pub mod exec;
pub mod keymap;
/// Starting and reaping child processes.
pub mod launcher;
/// Log output setup.
pub mod logging;
/// The external dmenu-style picker.
pub mod picker;

pub use catalog::{Catalog, Selection};
pub use config::Config;
pub use entry::DesktopEntry;
pub use error::{Error, Result};
pub use exec::LaunchPlan;
pub use picker::Picker;
