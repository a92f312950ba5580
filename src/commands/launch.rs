use anyhow::{Context, Result};
use tracing::{debug, error, info};

use dlaunch::{discovery, launcher, Catalog, Config, Picker};

/// Discover, ask the picker, launch.
pub fn cmd_pick(config: &Config) -> Result<()> {
    config.resolve_terminal()?;
    let picker = Picker::new(&config.picker).context("A dmenu-compatible picker is required")?;

    let catalog = collect(config)?;
    let choice = picker.choose(catalog.keys());
    launch_choice(config, &catalog, &choice);
    Ok(())
}

/// Launch `label` as if it had been picked.
pub fn cmd_run(config: &Config, label: &str) -> Result<()> {
    config.resolve_terminal()?;
    let catalog = collect(config)?;
    launch_choice(config, &catalog, label);
    Ok(())
}

/// Print every picker label, sorted.
pub fn cmd_list(config: &Config) -> Result<()> {
    let catalog = collect(config)?;
    for key in catalog.keys() {
        println!("{key}");
    }
    Ok(())
}

fn collect(config: &Config) -> Result<Catalog> {
    let discovery = discovery::discover(&config.discovery.roots);
    let catalog = Catalog::collect(discovery, config.discovery.keep_going)
        .context("Desktop entry discovery failed")?;
    debug!(entries = catalog.len(), "catalog ready");
    Ok(catalog)
}

/// Launch whatever `choice` names. Failures are logged, never returned: the
/// run still counts as a success when nothing could be started.
fn launch_choice(config: &Config, catalog: &Catalog, choice: &str) {
    match launcher::launch_selection(&catalog.resolve(choice), &config.terminal) {
        // The handle is dropped; the reaper thread still collects the child.
        Ok(Some(handle)) => info!(program = handle.program(), pid = handle.pid(), "started"),
        Ok(None) => debug!("nothing selected"),
        Err(e) => error!("{e}"),
    }
}
