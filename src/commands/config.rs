use anyhow::Result;
use clap::Subcommand;
use dlaunch::Config;

/// Actions of `dlaunch config`.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print one configuration value (e.g. picker.lines)
    Get {
        /// Dot-separated key
        key: String,
    },
}

/// Print configuration values.
pub fn cmd_config(config: &Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => print!("{}", config.to_toml()?),
        ConfigAction::Get { key } => println!("{}", config.get_value(&key)?),
    }
    Ok(())
}
