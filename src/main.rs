//! `dlaunch`: pick an application from the installed desktop entries with
//! dmenu and launch it.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use commands::config::ConfigAction;
use dlaunch::{logging, Config};

#[derive(Parser)]
#[command(
    name = "dlaunch",
    about = "Pick a desktop application with dmenu and launch it"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalArgs {
    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Directory to search for .desktop files (repeatable; replaces the defaults)
    #[arg(long = "root", value_name = "DIR", global = true)]
    roots: Vec<PathBuf>,

    /// Continue with partial results when a directory cannot be read
    #[arg(long, global = true)]
    keep_going: bool,

    /// Override a configuration value (e.g. picker.lines=20)
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    overrides: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover entries, show the picker and launch the choice (default)
    Pick,

    /// Print the picker labels of all discovered entries
    List,

    /// Launch an entry by its picker label, or a program by name
    Run {
        /// Picker label or program name
        #[arg(value_name = "LABEL")]
        label: String,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl GlobalArgs {
    fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            i8::try_from(self.verbose).unwrap_or(i8::MAX)
        }
    }

    fn config(&self) -> Result<Config> {
        let mut config = Config::default();
        for assignment in &self.overrides {
            config.apply_override(assignment)?;
        }
        if !self.roots.is_empty() {
            config.discovery.roots.clone_from(&self.roots);
        }
        if self.keep_going {
            config.discovery.keep_going = true;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbosity());
    let config = cli.global.config()?;

    match cli.command.unwrap_or(Commands::Pick) {
        Commands::Pick => commands::launch::cmd_pick(&config)?,
        Commands::List => commands::launch::cmd_list(&config)?,
        Commands::Run { label } => commands::launch::cmd_run(&config, &label)?,
        Commands::Config { action } => commands::config::cmd_config(&config, action)?,
    }

    Ok(())
}
