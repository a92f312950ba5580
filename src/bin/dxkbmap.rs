//! `dxkbmap`: pick a keyboard layout with dmenu and switch to it.

use anyhow::{Context, Result};
use clap::Parser;

use dlaunch::config::PickerConfig;
use dlaunch::{keymap, logging, Picker};

#[derive(Parser)]
#[command(name = "dxkbmap", about = "Pick a keyboard layout with dmenu and switch to it")]
struct Cli {
    /// Layouts to offer
    #[arg(value_name = "LAYOUT")]
    layouts: Vec<String>,

    /// Picker program
    #[arg(long, default_value = "dmenu")]
    picker: String,

    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(i8::try_from(cli.verbose).unwrap_or(i8::MAX));

    let picker = Picker::new(&PickerConfig {
        command: cli.picker,
        lines: 0,
        prompt: Some("setxkbmap".into()),
        case_insensitive: false,
        ..PickerConfig::default()
    })
    .context("A dmenu-compatible picker is required")?;

    let layouts = if cli.layouts.is_empty() {
        keymap::DEFAULT_LAYOUTS.iter().map(ToString::to_string).collect()
    } else {
        cli.layouts
    };

    let choice = picker.choose(layouts);
    keymap::apply(choice.trim());
    Ok(())
}
