use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use super::Config;
use crate::launcher::lookup;

impl Config {
    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        let value = match key {
            "discovery.roots" => self
                .discovery
                .roots
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(":"),
            "discovery.keep_going" => self.discovery.keep_going.to_string(),
            "terminal.command" => self.terminal.command.clone(),
            "terminal.exec_flag" => self.terminal.exec_flag.clone(),
            "picker.command" => self.picker.command.clone(),
            "picker.lines" => self.picker.lines.to_string(),
            "picker.prompt" => self.picker.prompt.clone().unwrap_or_default(),
            "picker.case_insensitive" => self.picker.case_insensitive.to_string(),
            "picker.bottom" => self.picker.bottom.to_string(),
            "picker.early_grab" => self.picker.early_grab.to_string(),
            _ => bail!("Unknown config key: {key}"),
        };
        Ok(value)
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "discovery.roots" => {
                self.discovery.roots = std::env::split_paths(value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect();
            }
            "discovery.keep_going" => self.discovery.keep_going = parse_bool(value)?,
            "terminal.command" => self.terminal.command = non_empty(key, value)?,
            "terminal.exec_flag" => self.terminal.exec_flag = non_empty(key, value)?,
            "picker.command" => self.picker.command = non_empty(key, value)?,
            "picker.lines" => {
                self.picker.lines = value
                    .parse()
                    .with_context(|| format!("Invalid line count: {value}"))?;
            }
            "picker.prompt" => {
                self.picker.prompt = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            "picker.case_insensitive" => self.picker.case_insensitive = parse_bool(value)?,
            "picker.bottom" => self.picker.bottom = parse_bool(value)?,
            "picker.early_grab" => self.picker.early_grab = parse_bool(value)?,
            _ => bail!("Unknown config key: {key}"),
        }
        Ok(())
    }

    /// Apply a `KEY=VALUE` override, as given to `--set`.
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .with_context(|| format!("Expected KEY=VALUE, got: {assignment}"))?;
        self.set_value(key.trim(), value.trim())
    }

    /// Locate the terminal emulator on `PATH`. A launch run cannot start
    /// without one.
    pub fn resolve_terminal(&self) -> Result<PathBuf> {
        lookup(&self.terminal.command)
            .with_context(|| format!("Terminal emulator {} is required", self.terminal.command))
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    value
        .parse::<bool>()
        .with_context(|| format!("Invalid boolean value: {value}"))
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        bail!("{key} cannot be empty");
    }
    Ok(value.to_string())
}
