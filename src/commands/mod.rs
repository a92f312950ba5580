/// `dlaunch config`
pub mod config;
/// Discovery and launching subcommands.
pub mod launch;
