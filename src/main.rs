//! `BreakGap` - daily usage limit reminder
//!
//! Shows a daily-limit break window once the configured amount of computer
//! time has been used, with a status indicator reflecting the operation mode.

mod common;
mod console;
mod i18n;
mod state;
mod timer;
mod ui;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use common::Config;
use state::OperationMode;

#[derive(Parser, Debug)]
#[command(version, about = "Daily usage limit break reminder")]
struct Cli {
    /// Daily limit in minutes
    #[arg(long)]
    limit: Option<u64>,

    /// Minutes added by Postpone
    #[arg(long)]
    postpone: Option<u64>,

    /// Grab input while the limit window is shown
    #[arg(long)]
    insist: bool,

    /// Show the limit window without Skip and Postpone
    #[arg(long)]
    no_skip: bool,

    /// Initial operation mode (normal, suspended, quiet)
    #[arg(long, default_value = "normal")]
    mode: OperationMode,

    /// Extra directory searched for icons
    #[arg(long)]
    icon_dir: Option<PathBuf>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(limit) = self.limit {
            config.daily_limit_minutes = limit;
        }
        if let Some(postpone) = self.postpone {
            config.postpone_minutes = postpone;
        }
        if self.insist {
            config.insist_break = true;
        }
        if self.no_skip {
            config.ignorable = false;
        }
        if let Some(dir) = &self.icon_dir {
            config.icon_dir = Some(dir.clone());
        }
        Config::validate(config)
    }
}

fn main() {
    let cli = Cli::parse();
    common::log::init(cli.verbose);

    let config = cli.apply(Config::load());
    if cli.save {
        match config.save() {
            Ok(()) => info!("settings saved"),
            Err(e) => error!("failed to save settings: {e}"),
        }
    }

    console::run(config, cli.mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "breakgap", "--limit", "90", "--insist", "--no-skip", "--mode", "quiet",
        ]);
        let config = cli.apply(Config::default());
        assert_eq!(config.daily_limit_minutes, 90);
        assert_eq!(config.postpone_minutes, Config::DEFAULT_POSTPONE_MINUTES);
        assert!(config.insist_break);
        assert!(!config.ignorable);
        assert_eq!(cli.mode, OperationMode::Quiet);
    }

    #[test]
    fn test_cli_values_are_clamped() {
        let cli = Cli::parse_from(["breakgap", "--limit", "0"]);
        let config = cli.apply(Config::default());
        assert_eq!(config.daily_limit_minutes, Config::MIN_DAILY_LIMIT_MINUTES);
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["breakgap", "--mode", "loud"]).is_err());
    }
}
