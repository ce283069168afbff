//! Stdin commands.

use std::io::{self, BufRead};
use std::str::FromStr;
use std::thread;

use crossbeam_channel::{Receiver, unbounded};
use tracing::warn;

use crate::common::AppError;
use crate::state::OperationMode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Skip,
    Postpone,
    Mode(OperationMode),
    TrayActivate,
    TrayMenu,
    TrayShow,
    TrayHide,
    /// Simulated notification-area resize.
    TrayResize(u32),
    /// Simulated click on the balloon with this id.
    BalloonClick(String),
    /// Simulated restart of the notification area.
    TaskbarCreated,
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let head = parts.next().unwrap_or_default();
        match head {
            "s" | "skip" => Ok(Self::Skip),
            "p" | "postpone" => Ok(Self::Postpone),
            "t" | "tray" => Ok(Self::TrayActivate),
            "r" | "menu" => Ok(Self::TrayMenu),
            "v" | "show" => Ok(Self::TrayShow),
            "h" | "hide" => Ok(Self::TrayHide),
            "c" | "taskbar" => Ok(Self::TaskbarCreated),
            "i" | "status" => Ok(Self::Status),
            "q" | "quit" => Ok(Self::Quit),
            "m" | "mode" => {
                let mode = argument(parts.next(), "mode")?;
                Ok(Self::Mode(mode.parse()?))
            }
            "z" | "resize" => {
                let size = argument(parts.next(), "resize")?;
                size.parse()
                    .map(Self::TrayResize)
                    .map_err(|_| AppError::Config(format!("invalid size: {size:?}")))
            }
            "b" | "balloon" => {
                let id = argument(parts.next(), "balloon")?;
                Ok(Self::BalloonClick(id.to_string()))
            }
            other => Err(AppError::Config(format!("unknown command: {other:?}"))),
        }
    }
}

fn argument<'a>(arg: Option<&'a str>, command: &str) -> Result<&'a str, AppError> {
    arg.ok_or_else(|| AppError::Config(format!("{command} needs an argument")))
}

/// Reads commands from stdin on a helper thread. The channel disconnects at
/// end of input.
pub fn spawn_stdin_reader() -> Receiver<Command> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(cmd) => {
                    if tx.send(cmd).is_err() {
                        break;
                    }
                }
                Err(e) => warn!("{e}"),
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("s".parse::<Command>().unwrap(), Command::Skip);
        assert_eq!("postpone".parse::<Command>().unwrap(), Command::Postpone);
        assert_eq!(
            "m quiet".parse::<Command>().unwrap(),
            Command::Mode(OperationMode::Quiet)
        );
        assert_eq!("  t ".parse::<Command>().unwrap(), Command::TrayActivate);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("h".parse::<Command>().unwrap(), Command::TrayHide);
        assert_eq!("v".parse::<Command>().unwrap(), Command::TrayShow);
        assert_eq!("c".parse::<Command>().unwrap(), Command::TaskbarCreated);
        assert_eq!("i".parse::<Command>().unwrap(), Command::Status);
        assert_eq!("z 24".parse::<Command>().unwrap(), Command::TrayResize(24));
        assert_eq!(
            "b daily-limit".parse::<Command>().unwrap(),
            Command::BalloonClick("daily-limit".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("m".parse::<Command>().is_err());
        assert!("m loud".parse::<Command>().is_err());
        assert!("x".parse::<Command>().is_err());
        assert!("z".parse::<Command>().is_err());
        assert!("z big".parse::<Command>().is_err());
        assert!("b".parse::<Command>().is_err());
    }
}
