//! Operation mode and break phase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::AppError;

/// Operation mode of the application, reflected by the status indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    #[default]
    Normal,
    Suspended,
    Quiet,
}

impl OperationMode {
    pub const COUNT: usize = 3;
    pub const ALL: [Self; Self::COUNT] = [Self::Normal, Self::Suspended, Self::Quiet];

    pub const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Suspended => 1,
            Self::Quiet => 2,
        }
    }

    /// Icon file shown in the tray for this mode.
    pub const fn icon_file(self) -> &'static str {
        match self {
            Self::Normal => "breakgap-icon-medium.png",
            Self::Suspended => "breakgap-suspended-icon-medium.png",
            Self::Quiet => "breakgap-quiet-icon-medium.png",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Suspended => "suspended",
            Self::Quiet => "quiet",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "n" => Ok(Self::Normal),
            "suspended" | "suspend" | "s" => Ok(Self::Suspended),
            "quiet" | "q" => Ok(Self::Quiet),
            other => Err(AppError::Config(format!("unknown operation mode: {other}"))),
        }
    }
}

/// Phase of the daily limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Below the limit
    Working,
    /// Limit reached, break window showing
    LimitReached,
    /// Break skipped for the rest of the day
    Dismissed,
}
