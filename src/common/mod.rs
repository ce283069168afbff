//! Platform-independent plumbing: configuration, errors and logging.

pub mod config;
pub mod error;
pub mod log;

pub use config::Config;
pub use error::{AppError, AppResult};
