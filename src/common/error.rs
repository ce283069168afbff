//! Application error types.

use thiserror::Error;

use crate::ui::assets::SearchPath;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or unusable configuration
    #[error("config error: {0}")]
    Config(String),
    /// Asset could not be located on any search path
    #[error("asset not found: {name} ({category})")]
    AssetNotFound { name: String, category: SearchPath },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_not_found_message() {
        let err = AppError::AssetNotFound {
            name: "daily_limit.png".to_string(),
            category: SearchPath::Images,
        };
        assert_eq!(err.to_string(), "asset not found: daily_limit.png (images)");
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> AppResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(AppError::Io(_))));
    }
}
