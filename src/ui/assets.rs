//! Asset lookup and icon loading.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::common::{AppError, AppResult};

/// Environment variable naming an extra data directory.
pub const DATA_DIR_ENV: &str = "BREAKGAP_DATA_DIR";

/// Category of asset, mapped to a sub-directory of every search root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPath {
    Images,
}

impl SearchPath {
    pub const fn subdir(self) -> &'static str {
        match self {
            Self::Images => "images",
        }
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subdir())
    }
}

/// Locates asset files by name.
pub trait AssetResolver {
    fn resolve(&self, filename: &str, category: SearchPath) -> AppResult<PathBuf>;
}

/// Filesystem resolver over an ordered list of root directories.
#[derive(Clone, Debug, Default)]
pub struct SearchPathResolver {
    roots: Vec<PathBuf>,
}

impl SearchPathResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Standard roots: `extra` first, then `$BREAKGAP_DATA_DIR`, the user data
    /// directory, `share/breakgap` next to the executable and `./assets`.
    pub fn with_defaults(extra: Option<PathBuf>) -> Self {
        let mut roots = Vec::new();
        roots.extend(extra);
        if let Some(dir) = env::var_os(DATA_DIR_ENV) {
            roots.push(PathBuf::from(dir));
        }
        if let Some(mut dir) = dirs::data_dir() {
            dir.push("breakgap");
            roots.push(dir);
        }
        if let Some(prefix) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        {
            roots.push(prefix.join("share").join("breakgap"));
        }
        roots.push(PathBuf::from("assets"));
        Self::new(roots)
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl AssetResolver for SearchPathResolver {
    fn resolve(&self, filename: &str, category: SearchPath) -> AppResult<PathBuf> {
        for root in &self.roots {
            for candidate in [root.join(category.subdir()).join(filename), root.join(filename)] {
                if candidate.is_file() {
                    debug!("resolved {filename} to {}", candidate.display());
                    return Ok(candidate);
                }
            }
        }
        Err(AppError::AssetNotFound {
            name: filename.to_string(),
            category,
        })
    }
}

/// Decoded RGBA image handed to the toolkit.
#[derive(Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Icon {
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let rgba = image::open(path)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        let name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        Ok(Self {
            name,
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Resolve and decode an image, logging and swallowing any failure.
pub fn load_icon(resolver: &dyn AssetResolver, filename: &str) -> Option<Icon> {
    let loaded = resolver
        .resolve(filename, SearchPath::Images)
        .and_then(|path| Icon::from_file(&path));
    match loaded {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!("could not load icon {filename}: {e}");
            None
        }
    }
}
