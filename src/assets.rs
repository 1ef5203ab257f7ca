//! Asset lookup
//!
//! A packaged build ships an `assets/` directory next to the executable;
//! a development checkout reads `./assets` from the working directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const ASSETS_DIR: &str = "assets";
pub const BANNER_FILE: &str = "banner.txt";

/// Strategy for turning an asset name into a filesystem path
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, name: &str) -> PathBuf;

    /// Read an asset as UTF-8 text
    fn read_to_string(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.resolve(name))
    }
}

/// Assets bundled next to the executable
#[derive(Clone, Debug)]
pub struct BundledAssets {
    root: PathBuf,
}

impl BundledAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<exe dir>/assets`, if the executable path is known
    pub fn beside_executable() -> Option<Self> {
        let exe = std::env::current_exe().ok()?;
        let dir = exe.parent()?;
        Some(Self::new(dir.join(ASSETS_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetResolver for BundledAssets {
    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Assets under the current working directory
#[derive(Clone, Debug, Default)]
pub struct WorkingDirAssets;

impl AssetResolver for WorkingDirAssets {
    fn resolve(&self, name: &str) -> PathBuf {
        Path::new(ASSETS_DIR).join(name)
    }
}

/// Pick a resolver at startup.
///
/// An explicit directory wins; otherwise the bundle beside the executable
/// is used when it exists, falling back to the working directory.
pub fn select_resolver(explicit: Option<PathBuf>) -> Box<dyn AssetResolver> {
    if let Some(dir) = explicit {
        return Box::new(BundledAssets::new(dir));
    }
    match BundledAssets::beside_executable() {
        Some(bundle) if bundle.root().is_dir() => {
            tracing::debug!(root = %bundle.root().display(), "using bundled assets");
            Box::new(bundle)
        }
        _ => Box::new(WorkingDirAssets),
    }
}

/// Banner art, or `None` when the asset is missing or empty
pub fn load_banner(resolver: &dyn AssetResolver) -> Option<String> {
    match resolver.read_to_string(BANNER_FILE) {
        Ok(text) if !text.trim().is_empty() => Some(text.trim_end().to_string()),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "no banner asset");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_resolves_under_root() {
        let assets = BundledAssets::new("/opt/widget/assets");
        assert_eq!(
            assets.resolve("banner.txt"),
            PathBuf::from("/opt/widget/assets/banner.txt")
        );
    }

    #[test]
    fn test_working_dir_is_relative() {
        assert_eq!(
            WorkingDirAssets.resolve("banner.txt"),
            PathBuf::from("assets/banner.txt")
        );
    }

    #[test]
    fn test_load_banner_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(BANNER_FILE), "HAVA\n\n").unwrap();

        let resolver = select_resolver(Some(dir.path().to_path_buf()));

        assert_eq!(load_banner(resolver.as_ref()).as_deref(), Some("HAVA"));
    }

    #[test]
    fn test_load_banner_missing_or_blank() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = BundledAssets::new(dir.path());
        assert_eq!(load_banner(&resolver), None);

        fs::write(dir.path().join(BANNER_FILE), "  \n").unwrap();
        assert_eq!(load_banner(&resolver), None);
    }
}
