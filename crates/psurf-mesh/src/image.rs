//! Lookup of texture image files by name.

use std::path::{Path, PathBuf};

use log::debug;
use psurf_core::{PsurfError, Result};

/// Extensions tried, in order, when a name is given without one.
pub const RASTER_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Resolves an image asset name to a file path.
pub trait ImageResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf>;
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> Result<PathBuf>,
{
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        self(name)
    }
}

/// Searches a list of asset directories.
///
/// A name that already points at an existing file is returned as is.
/// Otherwise each directory is tried with the bare name and then with each
/// of [`RASTER_EXTENSIONS`] appended.
#[derive(Debug, Clone, Default)]
pub struct AssetDirectories {
    dirs: Vec<PathBuf>,
}

impl AssetDirectories {
    pub fn new(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.push(dir.into());
    }

    fn candidates<'a>(dir: &'a Path, name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        std::iter::once(dir.join(name)).chain(
            RASTER_EXTENSIONS
                .into_iter()
                .map(move |ext| dir.join(format!("{name}.{ext}"))),
        )
    }
}

impl ImageResolver for AssetDirectories {
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let direct = Path::new(name);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }
        for dir in &self.dirs {
            if let Some(found) = Self::candidates(dir, name).find(|p| p.is_file()) {
                debug!("resolved image '{}' to {}", name, found.display());
                return Ok(found);
            }
        }
        Err(PsurfError::NotFound(format!("image '{name}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolves_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("earth.png"), b"png").unwrap();

        let assets = AssetDirectories::new([dir.path()]);
        assert_eq!(assets.resolve("earth").unwrap(), dir.path().join("earth.png"));
        assert_eq!(assets.resolve("earth.png").unwrap(), dir.path().join("earth.png"));
    }

    #[test]
    fn test_searches_directories_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("moon.jpg"), b"jpg").unwrap();

        let mut assets = AssetDirectories::default();
        assets.push(first.path());
        assets.push(second.path());
        assert_eq!(assets.resolve("moon").unwrap(), second.path().join("moon.jpg"));
    }

    #[test]
    fn test_direct_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("checker.gif");
        fs::write(&file, b"gif").unwrap();
        let name = file.to_str().unwrap();
        assert_eq!(AssetDirectories::default().resolve(name).unwrap(), file);
    }

    #[test]
    fn test_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetDirectories::new([dir.path()]);
        assert!(matches!(assets.resolve("nowhere"), Err(PsurfError::NotFound(_))));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |name: &str| -> Result<PathBuf> { Ok(PathBuf::from("/assets").join(name)) };
        assert_eq!(resolver.resolve("a.png").unwrap(), PathBuf::from("/assets/a.png"));
    }
}
